//! Overbar platform layer
//!
//! The engine never touches a concrete document. Everything it needs
//! (element enumeration, computed overflow, scroll metrics, overlay widget
//! manipulation, pointer capture, timers and frame callbacks) is expressed
//! by the [`HostDocument`] trait, and everything the document reports back
//! flows through [`Notification`].
//!
//! A real embedding implements the trait over its DOM (or equivalent); the
//! `fake-host` feature provides a deterministic in-memory host for tests
//! and headless demos.

pub mod error;
pub mod host;

#[cfg(any(test, feature = "fake-host"))]
pub mod fake;

pub use error::{PlatformError, Result};
pub use host::{HostDocument, Notification, TimerId};
