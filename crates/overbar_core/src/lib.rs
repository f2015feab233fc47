//! Overbar Core
//!
//! This crate provides the foundational primitives for the Overbar overlay
//! scrollbar engine:
//!
//! - **Configuration**: the static option set resolved once per engine
//! - **Scroll Geometry**: pure thumb/track/drag math shared by the
//!   synchronizer and the interaction controller
//! - **Regions**: the window-or-element model of a scrollable area
//! - **Interaction States**: the per-widget pointer state machine
//!
//! # Example
//!
//! ```rust
//! use overbar_core::geometry::{thumb_geometry, ScrollMetrics};
//!
//! let metrics = ScrollMetrics {
//!     offset: 750.0,
//!     content: 2000.0,
//!     viewport: 500.0,
//! };
//!
//! let thumb = thumb_geometry(&metrics, 300.0, 20.0);
//! assert_eq!(thumb.height, 75.0);
//! assert_eq!(thumb.offset, 112.5);
//! ```

pub mod config;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod region;

pub use config::{Color, ConfigError, OverlayConfig};
pub use events::{Direction, PointerEvent, PointerId, PointerKind, WidgetPart};
pub use fsm::{InteractionState, StateTransitions};
pub use geometry::{thumb_geometry, Rect, ScrollMetrics, Size, ThumbGeometry};
pub use region::{Overflow, OverflowPolicy, Region};
