//! Overbar Engine
//!
//! The discovery-and-synchronization core behind Overbar's synthetic
//! scrollbars:
//!
//! - **Scanner**: walks the host tree for scrollable regions and attaches
//!   one overlay widget per region
//! - **Geometry Synchronizer**: keeps every widget's track/thumb geometry
//!   in step with its region's true scroll state, one coalesced pass per
//!   animation frame
//! - **Interaction Controller**: translates pointer/wheel input on widgets
//!   back into scroll commands
//! - **Observer Bridge**: routes scroll/resize/mutation notifications into
//!   the coalesced update path or the debounced rescan path
//!
//! All document access goes through the
//! [`HostDocument`](overbar_platform::HostDocument) trait; the engine holds
//! no global state, so independent instances can serve independent
//! documents.
//!
//! # Example
//!
//! ```ignore
//! use overbar_engine::prelude::*;
//!
//! let mut engine = Engine::new(OverlayConfig::default());
//! engine.bootstrap(&mut host)?;
//!
//! // Embedder glue, on every host callback:
//! engine.notify(&mut host, notification);
//! engine.on_frame(&mut host)?;
//! engine.on_timer(&mut host, timer)?;
//! ```

pub mod engine;
pub mod registry;
pub mod schedule;
pub mod style;

mod bridge;
mod interaction;
mod scan;
mod sync;

pub use engine::Engine;
pub use registry::{OverlayKey, OverlayWidget, Registry};
pub use schedule::{AutoRepeat, CoalescePolicy, Coalescer};

pub mod prelude {
    pub use crate::engine::Engine;
    pub use overbar_core::config::OverlayConfig;
    pub use overbar_core::region::Region;
    pub use overbar_platform::{HostDocument, Notification, Result, TimerId};
}
