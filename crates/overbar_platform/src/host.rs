//! The host document capability trait
//!
//! The trait surface mirrors what an overlay scrollbar engine actually asks
//! of a live document: enumerate the tree, read computed overflow and
//! geometry, write scroll offsets, own a small overlay widget subtree per
//! region, capture pointers, and schedule deferred work. Subscriptions are
//! fire-and-forget: the host delivers activity back through
//! [`Notification`] values passed to the engine.

use std::fmt::Debug;
use std::hash::Hash;

use overbar_core::events::{PointerEvent, PointerId, WidgetPart};
use overbar_core::geometry::{Rect, ScrollMetrics, Size, ThumbGeometry};
use overbar_core::region::{OverflowPolicy, Region};

use crate::error::Result;

/// Handle for a pending host timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Activity the host reports back into the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification<N, W> {
    /// A tracked region scrolled
    Scroll(Region<N>),
    /// A tracked region (or the document root) resized
    Resize(Region<N>),
    /// The document subtree or observed attributes mutated
    Mutation,
    /// A link was activated somewhere in the document
    LinkClick,
    /// Pointer pressed on a part of an overlay widget
    PointerDown {
        widget: W,
        part: WidgetPart,
        event: PointerEvent,
    },
    /// Pointer moved anywhere in the document
    PointerMove(PointerEvent),
    /// Pointer released anywhere in the document
    PointerUp(PointerEvent),
    /// A previously captured pointer was lost
    CaptureLost { widget: W, pointer: PointerId },
    /// Wheel activity over an overlay widget; the host suppresses the
    /// native scroll and forwards the vertical delta
    Wheel { widget: W, delta: f32 },
}

/// Capabilities the engine requires from its host document
pub trait HostDocument {
    /// Identity of an element in the host tree
    type NodeId: Copy + Eq + Hash + Debug;
    /// Identity of an overlay widget subtree created by [`create_widget`]
    ///
    /// [`create_widget`]: HostDocument::create_widget
    type WidgetId: Copy + Eq + Hash + Debug;

    // ---------------------------------------------------------------------
    // Document state
    // ---------------------------------------------------------------------

    /// Whether the document is far enough along to host overlay widgets
    fn is_ready(&self) -> bool;

    /// Current viewport dimensions
    fn viewport(&self) -> Size;

    /// Every element currently in the tree, in document order
    fn nodes(&self) -> Vec<Self::NodeId>;

    /// Whether the node is still attached to the live document
    fn is_attached(&self, node: Self::NodeId) -> bool;

    /// Whether the node is the document's root or body element
    fn is_document_root(&self, node: Self::NodeId) -> bool;

    /// Computed overflow policy of an element
    fn overflow(&self, node: Self::NodeId) -> OverflowPolicy;

    /// Scroll offset, content extent, and visible extent of a region
    fn metrics(&self, region: Region<Self::NodeId>) -> ScrollMetrics;

    /// Bounding rectangle of a region in viewport coordinates; the window
    /// region reports the viewport itself
    fn bounding_rect(&self, region: Region<Self::NodeId>) -> Rect;

    /// Whether the node already carries this engine's overlay marker
    fn has_overlay_marker(&self, node: Self::NodeId) -> bool;

    /// Whether the node hosts a recognized third-party custom scrollbar
    fn has_foreign_scrollbar(&self, node: Self::NodeId) -> bool;

    // ---------------------------------------------------------------------
    // Scroll control
    // ---------------------------------------------------------------------

    /// Jump a region to an absolute offset, unanimated
    fn set_scroll_offset(&mut self, region: Region<Self::NodeId>, offset: f32);

    /// Scroll a region by a delta, unanimated
    fn scroll_by(&mut self, region: Region<Self::NodeId>, delta: f32);

    // ---------------------------------------------------------------------
    // Overlay widgets
    // ---------------------------------------------------------------------

    /// Inject the overlay stylesheet at most once per document.
    ///
    /// Returns `false` when the stylesheet was already present.
    fn inject_stylesheet(&mut self, css: &str) -> Result<bool>;

    /// Create the overlay subtree (container, two arrows, track, thumb)
    /// for a region, outside normal layout flow
    fn create_widget(&mut self, region: Region<Self::NodeId>) -> Result<Self::WidgetId>;

    /// Apply the marker that suppresses the region's native scrollbar
    fn suppress_native_scrollbar(&mut self, region: Region<Self::NodeId>);

    fn set_widget_visible(&mut self, widget: Self::WidgetId, visible: bool);

    /// Position the widget container at a fixed viewport rectangle
    fn place_widget(&mut self, widget: Self::WidgetId, rect: Rect);

    fn set_thumb(&mut self, widget: Self::WidgetId, thumb: ThumbGeometry);

    /// Toggle the thumb's active (dragging) visual state
    fn set_thumb_active(&mut self, widget: Self::WidgetId, active: bool);

    // ---------------------------------------------------------------------
    // Pointer capture
    // ---------------------------------------------------------------------

    fn capture_pointer(&mut self, widget: Self::WidgetId, pointer: PointerId);

    fn release_pointer(&mut self, widget: Self::WidgetId, pointer: PointerId);

    // ---------------------------------------------------------------------
    // Subscriptions; deliveries come back through `Notification`
    // ---------------------------------------------------------------------

    fn observe_scroll(&mut self, region: Region<Self::NodeId>);

    fn observe_resize(&mut self, region: Region<Self::NodeId>);

    /// Install the single document-wide subtree/attribute mutation observer
    fn observe_mutations(&mut self);

    // ---------------------------------------------------------------------
    // Deferred scheduling
    // ---------------------------------------------------------------------

    /// Ask for a callback on the next animation frame
    fn request_frame(&mut self);

    /// Start a one-shot timer
    fn set_timer(&mut self, delay_ms: u64) -> TimerId;

    fn cancel_timer(&mut self, timer: TimerId);
}
