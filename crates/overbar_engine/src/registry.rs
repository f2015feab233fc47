//! Live widget registry and processed markers
//!
//! The registry is mutated only by the scanner and iterated by the
//! synchronizer each frame; registration order is the update order.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use overbar_core::fsm::InteractionState;
use overbar_core::geometry::{Rect, ThumbGeometry};
use overbar_core::region::Region;
use overbar_platform::HostDocument;

new_key_type! {
    /// Stable key of a registered overlay widget
    pub struct OverlayKey;
}

/// One overlay widget and the last state pushed to the host.
///
/// A widget belongs to exactly one region for its lifetime; while the
/// region remains a candidate the widget is only ever hidden, never
/// destroyed.
pub struct OverlayWidget<H: HostDocument> {
    pub region: Region<H::NodeId>,
    pub host_widget: H::WidgetId,
    pub visible: bool,
    /// Container rectangle from the last update pass
    pub rect: Rect,
    /// Thumb geometry from the last update pass
    pub thumb: ThumbGeometry,
    pub state: InteractionState,
}

impl<H: HostDocument> OverlayWidget<H> {
    pub fn new(region: Region<H::NodeId>, host_widget: H::WidgetId) -> Self {
        Self {
            region,
            host_widget,
            visible: false,
            rect: Rect::default(),
            thumb: ThumbGeometry::default(),
            state: InteractionState::Idle,
        }
    }

    /// Track extent inside the container, between the two arrows
    pub fn track_height(&self, arrow_height: f32) -> f32 {
        (self.rect.height - 2.0 * arrow_height).max(0.0)
    }

    /// Bottom edge of the thumb in viewport coordinates
    pub fn thumb_bottom(&self, arrow_height: f32) -> f32 {
        self.rect.y + arrow_height + self.thumb.offset + self.thumb.height
    }
}

/// Ordered collection of live widgets plus the processed-marker set
pub struct Registry<H: HostDocument> {
    widgets: SlotMap<OverlayKey, OverlayWidget<H>>,
    order: SmallVec<[OverlayKey; 8]>,
    by_host: FxHashMap<H::WidgetId, OverlayKey>,
    processed: FxHashSet<Region<H::NodeId>>,
}

impl<H: HostDocument> Registry<H> {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
            order: SmallVec::new(),
            by_host: FxHashMap::default(),
            processed: FxHashSet::default(),
        }
    }

    pub fn insert(&mut self, widget: OverlayWidget<H>) -> OverlayKey {
        let host_widget = widget.host_widget;
        let key = self.widgets.insert(widget);
        self.order.push(key);
        self.by_host.insert(host_widget, key);
        key
    }

    pub fn get(&self, key: OverlayKey) -> Option<&OverlayWidget<H>> {
        self.widgets.get(key)
    }

    pub fn get_mut(&mut self, key: OverlayKey) -> Option<&mut OverlayWidget<H>> {
        self.widgets.get_mut(key)
    }

    /// Widget keys in registration order
    pub fn ordered(&self) -> SmallVec<[OverlayKey; 8]> {
        self.order.clone()
    }

    pub fn by_host_widget(&self, widget: H::WidgetId) -> Option<OverlayKey> {
        self.by_host.get(&widget).copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn is_processed(&self, region: Region<H::NodeId>) -> bool {
        self.processed.contains(&region)
    }

    pub fn mark_processed(&mut self, region: Region<H::NodeId>) {
        self.processed.insert(region);
    }

    /// Navigation reset: ruled-out regions become re-discoverable while
    /// widget-owning regions stay marked, so a rescan can never attach a
    /// second widget to a region.
    pub fn reset_processed(&mut self) {
        self.processed.clear();
        for (_, widget) in self.widgets.iter() {
            self.processed.insert(widget.region);
        }
    }
}

impl<H: HostDocument> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}
