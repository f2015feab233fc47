//! Deterministic in-memory host
//!
//! `FakeDocument` scripts a document tree and records every effect the
//! engine applies to it: widget creation and placement, scroll writes,
//! observer installs, pointer capture, stylesheet injection. Timers and
//! frame callbacks are delivered manually (`advance`,
//! `take_frame_request`), so tests control the exact interleaving of
//! notifications the engine sees.
//!
//! The fake is test tooling: widget handles it returns index into
//! [`FakeDocument::widgets`], and indexing with a foreign handle panics.

use overbar_core::events::PointerId;
use overbar_core::geometry::{Rect, ScrollMetrics, Size, ThumbGeometry};
use overbar_core::region::{OverflowPolicy, Region};

use crate::error::{PlatformError, Result};
use crate::host::{HostDocument, TimerId};

/// One scripted element
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub attached: bool,
    pub document_root: bool,
    pub overflow: OverflowPolicy,
    pub metrics: ScrollMetrics,
    pub rect: Rect,
    pub overlay_marker: bool,
    pub foreign_scrollbar: bool,
}

impl Default for FakeNode {
    fn default() -> Self {
        Self {
            attached: true,
            document_root: false,
            overflow: OverflowPolicy::default(),
            metrics: ScrollMetrics::default(),
            rect: Rect::default(),
            overlay_marker: false,
            foreign_scrollbar: false,
        }
    }
}

impl FakeNode {
    /// A vertically scrollable element filling `rect` with `content` pixels
    /// of content
    pub fn scrollable(content: f32, rect: Rect) -> Self {
        Self {
            overflow: OverflowPolicy::scroll_y(),
            metrics: ScrollMetrics {
                offset: 0.0,
                content,
                viewport: rect.height,
            },
            rect,
            ..Default::default()
        }
    }
}

/// Recorded state of one overlay widget subtree
#[derive(Debug, Clone)]
pub struct FakeWidget {
    pub region: Region<u64>,
    pub visible: bool,
    pub rect: Rect,
    pub thumb: ThumbGeometry,
    pub active: bool,
}

/// In-memory host document with manual timer/frame delivery
pub struct FakeDocument {
    pub ready: bool,
    viewport: Size,
    nodes: Vec<(u64, FakeNode)>,
    window_offset: f32,
    window_content: f32,
    pub widgets: Vec<FakeWidget>,
    pub stylesheet: Option<String>,
    pub suppressed: Vec<Region<u64>>,
    pub captured: Option<(usize, PointerId)>,
    pub scroll_observers: Vec<Region<u64>>,
    pub resize_observers: Vec<Region<u64>>,
    pub mutation_observers: u32,
    /// Every `scroll_by` the engine issued, as (region, delta)
    pub scroll_log: Vec<(Region<u64>, f32)>,
    /// Number of `place_widget` calls, across all widgets
    pub place_calls: u32,
    /// Script the next `create_widget` call to fail
    pub fail_widget_creation: bool,
    frame_requested: bool,
    now_ms: u64,
    next_timer: u64,
    timers: Vec<(TimerId, u64)>,
}

impl FakeDocument {
    pub fn new(viewport: Size) -> Self {
        Self {
            ready: true,
            viewport,
            nodes: Vec::new(),
            window_offset: 0.0,
            window_content: viewport.height,
            widgets: Vec::new(),
            stylesheet: None,
            suppressed: Vec::new(),
            captured: None,
            scroll_observers: Vec::new(),
            resize_observers: Vec::new(),
            mutation_observers: 0,
            scroll_log: Vec::new(),
            place_calls: 0,
            fail_widget_creation: false,
            frame_requested: false,
            now_ms: 0,
            next_timer: 1,
            timers: Vec::new(),
        }
    }

    /// Append a node at the end of document order
    pub fn insert_node(&mut self, id: u64, node: FakeNode) {
        self.nodes.push((id, node));
    }

    pub fn node(&self, id: u64) -> &FakeNode {
        &self
            .nodes
            .iter()
            .find(|(n, _)| *n == id)
            .expect("unknown fake node")
            .1
    }

    pub fn node_mut(&mut self, id: u64) -> &mut FakeNode {
        &mut self
            .nodes
            .iter_mut()
            .find(|(n, _)| *n == id)
            .expect("unknown fake node")
            .1
    }

    /// Remove the node from the live tree; metrics stay queryable
    pub fn detach(&mut self, id: u64) {
        self.node_mut(id).attached = false;
    }

    /// Grow or shrink the window's content extent
    pub fn set_window_content(&mut self, content: f32) {
        self.window_content = content;
        let max = (self.window_content - self.viewport.height).max(0.0);
        self.window_offset = self.window_offset.clamp(0.0, max);
    }

    pub fn widget(&self, id: usize) -> &FakeWidget {
        &self.widgets[id]
    }

    /// Consume a pending frame request, if any
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    pub fn has_frame_request(&self) -> bool {
        self.frame_requested
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Advance the fake clock and collect timers that came due, in
    /// deadline order
    pub fn advance(&mut self, ms: u64) -> Vec<TimerId> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<(TimerId, u64)> = Vec::new();
        self.timers.retain(|&(timer, deadline)| {
            if deadline <= now {
                due.push((timer, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(timer, _)| timer).collect()
    }

    fn clamp_region(&mut self, region: Region<u64>, offset: f32) {
        match region {
            Region::Window => {
                let max = (self.window_content - self.viewport.height).max(0.0);
                self.window_offset = offset.clamp(0.0, max);
            }
            Region::Element(id) => {
                let node = self.node_mut(id);
                node.metrics.offset = node.metrics.clamp_offset(offset);
            }
        }
    }
}

impl HostDocument for FakeDocument {
    type NodeId = u64;
    type WidgetId = usize;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn nodes(&self) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.attached)
            .map(|(id, _)| *id)
            .collect()
    }

    fn is_attached(&self, node: u64) -> bool {
        self.node(node).attached
    }

    fn is_document_root(&self, node: u64) -> bool {
        self.node(node).document_root
    }

    fn overflow(&self, node: u64) -> OverflowPolicy {
        self.node(node).overflow
    }

    fn metrics(&self, region: Region<u64>) -> ScrollMetrics {
        match region {
            Region::Window => ScrollMetrics {
                offset: self.window_offset,
                content: self.window_content,
                viewport: self.viewport.height,
            },
            Region::Element(id) => self.node(id).metrics,
        }
    }

    fn bounding_rect(&self, region: Region<u64>) -> Rect {
        match region {
            Region::Window => Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height),
            Region::Element(id) => self.node(id).rect,
        }
    }

    fn has_overlay_marker(&self, node: u64) -> bool {
        self.node(node).overlay_marker
    }

    fn has_foreign_scrollbar(&self, node: u64) -> bool {
        self.node(node).foreign_scrollbar
    }

    fn set_scroll_offset(&mut self, region: Region<u64>, offset: f32) {
        self.clamp_region(region, offset);
    }

    fn scroll_by(&mut self, region: Region<u64>, delta: f32) {
        let current = self.metrics(region).offset;
        self.clamp_region(region, current + delta);
        self.scroll_log.push((region, delta));
    }

    fn inject_stylesheet(&mut self, css: &str) -> Result<bool> {
        if self.stylesheet.is_some() {
            return Ok(false);
        }
        self.stylesheet = Some(css.to_owned());
        Ok(true)
    }

    fn create_widget(&mut self, region: Region<u64>) -> Result<usize> {
        if self.fail_widget_creation {
            return Err(PlatformError::WidgetCreation("scripted failure".into()));
        }
        self.widgets.push(FakeWidget {
            region,
            visible: false,
            rect: Rect::default(),
            thumb: ThumbGeometry::default(),
            active: false,
        });
        Ok(self.widgets.len() - 1)
    }

    fn suppress_native_scrollbar(&mut self, region: Region<u64>) {
        self.suppressed.push(region);
        if let Region::Element(id) = region {
            self.node_mut(id).overlay_marker = true;
        }
    }

    fn set_widget_visible(&mut self, widget: usize, visible: bool) {
        self.widgets[widget].visible = visible;
    }

    fn place_widget(&mut self, widget: usize, rect: Rect) {
        self.widgets[widget].rect = rect;
        self.place_calls += 1;
    }

    fn set_thumb(&mut self, widget: usize, thumb: ThumbGeometry) {
        self.widgets[widget].thumb = thumb;
    }

    fn set_thumb_active(&mut self, widget: usize, active: bool) {
        self.widgets[widget].active = active;
    }

    fn capture_pointer(&mut self, widget: usize, pointer: PointerId) {
        self.captured = Some((widget, pointer));
    }

    fn release_pointer(&mut self, widget: usize, pointer: PointerId) {
        if self.captured == Some((widget, pointer)) {
            self.captured = None;
        }
    }

    fn observe_scroll(&mut self, region: Region<u64>) {
        self.scroll_observers.push(region);
    }

    fn observe_resize(&mut self, region: Region<u64>) {
        self.resize_observers.push(region);
    }

    fn observe_mutations(&mut self) {
        self.mutation_observers += 1;
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn set_timer(&mut self, delay_ms: u64) -> TimerId {
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timers.push((timer, self.now_ms + delay_ms));
        timer
    }

    fn cancel_timer(&mut self, timer: TimerId) {
        self.timers.retain(|&(t, _)| t != timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut doc = FakeDocument::new(Size {
            width: 800.0,
            height: 600.0,
        });
        let slow = doc.set_timer(500);
        let fast = doc.set_timer(100);
        assert!(doc.advance(50).is_empty());
        assert_eq!(doc.advance(450), vec![fast, slow]);
        assert_eq!(doc.pending_timers(), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut doc = FakeDocument::new(Size {
            width: 800.0,
            height: 600.0,
        });
        let timer = doc.set_timer(100);
        doc.cancel_timer(timer);
        assert!(doc.advance(1000).is_empty());
    }

    #[test]
    fn scroll_writes_clamp_to_range() {
        let mut doc = FakeDocument::new(Size {
            width: 800.0,
            height: 600.0,
        });
        doc.insert_node(
            1,
            FakeNode::scrollable(2000.0, Rect::new(0.0, 0.0, 400.0, 500.0)),
        );
        doc.set_scroll_offset(Region::Element(1), 5000.0);
        assert_eq!(doc.metrics(Region::Element(1)).offset, 1500.0);
        doc.scroll_by(Region::Element(1), -9000.0);
        assert_eq!(doc.metrics(Region::Element(1)).offset, 0.0);
    }

    #[test]
    fn stylesheet_injects_once() {
        let mut doc = FakeDocument::new(Size {
            width: 800.0,
            height: 600.0,
        });
        assert!(doc.inject_stylesheet(".ob-sb {}").unwrap());
        assert!(!doc.inject_stylesheet(".ob-sb {}").unwrap());
    }
}
