//! Geometry synchronization
//!
//! One pass per animation frame positions every widget against its
//! region's current scroll state. Degenerate geometry hides the widget and
//! computes nothing further.

use overbar_core::geometry::{thumb_geometry, Rect};
use overbar_core::region::Overflow;
use overbar_platform::HostDocument;

use crate::engine::Engine;
use crate::registry::{OverlayKey, OverlayWidget};

impl<H: HostDocument> Engine<H> {
    /// Update every registered widget, in registration order
    pub(crate) fn run_update_pass(&mut self, host: &mut H) {
        for key in self.registry.ordered() {
            self.update_widget(host, key);
        }
    }

    /// Synchronize one widget with its region's current scroll state
    pub(crate) fn update_widget(&mut self, host: &mut H, key: OverlayKey) {
        let config = self.config;
        let Some(widget) = self.registry.get_mut(key) else {
            return;
        };

        // Hide conditions, first match wins.
        if let Some(node) = widget.region.element() {
            if !host.is_attached(node) {
                Self::hide(host, widget);
                return;
            }
        }

        let viewport = host.viewport();
        let rect = host.bounding_rect(widget.region);
        let clamped = rect.clamp_vertical(viewport.height);
        if clamped.height <= 0.0 {
            Self::hide(host, widget);
            return;
        }

        let metrics = host.metrics(widget.region);
        if !metrics.is_scrollable() {
            Self::hide(host, widget);
            return;
        }

        if let Some(node) = widget.region.element() {
            if host.overflow(node).y == Overflow::Hidden {
                Self::hide(host, widget);
                return;
            }
        }

        // Pin the container to the clamped rectangle's top-right edge.
        let container = Rect::new(
            rect.right() - config.width,
            clamped.y,
            config.width,
            clamped.height,
        );
        host.place_widget(widget.host_widget, container);
        widget.rect = container;

        let track = (clamped.height - 2.0 * config.arrow_height).max(0.0);
        let thumb = thumb_geometry(&metrics, track, config.min_thumb);
        host.set_thumb(widget.host_widget, thumb);
        widget.thumb = thumb;

        if !widget.visible {
            host.set_widget_visible(widget.host_widget, true);
            widget.visible = true;
        }

        tracing::trace!(
            "widget updated: offset={:.1}, thumb {:.1}px at {:.1}px, track={:.1}",
            metrics.offset,
            thumb.height,
            thumb.offset,
            track
        );
    }

    fn hide(host: &mut H, widget: &mut OverlayWidget<H>) {
        if widget.visible {
            host.set_widget_visible(widget.host_widget, false);
            widget.visible = false;
        }
    }
}
