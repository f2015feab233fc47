//! Pointer interaction
//!
//! Translates pointer and wheel input on overlay widgets into scroll
//! commands and visual feedback. At most one drag session and one
//! auto-repeat session are live at a time; each owns the capture and
//! teardown wiring it installed.

use overbar_core::events::{
    event_types, Direction, PointerEvent, PointerId, PointerKind, WidgetPart,
};
use overbar_core::fsm::StateTransitions;
use overbar_core::geometry::{drag_target, page_direction};
use overbar_platform::HostDocument;

use crate::engine::Engine;
use crate::registry::OverlayKey;
use crate::schedule::AutoRepeat;

/// Fraction of the visible extent a track press pages by
const TRACK_PAGE_FRACTION: f32 = 0.9;

/// Live thumb drag
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    pub widget: OverlayKey,
    pub pointer: PointerId,
    pub anchor_y: f32,
    pub anchor_offset: f32,
}

impl<H: HostDocument> Engine<H> {
    pub(crate) fn on_widget_pointer_down(
        &mut self,
        host: &mut H,
        widget: H::WidgetId,
        part: WidgetPart,
        event: PointerEvent,
    ) {
        let Some(key) = self.registry.by_host_widget(widget) else {
            return;
        };
        match part {
            WidgetPart::Thumb => self.begin_drag(host, key, event),
            WidgetPart::UpArrow => self.begin_auto_repeat(host, key, Direction::Up),
            WidgetPart::DownArrow => self.begin_auto_repeat(host, key, Direction::Down),
            WidgetPart::Track => self.page_track(host, key, event),
        }
    }

    fn begin_drag(&mut self, host: &mut H, key: OverlayKey, event: PointerEvent) {
        if event.kind != PointerKind::Mouse {
            return;
        }
        if self.is_interacting() {
            return;
        }
        let Some(widget) = self.registry.get_mut(key) else {
            return;
        };
        let Some(next) = widget.state.on_event(event_types::THUMB_PRESS) else {
            return;
        };
        widget.state = next;
        let anchor_offset = host.metrics(widget.region).offset;
        host.capture_pointer(widget.host_widget, event.id);
        host.set_thumb_active(widget.host_widget, true);
        self.drag = Some(DragSession {
            widget: key,
            pointer: event.id,
            anchor_y: event.y,
            anchor_offset,
        });
    }

    pub(crate) fn on_pointer_move(&mut self, host: &mut H, event: PointerEvent) {
        let Some(drag) = self.drag else {
            return;
        };
        if drag.pointer != event.id {
            return;
        }
        let Some(widget) = self.registry.get(drag.widget) else {
            return;
        };
        let movable = widget.track_height(self.config.arrow_height) - widget.thumb.height;
        let max_scroll = host.metrics(widget.region).max_scroll();
        let Some(target) = drag_target(
            drag.anchor_offset,
            event.y - drag.anchor_y,
            movable,
            max_scroll,
        ) else {
            return;
        };
        host.set_scroll_offset(widget.region, target);
    }

    pub(crate) fn on_pointer_up(&mut self, host: &mut H, event: PointerEvent) {
        if let Some(drag) = self.drag {
            if drag.pointer == event.id {
                self.end_drag(host, event_types::POINTER_UP);
            }
        }
        // Any pointer up anywhere ends a repeat session.
        self.cancel_auto_repeat(host);
    }

    pub(crate) fn on_capture_lost(&mut self, host: &mut H, widget: H::WidgetId, pointer: PointerId) {
        let Some(drag) = self.drag else {
            return;
        };
        if self.registry.by_host_widget(widget) == Some(drag.widget) && drag.pointer == pointer {
            self.end_drag(host, event_types::CAPTURE_LOST);
        }
    }

    fn end_drag(&mut self, host: &mut H, cause: u32) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(widget) = self.registry.get_mut(drag.widget) else {
            return;
        };
        if let Some(next) = widget.state.on_event(cause) {
            widget.state = next;
        }
        host.release_pointer(widget.host_widget, drag.pointer);
        host.set_thumb_active(widget.host_widget, false);
    }

    fn begin_auto_repeat(&mut self, host: &mut H, key: OverlayKey, direction: Direction) {
        if self.is_interacting() {
            return;
        }
        let click_step = self.config.click_step;
        let delay_ms = self.config.repeat_delay_ms;
        let Some(widget) = self.registry.get_mut(key) else {
            return;
        };
        let Some(next) = widget.state.on_event(event_types::ARROW_PRESS) else {
            return;
        };
        widget.state = next;
        let region = widget.region;
        host.scroll_by(region, direction.sign() * click_step);
        self.repeat = Some(AutoRepeat::start(key, direction, delay_ms, host));
    }

    pub(crate) fn cancel_auto_repeat(&mut self, host: &mut H) {
        let Some(repeat) = self.repeat.take() else {
            return;
        };
        if let Some(widget) = self.registry.get_mut(repeat.widget()) {
            if let Some(next) = widget.state.on_event(event_types::POINTER_UP) {
                widget.state = next;
            }
        }
        repeat.cancel(host);
    }

    /// One auto-repeat increment per frame while the loop runs
    pub(crate) fn repeat_step(&mut self, host: &mut H) {
        let Some(repeat) = self.repeat.as_ref() else {
            return;
        };
        if !repeat.is_looping() {
            return;
        }
        let (key, sign) = (repeat.widget(), repeat.direction().sign());
        if let Some(widget) = self.registry.get(key) {
            host.scroll_by(widget.region, sign * self.config.repeat_step);
        }
        self.ensure_frame(host);
    }

    fn page_track(&mut self, host: &mut H, key: OverlayKey, event: PointerEvent) {
        let Some(widget) = self.registry.get(key) else {
            return;
        };
        let metrics = host.metrics(widget.region);
        let direction = page_direction(event.y, widget.thumb_bottom(self.config.arrow_height));
        host.scroll_by(widget.region, direction * TRACK_PAGE_FRACTION * metrics.viewport);
    }

    pub(crate) fn on_widget_wheel(&mut self, host: &mut H, widget: H::WidgetId, delta: f32) {
        let Some(key) = self.registry.by_host_widget(widget) else {
            return;
        };
        let Some(widget) = self.registry.get(key) else {
            return;
        };
        host.scroll_by(widget.region, delta);
    }
}
