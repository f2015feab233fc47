//! Observer bridge
//!
//! Routes host notifications into the coalesced update path, the debounced
//! rescan path, or the interaction controller. Scroll events provoked by
//! the controller's own writes re-enter here like any other.

use overbar_platform::{HostDocument, Notification};

use crate::engine::Engine;

impl<H: HostDocument> Engine<H> {
    /// Feed one host notification through the bridge
    pub fn notify(&mut self, host: &mut H, notification: Notification<H::NodeId, H::WidgetId>) {
        match notification {
            Notification::Scroll(_) | Notification::Resize(_) => self.schedule_update(host),
            Notification::Mutation => self.schedule_rescan(host),
            Notification::LinkClick => {
                // SPA route change: ruled-out regions become candidates again.
                self.registry.reset_processed();
                self.schedule_rescan(host);
                tracing::debug!("navigation reset, rescan scheduled");
            }
            Notification::PointerDown {
                widget,
                part,
                event,
            } => self.on_widget_pointer_down(host, widget, part, event),
            Notification::PointerMove(event) => self.on_pointer_move(host, event),
            Notification::PointerUp(event) => self.on_pointer_up(host, event),
            Notification::CaptureLost { widget, pointer } => {
                self.on_capture_lost(host, widget, pointer)
            }
            Notification::Wheel { widget, delta } => self.on_widget_wheel(host, widget, delta),
        }
    }
}
