//! Engine facade
//!
//! `Engine` owns everything the overlay system needs for one document:
//! config, widget registry, coalescers, and the live interaction session.
//! It is driven entirely by the embedder relaying host callbacks into
//! [`notify`](Engine::notify), [`on_frame`](Engine::on_frame), and
//! [`on_timer`](Engine::on_timer); it never blocks and schedules all
//! waiting through the host.

use overbar_core::config::OverlayConfig;
use overbar_platform::{HostDocument, Result, TimerId};

use crate::interaction::DragSession;
use crate::registry::Registry;
use crate::schedule::{AutoRepeat, Coalescer};

/// Overlay engine for one host document
pub struct Engine<H: HostDocument> {
    pub(crate) config: OverlayConfig,
    pub(crate) registry: Registry<H>,
    /// Coalesced geometry-update path (next frame)
    pub(crate) updates: Coalescer,
    /// Debounced rescan path (quiet period)
    pub(crate) rescans: Coalescer,
    pub(crate) drag: Option<DragSession>,
    pub(crate) repeat: Option<AutoRepeat>,
    frame_requested: bool,
    style_injected: bool,
    booted: bool,
    boot_pending: bool,
}

impl<H: HostDocument> Engine<H> {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            registry: Registry::new(),
            updates: Coalescer::next_frame(),
            rescans: Coalescer::quiet_period(config.rescan_quiet_ms),
            drag: None,
            repeat: None,
            frame_requested: false,
            style_injected: false,
            booted: false,
            boot_pending: false,
            config,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn widget_count(&self) -> usize {
        self.registry.len()
    }

    /// Whether a drag or auto-repeat session currently owns the pointer
    pub fn is_interacting(&self) -> bool {
        self.drag.is_some() || self.repeat.is_some()
    }

    /// Bring the engine up: inject the stylesheet, install the document
    /// mutation observer, run the initial scan, and schedule the first
    /// update pass.
    ///
    /// If the host document is not ready yet, readiness is polled on frame
    /// callbacks until it is.
    pub fn bootstrap(&mut self, host: &mut H) -> Result<()> {
        if self.booted {
            return Ok(());
        }
        if !host.is_ready() {
            self.boot_pending = true;
            self.ensure_frame(host);
            return Ok(());
        }
        self.boot_pending = false;
        self.booted = true;
        self.inject_style(host)?;
        host.observe_mutations();
        self.scan(host)?;
        self.schedule_update(host);
        tracing::debug!(widgets = self.registry.len(), "engine bootstrapped");
        Ok(())
    }

    /// Animation-frame callback: auto-repeat steps and the coalesced
    /// update pass
    pub fn on_frame(&mut self, host: &mut H) -> Result<()> {
        self.frame_requested = false;
        if self.boot_pending {
            self.bootstrap(host)?;
            if !self.booted {
                return Ok(());
            }
        }
        self.repeat_step(host);
        if self.updates.fires_on_frame() {
            self.run_update_pass(host);
            self.updates.settle();
        }
        Ok(())
    }

    /// One-shot timer callback: debounced rescans and the auto-repeat
    /// long-press delay
    pub fn on_timer(&mut self, host: &mut H, timer: TimerId) -> Result<()> {
        if self.rescans.matches_timer(timer) {
            self.scan(host)?;
            self.rescans.settle();
            self.schedule_update(host);
            return Ok(());
        }
        let armed = self
            .repeat
            .as_mut()
            .map_or(false, |repeat| repeat.arm_loop(timer));
        if armed {
            self.ensure_frame(host);
        }
        Ok(())
    }

    pub(crate) fn schedule_update(&mut self, host: &mut H) {
        if self.updates.trigger(host) {
            self.ensure_frame(host);
        }
    }

    pub(crate) fn schedule_rescan(&mut self, host: &mut H) {
        self.rescans.trigger(host);
    }

    pub(crate) fn ensure_frame(&mut self, host: &mut H) {
        if !self.frame_requested {
            self.frame_requested = true;
            host.request_frame();
        }
    }

    fn inject_style(&mut self, host: &mut H) -> Result<()> {
        if self.style_injected {
            return Ok(());
        }
        let fresh = host.inject_stylesheet(&crate::style::stylesheet(&self.config))?;
        self.style_injected = true;
        tracing::debug!(fresh, "overlay stylesheet ready");
        Ok(())
    }
}
