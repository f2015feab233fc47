//! Deferred-work primitives
//!
//! Many notifications collapse into one action: scroll/resize bursts into a
//! single geometry pass, mutation storms into a single rescan. [`Coalescer`]
//! implements both fan-in policies behind one type. [`AutoRepeat`] is the
//! repeating task behind arrow long-presses.

use overbar_core::events::Direction;
use overbar_platform::{HostDocument, TimerId};

use crate::registry::OverlayKey;

/// When a coalesced action fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoalescePolicy {
    /// On the next animation frame
    NextFrame,
    /// Once a quiet period has elapsed since the burst began
    QuietPeriod { delay_ms: u64 },
}

/// Collapses repeated triggers into one pending action
#[derive(Debug)]
pub struct Coalescer {
    policy: CoalescePolicy,
    pending: bool,
    timer: Option<TimerId>,
}

impl Coalescer {
    pub fn next_frame() -> Self {
        Self {
            policy: CoalescePolicy::NextFrame,
            pending: false,
            timer: None,
        }
    }

    pub fn quiet_period(delay_ms: u64) -> Self {
        Self {
            policy: CoalescePolicy::QuietPeriod { delay_ms },
            pending: false,
            timer: None,
        }
    }

    /// Register a trigger.
    ///
    /// Returns `true` when this trigger newly scheduled the action; callers
    /// on the next-frame policy must then ensure a frame callback. Triggers
    /// while pending are absorbed, and a running quiet-period timer is not
    /// restarted.
    pub fn trigger<H: HostDocument>(&mut self, host: &mut H) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        if let CoalescePolicy::QuietPeriod { delay_ms } = self.policy {
            self.timer = Some(host.set_timer(delay_ms));
        }
        true
    }

    /// Whether a frame callback fires the action now
    pub fn fires_on_frame(&self) -> bool {
        self.pending && matches!(self.policy, CoalescePolicy::NextFrame)
    }

    /// Whether this timer fires the action now; consumes the handle
    pub fn matches_timer(&mut self, timer: TimerId) -> bool {
        if self.timer == Some(timer) {
            self.timer = None;
            true
        } else {
            false
        }
    }

    /// Mark the action complete. Kept separate from the fire checks so
    /// triggers arriving while the action runs are absorbed by the
    /// still-set pending flag rather than queued.
    pub fn settle(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn cancel<H: HostDocument>(&mut self, host: &mut H) {
        if let Some(timer) = self.timer.take() {
            host.cancel_timer(timer);
        }
        self.pending = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatPhase {
    /// Waiting out the long-press delay
    Armed(TimerId),
    /// Stepping once per frame
    Looping,
}

/// Repeating scroll task driving an arrow long-press
#[derive(Debug)]
pub struct AutoRepeat {
    widget: OverlayKey,
    direction: Direction,
    phase: RepeatPhase,
}

impl AutoRepeat {
    /// Arm the task; the frame loop begins once `delay_ms` elapses
    pub fn start<H: HostDocument>(
        widget: OverlayKey,
        direction: Direction,
        delay_ms: u64,
        host: &mut H,
    ) -> Self {
        Self {
            widget,
            direction,
            phase: RepeatPhase::Armed(host.set_timer(delay_ms)),
        }
    }

    /// Move from the armed delay into the frame loop. Returns `true` when
    /// `timer` was this task's delay timer.
    pub fn arm_loop(&mut self, timer: TimerId) -> bool {
        if self.phase == RepeatPhase::Armed(timer) {
            self.phase = RepeatPhase::Looping;
            true
        } else {
            false
        }
    }

    pub fn is_looping(&self) -> bool {
        self.phase == RepeatPhase::Looping
    }

    pub fn widget(&self) -> OverlayKey {
        self.widget
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Tear down: cancels a pending delay; a running frame loop simply
    /// stops being rescheduled
    pub fn cancel<H: HostDocument>(self, host: &mut H) {
        if let RepeatPhase::Armed(timer) = self.phase {
            host.cancel_timer(timer);
        }
    }
}
