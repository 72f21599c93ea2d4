//! Event-loop observer hooks.

use isle_activity::TimeslotPlan;
use isle_core::ClockTime;

/// Callbacks invoked by
/// [`SchedulerSession::run_event`][crate::SchedulerSession::run_event].
///
/// All methods default to no-ops.
pub trait SessionObserver {
    fn on_slot_start(&mut self, _time: ClockTime) {}

    /// Called with each finished plan, after delay resets were applied.
    fn on_slot_end(&mut self, _plan: &TimeslotPlan) {}

    fn on_event_end(&mut self, _slots: usize) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
