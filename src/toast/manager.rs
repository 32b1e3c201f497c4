//! Toast lifecycle management.
//!
//! `ToastManager` owns every toast record, enforces the visible-capacity and
//! duplicate policies, and drives auto-dismiss timers and exit transitions
//! from an injected `Clock`. Hosts call `tick` from their timer or
//! animation-frame callback and render from `stack` or the event stream.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::WidgetResult;

use super::notification::ToastTimer;
use super::{
    Clock, SystemClock, Toast, ToastConfig, ToastId, ToastKind, ToastOptions, ToastPhase,
    ToastPosition,
};

/// Why a toast left the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissReason {
    Expired,
    Manual,
    /// Pushed out by a newer toast when the visible cap was exceeded.
    Evicted,
}

/// State changes a view layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastEvent {
    Shown {
        id: ToastId,
        position: ToastPosition,
    },
    TimerReset {
        id: ToastId,
    },
    Dismissing {
        id: ToastId,
        reason: DismissReason,
    },
    Removed {
        id: ToastId,
    },
}

/// Capacity-bounded, deduplicated set of toasts.
///
/// Construct one per page or window and pass it by reference to whatever
/// needs to raise notifications.
#[derive(Debug)]
pub struct ToastManager<C: Clock = SystemClock> {
    config: ToastConfig,
    clock: C,
    /// Active toasts (visible and dismissing) in creation order.
    toasts: IndexMap<ToastId, Toast>,
    next_id: u64,
    events: Vec<ToastEvent>,
}

impl ToastManager<SystemClock> {
    /// Manager driven by the wall clock.
    pub fn with_system_clock(config: ToastConfig) -> WidgetResult<Self> {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> ToastManager<C> {
    pub fn new(config: ToastConfig, clock: C) -> WidgetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            toasts: IndexMap::new(),
            next_id: 1,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shows a notification and returns its id.
    ///
    /// Returns `None` for a blank message. With duplicate prevention on, a
    /// message+kind pair that is already visible only has its timer reset and
    /// the existing id is returned. Exceeding `max_toasts` dismisses the
    /// oldest visible toast.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> Option<ToastId> {
        let message = message.into();
        if message.trim().is_empty() {
            warn!(kind = kind.as_str(), "ignoring toast with empty message");
            return None;
        }

        let duplicate = if self.config.prevent_duplicates {
            self.visible()
                .find(|toast| toast.matches(&message, kind))
                .map(Toast::id)
        } else {
            None
        };
        if let Some(existing) = duplicate {
            debug!(%existing, "duplicate toast suppressed");
            self.reset_timer(existing);
            return Some(existing);
        }

        let now = self.clock.now();
        let id = ToastId::new(self.next_id);
        self.next_id += 1;

        let timeout = options.timeout.unwrap_or_else(|| self.config.timeout());
        let timer = arm_timer(now, timeout);
        let position = options.position.unwrap_or(self.config.position);

        self.toasts.insert(
            id,
            Toast {
                id,
                message,
                title: options.title,
                kind,
                timeout,
                closable: options.closable,
                position,
                phase: ToastPhase::Visible,
                created_at: now,
                timer,
                removal_at: None,
            },
        );
        self.events.push(ToastEvent::Shown { id, position });
        debug!(
            %id,
            kind = kind.as_str(),
            timeout_ms = timeout.as_millis() as u64,
            "toast shown"
        );

        self.enforce_capacity();
        Some(id)
    }

    /// Starts the exit transition of a visible toast. Unknown or already
    /// hidden ids are ignored.
    pub fn hide(&mut self, id: ToastId) {
        self.dismiss(id, DismissReason::Manual);
    }

    pub fn hide_all(&mut self) {
        let visible: Vec<ToastId> = self.visible().map(Toast::id).collect();
        for id in visible {
            self.hide(id);
        }
    }

    /// Restarts the auto-dismiss timer with the toast's original timeout.
    ///
    /// No-op for persistent, dismissing or unknown toasts. A paused timer
    /// stays paused with its full timeout remaining.
    pub fn reset_timer(&mut self, id: ToastId) {
        let now = self.clock.now();
        let Some(toast) = self.visible_mut(id) else {
            trace!(%id, "reset_timer ignored");
            return;
        };
        if toast.is_persistent() {
            return;
        }
        toast.timer = match toast.timer {
            ToastTimer::Paused { .. } => ToastTimer::Paused {
                remaining: toast.timeout,
            },
            ToastTimer::Idle | ToastTimer::Armed { .. } => arm_timer(now, toast.timeout),
        };
        self.events.push(ToastEvent::TimerReset { id });
        trace!(%id, "toast timer reset");
    }

    /// Freezes the remaining auto-dismiss time, e.g. while hovered.
    pub fn pause_timer(&mut self, id: ToastId) {
        let now = self.clock.now();
        if let Some(toast) = self.visible_mut(id) {
            if let ToastTimer::Armed { deadline } = toast.timer {
                toast.timer = ToastTimer::Paused {
                    remaining: deadline.saturating_duration_since(now),
                };
                trace!(%id, "toast timer paused");
            }
        }
    }

    pub fn resume_timer(&mut self, id: ToastId) {
        let now = self.clock.now();
        if let Some(toast) = self.visible_mut(id) {
            if let ToastTimer::Paused { remaining } = toast.timer {
                toast.timer = arm_timer(now, remaining);
                trace!(%id, "toast timer resumed");
            }
        }
    }

    /// Time left before auto-dismiss, `None` when no timer is pending.
    #[must_use]
    pub fn time_remaining(&self, id: ToastId) -> Option<Duration> {
        let toast = self.toasts.get(&id).filter(|toast| toast.visible())?;
        match toast.timer {
            ToastTimer::Armed { deadline } => {
                Some(deadline.saturating_duration_since(self.clock.now()))
            }
            ToastTimer::Paused { remaining } => Some(remaining),
            ToastTimer::Idle => None,
        }
    }

    /// Advances timers and transitions to the clock's current time.
    ///
    /// Returns `true` when any toast changed phase or was removed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let expired: Vec<ToastId> = self
            .toasts
            .values()
            .filter(|toast| {
                toast.visible()
                    && matches!(toast.timer, ToastTimer::Armed { deadline } if deadline <= now)
            })
            .map(Toast::id)
            .collect();
        let mut changed = !expired.is_empty();
        for id in expired {
            self.dismiss(id, DismissReason::Expired);
        }

        let finished: Vec<ToastId> = self
            .toasts
            .values()
            .filter(|toast| toast.removal_at.is_some_and(|at| at <= now))
            .map(Toast::id)
            .collect();
        changed |= !finished.is_empty();
        for id in finished {
            self.remove(id);
        }

        changed
    }

    /// Earliest instant at which `tick` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts
            .values()
            .filter_map(|toast| match (toast.phase, toast.timer) {
                (ToastPhase::Visible, ToastTimer::Armed { deadline }) => Some(deadline),
                (ToastPhase::Dismissing, _) => toast.removal_at,
                _ => None,
            })
            .min()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    /// Visible toasts in creation order.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values().filter(|toast| toast.visible())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Toasts still on screen (visible or dismissing).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.toasts.len()
    }

    /// On-screen toasts of one stack container, in creation order.
    pub fn stack(&self, position: ToastPosition) -> impl Iterator<Item = &Toast> {
        self.toasts
            .values()
            .filter(move |toast| toast.position == position)
    }

    /// Takes the events accumulated since the previous drain.
    pub fn drain_events(&mut self) -> Vec<ToastEvent> {
        std::mem::take(&mut self.events)
    }

    /// Removes every toast immediately, skipping exit transitions.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self.toasts.keys().copied().collect();
        for id in ids {
            self.remove(id);
        }
    }

    fn visible_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.get_mut(&id).filter(|toast| toast.visible())
    }

    fn dismiss(&mut self, id: ToastId, reason: DismissReason) {
        let now = self.clock.now();
        let transition = self.config.transition();
        let Some(toast) = self.visible_mut(id) else {
            trace!(%id, ?reason, "dismiss ignored");
            return;
        };

        toast.timer = ToastTimer::Idle;
        toast.phase = ToastPhase::Dismissing;
        let removal_at = now.checked_add(transition);
        toast.removal_at = removal_at;
        self.events.push(ToastEvent::Dismissing { id, reason });
        debug!(%id, ?reason, "toast dismissing");

        if transition.is_zero() || removal_at.is_none() {
            self.remove(id);
        }
    }

    fn remove(&mut self, id: ToastId) {
        if self.toasts.shift_remove(&id).is_some() {
            self.events.push(ToastEvent::Removed { id });
            trace!(%id, "toast removed");
        }
    }

    fn enforce_capacity(&mut self) {
        while self.visible_count() > self.config.max_toasts {
            let Some(oldest) = self.visible().next().map(Toast::id) else {
                break;
            };
            self.dismiss(oldest, DismissReason::Evicted);
        }
    }
}

/// Timer for `timeout` starting at `now`. A zero timeout, or one too large
/// to represent as an `Instant`, never fires.
fn arm_timer(now: Instant, timeout: Duration) -> ToastTimer {
    if timeout.is_zero() {
        return ToastTimer::Idle;
    }
    match now.checked_add(timeout) {
        Some(deadline) => ToastTimer::Armed { deadline },
        None => ToastTimer::Idle,
    }
}
