//! Selection state machine for the ring.
//!
//! States are `Idle` and `Transitioning`. An accepted navigation enters
//! `Transitioning` for a fixed window; requests arriving inside the window are
//! dropped rather than queued. Time only moves through [`RotationMachine::tick`],
//! which owns both logical timers (the animation lock and the auto-rotate
//! interval). Timers are armed by [`RotationMachine::activate`] and cancelled by
//! [`RotationMachine::deactivate`], so nothing fires after unmount.

use super::constants::{AUTO_ROTATE_QUIET, TRANSITION};
use super::geometry::step_deg;
use std::time::Duration;

/// Notifications pushed by state transitions, drained by observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A navigation was accepted; `index` is the new selection.
    SelectionChanged { index: usize },
    /// The animation lock was released.
    AnimationSettled,
    /// Item count, axis or radius changed; positions must be recomputed.
    LayoutChanged,
}

/// Who asked for a navigation. Only user requests hold off auto-rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOrigin {
    User,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { remaining: Duration },
}

#[derive(Clone, Copy, Debug)]
struct AutoRotateTimer {
    period: Duration,
    elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct RotationMachine {
    count: usize,
    selected: usize,
    rotation_deg: f32,
    phase: Phase,
    clock: Duration,
    last_user_nav: Option<Duration>,
    auto_period: Option<Duration>,
    auto_timer: Option<AutoRotateTimer>,
    active: bool,
}

impl RotationMachine {
    pub fn new(count: usize, initial_index: usize) -> Self {
        let selected = clamp_index(initial_index, count);
        Self {
            count,
            selected,
            rotation_deg: -(selected as f32) * step_deg(count),
            phase: Phase::Idle,
            clock: Duration::ZERO,
            last_user_nav: None,
            auto_period: None,
            auto_timer: None,
            active: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Accumulated ring rotation in degrees. Unbounded; it keeps counting
    /// across wraps so the ring never spins back the long way.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.auto_timer.is_some()
    }

    // ---------------- Lifecycle ----------------

    /// Mount: arm the auto-rotate timer if one is configured.
    pub fn activate(&mut self, auto_rotate: Option<Duration>) {
        self.active = true;
        self.auto_period = auto_rotate;
        self.rearm_auto();
    }

    /// Unmount: cancel every timer. The lock is dropped with the instance.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.auto_timer = None;
        self.phase = Phase::Idle;
    }

    /// Toggle auto-rotation; `None` cancels the timer.
    pub fn set_auto_rotate(&mut self, auto_rotate: Option<Duration>) {
        self.auto_period = auto_rotate;
        self.rearm_auto();
    }

    fn rearm_auto(&mut self) {
        self.auto_timer = match self.auto_period {
            Some(period) if self.active && self.count > 0 && !period.is_zero() => {
                Some(AutoRotateTimer {
                    period,
                    elapsed: Duration::ZERO,
                })
            }
            _ => None,
        };
    }

    /// Replace the item count. The selection is re-clamped and the rotation
    /// re-derived; this is a discontinuity, not a navigation.
    pub fn set_count(&mut self, count: usize, out: &mut Vec<CarouselEvent>) {
        if count == self.count {
            return;
        }
        self.count = count;
        self.selected = clamp_index(self.selected, count);
        self.rotation_deg = -(self.selected as f32) * step_deg(count);
        self.phase = Phase::Idle;
        if count == 0 {
            self.auto_timer = None;
        } else if self.auto_timer.is_none() {
            self.rearm_auto();
        }
        out.push(CarouselEvent::LayoutChanged);
    }

    // ---------------- Navigation ----------------

    /// Bring `target` to the front. Returns `false` (and changes nothing) when
    /// the target is out of range, already selected, or a transition is in flight.
    pub fn go_to_index(
        &mut self,
        target: usize,
        origin: NavOrigin,
        out: &mut Vec<CarouselEvent>,
    ) -> bool {
        if origin == NavOrigin::User {
            self.last_user_nav = Some(self.clock);
        }
        if target >= self.count || target == self.selected {
            return false;
        }
        if self.is_animating() {
            log::debug!("[carousel] dropped navigation to {} (animating)", target);
            return false;
        }

        let n = self.count as i64;
        let mut steps = (target as i64 - self.selected as i64).rem_euclid(n);
        if steps * 2 > n {
            steps -= n;
        }
        self.rotation_deg -= steps as f32 * step_deg(self.count);
        self.selected = target;
        self.phase = Phase::Transitioning {
            remaining: TRANSITION,
        };
        log::debug!(
            "[carousel] select {} ({:?}) rotation={:.1}",
            target,
            origin,
            self.rotation_deg
        );
        out.push(CarouselEvent::SelectionChanged { index: target });
        true
    }

    /// Step forward, wrapping at the end.
    pub fn go_to_next(&mut self, origin: NavOrigin, out: &mut Vec<CarouselEvent>) -> bool {
        if self.count == 0 {
            return false;
        }
        let next = (self.selected + 1) % self.count;
        self.go_to_index(next, origin, out)
    }

    /// Step backward, wrapping at the start.
    pub fn go_to_prev(&mut self, origin: NavOrigin, out: &mut Vec<CarouselEvent>) -> bool {
        if self.count == 0 {
            return false;
        }
        let prev = (self.selected + self.count - 1) % self.count;
        self.go_to_index(prev, origin, out)
    }

    // ---------------- Time ----------------

    /// Advance both timers by `dt`. The lock is released before the
    /// auto-rotate timer is checked, so an expiring lock never blocks a tick
    /// that lands in the same frame.
    pub fn tick(&mut self, dt: Duration, out: &mut Vec<CarouselEvent>) {
        if !self.active {
            return;
        }
        self.clock += dt;

        if let Phase::Transitioning { remaining } = self.phase {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.phase = Phase::Idle;
                out.push(CarouselEvent::AnimationSettled);
            } else {
                self.phase = Phase::Transitioning { remaining };
            }
        }

        let fire = match self.auto_timer.as_mut() {
            Some(timer) => {
                timer.elapsed += dt;
                if timer.elapsed >= timer.period {
                    timer.elapsed = Duration::ZERO;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if fire && self.quiet_for(AUTO_ROTATE_QUIET) {
            self.go_to_next(NavOrigin::Auto, out);
        }
    }

    /// True when no user navigation happened within `window`.
    pub fn quiet_for(&self, window: Duration) -> bool {
        match self.last_user_nav {
            Some(at) => self.clock.saturating_sub(at) > window,
            None => true,
        }
    }
}

/// Clamp an index into `[0, count)`; zero when there are no items.
#[inline]
pub fn clamp_index(index: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        index.min(count - 1)
    }
}
