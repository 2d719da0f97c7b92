//! Stepped volume ramps.
//!
//! A ramp moves the volume by a fixed step on every timer tick until it hits
//! its target. The slot holds at most one ramp; replacing it bumps the
//! generation so ticks scheduled for an older ramp are recognised and dropped.

/// Distance below which a volume counts as having reached its target.
pub const RAMP_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeJob {
    pub generation: u64,
    pub target: f32,
    step: f32,
}

impl FadeJob {
    pub fn direction(&self) -> FadeDirection {
        if self.step > 0.0 {
            FadeDirection::Up
        } else {
            FadeDirection::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampStep {
    /// Intermediate volume; the ramp keeps running.
    Continue(f32),
    /// Target reached exactly; the ramp has been removed from the slot.
    Reached(f32),
}

#[derive(Debug, Default)]
pub struct RampSlot {
    current: Option<FadeJob>,
    generation: u64,
}

impl RampSlot {
    /// Drop any running ramp and start a new one from `from` toward `target`.
    pub fn replace(&mut self, from: f32, target: f32, step_size: f32) -> FadeJob {
        self.current = None;
        self.generation = self.generation.wrapping_add(1);
        let magnitude = step_size.abs();
        let step = if target > from { magnitude } else { -magnitude };
        let job = FadeJob {
            generation: self.generation,
            target,
            step,
        };
        self.current = Some(job);
        job
    }

    pub fn cancel(&mut self) -> Option<FadeJob> {
        self.current.take()
    }

    pub fn current(&self) -> Option<FadeJob> {
        self.current
    }

    /// Apply one tick of the ramp identified by `generation`.
    ///
    /// Returns `None` when that ramp is no longer the active one.
    pub fn advance(&mut self, generation: u64, volume: f32, ceiling: f32) -> Option<RampStep> {
        let job = self.current.filter(|job| job.generation == generation)?;
        let next = (volume + job.step).clamp(0.0, ceiling);
        let reached = match job.direction() {
            FadeDirection::Up => next >= job.target - RAMP_EPSILON,
            FadeDirection::Down => next <= job.target + RAMP_EPSILON,
        };
        if reached {
            self.current = None;
            Some(RampStep::Reached(job.target))
        } else {
            Some(RampStep::Continue(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_target() {
        let mut slot = RampSlot::default();
        assert_eq!(slot.replace(0.0, 0.6, 0.04).direction(), FadeDirection::Up);
        assert_eq!(slot.replace(0.6, 0.0, 0.04).direction(), FadeDirection::Down);
    }

    #[test]
    fn replacing_invalidates_older_generation() {
        let mut slot = RampSlot::default();
        let old = slot.replace(0.0, 0.6, 0.04);
        let new = slot.replace(0.3, 0.0, 0.04);
        assert_ne!(old.generation, new.generation);
        assert_eq!(slot.advance(old.generation, 0.3, 0.6), None);
        match slot.advance(new.generation, 0.3, 0.6) {
            Some(RampStep::Continue(volume)) => assert!((volume - 0.26).abs() < 1e-6),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn final_step_snaps_to_target_and_clears_slot() {
        let mut slot = RampSlot::default();
        let job = slot.replace(0.58, 0.6, 0.04);
        assert_eq!(
            slot.advance(job.generation, 0.58, 0.6),
            Some(RampStep::Reached(0.6))
        );
        assert!(slot.current().is_none());
    }

    #[test]
    fn downward_ramp_never_goes_negative() {
        let mut slot = RampSlot::default();
        let job = slot.replace(0.02, 0.0, 0.04);
        assert_eq!(
            slot.advance(job.generation, 0.02, 0.6),
            Some(RampStep::Reached(0.0))
        );
    }

    #[test]
    fn cancelled_ramp_ignores_ticks() {
        let mut slot = RampSlot::default();
        let job = slot.replace(0.0, 0.6, 0.04);
        slot.cancel();
        assert_eq!(slot.advance(job.generation, 0.0, 0.6), None);
    }
}
