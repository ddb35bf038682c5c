//! Animation scheduler
//!
//! A frame-clock driver: owns every submitted animation and ticks them all
//! each frame until they finish.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use reel_core::NormalizedTime;
use slotmap::{new_key_type, SlotMap};

use crate::animation::Animation;
use crate::animator::Animator;

new_key_type! {
    pub struct AnimationId;
}

struct RunningAnimation {
    animation: Rc<dyn Animation>,
    /// Seconds since the first frame; `None` until that frame
    elapsed: Option<f64>,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    running: RefCell<SlotMap<AnimationId, RunningAnimation>>,
    last_frame: Cell<Instant>,
    target_fps: Cell<u32>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            running: RefCell::new(SlotMap::with_key()),
            last_frame: Cell::new(Instant::now()),
            target_fps: Cell::new(120),
        }
    }

    pub fn set_target_fps(&self, fps: u32) {
        self.target_fps.set(fps.max(1));
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps.get()
    }

    /// Seconds per frame at the target frame rate
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.target_fps.get() as f64
    }

    /// Start driving `animation`. Its first tick, at time 0, happens on the
    /// next frame.
    pub fn start(&self, animation: Box<dyn Animation>) -> AnimationId {
        let duration = animation.duration();
        let id = self.running.borrow_mut().insert(RunningAnimation {
            animation: Rc::from(animation),
            elapsed: None,
        });
        tracing::trace!("Scheduled animation {:?} lasting {}s", id, duration);
        id
    }

    /// Stop driving an animation without ticking it again
    pub fn cancel(&self, id: AnimationId) -> bool {
        self.running.borrow_mut().remove(id).is_some()
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.borrow().contains_key(id)
    }

    /// Tick all animations using the wall-clock time since the last frame
    pub fn tick(&self) {
        let now = Instant::now();
        let dt = (now - self.last_frame.get()).as_secs_f64();
        self.last_frame.set(now);
        self.advance(dt);
    }

    /// Tick all animations as if `dt` seconds passed since the last frame.
    ///
    /// An animation is ticked at `elapsed / duration`, clamped to 1, and
    /// dropped after the frame on which it reached its duration.
    pub fn advance(&self, dt: f64) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!("Ignoring invalid frame delta {}", dt);
            0.0
        };

        // Collect first: ticking may submit new animations
        let frame: Vec<(AnimationId, Rc<dyn Animation>, NormalizedTime, bool)> = self
            .running
            .borrow_mut()
            .iter_mut()
            .map(|(id, running)| {
                let elapsed = running.elapsed.map_or(0.0, |e| e + dt);
                running.elapsed = Some(elapsed);
                let duration = running.animation.duration();
                let time = NormalizedTime::from_interval(elapsed, duration);
                let finished = elapsed >= duration || duration.is_nan();
                (id, running.animation.clone(), time, finished)
            })
            .collect();

        for (id, animation, time, finished) in frame {
            animation.tick(time);
            if finished && self.running.borrow_mut().remove(id).is_some() {
                tracing::trace!("Animation {:?} finished", id);
            }
        }
    }

    /// Step fixed frames at the target frame rate until every animation has
    /// finished or `max_frames` is reached. Returns the frames stepped.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let dt = self.frame_interval();
        let mut frames = 0;
        while self.has_active_animations() && frames < max_frames {
            self.advance(dt);
            frames += 1;
        }
        frames
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.running.borrow().is_empty()
    }

    /// Get the number of animations in the scheduler
    pub fn animation_count(&self) -> usize {
        self.running.borrow().len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator for AnimationScheduler {
    fn run(&self, animation: Box<dyn Animation>) {
        self.start(animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::Probe;

    #[test]
    fn test_first_frame_ticks_zero_and_last_frame_ticks_one() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(1.0);
        scheduler.run(probe.boxed());

        scheduler.advance(0.25);
        scheduler.advance(0.5);
        assert!(scheduler.has_active_animations());
        scheduler.advance(0.75);

        assert_eq!(*ticks.borrow(), vec![0.0, 0.5, 1.0]);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_finished_animation_is_not_ticked_again() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(0.5);
        scheduler.run(probe.boxed());

        scheduler.advance(0.0);
        scheduler.advance(0.5);
        scheduler.advance(0.5);

        assert_eq!(*ticks.borrow(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_zero_duration_gets_single_terminal_tick() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(0.0);
        scheduler.run(probe.boxed());

        scheduler.advance(0.016);
        scheduler.advance(0.016);

        assert_eq!(*ticks.borrow(), vec![1.0]);
        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_nan_duration_finishes() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(f64::NAN);
        scheduler.run(probe.boxed());

        assert_eq!(scheduler.run_until_idle(100), 1);
        assert_eq!(*ticks.borrow(), vec![1.0]);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_cancel() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(1.0);
        let id = scheduler.start(probe.boxed());

        assert!(scheduler.is_running(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        scheduler.advance(0.5);

        assert!(ticks.borrow().is_empty());
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let scheduler = AnimationScheduler::new();
        let (probe, ticks) = Probe::new(1.0);
        scheduler.run(probe.boxed());

        scheduler.advance(0.0);
        scheduler.advance(-3.0);

        assert_eq!(*ticks.borrow(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_run_until_idle() {
        let scheduler = AnimationScheduler::new();
        scheduler.set_target_fps(10);
        let (probe, ticks) = Probe::new(0.5);
        scheduler.run(probe.boxed());

        let frames = scheduler.run_until_idle(100);

        assert!(!scheduler.has_active_animations());
        assert!(frames >= 6);
        assert_eq!(ticks.borrow().first(), Some(&0.0));
        assert_eq!(ticks.borrow().last(), Some(&1.0));
    }
}
