use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Redraw target is no longer alive")]
    TargetGone,
}

/// Host hook for getting the next frame drawn.
pub trait Scheduler {
    fn redraw_now(&self);
    fn redraw_after(&self, delay: Duration) -> Result<(), ScheduleError>;
}

/// Keeps frames coming while a sweep is running.
#[derive(Debug)]
pub struct Animator<S> {
    scheduler: S,
    delay: Duration,
    running: bool,
}

impl<S: Scheduler> Animator<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.scheduler.redraw_now();
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
        }
    }

    /// Runs one tick and books the next frame. `on_tick` returns `true` once
    /// the animation is done, which stops the driver; that last frame still
    /// books one redraw so the settled state gets painted.
    pub fn animate(&mut self, on_tick: impl FnOnce() -> bool) {
        if !self.running {
            return;
        }
        if on_tick() {
            self.stop();
        }
        if let Err(e) = self.scheduler.redraw_after(self.delay) {
            log::debug!("Skipping frame reschedule: {}", e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{ManualScheduler, Request};
    use super::*;

    const DELAY: Duration = Duration::from_millis(20);

    #[test]
    fn test_start_requests_immediate_redraw_once() {
        let scheduler = ManualScheduler::default();
        let mut animator = Animator::new(scheduler.clone(), DELAY);

        animator.start();
        animator.start();

        assert!(animator.is_running());
        assert_eq!(scheduler.take(), vec![Request::Now]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut animator = Animator::new(ManualScheduler::default(), DELAY);
        animator.stop();
        assert!(!animator.is_running());

        animator.start();
        animator.stop();
        animator.stop();
        assert!(!animator.is_running());
    }

    #[test]
    fn test_animate_does_nothing_when_stopped() {
        let scheduler = ManualScheduler::default();
        let mut animator = Animator::new(scheduler.clone(), DELAY);
        let mut ticked = false;

        animator.animate(|| {
            ticked = true;
            false
        });

        assert!(!ticked);
        assert!(scheduler.take().is_empty());
    }

    #[test]
    fn test_animate_ticks_then_reschedules() {
        let scheduler = ManualScheduler::default();
        let mut animator = Animator::new(scheduler.clone(), DELAY);
        animator.start();
        scheduler.take();

        let mut ticks = 0;
        animator.animate(|| {
            ticks += 1;
            false
        });

        assert_eq!(ticks, 1);
        assert!(animator.is_running());
        assert_eq!(scheduler.take(), vec![Request::After(DELAY)]);
    }

    #[test]
    fn test_finished_tick_stops_driver() {
        let scheduler = ManualScheduler::default();
        let mut animator = Animator::new(scheduler.clone(), DELAY);
        animator.start();

        animator.animate(|| true);
        assert!(!animator.is_running());

        let mut ticked = false;
        animator.animate(|| {
            ticked = true;
            false
        });
        assert!(!ticked);
    }

    #[test]
    fn test_schedule_failure_is_swallowed() {
        let mut animator = Animator::new(ManualScheduler::failing(), DELAY);
        animator.start();

        animator.animate(|| false);
        animator.animate(|| false);

        assert!(animator.is_running());
    }
}
