//! Cooperative counter animations.
//!
//! Every frame, progress is elapsed time over duration clamped to `[0, 1]`,
//! eased with a quartic ease-out, and the interpolated value is delivered to
//! the tick callback. Handles allow cancellation at any point; a cancelled
//! animation never ticks again.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// `1 - (1 - t)^4`, for `t` in `[0, 1]`.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Running,
    Cancelled,
    Finished,
}

/// Cancellation token for one running animation.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    state: Rc<Cell<TaskState>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        if self.state.get() == TaskState::Running {
            self.state.set(TaskState::Cancelled);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.get() == TaskState::Cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.state.get() == TaskState::Finished
    }
}

type TickFn = Box<dyn FnMut(f64)>;
type DoneFn = Box<dyn FnOnce()>;

struct Task {
    start: f64,
    end: f64,
    duration: Duration,
    started_at: Instant,
    on_tick: TickFn,
    on_done: Option<DoneFn>,
    state: Rc<Cell<TaskState>>,
}

impl Task {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Advance one frame. Returns true while the task should stay scheduled.
    fn step(&mut self, now: Instant) -> bool {
        if self.state.get() != TaskState::Running {
            return false;
        }

        let progress = self.progress(now);
        let value = self.start + (self.end - self.start) * ease_out_quart(progress);
        (self.on_tick)(value);

        // The tick callback may have cancelled this task.
        if progress < 1.0 || self.state.get() != TaskState::Running {
            return self.state.get() == TaskState::Running;
        }

        self.state.set(TaskState::Finished);
        if let Some(on_done) = self.on_done.take() {
            on_done();
        }
        false
    }
}

/// Frame-driven registry of counter animations.
#[derive(Default)]
pub struct Animator {
    tasks: Vec<Task>,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator").field("running", &self.tasks.len()).finish()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animate<F>(&mut self, start: f64, end: f64, duration: Duration, started_at: Instant, on_tick: F) -> AnimationHandle
    where
        F: FnMut(f64) + 'static,
    {
        self.schedule(start, end, duration, started_at, Box::new(on_tick), None)
    }

    /// Like [`Animator::animate`], with a callback fired once on completion.
    pub fn animate_then<F, D>(
        &mut self,
        start: f64,
        end: f64,
        duration: Duration,
        started_at: Instant,
        on_tick: F,
        on_done: D,
    ) -> AnimationHandle
    where
        F: FnMut(f64) + 'static,
        D: FnOnce() + 'static,
    {
        self.schedule(start, end, duration, started_at, Box::new(on_tick), Some(Box::new(on_done)))
    }

    fn schedule(
        &mut self,
        start: f64,
        end: f64,
        duration: Duration,
        started_at: Instant,
        on_tick: TickFn,
        on_done: Option<DoneFn>,
    ) -> AnimationHandle {
        let state = Rc::new(Cell::new(TaskState::Running));
        self.tasks.push(Task {
            start,
            end,
            duration,
            started_at,
            on_tick,
            on_done,
            state: Rc::clone(&state),
        });
        AnimationHandle { state }
    }

    /// Run one animation frame at `now`. Returns the number still running.
    pub fn frame(&mut self, now: Instant) -> usize {
        self.tasks.retain_mut(|task| task.step(now));
        self.tasks.len()
    }

    pub fn running(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            if task.state.get() == TaskState::Running {
                task.state.set(TaskState::Cancelled);
            }
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ticks);
        (ticks, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_runs_to_end_and_fires_done_once() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let (ticks, on_tick) = recorder();
        let done = Rc::new(Cell::new(0));
        let done_count = Rc::clone(&done);

        let handle = animator.animate_then(0.0, 100.0, Duration::from_millis(100), t0, on_tick, move || {
            done_count.set(done_count.get() + 1)
        });

        assert_eq!(animator.frame(t0 + Duration::from_millis(50)), 1);
        assert_eq!(animator.frame(t0 + Duration::from_millis(150)), 0);
        assert_eq!(animator.frame(t0 + Duration::from_millis(200)), 0);

        let ticks = ticks.borrow();
        assert_eq!(ticks.len(), 2);
        assert!((ticks[0] - 93.75).abs() < 1e-9);
        assert_eq!(ticks[1], 100.0);
        assert_eq!(done.get(), 1);
        assert!(handle.is_finished());
    }

    #[test]
    fn test_cancel_mid_flight_stops_ticks() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let (ticks, on_tick) = recorder();
        let done = Rc::new(Cell::new(false));
        let done_flag = Rc::clone(&done);

        let handle = animator.animate_then(0.0, 156.0, Duration::from_secs(2), t0, on_tick, move || done_flag.set(true));
        animator.frame(t0 + Duration::from_millis(16));
        animator.frame(t0 + Duration::from_millis(32));
        handle.cancel();

        for ms in [48, 500, 2_000, 3_000] {
            animator.frame(t0 + Duration::from_millis(ms));
        }

        assert_eq!(ticks.borrow().len(), 2);
        assert!(ticks.borrow().iter().all(|&value| value < 156.0));
        assert!(!done.get());
        assert!(handle.is_cancelled());
        assert!(animator.is_idle());
    }

    #[test]
    fn test_counters_cancel_independently() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let (first_ticks, first) = recorder();
        let (second_ticks, second) = recorder();

        let first_handle = animator.animate(0.0, 10.0, Duration::from_millis(100), t0, first);
        animator.animate(0.0, 20.0, Duration::from_millis(100), t0, second);
        first_handle.cancel();

        animator.frame(t0 + Duration::from_millis(100));
        assert!(first_ticks.borrow().is_empty());
        assert_eq!(*second_ticks.borrow(), vec![20.0]);
    }

    #[test]
    fn test_zero_duration_completes_on_first_frame() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let (ticks, on_tick) = recorder();

        animator.animate(5.0, 42.0, Duration::ZERO, t0, on_tick);
        assert_eq!(animator.frame(t0), 0);
        assert_eq!(*ticks.borrow(), vec![42.0]);
    }

    #[test]
    fn test_cancel_all_marks_handles() {
        let t0 = Instant::now();
        let mut animator = Animator::new();
        let handle = animator.animate(0.0, 1.0, Duration::from_secs(1), t0, |_| {});

        animator.cancel_all();
        assert!(handle.is_cancelled());
        assert!(animator.is_idle());
    }
}
