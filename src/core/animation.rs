//! Frame-driven count-up animation
//!
//! [`CounterAnimation`] is the state machine behind the animated statistics:
//! `Idle -> Animating -> Settled`, with the displayed value computed from the
//! elapsed frame time. [`FrameLoop`] tracks the pending animation frame so it
//! can be cancelled when the owning component goes away.

/// Default animation length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Phase of a counter animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    /// Waiting for the block to be revealed
    Idle,
    /// Running; `started_at` is set by the first frame
    Animating { started_at: Option<f64> },
    /// Reached the target value
    Settled,
}

/// Count-up from 0 to `target` over `duration_ms`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    phase: CounterPhase,
    value: u64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, DEFAULT_DURATION_MS)
    }

    /// Negative or NaN durations are treated as zero (settle on first frame)
    pub fn with_duration(target: u64, duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_nan() {
            0.0
        } else {
            duration_ms.max(0.0)
        };
        Self {
            target,
            duration_ms,
            phase: CounterPhase::Idle,
            value: 0,
        }
    }

    /// Leave `Idle`. Returns `true` if the animation actually started; any
    /// later call is a no-op.
    pub fn begin(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Animating { started_at: None };
        true
    }

    /// Advance to a frame timestamp (milliseconds, monotonic).
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, timestamp: f64) -> bool {
        let started_at = match self.phase {
            CounterPhase::Idle | CounterPhase::Settled => return false,
            CounterPhase::Animating {
                started_at: Some(start),
            } => start,
            CounterPhase::Animating { started_at: None } => {
                self.phase = CounterPhase::Animating {
                    started_at: Some(timestamp),
                };
                timestamp
            }
        };

        let progress = self.progress_at(timestamp - started_at);
        self.value = (self.target as f64 * progress).floor() as u64;

        if progress >= 1.0 {
            self.value = self.target;
            self.phase = CounterPhase::Settled;
            false
        } else {
            true
        }
    }

    fn progress_at(&self, elapsed: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == CounterPhase::Settled
    }
}

/// Platform primitive that runs a callback on the next frame
pub trait FrameScheduler {
    type Token: Copy;

    /// Request the next frame. `None` if the platform refused.
    fn schedule(&mut self) -> Option<Self::Token>;

    fn cancel(&mut self, token: Self::Token);
}

/// Tracks the pending frame of an animation loop.
///
/// Once cancelled (or dropped) it never schedules again.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Token>,
    cancelled: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            cancelled: false,
        }
    }

    /// Schedule the next frame unless one is pending or the loop is
    /// cancelled. Returns `true` if a frame is pending afterwards.
    pub fn request_next(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        if self.pending.is_none() {
            self.pending = self.scheduler.schedule();
        }
        self.pending.is_some()
    }

    /// Mark the pending frame as delivered. Returns `false` if the loop was
    /// cancelled, in which case the frame must be ignored.
    pub fn frame_fired(&mut self) -> bool {
        self.pending = None;
        !self.cancelled
    }

    /// Cancel the pending frame, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        self.cancelled = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A counter together with the frame loop that drives it
pub struct CounterDriver<S: FrameScheduler> {
    pub animation: CounterAnimation,
    pub frames: FrameLoop<S>,
}

impl<S: FrameScheduler> CounterDriver<S> {
    pub fn new(animation: CounterAnimation, scheduler: S) -> Self {
        Self {
            animation,
            frames: FrameLoop::new(scheduler),
        }
    }

    /// Start animating once the block is revealed
    pub fn start(&mut self) {
        if self.animation.begin() {
            self.frames.request_next();
        }
    }

    /// Handle a delivered frame. Returns the value to display, or `None` if
    /// the loop was cancelled and the frame must be dropped.
    pub fn on_frame(&mut self, timestamp: f64) -> Option<u64> {
        if !self.frames.frame_fired() {
            return None;
        }
        if self.animation.tick(timestamp) {
            self.frames.request_next();
        }
        Some(self.animation.value())
    }

    /// Stop for good, e.g. on unmount
    pub fn stop(&mut self) {
        self.frames.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::FrameScheduler;

    #[derive(Debug, Default)]
    pub struct FrameLog {
        pub next_token: u32,
        pub scheduled: Vec<u32>,
        pub cancelled: Vec<u32>,
    }

    impl FrameLog {
        /// Tokens scheduled and neither cancelled nor delivered
        pub fn outstanding(&self, delivered: &[u32]) -> Vec<u32> {
            self.scheduled
                .iter()
                .copied()
                .filter(|t| !self.cancelled.contains(t) && !delivered.contains(t))
                .collect()
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct ManualScheduler {
        pub log: Rc<RefCell<FrameLog>>,
    }

    impl FrameScheduler for ManualScheduler {
        type Token = u32;

        fn schedule(&mut self) -> Option<u32> {
            let mut log = self.log.borrow_mut();
            log.next_token += 1;
            let token = log.next_token;
            log.scheduled.push(token);
            Some(token)
        }

        fn cancel(&mut self, token: u32) {
            self.log.borrow_mut().cancelled.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    #[test]
    fn test_counter_starts_idle() {
        let mut counter = CounterAnimation::new(2500);
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.value(), 0);

        // Frames before begin do nothing
        assert!(!counter.tick(500.0));
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_counter_halfway_and_settled() {
        let mut counter = CounterAnimation::with_duration(2500, 2000.0);
        assert!(counter.begin());

        // First frame fixes the start time
        assert!(counter.tick(0.0));
        assert_eq!(counter.value(), 0);

        assert!(counter.tick(1000.0));
        assert_eq!(counter.value(), 1250);

        assert!(!counter.tick(2000.0));
        assert_eq!(counter.value(), 2500);
        assert!(counter.is_settled());

        assert!(!counter.tick(9000.0));
        assert_eq!(counter.value(), 2500);
    }

    #[test]
    fn test_counter_progress_is_linear() {
        let mut counter = CounterAnimation::with_duration(2500, 2000.0);
        counter.begin();
        counter.tick(0.0);

        let values: Vec<u64> = [500.0, 1000.0, 1500.0]
            .into_iter()
            .map(|t| {
                counter.tick(t);
                counter.value()
            })
            .collect();

        // Equal time steps give equal value steps
        assert_eq!(values, vec![625, 1250, 1875]);
    }

    #[test]
    fn test_counter_start_time_is_first_frame() {
        let mut counter = CounterAnimation::with_duration(100, 1000.0);
        counter.begin();
        counter.tick(5000.0);
        assert_eq!(
            counter.phase(),
            CounterPhase::Animating {
                started_at: Some(5000.0)
            }
        );

        counter.tick(5250.0);
        assert_eq!(counter.value(), 25);
    }

    #[test]
    fn test_counter_value_is_floored() {
        let mut counter = CounterAnimation::with_duration(15, 2000.0);
        counter.begin();
        counter.tick(0.0);
        counter.tick(1000.0);
        // 15 * 0.5 = 7.5
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn test_counter_begin_only_once() {
        let mut counter = CounterAnimation::new(98);
        assert!(counter.begin());
        assert!(!counter.begin());

        counter.tick(0.0);
        counter.tick(2500.0);
        assert!(counter.is_settled());
        assert!(!counter.begin());
        assert_eq!(counter.phase(), CounterPhase::Settled);
    }

    #[test]
    fn test_zero_duration_settles_on_first_frame() {
        let mut counter = CounterAnimation::with_duration(50, 0.0);
        counter.begin();
        assert!(!counter.tick(12.0));
        assert_eq!(counter.value(), 50);

        let counter = CounterAnimation::with_duration(50, -10.0);
        assert_eq!(counter.duration_ms, 0.0);
    }

    #[test]
    fn test_frame_loop_does_not_double_schedule() {
        let scheduler = ManualScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());

        assert!(frames.request_next());
        assert!(frames.request_next());
        assert_eq!(scheduler.log.borrow().scheduled, vec![1]);
        assert!(frames.is_pending());

        assert!(frames.frame_fired());
        assert!(!frames.is_pending());
        assert!(frames.request_next());
        assert_eq!(scheduler.log.borrow().scheduled, vec![1, 2]);
    }

    #[test]
    fn test_frame_loop_cancel() {
        let scheduler = ManualScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.request_next();
        frames.cancel();

        assert!(frames.is_cancelled());
        assert!(!frames.is_pending());
        assert_eq!(scheduler.log.borrow().cancelled, vec![1]);

        // No frames after cancellation, and a stray frame is rejected
        assert!(!frames.request_next());
        assert!(!frames.frame_fired());
        assert_eq!(scheduler.log.borrow().scheduled, vec![1]);
    }

    #[test]
    fn test_frame_loop_drop_cancels_pending() {
        let scheduler = ManualScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.request_next();
        drop(frames);

        assert_eq!(scheduler.log.borrow().cancelled, vec![1]);
    }

    #[test]
    fn test_driver_runs_to_completion() {
        let scheduler = ManualScheduler::default();
        let mut driver = CounterDriver::new(
            CounterAnimation::with_duration(2500, 2000.0),
            scheduler.clone(),
        );

        driver.start();
        assert!(driver.frames.is_pending());

        assert_eq!(driver.on_frame(100.0), Some(0));
        assert_eq!(driver.on_frame(1100.0), Some(1250));
        assert!(driver.frames.is_pending());
        assert_eq!(driver.on_frame(2100.0), Some(2500));

        // Settled: nothing left to schedule
        assert!(!driver.frames.is_pending());
        assert_eq!(scheduler.log.borrow().scheduled.len(), 3);
    }

    #[test]
    fn test_driver_start_is_idempotent() {
        let scheduler = ManualScheduler::default();
        let mut driver = CounterDriver::new(CounterAnimation::new(15), scheduler.clone());
        driver.start();
        driver.start();
        assert_eq!(scheduler.log.borrow().scheduled, vec![1]);
    }

    #[test]
    fn test_driver_stop_mid_animation() {
        let scheduler = ManualScheduler::default();
        let mut driver = CounterDriver::new(CounterAnimation::new(2500), scheduler.clone());
        driver.start();
        driver.on_frame(0.0);
        driver.stop();

        let log = scheduler.log.borrow();
        assert_eq!(log.outstanding(&[1]), Vec::<u32>::new());
        drop(log);

        // A frame that was already queued by the platform is ignored
        assert_eq!(driver.on_frame(500.0), None);
        assert_eq!(driver.animation.value(), 0);
    }

    #[test]
    fn test_driver_never_started_stays_idle() {
        let scheduler = ManualScheduler::default();
        let driver = CounterDriver::new(CounterAnimation::new(50), scheduler.clone());
        assert_eq!(driver.animation.phase(), CounterPhase::Idle);
        assert_eq!(driver.animation.value(), 0);
        drop(driver);

        let log = scheduler.log.borrow();
        assert!(log.scheduled.is_empty());
        assert!(log.cancelled.is_empty());
    }
}
