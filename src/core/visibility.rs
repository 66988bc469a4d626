//! One-shot viewport visibility trigger
//!
//! Each content block owns a [`VisibilityTrigger`] that flips a reveal flag
//! the first time the block is at least `threshold` visible. The flag never
//! goes back to false. Observation keeps running after the reveal and only
//! stops when the trigger is released (explicitly or on drop).
//!
//! The platform observer is abstracted behind [`ObserverBackend`]; the browser
//! implementation wraps `IntersectionObserver`.

/// Default fraction of the element that must be visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Options for a visibility trigger
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element area that must intersect the viewport
    pub threshold: f64,
    /// Margin around the viewport, CSS syntax (e.g. `"0px 0px -50px 0px"`)
    pub root_margin: Option<String>,
}

impl VisibilityOptions {
    /// Options with a custom threshold, clamped to `[0, 1]`
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            ..Self::default()
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = Some(margin.into());
        self
    }

    /// Threshold actually used for comparisons
    pub fn effective_threshold(&self) -> f64 {
        clamp_threshold(self.threshold)
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: None,
        }
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// A single intersection report from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Platform side of a visibility trigger
pub trait ObserverBackend {
    type Target;

    /// Start observing a target
    fn observe(&mut self, target: &Self::Target);

    /// Stop observing and free platform resources
    fn disconnect(&mut self);
}

/// Lifecycle of the observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationState {
    /// Created, no element attached yet
    Pending,
    /// Observing an element
    Observing,
    /// Released; no further callbacks have any effect
    Released,
}

/// Owned one-shot reveal trigger for a single element
pub struct VisibilityTrigger<B: ObserverBackend> {
    options: VisibilityOptions,
    backend: B,
    state: ObservationState,
    revealed: bool,
}

impl<B: ObserverBackend> VisibilityTrigger<B> {
    pub fn new(options: VisibilityOptions, backend: B) -> Self {
        Self {
            options,
            backend,
            state: ObservationState::Pending,
            revealed: false,
        }
    }

    /// Attach the element to observe.
    ///
    /// The handle is write-once: only the first attach starts observation.
    /// Returns `true` if observation started.
    pub fn attach(&mut self, target: &B::Target) -> bool {
        if self.state != ObservationState::Pending {
            return false;
        }
        self.backend.observe(target);
        self.state = ObservationState::Observing;
        true
    }

    /// Feed an intersection report. Returns `true` only on the call that
    /// revealed the element.
    pub fn on_intersection(&mut self, sample: IntersectionSample) -> bool {
        if self.state != ObservationState::Observing || self.revealed {
            return false;
        }
        if sample.is_intersecting && sample.ratio >= self.options.effective_threshold() {
            self.revealed = true;
            tracing::debug!(ratio = sample.ratio, "block revealed");
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn state(&self) -> ObservationState {
        self.state
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    /// Stop observing. Safe to call more than once and before any attach.
    pub fn release(&mut self) {
        if self.state == ObservationState::Released {
            return;
        }
        self.backend.disconnect();
        self.state = ObservationState::Released;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ObserverBackend> Drop for VisibilityTrigger<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ObserverBackend;

    /// Records backend calls so tests can check the observer lifecycle
    #[derive(Debug, Default)]
    pub struct ObserverLog {
        pub observed: Vec<&'static str>,
        pub disconnects: usize,
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingObserver {
        pub log: Rc<RefCell<ObserverLog>>,
    }

    impl ObserverBackend for RecordingObserver {
        type Target = &'static str;

        fn observe(&mut self, target: &Self::Target) {
            self.log.borrow_mut().observed.push(target);
        }

        fn disconnect(&mut self) {
            self.log.borrow_mut().disconnects += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingObserver;
    use super::*;

    fn trigger() -> (VisibilityTrigger<RecordingObserver>, RecordingObserver) {
        let backend = RecordingObserver::default();
        (
            VisibilityTrigger::new(VisibilityOptions::default(), backend.clone()),
            backend,
        )
    }

    #[test]
    fn test_default_options() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert!(options.root_margin.is_none());
    }

    #[test]
    fn test_caller_options_override_threshold() {
        let options = VisibilityOptions::with_threshold(0.5).root_margin("0px 0px -50px 0px");
        assert_eq!(options.threshold, 0.5);
        assert_eq!(options.root_margin.as_deref(), Some("0px 0px -50px 0px"));

        assert_eq!(VisibilityOptions::with_threshold(3.0).threshold, 1.0);
        assert_eq!(VisibilityOptions::with_threshold(-1.0).threshold, 0.0);
        assert_eq!(VisibilityOptions::with_threshold(f64::NAN).threshold, 0.1);
    }

    #[test]
    fn test_not_revealed_before_attach() {
        let (mut trigger, _) = trigger();
        assert_eq!(trigger.state(), ObservationState::Pending);
        assert!(!trigger.on_intersection(IntersectionSample::visible(1.0)));
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn test_attach_is_write_once() {
        let (mut trigger, backend) = trigger();
        assert!(trigger.attach(&"about"));
        assert!(!trigger.attach(&"services"));

        assert_eq!(backend.log.borrow().observed, vec!["about"]);
        assert_eq!(trigger.state(), ObservationState::Observing);
    }

    #[test]
    fn test_reveal_requires_threshold() {
        let (mut trigger, _) = trigger();
        trigger.attach(&"about");

        assert!(!trigger.on_intersection(IntersectionSample::visible(0.05)));
        assert!(!trigger.is_revealed());

        assert!(trigger.on_intersection(IntersectionSample::visible(0.1)));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_not_intersecting_does_not_reveal() {
        let (mut trigger, _) = trigger();
        trigger.attach(&"about");

        let sample = IntersectionSample {
            is_intersecting: false,
            ratio: 0.5,
        };
        assert!(!trigger.on_intersection(sample));
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let (mut trigger, backend) = trigger();
        trigger.attach(&"about");
        trigger.on_intersection(IntersectionSample::visible(0.8));

        for sample in [
            IntersectionSample::hidden(),
            IntersectionSample::visible(0.0),
            IntersectionSample::visible(1.0),
            IntersectionSample::hidden(),
        ] {
            assert!(!trigger.on_intersection(sample));
            assert!(trigger.is_revealed());
        }

        // Still observing after the reveal
        assert_eq!(trigger.state(), ObservationState::Observing);
        assert_eq!(backend.log.borrow().disconnects, 0);
    }

    #[test]
    fn test_release_before_reveal() {
        let (mut trigger, backend) = trigger();
        trigger.attach(&"contact");
        trigger.release();

        assert_eq!(trigger.state(), ObservationState::Released);
        assert!(!trigger.is_revealed());
        assert_eq!(backend.log.borrow().disconnects, 1);

        // Late callbacks after release are ignored
        assert!(!trigger.on_intersection(IntersectionSample::visible(1.0)));
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn test_release_is_idempotent_and_runs_on_drop() {
        let (mut trigger, backend) = trigger();
        trigger.attach(&"about");
        trigger.release();
        trigger.release();
        drop(trigger);

        assert_eq!(backend.log.borrow().disconnects, 1);
    }

    #[test]
    fn test_drop_without_attach_disconnects_once() {
        let (trigger, backend) = trigger();
        drop(trigger);
        assert_eq!(backend.log.borrow().disconnects, 1);
        assert!(backend.log.borrow().observed.is_empty());
    }

    #[test]
    fn test_attach_after_release_is_ignored() {
        let (mut trigger, backend) = trigger();
        trigger.release();
        assert!(!trigger.attach(&"about"));
        assert!(backend.log.borrow().observed.is_empty());
    }

    #[test]
    fn test_zero_threshold_reveals_on_any_intersection() {
        let backend = RecordingObserver::default();
        let mut trigger =
            VisibilityTrigger::new(VisibilityOptions::with_threshold(0.0), backend);
        trigger.attach(&"hero");
        assert!(trigger.on_intersection(IntersectionSample::visible(0.0)));
    }
}
