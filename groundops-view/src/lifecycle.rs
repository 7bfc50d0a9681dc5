//! Ownership of external presentation resources (map widgets, chart canvases).
//!
//! A slot holds at most one live instance. It is created at most once per
//! mount, destroyed before any re-creation, and destroyed exactly once when
//! the slot is torn down or dropped.

use std::fmt::Display;

/// An external instance that must be released explicitly.
pub trait Disposable {
    fn destroy(&mut self);
}

#[derive(Debug)]
pub struct InstanceSlot<R: Disposable> {
    label: &'static str,
    instance: Option<R>,
}

impl<R: Disposable> InstanceSlot<R> {
    pub fn new(label: &'static str) -> Self {
        Self { label, instance: None }
    }

    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }

    pub fn get(&self) -> Option<&R> {
        self.instance.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.instance.as_mut()
    }

    /// Create the instance unless one is already live.
    ///
    /// Returns true when an instance is live afterwards. A failed creation is
    /// logged and skipped so the screen keeps rendering without it.
    pub fn ensure<E, F>(&mut self, create: F) -> bool
    where
        E: Display,
        F: FnOnce() -> Result<R, E>,
    {
        if self.instance.is_some() {
            return true;
        }

        match create() {
            Ok(instance) => {
                tracing::debug!("{} instance created", self.label);
                self.instance = Some(instance);
                true
            }
            Err(err) => {
                tracing::warn!("{} unavailable, skipping: {}", self.label, err);
                false
            }
        }
    }

    /// Replace the live instance, destroying the previous one first.
    pub fn recreate<E, F>(&mut self, create: F) -> bool
    where
        E: Display,
        F: FnOnce() -> Result<R, E>,
    {
        self.destroy();
        self.ensure(create)
    }

    pub fn destroy(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
            tracing::debug!("{} instance destroyed", self.label);
        }
    }
}

impl<R: Disposable> Drop for InstanceSlot<R> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        created: Cell<u32>,
        destroyed: Cell<u32>,
    }

    struct FakeChart {
        counters: Rc<Counters>,
        generation: u32,
    }

    impl Disposable for FakeChart {
        fn destroy(&mut self) {
            self.counters.destroyed.set(self.counters.destroyed.get() + 1);
        }
    }

    fn factory(counters: &Rc<Counters>) -> impl FnOnce() -> Result<FakeChart, String> + '_ {
        move || {
            let generation = counters.created.get() + 1;
            counters.created.set(generation);
            Ok(FakeChart {
                counters: Rc::clone(counters),
                generation,
            })
        }
    }

    #[test]
    fn test_ensure_creates_at_most_once() {
        let counters = Rc::new(Counters::default());
        let mut slot = InstanceSlot::new("status chart");

        assert!(slot.ensure(factory(&counters)));
        assert!(slot.ensure(factory(&counters)));
        assert_eq!(counters.created.get(), 1);
        assert_eq!(slot.get().unwrap().generation, 1);
    }

    #[test]
    fn test_recreate_destroys_previous_first() {
        let counters = Rc::new(Counters::default());
        let mut slot = InstanceSlot::new("status chart");

        slot.ensure(factory(&counters));
        slot.recreate(factory(&counters));

        assert_eq!(counters.created.get(), 2);
        assert_eq!(counters.destroyed.get(), 1);
        assert_eq!(slot.get().unwrap().generation, 2);
    }

    #[test]
    fn test_destroy_runs_exactly_once() {
        let counters = Rc::new(Counters::default());
        {
            let mut slot = InstanceSlot::new("equipment map");
            slot.ensure(factory(&counters));
            slot.destroy();
            slot.destroy();
            assert!(!slot.is_live());
        }
        assert_eq!(counters.destroyed.get(), 1);

        {
            let mut slot = InstanceSlot::new("equipment map");
            slot.ensure(factory(&counters));
        }
        assert_eq!(counters.destroyed.get(), 2);
    }

    #[test]
    fn test_failed_creation_is_skipped() {
        let mut slot: InstanceSlot<FakeChart> = InstanceSlot::new("equipment map");
        assert!(!slot.ensure(|| Err("canvas unavailable")));
        assert!(!slot.is_live());
    }
}
