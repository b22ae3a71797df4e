//! Delay scheduling behind a seam so the cascade and the form cooldown can
//! run against a fake clock in tests instead of real browser timers.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Run `callback` once after `delay_ms`. Fire-and-forget: there is no
    /// cancellation, matching the page's timer use.
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Browser implementation over `gloo_timers`. The handle is leaked with
/// `forget`, same as the rest of the page's one-shot timers.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, move || callback()).forget();
    }
}

#[cfg(test)]
pub mod testing {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};

    struct Pending {
        due: u64,
        seq: u64,
        callback: Box<dyn FnOnce()>,
    }

    /// Virtual clock. Callbacks queue up with their due time and run, in
    /// due-then-insertion order, when `advance` moves the clock past them.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        next_seq: Cell<u64>,
        pending: RefCell<Vec<Pending>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending_count(&self) -> usize {
            self.pending.borrow().len()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    let due_next = pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    match due_next {
                        Some(i) => pending.remove(i),
                        None => break,
                    }
                };
                self.now.set(next.due);
                (next.callback)();
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
            let seq = self.next_seq.get();
            self.next_seq.set(seq + 1);
            self.pending.borrow_mut().push(Pending {
                due: self.now.get() + u64::from(delay_ms),
                seq,
                callback,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_due_time_order() {
        let scheduler = ManualScheduler::new();
        let order: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(300u32, 3u32), (0, 1), (150, 2)] {
            let order = order.clone();
            scheduler.after(delay, Box::new(move || order.borrow_mut().push(tag)));
        }
        scheduler.advance(1_000);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn advance_only_runs_what_is_due() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for delay in [100u32, 200] {
            let fired = fired.clone();
            scheduler.after(delay, Box::new(move || fired.borrow_mut().push(delay)));
        }
        scheduler.advance(100);
        assert_eq!(*fired.borrow(), vec![100]);
        assert_eq!(scheduler.pending_count(), 1);
        scheduler.advance(100);
        assert_eq!(*fired.borrow(), vec![100, 200]);
    }

    #[test]
    fn callbacks_scheduled_during_a_callback_still_run_when_due() {
        let scheduler = Rc::new(ManualScheduler::new());
        let fired = Rc::new(RefCell::new(Vec::new()));
        {
            let scheduler2 = scheduler.clone();
            let fired2 = fired.clone();
            scheduler.after(
                50,
                Box::new(move || {
                    fired2.borrow_mut().push("outer");
                    let fired3 = fired2.clone();
                    scheduler2.after(10, Box::new(move || fired3.borrow_mut().push("inner")));
                }),
            );
        }
        scheduler.advance(100);
        assert_eq!(*fired.borrow(), vec!["outer", "inner"]);
    }
}
