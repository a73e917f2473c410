//! Leptos Debounce Utilities
//!
//! Trailing-edge debounce for Leptos input handlers.
//! A `Debouncer` owns at most one pending timer; scheduling again cancels it.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Boxed callback run when a timer fires
pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that can run a task after a delay.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// Browser timers via `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        // Timeout clears itself on drop
        Timeout::new(delay_ms, task)
    }
}

/// Single-shot, restartable timer
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Restart the timer with a new task, cancelling any pending one
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // Drop the old handle first so its timer is cleared before the new one is armed
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a handle is still held.
    ///
    /// A fired timer keeps its handle until the next `schedule` or `cancel`.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Create a browser debouncer tied to the current reactive owner.
///
/// The pending timer is cancelled when the owning component is cleaned up.
pub fn use_debouncer(delay_ms: u32) -> StoredValue<Debouncer<GlooScheduler>, LocalStorage> {
    let debouncer = StoredValue::new_local(Debouncer::new(GlooScheduler, delay_ms));
    on_cleanup(move || {
        let _ = debouncer.try_update_value(|d| d.cancel());
    });
    debouncer
}

// ========================
// Manual clock (tests)
// ========================

#[cfg(any(test, feature = "testing"))]
pub use manual::{ManualHandle, ManualScheduler};

#[cfg(any(test, feature = "testing"))]
mod manual {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::{Scheduler, Task};

    #[derive(Default)]
    struct ManualQueue {
        now_ms: u64,
        next_id: u64,
        // (due, id) keeps insertion order for timers due at the same instant
        tasks: BTreeMap<(u64, u64), Task>,
    }

    /// Virtual-time scheduler; tasks run only when `advance` passes their deadline
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<ManualQueue>>,
    }

    /// Handle for a task queued on a `ManualScheduler`
    pub struct ManualHandle {
        key: (u64, u64),
        queue: Rc<RefCell<ManualQueue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.queue.borrow_mut().tasks.remove(&self.key);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now_ms(&self) -> u64 {
            self.queue.borrow().now_ms
        }

        /// Number of tasks still waiting to fire
        pub fn queued(&self) -> usize {
            self.queue.borrow().tasks.len()
        }

        /// Move the clock forward, running every task that comes due
        pub fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let first = queue.tasks.keys().next().copied();
                    let task = match first {
                        Some(key) if key.0 <= target => {
                            queue.now_ms = key.0;
                            queue.tasks.remove(&key)
                        }
                        _ => None,
                    };
                    task
                };
                // Borrow released before running so tasks may schedule again
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now_ms = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let key = (queue.now_ms + u64::from(delay_ms), queue.next_id);
            queue.next_id += 1;
            queue.tasks.insert(key, task);
            ManualHandle {
                key,
                queue: Rc::clone(&self.queue),
            }
        }
    }
}
