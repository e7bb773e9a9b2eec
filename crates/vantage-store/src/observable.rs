//! A typed value that replays on subscribe and notifies on every change.
//!
//! One `Observable` backs each subscribable state key. Subscribing invokes
//! the callback immediately with the current value, so subscribers never
//! wait for the first change. Naive emitters do not replay; this one does
//! by contract.
//!
//! Notification is synchronous and single-pass: `set`/`update` store the new
//! value, then invoke every registered callback with a clone of it *outside*
//! the internal lock. A callback may therefore re-enter the observable
//! (read, subscribe, even mutate); a nested mutation runs its own complete
//! notification pass, and the remaining callbacks of the outer pass still
//! receive the outer pass's snapshot.

use std::sync::{Arc, Mutex, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Register a callback and immediately replay the current value to it.
    /// Dropping the returned guard (or calling `unsubscribe`) removes it.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let callback: Callback<T> = Arc::new(callback);
        let (id, snapshot) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.value.clone())
        };

        // Replay outside the lock so the callback may re-enter.
        callback(&snapshot);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        let (snapshot, subscribers) = {
            let mut inner = lock(&self.inner);
            inner.value = value;
            (inner.value.clone(), snapshot_subscribers(&inner))
        };
        notify(&subscribers, &snapshot);
    }

    /// Mutate the value in place and notify every subscriber.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        let (snapshot, subscribers) = {
            let mut inner = lock(&self.inner);
            mutate(&mut inner.value);
            (inner.value.clone(), snapshot_subscribers(&inner))
        };
        notify(&subscribers, &snapshot);
    }
}

fn snapshot_subscribers<T>(inner: &Inner<T>) -> Vec<Callback<T>> {
    inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
}

fn notify<T>(subscribers: &[Callback<T>], value: &T) {
    for callback in subscribers {
        callback(value);
    }
}

// Poisoning only happens after a panic in a lock holder; recover the data
// rather than cascading the panic into every other subscriber.
fn lock<T>(inner: &Arc<Mutex<Inner<T>>>) -> std::sync::MutexGuard<'_, Inner<T>> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Guard returned by [`Observable::subscribe`]; removes the callback when
/// dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn subscribe_replays_current_value() {
        let obs = Observable::new(7_u32);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen2 = seen.clone();
        let _sub = obs.subscribe(move |v| seen2.lock().unwrap().push(*v));

        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[test]
    fn set_notifies_all_subscribers() {
        let obs = Observable::new(0_u32);
        let count = Arc::new(AtomicUsize::new(0));

        let c1 = count.clone();
        let _a = obs.subscribe(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        let c2 = count.clone();
        let _b = obs.subscribe(move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        count.store(0, Ordering::SeqCst); // ignore the replays
        obs.set(1);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let obs = Observable::new(0_u32);
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        let sub = obs.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        drop(sub);

        obs.set(1);
        assert_eq!(count.load(Ordering::SeqCst), 1); // replay only
    }

    #[test]
    fn explicit_unsubscribe() {
        let obs = Observable::new(0_u32);
        let count = Arc::new(AtomicUsize::new(0));

        let c = count.clone();
        let sub = obs.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        sub.unsubscribe();

        obs.set(1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reentrant_mutation_completes() {
        let obs = Arc::new(Observable::new(0_u32));

        let obs2 = obs.clone();
        let _sub = obs.subscribe(move |v| {
            // Bump once from inside the notification pass.
            if *v == 1 {
                obs2.set(2);
            }
        });

        obs.set(1);
        assert_eq!(obs.get(), 2);
    }

    #[test]
    fn update_mutates_in_place() {
        let obs = Observable::new(vec![1, 2]);
        obs.update(|v| v.push(3));
        assert_eq!(obs.get(), vec![1, 2, 3]);
    }
}
