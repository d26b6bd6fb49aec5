//! Collection Snapshots
//!
//! The live-query surface: subscribe to a collection, receive whole-list
//! snapshots through a callback, unsubscribe on unmount. Snapshots are
//! produced by polling the REST list endpoint on a fixed interval; the first
//! delivery happens immediately. There is no ordering guarantee between a
//! local write and the next snapshot.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::firebase::error::FirebaseError;

/// Delay between snapshot fetches.
pub const POLL_INTERVAL_MS: u32 = 2_500;

/// Handle to an active collection subscription. `unsubscribe` (typically from
/// `on_cleanup`) stops the polling loop before its next delivery.
#[derive(Clone)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

impl Subscription {
    fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// Start delivering snapshots from `fetch` into `on_snapshot` until the
/// returned handle is unsubscribed. Fetch errors are delivered to the
/// callback as well; the loop keeps going afterwards.
pub fn subscribe<T, Fut, F, C>(fetch: F, on_snapshot: C) -> Subscription
where
    T: 'static,
    Fut: Future<Output = Result<Vec<T>, FirebaseError>>,
    F: Fn() -> Fut + 'static,
    C: Fn(Result<Vec<T>, FirebaseError>) + 'static,
{
    let handle = Subscription::new();
    let active = handle.active.clone();

    spawn_local(async move {
        loop {
            if !active.load(Ordering::Relaxed) {
                break;
            }
            let snapshot = fetch().await;
            // The view may have unsubscribed while the request was in flight.
            if !active.load(Ordering::Relaxed) {
                break;
            }
            on_snapshot(snapshot);
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribe_flips_shared_flag() {
        let sub = Subscription::new();
        let clone = sub.clone();
        assert!(sub.is_active());
        clone.unsubscribe();
        assert!(!sub.is_active());
    }
}
