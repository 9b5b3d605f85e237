use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub(crate) type Callback = Box<dyn FnMut() + Send>;

/// One registered observer. The slot holds `Some(callback)` while
/// subscribed and `None` once unsubscribed; delivery and unsubscription
/// contend on the same lock, so once `unsubscribe` returns no further
/// invocation can start.
struct Slot {
    callback: Mutex<Option<Callback>>,
}

/// Store-wide observer registry. The store signals on every write, to any
/// key; per-flag filtering and de-duplication happen on the subscriber
/// side (see [`dedup`]).
pub(crate) struct ChangeNotifier {
    subscribers: Mutex<Vec<Weak<Slot>>>,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        ChangeNotifier {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, callback: Callback) -> Subscription {
        let slot = Arc::new(Slot {
            callback: Mutex::new(Some(callback)),
        });

        lock(&self.subscribers).push(Arc::downgrade(&slot));

        Subscription { slot }
    }

    /// Fans the change signal out to every live subscriber, on the calling
    /// thread. Delivery holds each subscriber's slot lock, so a callback
    /// must not unsubscribe itself or write back into the store.
    pub(crate) fn broadcast(&self) {
        let live: Vec<Arc<Slot>> = {
            let mut subscribers = lock(&self.subscribers);
            subscribers.retain(|slot| slot.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        tracing::trace!(subscribers = live.len(), "Broadcasting a store change");

        for slot in live {
            if let Some(callback) = lock(&slot.callback).as_mut() {
                callback();
            }
        }
    }
}

/// A live registration on a flag's change stream. Dropping it
/// unsubscribes.
pub struct Subscription {
    slot: Arc<Slot>,
}

impl Subscription {
    /// An already-terminated subscription that was never registered and
    /// will never deliver. Flags whose value cannot change hand this out.
    pub(crate) fn completed() -> Self {
        Subscription {
            slot: Arc::new(Slot {
                callback: Mutex::new(None),
            }),
        }
    }

    /// Stops delivery. Blocks until any in-flight invocation of the
    /// callback finishes, so no callback runs after this returns.
    pub fn unsubscribe(&self) {
        lock(&self.slot.callback).take();
    }

    /// Whether this stream has ended, either by unsubscribing or because
    /// it completed on its own.
    pub fn is_terminated(&self) -> bool {
        lock(&self.slot.callback).is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("terminated", &self.is_terminated())
            .finish()
    }
}

/// Adapts a store-wide unit signal into a typed, de-duplicated callback:
/// on every broadcast the flag's value is re-derived via `read` and
/// `on_change` fires only when it differs from the last emitted value.
/// The last-value cell is seeded at subscribe time, so a broadcast that
/// leaves the derived value unchanged never emits.
pub(crate) fn dedup<T, R, F>(read: R, mut on_change: F) -> impl FnMut() + Send + 'static
where
    T: Clone + PartialEq + Send + 'static,
    R: Fn() -> T + Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    let mut last = read();

    move || {
        let current = read();
        if current != last {
            last = current.clone();
            on_change(current);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
