use crate::notifier::Subscription;
use crate::view::{Binding, FlagView};

/// The contract every flag kind satisfies: identity, metadata, a typed
/// value with explicit read/write methods, a de-duplicated change
/// subscription, and a renderable view description for the debug menu.
///
/// Flags are cheap value-type descriptors; all mutable state lives in the
/// backing store, so a flag can be re-created per render pass without
/// losing anything.
pub trait FlagDescriptor {
    type Value: Clone + PartialEq + Send + 'static;

    /// Stable, globally unique identifier. Doubles as the storage key and
    /// as the notification filter key, so it must not change across runs.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// Grouping tag used for menu sectioning. Not unique.
    fn group(&self) -> Option<&str> {
        None
    }

    /// Reads the current value. Stored flags re-derive it from the
    /// backing store on every call; an absent or unparsable stored value
    /// resolves to the flag's default, never an error.
    fn read_value(&self) -> Self::Value;

    /// Writes a new value, effective for reads as soon as this returns.
    fn write_value(&self, value: Self::Value);

    /// Subscribes to value changes. Consecutive duplicates are suppressed
    /// and writes to unrelated keys do not emit; delivery may happen
    /// synchronously on the writing thread. The stream ends when the
    /// returned [`Subscription`] is unsubscribed or dropped.
    fn changes<F>(&self, on_change: F) -> Subscription
    where
        F: FnMut(Self::Value) + Send + 'static;

    fn view(&self) -> FlagView;

    /// Two-way adapter for UI widget binding. Reads and writes go through
    /// the same paths as [`read_value`](Self::read_value) and
    /// [`write_value`](Self::write_value).
    fn binding(&self) -> Binding<Self::Value>
    where
        Self: Clone + Send + Sync + 'static,
    {
        let reader = self.clone();
        let writer = self.clone();

        Binding::new(
            move || reader.read_value(),
            move |value| writer.write_value(value),
        )
    }
}
