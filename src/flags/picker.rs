use crate::flag::FlagDescriptor;
use crate::notifier::{self, Subscription};
use crate::store::FlagStore;
use crate::view::{Binding, FlagView, Widget};

/// A closed, ordered set of named cases with stable string encodings.
///
/// Raw strings must be unique across `CASES`: they are what gets
/// persisted, so `from_raw(case.raw())` must round-trip every case, and
/// renaming a raw orphans previously stored values (which then read back
/// as the flag's default). The [`flag_cases!`](crate::flag_cases) macro
/// declares an enum and this impl in one go.
pub trait FlagCases: Copy + PartialEq + Send + Sync + 'static {
    /// Every case, in declared order.
    const CASES: &'static [Self];

    fn raw(self) -> &'static str;

    fn from_raw(raw: &str) -> Option<Self> {
        Self::CASES.iter().copied().find(|case| case.raw() == raw)
    }
}

/// A flag selecting one case of `V`, stored locally as the case's raw
/// string.
#[derive(Clone)]
pub struct LocalPickerFlag<V: FlagCases> {
    id: String,
    title: String,
    group: Option<String>,
    default_value: V,
    store: FlagStore,
}

impl<V: FlagCases> LocalPickerFlag<V> {
    pub fn new(
        store: &FlagStore,
        id: impl Into<String>,
        title: impl Into<String>,
        default_value: V,
    ) -> Self {
        LocalPickerFlag {
            id: id.into(),
            title: title.into(),
            group: None,
            default_value,
            store: store.clone(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl<V: FlagCases> FlagDescriptor for LocalPickerFlag<V> {
    type Value = V;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn read_value(&self) -> V {
        // Absent keys, non-string values, and raws persisted by a
        // since-removed case all fall back to the default.
        self.store
            .get_str(&self.id)
            .and_then(|raw| V::from_raw(&raw))
            .unwrap_or(self.default_value)
    }

    fn write_value(&self, value: V) {
        self.store.set(&self.id, value.raw());
    }

    fn changes<F>(&self, on_change: F) -> Subscription
    where
        F: FnMut(V) + Send + 'static,
    {
        let flag = self.clone();
        self.store
            .on_any_change(notifier::dedup(move || flag.read_value(), on_change))
    }

    fn view(&self) -> FlagView {
        let options = V::CASES
            .iter()
            .map(|case| case.raw().to_string())
            .collect();

        let reader = self.clone();
        let writer = self.clone();
        let binding = Binding::new(
            move || reader.read_value().raw().to_string(),
            move |raw: String| match V::from_raw(&raw) {
                Some(value) => writer.write_value(value),
                None => {
                    tracing::debug!(%raw, id = %writer.id, "Ignoring a picker selection with no matching case");
                }
            },
        );

        FlagView {
            id: self.id.clone(),
            title: self.title.clone(),
            group: self.group.clone(),
            widget: Widget::Picker { options, binding },
        }
    }
}
