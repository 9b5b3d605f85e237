use crate::flag::FlagDescriptor;
use crate::notifier::{self, Subscription};
use crate::store::FlagStore;
use crate::view::{FlagView, Widget};

/// A boolean flag stored locally under its id.
#[derive(Clone)]
pub struct LocalToggleFlag {
    id: String,
    title: String,
    group: Option<String>,
    default_value: bool,
    store: FlagStore,
}

impl LocalToggleFlag {
    pub fn new(
        store: &FlagStore,
        id: impl Into<String>,
        title: impl Into<String>,
        default_value: bool,
    ) -> Self {
        LocalToggleFlag {
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

impl FlagDescriptor for LocalToggleFlag {
    type Value = bool;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn read_value(&self) -> bool {
        self.store.get_bool(&self.id).unwrap_or(self.default_value)
    }

    fn write_value(&self, value: bool) {
        self.store.set(&self.id, value);
    }

    fn changes<F>(&self, on_change: F) -> Subscription
    where
        F: FnMut(bool) + Send + 'static,
    {
        let flag = self.clone();
        self.store
            .on_any_change(notifier::dedup(move || flag.read_value(), on_change))
    }

    fn view(&self) -> FlagView {
        FlagView {
            id: self.id.clone(),
            title: self.title.clone(),
            group: self.group.clone(),
            widget: Widget::Toggle {
                binding: self.binding(),
            },
        }
    }
}
