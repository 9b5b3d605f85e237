use crate::flag::FlagDescriptor;
use crate::notifier::Subscription;
use crate::view::{FlagView, Widget};

/// Fake "remote" flag illustrating how a network-backed variant plugs
/// into the [`FlagDescriptor`] contract: a real integration replaces the
/// read / write / changes bodies and keeps everything else.
#[derive(Clone)]
pub struct StubRemoteFlag {
    id: String,
    title: String,
    group: Option<String>,
}

impl StubRemoteFlag {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        StubRemoteFlag {
            id: format!("RemoteFlag_{key}"),
            title: key,
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl FlagDescriptor for StubRemoteFlag {
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
        true
    }

    fn write_value(&self, value: bool) {
        // A real backend would push this upstream; the stub discards it.
        tracing::debug!(id = %self.id, value, "Discarding a write to a remote flag stub");
    }

    fn changes<F>(&self, _on_change: F) -> Subscription
    where
        F: FnMut(bool) + Send + 'static,
    {
        // Completes without emitting: a static value, as opposed to one
        // that merely has not changed yet.
        Subscription::completed()
    }

    fn view(&self) -> FlagView {
        FlagView {
            id: self.id.clone(),
            title: self.title.clone(),
            group: self.group.clone(),
            widget: Widget::Label {
                text: self.read_value().to_string(),
            },
        }
    }
}
