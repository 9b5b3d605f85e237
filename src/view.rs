use std::sync::Arc;

/// Two-way get/set adapter handed to a UI widget.
pub struct Binding<T> {
    get: Arc<dyn Fn() -> T + Send + Sync>,
    set: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Binding<T> {
    pub fn new(
        get: impl Fn() -> T + Send + Sync + 'static,
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Binding {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding").finish()
    }
}

/// Renderable description of one menu row. The presentation layer decides
/// what a toggle or picker actually looks like; this crate only says
/// which widget a flag wants and hands over the binding to drive it.
#[derive(Debug)]
pub struct FlagView {
    pub id: String,
    pub title: String,
    pub group: Option<String>,
    pub widget: Widget,
}

#[derive(Debug)]
pub enum Widget {
    Toggle {
        binding: Binding<bool>,
    },
    /// `options` are the raw representations in declared order; the
    /// binding speaks raw strings so the widget never needs the case type.
    Picker {
        options: Vec<String>,
        binding: Binding<String>,
    },
    /// A read-only row, for flags that cannot be overridden locally.
    Label {
        text: String,
    },
}
