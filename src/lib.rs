mod flag;
pub mod flags;
mod menu;
mod notifier;
pub mod store;
mod view;

#[cfg(test)]
mod test;

pub use flag::FlagDescriptor;
pub use flags::{FlagCases, LocalPickerFlag, LocalToggleFlag, StubRemoteFlag};
pub use menu::{FlagSection, sections};
pub use notifier::Subscription;
pub use store::{FlagStore, RawValue, StoreBackend, StoreError};
pub use view::{Binding, FlagView, Widget};

/// Declares a fieldless enum and its [`FlagCases`] impl in one go,
/// keeping each case next to the raw string it persists as:
///
/// ```rust
/// flagpanel::flag_cases! {
///     pub enum RefreshRate {
///         Low = "low",
///         Medium = "medium",
///         High = "high",
///     }
/// }
/// ```
#[macro_export]
macro_rules! flag_cases {
    ($vis:vis enum $name:ident { $($case:ident = $raw:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($case,)+
        }

        impl $crate::FlagCases for $name {
            const CASES: &'static [Self] = &[$(Self::$case),+];

            fn raw(self) -> &'static str {
                match self {
                    $(Self::$case => $raw,)+
                }
            }
        }
    };
}
