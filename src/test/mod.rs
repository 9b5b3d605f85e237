mod basic;
mod persistence;

use once_cell::sync::Lazy;
use tracing_subscriber::fmt;

pub(crate) static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = fmt().with_test_writer().try_init();
});

pub(crate) fn init_tracing() {
    Lazy::force(&TRACING);
}

crate::flag_cases! {
    pub(crate) enum RefreshRate {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}
