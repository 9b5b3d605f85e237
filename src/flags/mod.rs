mod picker;
mod remote_stub;
mod toggle;

pub use picker::{FlagCases, LocalPickerFlag};
pub use remote_stub::StubRemoteFlag;
pub use toggle::LocalToggleFlag;
