use super::RefreshRate;
use crate::{FlagDescriptor, FlagStore, LocalPickerFlag, LocalToggleFlag};

#[test]
fn values_survive_reopen() {
    super::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("flags.json");

    {
        let store = FlagStore::open(&location).unwrap();
        LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", false).write_value(true);
        LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Low)
            .write_value(RefreshRate::High);
    }

    let store = FlagStore::open(&location).unwrap();

    assert!(LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", false).read_value());
    assert_eq!(
        RefreshRate::High,
        LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Low)
            .read_value()
    );
}

#[test]
fn missing_file_opens_empty() {
    super::init_tracing();

    let dir = tempfile::tempdir().unwrap();

    let store = FlagStore::open(dir.path().join("flags.json")).unwrap();
    let flag = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", true);

    assert!(flag.read_value());
}

#[test]
fn empty_file_opens_empty() {
    super::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("flags.json");
    std::fs::write(&location, b"").unwrap();

    let store = FlagStore::open(&location).unwrap();

    assert_eq!(None, store.get("enable-http"));
}

#[test]
fn stale_raw_on_disk_falls_back_to_default() {
    super::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("flags.json");
    std::fs::write(&location, br#"{ "refresh-rate": "warp-speed" }"#).unwrap();

    let store = FlagStore::open(&location).unwrap();
    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Medium);

    assert_eq!(RefreshRate::Medium, flag.read_value());
}

#[test]
fn persisted_file_is_a_plain_settings_map() {
    super::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let location = dir.path().join("flags.json");

    let store = FlagStore::open(&location).unwrap();
    store.set("enable-http", true);
    store.set("refresh-rate", "high");

    let contents = std::fs::read(&location).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&contents).unwrap();

    assert_eq!(
        serde_json::json!({ "enable-http": true, "refresh-rate": "high" }),
        parsed
    );
}
