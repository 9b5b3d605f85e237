use super::RefreshRate;
use crate::{
    FlagCases, FlagDescriptor, FlagStore, LocalPickerFlag, LocalToggleFlag, StubRemoteFlag,
    Widget, sections,
};

#[test]
fn raw_representations_round_trip() {
    for case in RefreshRate::CASES.iter().copied() {
        assert_eq!(Some(case), RefreshRate::from_raw(case.raw()));
    }
}

#[test]
fn toggle_defaults_when_store_is_empty() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", true);

    assert!(flag.read_value());
}

#[test]
fn toggle_write_then_read() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", true);

    for value in [false, true, false] {
        flag.write_value(value);
        assert_eq!(value, flag.read_value());
    }
}

#[test]
fn picker_defaults_when_store_is_empty() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Medium);

    assert_eq!(RefreshRate::Medium, flag.read_value());
}

#[test]
fn picker_falls_back_on_unknown_raw() {
    super::init_tracing();

    // As if the value was persisted by a case that no longer exists.
    let store = FlagStore::in_memory();
    store.set("refresh-rate", "warp-speed");

    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Low);

    assert_eq!(RefreshRate::Low, flag.read_value());
}

#[test]
fn picker_falls_back_on_type_mismatch() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    store.set("refresh-rate", true);

    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::High);

    assert_eq!(RefreshRate::High, flag.read_value());
}

#[test]
fn picker_write_then_read() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Low);

    for case in RefreshRate::CASES.iter().copied() {
        flag.write_value(case);
        assert_eq!(case, flag.read_value());
    }
}

#[test]
fn binding_goes_through_the_store() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", false);

    let binding = flag.binding();
    assert!(!binding.get());

    binding.set(true);

    // A freshly constructed descriptor sees the write; state lives in the
    // store, not in the flag value.
    let again = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", false);
    assert!(again.read_value());
    assert!(binding.get());
}

#[test]
fn picker_view_lists_cases_in_declared_order() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalPickerFlag::new(&store, "refresh-rate", "Refresh rate", RefreshRate::Low);

    let view = flag.view();
    let Widget::Picker { options, binding } = view.widget else {
        panic!("expected a picker widget, got {:?}", view.widget);
    };

    assert_eq!(vec!["low", "medium", "high"], options);
    assert_eq!("low", binding.get());

    binding.set("high".to_string());
    assert_eq!(RefreshRate::High, flag.read_value());

    // A selection naming no case is dropped, not persisted.
    binding.set("warp-speed".to_string());
    assert_eq!(RefreshRate::High, flag.read_value());
}

#[test]
fn stub_always_reads_true_and_discards_writes() {
    super::init_tracing();

    let flag = StubRemoteFlag::new("new-onboarding");

    assert_eq!("RemoteFlag_new-onboarding", flag.id());
    assert_eq!("new-onboarding", flag.title());
    assert!(flag.read_value());

    flag.write_value(false);
    assert!(flag.read_value());
}

#[test]
fn sections_group_by_tag_in_first_appearance_order() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let views = vec![
        LocalToggleFlag::new(&store, "a", "A", false)
            .with_group("Networking")
            .view(),
        LocalToggleFlag::new(&store, "b", "B", false).view(),
        LocalPickerFlag::new(&store, "c", "C", RefreshRate::Low)
            .with_group("Networking")
            .view(),
        StubRemoteFlag::new("d").with_group("Remote").view(),
    ];

    let sections = sections(views);

    assert_eq!(3, sections.len());

    assert_eq!(Some("Networking".to_string()), sections[0].group);
    assert_eq!(
        vec!["a", "c"],
        sections[0]
            .entries
            .iter()
            .map(|view| view.id.as_str())
            .collect::<Vec<_>>()
    );

    assert_eq!(None, sections[1].group);
    assert_eq!(Some("Remote".to_string()), sections[2].group);
}

#[test]
fn toggle_view_carries_metadata() {
    super::init_tracing();

    let store = FlagStore::in_memory();
    let flag = LocalToggleFlag::new(&store, "enable-http", "Enable HTTP", true).with_group("Networking");

    assert_eq!("enable-http", flag.id());
    assert_eq!("Enable HTTP", flag.title());
    assert_eq!(Some("Networking"), flag.group());

    let view = flag.view();
    assert_eq!("enable-http", view.id);
    assert_eq!("Enable HTTP", view.title);
    assert_eq!(Some("Networking".to_string()), view.group);

    let Widget::Toggle { binding } = view.widget else {
        panic!("expected a toggle widget, got {:?}", view.widget);
    };
    assert!(binding.get());
}
