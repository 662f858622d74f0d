use bscribe::domain::JobKey;

#[test]
fn given_hex_and_extension_when_creating_key_then_extension_is_appended() {
    let key = JobKey::new("a1b2c3d4e5f6a7b8", ".wav");

    assert_eq!(key.as_str(), "a1b2c3d4e5f6a7b8.wav");
}

#[test]
fn given_empty_extension_when_creating_key_then_key_is_hex_only() {
    let key = JobKey::new("a1b2c3d4e5f6a7b8", "");

    assert_eq!(key.as_str(), "a1b2c3d4e5f6a7b8");
}

#[test]
fn given_raw_key_when_displayed_then_matches_as_str() {
    let key = JobKey::from_raw("0011223344556677.mp3");

    assert_eq!(format!("{}", key), key.as_str());
}

#[test]
fn given_same_raw_value_when_comparing_keys_then_they_are_equal() {
    assert_eq!(JobKey::from_raw("abc.wav"), JobKey::new("abc", ".wav"));
}
