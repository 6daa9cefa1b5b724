use unitkata_core::AlphabetSong;

#[test]
fn song_serialization_uses_expected_wire_fields() {
    let song = AlphabetSong::new(12, 3);

    let json = serde_json::to_value(song).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["length_in_minutes"], 3);

    let decoded: AlphabetSong = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, song);
}

#[test]
fn song_deserialization_requires_length() {
    let value = serde_json::json!({ "id": 1 });

    assert!(serde_json::from_value::<AlphabetSong>(value).is_err());
}
