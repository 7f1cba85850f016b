//! Settings storage tests


use test_helpers::TestDb;
use verse_core::RepeatMode;
use verse_storage::settings;

#[tokio::test]
async fn unset_settings_fall_back_to_defaults() {
    let db = TestDb::new().await;

    assert!(!settings::shuffle_enabled(db.pool()).await.unwrap());
    assert_eq!(
        settings::repeat_mode(db.pool()).await.unwrap(),
        RepeatMode::Off
    );
}

#[tokio::test]
async fn shuffle_flag_round_trips() {
    let db = TestDb::new().await;

    settings::set_shuffle_enabled(db.pool(), true).await.unwrap();
    assert!(settings::shuffle_enabled(db.pool()).await.unwrap());

    settings::set_shuffle_enabled(db.pool(), false)
        .await
        .unwrap();
    assert!(!settings::shuffle_enabled(db.pool()).await.unwrap());
}

#[tokio::test]
async fn repeat_mode_round_trips() {
    let db = TestDb::new().await;

    for mode in [RepeatMode::All, RepeatMode::One, RepeatMode::Off] {
        settings::set_repeat_mode(db.pool(), mode).await.unwrap();
        assert_eq!(settings::repeat_mode(db.pool()).await.unwrap(), mode);
    }
}

#[tokio::test]
async fn unparseable_repeat_mode_falls_back_to_off() {
    let db = TestDb::new().await;

    settings::set_setting(
        db.pool(),
        settings::SETTING_REPEAT_MODE,
        &serde_json::json!("everything"),
    )
    .await
    .unwrap();

    assert_eq!(
        settings::repeat_mode(db.pool()).await.unwrap(),
        RepeatMode::Off
    );
}

#[tokio::test]
async fn get_non_existent_setting_is_none() {
    let db = TestDb::new().await;

    let result = settings::get_setting(db.pool(), "non_existent_key")
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn update_existing_setting() {
    let db = TestDb::new().await;

    settings::set_setting(db.pool(), "test.key", &serde_json::json!(1))
        .await
        .unwrap();
    settings::set_setting(db.pool(), "test.key", &serde_json::json!(2))
        .await
        .unwrap();

    let result = settings::get_setting(db.pool(), "test.key").await.unwrap();
    assert_eq!(result, Some(serde_json::json!(2)));
}

#[tokio::test]
async fn delete_setting() {
    let db = TestDb::new().await;

    settings::set_setting(db.pool(), "test.key", &serde_json::json!("value"))
        .await
        .unwrap();

    assert!(settings::delete_setting(db.pool(), "test.key")
        .await
        .unwrap());
    assert!(!settings::delete_setting(db.pool(), "test.key")
        .await
        .unwrap());

    let result = settings::get_setting(db.pool(), "test.key").await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn json_value_types_round_trip() {
    let db = TestDb::new().await;

    let values = [
        ("key_string", serde_json::json!("string value")),
        ("key_number", serde_json::json!(42)),
        ("key_bool", serde_json::json!(true)),
        ("key_object", serde_json::json!({"nested": "object"})),
        ("key_array", serde_json::json!([1, 2, 3])),
    ];

    for (key, value) in &values {
        settings::set_setting(db.pool(), key, value).await.unwrap();
    }

    for (key, value) in &values {
        assert_eq!(
            settings::get_setting(db.pool(), key).await.unwrap(),
            Some(value.clone())
        );
    }
}
