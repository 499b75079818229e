//! Save file integration tests.

use std::fs;
use std::path::PathBuf;

use shoebox::{
    Action, JsonFileStore, LoadedSession, SessionState, SessionStore, StoreError, Table,
    TableOptions, load_or_default,
};

/// A fresh directory under the system temp dir, unique per test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shoebox-{}-{test}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn save_then_load_restores_session() {
    let dir = scratch_dir("round_trip");
    let store = JsonFileStore::for_player(&dir, "Ada");
    assert_eq!(store.path(), dir.join("blackjack_save_Ada.json"));

    let mut session = SessionState::new(1000);
    session.apply_outcome(150, true);
    session.apply_outcome(-25, false);
    store.save(&session).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, session);

    let raw = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["balance"], 1125);
    assert_eq!(json["hands_played"], 2);
    assert_eq!(json["hands_won"], 1);
    assert_eq!(json["total_winnings"], 125);
    assert!(json["saved_at"].as_u64().is_some());
}

#[test]
fn missing_file_is_not_found() {
    let dir = scratch_dir("missing");
    let store = JsonFileStore::for_player(&dir, "nobody");
    assert!(matches!(store.load(), Err(StoreError::NotFound)));
    assert_eq!(
        load_or_default(&store, 1000),
        LoadedSession::Fresh(SessionState::new(1000))
    );
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let dir = scratch_dir("corrupt");
    let store = JsonFileStore::for_player(&dir, "Bo");
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(store.load(), Err(StoreError::Format(_))));
    let loaded = load_or_default(&store, 1000).into_inner();
    assert_eq!(loaded, SessionState::default());
}

#[test]
fn older_save_without_stats_loads_with_zero_counts() {
    let dir = scratch_dir("partial");
    let store = JsonFileStore::for_player(&dir, "Cy");
    fs::write(store.path(), r#"{ "name": "Cy", "balance": 640 }"#).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, SessionState::new(640));
}

#[test]
fn save_into_missing_directory_reports_error() {
    let dir = scratch_dir("no_dir").join("does").join("not").join("exist");
    let store = JsonFileStore::for_player(&dir, "Di");
    assert!(matches!(
        store.save(&SessionState::default()),
        Err(StoreError::Io(_))
    ));
}

#[test]
fn table_session_survives_a_restart() {
    let dir = scratch_dir("restart");
    let store = JsonFileStore::for_player(&dir, "Eve");

    let mut table = Table::new(TableOptions::default(), 77).unwrap();
    for _ in 0..5 {
        table.play_round(20, |_, _| Action::Stand).unwrap();
        store.save(table.session()).unwrap();
    }
    let played = *table.session();

    let restored = load_or_default(&store, 1000);
    assert_eq!(restored, LoadedSession::Restored(played));

    let table = Table::new(TableOptions::default(), 78)
        .unwrap()
        .with_session(restored.into_inner());
    assert_eq!(table.session().hands_played(), 5);
    assert_eq!(table.into_session(), played);
}

#[test]
fn failed_save_keeps_previous_save() {
    let dir = scratch_dir("atomic");
    let store = JsonFileStore::for_player(&dir, "Fay");
    let kept = SessionState::new(750);
    store.save(&kept).unwrap();
    assert!(!dir.join("blackjack_save_Fay.json.tmp").exists());

    // Block the staging file so the next write fails
    fs::create_dir(dir.join("blackjack_save_Fay.json.tmp")).unwrap();
    assert!(matches!(
        store.save(&SessionState::new(1)),
        Err(StoreError::Io(_))
    ));

    assert_eq!(store.load().unwrap(), kept);
}

#[test]
fn unusable_names_share_the_fallback_file() {
    let dir = scratch_dir("fallback");
    let store = JsonFileStore::for_player(&dir, "!!!");
    assert_eq!(store.path(), dir.join("blackjack_save_Player.json"));
    assert_eq!(store.name(), "!!!");
}
