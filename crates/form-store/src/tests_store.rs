//! Unit tests for the store: navigation, merging, derived views, export.

use sw_types::{
    AdminControlPatch, BackendModule, BackendPatch, DatabaseKind, DatabasePatch, FormData, GithubPatch, OrmKind, RbacPatch, TableKind,
    TablesPatch, WizardStep,
};

use crate::*;

#[test]
fn test_navigation_clamps_at_bounds() {
    let mut store = FormStore::new();
    assert_eq!(store.current_step(), 0);

    store.retreat();
    assert_eq!(store.current_step(), 0);

    store.set_current_step(WizardStep::COUNT - 1);
    store.advance();
    assert_eq!(store.current_step(), WizardStep::COUNT - 1);
}

#[test]
fn test_set_current_step_absorbs_out_of_range() {
    let mut store = FormStore::new();
    store.set_current_step(999);
    assert_eq!(store.current_step(), WizardStep::COUNT - 1);
    assert_eq!(store.step(), WizardStep::Github);
}

#[test]
fn test_summary_toggle_preserves_step() {
    let mut store = FormStore::new();
    store.set_current_step(3);
    store.enter_summary();
    assert!(store.show_summary());
    assert_eq!(store.current_step(), 3);
    store.leave_summary();
    assert!(!store.show_summary());
    assert_eq!(store.current_step(), 3);
}

#[test]
fn test_partial_update_merges_fields() {
    let mut store = FormStore::new();
    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Postgresql)), ..Default::default() });
    store.update_database(DatabasePatch { orm: Some(Some(OrmKind::Prisma)), ..Default::default() });

    let db = store.database();
    assert_eq!(db.database, Some(DatabaseKind::Postgresql));
    assert_eq!(db.orm, Some(OrmKind::Prisma));
    assert_eq!(db.connection_string, "");
    assert_eq!(db.notes, "");
}

#[test]
fn test_configured_steps_tracks_presence_rules() {
    let mut store = FormStore::new();
    assert_eq!(store.configured_steps(), 0);

    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Mysql)), ..Default::default() });
    assert_eq!(store.configured_steps(), 1);

    store.update_rbac(RbacPatch { enabled: Some(true), ..Default::default() });
    assert_eq!(store.configured_steps(), 2);

    // Clearing the database selection removes its contribution
    store.update_database(DatabasePatch { database: Some(None), ..Default::default() });
    assert_eq!(store.configured_steps(), 1);
}

#[test]
fn test_tables_count_by_selection_or_notes() {
    let mut store = FormStore::new();
    store.update_tables(TablesPatch { notes: Some("partitioning TBD".to_string()), ..Default::default() });
    assert_eq!(store.configured_steps(), 1);

    store.update_tables(TablesPatch { notes: Some(String::new()), tables: Some(vec![TableKind::Users]), ..Default::default() });
    assert_eq!(store.configured_steps(), 1);
}

#[test]
fn test_is_sql_database() {
    let mut store = FormStore::new();
    assert!(!store.is_sql_database());

    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Mysql)), ..Default::default() });
    assert!(store.is_sql_database());

    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Postgresql)), ..Default::default() });
    assert!(store.is_sql_database());

    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Mongodb)), ..Default::default() });
    assert!(!store.is_sql_database());
}

#[test]
fn test_reset_restores_every_default() {
    let mut store = FormStore::new();
    store.set_current_step(4);
    store.enter_summary();
    store.update_backend(BackendPatch { modules: Some(vec![BackendModule::Auth]), port: Some("8080".to_string()), ..Default::default() });
    store.update_github(GithubPatch { repository_name: Some("acme".to_string()), ..Default::default() });
    store.update_admin_control(AdminControlPatch { enabled: Some(true), ..Default::default() });

    store.reset();

    assert_eq!(store.current_step(), 0);
    assert!(!store.show_summary());
    assert_eq!(store.backend().port, "3000");
    assert_eq!(store.data(), &FormData::default());
    assert_eq!(store.configured_steps(), 0);
}

#[test]
fn test_serialization_key_order() {
    let store = FormStore::new();
    let json = serialize_config(store.data()).unwrap();

    let top_level: Vec<usize> = ["\"database\"", "\"authentication\"", "\"backend\"", "\"adminControl\"", "\"rbac\"", "\"tables\"", "\"github\""]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
    assert!(top_level.windows(2).all(|w| w[0] < w[1]), "section keys out of order: {json}");
}

#[test]
fn test_serialization_round_trip_is_idempotent() {
    let mut store = FormStore::new();
    store.update_database(DatabasePatch { database: Some(Some(DatabaseKind::Postgresql)), orm: Some(Some(OrmKind::Typeorm)), ..Default::default() });
    store.update_rbac(RbacPatch { enabled: Some(true), ..Default::default() });
    store.dispatch(FormAction::AddCustomRole("Ops".to_string()));
    store.dispatch(FormAction::AddCustomRole("Auditor".to_string()));

    let first = serialize_config(store.data()).unwrap();
    let reparsed: FormData = serde_json::from_str(&first).unwrap();
    let second = serialize_config(&reparsed).unwrap();
    assert_eq!(first, second);
    assert_eq!(&reparsed, store.data());
}

#[test]
fn test_export_writes_serialized_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_EXPORT_FILENAME);

    let mut store = FormStore::new();
    store.update_github(GithubPatch { repository_name: Some("acme-api".to_string()), ..Default::default() });

    let mut sink = FileSink::new(&path);
    export_config(store.data(), &mut sink).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, serialize_config(store.data()).unwrap());
}

#[test]
fn test_export_failure_leaves_state_intact() {
    let mut store = FormStore::new();
    store.update_github(GithubPatch { repository_name: Some("acme".to_string()), ..Default::default() });
    let before = store.data().clone();

    let mut sink = FileSink::new("/nonexistent-dir/nope/config.json");
    let err = export_config(store.data(), &mut sink).unwrap_err();
    assert!(matches!(err, StoreError::ExportFailed { .. }));
    assert_eq!(store.data(), &before);
}
