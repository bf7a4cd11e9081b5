use super::*;
use form_store::FormStore;
use sw_types::{DatabaseKind, RoleKind};

fn rbac_enabled_store() -> FormStore {
    let mut store = FormStore::new();
    store.update_rbac(RbacPatch { enabled: Some(true), ..Default::default() });
    store
}

#[test]
fn database_step_lists_all_four_fields() {
    let fields = build_fields(WizardStep::Database, &FormData::default());
    let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Database Type", "ORM/Query Builder", "Connection String", "Notes"]);
}

#[test]
fn admin_step_collapses_to_notice_while_disabled() {
    let data = FormData::default();
    let fields = build_fields(WizardStep::AdminControl, &data);
    assert_eq!(fields.len(), 2);
    assert!(matches!(fields[1].kind, FieldKind::Notice(_)));
    assert!(!fields[1].focusable());

    let mut store = FormStore::new();
    toggle(&mut store, &Binding::AdminEnabled);
    let fields = build_fields(WizardStep::AdminControl, store.data());
    assert_eq!(fields.len(), 5);
}

#[test]
fn tables_step_is_a_notice_for_non_sql_databases() {
    let mut store = FormStore::new();
    let fields = build_fields(WizardStep::Tables, store.data());
    assert_eq!(fields.len(), 1);
    assert!(matches!(fields[0].kind, FieldKind::Notice(_)));

    commit_single(&mut store, &Binding::DbDatabase, Some("postgresql".to_string()));
    let fields = build_fields(WizardStep::Tables, store.data());
    assert_eq!(fields.len(), 5);
    assert!(fields.iter().all(Field::focusable));
}

#[test]
fn rbac_step_shows_permission_editors_for_every_role() {
    let mut store = rbac_enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::User]), ..Default::default() });
    commit_text(&mut store, &Binding::RbacNewCustomRole, "auditor".to_string());

    let fields = build_fields(WizardStep::Rbac, store.data());
    let permission_roles: Vec<&str> = fields
        .iter()
        .filter_map(|f| match &f.binding {
            Some(Binding::RbacPermissions(role)) => Some(role.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(permission_roles, vec!["admin", "user", "auditor"]);

    // Each role also offers copy-from, excluding itself.
    let copy_targets = fields.iter().filter(|f| matches!(f.binding, Some(Binding::RbacCopyInto(_)))).count();
    assert_eq!(copy_targets, 3);
    let remove_buttons = fields.iter().filter(|f| matches!(f.kind, FieldKind::Button)).count();
    assert_eq!(remove_buttons, 1);
}

#[test]
fn copy_from_options_exclude_the_target_role() {
    let roles = vec!["admin".to_string(), "user".to_string(), "auditor".to_string()];
    let options = role_options(&roles, "user");
    let values: Vec<&str> = options.iter().map(|o| o.value).collect();
    assert_eq!(values, vec!["admin", "auditor"]);
}

#[test]
fn commit_text_routes_to_the_right_section() {
    let mut store = FormStore::new();
    commit_text(&mut store, &Binding::BackendPort, "8080".to_string());
    commit_text(&mut store, &Binding::GhRepoName, "my-app".to_string());
    assert_eq!(store.backend().port, "8080");
    assert_eq!(store.github().repository_name, "my-app");
    // Untouched defaults survive the partial updates.
    assert_eq!(store.backend().api_prefix, "api/v1");
}

#[test]
fn toggles_flip_and_flip_back() {
    let mut store = FormStore::new();
    assert!(store.backend().swagger_enabled);
    toggle(&mut store, &Binding::BackendSwagger);
    assert!(!store.backend().swagger_enabled);
    toggle(&mut store, &Binding::BackendSwagger);
    assert!(store.backend().swagger_enabled);
}

#[test]
fn single_commit_clears_on_none() {
    let mut store = FormStore::new();
    commit_single(&mut store, &Binding::DbDatabase, Some("mysql".to_string()));
    assert_eq!(store.database().database, Some(DatabaseKind::Mysql));
    commit_single(&mut store, &Binding::DbDatabase, None);
    assert_eq!(store.database().database, None);
}

#[test]
fn multi_commit_preserves_toggle_order() {
    let mut store = FormStore::new();
    commit_multi(&mut store, &Binding::BackendModules, vec!["users".to_string(), "auth".to_string()]);
    let values: Vec<&str> = store.backend().modules.iter().map(|m| m.value()).collect();
    assert_eq!(values, vec!["users", "auth"]);
}

#[test]
fn permission_commit_updates_one_role_only() {
    let mut store = rbac_enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::User]), ..Default::default() });

    commit_multi(&mut store, &Binding::RbacPermissions("admin".to_string()), vec!["create".to_string(), "delete".to_string()]);
    assert_eq!(store.rbac().role_permissions.get("admin").map(<[_]>::len), Some(2));
    assert_eq!(store.rbac().role_permissions.get("user").map(<[_]>::len), Some(0));
}

#[test]
fn copy_into_dispatches_on_selection_only() {
    let mut store = rbac_enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::User]), ..Default::default() });
    commit_multi(&mut store, &Binding::RbacPermissions("admin".to_string()), vec!["read".to_string()]);

    commit_single(&mut store, &Binding::RbacCopyInto("user".to_string()), None);
    assert_eq!(store.rbac().role_permissions.get("user").map(<[_]>::len), Some(0));

    commit_single(&mut store, &Binding::RbacCopyInto("user".to_string()), Some("admin".to_string()));
    assert_eq!(store.rbac().role_permissions.get("user").map(<[_]>::len), Some(1));
}

#[test]
fn remove_button_drops_the_custom_role() {
    let mut store = rbac_enabled_store();
    commit_text(&mut store, &Binding::RbacNewCustomRole, "auditor".to_string());
    assert!(store.rbac().role_permissions.contains("auditor"));

    press(&mut store, &Binding::RbacRemoveCustomRole("auditor".to_string()));
    assert!(store.rbac().custom_roles.is_empty());
    assert!(!store.rbac().role_permissions.contains("auditor"));
}
