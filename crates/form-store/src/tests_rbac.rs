//! Unit tests for role/permission synchronization.

use sw_types::{PermissionKind, RbacPatch, RoleKind};

use crate::*;

fn enabled_store() -> FormStore {
    let mut store = FormStore::new();
    store.update_rbac(RbacPatch { enabled: Some(true), ..Default::default() });
    store
}

#[test]
fn test_sync_seeds_and_prunes_entries() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::Editor]), ..Default::default() });

    let keys: Vec<&str> = store.rbac().role_permissions.keys().collect();
    assert_eq!(keys, vec!["admin", "editor"]);

    // Deselecting a role drops its entry
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Editor]), ..Default::default() });
    let keys: Vec<&str> = store.rbac().role_permissions.keys().collect();
    assert_eq!(keys, vec!["editor"]);
}

#[test]
fn test_sync_is_idempotent() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::Moderator]), ..Default::default() });
    store.dispatch(FormAction::AddCustomRole("Ops".to_string()));

    let mut rbac = store.rbac().clone();
    let before = rbac.clone();
    sync_role_permissions(&mut rbac);
    assert_eq!(rbac, before);
    sync_role_permissions(&mut rbac);
    assert_eq!(rbac, before);
}

#[test]
fn test_key_set_equals_role_union() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::Guest]), ..Default::default() });
    store.dispatch(FormAction::AddCustomRole("Auditor".to_string()));
    store.dispatch(FormAction::AddCustomRole("Ops".to_string()));
    store.dispatch(FormAction::RemoveCustomRole("Auditor".to_string()));

    let mut keys: Vec<String> = store.rbac().role_permissions.keys().map(String::from).collect();
    let mut expected = all_roles(store.rbac());
    keys.sort();
    expected.sort();
    assert_eq!(keys, expected);
}

#[test]
fn test_custom_roles_are_deduplicated() {
    let mut store = enabled_store();
    store.dispatch(FormAction::AddCustomRole("Admin".to_string()));
    store.dispatch(FormAction::AddCustomRole("Admin".to_string()));

    assert_eq!(store.rbac().custom_roles, vec!["Admin".to_string()]);

    // Case-sensitive: a differently-cased name is a distinct role
    store.dispatch(FormAction::AddCustomRole("admin".to_string()));
    assert_eq!(store.rbac().custom_roles.len(), 2);
}

#[test]
fn test_custom_role_rejects_predefined_collision() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin]), ..Default::default() });

    // "admin" is already taken by the predefined role's value
    store.dispatch(FormAction::AddCustomRole("admin".to_string()));
    assert!(store.rbac().custom_roles.is_empty());
}

#[test]
fn test_custom_role_name_is_trimmed() {
    let mut store = enabled_store();
    store.dispatch(FormAction::AddCustomRole("  Editor  ".to_string()));
    assert_eq!(store.rbac().custom_roles, vec!["Editor".to_string()]);
    assert!(store.rbac().role_permissions.contains("Editor"));

    // Whitespace-only names are rejected
    store.dispatch(FormAction::AddCustomRole("   ".to_string()));
    assert_eq!(store.rbac().custom_roles.len(), 1);
}

#[test]
fn test_add_seeds_empty_permission_entry() {
    let mut store = enabled_store();
    store.dispatch(FormAction::AddCustomRole("Ops".to_string()));
    assert_eq!(store.rbac().role_permissions.get("Ops"), Some(&[][..]));
}

#[test]
fn test_remove_custom_role_drops_permissions() {
    let mut store = enabled_store();
    store.dispatch(FormAction::AddCustomRole("Ops".to_string()));
    store.dispatch(FormAction::RemoveCustomRole("Ops".to_string()));

    assert!(store.rbac().custom_roles.is_empty());
    assert!(!store.rbac().role_permissions.contains("Ops"));
}

#[test]
fn test_copy_permissions() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::Editor]), ..Default::default() });

    let mut rbac = store.rbac().clone();
    rbac.role_permissions.insert("admin", vec![PermissionKind::Read, PermissionKind::Update]);
    store.update_rbac(RbacPatch { role_permissions: Some(rbac.role_permissions), ..Default::default() });

    store.dispatch(FormAction::CopyPermissions { from: "admin".to_string(), to: "editor".to_string() });

    assert_eq!(store.rbac().role_permissions.get("editor"), Some(&[PermissionKind::Read, PermissionKind::Update][..]));
    // Source is unchanged
    assert_eq!(store.rbac().role_permissions.get("admin"), Some(&[PermissionKind::Read, PermissionKind::Update][..]));
}

#[test]
fn test_copy_from_unknown_role_is_noop() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Editor]), ..Default::default() });
    store.dispatch(FormAction::CopyPermissions { from: "ghost".to_string(), to: "editor".to_string() });
    assert_eq!(store.rbac().role_permissions.get("editor"), Some(&[][..]));
}

#[test]
fn test_no_sync_while_disabled() {
    let mut store = FormStore::new();
    // RBAC stays disabled; selecting roles must not touch the mapping
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin]), ..Default::default() });
    assert!(store.rbac().role_permissions.is_empty());
}

#[test]
fn test_reenabling_prunes_stale_entries() {
    let mut store = enabled_store();
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin, RoleKind::Editor]), ..Default::default() });

    // Disable, deselect a role while disabled, then re-enable
    store.update_rbac(RbacPatch { enabled: Some(false), ..Default::default() });
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Admin]), ..Default::default() });
    store.update_rbac(RbacPatch { enabled: Some(true), ..Default::default() });

    let keys: Vec<&str> = store.rbac().role_permissions.keys().collect();
    assert_eq!(keys, vec!["admin"]);
}

#[test]
fn test_role_ordering_predefined_then_custom() {
    let mut store = enabled_store();
    store.dispatch(FormAction::AddCustomRole("Zed".to_string()));
    store.update_rbac(RbacPatch { roles: Some(vec![RoleKind::Guest, RoleKind::Admin]), ..Default::default() });

    assert_eq!(all_roles(store.rbac()), vec!["guest".to_string(), "admin".to_string(), "Zed".to_string()]);
}
