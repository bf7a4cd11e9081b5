//! Role/permission synchronization for the RBAC section.
//!
//! The permission mapping must always cover exactly the union of predefined
//! and custom roles. These functions operate on a bare [`RbacData`] so each
//! one is testable in isolation; the store calls them from its dispatch.

use sw_types::{CatalogOption, RbacData};
use tracing::debug;

/// Union of predefined and custom roles: predefined first (in selection
/// order), then custom roles in insertion order.
pub fn all_roles(data: &RbacData) -> Vec<String> {
    data.roles.iter().map(|role| role.value().to_string()).chain(data.custom_roles.iter().cloned()).collect()
}

/// Reconcile the permission mapping with the current role set.
///
/// Missing roles are seeded with an empty permission set; entries for roles
/// that no longer exist are dropped. Running this twice with unchanged
/// inputs produces an identical mapping. Does nothing while RBAC is
/// disabled.
pub fn sync_role_permissions(data: &mut RbacData) {
    if !data.enabled {
        return;
    }

    let roles = all_roles(data);
    for role in &roles {
        data.role_permissions.ensure(role);
    }
    data.role_permissions.retain(|name| roles.iter().any(|role| role == name));
}

/// Append a custom role, seeding its empty permission entry in the same
/// transition. Whitespace is trimmed; an empty or duplicate name (exact,
/// case-sensitive match against predefined and custom roles) is a no-op.
///
/// Returns whether the role was added.
pub fn add_custom_role(data: &mut RbacData, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    if all_roles(data).iter().any(|role| role == name) {
        debug!(role = name, "ignoring duplicate custom role");
        return false;
    }

    data.custom_roles.push(name.to_string());
    data.role_permissions.insert(name, Vec::new());
    true
}

/// Remove a custom role and its permission entry atomically.
pub fn remove_custom_role(data: &mut RbacData, name: &str) {
    data.custom_roles.retain(|role| role != name);
    data.role_permissions.remove(name);
}

/// Replace `to`'s permissions with a copy of `from`'s current set.
/// No-op when `from` has no entry; `from` itself is never modified.
pub fn copy_permissions(data: &mut RbacData, from: &str, to: &str) {
    let Some(permissions) = data.role_permissions.get(from) else {
        debug!(from, to, "copy requested from a role with no permission entry");
        return;
    };
    data.role_permissions.insert(to, permissions.to_vec());
}
