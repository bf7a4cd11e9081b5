//! Typed state transitions for the form store.

use sw_types::{AdminControlPatch, AuthenticationPatch, BackendPatch, DatabasePatch, GithubPatch, RbacPatch, TablesPatch};

/// Every way the wizard state can change.
///
/// Each variant maps to one pure transition in [`crate::FormStore::dispatch`],
/// which keeps individual transitions testable without any UI attached.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    /// Jump to a step; out-of-range indexes are clamped, not rejected.
    SetCurrentStep(usize),
    /// Toggle between the wizard view and the configuration summary.
    SetShowSummary(bool),
    /// Merge fields into the database section.
    UpdateDatabase(DatabasePatch),
    /// Merge fields into the authentication section.
    UpdateAuthentication(AuthenticationPatch),
    /// Merge fields into the backend section.
    UpdateBackend(BackendPatch),
    /// Merge fields into the admin-control section.
    UpdateAdminControl(AdminControlPatch),
    /// Merge fields into the RBAC section; re-syncs the permission mapping.
    UpdateRbac(RbacPatch),
    /// Merge fields into the tables section.
    UpdateTables(TablesPatch),
    /// Merge fields into the github section.
    UpdateGithub(GithubPatch),
    /// Append a custom role (trimmed; empty or duplicate names are no-ops).
    AddCustomRole(String),
    /// Remove a custom role and its permission entry.
    RemoveCustomRole(String),
    /// Replace `to`'s permission set with a copy of `from`'s.
    CopyPermissions { from: String, to: String },
    /// Restore all sections, the step index, and the display mode to defaults.
    Reset,
}
