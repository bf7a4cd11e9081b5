//! The form store: aggregate wizard state and typed dispatch.

use sw_types::{
    AdminControlData, AdminControlPatch, AuthenticationData, AuthenticationPatch, BackendData, BackendPatch, DatabaseData, DatabaseKind,
    DatabasePatch, FormData, GithubData, GithubPatch, RbacData, RbacPatch, TablesData, TablesPatch, WizardStep,
};
use tracing::debug;

use crate::{FormAction, rbac};

/// Complete wizard state: section data plus navigation and display mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    /// Current step index, always within `[0, WizardStep::COUNT - 1]`.
    pub current_step: usize,
    /// When true, the summary (JSON) view is shown instead of the wizard.
    pub show_summary: bool,
    /// The aggregate configuration.
    pub data: FormData,
}

/// Single source of truth for the wizard.
///
/// Explicitly owned and injectable: callers construct an instance and hand
/// out `&mut` access, rather than reaching for a global. All mutation goes
/// through [`FormStore::dispatch`] (or the typed convenience wrappers),
/// which applies each action as one non-interruptible transition.
#[derive(Clone, Debug, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    /// Create a store with all sections at their defaults, step 0, wizard view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single state transition.
    pub fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::SetCurrentStep(step) => {
                self.state.current_step = step.min(WizardStep::COUNT - 1);
            }
            FormAction::SetShowSummary(show) => self.state.show_summary = show,
            FormAction::UpdateDatabase(patch) => patch.apply(&mut self.state.data.database),
            FormAction::UpdateAuthentication(patch) => patch.apply(&mut self.state.data.authentication),
            FormAction::UpdateBackend(patch) => patch.apply(&mut self.state.data.backend),
            FormAction::UpdateAdminControl(patch) => patch.apply(&mut self.state.data.admin_control),
            FormAction::UpdateRbac(patch) => {
                patch.apply(&mut self.state.data.rbac);
                // Any RBAC update may change the role set (or re-enable the
                // section), so reconcile the permission mapping right away.
                rbac::sync_role_permissions(&mut self.state.data.rbac);
            }
            FormAction::UpdateTables(patch) => patch.apply(&mut self.state.data.tables),
            FormAction::UpdateGithub(patch) => patch.apply(&mut self.state.data.github),
            FormAction::AddCustomRole(name) => {
                rbac::add_custom_role(&mut self.state.data.rbac, &name);
            }
            FormAction::RemoveCustomRole(name) => {
                rbac::remove_custom_role(&mut self.state.data.rbac, &name);
            }
            FormAction::CopyPermissions { from, to } => {
                rbac::copy_permissions(&mut self.state.data.rbac, &from, &to);
            }
            FormAction::Reset => {
                debug!("resetting wizard state to defaults");
                self.state = FormState::default();
            }
        }
    }

    // ---- reads ----

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn data(&self) -> &FormData {
        &self.state.data
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// The step the wizard is currently showing.
    pub fn step(&self) -> WizardStep {
        // current_step is clamped on every write, so this cannot miss.
        WizardStep::from_index(self.state.current_step).unwrap_or(WizardStep::Database)
    }

    pub fn show_summary(&self) -> bool {
        self.state.show_summary
    }

    pub fn database(&self) -> &DatabaseData {
        &self.state.data.database
    }

    pub fn authentication(&self) -> &AuthenticationData {
        &self.state.data.authentication
    }

    pub fn backend(&self) -> &BackendData {
        &self.state.data.backend
    }

    pub fn admin_control(&self) -> &AdminControlData {
        &self.state.data.admin_control
    }

    pub fn rbac(&self) -> &RbacData {
        &self.state.data.rbac
    }

    pub fn tables(&self) -> &TablesData {
        &self.state.data.tables
    }

    pub fn github(&self) -> &GithubData {
        &self.state.data.github
    }

    // ---- derived views (computed on read, never cached) ----

    /// How many of the seven sections hold meaningful content.
    pub fn configured_steps(&self) -> usize {
        configured_steps(&self.state.data)
    }

    /// Whether the chosen database engine is SQL (unlocks table editing).
    pub fn is_sql_database(&self) -> bool {
        is_sql_database(&self.state.data)
    }

    // ---- navigation ----

    /// Jump to `step`, silently clamped into range.
    pub fn set_current_step(&mut self, step: usize) {
        self.dispatch(FormAction::SetCurrentStep(step));
    }

    /// Move to the next step; a no-op on the last step.
    pub fn advance(&mut self) {
        self.dispatch(FormAction::SetCurrentStep(self.state.current_step.saturating_add(1)));
    }

    /// Move to the previous step; a no-op on the first step.
    pub fn retreat(&mut self) {
        self.dispatch(FormAction::SetCurrentStep(self.state.current_step.saturating_sub(1)));
    }

    /// Switch to the summary view. The step index is left untouched.
    pub fn enter_summary(&mut self) {
        self.dispatch(FormAction::SetShowSummary(true));
    }

    /// Return from the summary view to the step the user was on.
    pub fn leave_summary(&mut self) {
        self.dispatch(FormAction::SetShowSummary(false));
    }

    // ---- section updates ----

    pub fn update_database(&mut self, patch: DatabasePatch) {
        self.dispatch(FormAction::UpdateDatabase(patch));
    }

    pub fn update_authentication(&mut self, patch: AuthenticationPatch) {
        self.dispatch(FormAction::UpdateAuthentication(patch));
    }

    pub fn update_backend(&mut self, patch: BackendPatch) {
        self.dispatch(FormAction::UpdateBackend(patch));
    }

    pub fn update_admin_control(&mut self, patch: AdminControlPatch) {
        self.dispatch(FormAction::UpdateAdminControl(patch));
    }

    pub fn update_rbac(&mut self, patch: RbacPatch) {
        self.dispatch(FormAction::UpdateRbac(patch));
    }

    pub fn update_tables(&mut self, patch: TablesPatch) {
        self.dispatch(FormAction::UpdateTables(patch));
    }

    pub fn update_github(&mut self, patch: GithubPatch) {
        self.dispatch(FormAction::UpdateGithub(patch));
    }

    /// Restore everything to initial defaults in one transition.
    pub fn reset(&mut self) {
        self.dispatch(FormAction::Reset);
    }
}

/// Count the sections with meaningful content, by section-specific rule:
/// a selected database, a chosen auth method, at least one backend module,
/// admin control enabled, RBAC enabled, any tables or table notes, and a
/// repository name.
pub fn configured_steps(data: &FormData) -> usize {
    let mut count = 0;
    if data.database.database.is_some() {
        count += 1;
    }
    if data.authentication.auth_method.is_some() {
        count += 1;
    }
    if !data.backend.modules.is_empty() {
        count += 1;
    }
    if data.admin_control.enabled {
        count += 1;
    }
    if data.rbac.enabled {
        count += 1;
    }
    if !data.tables.tables.is_empty() || !data.tables.notes.is_empty() {
        count += 1;
    }
    if !data.github.repository_name.is_empty() {
        count += 1;
    }
    count
}

/// True only for MySQL and PostgreSQL; MongoDB and "nothing selected" are not SQL.
pub fn is_sql_database(data: &FormData) -> bool {
    matches!(data.database.database, Some(DatabaseKind::Mysql | DatabaseKind::Postgresql))
}
