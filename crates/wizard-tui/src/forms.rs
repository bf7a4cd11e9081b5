//! Field descriptors binding each wizard step to the store contract.
//!
//! Every step is described as a flat list of [`Field`]s rebuilt from the
//! current snapshot on each render. A field carries a [`Binding`] naming the
//! store operation behind it; committing an edit turns into exactly one
//! dispatched update, so the store never sees a half-applied form.

use form_store::{FormAction, FormStore, all_roles, is_sql_database};
use sw_types::{
    AdminControlPatch, AuthenticationPatch, BackendPatch, CatalogOption, DatabasePatch, FormData, GithubPatch, PermissionKind, RbacPatch,
    SelectOption, TablesPatch, WizardStep,
};

/// The store operation a field maps onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    DbDatabase,
    DbOrm,
    DbConnectionString,
    DbNotes,
    AuthMethod,
    AuthOauthProviders,
    AuthThirdParty,
    AuthJwtSecret,
    AuthSessionConfig,
    AuthNotes,
    BackendModules,
    BackendMiddleware,
    BackendPort,
    BackendApiPrefix,
    BackendSwagger,
    BackendNotes,
    AdminEnabled,
    AdminFeatures,
    AdminUserControl,
    AdminSeparateApp,
    AdminNotes,
    RbacEnabled,
    RbacRoles,
    RbacNewCustomRole,
    RbacRemoveCustomRole(String),
    RbacPermissions(String),
    RbacCopyInto(String),
    RbacHierarchical,
    RbacNotes,
    TablesTables,
    TablesCustom,
    TablesRelationships,
    TablesIndexes,
    TablesNotes,
    GhRepoName,
    GhDescription,
    GhPrivate,
    GhWorkflows,
    GhBranching,
    GhProtected,
    GhIssueTemplates,
    GhPrTemplates,
    GhNotes,
}

/// How a field is edited and displayed.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    /// Free text, edited in a popup line editor.
    Text(String),
    /// Boolean flag toggled in place.
    Toggle(bool),
    /// One value from a catalog (or none), picked in the fuzzy select popup.
    Single { options: Vec<SelectOption>, value: Option<String> },
    /// Any number of catalog values, in toggle order.
    Multi { options: Vec<SelectOption>, values: Vec<String> },
    /// Fires its binding on activation (e.g. removing a custom role).
    Button,
    /// Read-only hint; skipped by focus movement.
    Notice(String),
}

/// One focusable row of the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub label: String,
    pub kind: FieldKind,
    pub binding: Option<Binding>,
}

impl Field {
    fn text(label: impl Into<String>, value: &str, binding: Binding) -> Self {
        Self { label: label.into(), kind: FieldKind::Text(value.to_string()), binding: Some(binding) }
    }

    fn toggle(label: impl Into<String>, on: bool, binding: Binding) -> Self {
        Self { label: label.into(), kind: FieldKind::Toggle(on), binding: Some(binding) }
    }

    fn single<T: CatalogOption>(label: impl Into<String>, current: Option<T>, binding: Binding) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Single { options: T::catalog(), value: current.map(|v| v.value().to_string()) },
            binding: Some(binding),
        }
    }

    fn multi<T: CatalogOption>(label: impl Into<String>, current: &[T], binding: Binding) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Multi { options: T::catalog(), values: current.iter().map(|v| v.value().to_string()).collect() },
            binding: Some(binding),
        }
    }

    fn button(label: impl Into<String>, binding: Binding) -> Self {
        Self { label: label.into(), kind: FieldKind::Button, binding: Some(binding) }
    }

    fn notice(text: impl Into<String>) -> Self {
        Self { label: String::new(), kind: FieldKind::Notice(text.into()), binding: None }
    }

    pub fn focusable(&self) -> bool {
        !matches!(self.kind, FieldKind::Notice(_))
    }
}

/// Build the field list for `step` from the current snapshot.
pub fn build_fields(step: WizardStep, data: &FormData) -> Vec<Field> {
    match step {
        WizardStep::Database => database_fields(data),
        WizardStep::Authentication => authentication_fields(data),
        WizardStep::Backend => backend_fields(data),
        WizardStep::AdminControl => admin_control_fields(data),
        WizardStep::Rbac => rbac_fields(data),
        WizardStep::Tables => tables_fields(data),
        WizardStep::Github => github_fields(data),
    }
}

fn database_fields(data: &FormData) -> Vec<Field> {
    let db = &data.database;
    vec![
        Field::single("Database Type", db.database, Binding::DbDatabase),
        Field::single("ORM/Query Builder", db.orm, Binding::DbOrm),
        Field::text("Connection String", &db.connection_string, Binding::DbConnectionString),
        Field::text("Notes", &db.notes, Binding::DbNotes),
    ]
}

fn authentication_fields(data: &FormData) -> Vec<Field> {
    let auth = &data.authentication;
    vec![
        Field::single("Authentication Method", auth.auth_method, Binding::AuthMethod),
        Field::multi("OAuth Providers", &auth.oauth_providers, Binding::AuthOauthProviders),
        Field::single("Third-Party Auth Service", auth.third_party_service, Binding::AuthThirdParty),
        Field::text("JWT Secret", &auth.jwt_secret, Binding::AuthJwtSecret),
        Field::text("Session Configuration", &auth.session_config, Binding::AuthSessionConfig),
        Field::text("Notes", &auth.notes, Binding::AuthNotes),
    ]
}

fn backend_fields(data: &FormData) -> Vec<Field> {
    let backend = &data.backend;
    vec![
        Field::multi("Backend Modules", &backend.modules, Binding::BackendModules),
        Field::multi("Middleware & Guards", &backend.middleware, Binding::BackendMiddleware),
        Field::text("Port", &backend.port, Binding::BackendPort),
        Field::text("API Prefix", &backend.api_prefix, Binding::BackendApiPrefix),
        Field::toggle("Swagger/OpenAPI Docs", backend.swagger_enabled, Binding::BackendSwagger),
        Field::text("Notes", &backend.notes, Binding::BackendNotes),
    ]
}

fn admin_control_fields(data: &FormData) -> Vec<Field> {
    let admin = &data.admin_control;
    let mut fields = vec![Field::toggle("Enable Admin/User Control", admin.enabled, Binding::AdminEnabled)];
    if admin.enabled {
        fields.push(Field::multi("Admin Features", &admin.admin_features, Binding::AdminFeatures));
        fields.push(Field::multi("User Control Features", &admin.user_control_features, Binding::AdminUserControl));
        fields.push(Field::toggle("Separate Admin Application", admin.separate_admin_app, Binding::AdminSeparateApp));
        fields.push(Field::text("Notes", &admin.notes, Binding::AdminNotes));
    } else {
        fields.push(Field::notice("Admin control is optional. Enable it to configure dashboards and user self-service features."));
    }
    fields
}

fn rbac_fields(data: &FormData) -> Vec<Field> {
    let rbac = &data.rbac;
    let mut fields = vec![Field::toggle("Enable Role-Based Access Control", rbac.enabled, Binding::RbacEnabled)];
    if !rbac.enabled {
        fields.push(Field::notice(
            "RBAC is optional but recommended for applications with multiple user types and complex permission requirements.",
        ));
        return fields;
    }

    fields.push(Field::multi("Predefined Roles", &rbac.roles, Binding::RbacRoles));
    fields.push(Field::text("Add Custom Role", "", Binding::RbacNewCustomRole));
    for role in &rbac.custom_roles {
        fields.push(Field::button(format!("Remove custom role '{role}'"), Binding::RbacRemoveCustomRole(role.clone())));
    }

    let roles = all_roles(rbac);
    for role in &roles {
        let permissions = rbac.role_permissions.get(role).unwrap_or(&[]);
        fields.push(Field::multi(format!("{role} Permissions"), permissions, Binding::RbacPermissions(role.clone())));
        if roles.len() > 1 {
            fields.push(Field {
                label: format!("Copy permissions into '{role}' from"),
                kind: FieldKind::Single { options: role_options(&roles, role), value: None },
                binding: Some(Binding::RbacCopyInto(role.clone())),
            });
        }
    }

    fields.push(Field::toggle("Hierarchical Role Structure", rbac.hierarchical, Binding::RbacHierarchical));
    fields.push(Field::text("Notes", &rbac.notes, Binding::RbacNotes));
    fields
}

fn tables_fields(data: &FormData) -> Vec<Field> {
    if !is_sql_database(data) {
        return vec![Field::notice(
            "Table configuration applies to SQL databases only. Select MySQL or PostgreSQL in the database step to plan tables.",
        )];
    }
    let tables = &data.tables;
    vec![
        Field::multi("Common Tables", &tables.tables, Binding::TablesTables),
        Field::text("Custom Tables (one per line)", &tables.custom_tables, Binding::TablesCustom),
        Field::text("Relationships", &tables.relationships, Binding::TablesRelationships),
        Field::text("Indexes", &tables.indexes, Binding::TablesIndexes),
        Field::text("Notes", &tables.notes, Binding::TablesNotes),
    ]
}

fn github_fields(data: &FormData) -> Vec<Field> {
    let github = &data.github;
    vec![
        Field::text("Repository Name", &github.repository_name, Binding::GhRepoName),
        Field::text("Description", &github.description, Binding::GhDescription),
        Field::toggle("Private Repository", github.private, Binding::GhPrivate),
        Field::multi("Workflows", &github.workflows, Binding::GhWorkflows),
        Field::single("Branching Strategy", github.branching_strategy, Binding::GhBranching),
        Field::toggle("Protected Branches", github.protected_branches, Binding::GhProtected),
        Field::toggle("Issue Templates", github.issue_templates, Binding::GhIssueTemplates),
        Field::toggle("PR Templates", github.pr_templates, Binding::GhPrTemplates),
        Field::text("Notes", &github.notes, Binding::GhNotes),
    ]
}

/// Roles other than `except`, offered as copy-from sources. Role names are
/// their own labels, mirroring how the store keys the mapping.
fn role_options(roles: &[String], except: &str) -> Vec<SelectOption> {
    roles.iter().filter(|r| r.as_str() != except).map(|r| SelectOption { value: intern(r), label: intern(r) }).collect()
}

// SelectOption carries 'static strs for the fixed catalogs; role names are
// runtime values, so they get interned once per distinct name.
fn intern(s: &str) -> &'static str {
    use std::collections::HashSet;
    use std::sync::{Mutex, OnceLock};

    static INTERNED: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    let mut set = INTERNED.get_or_init(|| Mutex::new(HashSet::new())).lock().unwrap_or_else(|e| e.into_inner());
    match set.get(s) {
        Some(&existing) => existing,
        None => {
            let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
            set.insert(leaked);
            leaked
        }
    }
}

/// Commit an edited text value.
pub fn commit_text(store: &mut FormStore, binding: &Binding, text: String) {
    match binding {
        Binding::DbConnectionString => store.update_database(DatabasePatch { connection_string: Some(text), ..Default::default() }),
        Binding::DbNotes => store.update_database(DatabasePatch { notes: Some(text), ..Default::default() }),
        Binding::AuthJwtSecret => store.update_authentication(AuthenticationPatch { jwt_secret: Some(text), ..Default::default() }),
        Binding::AuthSessionConfig => store.update_authentication(AuthenticationPatch { session_config: Some(text), ..Default::default() }),
        Binding::AuthNotes => store.update_authentication(AuthenticationPatch { notes: Some(text), ..Default::default() }),
        Binding::BackendPort => store.update_backend(BackendPatch { port: Some(text), ..Default::default() }),
        Binding::BackendApiPrefix => store.update_backend(BackendPatch { api_prefix: Some(text), ..Default::default() }),
        Binding::BackendNotes => store.update_backend(BackendPatch { notes: Some(text), ..Default::default() }),
        Binding::AdminNotes => store.update_admin_control(AdminControlPatch { notes: Some(text), ..Default::default() }),
        Binding::RbacNewCustomRole => store.dispatch(FormAction::AddCustomRole(text)),
        Binding::RbacNotes => store.update_rbac(RbacPatch { notes: Some(text), ..Default::default() }),
        Binding::TablesCustom => store.update_tables(TablesPatch { custom_tables: Some(text), ..Default::default() }),
        Binding::TablesRelationships => store.update_tables(TablesPatch { relationships: Some(text), ..Default::default() }),
        Binding::TablesIndexes => store.update_tables(TablesPatch { indexes: Some(text), ..Default::default() }),
        Binding::TablesNotes => store.update_tables(TablesPatch { notes: Some(text), ..Default::default() }),
        Binding::GhRepoName => store.update_github(GithubPatch { repository_name: Some(text), ..Default::default() }),
        Binding::GhDescription => store.update_github(GithubPatch { description: Some(text), ..Default::default() }),
        Binding::GhNotes => store.update_github(GithubPatch { notes: Some(text), ..Default::default() }),
        _ => {}
    }
}

/// Flip a toggle field.
pub fn toggle(store: &mut FormStore, binding: &Binding) {
    match binding {
        Binding::BackendSwagger => {
            let on = !store.backend().swagger_enabled;
            store.update_backend(BackendPatch { swagger_enabled: Some(on), ..Default::default() });
        }
        Binding::AdminEnabled => {
            let on = !store.admin_control().enabled;
            store.update_admin_control(AdminControlPatch { enabled: Some(on), ..Default::default() });
        }
        Binding::AdminSeparateApp => {
            let on = !store.admin_control().separate_admin_app;
            store.update_admin_control(AdminControlPatch { separate_admin_app: Some(on), ..Default::default() });
        }
        Binding::RbacEnabled => {
            let on = !store.rbac().enabled;
            store.update_rbac(RbacPatch { enabled: Some(on), ..Default::default() });
        }
        Binding::RbacHierarchical => {
            let on = !store.rbac().hierarchical;
            store.update_rbac(RbacPatch { hierarchical: Some(on), ..Default::default() });
        }
        Binding::GhPrivate => {
            let on = !store.github().private;
            store.update_github(GithubPatch { private: Some(on), ..Default::default() });
        }
        Binding::GhProtected => {
            let on = !store.github().protected_branches;
            store.update_github(GithubPatch { protected_branches: Some(on), ..Default::default() });
        }
        Binding::GhIssueTemplates => {
            let on = !store.github().issue_templates;
            store.update_github(GithubPatch { issue_templates: Some(on), ..Default::default() });
        }
        Binding::GhPrTemplates => {
            let on = !store.github().pr_templates;
            store.update_github(GithubPatch { pr_templates: Some(on), ..Default::default() });
        }
        _ => {}
    }
}

/// Fire a button binding.
pub fn press(store: &mut FormStore, binding: &Binding) {
    if let Binding::RbacRemoveCustomRole(role) = binding {
        store.dispatch(FormAction::RemoveCustomRole(role.clone()));
    }
}

/// Commit a single-select outcome.
pub fn commit_single(store: &mut FormStore, binding: &Binding, value: Option<String>) {
    match binding {
        Binding::DbDatabase => {
            store.update_database(DatabasePatch { database: Some(parse(value)), ..Default::default() });
        }
        Binding::DbOrm => {
            store.update_database(DatabasePatch { orm: Some(parse(value)), ..Default::default() });
        }
        Binding::AuthMethod => {
            store.update_authentication(AuthenticationPatch { auth_method: Some(parse(value)), ..Default::default() });
        }
        Binding::AuthThirdParty => {
            store.update_authentication(AuthenticationPatch { third_party_service: Some(parse(value)), ..Default::default() });
        }
        Binding::GhBranching => {
            store.update_github(GithubPatch { branching_strategy: Some(parse(value)), ..Default::default() });
        }
        Binding::RbacCopyInto(to) => {
            if let Some(from) = value {
                store.dispatch(FormAction::CopyPermissions { from, to: to.clone() });
            }
        }
        _ => {}
    }
}

/// Commit a multi-select outcome.
pub fn commit_multi(store: &mut FormStore, binding: &Binding, values: Vec<String>) {
    match binding {
        Binding::AuthOauthProviders => {
            store.update_authentication(AuthenticationPatch { oauth_providers: Some(parse_all(values)), ..Default::default() });
        }
        Binding::BackendModules => {
            store.update_backend(BackendPatch { modules: Some(parse_all(values)), ..Default::default() });
        }
        Binding::BackendMiddleware => {
            store.update_backend(BackendPatch { middleware: Some(parse_all(values)), ..Default::default() });
        }
        Binding::AdminFeatures => {
            store.update_admin_control(AdminControlPatch { admin_features: Some(parse_all(values)), ..Default::default() });
        }
        Binding::AdminUserControl => {
            store.update_admin_control(AdminControlPatch { user_control_features: Some(parse_all(values)), ..Default::default() });
        }
        Binding::RbacRoles => {
            store.update_rbac(RbacPatch { roles: Some(parse_all(values)), ..Default::default() });
        }
        Binding::RbacPermissions(role) => {
            let mut permissions = store.rbac().role_permissions.clone();
            permissions.insert(role.clone(), parse_all::<PermissionKind>(values));
            store.update_rbac(RbacPatch { role_permissions: Some(permissions), ..Default::default() });
        }
        Binding::TablesTables => {
            store.update_tables(TablesPatch { tables: Some(parse_all(values)), ..Default::default() });
        }
        Binding::GhWorkflows => {
            store.update_github(GithubPatch { workflows: Some(parse_all(values)), ..Default::default() });
        }
        _ => {}
    }
}

fn parse<T: CatalogOption>(value: Option<String>) -> Option<T> {
    value.as_deref().and_then(T::from_value)
}

fn parse_all<T: CatalogOption>(values: Vec<String>) -> Vec<T> {
    values.iter().filter_map(|v| T::from_value(v)).collect()
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
