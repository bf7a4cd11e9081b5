//! The seven configuration section records and their patch types.
//!
//! Each section is an independent record with fully-populated defaults. A
//! matching `*Patch` struct carries `Option`s for every field; applying a
//! patch overwrites only the fields that are present, which gives the same
//! partial-merge semantics a spread update has, but typed. Patch application
//! is a single mutation of the owned record, so readers never observe a
//! half-applied update.

use serde::{Deserialize, Serialize};

use crate::{
    options::{
        AdminFeature, AuthMethod, BackendModule, BranchingStrategy, DatabaseKind, MiddlewareKind, OauthProvider, OrmKind, RoleKind,
        TableKind, ThirdPartyAuth, UserControlFeature, WorkflowKind, optional_value,
    },
    roles::RolePermissionMap,
};

macro_rules! apply_fields {
    ($patch:expr, $data:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $data.$field = value;
            }
        )+
    };
}

/// Database engine and ORM selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseData {
    #[serde(with = "optional_value")]
    pub database: Option<DatabaseKind>,
    #[serde(with = "optional_value")]
    pub orm: Option<OrmKind>,
    pub connection_string: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatabasePatch {
    pub database: Option<Option<DatabaseKind>>,
    pub orm: Option<Option<OrmKind>>,
    pub connection_string: Option<String>,
    pub notes: Option<String>,
}

impl DatabasePatch {
    pub fn apply(self, data: &mut DatabaseData) {
        apply_fields!(self, data, database, orm, connection_string, notes);
    }
}

/// Authentication method, providers, and secrets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationData {
    #[serde(with = "optional_value")]
    pub auth_method: Option<AuthMethod>,
    pub oauth_providers: Vec<OauthProvider>,
    #[serde(with = "optional_value")]
    pub third_party_service: Option<ThirdPartyAuth>,
    pub jwt_secret: String,
    pub session_config: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthenticationPatch {
    pub auth_method: Option<Option<AuthMethod>>,
    pub oauth_providers: Option<Vec<OauthProvider>>,
    pub third_party_service: Option<Option<ThirdPartyAuth>>,
    pub jwt_secret: Option<String>,
    pub session_config: Option<String>,
    pub notes: Option<String>,
}

impl AuthenticationPatch {
    pub fn apply(self, data: &mut AuthenticationData) {
        apply_fields!(self, data, auth_method, oauth_providers, third_party_service, jwt_secret, session_config, notes);
    }
}

/// Backend module and middleware selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendData {
    pub modules: Vec<BackendModule>,
    pub middleware: Vec<MiddlewareKind>,
    pub port: String,
    pub api_prefix: String,
    pub swagger_enabled: bool,
    pub notes: String,
}

impl Default for BackendData {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
            middleware: Vec::new(),
            port: "3000".to_string(),
            api_prefix: "api/v1".to_string(),
            swagger_enabled: true,
            notes: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackendPatch {
    pub modules: Option<Vec<BackendModule>>,
    pub middleware: Option<Vec<MiddlewareKind>>,
    pub port: Option<String>,
    pub api_prefix: Option<String>,
    pub swagger_enabled: Option<bool>,
    pub notes: Option<String>,
}

impl BackendPatch {
    pub fn apply(self, data: &mut BackendData) {
        apply_fields!(self, data, modules, middleware, port, api_prefix, swagger_enabled, notes);
    }
}

/// Admin dashboard and user self-service controls. Fields other than
/// `enabled` are only meaningful while `enabled` is true, but stay populated
/// regardless.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminControlData {
    pub enabled: bool,
    pub admin_features: Vec<AdminFeature>,
    pub user_control_features: Vec<UserControlFeature>,
    pub separate_admin_app: bool,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminControlPatch {
    pub enabled: Option<bool>,
    pub admin_features: Option<Vec<AdminFeature>>,
    pub user_control_features: Option<Vec<UserControlFeature>>,
    pub separate_admin_app: Option<bool>,
    pub notes: Option<String>,
}

impl AdminControlPatch {
    pub fn apply(self, data: &mut AdminControlData) {
        apply_fields!(self, data, enabled, admin_features, user_control_features, separate_admin_app, notes);
    }
}

/// Role-based access control: predefined roles, custom roles, and the
/// per-role permission mapping kept in sync by the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacData {
    pub enabled: bool,
    pub roles: Vec<RoleKind>,
    pub custom_roles: Vec<String>,
    pub role_permissions: RolePermissionMap,
    pub hierarchical: bool,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RbacPatch {
    pub enabled: Option<bool>,
    pub roles: Option<Vec<RoleKind>>,
    pub custom_roles: Option<Vec<String>>,
    pub role_permissions: Option<RolePermissionMap>,
    pub hierarchical: Option<bool>,
    pub notes: Option<String>,
}

impl RbacPatch {
    pub fn apply(self, data: &mut RbacData) {
        apply_fields!(self, data, enabled, roles, custom_roles, role_permissions, hierarchical, notes);
    }
}

/// Table schema planning; meaningful only when the selected database is a
/// SQL engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablesData {
    pub tables: Vec<TableKind>,
    /// Newline-delimited free text, one custom table per line.
    pub custom_tables: String,
    pub relationships: String,
    pub indexes: String,
    pub notes: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TablesPatch {
    pub tables: Option<Vec<TableKind>>,
    pub custom_tables: Option<String>,
    pub relationships: Option<String>,
    pub indexes: Option<String>,
    pub notes: Option<String>,
}

impl TablesPatch {
    pub fn apply(self, data: &mut TablesData) {
        apply_fields!(self, data, tables, custom_tables, relationships, indexes, notes);
    }
}

/// Repository and CI/CD setup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubData {
    pub repository_name: String,
    pub description: String,
    pub private: bool,
    pub workflows: Vec<WorkflowKind>,
    #[serde(with = "optional_value")]
    pub branching_strategy: Option<BranchingStrategy>,
    pub protected_branches: bool,
    pub issue_templates: bool,
    pub pr_templates: bool,
    pub notes: String,
}

impl Default for GithubData {
    fn default() -> Self {
        Self {
            repository_name: String::new(),
            description: String::new(),
            private: true,
            workflows: Vec::new(),
            branching_strategy: None,
            protected_branches: true,
            issue_templates: false,
            pr_templates: false,
            notes: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GithubPatch {
    pub repository_name: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
    pub workflows: Option<Vec<WorkflowKind>>,
    pub branching_strategy: Option<Option<BranchingStrategy>>,
    pub protected_branches: Option<bool>,
    pub issue_templates: Option<bool>,
    pub pr_templates: Option<bool>,
    pub notes: Option<String>,
}

impl GithubPatch {
    pub fn apply(self, data: &mut GithubData) {
        apply_fields!(
            self,
            data,
            repository_name,
            description,
            private,
            workflows,
            branching_strategy,
            protected_branches,
            issue_templates,
            pr_templates,
            notes,
        );
    }
}

/// The aggregate configuration. Field order here defines the top-level key
/// order of the exported document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub database: DatabaseData,
    pub authentication: AuthenticationData,
    pub backend: BackendData,
    pub admin_control: AdminControlData,
    pub rbac: RbacData,
    pub tables: TablesData,
    pub github: GithubData,
}
