//! Shared type definitions for stackwiz
//!
//! This crate contains lightweight type definitions that are shared across
//! the wizard: the seven configuration section records, the static option
//! catalogs behind every selectable field, the ordered step list, and the
//! pure fuzzy-match helper used by selection widgets.

pub mod options;
pub mod search;
pub mod sections;
pub mod steps;

mod roles;

pub use options::{
    AdminFeature, AuthMethod, BackendModule, BranchingStrategy, CatalogOption, DatabaseKind, MiddlewareKind, OauthProvider, OrmKind,
    PermissionKind, RoleKind, SelectOption, TableKind, ThirdPartyAuth, UserControlFeature, WorkflowKind,
};
pub use roles::RolePermissionMap;
pub use sections::{
    AdminControlData, AdminControlPatch, AuthenticationData, AuthenticationPatch, BackendData, BackendPatch, DatabaseData, DatabasePatch,
    FormData, GithubData, GithubPatch, RbacData, RbacPatch, TablesData, TablesPatch,
};
pub use steps::WizardStep;
