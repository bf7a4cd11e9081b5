//! State management for stackwiz - the wizard's single source of truth.
//!
//! This crate owns the aggregate configuration built up by the wizard and
//! everything derived from it, organized into focused submodules:
//!
//! - `store`: the [`FormStore`] container, typed action dispatch, step
//!   navigation, and the derived views (configured-step count, SQL flag)
//! - `action`: the [`FormAction`] tagged union of state transitions
//! - `rbac`: role/permission synchronization for the RBAC section
//! - `export`: canonical JSON serialization and export sinks
//! - `error`: error types and results
//!
//! The store is an explicitly owned value, not an ambient singleton: every
//! consumer (and every test) constructs its own instance and mutates it only
//! through dispatched actions. All mutation is synchronous and runs to
//! completion, so readers never observe a partially applied update.

mod action;
mod error;
mod export;
mod rbac;
mod store;

pub use action::FormAction;
pub use error::{StoreError, StoreResult};
pub use export::{DEFAULT_EXPORT_FILENAME, ExportSink, FileSink, export_config, serialize_config};
pub use rbac::{add_custom_role, all_roles, copy_permissions, remove_custom_role, sync_role_permissions};
pub use store::{FormState, FormStore, configured_steps, is_sql_database};

#[cfg(test)]
mod tests_rbac;
#[cfg(test)]
mod tests_store;
