//! Terminal UI for the stackwiz configuration wizard.
//!
//! The wizard walks through the seven configuration steps one screen at a
//! time, bound to the [`form_store::FormStore`] read/write contract: every
//! widget edit dispatches a typed update, and every render reads the current
//! snapshot. Nothing here owns configuration state of its own.

mod app;
mod error;
mod forms;
mod utils;

pub mod widgets;

pub use app::WizardApp;
pub use error::{TuiError, TuiResult};
pub use forms::{Binding, Field, FieldKind, build_fields};
