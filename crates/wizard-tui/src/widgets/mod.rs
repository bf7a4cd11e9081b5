//! Reusable widgets for the wizard forms.

mod line_edit;
mod select;

pub use line_edit::LineEdit;
pub use select::{SelectOutcome, SelectState};
