//! The fixed, ordered list of wizard steps.

use std::fmt;

/// One step of the wizard, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Database,
    Authentication,
    Backend,
    AdminControl,
    Rbac,
    Tables,
    Github,
}

impl WizardStep {
    /// Every step in wizard order.
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Database,
        WizardStep::Authentication,
        WizardStep::Backend,
        WizardStep::AdminControl,
        WizardStep::Rbac,
        WizardStep::Tables,
        WizardStep::Github,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier matching the section key in the exported document.
    pub fn id(&self) -> &'static str {
        match self {
            WizardStep::Database => "database",
            WizardStep::Authentication => "authentication",
            WizardStep::Backend => "backend",
            WizardStep::AdminControl => "adminControl",
            WizardStep::Rbac => "rbac",
            WizardStep::Tables => "tables",
            WizardStep::Github => "github",
        }
    }

    /// Title shown in the step header.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Database => "Database Configuration",
            WizardStep::Authentication => "Authentication Setup",
            WizardStep::Backend => "NestJS Backend",
            WizardStep::AdminControl => "Admin/User Control",
            WizardStep::Rbac => "Role-Based Access Control",
            WizardStep::Tables => "Database Tables",
            WizardStep::Github => "GitHub Integration",
        }
    }

    /// Zero-based position of this step within [`Self::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Step at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(WizardStep::COUNT), None);
    }
}
