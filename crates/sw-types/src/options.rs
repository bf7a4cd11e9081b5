//! Static option catalogs for every selectable wizard field.
//!
//! Each catalog is a fixed list of `value`/`label` pairs. The `value` string
//! is what lands in the exported configuration document; the `label` is what
//! selection widgets display. Catalogs are immutable input data, not state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A single selectable entry as consumed by selection widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Wire value stored in the configuration.
    pub value: &'static str,
    /// Human-friendly label shown in the UI.
    pub label: &'static str,
}

/// Common interface over all catalog-backed enums.
pub trait CatalogOption: Sized + Copy + 'static {
    /// Every member of the catalog, in declared order.
    fn members() -> &'static [Self];

    /// Wire value used in the exported configuration.
    fn value(&self) -> &'static str;

    /// Human-friendly label shown by selection widgets.
    fn label(&self) -> &'static str;

    /// Reverse lookup from a wire value.
    fn from_value(value: &str) -> Option<Self> {
        Self::members().iter().copied().find(|m| m.value() == value)
    }

    /// The catalog as `value`/`label` pairs for widget consumption.
    fn catalog() -> Vec<SelectOption> {
        Self::members().iter().map(|m| SelectOption { value: m.value(), label: m.label() }).collect()
    }
}

/// Serde adapter for optional single-select fields.
///
/// The exported document renders an unselected value as the empty string
/// rather than `null`, so `Option<T>` round-trips through `""`.
pub mod optional_value {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::CatalogOption;

    pub fn serialize<T: CatalogOption, S: Serializer>(opt: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
        match opt {
            Some(v) => serializer.serialize_str(v.value()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T: CatalogOption, D: Deserializer<'de>>(deserializer: D) -> Result<Option<T>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        T::from_value(&raw).map(Some).ok_or_else(|| de::Error::custom(format!("unknown option value '{raw}'")))
    }
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl CatalogOption for $name {
            fn members() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_value(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, &[$($value,)+]))
            }
        }
    };
}

catalog! {
    /// Supported database engines.
    DatabaseKind {
        Mysql => "mysql", "MySQL";
        Postgresql => "postgresql", "PostgreSQL";
        Mongodb => "mongodb", "MongoDB";
    }
}

impl DatabaseKind {
    /// SQL engines unlock the table-schema step; document stores do not.
    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Mysql | Self::Postgresql)
    }
}

catalog! {
    /// ORM / query-builder choices. Not all pair sensibly with every engine,
    /// but the wizard does not enforce the pairing.
    OrmKind {
        Prisma => "prisma", "Prisma";
        Typeorm => "typeorm", "TypeORM";
        Sequelize => "sequelize", "Sequelize";
        Knex => "knex", "Knex.js";
        Mongoose => "mongoose", "Mongoose (MongoDB)";
    }
}

catalog! {
    /// How the application authenticates its users.
    AuthMethod {
        Jwt => "jwt", "JWT (JSON Web Tokens)";
        Session => "session", "Session-based";
        Oauth => "oauth", "OAuth Only";
        Hybrid => "hybrid", "Hybrid (JWT + OAuth)";
    }
}

catalog! {
    /// OAuth identity providers.
    OauthProvider {
        Google => "google", "Google";
        Github => "github", "GitHub";
        Facebook => "facebook", "Facebook";
        Twitter => "twitter", "Twitter/X";
        Linkedin => "linkedin", "LinkedIn";
        Discord => "discord", "Discord";
        Microsoft => "microsoft", "Microsoft";
    }
}

catalog! {
    /// Hosted third-party authentication services.
    ThirdPartyAuth {
        Clerk => "clerk", "Clerk";
        Auth0 => "auth0", "Auth0";
        Firebase => "firebase", "Firebase Auth";
        Supabase => "supabase", "Supabase Auth";
        Nextauth => "nextauth", "NextAuth.js";
    }
}

catalog! {
    /// Feature modules for the generated NestJS backend.
    BackendModule {
        Auth => "auth", "Authentication Module";
        Users => "users", "Users Module";
        Products => "products", "Products Module";
        Orders => "orders", "Orders Module";
        Payments => "payments", "Payments Module";
        Notifications => "notifications", "Notifications Module";
        Files => "files", "File Upload Module";
        Email => "email", "Email Module";
        Logging => "logging", "Logging Module";
        Cache => "cache", "Cache Module";
        Queue => "queue", "Queue Module";
        Websocket => "websocket", "WebSocket Module";
        Chat => "chat", "Chat Module";
        Search => "search", "Search Module";
        Analytics => "analytics", "Analytics Module";
        Reporting => "reporting", "Reporting Module";
        Inventory => "inventory", "Inventory Module";
        Cms => "cms", "Content Management Module";
        Blog => "blog", "Blog Module";
        Comments => "comments", "Comments Module";
    }
}

catalog! {
    /// Middleware, guards, and interceptors.
    MiddlewareKind {
        Cors => "cors", "CORS";
        Helmet => "helmet", "Helmet (Security)";
        Ratelimit => "ratelimit", "Rate Limiting";
        Compression => "compression", "Compression";
        Logging => "logging", "Request Logging";
        Validation => "validation", "Validation Pipes";
        Auth => "auth", "Authentication Guard";
        Transform => "transform", "Transform Interceptor";
        Timeout => "timeout", "Timeout Interceptor";
        Cache => "cache", "Cache Interceptor";
        Throttle => "throttle", "Throttle Guard";
        Roles => "roles", "Roles Guard";
    }
}

catalog! {
    /// Administrative features for the admin-control section.
    AdminFeature {
        Dashboard => "dashboard", "Admin Dashboard";
        UserManagement => "userManagement", "User Management";
        ContentManagement => "contentManagement", "Content Management";
        Analytics => "analytics", "Analytics & Reports";
        SystemSettings => "systemSettings", "System Settings";
        AuditLogs => "auditLogs", "Audit Logs";
        BackupRestore => "backupRestore", "Backup & Restore";
        Notifications => "notifications", "Admin Notifications";
    }
}

catalog! {
    /// Self-service features exposed to regular users.
    UserControlFeature {
        Profile => "profile", "User Profile Management";
        Preferences => "preferences", "User Preferences";
        Security => "security", "Security Settings";
        Subscriptions => "subscriptions", "Subscription Management";
        Billing => "billing", "Billing & Payments";
        Support => "support", "Support Tickets";
    }
}

catalog! {
    /// Predefined user roles for the RBAC section. Custom roles are free
    /// text and live alongside these in the permission mapping.
    RoleKind {
        Admin => "admin", "Administrator";
        Moderator => "moderator", "Moderator";
        Editor => "editor", "Editor";
        User => "user", "Regular User";
        Guest => "guest", "Guest";
        Manager => "manager", "Manager";
        Support => "support", "Support Agent";
    }
}

catalog! {
    /// Grantable permissions per role.
    PermissionKind {
        Create => "create", "Create";
        Read => "read", "Read";
        Update => "update", "Update";
        Delete => "delete", "Delete";
        Publish => "publish", "Publish";
        Moderate => "moderate", "Moderate";
        ManageUsers => "manage_users", "Manage Users";
        ManageRoles => "manage_roles", "Manage Roles";
        ViewAnalytics => "view_analytics", "View Analytics";
        SystemConfig => "system_config", "System Configuration";
        ExportData => "export_data", "Export Data";
        ImportData => "import_data", "Import Data";
        BackupRestore => "backup_restore", "Backup & Restore";
        AuditLogs => "audit_logs", "View Audit Logs";
        ManageContent => "manage_content", "Manage Content";
        ApproveContent => "approve_content", "Approve Content";
        ManagePayments => "manage_payments", "Manage Payments";
        ViewReports => "view_reports", "View Reports";
    }
}

catalog! {
    /// Common relational tables offered by the table-schema step.
    TableKind {
        Users => "users", "Users";
        Roles => "roles", "Roles";
        Permissions => "permissions", "Permissions";
        UserRoles => "user_roles", "User Roles (Junction)";
        RolePermissions => "role_permissions", "Role Permissions (Junction)";
        Products => "products", "Products";
        Categories => "categories", "Categories";
        Orders => "orders", "Orders";
        OrderItems => "order_items", "Order Items";
        Payments => "payments", "Payments";
        Sessions => "sessions", "Sessions";
        AuditLogs => "audit_logs", "Audit Logs";
        Notifications => "notifications", "Notifications";
        Files => "files", "Files/Media";
        Settings => "settings", "Settings";
    }
}

catalog! {
    /// GitHub Actions workflow templates.
    WorkflowKind {
        Ci => "ci", "Continuous Integration";
        Cd => "cd", "Continuous Deployment";
        Testing => "testing", "Automated Testing";
        Linting => "linting", "Code Linting";
        Security => "security", "Security Scanning";
        Dependency => "dependency", "Dependency Updates";
        Release => "release", "Release Automation";
    }
}

catalog! {
    /// Git branching strategies.
    BranchingStrategy {
        Gitflow => "gitflow", "Git Flow";
        Github => "github", "GitHub Flow";
        Gitlab => "gitlab", "GitLab Flow";
        Custom => "custom", "Custom Strategy";
    }
}
