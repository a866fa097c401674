//! CLI argument definitions.
//!
//! Uses clap derive macros; every subcommand maps onto one use case.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use domain::Pageable;

/// Access - users, roles and permissions over a local store
#[derive(Parser, Debug)]
#[command(name = "access")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store snapshot path
    #[arg(short, long, global = true, env = "ACCESS_STORE_PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a user together with its roles
    Register(RegisterArgs),

    /// Check credentials and print a signed token
    Login(LoginArgs),

    /// Print the claims carried by a token
    Whoami {
        #[arg(env = "ACCESS_TOKEN")]
        token: String,
    },

    /// Query and update users
    #[command(subcommand)]
    Users(UsersAction),

    /// Grant, inspect and revoke permissions
    #[command(subcommand)]
    Permissions(PermissionsAction),

    /// Inspect role reference data
    #[command(subcommand)]
    Roles(RolesAction),
}

impl Commands {
    /// Whether the command can change the store.
    pub fn writes(&self) -> bool {
        match self {
            Commands::Register(_) => true,
            Commands::Users(action) => matches!(
                action,
                UsersAction::SetName { .. } | UsersAction::SetPassword { .. }
            ),
            Commands::Permissions(action) => matches!(
                action,
                PermissionsAction::Grant { .. } | PermissionsAction::Revoke { .. }
            ),
            Commands::Login(_) | Commands::Whoami { .. } | Commands::Roles(_) => false,
        }
    }
}

/// Role set granted at registration
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleSet {
    #[default]
    Standard,
    Admin,
    All,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "ACCESS_PASSWORD")]
    pub password: String,

    /// Roles granted to the new user
    #[arg(long, value_enum, default_value_t = RoleSet::Standard)]
    pub role: RoleSet,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "ACCESS_PASSWORD")]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List users whose email contains a query
    List(ListArgs),

    /// Show a user by id
    Show { id: String },

    /// Show a user by email
    Find { email: String },

    /// Rename a user
    SetName { id: String, name: String },

    /// Replace a user's password
    SetPassword {
        id: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Substring matched against emails
    #[arg(short, long, default_value = "")]
    pub query: String,

    #[arg(long, default_value_t = 1)]
    pub page: u64,

    #[arg(long, default_value_t = 20)]
    pub size: u64,

    /// `asc` or `desc`
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// `email` or `name`
    #[arg(long, default_value = "email")]
    pub order_by: String,
}

impl ListArgs {
    pub fn pageable(&self) -> Pageable {
        Pageable::new(self.page, self.size, self.order.as_str(), self.order_by.as_str())
    }
}

#[derive(Subcommand, Debug)]
pub enum PermissionsAction {
    /// Grant one or more roles in a single batch
    Grant {
        user_id: String,

        #[arg(required = true)]
        roles: Vec<String>,
    },

    /// List a user's permissions
    List { user_id: String },

    /// Check whether a user holds a role
    Check { user_id: String, role: String },

    /// Revoke a role
    Revoke { user_id: String, role: String },
}

#[derive(Subcommand, Debug)]
pub enum RolesAction {
    /// List every role
    List,

    /// Show a role by name
    Show { name: String },
}
