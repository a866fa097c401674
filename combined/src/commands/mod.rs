//! Command implementations.
//!
//! Each returns the JSON value printed on success.

pub mod access;
pub mod permissions;
pub mod roles;
pub mod users;

use serde_json::Value;

use crate::cli::Commands;
use crate::context::Context;
use crate::error::CommandResult;

/// Run one command against the wired services.
pub async fn execute(command: Commands, ctx: &Context) -> CommandResult<Value> {
    match command {
        Commands::Register(args) => access::register(args, ctx).await,
        Commands::Login(args) => access::login(args, ctx).await,
        Commands::Whoami { token } => access::whoami(&token, ctx).await,
        Commands::Users(action) => users::execute(action, ctx).await,
        Commands::Permissions(action) => permissions::execute(action, ctx).await,
        Commands::Roles(action) => roles::execute(action, ctx).await,
    }
}
