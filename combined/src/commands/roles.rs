use serde_json::Value;

use crate::cli::RolesAction;
use crate::context::Context;
use crate::error::CommandResult;

pub async fn execute(action: RolesAction, ctx: &Context) -> CommandResult<Value> {
    let roles = ctx.roles();

    let value = match action {
        RolesAction::List => serde_json::to_value(roles.find_all().await?)?,
        RolesAction::Show { name } => serde_json::to_value(roles.find_by_name(&name).await?)?,
    };

    Ok(value)
}
