use serde_json::Value;

use crate::cli::UsersAction;
use crate::context::Context;
use crate::error::CommandResult;

pub async fn execute(action: UsersAction, ctx: &Context) -> CommandResult<Value> {
    let users = ctx.users();

    let value = match action {
        UsersAction::List(args) => {
            serde_json::to_value(users.find_all(&args.query, &args.pageable()).await?)?
        }
        UsersAction::Show { id } => serde_json::to_value(users.find_by_id(&id).await?)?,
        UsersAction::Find { email } => serde_json::to_value(users.find_by_email(&email).await?)?,
        UsersAction::SetName { id, name } => {
            serde_json::to_value(users.update_name(&id, &name).await?)?
        }
        UsersAction::SetPassword {
            id,
            password,
            confirm,
        } => serde_json::to_value(users.update_password(&id, &password, &confirm).await?)?,
    };

    Ok(value)
}
