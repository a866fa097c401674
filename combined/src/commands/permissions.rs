use serde_json::{json, Value};

use domain::CreatePermission;

use crate::cli::PermissionsAction;
use crate::context::Context;
use crate::error::CommandResult;

pub async fn execute(action: PermissionsAction, ctx: &Context) -> CommandResult<Value> {
    let permissions = ctx.permissions();

    let value = match action {
        PermissionsAction::Grant { user_id, roles } => {
            let requests = roles
                .into_iter()
                .map(|role| CreatePermission::new(user_id.as_str(), role))
                .collect();
            serde_json::to_value(permissions.create_permissions(requests).await?)?
        }
        PermissionsAction::List { user_id } => {
            serde_json::to_value(permissions.find_permissions_by_user(&user_id).await?)?
        }
        PermissionsAction::Check { user_id, role } => {
            let granted = permissions.exists_permission(&user_id, &role).await?;
            json!({ "user_id": user_id, "role": role, "granted": granted })
        }
        PermissionsAction::Revoke { user_id, role } => {
            permissions.delete_permission(&user_id, &role).await?;
            json!({ "user_id": user_id, "role": role, "revoked": true })
        }
    };

    Ok(value)
}
