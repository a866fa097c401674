//! Registration, login and token inspection.

use serde_json::Value;

use common::JwtConfig;
use domain::{CreateUser, Credentials};

use crate::cli::{LoginArgs, RegisterArgs, RoleSet};
use crate::context::Context;
use crate::error::CommandResult;

pub async fn register(args: RegisterArgs, ctx: &Context) -> CommandResult<Value> {
    let auth = ctx.registrar();
    let data = CreateUser::new(args.name, args.email, args.password);

    let user = match args.role {
        RoleSet::Standard => auth.create_user_with_standard_permission(data).await?,
        RoleSet::Admin => auth.create_user_with_admin_permission(data).await?,
        RoleSet::All => auth.create_user_with_all_permissions(data).await?,
    };

    Ok(serde_json::to_value(user)?)
}

pub async fn login(args: LoginArgs, ctx: &Context) -> CommandResult<Value> {
    let auth = ctx.auth(JwtConfig::from_env()?);
    let payload = auth
        .auth_user(Credentials::new(args.email, args.password))
        .await?;

    Ok(serde_json::to_value(payload)?)
}

pub async fn whoami(token: &str, ctx: &Context) -> CommandResult<Value> {
    let claims = ctx.auth(JwtConfig::from_env()?).verify_token(token).await?;
    Ok(serde_json::to_value(claims)?)
}
