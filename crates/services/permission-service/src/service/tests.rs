//! Permission and role use-case unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use tokio_test::{assert_err, assert_ok};

use common::AppError;
use domain::{AdapterError, CreatePermission, MockUuidGenerator, PermissionData, RoleData, RoleKind};

use super::*;
use crate::repository::{MockPermissionRepository, MockRoleRepository};

const USER_ID: &str = "3f2b8c1e-9a4d-4e7b-8c21-5d6e7f809a1b";
const PERMISSION_ID: &str = "0b7c3c1a-52d7-4a5e-9f3e-2f1d0c9b8a76";

fn manager(repo: MockPermissionRepository, ids: MockUuidGenerator) -> PermissionManager {
    PermissionManager::new(Arc::new(repo), Arc::new(ids))
}

fn counting_ids() -> MockUuidGenerator {
    let mut ids = MockUuidGenerator::new();
    let mut next = 0u32;
    ids.expect_generate().returning(move || {
        next += 1;
        Ok(format!("00000000-0000-4000-8000-{:012}", next))
    });
    ids
}

fn permission(role: RoleKind) -> PermissionData {
    PermissionData {
        id: PERMISSION_ID.to_string(),
        user_id: USER_ID.to_string(),
        role,
    }
}

// =============================================================================
// create_permissions
// =============================================================================

#[tokio::test]
async fn test_create_permissions_submits_one_batch() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().times(2).returning(|_, _| Ok(false));
    repo.expect_create_permissions()
        .withf(|batch: &Vec<PermissionData>| {
            batch.len() == 2
                && batch.iter().all(|p| p.user_id == USER_ID)
                && batch.iter().any(|p| p.role == RoleKind::Standard)
                && batch.iter().any(|p| p.role == RoleKind::Admin)
        })
        .times(1)
        .returning(Ok);

    let service = manager(repo, counting_ids());
    let created = assert_ok!(
        service
            .create_permissions(vec![
                CreatePermission::new(USER_ID, "STANDARD"),
                CreatePermission::new(USER_ID, "ADMIN"),
            ])
            .await
    );

    assert_eq!(created.len(), 2);
    assert_ne!(created[0].id, created[1].id);
}

#[tokio::test]
async fn test_create_permissions_existing_pair_fails_before_id_generation() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission()
        .with(eq(USER_ID), eq(RoleKind::Admin))
        .returning(|_, _| Ok(true));
    repo.expect_create_permissions().never();

    let mut ids = MockUuidGenerator::new();
    ids.expect_generate().never();

    let err = manager(repo, ids)
        .create_permissions(vec![CreatePermission::new(USER_ID, "ADMIN")])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::BadRequest("The user already has ADMIN permission".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_one_duplicate_aborts_whole_batch() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission()
        .returning(|_, role| Ok(role == RoleKind::Admin));
    repo.expect_create_permissions().never();

    let err = manager(repo, counting_ids())
        .create_permissions(vec![
            CreatePermission::new(USER_ID, "STANDARD"),
            CreatePermission::new(USER_ID, "ADMIN"),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::BadRequest("The user already has ADMIN permission".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_repeated_pair_in_batch() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let mut ids = MockUuidGenerator::new();
    ids.expect_generate().never();

    let err = manager(repo, ids)
        .create_permissions(vec![
            CreatePermission::new(USER_ID, "STANDARD"),
            CreatePermission::new(USER_ID, "STANDARD"),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::BadRequest("The user already has STANDARD permission".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_repeated_unknown_role_reports_role() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let mut ids = MockUuidGenerator::new();
    ids.expect_generate().never();

    let err = assert_err!(
        manager(repo, ids)
            .create_permissions(vec![
                CreatePermission::new(USER_ID, "bogus"),
                CreatePermission::new(USER_ID, "bogus"),
            ])
            .await
    );

    assert_eq!(
        err,
        AppError::BadRequest("The value 'bogus' is not valid for Role".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_repeated_malformed_user_id_reports_uuid() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let err = assert_err!(
        manager(repo, MockUuidGenerator::new())
            .create_permissions(vec![
                CreatePermission::new("nope", "STANDARD"),
                CreatePermission::new("nope", "STANDARD"),
            ])
            .await
    );

    assert_eq!(
        err,
        AppError::BadRequest("The id entered does not match the uuid pattern".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_invalid_entry_after_valid_one_aborts_batch() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let err = assert_err!(
        manager(repo, MockUuidGenerator::new())
            .create_permissions(vec![
                CreatePermission::new(USER_ID, "STANDARD"),
                CreatePermission::new(USER_ID, "admin"),
            ])
            .await
    );

    assert_eq!(
        err,
        AppError::BadRequest("The value 'admin' is not valid for Role".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_unknown_role() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let err = manager(repo, MockUuidGenerator::new())
        .create_permissions(vec![CreatePermission::new(USER_ID, "ROOT")])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::BadRequest("The value 'ROOT' is not valid for Role".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_malformed_user_id() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().never();
    repo.expect_create_permissions().never();

    let err = manager(repo, MockUuidGenerator::new())
        .create_permissions(vec![CreatePermission::new("user-1", "STANDARD")])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::BadRequest("The id entered does not match the uuid pattern".to_string())
    );
}

#[tokio::test]
async fn test_create_permissions_repository_failure_is_hidden() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().returning(|_, _| Ok(false));
    repo.expect_create_permissions()
        .returning(|_| Err(AdapterError::storage("deadlock detected")));

    let err = manager(repo, counting_ids())
        .create_permissions(vec![CreatePermission::new(USER_ID, "STANDARD")])
        .await
        .unwrap_err();

    assert_eq!(err, AppError::InternalServerError);
}

// =============================================================================
// exists / find / delete
// =============================================================================

#[tokio::test]
async fn test_exists_permission_passthrough() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission()
        .with(eq(USER_ID), eq(RoleKind::Standard))
        .returning(|_, _| Ok(true));

    let service = manager(repo, MockUuidGenerator::new());
    assert!(service.exists_permission(USER_ID, "STANDARD").await.unwrap());
}

#[tokio::test]
async fn test_exists_permission_adapter_failure() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission()
        .returning(|_, _| Err(AdapterError::storage("timeout")));

    let err = manager(repo, MockUuidGenerator::new())
        .exists_permission(USER_ID, "ADMIN")
        .await
        .unwrap_err();

    assert_eq!(err, AppError::InternalServerError);
}

#[tokio::test]
async fn test_find_permissions_by_user_empty_is_not_found() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_find_permissions_by_user()
        .returning(|_| Ok(Vec::new()));

    let err = manager(repo, MockUuidGenerator::new())
        .find_permissions_by_user(USER_ID)
        .await
        .unwrap_err();

    assert_eq!(err, AppError::NotFound(MSG_NO_PERMISSIONS.to_string()));
}

#[tokio::test]
async fn test_find_permissions_by_user_success() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_find_permissions_by_user()
        .with(eq(USER_ID))
        .returning(|_| Ok(vec![permission(RoleKind::Standard)]));

    let permissions = manager(repo, MockUuidGenerator::new())
        .find_permissions_by_user(USER_ID)
        .await
        .unwrap();

    assert_eq!(permissions, vec![permission(RoleKind::Standard)]);
}

#[tokio::test]
async fn test_delete_missing_permission_never_deletes() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().returning(|_, _| Ok(false));
    repo.expect_delete_permission().never();

    let err = manager(repo, MockUuidGenerator::new())
        .delete_permission(USER_ID, "ADMIN")
        .await
        .unwrap_err();

    assert_eq!(err, AppError::BadRequest(MSG_PERMISSION_NOT_FOUND.to_string()));
}

#[tokio::test]
async fn test_delete_permission_success() {
    let mut repo = MockPermissionRepository::new();
    repo.expect_exists_permission().returning(|_, _| Ok(true));
    repo.expect_delete_permission()
        .with(eq(USER_ID), eq(RoleKind::Admin))
        .times(1)
        .returning(|_, _| Ok(()));

    let service = manager(repo, MockUuidGenerator::new());
    assert!(service.delete_permission(USER_ID, "ADMIN").await.is_ok());
}

// =============================================================================
// roles
// =============================================================================

fn admin_role() -> RoleData {
    RoleData {
        id: PERMISSION_ID.to_string(),
        name: "ADMIN".to_string(),
    }
}

#[tokio::test]
async fn test_role_find_by_name() {
    let mut repo = MockRoleRepository::new();
    repo.expect_find_by_name()
        .with(eq("ADMIN"))
        .returning(|_| Ok(Some(admin_role())));

    let role = RoleManager::new(Arc::new(repo))
        .find_by_name("ADMIN")
        .await
        .unwrap();

    assert_eq!(role, admin_role());
}

#[tokio::test]
async fn test_role_find_by_name_not_found() {
    let mut repo = MockRoleRepository::new();
    repo.expect_find_by_name().returning(|_| Ok(None));

    let err = RoleManager::new(Arc::new(repo))
        .find_by_name("ROOT")
        .await
        .unwrap_err();

    assert_eq!(err, AppError::NotFound(MSG_ROLE_NOT_FOUND.to_string()));
}

#[tokio::test]
async fn test_role_find_all_failure_is_hidden() {
    let mut repo = MockRoleRepository::new();
    repo.expect_find_all()
        .returning(|| Err(AdapterError::storage("poisoned")));

    let err = RoleManager::new(Arc::new(repo)).find_all().await.unwrap_err();
    assert_eq!(err, AppError::InternalServerError);
}
