use std::collections::HashSet;

use async_trait::async_trait;

use domain::{AdapterError, AdapterResult, PermissionData, RoleData, RoleKind};
use permission_service_lib::{PermissionRepository, RoleRepository};

use crate::memory::MemoryStore;

#[async_trait]
impl PermissionRepository for MemoryStore {
    async fn create_permissions(
        &self,
        permissions: Vec<PermissionData>,
    ) -> AdapterResult<Vec<PermissionData>> {
        let mut state = self.write()?;

        let mut pairs: HashSet<(&str, RoleKind)> = state
            .permissions
            .iter()
            .map(|p| (p.user_id.as_str(), p.role))
            .collect();

        for permission in &permissions {
            if !state.users.iter().any(|u| u.id == permission.user_id) {
                return Err(AdapterError::storage(format!(
                    "foreign key violated: no user {}",
                    permission.user_id
                )));
            }
            if !pairs.insert((permission.user_id.as_str(), permission.role)) {
                return Err(AdapterError::storage(
                    "unique constraint violated: permissions.(user_id, role)",
                ));
            }
        }
        drop(pairs);

        state.permissions.extend(permissions.iter().cloned());
        Ok(permissions)
    }

    async fn exists_permission(&self, user_id: &str, role: RoleKind) -> AdapterResult<bool> {
        Ok(self
            .read()?
            .permissions
            .iter()
            .any(|p| p.user_id == user_id && p.role == role))
    }

    async fn find_permissions_by_user(&self, user_id: &str) -> AdapterResult<Vec<PermissionData>> {
        Ok(self
            .read()?
            .permissions
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_permission(&self, user_id: &str, role: RoleKind) -> AdapterResult<()> {
        self.write()?
            .permissions
            .retain(|p| !(p.user_id == user_id && p.role == role));
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> AdapterResult<Option<RoleData>> {
        Ok(self
            .read()?
            .roles
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn find_all(&self) -> AdapterResult<Vec<RoleData>> {
        Ok(self.read()?.roles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserData;
    use user_service_lib::UserRepository;

    const USER_ID: &str = "3f2b8c1e-9a4d-4e7b-8c21-5d6e7f809a1b";

    fn permission(n: u32, role: RoleKind) -> PermissionData {
        PermissionData {
            id: format!("00000000-0000-4000-8000-{:012}", n),
            user_id: USER_ID.to_string(),
            role,
        }
    }

    async fn with_user() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .create(UserData {
                id: USER_ID.to_string(),
                name: "John Doe".to_string(),
                email: "johndoe@email.com".to_string(),
                password: "hash".to_string(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_batch_insert_and_lookup() {
        let store = with_user().await;
        let created = store
            .create_permissions(vec![
                permission(1, RoleKind::Standard),
                permission(2, RoleKind::Admin),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert!(store
            .exists_permission(USER_ID, RoleKind::Admin)
            .await
            .unwrap());
        assert_eq!(
            store.find_permissions_by_user(USER_ID).await.unwrap(),
            created
        );
    }

    #[tokio::test]
    async fn test_batch_with_existing_pair_inserts_nothing() {
        let store = with_user().await;
        store
            .create_permissions(vec![permission(1, RoleKind::Standard)])
            .await
            .unwrap();

        let err = store
            .create_permissions(vec![
                permission(2, RoleKind::Admin),
                permission(3, RoleKind::Standard),
            ])
            .await
            .unwrap_err();

        assert!(matches!(err, AdapterError::Storage(_)));
        assert_eq!(store.permission_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_permission_for_unknown_user_rejected() {
        let store = MemoryStore::new();
        let err = store
            .create_permissions(vec![permission(1, RoleKind::Standard)])
            .await
            .unwrap_err();

        assert!(matches!(err, AdapterError::Storage(_)));
        assert_eq!(store.permission_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_only_touches_matching_pair() {
        let store = with_user().await;
        store
            .create_permissions(vec![
                permission(1, RoleKind::Standard),
                permission(2, RoleKind::Admin),
            ])
            .await
            .unwrap();

        store
            .delete_permission(USER_ID, RoleKind::Admin)
            .await
            .unwrap();

        let left = store.find_permissions_by_user(USER_ID).await.unwrap();
        assert_eq!(left, vec![permission(1, RoleKind::Standard)]);
    }

    #[tokio::test]
    async fn test_roles_are_seeded() {
        let store = MemoryStore::new();

        let admin = store.find_by_name("ADMIN").await.unwrap().unwrap();
        assert_eq!(admin.name, "ADMIN");
        assert!(store.find_by_name("ROOT").await.unwrap().is_none());
        assert_eq!(RoleRepository::find_all(&store).await.unwrap().len(), 2);
    }
}
