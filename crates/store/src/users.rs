use std::cmp::Ordering;

use async_trait::async_trait;

use domain::{AdapterError, AdapterResult, Pageable, UserData, UserReadOnly};
use user_service_lib::UserRepository;

use crate::memory::MemoryStore;

/// Column accepted by `Pageable::order_by` besides the default (email)
const ORDER_BY_NAME: &str = "name";

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn compare(order_by: &str, a: &UserData, b: &UserData) -> Ordering {
    if order_by == ORDER_BY_NAME {
        a.name.cmp(&b.name)
    } else {
        a.email.cmp(&b.email)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: UserData) -> AdapterResult<UserReadOnly> {
        let mut state = self.write()?;

        if state.users.iter().any(|u| u.email == user.email) {
            return Err(AdapterError::storage("unique constraint violated: users.email"));
        }
        if state.users.iter().any(|u| u.id == user.id) {
            return Err(AdapterError::storage("unique constraint violated: users.id"));
        }

        let created = UserReadOnly::from(&user);
        state.users.push(user);
        Ok(created)
    }

    async fn exists_by_email(&self, email: &str) -> AdapterResult<bool> {
        Ok(self.read()?.users.iter().any(|u| u.email == email))
    }

    async fn find_by_id(&self, id: &str) -> AdapterResult<Option<UserReadOnly>> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|u| u.id == id)
            .map(UserReadOnly::from))
    }

    async fn find_by_email(&self, email: &str) -> AdapterResult<Option<UserData>> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self, query: &str, pageable: &Pageable) -> AdapterResult<Vec<UserReadOnly>> {
        let state = self.read()?;

        let mut matches: Vec<&UserData> = state
            .users
            .iter()
            .filter(|u| u.email.contains(query))
            .collect();

        matches.sort_by(|a, b| {
            let ordering = compare(&pageable.order_by, a, b);
            if pageable.is_descending() {
                ordering.reverse()
            } else {
                ordering
            }
        });

        Ok(matches
            .into_iter()
            .skip(to_usize(pageable.offset()))
            .take(to_usize(pageable.limit()))
            .map(UserReadOnly::from)
            .collect())
    }

    async fn update_password(
        &self,
        id: &str,
        password_hash: &str,
    ) -> AdapterResult<Option<UserReadOnly>> {
        let mut state = self.write()?;

        Ok(state.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.password = password_hash.to_string();
            UserReadOnly::from(&*user)
        }))
    }

    async fn update_name(&self, id: &str, name: &str) -> AdapterResult<Option<UserReadOnly>> {
        let mut state = self.write()?;

        Ok(state.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.name = name.to_string();
            UserReadOnly::from(&*user)
        }))
    }
}
