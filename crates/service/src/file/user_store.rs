use std::sync::Arc;

use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;
use crate::users::{User, UserStore, UserUpdate};

const ENTITY: &str = "user";

/// File storage: the user collection persisted as one JSON array.
#[derive(Clone)]
pub struct FileUserStore {
    store: Arc<JsonArrayStore<User>>,
}

impl FileUserStore {
    /// Initialize the store, creating an empty file if it does not exist.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<User>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }

    /// Append a new user; rejected when the id is already taken.
    pub async fn create(&self, user: User) -> Result<User, ServiceError> {
        let created = self
            .store
            .update(|users| {
                if users.iter().any(|u| u.id == user.id) {
                    return Err(ServiceError::already_exists(ENTITY, &user.id));
                }
                users.push(user.clone());
                Ok(user)
            })
            .await?;
        debug!(id = %created.id, "user created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Result<User, ServiceError> {
        self.store
            .read(|users| users.iter().find(|u| u.id == id).cloned())
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Replace the name of an existing user; the id never changes.
    pub async fn update(&self, id: &str, input: UserUpdate) -> Result<User, ServiceError> {
        let updated = self
            .store
            .update(|users| {
                let existing = users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
                existing.name = input.name;
                Ok(existing.clone())
            })
            .await?;
        debug!(%id, "user updated");
        Ok(updated)
    }

    /// Remove a user. The last record takes the removed slot, so order is not kept.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store
            .update(|users| {
                let idx = users
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
                users.swap_remove(idx);
                Ok(())
            })
            .await?;
        debug!(%id, "user deleted");
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for FileUserStore {
    async fn create(&self, user: User) -> Result<User, ServiceError> {
        self.create(user).await
    }

    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.list().await
    }

    async fn get(&self, id: &str) -> Result<User, ServiceError> {
        self.get(id).await
    }

    async fn update(&self, id: &str, input: UserUpdate) -> Result<User, ServiceError> {
        self.update(id, input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.delete(id).await
    }
}
