use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::users::domain::{User, UserUpdate};

/// Trait abstraction for user storage.
/// Implementations must serialize their read-modify-write cycles.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: User) -> Result<User, ServiceError>;
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn get(&self, id: &str) -> Result<User, ServiceError>;
    async fn update(&self, id: &str, input: UserUpdate) -> Result<User, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
