use super::{Role, RoleDefinition, UpsertOutcome};
use crate::IAMError;
use async_trait::async_trait;

/// Storage of the roles, keyed by the unique role name
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Set the permissions of the role with the given name, create the role with a new id if it is
    /// not present yet. The operation is atomic, the id of an existing role is never changed.
    async fn upsert_role(&self, role: &RoleDefinition) -> Result<UpsertOutcome, IAMError>;

    async fn find_role(&self, name: &str) -> Result<Option<Role>, IAMError>;

    async fn find_roles_by_ids(&self, ids: &[&str]) -> Result<Vec<Role>, IAMError>;

    /// Return all the roles ordered by name
    async fn get_roles(&self) -> Result<Vec<Role>, IAMError>;

    async fn delete_role(&self, name: &str) -> Result<(), IAMError>;
}
