use super::{Role, RoleDefinition, RoleStore, UpsertOutcome};
use crate::IAMError;
use async_trait::async_trait;
use futures::lock::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Role store keeping everything in memory, nothing is persisted.
///
/// Upserts are serialized by a lock, thus the name stays unique just as with the unique index of
/// the mongodb store.
#[derive(Clone, Default)]
pub struct MemoryRoleStore {
    roles: Arc<Mutex<Vec<Role>>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with some already existing roles
    pub fn with_roles(roles: Vec<Role>) -> Self {
        MemoryRoleStore {
            roles: Arc::new(Mutex::new(roles)),
        }
    }

    pub async fn len(&self) -> usize {
        self.roles.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.roles.lock().await.is_empty()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn upsert_role(&self, role: &RoleDefinition) -> Result<UpsertOutcome, IAMError> {
        let mut roles = self.roles.lock().await;

        if let Some(stored) = roles.iter_mut().find(|r| r.name == role.name) {
            let changed = stored.permissions != role.permissions;
            stored.permissions = role.permissions.clone();
            return Ok(UpsertOutcome::Updated {
                id: stored.id.clone(),
                changed,
            });
        }

        let id = Uuid::new_v4().to_string();
        roles.push(Role {
            id: id.clone(),
            name: role.name.clone(),
            permissions: role.permissions.clone(),
        });
        Ok(UpsertOutcome::Inserted { id })
    }

    async fn find_role(&self, name: &str) -> Result<Option<Role>, IAMError> {
        let roles = self.roles.lock().await;
        Ok(roles.iter().find(|r| r.name == name).cloned())
    }

    async fn find_roles_by_ids(&self, ids: &[&str]) -> Result<Vec<Role>, IAMError> {
        let roles = self.roles.lock().await;
        Ok(roles.iter().filter(|r| ids.contains(&r.id.as_str())).cloned().collect())
    }

    async fn get_roles(&self) -> Result<Vec<Role>, IAMError> {
        let mut roles = self.roles.lock().await.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }

    async fn delete_role(&self, name: &str) -> Result<(), IAMError> {
        self.roles.lock().await.retain(|r| r.name != name);
        Ok(())
    }
}
