use super::{MongoRoleStore, Role, RoleDefinition, RoleStore, SyncReport, UpsertOutcome};
use crate::IAMError;
use futures::future::try_join_all;
use mongodb::Database;
use std::collections::HashSet;
use std::sync::Arc;

/// Manage the role database
#[derive(Clone)]
pub struct RoleManager {
    db: Arc<dyn RoleStore>,
}

impl RoleManager {
    pub fn new<S>(store: S) -> Self
    where
        S: 'static + RoleStore,
    {
        RoleManager { db: Arc::new(store) }
    }

    /// Manage the roles collection of the given mongodb database.
    pub async fn with_database(database: &Database) -> Result<Self, IAMError> {
        let store = MongoRoleStore::new(database);
        store.ensure_indexes().await?;
        Ok(Self::new(store))
    }

    async fn upsert_role(&self, role: &RoleDefinition) -> Result<UpsertOutcome, IAMError> {
        let outcome = self.db.upsert_role(role).await.map_err(|err| {
            log::error!("Failed to upsert role {}: {}", role.name, err);
            IAMError::Upsert {
                role: role.name.clone(),
                cause: err.to_string(),
            }
        })?;

        match outcome {
            UpsertOutcome::Inserted { ref id } => log::info!("Created role {} ({})", role.name, id),
            UpsertOutcome::Updated { ref id, changed: true } => {
                log::info!("Updated permissions of role {} ({})", role.name, id)
            }
            UpsertOutcome::Updated { ref id, changed: false } => log::info!("Role {} ({}) is up to date", role.name, id),
        }
        Ok(outcome)
    }

    /// Upsert all the roles by name.
    ///
    /// The upserts are independent and run concurrently. On the first failure the remaining
    /// upserts are abandoned and the error is returned, what was written is not rolled back.
    pub async fn sync_roles(&self, roles: &[RoleDefinition]) -> Result<SyncReport, IAMError> {
        let mut names = HashSet::new();
        for role in roles {
            if !names.insert(role.name.as_str()) {
                return Err(IAMError::DuplicateRole(role.name.clone()));
            }
        }

        log::info!("Synchronizing {} role(s)", roles.len());
        let outcomes = try_join_all(roles.iter().map(|role| self.upsert_role(role))).await?;

        let report = SyncReport {
            outcomes: roles.iter().map(|role| role.name.clone()).zip(outcomes).collect(),
        };
        log::info!(
            "Roles synchronized, created: {}, updated: {} (changed: {})",
            report.inserted(),
            report.updated(),
            report.changed()
        );
        Ok(report)
    }

    pub async fn get_roles(&self) -> Result<Vec<Role>, IAMError> {
        self.db.get_roles().await
    }

    pub async fn find_role(&self, name: &str) -> Result<Option<Role>, IAMError> {
        self.db.find_role(name).await
    }

    pub async fn find_roles_by_ids(&self, ids: &[&str]) -> Result<Vec<Role>, IAMError> {
        self.db.find_roles_by_ids(ids).await
    }

    pub async fn delete_role(&self, name: &str) -> Result<(), IAMError> {
        log::info!("Deleting role {}", name);
        self.db.delete_role(name).await
    }
}
