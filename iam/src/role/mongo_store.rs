use super::{Role, RoleDefinition, RoleStore, UpsertOutcome, ROLES_COLLECTION};
use crate::IAMError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use uuid::Uuid;

/// Role store backed by a mongodb collection
#[derive(Clone)]
pub struct MongoRoleStore {
    db: Collection<Role>,
}

impl MongoRoleStore {
    pub fn new(database: &Database) -> Self {
        MongoRoleStore {
            db: database.collection(ROLES_COLLECTION),
        }
    }

    /// Create the unique index on the role name. Without it two concurrent upserts of the same
    /// name may both insert.
    pub async fn ensure_indexes(&self) -> Result<(), IAMError> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let result = self.db.create_index(index, None).await?;
        log::debug!("Role index {} is ready", result.index_name);
        Ok(())
    }
}

#[async_trait]
impl RoleStore for MongoRoleStore {
    async fn upsert_role(&self, role: &RoleDefinition) -> Result<UpsertOutcome, IAMError> {
        let id = Uuid::new_v4().to_string();
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self
            .db
            .find_one_and_update(
                doc! { "name": role.name.as_str() },
                doc! {
                    "$set": { "permissions": role.permissions.clone() },
                    "$setOnInsert": { "_id": id.as_str() },
                },
                options,
            )
            .await?;

        Ok(match previous {
            None => UpsertOutcome::Inserted { id },
            Some(previous) => UpsertOutcome::Updated {
                changed: previous.permissions != role.permissions,
                id: previous.id,
            },
        })
    }

    async fn find_role(&self, name: &str) -> Result<Option<Role>, IAMError> {
        Ok(self.db.find_one(doc! { "name": name }, None).await?)
    }

    async fn find_roles_by_ids(&self, ids: &[&str]) -> Result<Vec<Role>, IAMError> {
        let cursor = self.db.find(doc! { "_id": { "$in": ids } }, None).await?;
        let roles: Vec<Role> = cursor.try_collect().await?;
        Ok(roles)
    }

    async fn get_roles(&self) -> Result<Vec<Role>, IAMError> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let cursor = self.db.find(None, options).await?;
        let roles: Vec<Role> = cursor.try_collect().await?;
        Ok(roles)
    }

    async fn delete_role(&self, name: &str) -> Result<(), IAMError> {
        let result = self.db.delete_one(doc! { "name": name }, None).await?;
        if result.deleted_count == 0 {
            log::debug!("Role {} was not present", name);
        }
        Ok(())
    }
}
