use super::{Config, SeedError};
use rolesync_core::mongo::MongoConnection;
use rolesync_iam::{RoleDefinition, RoleManager, SyncReport};

/// The built-in roles with their permissions
pub const ROLES: &[(&str, &[&str])] = &[("SUPER_ADMIN", &["createAdminUser"])];

pub fn role_definitions() -> Vec<RoleDefinition> {
    ROLES
        .iter()
        .map(|(name, permissions)| RoleDefinition::new(*name, permissions))
        .collect()
}

pub async fn populate_roles(cfg: &Config, roles: &[RoleDefinition]) -> Result<SyncReport, SeedError> {
    let connection = MongoConnection::connect(&cfg.mongo).await?;

    let result = match RoleManager::with_database(connection.database()).await {
        Ok(manager) => manager.sync_roles(roles).await.map_err(SeedError::from),
        Err(err) => Err(err.into()),
    };

    connection.release().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolesync_core::mongo::MongoConfig;
    use rolesync_iam::MemoryRoleStore;
    use std::collections::HashSet;

    #[test]
    fn builtin_roles_are_unique() {
        let roles = role_definitions();
        let names: HashSet<_> = roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), roles.len());
    }

    #[test]
    fn super_admin_can_create_admins() {
        let roles = role_definitions();
        let super_admin = roles.iter().find(|r| r.name == "SUPER_ADMIN").unwrap();
        assert_eq!(super_admin.permissions, vec!["createAdminUser".to_owned()]);
    }

    #[tokio::test]
    async fn builtin_roles_are_synchronized() {
        let store = MemoryRoleStore::new();
        let manager = RoleManager::new(store.clone());

        let report = manager.sync_roles(&role_definitions()).await.unwrap();
        assert_eq!(report.inserted(), ROLES.len());

        let report = manager.sync_roles(&role_definitions()).await.unwrap();
        assert_eq!(report.inserted(), 0);
        assert_eq!(report.changed(), 0);
        assert_eq!(store.len().await, ROLES.len());
    }

    #[tokio::test]
    async fn unreachable_database_stops_before_any_upsert() {
        let cfg = Config {
            mongo: MongoConfig {
                uri: "mongodb://127.0.0.1:1".to_owned(),
                database: "rolesync-test".to_owned(),
                server_selection_timeout: Some(1),
            },
        };

        match populate_roles(&cfg, &role_definitions()).await {
            Err(SeedError::Connection(_)) => {}
            r => panic!("unexpected result: {:?}", r),
        }
    }
}
