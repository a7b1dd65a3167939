mod error;
pub mod role;

pub use self::error::*;
pub use self::role::{
    MemoryRoleStore, MongoRoleStore, Role, RoleDefinition, RoleManager, RoleStore, SyncReport, UpsertOutcome,
};
