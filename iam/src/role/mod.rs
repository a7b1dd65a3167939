use serde::{Deserialize, Serialize};

mod manager;
mod memory_store;
mod mongo_store;
mod store;

pub use self::manager::*;
pub use self::memory_store::*;
pub use self::mongo_store::*;
pub use self::store::*;

/// Name of the collection storing the roles
pub const ROLES_COLLECTION: &str = "Roles";

/// A stored role
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}

/// A role as it is defined in source, the id is assigned by the store on the first insert
#[derive(Clone, Debug, PartialEq)]
pub struct RoleDefinition {
    pub name: String,
    pub permissions: Vec<String>,
}

impl RoleDefinition {
    pub fn new<S: Into<String>>(name: S, permissions: &[&str]) -> Self {
        RoleDefinition {
            name: name.into(),
            permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

/// Result of a single upsert
#[derive(Clone, Debug, PartialEq)]
pub enum UpsertOutcome {
    /// No role with the name was present, a new one was created
    Inserted { id: String },
    /// An existing role got its permissions overwritten, `changed` is false if they were already up to date
    Updated { id: String, changed: bool },
}

impl UpsertOutcome {
    pub fn id(&self) -> &str {
        match self {
            UpsertOutcome::Inserted { id } => id,
            UpsertOutcome::Updated { id, .. } => id,
        }
    }
}

/// Outcome of each upsert in the order of the definitions
#[derive(Clone, Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<(String, UpsertOutcome)>,
}

impl SyncReport {
    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, UpsertOutcome::Inserted { .. }))
            .count()
    }

    pub fn updated(&self) -> usize {
        self.outcomes.len() - self.inserted()
    }

    /// Number of updated roles whose permissions actually differed
    pub fn changed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, UpsertOutcome::Updated { changed: true, .. }))
            .count()
    }

    pub fn outcome(&self, name: &str) -> Option<&UpsertOutcome> {
        self.outcomes.iter().find(|(n, _)| n == name).map(|(_, o)| o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let report = SyncReport {
            outcomes: vec![
                ("a".to_owned(), UpsertOutcome::Inserted { id: "1".to_owned() }),
                (
                    "b".to_owned(),
                    UpsertOutcome::Updated {
                        id: "2".to_owned(),
                        changed: true,
                    },
                ),
                (
                    "c".to_owned(),
                    UpsertOutcome::Updated {
                        id: "3".to_owned(),
                        changed: false,
                    },
                ),
            ],
        };

        assert_eq!(report.inserted(), 1);
        assert_eq!(report.updated(), 2);
        assert_eq!(report.changed(), 1);
        assert_eq!(report.outcome("c").map(UpsertOutcome::id), Some("3"));
        assert_eq!(report.outcome("d"), None);
    }
}
