use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of generated project IDs
pub const PROJECT_ID_LEN: usize = 12;

/// A named container of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub favourite: bool,
}

impl Project {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            favourite: false,
        }
    }
}

/// Random 12-character alphanumeric token
pub fn generate_project_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PROJECT_ID_LEN)
        .map(char::from)
        .collect()
}
