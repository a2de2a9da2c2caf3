use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

/// Players keyed by player id, in the order they were stored.
pub type Players = IndexMap<String, Player>;
