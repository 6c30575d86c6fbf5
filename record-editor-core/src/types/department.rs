//! Department record

use serde::{Deserialize, Serialize};

use super::{id_cell, Entity};
use crate::config::EditorConfig;

/// Department
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Department ID (unset until first saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Department name
    #[serde(default)]
    pub name: String,
}

impl Department {
    #[must_use]
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Department {
    const KIND: &'static str = "Department";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    fn columns() -> &'static [&'static str] {
        &["Id", "Name"]
    }

    fn display_fields(&self, _config: &EditorConfig) -> Vec<String> {
        vec![id_cell(self.id), self.name.clone()]
    }
}
