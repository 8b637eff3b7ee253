//! Employee roster: a read-only JSON file mapping employee codes to
//! display data. Identity is an external collaborator; the ledger only
//! receives the resolved fields.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
}

/// The roster file: a JSON object keyed by employee code.
#[derive(Debug, Default)]
pub struct Roster {
    entries: HashMap<String, Employee>,
}

impl Roster {
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Roster(format!(
                "roster file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let entries: HashMap<String, Employee> = serde_json::from_str(&content)
            .map_err(|e| AppError::Roster(format!("{}: {}", path.display(), e)))?;

        Ok(Self { entries })
    }

    pub fn lookup(&self, code: &str) -> Option<&Employee> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
