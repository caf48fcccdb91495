//! Choice vocabularies for closed-choice flags
//!
//! Bugzilla installations differ in the field values they accept, so the
//! legal values for `--severity`, `--priority`, `--resolution`, `--status`
//! and `--order` come from configuration. The compiled defaults below match
//! a stock installation. Membership is checked after argument parsing and
//! before any parameters are handed to a handler.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Legal values for the choice-constrained flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChoiceTable {
    /// Bug severities
    pub severity: Vec<String>,
    /// Bug priorities
    pub priority: Vec<String>,
    /// Resolutions accepted when closing a bug
    pub resolution: Vec<String>,
    /// Bug statuses
    pub status: Vec<String>,
    /// Sort keys for `search --order`, mapped to the server-side sort column
    pub order: BTreeMap<String, String>,
}

impl Default for ChoiceTable {
    fn default() -> Self {
        Self {
            severity: [
                "blocker",
                "critical",
                "major",
                "normal",
                "minor",
                "trivial",
                "enhancement",
            ]
            .map(String::from)
            .to_vec(),
            priority: ["Highest", "High", "Normal", "Low", "Lowest"]
                .map(String::from)
                .to_vec(),
            resolution: [
                "FIXED",
                "INVALID",
                "WONTFIX",
                "DUPLICATE",
                "WORKSFORME",
                "CANTFIX",
                "NEEDINFO",
                "TEST-REQUEST",
                "UPSTREAM",
            ]
            .map(String::from)
            .to_vec(),
            status: [
                "UNCONFIRMED",
                "NEW",
                "ASSIGNED",
                "REOPENED",
                "RESOLVED",
                "VERIFIED",
                "CLOSED",
            ]
            .map(String::from)
            .to_vec(),
            order: [
                ("number", "bugs.bug_id"),
                ("assignee", "map_assigned_to.login_name"),
                ("importance", "bugs.priority,bugs.bug_severity"),
                ("date", "bugs.delta_ts"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        }
    }
}

impl ChoiceTable {
    /// Reject vocabularies an override has emptied out. A table that cannot
    /// validate anything would let bad values through to the server.
    pub fn verify(&self) -> DomainResult<()> {
        for (name, empty) in [
            ("severity", self.severity.is_empty()),
            ("priority", self.priority.is_empty()),
            ("resolution", self.resolution.is_empty()),
            ("status", self.status.is_empty()),
            ("order", self.order.is_empty()),
        ] {
            if empty {
                return Err(DomainError::EmptyVocabulary(name));
            }
        }
        Ok(())
    }

    pub fn ensure_severity(&self, value: &str) -> DomainResult<()> {
        Self::ensure_member("severity", &self.severity, value)
    }

    pub fn ensure_priority(&self, value: &str) -> DomainResult<()> {
        Self::ensure_member("priority", &self.priority, value)
    }

    pub fn ensure_resolution(&self, value: &str) -> DomainResult<()> {
        Self::ensure_member("resolution", &self.resolution, value)
    }

    pub fn ensure_status(&self, value: &str) -> DomainResult<()> {
        Self::ensure_member("status", &self.status, value)
    }

    pub fn ensure_order(&self, value: &str) -> DomainResult<()> {
        if self.order.contains_key(value) {
            return Ok(());
        }
        Err(DomainError::InvalidChoice {
            flag: "order",
            value: value.to_string(),
            legal: self.order.keys().join(", "),
        })
    }

    /// Server-side sort column for a validated order key.
    pub fn order_column(&self, key: &str) -> Option<&str> {
        self.order.get(key).map(String::as_str)
    }

    fn ensure_member(
        flag: &'static str,
        vocabulary: &[String],
        value: &str,
    ) -> DomainResult<()> {
        if vocabulary.iter().any(|legal| legal == value) {
            return Ok(());
        }
        Err(DomainError::InvalidChoice {
            flag,
            value: value.to_string(),
            legal: vocabulary.iter().join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_verifies() {
        ChoiceTable::default().verify().unwrap();
    }

    #[test]
    fn given_known_severity_when_ensure_then_ok() {
        let table = ChoiceTable::default();
        table.ensure_severity("normal").unwrap();
    }

    #[test]
    fn given_unknown_severity_when_ensure_then_error_names_flag_and_values() {
        let table = ChoiceTable::default();
        let err = table.ensure_severity("bogus").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("--severity"), "flag named: {msg}");
        assert!(msg.contains("bogus"), "offending value named: {msg}");
        assert!(msg.contains("blocker"), "legal values listed: {msg}");
    }

    #[test]
    fn given_emptied_vocabulary_when_verify_then_error() {
        let table = ChoiceTable {
            status: vec![],
            ..ChoiceTable::default()
        };
        let err = table.verify().unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn order_keys_map_to_sort_columns() {
        let table = ChoiceTable::default();
        table.ensure_order("number").unwrap();
        assert_eq!(table.order_column("number"), Some("bugs.bug_id"));
        assert!(table.ensure_order("size").is_err());
    }
}
