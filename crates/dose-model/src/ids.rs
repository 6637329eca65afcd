use std::fmt;

use crate::DoseError;

/// Catalog identifier for a drug (e.g. "acetaminophen").
///
/// Identifiers are trimmed and compared case-insensitively by storing the
/// lowercase form.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DrugId(String);

impl DrugId {
    pub fn new(value: impl Into<String>) -> Result<Self, DoseError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DoseError::EmptyId { kind: "drug" });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog identifier for a disease/indication (e.g. "severe-infection").
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IndicationId(String);

impl IndicationId {
    pub fn new(value: impl Into<String>) -> Result<Self, DoseError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DoseError::EmptyId { kind: "indication" });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
