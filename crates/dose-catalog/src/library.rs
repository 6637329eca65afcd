//! Drug library loading and lookups.
//!
//! The library is a static catalog: each drug carries its indications with
//! guideline text, the concentration strings it ships in, and its safety
//! rules. A default library is embedded in the binary; callers may load a
//! replacement from a TOML file with the same schema.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use dose_model::{DrugId, IndicationId};
use dose_safety::{WarningResolver, WarningRule};

use crate::error::CatalogError;

const EMBEDDED_LIBRARY: &str = include_str!("../data/medicines.toml");

/// A guideline text stored for one (drug, indication) pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuidelineText {
    pub indication: IndicationId,
    pub text: String,
}

/// One catalog drug: display name, indications, formulations, safety rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DrugEntry {
    pub id: DrugId,
    pub name: String,
    #[serde(default)]
    pub concentrations: Vec<String>,
    #[serde(default, rename = "guideline")]
    pub guidelines: Vec<GuidelineText>,
    #[serde(default, rename = "warning")]
    pub warnings: Vec<WarningRule>,
}

impl DrugEntry {
    /// The indication used when the caller selects none.
    pub fn default_indication(&self) -> Option<&IndicationId> {
        self.guidelines.first().map(|guideline| &guideline.indication)
    }

    /// The concentration used when the caller selects none; the library
    /// lists the most common formulation first.
    pub fn default_concentration(&self) -> Option<&str> {
        self.concentrations.first().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct LibraryFile {
    #[serde(default, rename = "drug")]
    drugs: Vec<DrugEntry>,
}

/// Validated, read-only drug catalog.
#[derive(Debug, Clone)]
pub struct DrugLibrary {
    drugs: Vec<DrugEntry>,
}

impl DrugLibrary {
    /// Load the library embedded in the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_LIBRARY, Path::new("<embedded medicines.toml>"))
    }

    /// Load a library from an external TOML file with the embedded schema.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, CatalogError> {
        let file: LibraryFile = toml::from_str(contents).map_err(|source| CatalogError::Toml {
            path: PathBuf::from(origin),
            source,
        })?;
        let library = Self { drugs: file.drugs };
        library.validate()?;
        Ok(library)
    }

    /// Drugs in library order.
    pub fn drugs(&self) -> &[DrugEntry] {
        &self.drugs
    }

    pub fn drug(&self, id: &DrugId) -> Option<&DrugEntry> {
        self.drugs.iter().find(|entry| &entry.id == id)
    }

    pub fn guideline(&self, drug: &DrugId, indication: &IndicationId) -> Option<&GuidelineText> {
        self.drug(drug)?
            .guidelines
            .iter()
            .find(|guideline| &guideline.indication == indication)
    }

    /// Build a warning resolver from the catalog's rule sets. Every listed
    /// drug registers a set, so only drugs absent from the library fall
    /// through to the resolver's conservative path.
    pub fn warning_resolver(&self) -> WarningResolver {
        let mut resolver = WarningResolver::new();
        for entry in &self.drugs {
            resolver.register(entry.id.clone(), entry.warnings.clone());
        }
        resolver
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.drugs.is_empty() {
            return Err(CatalogError::invalid("library contains no drugs"));
        }
        let mut seen_drugs = BTreeSet::new();
        for entry in &self.drugs {
            let id = entry.id.as_str();
            if id.is_empty() {
                return Err(CatalogError::invalid("drug id must not be empty"));
            }
            if id != id.trim().to_lowercase() {
                return Err(CatalogError::invalid(format!(
                    "drug id {id:?} must be lowercase with no surrounding whitespace"
                )));
            }
            if !seen_drugs.insert(id) {
                return Err(CatalogError::invalid(format!("duplicate drug id {id:?}")));
            }
            if entry.name.trim().is_empty() {
                return Err(CatalogError::invalid(format!("drug {id:?} has no name")));
            }
            if entry.concentrations.is_empty() {
                return Err(CatalogError::invalid(format!(
                    "drug {id:?} lists no concentrations"
                )));
            }
            if entry.guidelines.is_empty() {
                return Err(CatalogError::invalid(format!(
                    "drug {id:?} lists no guidelines"
                )));
            }
            let mut seen_indications = BTreeSet::new();
            for guideline in &entry.guidelines {
                if guideline.text.trim().is_empty() {
                    return Err(CatalogError::invalid(format!(
                        "drug {id:?} has an empty guideline text for {}",
                        guideline.indication
                    )));
                }
                if !seen_indications.insert(guideline.indication.as_str()) {
                    return Err(CatalogError::invalid(format!(
                        "drug {id:?} repeats indication {}",
                        guideline.indication
                    )));
                }
            }
        }
        Ok(())
    }
}
