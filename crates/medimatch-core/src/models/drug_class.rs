//! Drug class reference model.

use serde::{Deserialize, Serialize};

/// Descriptive information about a drug class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugClassInfo {
    /// Short name (e.g., "SSRI")
    pub class_name: String,
    /// Expanded name (e.g., "Selective Serotonin Reuptake Inhibitors")
    pub full_name: String,
    pub description: String,
    pub common_uses: String,
}

impl DrugClassInfo {
    pub fn new(
        class_name: impl Into<String>,
        full_name: impl Into<String>,
        description: impl Into<String>,
        common_uses: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            full_name: full_name.into(),
            description: description.into(),
            common_uses: common_uses.into(),
        }
    }
}
