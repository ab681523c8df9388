//! Medication context supplied alongside a question.

use serde::{Deserialize, Serialize};

/// The facts about one medication that question handlers may draw on.
///
/// The same shape is used for the prescribed medication and for the
/// alternative currently selected by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuestionContext {
    /// Display name (brand or generic)
    pub name: String,
    /// Generic (non-brand) name, if known
    pub generic_name: Option<String>,
    /// Drug class (e.g., "Statin", "SSRI")
    pub drug_class: String,
    /// Average monthly cost in USD
    pub avg_cost: f64,
    /// Human-readable insurance coverage sentence
    pub insurance_description: Option<String>,
    /// Supplement or lifestyle suggestions attached to the medication
    pub supplement_suggestions: Vec<String>,
}

impl QuestionContext {
    /// Create a context with the required fields.
    pub fn new(name: impl Into<String>, drug_class: impl Into<String>, avg_cost: f64) -> Self {
        Self {
            name: name.into(),
            drug_class: drug_class.into(),
            avg_cost,
            ..Self::default()
        }
    }

    pub fn with_generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.generic_name = Some(generic_name.into());
        self
    }

    pub fn with_insurance_description(mut self, description: impl Into<String>) -> Self {
        self.insurance_description = Some(description.into());
        self
    }

    pub fn with_supplement_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.supplement_suggestions = suggestions;
        self
    }

    /// Check whether a lowercase table key occurs in the name or generic name.
    pub fn matches_key(&self, key: &str) -> bool {
        if self.name.to_lowercase().contains(key) {
            return true;
        }
        self.generic_name
            .as_deref()
            .map(|g| g.to_lowercase().contains(key))
            .unwrap_or(false)
    }

    /// Lowercased drug class.
    pub fn class_lower(&self) -> String {
        self.drug_class.to_lowercase()
    }
}
