//! Search constraints supplied by the user.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INSURANCE: &str = "None / Self-pay";
pub const DEFAULT_PHARMACY: &str = "Any";

/// Parameters for one recommendation search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constraint {
    /// Prescribed medication name
    pub medication: String,
    /// Monthly budget ceiling in USD; ignored unless positive
    pub budget: Option<f64>,
    /// Insurance provider or coverage label
    pub insurance: String,
    /// Comma-separated allergy or restriction terms
    pub allergies: Option<String>,
    /// Preferred pharmacy
    pub pharmacy: String,
    /// Include supplement and lifestyle alternatives
    pub include_holistic: bool,
}

impl Constraint {
    pub fn new(medication: impl Into<String>) -> Self {
        Self {
            medication: medication.into(),
            budget: None,
            insurance: DEFAULT_INSURANCE.to_string(),
            allergies: None,
            pharmacy: DEFAULT_PHARMACY.to_string(),
            include_holistic: false,
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_insurance(mut self, insurance: impl Into<String>) -> Self {
        self.insurance = insurance.into();
        self
    }

    pub fn with_allergies(mut self, allergies: impl Into<String>) -> Self {
        self.allergies = Some(allergies.into());
        self
    }

    pub fn with_pharmacy(mut self, pharmacy: impl Into<String>) -> Self {
        self.pharmacy = pharmacy.into();
        self
    }

    pub fn with_holistic(mut self, include: bool) -> Self {
        self.include_holistic = include;
        self
    }

    /// The budget, if one is set and positive.
    pub fn effective_budget(&self) -> Option<f64> {
        self.budget.filter(|b| *b > 0.0)
    }

    /// Allergy terms: comma-split, trimmed, lowercased, blanks dropped.
    pub fn allergy_terms(&self) -> Vec<String> {
        self.allergies
            .as_deref()
            .map(|a| {
                a.split(',')
                    .map(|term| term.trim().to_lowercase())
                    .filter(|term| !term.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
