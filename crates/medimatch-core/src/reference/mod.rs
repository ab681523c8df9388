//! Static reference tables.
//!
//! Handles:
//! - Medication risk notes (brand and generic names)
//! - Do-not-combine lists
//! - Supplement and lifestyle alternatives by drug class
//!
//! All keys are matched case-insensitively.

mod risks;
mod treatments;

pub use treatments::AlternativeTreatment;

use std::collections::HashMap;

use crate::models::InsuranceTier;

/// Returned when a medication has no risk entry.
pub const DEFAULT_RISK: &str =
    "No specific risk information available. All medications have potential side effects.";

/// Read-only lookup tables built once per process.
pub struct ReferenceTables {
    /// Lowercased medication name → risk note
    risks: HashMap<String, String>,
    /// Lowercased medication name → substances not to combine with
    do_not_combine: HashMap<String, Vec<String>>,
    /// Lowercased drug class → alternative treatments
    treatments: HashMap<String, Vec<AlternativeTreatment>>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTables {
    /// Create tables with the built-in entries.
    pub fn new() -> Self {
        Self {
            risks: Self::default_risks(),
            do_not_combine: Self::default_do_not_combine(),
            treatments: Self::default_treatments(),
        }
    }

    /// Risk note for a medication, or [`DEFAULT_RISK`].
    pub fn risk_for(&self, medication: &str) -> &str {
        self.risks
            .get(&medication.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(DEFAULT_RISK)
    }

    /// Substances and drugs that should not be taken with a medication.
    pub fn do_not_combine(&self, medication: &str) -> &[String] {
        self.do_not_combine
            .get(&medication.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Supplement and lifestyle alternatives for a drug class.
    ///
    /// Unknown classes yield an empty slice.
    pub fn alternative_treatments(&self, drug_class: &str) -> &[AlternativeTreatment] {
        self.treatments
            .get(&drug_class.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Coverage description for a tier. Missing tiers read as not covered.
    pub fn insurance_description(&self, tier: Option<InsuranceTier>) -> &'static str {
        tier.unwrap_or(InsuranceTier::NotCovered).description()
    }

    /// Drug classes with at least one alternative treatment, sorted.
    pub fn treatment_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.treatments.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }

    fn default_risks() -> HashMap<String, String> {
        risks::RISKS
            .iter()
            .map(|(name, risk)| (name.to_lowercase(), risk.to_string()))
            .collect()
    }

    fn default_do_not_combine() -> HashMap<String, Vec<String>> {
        risks::DO_NOT_COMBINE
            .iter()
            .map(|(name, items)| {
                (
                    name.to_lowercase(),
                    items.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn default_treatments() -> HashMap<String, Vec<AlternativeTreatment>> {
        treatments::TREATMENTS
            .iter()
            .map(|(class, entries)| {
                (
                    class.to_lowercase(),
                    entries.iter().map(AlternativeTreatment::from).collect(),
                )
            })
            .collect()
    }
}
