//! Medication catalog models.

use serde::{Deserialize, Serialize};

/// Insurance coverage tier for a medication.
///
/// Serialized with the labels shown to users ("None", "Limited", "Some", "Most").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InsuranceTier {
    /// Not covered; the patient pays full price
    #[serde(rename = "None")]
    NotCovered,
    /// Only a few plans cover it
    Limited,
    /// Partial coverage or prior authorization
    #[serde(rename = "Some")]
    Partial,
    /// Most plans cover it
    Most,
}

impl InsuranceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceTier::NotCovered => "None",
            InsuranceTier::Limited => "Limited",
            InsuranceTier::Partial => "Some",
            InsuranceTier::Most => "Most",
        }
    }

    /// Parse a tier label, case-insensitively. "None / Self-pay" maps to [`InsuranceTier::NotCovered`].
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let compact: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "none" | "none/self-pay" | "self-pay" | "notcovered" => Some(InsuranceTier::NotCovered),
            "limited" => Some(InsuranceTier::Limited),
            "some" | "partial" => Some(InsuranceTier::Partial),
            "most" => Some(InsuranceTier::Most),
            _ => None,
        }
    }

    /// Sentence describing what this tier means for the patient.
    pub fn description(&self) -> &'static str {
        match self {
            InsuranceTier::Most => "Most plans cover this medication, but costs may vary.",
            InsuranceTier::Partial => {
                "Some plans may offer partial coverage or require prior authorization."
            }
            InsuranceTier::Limited => "Only a few insurance plans cover this medication.",
            InsuranceTier::NotCovered => {
                "This medication is not covered by insurance. You'll likely pay the full price."
            }
        }
    }
}

impl std::fmt::Display for InsuranceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single medication in the catalog.
///
/// Records are read-only snapshots. A brand record may name its generic
/// counterpart and a generic may name its brand; the counterpart always has
/// the opposite `is_brand` value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationRecord {
    /// Display name (e.g., "Lipitor")
    pub name: String,
    /// Generic (active ingredient) name
    pub generic_name: Option<String>,
    /// Drug class (e.g., "Statin")
    pub drug_class: String,
    /// What the medication is used for
    pub description: String,
    /// Average monthly cost in USD
    pub avg_cost: f64,
    /// Brand-name product
    pub is_brand: bool,
    /// Brand or generic counterpart name
    pub counterpart: Option<String>,
    /// Comma-separated side effects
    pub side_effects: String,
    /// Comma-separated known interactions
    pub interactions: String,
    /// Conditions for which the medication may be unsuitable
    pub restrictions: Option<String>,
    /// Provenance (e.g., "FDA, Mayo Clinic")
    pub source: String,
    pub insurance: Option<InsuranceTier>,
    /// Curated alternative medication names
    pub alternatives: Vec<String>,
    /// Supplement or lifestyle suggestions
    pub supplement_suggestions: Vec<String>,
}

impl MedicationRecord {
    /// Create a new record with required fields.
    pub fn new(name: impl Into<String>, drug_class: impl Into<String>, avg_cost: f64) -> Self {
        Self {
            name: name.into(),
            generic_name: None,
            drug_class: drug_class.into(),
            description: String::new(),
            avg_cost,
            is_brand: false,
            counterpart: None,
            side_effects: String::new(),
            interactions: String::new(),
            restrictions: None,
            source: String::new(),
            insurance: None,
            alternatives: Vec::new(),
            supplement_suggestions: Vec::new(),
        }
    }

    /// Case-insensitive name comparison.
    ///
    /// Folds ASCII letters only, the same as SQLite's `NOCASE` collation.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Case-insensitive generic name comparison (ASCII folding).
    pub fn has_generic_name(&self, name: &str) -> bool {
        self.generic_name
            .as_deref()
            .is_some_and(|generic| generic.eq_ignore_ascii_case(name))
    }

    /// Whether this record belongs to the given class (ASCII case folding).
    pub fn in_class(&self, drug_class: &str) -> bool {
        self.drug_class.eq_ignore_ascii_case(drug_class)
    }

    /// Generic name when known, otherwise the display name.
    pub fn generic_or_name(&self) -> &str {
        self.generic_name.as_deref().unwrap_or(&self.name)
    }
}
