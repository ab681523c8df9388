//! Recommendation models.

use serde::{Deserialize, Serialize};

use super::InsuranceTier;

/// Why an alternative was suggested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecommendationCategory {
    /// Bioequivalent generic of a brand medication
    GenericAvailable,
    /// Cheaper medication in the same drug class
    CheaperSameClass,
    /// Supplement, lifestyle or home treatment
    AlternativeTreatment,
    /// Named in the original record's curated alternatives list
    CuratedAlternative,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::GenericAvailable => "generic_available",
            RecommendationCategory::CheaperSameClass => "cheaper_same_class",
            RecommendationCategory::AlternativeTreatment => "alternative_treatment",
            RecommendationCategory::CuratedAlternative => "curated_alternative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "generic_available" => Some(RecommendationCategory::GenericAvailable),
            "cheaper_same_class" => Some(RecommendationCategory::CheaperSameClass),
            "alternative_treatment" => Some(RecommendationCategory::AlternativeTreatment),
            "curated_alternative" => Some(RecommendationCategory::CuratedAlternative),
            _ => None,
        }
    }

    /// Label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationCategory::GenericAvailable => "Generic version available",
            RecommendationCategory::CheaperSameClass => "Cheapest with similar effect",
            RecommendationCategory::AlternativeTreatment => "Alternative treatment",
            RecommendationCategory::CuratedAlternative => "Listed alternative",
        }
    }
}

/// One suggested alternative, computed fresh per search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub generic_name: Option<String>,
    pub drug_class: String,
    /// Average monthly cost in USD
    pub avg_cost: f64,
    pub category: RecommendationCategory,
    /// Original cost minus this cost
    pub savings: f64,
    /// Savings relative to the original cost; 0 when the original cost is not positive
    pub savings_percent: f64,
    pub explanation: String,
    pub side_effects: String,
    pub source: String,
    pub availability: Option<String>,
    pub insurance: Option<InsuranceTier>,
    /// Risk note (the warning, for alternative treatments)
    pub risk: Option<String>,
    /// Substances or drugs not to combine with
    pub contraindications: Vec<String>,
    /// Kind of alternative treatment (e.g., "Dietary Supplement")
    pub treatment_type: Option<String>,
}

impl Recommendation {
    /// Savings percent rounded to the nearest whole number, ties to even.
    pub fn rounded_savings_percent(&self) -> i64 {
        self.savings_percent.round_ties_even() as i64
    }

    /// Generic name when known, otherwise the display name.
    pub fn generic_or_name(&self) -> &str {
        self.generic_name.as_deref().unwrap_or(&self.name)
    }
}
