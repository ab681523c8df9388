//! Candidate alternatives for a medication.
//!
//! Three sources, in output order:
//! 1. Generic counterpart of a brand
//! 2. Cheapest cheaper medications in the same class
//! 3. Supplement and lifestyle alternatives (holistic searches only)
//!
//! Curated alternatives, the names listed on the record itself, are a
//! separate search with its own budget and restriction filtering.

use tracing::debug;

use crate::catalog::MedicationCatalog;
use crate::config::EngineConfig;
use crate::models::{Constraint, MedicationRecord, Recommendation, RecommendationCategory};
use crate::reference::{AlternativeTreatment, ReferenceTables};

use super::explain::{savings_percent, whole_savings_percent};
use super::ranker::{conflicts_with_restrictions, sort_by_cost};
use super::RecommendResult;

/// Shown when a record lists no side effects.
pub const SIDE_EFFECTS_UNAVAILABLE: &str = "Information not available";

/// Comma-split, trim, and re-join side-effect text.
pub fn format_side_effects(side_effects: &str) -> String {
    let effects: Vec<&str> = side_effects
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect();
    if effects.is_empty() {
        SIDE_EFFECTS_UNAVAILABLE.to_string()
    } else {
        effects.join(", ")
    }
}

/// Finds generic, same-class, and holistic alternatives.
pub struct AlternativeFinder<'a, C: MedicationCatalog> {
    catalog: &'a C,
    tables: &'a ReferenceTables,
    config: &'a EngineConfig,
}

impl<'a, C: MedicationCatalog> AlternativeFinder<'a, C> {
    pub fn new(catalog: &'a C, tables: &'a ReferenceTables, config: &'a EngineConfig) -> Self {
        Self {
            catalog,
            tables,
            config,
        }
    }

    /// All candidates for `medication`, unfiltered and unranked.
    pub fn find(
        &self,
        medication: &MedicationRecord,
        constraint: &Constraint,
    ) -> RecommendResult<Vec<Recommendation>> {
        if medication.drug_class.trim().is_empty() {
            debug!(medication = %medication.name, "no drug class; skipping alternatives");
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();

        if let Some(generic) = self.generic_alternative(medication)? {
            candidates.push(generic);
        }

        let same_class = self.same_class_alternatives(medication)?;
        debug!(medication = %medication.name, count = same_class.len(), "same-class alternatives");
        candidates.extend(same_class);

        if constraint.include_holistic {
            let holistic = self.holistic_alternatives(medication);
            debug!(medication = %medication.name, count = holistic.len(), "alternative treatments");
            candidates.extend(holistic);
        }

        Ok(candidates)
    }

    /// The generic counterpart of a brand, when it costs no more than the brand.
    pub fn generic_alternative(
        &self,
        medication: &MedicationRecord,
    ) -> RecommendResult<Option<Recommendation>> {
        if !medication.is_brand {
            return Ok(None);
        }
        let Some(generic) = self.catalog.generic_counterpart(medication)? else {
            return Ok(None);
        };
        if generic.avg_cost > medication.avg_cost {
            debug!(
                medication = %medication.name,
                generic = %generic.name,
                "generic costs more than brand; skipping"
            );
            return Ok(None);
        }

        let percent = whole_savings_percent(medication.avg_cost, generic.avg_cost);
        let explanation = format!(
            "This is a bioequivalent generic medication containing the same active ingredient as {}. \
             It works the same way but costs {}% less.",
            medication.name, percent
        );
        Ok(Some(self.prescription_recommendation(
            medication,
            &generic,
            RecommendationCategory::GenericAvailable,
            explanation,
        )))
    }

    /// Up to the configured number of strictly cheaper class-mates, cheapest first.
    pub fn same_class_alternatives(
        &self,
        medication: &MedicationRecord,
    ) -> RecommendResult<Vec<Recommendation>> {
        let mut cheaper: Vec<MedicationRecord> = self
            .catalog
            .lookup_by_class(&medication.drug_class)?
            .into_iter()
            .filter(|m| !m.is_named(&medication.name) && m.avg_cost < medication.avg_cost)
            .collect();
        cheaper.sort_by(|a, b| a.avg_cost.total_cmp(&b.avg_cost));
        cheaper.truncate(self.config.max_same_class_alternatives);

        Ok(cheaper
            .iter()
            .map(|alt| {
                let percent = whole_savings_percent(medication.avg_cost, alt.avg_cost);
                let explanation = format!(
                    "This medication is in the same drug class ({}) as {} and may provide similar \
                     therapeutic benefits. It costs {}% less than your prescribed medication.",
                    medication.drug_class, medication.name, percent
                );
                self.prescription_recommendation(
                    medication,
                    alt,
                    RecommendationCategory::CheaperSameClass,
                    explanation,
                )
            })
            .collect())
    }

    /// Supplement and lifestyle entries for the medication's class.
    pub fn holistic_alternatives(&self, medication: &MedicationRecord) -> Vec<Recommendation> {
        self.tables
            .alternative_treatments(&medication.drug_class)
            .iter()
            .map(|treatment| treatment_recommendation(medication, treatment))
            .collect()
    }

    /// The record's curated alternatives that fit the budget and restrictions, cheapest first.
    ///
    /// Each listed name resolves by exact name, then by exact generic name;
    /// names missing from the catalog are skipped. Unlike the other sources
    /// these are not required to be cheaper than the original.
    pub fn curated_alternatives(
        &self,
        medication: &MedicationRecord,
        constraint: &Constraint,
    ) -> RecommendResult<Vec<Recommendation>> {
        let budget = constraint.effective_budget();
        let terms = constraint.allergy_terms();
        let mut curated = Vec::new();

        for listed in medication.alternatives.iter().map(|n| n.trim()) {
            if listed.is_empty() {
                continue;
            }
            let Some(alt) = self.catalog.lookup_exact(listed)? else {
                debug!(medication = %medication.name, alternative = %listed, "curated alternative not in catalog");
                continue;
            };
            if budget.is_some_and(|b| alt.avg_cost > b) {
                continue;
            }
            if conflicts_with_restrictions(&terms, alt.restrictions.as_deref()) {
                debug!(alternative = %alt.name, "curated alternative conflicts with restrictions");
                continue;
            }

            let explanation = format!(
                "{} is a listed alternative to {} in the {} class.",
                alt.name, medication.name, alt.drug_class
            );
            curated.push(self.prescription_recommendation(
                medication,
                &alt,
                RecommendationCategory::CuratedAlternative,
                explanation,
            ));
        }

        sort_by_cost(&mut curated);
        Ok(curated)
    }

    fn prescription_recommendation(
        &self,
        original: &MedicationRecord,
        alt: &MedicationRecord,
        category: RecommendationCategory,
        explanation: String,
    ) -> Recommendation {
        Recommendation {
            name: alt.name.clone(),
            generic_name: alt.generic_name.clone(),
            drug_class: alt.drug_class.clone(),
            avg_cost: alt.avg_cost,
            category,
            savings: original.avg_cost - alt.avg_cost,
            savings_percent: savings_percent(original.avg_cost, alt.avg_cost),
            explanation,
            side_effects: format_side_effects(&alt.side_effects),
            source: alt.source.clone(),
            availability: Some(self.config.default_availability.clone()),
            insurance: alt.insurance,
            risk: Some(self.tables.risk_for(&alt.name).to_string()),
            contraindications: self.tables.do_not_combine(&alt.name).to_vec(),
            treatment_type: None,
        }
    }
}

fn treatment_recommendation(
    original: &MedicationRecord,
    treatment: &AlternativeTreatment,
) -> Recommendation {
    Recommendation {
        name: treatment.name.clone(),
        generic_name: None,
        drug_class: original.drug_class.clone(),
        avg_cost: treatment.avg_cost,
        category: RecommendationCategory::AlternativeTreatment,
        savings: original.avg_cost - treatment.avg_cost,
        savings_percent: savings_percent(original.avg_cost, treatment.avg_cost),
        explanation: treatment.explanation.clone(),
        // Left empty so allergy terms only match the entry's own text
        side_effects: String::new(),
        source: treatment.source.clone(),
        availability: None,
        insurance: None,
        risk: Some(treatment.warning.clone()),
        contraindications: Vec::new(),
        treatment_type: Some(treatment.treatment_type.clone()),
    }
}
