//! Recommendation engine.
//!
//! Pipeline: Catalog Lookup → Alternative Finder → Filter & Rank → Explanation

mod explain;
mod finder;
mod ranker;

pub use explain::*;
pub use finder::*;
pub use ranker::*;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::MedicationCatalog;
use crate::config::EngineConfig;
use crate::models::{Constraint, MedicationRecord, Recommendation};
use crate::reference::ReferenceTables;

/// Recommendation errors.
///
/// Unknown medications are not errors; only storage failures surface here.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;

/// Coordinates lookup, candidate search, filtering, and ranking.
pub struct Recommender<'a, C: MedicationCatalog> {
    catalog: &'a C,
    tables: &'a ReferenceTables,
    config: &'a EngineConfig,
}

impl<'a, C: MedicationCatalog> Recommender<'a, C> {
    pub fn new(catalog: &'a C, tables: &'a ReferenceTables, config: &'a EngineConfig) -> Self {
        Self {
            catalog,
            tables,
            config,
        }
    }

    /// Ranked, filtered alternatives for the constrained medication.
    ///
    /// Returns an empty list when the medication is not in the catalog.
    pub fn generate(&self, constraint: &Constraint) -> RecommendResult<Vec<Recommendation>> {
        let Some(medication) = self.catalog.lookup_by_name(&constraint.medication)? else {
            debug!(medication = %constraint.medication, "no recommendations for unknown medication");
            return Ok(Vec::new());
        };

        debug!(
            medication = %medication.name,
            insurance = %constraint.insurance,
            pharmacy = %constraint.pharmacy,
            holistic = constraint.include_holistic,
            "generating recommendations"
        );

        let candidates = self.find_alternatives(&medication, constraint)?;
        let ranked = filter_and_rank(candidates, constraint, self.config.max_recommendations);

        info!(medication = %medication.name, count = ranked.len(), "generated recommendations");
        Ok(ranked)
    }

    /// Unfiltered candidates for an already-resolved medication.
    pub fn find_alternatives(
        &self,
        medication: &MedicationRecord,
        constraint: &Constraint,
    ) -> RecommendResult<Vec<Recommendation>> {
        AlternativeFinder::new(self.catalog, self.tables, self.config).find(medication, constraint)
    }

    /// Curated alternatives listed on the constrained medication's record.
    ///
    /// Applies the budget and a two-way restriction match instead of the
    /// allergy filter. Returns an empty list when the medication is not in
    /// the catalog.
    pub fn curated(&self, constraint: &Constraint) -> RecommendResult<Vec<Recommendation>> {
        let Some(medication) = self.catalog.lookup_by_name(&constraint.medication)? else {
            debug!(medication = %constraint.medication, "no curated alternatives for unknown medication");
            return Ok(Vec::new());
        };
        let curated = AlternativeFinder::new(self.catalog, self.tables, self.config)
            .curated_alternatives(&medication, constraint)?;
        info!(medication = %medication.name, count = curated.len(), "curated alternatives");
        Ok(curated)
    }

    pub fn explain(&self, original: &MedicationRecord, alternative: &Recommendation) -> String {
        explain_recommendation(original, alternative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::db::Database;
    use crate::models::RecommendationCategory;

    fn names(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_lipitor_combined_ranking() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        let recs = recommender.generate(&Constraint::new("Lipitor")).unwrap();
        assert_eq!(
            names(&recs),
            vec!["Lovastatin", "Atorvastatin", "Atorvastatin", "Simvastatin"]
        );
        assert_eq!(recs[1].category, RecommendationCategory::GenericAvailable);
        assert_eq!(recs[2].category, RecommendationCategory::CheaperSameClass);
    }

    #[test]
    fn test_unknown_medication_is_empty() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        assert!(recommender.generate(&Constraint::new("Xyzzy123")).unwrap().is_empty());
        assert!(recommender.generate(&Constraint::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_holistic_truncated_to_limit() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        let constraint = Constraint::new("Lipitor").with_holistic(true);
        let recs = recommender.generate(&constraint).unwrap();
        assert_eq!(recs.len(), 5);
        // Red Yeast Rice (20) ties with the 20.00 statins and keeps its later position
        assert_eq!(
            names(&recs),
            vec!["Lovastatin", "Atorvastatin", "Atorvastatin", "Simvastatin", "Red Yeast Rice"]
        );
    }

    #[test]
    fn test_sqlite_and_memory_agree() {
        let db = Database::open_in_memory().unwrap();
        db.seed_sample_catalog().unwrap();
        let memory = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();

        for name in ["Lipitor", "Zoloft", "nexium", "Advil", "Keflex", "Glucophage"] {
            let constraint = Constraint::new(name).with_holistic(true);
            let from_db = Recommender::new(&db, &tables, &config).generate(&constraint).unwrap();
            let from_memory = Recommender::new(&memory, &tables, &config)
                .generate(&constraint)
                .unwrap();
            assert_eq!(from_db, from_memory, "{}", name);
        }
    }

    #[test]
    fn test_explain_uses_alternative_tier() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        let lipitor = catalog.lookup_by_name("Lipitor").unwrap().unwrap();
        let recs = recommender.generate(&Constraint::new("Lipitor")).unwrap();
        let generic = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::GenericAvailable)
            .unwrap();

        let text = recommender.explain(&lipitor, generic);
        // Atorvastatin is covered by most plans: 40% and 70% of $20
        assert!(text.contains("**$8–$14**"));
    }

    #[test]
    fn test_curated_lipitor() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        let recs = recommender.curated(&Constraint::new("Lipitor")).unwrap();
        assert_eq!(names(&recs), vec!["Atorvastatin", "Simvastatin", "Rosuvastatin"]);
        assert!(recs
            .iter()
            .all(|r| r.category == RecommendationCategory::CuratedAlternative));
        assert_eq!(
            recs[0].explanation,
            "Atorvastatin is a listed alternative to Lipitor in the Statin class."
        );
        assert_eq!(recs[0].savings, 230.0);
        assert_eq!(
            recs[0].risk.as_deref(),
            Some("May cause muscle pain or liver enzyme elevations.")
        );

        let within_budget = recommender
            .curated(&Constraint::new("Lipitor").with_budget(25.0))
            .unwrap();
        assert_eq!(names(&within_budget), vec!["Atorvastatin", "Simvastatin"]);
    }

    #[test]
    fn test_curated_restrictions_match_either_way() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        let advil = |restrictions: &str| {
            recommender
                .curated(&Constraint::new("Advil").with_allergies(restrictions))
                .unwrap()
        };
        assert_eq!(names(&advil("")), vec!["Ibuprofen", "Acetaminophen"]);
        assert_eq!(names(&advil("Asthma")), vec!["Acetaminophen"]);
        assert_eq!(names(&advil("fatty liver disease")), vec!["Ibuprofen"]);
        assert!(advil("asthma, liver").is_empty());
    }

    #[test]
    fn test_curated_empty_cases() {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let recommender = Recommender::new(&catalog, &tables, &config);

        assert!(recommender.curated(&Constraint::new("Glucophage")).unwrap().is_empty());
        assert!(recommender.curated(&Constraint::new("Xyzzy123")).unwrap().is_empty());
    }
}
