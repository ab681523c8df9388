//! MediMatch Core Library
//!
//! Finds cheaper or safer alternatives to a prescribed medication under the
//! patient's budget, insurance, and allergy constraints, and explains them.
//!
//! # Architecture
//!
//! ```text
//! Medication name + constraints
//!             │
//!             ▼
//!      Catalog lookup ──── not found ───▶ empty list
//!             │
//!             ▼
//!   ┌─────────────────────────────────────────────┐
//!   │            Alternative Finder               │
//!   │  generic counterpart │ cheaper class-mates  │
//!   │        supplement / lifestyle options       │
//!   └─────────────────────┬───────────────────────┘
//!                         ▼
//!          Budget filter → Allergy filter
//!                         │
//!                         ▼
//!            Stable sort by cost, top N
//!                         │
//!             ┌───────────┴───────────┐
//!             ▼                       ▼
//!       Explanations            Report export
//! ```
//!
//! Follow-up questions are answered by the `medimatch-assistant` crate,
//! using the current medication and alternative as context.
//!
//! # Modules
//!
//! - [`db`]: SQLite catalog with FTS5 search and sample data
//! - [`catalog`]: Lookup trait with SQLite and in-memory implementations
//! - [`models`]: Domain types (MedicationRecord, Constraint, Recommendation)
//! - [`reference`]: Static risk, contraindication, and alternative-treatment tables
//! - [`recommend`]: Finder, ranker, and explanation generator
//! - [`config`]: Engine configuration from TOML
//! - [`export`]: Recommendation reports (JSON, CSV)

pub mod catalog;
pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod recommend;
pub mod reference;

// Re-export commonly used types
pub use catalog::{MedicationCatalog, MemoryCatalog};
pub use config::EngineConfig;
pub use db::Database;
pub use export::RecommendationReport;
pub use models::{
    Constraint, DrugClassInfo, InsuranceTier, MedicationRecord, Recommendation,
    RecommendationCategory,
};
pub use recommend::Recommender;
pub use reference::ReferenceTables;

use medimatch_assistant::QuestionContext;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MediMatchError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<db::DbError> for MediMatchError {
    fn from(e: db::DbError) -> Self {
        MediMatchError::DatabaseError(e.to_string())
    }
}

impl From<recommend::RecommendError> for MediMatchError {
    fn from(e: recommend::RecommendError) -> Self {
        MediMatchError::DatabaseError(e.to_string())
    }
}

impl From<export::ReportError> for MediMatchError {
    fn from(e: export::ReportError) -> Self {
        MediMatchError::SerializationError(e.to_string())
    }
}

impl From<config::ConfigError> for MediMatchError {
    fn from(e: config::ConfigError) -> Self {
        MediMatchError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for MediMatchError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MediMatchError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a catalog database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<MediMatchCore>, MediMatchError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(MediMatchCore::new(db, EngineConfig::default())))
}

/// Open a catalog database with engine settings from a TOML document.
#[uniffi::export]
pub fn open_database_with_config(
    path: String,
    config_toml: String,
) -> Result<Arc<MediMatchCore>, MediMatchError> {
    let config = EngineConfig::from_toml_str(&config_toml)?;
    let db = Database::open(&path)?;
    Ok(Arc::new(MediMatchCore::new(db, config)))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<MediMatchCore>, MediMatchError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(MediMatchCore::new(db, EngineConfig::default())))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe engine wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MediMatchCore {
    db: Arc<Mutex<Database>>,
    tables: ReferenceTables,
    config: EngineConfig,
}

impl MediMatchCore {
    fn new(db: Database, config: EngineConfig) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            tables: ReferenceTables::new(),
            config,
        }
    }

    fn report(&self, request: FfiSearchRequest) -> Result<RecommendationReport, MediMatchError> {
        let db = self.db.lock()?;
        let constraint = Constraint::from(request);
        let original = db
            .lookup_by_name(&constraint.medication)?
            .ok_or_else(|| MediMatchError::NotFound(constraint.medication.clone()))?;
        let recs = Recommender::new(&*db, &self.tables, &self.config).generate(&constraint)?;
        Ok(RecommendationReport::new(&original, &constraint, recs)?)
    }
}

#[uniffi::export]
impl MediMatchCore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Load the sample catalog. Returns the number of medications written.
    pub fn seed_sample_catalog(&self) -> Result<u32, MediMatchError> {
        let db = self.db.lock()?;
        Ok(db.seed_sample_catalog()? as u32)
    }

    /// Add or update a medication.
    pub fn upsert_medication(&self, medication: FfiMedication) -> Result<(), MediMatchError> {
        let db = self.db.lock()?;
        let record = MedicationRecord::try_from(medication)?;
        db.upsert_medication(&record)?;
        Ok(())
    }

    /// Get a medication by exact name (case-insensitive).
    pub fn get_medication(&self, name: String) -> Result<Option<FfiMedication>, MediMatchError> {
        let db = self.db.lock()?;
        let med = db.get_medication(&name)?;
        Ok(med.map(|m| m.into()))
    }

    /// Full-text search over name, generic name, and class.
    pub fn search_medications(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiMedication>, MediMatchError> {
        let db = self.db.lock()?;
        let meds = db.search_medications(&query, limit as usize)?;
        Ok(meds.into_iter().map(|m| m.into()).collect())
    }

    /// Catalog names close to a possibly misspelled query.
    pub fn suggest_medication_names(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<String>, MediMatchError> {
        let db = self.db.lock()?;
        Ok(db.suggest_medication_names(&query, limit as usize)?)
    }

    /// Get drug class information by name (exact, then substring).
    pub fn get_drug_class(&self, class_name: String) -> Result<Option<FfiDrugClass>, MediMatchError> {
        let db = self.db.lock()?;
        let info = db.get_drug_class(&class_name)?;
        Ok(info.map(|i| i.into()))
    }

    // =========================================================================
    // Recommendation Operations
    // =========================================================================

    /// Ranked alternatives. Unknown medications yield an empty list.
    pub fn generate_recommendations(
        &self,
        request: FfiSearchRequest,
    ) -> Result<Vec<FfiRecommendation>, MediMatchError> {
        let db = self.db.lock()?;
        let constraint = Constraint::from(request);
        let recs = Recommender::new(&*db, &self.tables, &self.config).generate(&constraint)?;
        Ok(recs.into_iter().map(|r| r.into()).collect())
    }

    /// Alternatives listed on the medication's own record, filtered by
    /// budget and restrictions, cheapest first.
    pub fn curated_alternatives(
        &self,
        request: FfiSearchRequest,
    ) -> Result<Vec<FfiRecommendation>, MediMatchError> {
        let db = self.db.lock()?;
        let constraint = Constraint::from(request);
        let recs = Recommender::new(&*db, &self.tables, &self.config).curated(&constraint)?;
        Ok(recs.into_iter().map(|r| r.into()).collect())
    }

    /// Explanation paragraph for choosing `alternative` over `original`.
    pub fn explain_recommendation(
        &self,
        original: FfiMedication,
        alternative: FfiRecommendation,
    ) -> Result<String, MediMatchError> {
        let original = MedicationRecord::try_from(original)?;
        let alternative = Recommendation::try_from(alternative)?;
        Ok(recommend::explain_recommendation(&original, &alternative))
    }

    /// Answer a follow-up question.
    ///
    /// The medication is looked up by name; an unknown name is treated as
    /// no context rather than an error.
    pub fn answer_question(
        &self,
        question: String,
        medication_name: Option<String>,
        alternative: Option<FfiRecommendation>,
    ) -> Result<String, MediMatchError> {
        let medication = match medication_name {
            Some(name) => {
                let db = self.db.lock()?;
                db.lookup_by_name(&name)?
            }
            None => None,
        };
        let alternative = alternative.map(Recommendation::try_from).transpose()?;

        let med_context = medication
            .as_ref()
            .map(|m| medication_context(m, &self.tables));
        let alt_context = alternative
            .as_ref()
            .map(|r| recommendation_context(r, &self.tables));

        Ok(medimatch_assistant::answer_question(
            &question,
            med_context.as_ref(),
            alt_context.as_ref(),
        ))
    }

    /// Questions a user interface can offer as prompts.
    pub fn suggested_questions(&self) -> Vec<String> {
        medimatch_assistant::SUGGESTED_QUESTIONS
            .iter()
            .map(|q| q.to_string())
            .collect()
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export a recommendation report as JSON.
    pub fn export_report_json(&self, request: FfiSearchRequest) -> Result<String, MediMatchError> {
        Ok(self.report(request)?.to_json()?)
    }

    /// Export a recommendation report as CSV.
    pub fn export_report_csv(&self, request: FfiSearchRequest) -> Result<String, MediMatchError> {
        Ok(self.report(request)?.to_csv())
    }
}

// =========================================================================
// Assistant Context
// =========================================================================

/// Question context for a catalog medication.
pub fn medication_context(med: &MedicationRecord, tables: &ReferenceTables) -> QuestionContext {
    let mut context = QuestionContext::new(&med.name, &med.drug_class, med.avg_cost)
        .with_insurance_description(tables.insurance_description(med.insurance))
        .with_supplement_suggestions(med.supplement_suggestions.clone());
    if let Some(generic) = &med.generic_name {
        context = context.with_generic_name(generic);
    }
    context
}

/// Question context for a recommended alternative.
pub fn recommendation_context(rec: &Recommendation, tables: &ReferenceTables) -> QuestionContext {
    let mut context = QuestionContext::new(&rec.name, &rec.drug_class, rec.avg_cost);
    if let Some(generic) = &rec.generic_name {
        context = context.with_generic_name(generic);
    }
    if rec.insurance.is_some() {
        context = context.with_insurance_description(tables.insurance_description(rec.insurance));
    }
    context
}

// =========================================================================
// FFI Types
// =========================================================================

fn parse_tier(label: Option<String>) -> Result<Option<InsuranceTier>, MediMatchError> {
    label
        .map(|l| {
            InsuranceTier::parse(&l)
                .ok_or_else(|| MediMatchError::InvalidInput(format!("unknown insurance tier: {}", l)))
        })
        .transpose()
}

/// FFI-safe medication record. The insurance tier crosses as its label.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub name: String,
    pub generic_name: Option<String>,
    pub drug_class: String,
    pub description: String,
    pub avg_cost: f64,
    pub is_brand: bool,
    pub counterpart: Option<String>,
    pub side_effects: String,
    pub interactions: String,
    pub restrictions: Option<String>,
    pub source: String,
    pub insurance: Option<String>,
    pub alternatives: Vec<String>,
    pub supplement_suggestions: Vec<String>,
}

impl From<MedicationRecord> for FfiMedication {
    fn from(med: MedicationRecord) -> Self {
        Self {
            name: med.name,
            generic_name: med.generic_name,
            drug_class: med.drug_class,
            description: med.description,
            avg_cost: med.avg_cost,
            is_brand: med.is_brand,
            counterpart: med.counterpart,
            side_effects: med.side_effects,
            interactions: med.interactions,
            restrictions: med.restrictions,
            source: med.source,
            insurance: med.insurance.map(|t| t.as_str().to_string()),
            alternatives: med.alternatives,
            supplement_suggestions: med.supplement_suggestions,
        }
    }
}

impl TryFrom<FfiMedication> for MedicationRecord {
    type Error = MediMatchError;

    fn try_from(med: FfiMedication) -> Result<Self, Self::Error> {
        Ok(MedicationRecord {
            name: med.name,
            generic_name: med.generic_name,
            drug_class: med.drug_class,
            description: med.description,
            avg_cost: med.avg_cost,
            is_brand: med.is_brand,
            counterpart: med.counterpart,
            side_effects: med.side_effects,
            interactions: med.interactions,
            restrictions: med.restrictions,
            source: med.source,
            insurance: parse_tier(med.insurance)?,
            alternatives: med.alternatives,
            supplement_suggestions: med.supplement_suggestions,
        })
    }
}

/// FFI-safe search request. Missing insurance and pharmacy take their defaults.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSearchRequest {
    pub medication: String,
    pub budget: Option<f64>,
    pub insurance: Option<String>,
    pub allergies: Option<String>,
    pub pharmacy: Option<String>,
    pub include_holistic: bool,
}

impl From<FfiSearchRequest> for Constraint {
    fn from(req: FfiSearchRequest) -> Self {
        let mut constraint = Constraint::new(req.medication).with_holistic(req.include_holistic);
        if let Some(budget) = req.budget {
            constraint = constraint.with_budget(budget);
        }
        if let Some(insurance) = req.insurance {
            constraint = constraint.with_insurance(insurance);
        }
        if let Some(allergies) = req.allergies {
            constraint = constraint.with_allergies(allergies);
        }
        if let Some(pharmacy) = req.pharmacy {
            constraint = constraint.with_pharmacy(pharmacy);
        }
        constraint
    }
}

/// FFI-safe recommendation. Category and insurance tier cross as strings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecommendation {
    pub name: String,
    pub generic_name: Option<String>,
    pub drug_class: String,
    pub avg_cost: f64,
    /// Machine name, e.g. "generic_available"
    pub category: String,
    /// Display label, e.g. "Generic version available"
    pub category_label: String,
    pub savings: f64,
    pub savings_percent: f64,
    pub explanation: String,
    pub side_effects: String,
    pub source: String,
    pub availability: Option<String>,
    pub insurance: Option<String>,
    pub risk: Option<String>,
    pub contraindications: Vec<String>,
    pub treatment_type: Option<String>,
}

impl From<Recommendation> for FfiRecommendation {
    fn from(rec: Recommendation) -> Self {
        Self {
            name: rec.name,
            generic_name: rec.generic_name,
            drug_class: rec.drug_class,
            avg_cost: rec.avg_cost,
            category: rec.category.as_str().to_string(),
            category_label: rec.category.label().to_string(),
            savings: rec.savings,
            savings_percent: rec.savings_percent,
            explanation: rec.explanation,
            side_effects: rec.side_effects,
            source: rec.source,
            availability: rec.availability,
            insurance: rec.insurance.map(|t| t.as_str().to_string()),
            risk: rec.risk,
            contraindications: rec.contraindications,
            treatment_type: rec.treatment_type,
        }
    }
}

impl TryFrom<FfiRecommendation> for Recommendation {
    type Error = MediMatchError;

    fn try_from(rec: FfiRecommendation) -> Result<Self, Self::Error> {
        let category = RecommendationCategory::parse(&rec.category).ok_or_else(|| {
            MediMatchError::InvalidInput(format!("unknown recommendation category: {}", rec.category))
        })?;
        Ok(Recommendation {
            name: rec.name,
            generic_name: rec.generic_name,
            drug_class: rec.drug_class,
            avg_cost: rec.avg_cost,
            category,
            savings: rec.savings,
            savings_percent: rec.savings_percent,
            explanation: rec.explanation,
            side_effects: rec.side_effects,
            source: rec.source,
            availability: rec.availability,
            insurance: parse_tier(rec.insurance)?,
            risk: rec.risk,
            contraindications: rec.contraindications,
            treatment_type: rec.treatment_type,
        })
    }
}

/// FFI-safe drug class information.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDrugClass {
    pub class_name: String,
    pub full_name: String,
    pub description: String,
    pub common_uses: String,
}

impl From<DrugClassInfo> for FfiDrugClass {
    fn from(info: DrugClassInfo) -> Self {
        Self {
            class_name: info.class_name,
            full_name: info.full_name,
            description: info.description,
            common_uses: info.common_uses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_core() -> Arc<MediMatchCore> {
        let core = open_database_in_memory().unwrap();
        core.seed_sample_catalog().unwrap();
        core
    }

    fn request(medication: &str) -> FfiSearchRequest {
        FfiSearchRequest {
            medication: medication.to_string(),
            budget: None,
            insurance: None,
            allergies: None,
            pharmacy: None,
            include_holistic: false,
        }
    }

    #[test]
    fn test_generate_recommendations_via_ffi() {
        let core = seeded_core();
        let recs = core.generate_recommendations(request("Lipitor")).unwrap();
        let generic = recs.iter().find(|r| r.category == "generic_available").unwrap();
        assert_eq!(generic.name, "Atorvastatin");
        assert_eq!(generic.savings, 230.0);
        assert_eq!(generic.category_label, "Generic version available");
        assert_eq!(generic.insurance.as_deref(), Some("Most"));

        assert!(core.generate_recommendations(request("Xyzzy123")).unwrap().is_empty());
    }

    #[test]
    fn test_curated_alternatives_via_ffi() {
        let core = seeded_core();
        let mut req = request("Nexium");
        req.budget = Some(26.0);
        let recs = core.curated_alternatives(req).unwrap();
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Omeprazole", "Esomeprazole"]);
        assert_eq!(recs[0].category, "curated_alternative");

        // Curated entries convert back for explanations
        let back = Recommendation::try_from(recs[0].clone()).unwrap();
        assert_eq!(back.category, RecommendationCategory::CuratedAlternative);
    }

    #[test]
    fn test_medication_round_trip() {
        let core = seeded_core();
        let mut med = core.get_medication("zoloft".into()).unwrap().unwrap();
        assert_eq!(med.insurance.as_deref(), Some("Some"));

        med.avg_cost = 99.0;
        core.upsert_medication(med).unwrap();
        let updated = core.get_medication("Zoloft".into()).unwrap().unwrap();
        assert_eq!(updated.avg_cost, 99.0);
    }

    #[test]
    fn test_invalid_insurance_rejected() {
        let core = seeded_core();
        let mut med = core.get_medication("Zoloft".into()).unwrap().unwrap();
        med.insurance = Some("Platinum".into());
        assert!(matches!(
            core.upsert_medication(med),
            Err(MediMatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_explain_via_ffi() {
        let core = seeded_core();
        let original = core.get_medication("Lipitor".into()).unwrap().unwrap();
        let recs = core.generate_recommendations(request("Lipitor")).unwrap();
        let text = core
            .explain_recommendation(original, recs[0].clone())
            .unwrap();
        assert!(text.starts_with("I recommend **Lovastatin (Lovastatin)** as an alternative to **Lipitor**."));
    }

    #[test]
    fn test_answer_question_alcohol() {
        let core = seeded_core();
        let answer = core
            .answer_question("Can I drink alcohol with this?".into(), Some("Zoloft".into()), None)
            .unwrap();
        assert!(answer.to_lowercase().contains("alcohol"));
    }

    #[test]
    fn test_answer_question_unknown_medication_is_no_context() {
        let core = seeded_core();
        let with_unknown = core
            .answer_question("What does this medication treat?".into(), Some("Xyzzy123".into()), None)
            .unwrap();
        let without = core
            .answer_question("What does this medication treat?".into(), None, None)
            .unwrap();
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_export_report() {
        let core = seeded_core();
        let json = core.export_report_json(request("Lipitor")).unwrap();
        assert!(json.contains("\"content_digest\""));

        let csv = core.export_report_csv(request("Lipitor")).unwrap();
        assert_eq!(csv.lines().count(), 5);

        assert!(matches!(
            core.export_report_csv(request("Xyzzy123")),
            Err(MediMatchError::NotFound(_))
        ));
    }

    #[test]
    fn test_open_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db").to_string_lossy().to_string();
        let core = open_database_with_config(path, "max_recommendations = 2".into()).unwrap();
        core.seed_sample_catalog().unwrap();
        assert_eq!(core.generate_recommendations(request("Lipitor")).unwrap().len(), 2);

        let bad = open_database_with_config(":memory:".into(), "max_recommendations = 0".into());
        assert!(matches!(bad, Err(MediMatchError::ConfigError(_))));
    }

    #[test]
    fn test_search_and_suggest() {
        let core = seeded_core();
        let found = core.search_medications("statin".into(), 10).unwrap();
        assert!(found.iter().any(|m| m.name == "Lipitor"));

        let suggestions = core.suggest_medication_names("Lipiter".into(), 3).unwrap();
        assert_eq!(suggestions.first().map(String::as_str), Some("Lipitor"));

        let class = core.get_drug_class("ssri".into()).unwrap().unwrap();
        assert_eq!(class.class_name, "SSRI");
    }
}
