//! Recommendation report export.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Constraint, MedicationRecord, Recommendation};
use crate::recommend::explain_recommendation;

/// Report errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// A recommendation with its explanation paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    /// Rendered explanation against the original medication
    pub detail: String,
}

/// Snapshot of one search, ready for JSON or CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Report ID (UUID v4)
    pub report_id: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
    /// Prescribed medication
    pub medication: String,
    pub drug_class: String,
    /// Monthly cost of the prescribed medication
    pub original_cost: f64,
    pub constraint: Constraint,
    pub entries: Vec<ReportEntry>,
    /// SHA-256 hex digest of the serialized recommendation list
    pub content_digest: String,
}

impl RecommendationReport {
    pub fn new(
        original: &MedicationRecord,
        constraint: &Constraint,
        recommendations: Vec<Recommendation>,
    ) -> ReportResult<Self> {
        let content_digest = digest_recommendations(&recommendations)?;
        let entries = recommendations
            .into_iter()
            .map(|recommendation| ReportEntry {
                detail: explain_recommendation(original, &recommendation),
                recommendation,
            })
            .collect();

        Ok(Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            medication: original.name.clone(),
            drug_class: original.drug_class.clone(),
            original_cost: original.avg_cost,
            constraint: constraint.clone(),
            entries,
            content_digest,
        })
    }

    /// Check the digest against the current entries.
    pub fn verify_digest(&self) -> ReportResult<bool> {
        let recommendations: Vec<Recommendation> = self
            .entries
            .iter()
            .map(|e| e.recommendation.clone())
            .collect();
        Ok(digest_recommendations(&recommendations)? == self.content_digest)
    }

    /// Export to JSON.
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export to CSV format, one row per recommendation.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("report_id,medication,name,generic_name,category,avg_cost,savings,savings_percent,insurance,availability,risk,contraindications\n");

        for entry in &self.entries {
            let rec = &entry.recommendation;
            csv.push_str(&format!(
                "{},{},{},{},{},{:.2},{:.2},{},{},{},{},{}\n",
                escape_csv(&self.report_id),
                escape_csv(&self.medication),
                escape_csv(&rec.name),
                escape_csv(rec.generic_name.as_deref().unwrap_or("")),
                rec.category.as_str(),
                rec.avg_cost,
                rec.savings,
                rec.rounded_savings_percent(),
                rec.insurance.map(|t| t.as_str()).unwrap_or(""),
                escape_csv(rec.availability.as_deref().unwrap_or("")),
                escape_csv(rec.risk.as_deref().unwrap_or("")),
                escape_csv(&rec.contraindications.join("; ")),
            ));
        }

        csv
    }
}

fn digest_recommendations(recommendations: &[Recommendation]) -> ReportResult<String> {
    let bytes = serde_json::to_vec(recommendations)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Quote a CSV field when it contains a comma, quote, or newline.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MedicationCatalog, MemoryCatalog};
    use crate::config::EngineConfig;
    use crate::recommend::Recommender;
    use crate::reference::ReferenceTables;

    fn lipitor_report() -> RecommendationReport {
        let catalog = MemoryCatalog::with_sample_data();
        let tables = ReferenceTables::new();
        let config = EngineConfig::default();
        let constraint = Constraint::new("Lipitor");
        let recs = Recommender::new(&catalog, &tables, &config)
            .generate(&constraint)
            .unwrap();
        let lipitor = catalog.lookup_by_name("Lipitor").unwrap().unwrap();
        RecommendationReport::new(&lipitor, &constraint, recs).unwrap()
    }

    #[test]
    fn test_report_metadata() {
        let report = lipitor_report();
        assert!(Uuid::parse_str(&report.report_id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
        assert_eq!(report.medication, "Lipitor");
        assert_eq!(report.entries.len(), 4);
        assert_eq!(report.content_digest.len(), 64);
        assert!(report.entries[0].detail.starts_with("I recommend **Lovastatin"));
    }

    #[test]
    fn test_digest_detects_tampering() {
        let mut report = lipitor_report();
        assert!(report.verify_digest().unwrap());

        report.entries[0].recommendation.avg_cost = 1.0;
        assert!(!report.verify_digest().unwrap());
    }

    #[test]
    fn test_json_export() {
        let report = lipitor_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"content_digest\""));
        assert!(json.contains("\"Atorvastatin\""));

        let parsed: RecommendationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries.len(), report.entries.len());
        assert_eq!(parsed.content_digest, report.content_digest);
    }

    #[test]
    fn test_csv_export() {
        let report = lipitor_report();
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5); // header + 4 rows
        assert!(lines[0].starts_with("report_id,medication,name"));
        assert!(lines[2].contains("Atorvastatin,Atorvastatin,generic_available,20.00,230.00,92,Most"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
