//! Medication table operations.

use rusqlite::{params, OptionalExtension, Row};
use strsim::{jaro_winkler, normalized_levenshtein};
use tracing::debug;

use super::{Database, DbError, DbResult};
use crate::models::{InsuranceTier, MedicationRecord};

/// Minimum similarity for a name to be offered as a spelling suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.70;

const MEDICATION_COLUMNS: &str = "name, generic_name, drug_class, description, avg_cost, is_brand, \
     counterpart, side_effects, interactions, restrictions, source, insurance, alternatives, \
     supplement_suggestions";

impl Database {
    /// Insert or update a medication, keyed by case-insensitive name.
    pub fn upsert_medication(&self, med: &MedicationRecord) -> DbResult<()> {
        if med.name.trim().is_empty() {
            return Err(DbError::Constraint("Medication name must not be blank".into()));
        }
        if med.avg_cost.is_nan() || med.avg_cost < 0.0 {
            return Err(DbError::Constraint(format!(
                "Average cost must be non-negative for {}",
                med.name
            )));
        }

        let alternatives_json = serde_json::to_string(&med.alternatives)?;
        let supplements_json = serde_json::to_string(&med.supplement_suggestions)?;

        self.conn.execute(
            r#"
            INSERT INTO medications (
                name, generic_name, drug_class, description, avg_cost, is_brand,
                counterpart, side_effects, interactions, restrictions, source,
                insurance, alternatives, supplement_suggestions, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, datetime('now'))
            ON CONFLICT(name) DO UPDATE SET
                name = excluded.name,
                generic_name = excluded.generic_name,
                drug_class = excluded.drug_class,
                description = excluded.description,
                avg_cost = excluded.avg_cost,
                is_brand = excluded.is_brand,
                counterpart = excluded.counterpart,
                side_effects = excluded.side_effects,
                interactions = excluded.interactions,
                restrictions = excluded.restrictions,
                source = excluded.source,
                insurance = excluded.insurance,
                alternatives = excluded.alternatives,
                supplement_suggestions = excluded.supplement_suggestions,
                updated_at = datetime('now')
            "#,
            params![
                med.name,
                med.generic_name,
                med.drug_class,
                med.description,
                med.avg_cost,
                med.is_brand,
                med.counterpart,
                med.side_effects,
                med.interactions,
                med.restrictions,
                med.source,
                med.insurance.map(|t| t.as_str()),
                alternatives_json,
                supplements_json,
            ],
        )?;
        Ok(())
    }

    /// Get a medication by exact name (case-insensitive).
    pub fn get_medication(&self, name: &str) -> DbResult<Option<MedicationRecord>> {
        let sql = format!(
            "SELECT {} FROM medications WHERE name = ?1 COLLATE NOCASE ORDER BY id LIMIT 1",
            MEDICATION_COLUMNS
        );
        let row = self
            .conn
            .query_row(&sql, [name], MedicationRow::from_row)
            .optional()?;
        row.map(|r| r.try_into()).transpose()
    }

    /// First medication with the given generic name (case-insensitive), in insertion order.
    pub fn get_medication_by_generic_name(&self, generic_name: &str) -> DbResult<Option<MedicationRecord>> {
        let sql = format!(
            "SELECT {} FROM medications WHERE generic_name = ?1 COLLATE NOCASE ORDER BY id LIMIT 1",
            MEDICATION_COLUMNS
        );
        let row = self
            .conn
            .query_row(&sql, [generic_name], MedicationRow::from_row)
            .optional()?;
        row.map(|r| r.try_into()).transpose()
    }

    /// First medication whose name contains `fragment` (case-insensitive), in insertion order.
    pub fn find_medication_containing(&self, fragment: &str) -> DbResult<Option<MedicationRecord>> {
        let sql = format!(
            "SELECT {} FROM medications WHERE instr(lower(name), lower(?1)) > 0 ORDER BY id LIMIT 1",
            MEDICATION_COLUMNS
        );
        let row = self
            .conn
            .query_row(&sql, [fragment], MedicationRow::from_row)
            .optional()?;
        row.map(|r| r.try_into()).transpose()
    }

    /// All medications in a drug class (case-insensitive exact), in insertion order.
    pub fn list_medications_in_class(&self, drug_class: &str) -> DbResult<Vec<MedicationRecord>> {
        let sql = format!(
            "SELECT {} FROM medications WHERE drug_class = ?1 COLLATE NOCASE ORDER BY id",
            MEDICATION_COLUMNS
        );
        self.query_medications(&sql, params![drug_class])
    }

    /// Non-brand medications naming `brand` as their counterpart, in insertion order.
    pub fn list_generics_for_brand(&self, brand: &str) -> DbResult<Vec<MedicationRecord>> {
        let sql = format!(
            "SELECT {} FROM medications WHERE is_brand = 0 AND counterpart = ?1 COLLATE NOCASE ORDER BY id",
            MEDICATION_COLUMNS
        );
        self.query_medications(&sql, params![brand])
    }

    /// All medications in insertion order.
    pub fn list_medications(&self) -> DbResult<Vec<MedicationRecord>> {
        let sql = format!("SELECT {} FROM medications ORDER BY id", MEDICATION_COLUMNS);
        self.query_medications(&sql, [])
    }

    /// Number of medications in the catalog.
    pub fn count_medications(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM medications", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete a medication by name.
    pub fn delete_medication(&self, name: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medications WHERE name = ?1 COLLATE NOCASE", [name])?;
        Ok(rows_affected > 0)
    }

    /// Search medications by name, generic name or class using FTS5 (BM25 ranking).
    pub fn search_medications(&self, query: &str, limit: usize) -> DbResult<Vec<MedicationRecord>> {
        let escaped_query = escape_fts_query(query);
        if escaped_query.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"
            SELECT {}, bm25(medications_fts) AS rank
            FROM medications m
            JOIN medications_fts fts ON m.id = fts.rowid
            WHERE medications_fts MATCH ?1
            ORDER BY rank, m.id
            LIMIT ?2
            "#,
            prefixed_columns("m")
        );
        self.query_medications(&sql, params![escaped_query, limit as i64])
    }

    /// Suggest catalog names close to a possibly misspelled query, best first.
    pub fn suggest_medication_names(&self, query: &str, limit: usize) -> DbResult<Vec<String>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare("SELECT name FROM medications ORDER BY id")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut scored: Vec<(String, f64)> = names
            .into_iter()
            .map(|name| {
                let score = fuzzy_match(&query_lower, &name.to_lowercase());
                (name, score)
            })
            .filter(|(_, score)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(query = %query, matches = scored.len(), "medication name suggestions");
        Ok(scored.into_iter().take(limit).map(|(name, _)| name).collect())
    }

    fn query_medications<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> DbResult<Vec<MedicationRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, MedicationRow::from_row)?;

        let mut meds = Vec::new();
        for row in rows {
            meds.push(row?.try_into()?);
        }
        Ok(meds)
    }
}

fn prefixed_columns(alias: &str) -> String {
    MEDICATION_COLUMNS
        .split(',')
        .map(|c| format!("{}.{}", alias, c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Intermediate row struct for database mapping.
struct MedicationRow {
    name: String,
    generic_name: Option<String>,
    drug_class: String,
    description: String,
    avg_cost: f64,
    is_brand: bool,
    counterpart: Option<String>,
    side_effects: String,
    interactions: String,
    restrictions: Option<String>,
    source: String,
    insurance: Option<String>,
    alternatives: String,
    supplement_suggestions: String,
}

impl MedicationRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            generic_name: row.get(1)?,
            drug_class: row.get(2)?,
            description: row.get(3)?,
            avg_cost: row.get(4)?,
            is_brand: row.get(5)?,
            counterpart: row.get(6)?,
            side_effects: row.get(7)?,
            interactions: row.get(8)?,
            restrictions: row.get(9)?,
            source: row.get(10)?,
            insurance: row.get(11)?,
            alternatives: row.get(12)?,
            supplement_suggestions: row.get(13)?,
        })
    }
}

impl TryFrom<MedicationRow> for MedicationRecord {
    type Error = DbError;

    fn try_from(row: MedicationRow) -> Result<Self, Self::Error> {
        let insurance = row
            .insurance
            .map(|s| {
                InsuranceTier::parse(&s)
                    .ok_or_else(|| DbError::Constraint(format!("Unknown insurance tier: {}", s)))
            })
            .transpose()?;

        Ok(MedicationRecord {
            name: row.name,
            generic_name: row.generic_name,
            drug_class: row.drug_class,
            description: row.description,
            avg_cost: row.avg_cost,
            is_brand: row.is_brand,
            counterpart: row.counterpart,
            side_effects: row.side_effects,
            interactions: row.interactions,
            restrictions: row.restrictions,
            source: row.source,
            insurance,
            alternatives: serde_json::from_str(&row.alternatives)?,
            supplement_suggestions: serde_json::from_str(&row.supplement_suggestions)?,
        })
    }
}

/// Escape special FTS5 characters and prepare query for prefix matching.
fn escape_fts_query(query: &str) -> String {
    let cleaned: String = query
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(|word| format!("{}*", word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favors shared prefixes, Levenshtein overall edit distance
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}
