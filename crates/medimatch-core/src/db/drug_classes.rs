//! Drug class table operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::DrugClassInfo;

impl Database {
    /// Insert or update a drug class, keyed by case-insensitive class name.
    pub fn upsert_drug_class(&self, info: &DrugClassInfo) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO drug_classes (class_name, full_name, description, common_uses)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(class_name) DO UPDATE SET
                class_name = excluded.class_name,
                full_name = excluded.full_name,
                description = excluded.description,
                common_uses = excluded.common_uses
            "#,
            params![info.class_name, info.full_name, info.description, info.common_uses],
        )?;
        Ok(())
    }

    /// Look up a drug class by exact name, then by substring of the class name.
    pub fn get_drug_class(&self, class_name: &str) -> DbResult<Option<DrugClassInfo>> {
        if class_name.trim().is_empty() {
            return Ok(None);
        }

        let exact = self
            .conn
            .query_row(
                r#"
                SELECT class_name, full_name, description, common_uses
                FROM drug_classes
                WHERE class_name = ?1 COLLATE NOCASE
                "#,
                [class_name],
                |row| {
                    Ok(DrugClassInfo {
                        class_name: row.get(0)?,
                        full_name: row.get(1)?,
                        description: row.get(2)?,
                        common_uses: row.get(3)?,
                    })
                },
            )
            .optional()?;

        if exact.is_some() {
            return Ok(exact);
        }

        Ok(self
            .conn
            .query_row(
                r#"
                SELECT class_name, full_name, description, common_uses
                FROM drug_classes
                WHERE instr(lower(class_name), lower(?1)) > 0
                ORDER BY id
                LIMIT 1
                "#,
                [class_name],
                |row| {
                    Ok(DrugClassInfo {
                        class_name: row.get(0)?,
                        full_name: row.get(1)?,
                        description: row.get(2)?,
                        common_uses: row.get(3)?,
                    })
                },
            )
            .optional()?)
    }

    /// All drug classes in insertion order.
    pub fn list_drug_classes(&self) -> DbResult<Vec<DrugClassInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT class_name, full_name, description, common_uses FROM drug_classes ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DrugClassInfo {
                class_name: row.get(0)?,
                full_name: row.get(1)?,
                description: row.get(2)?,
                common_uses: row.get(3)?,
            })
        })?;

        let mut classes = Vec::new();
        for row in rows {
            classes.push(row?);
        }
        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.upsert_drug_class(&DrugClassInfo::new(
            "DPP-4 Inhibitor",
            "Dipeptidyl Peptidase-4 Inhibitors",
            "Increase insulin production",
            "Type 2 diabetes management",
        ))
        .unwrap();
        db.upsert_drug_class(&DrugClassInfo::new(
            "SSRI",
            "Selective Serotonin Reuptake Inhibitors",
            "Antidepressants",
            "Depression, anxiety",
        ))
        .unwrap();
        db
    }

    #[test]
    fn test_exact_lookup_case_insensitive() {
        let db = setup_db();
        let info = db.get_drug_class("ssri").unwrap().unwrap();
        assert_eq!(info.full_name, "Selective Serotonin Reuptake Inhibitors");
    }

    #[test]
    fn test_substring_fallback() {
        let db = setup_db();
        let info = db.get_drug_class("dpp-4").unwrap().unwrap();
        assert_eq!(info.class_name, "DPP-4 Inhibitor");
        assert!(db.get_drug_class("Statin").unwrap().is_none());
        assert!(db.get_drug_class("  ").unwrap().is_none());
    }

    #[test]
    fn test_upsert_updates() {
        let db = setup_db();
        db.upsert_drug_class(&DrugClassInfo::new("ssri", "SSRIs", "Updated", "Depression"))
            .unwrap();

        let classes = db.list_drug_classes().unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[1].description, "Updated");
    }
}
