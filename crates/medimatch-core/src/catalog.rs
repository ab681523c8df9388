//! Medication lookup interface used by the recommendation engine.
//!
//! Lookups never fail on missing data: an unknown name is `None` and an
//! unknown class is an empty list. Only storage failures are errors.
//!
//! Case-insensitive comparisons fold ASCII letters only, which is what
//! SQLite's `NOCASE` and `lower()` do, so both implementations agree on
//! non-ASCII names.

use tracing::debug;

use crate::db::{sample_medications, Database, DbResult};
use crate::models::MedicationRecord;

/// Read-only medication lookups.
pub trait MedicationCatalog {
    /// Case-insensitive exact match, then case-insensitive substring match.
    ///
    /// Ties resolve to the first record in catalog order. Blank names are not found.
    fn lookup_by_name(&self, name: &str) -> DbResult<Option<MedicationRecord>>;

    /// All records whose drug class matches case-insensitively, in catalog order.
    fn lookup_by_class(&self, drug_class: &str) -> DbResult<Vec<MedicationRecord>>;

    /// The generic counterpart of a brand record.
    ///
    /// Prefers the non-brand record named by the brand's counterpart field,
    /// then the first non-brand record naming the brand as its counterpart.
    /// Returns `None` for non-brand input.
    fn generic_counterpart(&self, brand: &MedicationRecord) -> DbResult<Option<MedicationRecord>>;

    /// Case-insensitive exact name match, then exact generic-name match.
    ///
    /// No substring fallback. Blank names are not found.
    fn lookup_exact(&self, name: &str) -> DbResult<Option<MedicationRecord>>;
}

impl MedicationCatalog for Database {
    fn lookup_by_name(&self, name: &str) -> DbResult<Option<MedicationRecord>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if let Some(med) = self.get_medication(name)? {
            return Ok(Some(med));
        }
        let found = self.find_medication_containing(name)?;
        if found.is_none() {
            debug!(medication = %name, "medication not in catalog");
        }
        Ok(found)
    }

    fn lookup_by_class(&self, drug_class: &str) -> DbResult<Vec<MedicationRecord>> {
        let drug_class = drug_class.trim();
        if drug_class.is_empty() {
            return Ok(Vec::new());
        }
        self.list_medications_in_class(drug_class)
    }

    fn generic_counterpart(&self, brand: &MedicationRecord) -> DbResult<Option<MedicationRecord>> {
        if !brand.is_brand {
            return Ok(None);
        }
        if let Some(named) = &brand.counterpart {
            if let Some(generic) = self.get_medication(named)? {
                if !generic.is_brand {
                    return Ok(Some(generic));
                }
            }
        }
        Ok(self.list_generics_for_brand(&brand.name)?.into_iter().next())
    }

    fn lookup_exact(&self, name: &str) -> DbResult<Option<MedicationRecord>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        match self.get_medication(name)? {
            Some(med) => Ok(Some(med)),
            None => self.get_medication_by_generic_name(name),
        }
    }
}

/// In-process catalog backed by a vector, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    medications: Vec<MedicationRecord>,
}

impl MemoryCatalog {
    pub fn new(medications: Vec<MedicationRecord>) -> Self {
        Self { medications }
    }

    /// Catalog preloaded with the sample medications.
    pub fn with_sample_data() -> Self {
        Self::new(sample_medications())
    }

    /// Add a record, replacing any record with the same name (case-insensitive).
    pub fn insert(&mut self, med: MedicationRecord) {
        match self.medications.iter_mut().find(|m| m.is_named(&med.name)) {
            Some(existing) => *existing = med,
            None => self.medications.push(med),
        }
    }

    pub fn medications(&self) -> &[MedicationRecord] {
        &self.medications
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }

    fn find_named(&self, name: &str) -> Option<&MedicationRecord> {
        self.medications.iter().find(|m| m.is_named(name))
    }
}

impl MedicationCatalog for MemoryCatalog {
    fn lookup_by_name(&self, name: &str) -> DbResult<Option<MedicationRecord>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if let Some(med) = self.find_named(name) {
            return Ok(Some(med.clone()));
        }
        let needle = name.to_ascii_lowercase();
        Ok(self
            .medications
            .iter()
            .find(|m| m.name.to_ascii_lowercase().contains(&needle))
            .cloned())
    }

    fn lookup_by_class(&self, drug_class: &str) -> DbResult<Vec<MedicationRecord>> {
        let drug_class = drug_class.trim();
        if drug_class.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .medications
            .iter()
            .filter(|m| m.in_class(drug_class))
            .cloned()
            .collect())
    }

    fn generic_counterpart(&self, brand: &MedicationRecord) -> DbResult<Option<MedicationRecord>> {
        if !brand.is_brand {
            return Ok(None);
        }
        let named = brand
            .counterpart
            .as_deref()
            .and_then(|n| self.find_named(n))
            .filter(|m| !m.is_brand);
        if let Some(generic) = named {
            return Ok(Some(generic.clone()));
        }
        Ok(self
            .medications
            .iter()
            .find(|m| {
                !m.is_brand
                    && m.counterpart
                        .as_deref()
                        .map(|c| brand.is_named(c))
                        .unwrap_or(false)
            })
            .cloned())
    }

    fn lookup_exact(&self, name: &str) -> DbResult<Option<MedicationRecord>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        Ok(self
            .find_named(name)
            .or_else(|| self.medications.iter().find(|m| m.has_generic_name(name)))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_sample_catalog().unwrap();
        db
    }

    /// Both implementations must agree on every lookup.
    fn catalogs() -> Vec<(&'static str, Box<dyn MedicationCatalog>)> {
        vec![
            ("sqlite", Box::new(seeded_db())),
            ("memory", Box::new(MemoryCatalog::with_sample_data())),
        ]
    }

    #[test]
    fn test_lookup_exact_before_substring() {
        for (label, catalog) in catalogs() {
            let med = catalog.lookup_by_name("zocor").unwrap().unwrap();
            assert_eq!(med.name, "Zocor", "{}", label);

            let med = catalog.lookup_by_name("vastatin").unwrap().unwrap();
            assert_eq!(med.name, "Atorvastatin", "{}: first substring match in catalog order", label);
        }
    }

    #[test]
    fn test_lookup_missing_and_blank() {
        for (label, catalog) in catalogs() {
            assert!(catalog.lookup_by_name("Xyzzy123").unwrap().is_none(), "{}", label);
            assert!(catalog.lookup_by_name("   ").unwrap().is_none(), "{}", label);
            assert!(catalog.lookup_by_class("").unwrap().is_empty(), "{}", label);
        }
    }

    #[test]
    fn test_lookup_by_class_case_insensitive() {
        for (label, catalog) in catalogs() {
            let ssris: Vec<_> = catalog
                .lookup_by_class("ssri")
                .unwrap()
                .into_iter()
                .map(|m| m.name)
                .collect();
            assert_eq!(ssris, vec!["Zoloft", "Sertraline", "Prozac", "Fluoxetine"], "{}", label);
        }
    }

    #[test]
    fn test_generic_counterpart() {
        for (label, catalog) in catalogs() {
            let lipitor = catalog.lookup_by_name("Lipitor").unwrap().unwrap();
            let generic = catalog.generic_counterpart(&lipitor).unwrap().unwrap();
            assert_eq!(generic.name, "Atorvastatin", "{}", label);
            assert!(!generic.is_brand);

            // Generic input yields nothing
            assert!(catalog.generic_counterpart(&generic).unwrap().is_none(), "{}", label);

            // Brands without a generic in the catalog
            let keflex = catalog.lookup_by_name("Keflex").unwrap().unwrap();
            assert!(catalog.generic_counterpart(&keflex).unwrap().is_none(), "{}", label);
        }
    }

    #[test]
    fn test_counterpart_found_by_reverse_reference() {
        let mut brand = MedicationRecord::new("Brandex", "Statin", 100.0);
        brand.is_brand = true;
        let mut generic = MedicationRecord::new("Genericin", "Statin", 10.0);
        generic.counterpart = Some("brandex".into());

        let memory = MemoryCatalog::new(vec![brand.clone(), generic.clone()]);
        let db = Database::open_in_memory().unwrap();
        db.upsert_medication(&brand).unwrap();
        db.upsert_medication(&generic).unwrap();

        assert_eq!(memory.generic_counterpart(&brand).unwrap().unwrap().name, "Genericin");
        assert_eq!(db.generic_counterpart(&brand).unwrap().unwrap().name, "Genericin");
    }

    #[test]
    fn test_memory_insert_replaces() {
        let mut catalog = MemoryCatalog::default();
        catalog.insert(MedicationRecord::new("Zoloft", "SSRI", 120.0));
        catalog.insert(MedicationRecord::new("ZOLOFT", "SSRI", 99.0));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.medications()[0].avg_cost, 99.0);
    }

    #[test]
    fn test_lookup_exact_name_then_generic_name() {
        let mut brand = MedicationRecord::new("Augmentin", "Penicillin combination", 45.0);
        brand.generic_name = Some("Amoxicillin/Clavulanate".into());
        let plain = MedicationRecord::new("Amoxicillin", "Penicillin", 20.0);

        let memory = MemoryCatalog::new(vec![brand.clone(), plain.clone()]);
        let db = Database::open_in_memory().unwrap();
        db.upsert_medication(&brand).unwrap();
        db.upsert_medication(&plain).unwrap();
        let both: [(&str, &dyn MedicationCatalog); 2] = [("memory", &memory), ("sqlite", &db)];

        for (label, catalog) in both {
            let found = catalog.lookup_exact("amoxicillin/clavulanate").unwrap().unwrap();
            assert_eq!(found.name, "Augmentin", "{}", label);
            let found = catalog.lookup_exact("AMOXICILLIN").unwrap().unwrap();
            assert_eq!(found.name, "Amoxicillin", "{}", label);
            // No substring fallback
            assert!(catalog.lookup_exact("Amoxi").unwrap().is_none(), "{}", label);
            assert!(catalog.lookup_exact(" ").unwrap().is_none(), "{}", label);
        }
    }

    #[test]
    fn test_non_ascii_names_fold_the_same_way() {
        let emla = MedicationRecord::new("Émla", "Anesthetic", 30.0);
        let memory = MemoryCatalog::new(vec![emla.clone()]);
        let db = Database::open_in_memory().unwrap();
        db.upsert_medication(&emla).unwrap();
        let both: [(&str, &dyn MedicationCatalog); 2] = [("memory", &memory), ("sqlite", &db)];

        for (label, catalog) in both {
            // ASCII letters fold, the accented capital does not
            assert!(catalog.lookup_by_name("ÉMLA").unwrap().is_some(), "{}", label);
            assert!(catalog.lookup_by_name("émla").unwrap().is_none(), "{}", label);
            assert!(catalog.lookup_by_name("éml").unwrap().is_none(), "{}", label);
            assert_eq!(catalog.lookup_by_class("ANESTHETIC").unwrap().len(), 1, "{}", label);
        }
    }
}
