//! Sample catalog data.
//!
//! A small, self-consistent catalog of common brand and generic medications
//! used for demos, tests and first launch. Costs are average monthly prices
//! in USD.

use tracing::info;

use super::{Database, DbResult};
use crate::models::InsuranceTier::{self, Limited, Most, NotCovered, Partial};
use crate::models::{DrugClassInfo, MedicationRecord};

const SOURCE: &str = "FDA, Mayo Clinic";

struct SeedMedication {
    name: &'static str,
    generic_name: &'static str,
    drug_class: &'static str,
    description: &'static str,
    avg_cost: f64,
    is_brand: bool,
    counterpart: &'static str,
    side_effects: &'static str,
    interactions: &'static str,
    insurance: InsuranceTier,
}

const CHOLESTEROL: &str = "Used to lower cholesterol and prevent heart disease";
const MOOD: &str = "Used to treat depression, anxiety, and other mental health conditions";
const ACID: &str = "Used to reduce stomach acid and treat acid reflux";
const ALLERGY: &str = "Used to treat allergies";
const DIABETES: &str = "Used to control blood sugar in type 2 diabetes";
const INFECTION: &str = "Used to treat bacterial infections";

const STATIN_SIDE_EFFECTS: &str = "Muscle pain, liver problems, digestive issues";
const STATIN_INTERACTIONS: &str = "Grapefruit juice, certain antibiotics";


const SEED_MEDICATIONS: &[SeedMedication] = &[
    SeedMedication { name: "Lipitor", generic_name: "Atorvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 250.0, is_brand: true, counterpart: "Atorvastatin", side_effects: STATIN_SIDE_EFFECTS, interactions: "Grapefruit juice, certain antibiotics, antifungals", insurance: Partial },
    SeedMedication { name: "Atorvastatin", generic_name: "Atorvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 20.0, is_brand: false, counterpart: "Lipitor", side_effects: STATIN_SIDE_EFFECTS, interactions: "Grapefruit juice, certain antibiotics, antifungals", insurance: Most },
    SeedMedication { name: "Crestor", generic_name: "Rosuvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 280.0, is_brand: true, counterpart: "Rosuvastatin", side_effects: "Muscle pain, headache, weakness", interactions: "Cyclosporine, gemfibrozil, antacids", insurance: Limited },
    SeedMedication { name: "Rosuvastatin", generic_name: "Rosuvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 35.0, is_brand: false, counterpart: "Crestor", side_effects: "Muscle pain, headache, weakness", interactions: "Cyclosporine, gemfibrozil, antacids", insurance: Most },
    SeedMedication { name: "Zoloft", generic_name: "Sertraline", drug_class: "SSRI", description: MOOD, avg_cost: 120.0, is_brand: true, counterpart: "Sertraline", side_effects: "Nausea, insomnia, sexual dysfunction, dry mouth", interactions: "MAOIs, other antidepressants, aspirin", insurance: Partial },
    SeedMedication { name: "Sertraline", generic_name: "Sertraline", drug_class: "SSRI", description: MOOD, avg_cost: 15.0, is_brand: false, counterpart: "Zoloft", side_effects: "Nausea, insomnia, sexual dysfunction, dry mouth", interactions: "MAOIs, other antidepressants, aspirin", insurance: Most },
    SeedMedication { name: "Prozac", generic_name: "Fluoxetine", drug_class: "SSRI", description: MOOD, avg_cost: 135.0, is_brand: true, counterpart: "Fluoxetine", side_effects: "Nausea, insomnia, anxiety, headache", interactions: "MAOIs, other antidepressants, NSAIDs", insurance: Partial },
    SeedMedication { name: "Fluoxetine", generic_name: "Fluoxetine", drug_class: "SSRI", description: MOOD, avg_cost: 15.0, is_brand: false, counterpart: "Prozac", side_effects: "Nausea, insomnia, anxiety, headache", interactions: "MAOIs, other antidepressants, NSAIDs", insurance: Most },
    SeedMedication { name: "Nexium", generic_name: "Esomeprazole", drug_class: "PPI", description: ACID, avg_cost: 250.0, is_brand: true, counterpart: "Esomeprazole", side_effects: "Headache, diarrhea, nausea, abdominal pain", interactions: "Diazepam, digoxin, cilostazol", insurance: Limited },
    SeedMedication { name: "Esomeprazole", generic_name: "Esomeprazole", drug_class: "PPI", description: ACID, avg_cost: 25.0, is_brand: false, counterpart: "Nexium", side_effects: "Headache, diarrhea, nausea, abdominal pain", interactions: "Diazepam, digoxin, cilostazol", insurance: Most },
    SeedMedication { name: "Prilosec", generic_name: "Omeprazole", drug_class: "PPI", description: ACID, avg_cost: 30.0, is_brand: true, counterpart: "Omeprazole", side_effects: "Headache, abdominal pain, diarrhea", interactions: "Diazepam, warfarin, phenytoin", insurance: NotCovered },
    SeedMedication { name: "Omeprazole", generic_name: "Omeprazole", drug_class: "PPI", description: ACID, avg_cost: 15.0, is_brand: false, counterpart: "Prilosec", side_effects: "Headache, abdominal pain, diarrhea", interactions: "Diazepam, warfarin, phenytoin", insurance: NotCovered },
    SeedMedication { name: "Advil", generic_name: "Ibuprofen", drug_class: "NSAID", description: "Used to reduce pain, inflammation, and fever", avg_cost: 15.0, is_brand: true, counterpart: "Ibuprofen", side_effects: "Stomach pain, heartburn, nausea, dizziness", interactions: "Aspirin, blood thinners, blood pressure medications", insurance: NotCovered },
    SeedMedication { name: "Ibuprofen", generic_name: "Ibuprofen", drug_class: "NSAID", description: "Used to reduce pain, inflammation, and fever", avg_cost: 5.0, is_brand: false, counterpart: "Advil", side_effects: "Stomach pain, heartburn, nausea, dizziness", interactions: "Aspirin, blood thinners, blood pressure medications", insurance: NotCovered },
    SeedMedication { name: "Tylenol", generic_name: "Acetaminophen", drug_class: "Analgesic", description: "Used to reduce fever and relieve pain", avg_cost: 12.0, is_brand: true, counterpart: "Acetaminophen", side_effects: "Nausea, headache, liver damage (with overuse)", interactions: "Alcohol, NSAIDs, anticoagulants", insurance: NotCovered },
    SeedMedication { name: "Acetaminophen", generic_name: "Acetaminophen", drug_class: "Analgesic", description: "Used to reduce fever and relieve pain", avg_cost: 5.0, is_brand: false, counterpart: "Tylenol", side_effects: "Nausea, headache, liver damage (with overuse)", interactions: "Alcohol, NSAIDs, anticoagulants", insurance: NotCovered },
    SeedMedication { name: "Claritin", generic_name: "Loratadine", drug_class: "Antihistamine", description: ALLERGY, avg_cost: 45.0, is_brand: true, counterpart: "Loratadine", side_effects: "Headache, drowsiness, fatigue, dry mouth", interactions: "Alcohol, sedatives", insurance: NotCovered },
    SeedMedication { name: "Loratadine", generic_name: "Loratadine", drug_class: "Antihistamine", description: ALLERGY, avg_cost: 10.0, is_brand: false, counterpart: "Claritin", side_effects: "Headache, drowsiness, fatigue, dry mouth", interactions: "Alcohol, sedatives", insurance: NotCovered },
    SeedMedication { name: "Zyrtec", generic_name: "Cetirizine", drug_class: "Antihistamine", description: ALLERGY, avg_cost: 40.0, is_brand: true, counterpart: "Cetirizine", side_effects: "Drowsiness, fatigue, dry mouth", interactions: "Alcohol, sedatives", insurance: NotCovered },
    SeedMedication { name: "Cetirizine", generic_name: "Cetirizine", drug_class: "Antihistamine", description: ALLERGY, avg_cost: 12.0, is_brand: false, counterpart: "Zyrtec", side_effects: "Drowsiness, fatigue, dry mouth", interactions: "Alcohol, sedatives", insurance: NotCovered },
    SeedMedication { name: "Metformin", generic_name: "Metformin", drug_class: "Biguanide", description: DIABETES, avg_cost: 20.0, is_brand: false, counterpart: "Glucophage", side_effects: "Diarrhea, nausea, abdominal discomfort", interactions: "Alcohol, certain diuretics, contrast dyes", insurance: Most },
    SeedMedication { name: "Glucophage", generic_name: "Metformin", drug_class: "Biguanide", description: DIABETES, avg_cost: 15.0, is_brand: true, counterpart: "Metformin", side_effects: "Diarrhea, nausea, abdominal discomfort", interactions: "Alcohol, certain diuretics, contrast dyes", insurance: Partial },
    SeedMedication { name: "Januvia", generic_name: "Sitagliptin", drug_class: "DPP-4 Inhibitor", description: DIABETES, avg_cost: 500.0, is_brand: true, counterpart: "Sitagliptin", side_effects: "Upper respiratory tract infection, headache", interactions: "Digoxin, certain antifungals", insurance: Partial },
    SeedMedication { name: "Sitagliptin", generic_name: "Sitagliptin", drug_class: "DPP-4 Inhibitor", description: DIABETES, avg_cost: 450.0, is_brand: false, counterpart: "Januvia", side_effects: "Upper respiratory tract infection, headache", interactions: "Digoxin, certain antifungals", insurance: Partial },
    SeedMedication { name: "Simvastatin", generic_name: "Simvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 20.0, is_brand: false, counterpart: "Zocor", side_effects: STATIN_SIDE_EFFECTS, interactions: STATIN_INTERACTIONS, insurance: Most },
    SeedMedication { name: "Zocor", generic_name: "Simvastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 180.0, is_brand: true, counterpart: "Simvastatin", side_effects: STATIN_SIDE_EFFECTS, interactions: STATIN_INTERACTIONS, insurance: Limited },
    SeedMedication { name: "Lovastatin", generic_name: "Lovastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 18.0, is_brand: false, counterpart: "Mevacor", side_effects: STATIN_SIDE_EFFECTS, interactions: STATIN_INTERACTIONS, insurance: Most },
    SeedMedication { name: "Mevacor", generic_name: "Lovastatin", drug_class: "Statin", description: CHOLESTEROL, avg_cost: 150.0, is_brand: true, counterpart: "Lovastatin", side_effects: STATIN_SIDE_EFFECTS, interactions: STATIN_INTERACTIONS, insurance: Limited },
    SeedMedication { name: "Amoxicillin", generic_name: "Amoxicillin", drug_class: "Penicillin", description: INFECTION, avg_cost: 20.0, is_brand: false, counterpart: "", side_effects: "Diarrhea, nausea, rash", interactions: "Probenecid, allopurinol, oral contraceptives", insurance: Most },
    SeedMedication { name: "Augmentin", generic_name: "Amoxicillin/Clavulanate", drug_class: "Penicillin combination", description: INFECTION, avg_cost: 45.0, is_brand: true, counterpart: "", side_effects: "Diarrhea, nausea, rash, abdominal discomfort", interactions: "Probenecid, allopurinol, oral contraceptives", insurance: Partial },
    SeedMedication { name: "Cephalexin", generic_name: "Cephalexin", drug_class: "Cephalosporin", description: INFECTION, avg_cost: 15.0, is_brand: false, counterpart: "", side_effects: "Diarrhea, nausea, allergic reactions", interactions: "Probenecid, anticoagulants", insurance: Most },
    SeedMedication { name: "Keflex", generic_name: "Cephalexin", drug_class: "Cephalosporin", description: INFECTION, avg_cost: 25.0, is_brand: true, counterpart: "", side_effects: "Diarrhea, nausea, allergic reactions", interactions: "Probenecid, anticoagulants", insurance: Limited },
];

/// (class, full name, description, common uses)
const SEED_DRUG_CLASSES: &[(&str, &str, &str, &str)] = &[
    ("Statin", "HMG-CoA Reductase Inhibitors", "Medications that lower cholesterol levels by inhibiting the HMG-CoA reductase enzyme", "High cholesterol, heart disease prevention"),
    ("SSRI", "Selective Serotonin Reuptake Inhibitors", "Antidepressants that increase serotonin levels in the brain by blocking reabsorption", "Depression, anxiety, obsessive-compulsive disorder, PTSD"),
    ("PPI", "Proton Pump Inhibitors", "Medications that reduce stomach acid production by blocking the proton pump enzyme", "Heartburn, acid reflux, GERD, stomach ulcers"),
    ("NSAID", "Nonsteroidal Anti-inflammatory Drugs", "Medications that reduce pain, inflammation, and fever by blocking certain enzymes", "Pain, inflammation, fever, arthritis"),
    ("Analgesic", "Pain Relievers", "Medications that relieve pain by various mechanisms", "Pain relief for various conditions"),
    ("Antihistamine", "Antihistamines", "Medications that block histamine receptors to treat allergies", "Allergies, hay fever, cold symptoms"),
    ("Biguanide", "Biguanides", "Medications that decrease glucose production in the liver and improve insulin sensitivity", "Type 2 diabetes management"),
    ("DPP-4 Inhibitor", "Dipeptidyl Peptidase-4 Inhibitors", "Medications that increase insulin production and decrease glucagon levels to control blood sugar", "Type 2 diabetes management"),
    ("Penicillin", "Penicillins", "Antibiotics that kill bacteria by disrupting cell wall synthesis", "Bacterial infections of various types"),
    ("Cephalosporin", "Cephalosporins", "Antibiotics similar to penicillins that disrupt bacterial cell wall synthesis", "Bacterial infections, often used for penicillin-allergic patients"),
];

/// Restriction text and supplement suggestions shared by a drug class.
fn class_extras(drug_class: &str) -> (Option<&'static str>, &'static [&'static str]) {
    match drug_class {
        "Statin" => (Some("Liver disease, pregnancy"), &["CoQ10", "Red yeast rice"]),
        "SSRI" => (Some("Bipolar disorder, pregnancy"), &["Omega-3", "St. John's Wort"]),
        "PPI" => (Some("Osteoporosis"), &["Ginger tea", "Elevate head"]),
        "NSAID" => (Some("Stomach ulcers, kidney disease, asthma"), &["Turmeric", "Omega-3"]),
        "Analgesic" => (Some("Liver disease"), &["Turmeric"]),
        "Antihistamine" => (Some("Glaucoma"), &["Quercetin", "Saline rinse"]),
        "Biguanide" | "DPP-4 Inhibitor" => (Some("Kidney disease"), &["Cinnamon", "Low-carb diet"]),
        "Penicillin" | "Penicillin combination" => (Some("Penicillin allergy"), &[]),
        "Cephalosporin" => (Some("Cephalosporin allergy"), &[]),
        _ => (None, &[]),
    }
}

/// Hand-picked alternatives listed on brand records.
fn listed_alternatives(name: &str) -> &'static [&'static str] {
    match name {
        "Lipitor" => &["Atorvastatin", "Simvastatin", "Rosuvastatin"],
        "Crestor" => &["Rosuvastatin", "Atorvastatin"],
        "Zocor" => &["Simvastatin", "Lovastatin"],
        "Mevacor" => &["Lovastatin"],
        "Zoloft" => &["Sertraline", "Fluoxetine"],
        "Prozac" => &["Fluoxetine", "Sertraline"],
        "Nexium" => &["Esomeprazole", "Omeprazole", "Prilosec"],
        "Prilosec" => &["Omeprazole"],
        "Advil" => &["Ibuprofen", "Acetaminophen"],
        "Tylenol" => &["Acetaminophen"],
        "Claritin" => &["Loratadine", "Cetirizine"],
        "Zyrtec" => &["Cetirizine", "Loratadine"],
        "Januvia" => &["Sitagliptin", "Metformin"],
        "Augmentin" => &["Amoxicillin", "Cephalexin"],
        "Keflex" => &["Cephalexin"],
        _ => &[],
    }
}

impl From<&SeedMedication> for MedicationRecord {
    fn from(seed: &SeedMedication) -> Self {
        let (restrictions, supplements) = class_extras(seed.drug_class);
        MedicationRecord {
            name: seed.name.to_string(),
            generic_name: Some(seed.generic_name.to_string()),
            drug_class: seed.drug_class.to_string(),
            description: seed.description.to_string(),
            avg_cost: seed.avg_cost,
            is_brand: seed.is_brand,
            counterpart: (!seed.counterpart.is_empty()).then(|| seed.counterpart.to_string()),
            side_effects: seed.side_effects.to_string(),
            interactions: seed.interactions.to_string(),
            restrictions: restrictions.map(str::to_string),
            source: SOURCE.to_string(),
            insurance: Some(seed.insurance),
            alternatives: listed_alternatives(seed.name).iter().map(|s| s.to_string()).collect(),
            supplement_suggestions: supplements.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The sample medications, in catalog order.
pub fn sample_medications() -> Vec<MedicationRecord> {
    SEED_MEDICATIONS.iter().map(MedicationRecord::from).collect()
}

/// The sample drug classes, in catalog order.
pub fn sample_drug_classes() -> Vec<DrugClassInfo> {
    SEED_DRUG_CLASSES
        .iter()
        .map(|(class, full, description, uses)| DrugClassInfo::new(*class, *full, *description, *uses))
        .collect()
}

impl Database {
    /// Load the sample catalog. Safe to call repeatedly; existing rows are updated.
    ///
    /// Returns the number of medications in the catalog afterwards.
    pub fn seed_sample_catalog(&self) -> DbResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for med in sample_medications() {
            self.upsert_medication(&med)?;
        }
        for class in sample_drug_classes() {
            self.upsert_drug_class(&class)?;
        }
        tx.commit()?;

        let count = self.count_medications()?;
        info!(medications = count, "seeded sample catalog");
        Ok(count)
    }
}
