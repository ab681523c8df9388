//! Static interaction and description tables.
//!
//! Keys are lowercase. Tables are scanned in declaration order and the first
//! matching key wins, so order is significant.

/// Alcohol interaction notes keyed by medication name fragment.
pub const ALCOHOL_INTERACTIONS: &[(&str, &str)] = &[
    ("zoloft", "⚠️ **Avoid alcohol with Zoloft.** Alcohol can increase side effects like drowsiness, dizziness, and difficulty concentrating. It may also worsen depression symptoms."),
    ("xanax", "⚠️ **Do not mix Xanax with alcohol.** This combination can cause dangerous levels of sedation, respiratory depression, and even be life-threatening."),
    ("prozac", "⚠️ **Avoid alcohol with Prozac.** This combination can increase drowsiness and impair your thinking and reactions."),
    ("advil", "⚠️ **Use caution with alcohol and Advil.** Both can irritate the stomach lining, increasing the risk of ulcers and stomach bleeding."),
    ("tylenol", "⚠️ **Limit alcohol with Tylenol.** Regular alcohol use while taking Tylenol (acetaminophen) increases the risk of liver damage."),
    ("lisinopril", "⚠️ **Alcohol may enhance the blood-pressure-lowering effect** of Lisinopril, causing dizziness or fainting."),
    ("lipitor", "✅ **Occasional alcohol is generally considered safe** with Lipitor, but heavy drinking may increase side effect risks."),
    ("metformin", "⚠️ **Avoid alcohol with Metformin.** This combination increases the risk of lactic acidosis, a serious condition."),
    ("prednisone", "⚠️ **Avoid alcohol with Prednisone.** Both can irritate the stomach and increase the risk of ulcers."),
    ("amoxicillin", "⚠️ **Moderate alcohol consumption is unlikely to cause problems** with Amoxicillin, but alcohol may slow your healing process."),
];

/// Used when the medication has no alcohol table entry.
pub const GENERIC_ALCOHOL_CAUTION: &str = "⚠️ **Use caution when mixing this medication with alcohol.** Alcohol may increase side effects or reduce medication effectiveness. Always consult your healthcare provider about alcohol consumption while taking any medication.";

/// Pairwise drug interactions: primary medication → (other medication, note).
///
/// Pairs are unordered; lookups try both orderings.
pub const DRUG_INTERACTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "xanax",
        &[
            ("advil", "These can generally be taken together. No major interactions are known."),
            ("tylenol", "These can generally be taken together. No major interactions are known."),
            ("zoloft", "⚠️ Taking these together may increase side effects like drowsiness. Use caution and consult your doctor."),
            ("benadryl", "⚠️ This combination can cause extreme drowsiness. Avoid tasks requiring alertness."),
        ],
    ),
    (
        "zoloft",
        &[
            ("advil", "These can generally be taken together. No major interactions are known."),
            ("tylenol", "These can generally be taken together. No major interactions are known."),
            ("xanax", "⚠️ Taking these together may increase side effects like drowsiness. Use caution and consult your doctor."),
            ("aspirin", "⚠️ This combination may increase bleeding risk. Consult your doctor."),
        ],
    ),
    (
        "advil",
        &[
            ("tylenol", "These can generally be taken together and are often used for different types of pain."),
            ("xanax", "These can generally be taken together. No major interactions are known."),
            ("lisinopril", "⚠️ This combination may reduce the effectiveness of blood pressure medication."),
        ],
    ),
];

/// Medications recognized as the "other" drug in an interaction question.
pub const COMMON_MEDICATIONS: &[&str] = &[
    "advil",
    "tylenol",
    "xanax",
    "zoloft",
    "prozac",
    "aspirin",
    "benadryl",
    "lisinopril",
];

/// Supplement interaction notes for one supplement.
#[derive(Debug, Clone, Copy)]
pub struct SupplementInteractions {
    pub supplement: &'static str,
    pub by_medication: &'static [(&'static str, &'static str)],
    pub default: &'static str,
}

pub const SUPPLEMENT_INTERACTIONS: &[SupplementInteractions] = &[
    SupplementInteractions {
        supplement: "turmeric",
        by_medication: &[
            ("xanax", "No major known issues, but turmeric might increase drowsiness effects. Use caution."),
            ("zoloft", "No major known interactions, but always inform your doctor about supplements you take."),
            ("advil", "⚠️ Both have blood-thinning effects. May increase bleeding risk."),
        ],
        default: "No known major interactions, but always consult your doctor before combining supplements with medications.",
    },
    SupplementInteractions {
        supplement: "omega-3",
        by_medication: &[
            ("advil", "⚠️ Both have blood-thinning effects. May increase bleeding risk."),
            ("zoloft", "Generally considered safe together, but inform your doctor."),
        ],
        default: "Generally considered safe, but inform your doctor of all supplements you take.",
    },
    SupplementInteractions {
        supplement: "magnesium",
        by_medication: &[(
            "lisinopril",
            "⚠️ May enhance blood pressure lowering effects. Monitor your blood pressure if combining these.",
        )],
        default: "Generally safe with most medications, but take 2 hours apart from other medications for best absorption.",
    },
    SupplementInteractions {
        supplement: "vitamin d",
        by_medication: &[],
        default: "Generally safe with most medications. No significant interactions typically reported.",
    },
    SupplementInteractions {
        supplement: "st. john's wort",
        by_medication: &[
            ("zoloft", "⚠️ **DO NOT COMBINE.** Can cause serotonin syndrome, a potentially dangerous condition."),
            ("xanax", "⚠️ May reduce the effectiveness of Xanax. Not recommended to combine."),
        ],
        default: "⚠️ St. John's Wort interacts with many medications. Always consult your doctor before using.",
    },
];

/// What a supplement or lifestyle change does, keyed by suggestion fragment.
pub const SUPPLEMENT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("turmeric", "Turmeric contains curcumin, which has anti-inflammatory properties that may help with pain and inflammation similar to NSAIDs, but usually with milder effects."),
    ("omega-3", "Omega-3 fatty acids have anti-inflammatory properties that may help reduce pain and inflammation. They're found in fish oil and some plant sources."),
    ("red yeast rice", "Red yeast rice naturally contains compounds similar to statins and may help lower cholesterol, though effects are typically milder than prescription medications."),
    ("coq10", "CoQ10 is often recommended alongside statins because statins can deplete this compound in the body. It may help reduce muscle pain associated with statins."),
    ("st. john's wort", "St. John's Wort may help with mild depression, but it can interact dangerously with SSRIs and many other medications. Always consult a doctor before using."),
    ("chamomile", "Chamomile tea has mild calming properties that may help with anxiety, though effects are much gentler than prescription anti-anxiety medications."),
    ("meditation", "Regular meditation practice has been shown to help reduce anxiety and stress through mindfulness techniques."),
    ("quercetin", "Quercetin is a natural antihistamine that may help reduce allergic responses, though it's typically less potent than prescription antihistamines."),
    ("saline rinse", "Saline nasal rinses can help flush allergens from the nasal passages, reducing symptoms of allergies and congestion."),
    ("cinnamon", "Some studies suggest cinnamon may help improve insulin sensitivity, though effects are mild compared to prescription diabetes medications."),
    ("low-carb diet", "Reducing carbohydrate intake can help manage blood sugar levels by decreasing the amount of glucose entering the bloodstream."),
    ("ginger tea", "Ginger has natural anti-nausea properties and may help soothe digestive discomfort associated with acid reflux."),
    ("elevate head", "Elevating the head during sleep can help prevent stomach acid from flowing back into the esophagus, reducing reflux symptoms."),
];

/// Drug class descriptions keyed by class-name fragment.
pub const DRUG_CLASS_DESCRIPTIONS: &[(&str, &str)] = &[
    ("nsaid", "NSAIDs (Non-Steroidal Anti-Inflammatory Drugs) reduce pain, fever, and inflammation by blocking certain enzymes in the body."),
    ("statin", "Statins lower cholesterol by blocking an enzyme that the liver uses to make cholesterol."),
    ("ssri", "SSRIs (Selective Serotonin Reuptake Inhibitors) are antidepressants that increase serotonin levels in the brain by blocking its reabsorption."),
    ("benzodiazepine", "Benzodiazepines are sedatives that work by enhancing the effect of the GABA neurotransmitter, producing calming effects."),
    ("antihistamine", "Antihistamines block the action of histamine, a substance in the body that causes allergic symptoms."),
    ("antidiabetic", "Antidiabetic medications help control blood sugar levels in people with diabetes through various mechanisms."),
    ("ppi", "Proton Pump Inhibitors (PPIs) reduce stomach acid production by blocking the enzymes that produce acid."),
];

/// Look up the first class description whose key occurs in `drug_class`.
pub fn class_description(drug_class: &str) -> Option<&'static str> {
    let lower = drug_class.to_lowercase();
    DRUG_CLASS_DESCRIPTIONS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, description)| *description)
}

/// Look up the alcohol note for a medication by name or generic name.
pub fn alcohol_interaction(name: &str, generic_name: Option<&str>) -> Option<&'static str> {
    let name = name.to_lowercase();
    let generic = generic_name.map(str::to_lowercase).unwrap_or_default();
    ALCOHOL_INTERACTIONS
        .iter()
        .find(|(key, _)| name.contains(key) || generic.contains(key))
        .map(|(_, note)| *note)
}

/// Interactions listed for a primary medication key.
pub fn drug_interactions_for(primary: &str) -> Option<&'static [(&'static str, &'static str)]> {
    DRUG_INTERACTIONS
        .iter()
        .find(|(key, _)| *key == primary)
        .map(|(_, pairs)| *pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_description_substring() {
        assert!(class_description("Statin").unwrap().starts_with("Statins lower"));
        assert!(class_description("SSRI").is_some());
        assert!(class_description("DPP-4 Inhibitor").is_none());
    }

    #[test]
    fn test_alcohol_interaction_by_generic_name() {
        let note = alcohol_interaction("Glucophage", Some("Metformin")).unwrap();
        assert!(note.contains("lactic acidosis"));
        assert!(alcohol_interaction("Crestor", Some("Rosuvastatin")).is_none());
    }

    #[test]
    fn test_tables_are_lowercase() {
        for (key, _) in ALCOHOL_INTERACTIONS {
            assert_eq!(*key, key.to_lowercase());
        }
        for supp in SUPPLEMENT_INTERACTIONS {
            assert_eq!(supp.supplement, supp.supplement.to_lowercase());
        }
        for med in COMMON_MEDICATIONS {
            assert_eq!(*med, med.to_lowercase());
        }
    }

    #[test]
    fn test_drug_interactions_for() {
        let pairs = drug_interactions_for("zoloft").unwrap();
        assert!(pairs.iter().any(|(other, _)| *other == "aspirin"));
        assert!(drug_interactions_for("lipitor").is_none());
    }
}
