//! Evidence-based supplement and lifestyle alternatives by drug class.

use serde::{Deserialize, Serialize};

/// A non-prescription alternative for a drug class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeTreatment {
    pub name: String,
    /// e.g., "Dietary Supplement", "Lifestyle Intervention"
    pub treatment_type: String,
    /// Average monthly cost in USD
    pub avg_cost: f64,
    pub explanation: String,
    pub warning: String,
    pub source: String,
}

pub(super) struct TreatmentEntry {
    name: &'static str,
    treatment_type: &'static str,
    avg_cost: f64,
    explanation: &'static str,
    warning: &'static str,
    source: &'static str,
}

const NCCIH: &str = "National Center for Complementary and Integrative Health (NCCIH)";

pub(super) const TREATMENTS: &[(&str, &[TreatmentEntry])] = &[
    (
        "Statin",
        &[
            TreatmentEntry {
                name: "Plant Sterols and Stanols",
                treatment_type: "Dietary Supplement",
                avg_cost: 30.0,
                explanation: "Plant sterols and stanols are naturally occurring compounds that can help lower cholesterol by blocking its absorption. Studies suggest they can reduce LDL cholesterol by 5-15% when consumed as part of a heart-healthy diet.",
                warning: "Not as effective as statins for significant cholesterol reduction. Should be used as a complementary approach, not a replacement for prescribed medication.",
                source: "American Heart Association, Mayo Clinic",
            },
            TreatmentEntry {
                name: "Red Yeast Rice",
                treatment_type: "Dietary Supplement",
                avg_cost: 20.0,
                explanation: "Red yeast rice naturally contains compounds similar to lovastatin. Some studies show it can lower cholesterol by 20-30% in some people.",
                warning: "Quality and active compound amounts vary widely between products. May cause the same side effects as statins. Not regulated by the FDA for consistency.",
                source: NCCIH,
            },
        ],
    ),
    (
        "SSRI",
        &[
            TreatmentEntry {
                name: "Omega-3 Fatty Acids",
                treatment_type: "Dietary Supplement",
                avg_cost: 25.0,
                explanation: "Some research suggests omega-3 supplements may help alleviate mild to moderate depression symptoms. The EPA form appears to be more effective than DHA for mood improvement.",
                warning: "Effects are typically modest. Should not replace prescribed antidepressants for clinical depression. Consult your healthcare provider before using.",
                source: "Harvard Medical School, JAMA Psychiatry",
            },
            TreatmentEntry {
                name: "Regular Exercise",
                treatment_type: "Lifestyle Intervention",
                avg_cost: 0.0,
                explanation: "Regular physical activity has been shown to reduce symptoms of depression and anxiety. For mild to moderate depression, research suggests exercise can be as effective as medication in some cases.",
                warning: "Should be used as a complementary approach for most cases of clinical depression, not as the sole treatment.",
                source: "American Psychological Association, Mayo Clinic",
            },
        ],
    ),
    (
        "PPI",
        &[
            TreatmentEntry {
                name: "Dietary Modifications",
                treatment_type: "Lifestyle Intervention",
                avg_cost: 0.0,
                explanation: "Avoiding trigger foods (spicy, acidic, fatty), eating smaller meals, not eating before bedtime, and weight loss if needed can significantly reduce acid reflux symptoms.",
                warning: "May not be sufficient for severe GERD or conditions requiring acid suppression. Consult your healthcare provider before discontinuing prescribed medication.",
                source: "American College of Gastroenterology, Mayo Clinic",
            },
            TreatmentEntry {
                name: "Deglycyrrhizinated Licorice (DGL)",
                treatment_type: "Dietary Supplement",
                avg_cost: 15.0,
                explanation: "DGL is a form of licorice root that has had a potentially dangerous compound (glycyrrhizin) removed. It may help protect the stomach lining and reduce heartburn symptoms.",
                warning: "Limited scientific evidence compared to conventional treatments. Should not replace prescribed medication without healthcare provider guidance.",
                source: NCCIH,
            },
        ],
    ),
    (
        "NSAID",
        &[
            TreatmentEntry {
                name: "Turmeric/Curcumin",
                treatment_type: "Dietary Supplement",
                avg_cost: 20.0,
                explanation: "Curcumin, the active compound in turmeric, has anti-inflammatory properties. Some studies suggest it may help reduce pain and inflammation in conditions like arthritis.",
                warning: "Has poor bioavailability unless formulated with enhancers like piperine (black pepper extract). Effects are usually modest compared to NSAIDs.",
                source: "Arthritis Foundation, Journal of Medicinal Food",
            },
            TreatmentEntry {
                name: "Topical Capsaicin",
                treatment_type: "Topical Treatment",
                avg_cost: 15.0,
                explanation: "Capsaicin, derived from chili peppers, can help relieve pain by reducing Substance P, a pain messenger. Effective for some types of muscle and joint pain.",
                warning: "Causes burning sensation upon application that decreases with continued use. Only works for localized pain conditions.",
                source: "American Academy of Family Physicians, Cochrane Database of Systematic Reviews",
            },
        ],
    ),
    (
        "Antihistamine",
        &[
            TreatmentEntry {
                name: "Nasal Irrigation",
                treatment_type: "Home Remedy",
                avg_cost: 10.0,
                explanation: "Saline nasal irrigation (such as with a neti pot) helps flush allergens from nasal passages and thin mucus. Shown to reduce allergy symptoms and need for medications in some patients.",
                warning: "Use only distilled, sterile, or previously boiled water. Clean devices regularly to prevent infection.",
                source: "American Academy of Allergy, Asthma & Immunology",
            },
            TreatmentEntry {
                name: "Butterbur Extract",
                treatment_type: "Herbal Supplement",
                avg_cost: 30.0,
                explanation: "Some studies suggest butterbur extract can be as effective as antihistamines for allergic rhinitis symptoms without causing drowsiness.",
                warning: "Only use products labeled \"PA-free\" (pyrrolizidine alkaloids removed), as these compounds can damage the liver. Not recommended for long-term use.",
                source: NCCIH,
            },
        ],
    ),
    (
        "Biguanide",
        &[
            TreatmentEntry {
                name: "Dietary Changes & Exercise",
                treatment_type: "Lifestyle Intervention",
                avg_cost: 0.0,
                explanation: "A low-carbohydrate diet combined with regular physical activity can significantly improve blood glucose control. In some cases of early type 2 diabetes, lifestyle changes alone can achieve similar results to medication.",
                warning: "Should be implemented under medical supervision. Many patients will still require medication in addition to lifestyle changes.",
                source: "American Diabetes Association, New England Journal of Medicine",
            },
            TreatmentEntry {
                name: "Berberine",
                treatment_type: "Dietary Supplement",
                avg_cost: 25.0,
                explanation: "Berberine is a compound found in several plants. Some clinical trials suggest it may lower blood glucose levels through mechanisms similar to metformin.",
                warning: "Not FDA-approved for diabetes treatment. Quality and potency vary between products. Potential for drug interactions.",
                source: "Journal of Ethnopharmacology, Metabolism",
            },
        ],
    ),
];

impl From<&TreatmentEntry> for AlternativeTreatment {
    fn from(entry: &TreatmentEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            treatment_type: entry.treatment_type.to_string(),
            avg_cost: entry.avg_cost,
            explanation: entry.explanation.to_string(),
            warning: entry.warning.to_string(),
            source: entry.source.to_string(),
        }
    }
}
