//! Medication risk notes and do-not-combine lists.
//!
//! Brand and generic names carry identical entries.

pub(super) const RISKS: &[(&str, &str)] = &[
    ("Diphenhydramine", "May cause drowsiness, dry mouth, urinary retention. Not recommended for elderly."),
    ("Benadryl", "May cause drowsiness, dry mouth, urinary retention. Not recommended for elderly."),
    ("Cetirizine", "May cause drowsiness or dry mouth. Generally well-tolerated."),
    ("Zyrtec", "May cause drowsiness or dry mouth. Generally well-tolerated."),
    ("Loratadine", "May cause headache or dry mouth. Non-drowsy for most people."),
    ("Claritin", "May cause headache or dry mouth. Non-drowsy for most people."),
    ("Ibuprofen", "Can cause ulcers or kidney problems. Not advised for people with asthma."),
    ("Advil", "Can cause ulcers or kidney problems. Not advised for people with asthma."),
    ("Naproxen", "May cause stomach upset or raise blood pressure. Avoid with kidney problems."),
    ("Aleve", "May cause stomach upset or raise blood pressure. Avoid with kidney problems."),
    ("Acetaminophen", "Can cause liver damage at high doses. Avoid with alcohol."),
    ("Tylenol", "Can cause liver damage at high doses. Avoid with alcohol."),
    ("Atorvastatin", "May cause muscle pain or liver enzyme elevations."),
    ("Lipitor", "May cause muscle pain or liver enzyme elevations."),
    ("Rosuvastatin", "May cause muscle pain or weakness. Requires liver monitoring."),
    ("Crestor", "May cause muscle pain or weakness. Requires liver monitoring."),
    ("Simvastatin", "Higher risk of muscle damage. Avoid with grapefruit juice."),
    ("Zocor", "Higher risk of muscle damage. Avoid with grapefruit juice."),
    ("Escitalopram", "May cause nausea, insomnia, or sexual dysfunction."),
    ("Lexapro", "May cause nausea, insomnia, or sexual dysfunction."),
    ("Sertraline", "May cause diarrhea, nausea, or sexual side effects."),
    ("Zoloft", "May cause diarrhea, nausea, or sexual side effects."),
    ("Fluoxetine", "May cause anxiety, insomnia, or weight changes."),
    ("Prozac", "May cause anxiety, insomnia, or weight changes."),
    ("Alprazolam", "Risk of dependency. Can cause drowsiness and impaired coordination."),
    ("Xanax", "Risk of dependency. Can cause drowsiness and impaired coordination."),
    ("Lorazepam", "May cause sedation and memory problems. Risk of dependence."),
    ("Ativan", "May cause sedation and memory problems. Risk of dependence."),
    ("Clonazepam", "May cause dizziness or confusion. Not for long-term use."),
    ("Klonopin", "May cause dizziness or confusion. Not for long-term use."),
    ("Metformin", "May cause stomach upset or rarely, lactic acidosis in kidney issues."),
    ("Glucophage", "May cause stomach upset or rarely, lactic acidosis in kidney issues."),
    ("Glyburide", "Can cause hypoglycemia (low blood sugar). Weight gain possible."),
    ("Glynase", "Can cause hypoglycemia (low blood sugar). Weight gain possible."),
    ("Glipizide", "Risk of low blood sugar. Take with first meal of the day."),
    ("Glucotrol", "Risk of low blood sugar. Take with first meal of the day."),
    ("Omeprazole", "Long-term use may affect magnesium levels or increase fracture risk."),
    ("Prilosec", "Long-term use may affect magnesium levels or increase fracture risk."),
    ("Famotidine", "Generally well-tolerated. May cause headache or constipation."),
    ("Pepcid", "Generally well-tolerated. May cause headache or constipation."),
    ("Pantoprazole", "May affect absorption of other medications. Can cause diarrhea."),
    ("Protonix", "May affect absorption of other medications. Can cause diarrhea."),
];

pub(super) const DO_NOT_COMBINE: &[(&str, &[&str])] = &[
    ("Diphenhydramine", &["Other antihistamines (Cetirizine, Loratadine)", "Alcohol or sedatives"]),
    ("Benadryl", &["Other antihistamines (Cetirizine, Loratadine)", "Alcohol or sedatives"]),
    ("Cetirizine", &["Other antihistamines", "MAO inhibitors"]),
    ("Zyrtec", &["Other antihistamines", "MAO inhibitors"]),
    ("Loratadine", &["Other antihistamines", "Ketoconazole, erythromycin"]),
    ("Claritin", &["Other antihistamines", "Ketoconazole, erythromycin"]),
    ("Ibuprofen", &["Other NSAIDs", "Blood thinners (Warfarin)", "Corticosteroids"]),
    ("Advil", &["Other NSAIDs", "Blood thinners (Warfarin)", "Corticosteroids"]),
    ("Naproxen", &["Other NSAIDs", "Blood thinners", "ACE inhibitors"]),
    ("Aleve", &["Other NSAIDs", "Blood thinners", "ACE inhibitors"]),
    ("Acetaminophen", &["Alcohol", "Other acetaminophen-containing products"]),
    ("Tylenol", &["Alcohol", "Other acetaminophen-containing products"]),
    ("Atorvastatin", &["Grapefruit juice", "Certain antibiotics", "Cyclosporine"]),
    ("Lipitor", &["Grapefruit juice", "Certain antibiotics", "Cyclosporine"]),
    ("Rosuvastatin", &["Cyclosporine", "Gemfibrozil", "Warfarin"]),
    ("Crestor", &["Cyclosporine", "Gemfibrozil", "Warfarin"]),
    ("Simvastatin", &["Grapefruit juice", "Certain antibiotics", "HIV protease inhibitors"]),
    ("Zocor", &["Grapefruit juice", "Certain antibiotics", "HIV protease inhibitors"]),
    ("Escitalopram", &["MAOIs", "Other SSRIs", "Triptans"]),
    ("Lexapro", &["MAOIs", "Other SSRIs", "Triptans"]),
    ("Sertraline", &["MAOIs", "Other SSRIs", "St. John's Wort"]),
    ("Zoloft", &["MAOIs", "Other SSRIs", "St. John's Wort"]),
    ("Fluoxetine", &["MAOIs", "Thioridazine", "Pimozide"]),
    ("Prozac", &["MAOIs", "Thioridazine", "Pimozide"]),
    ("Alprazolam", &["Alcohol", "Opioids", "Other CNS depressants"]),
    ("Xanax", &["Alcohol", "Opioids", "Other CNS depressants"]),
    ("Lorazepam", &["Alcohol", "Opioid pain medications", "Anticonvulsants"]),
    ("Ativan", &["Alcohol", "Opioid pain medications", "Anticonvulsants"]),
    ("Clonazepam", &["Alcohol", "Opioids", "Other benzodiazepines"]),
    ("Klonopin", &["Alcohol", "Opioids", "Other benzodiazepines"]),
    ("Metformin", &["Alcohol", "Iodinated contrast (used in scans)", "Certain kidney medications"]),
    ("Glucophage", &["Alcohol", "Iodinated contrast (used in scans)", "Certain kidney medications"]),
    ("Glyburide", &["Beta-blockers", "Corticosteroids", "Niacin"]),
    ("Glynase", &["Beta-blockers", "Corticosteroids", "Niacin"]),
    ("Glipizide", &["Beta-blockers", "Diuretics", "NSAIDs"]),
    ("Glucotrol", &["Beta-blockers", "Diuretics", "NSAIDs"]),
    ("Omeprazole", &["Clopidogrel (Plavix)", "Certain HIV medications", "St. John's Wort"]),
    ("Prilosec", &["Clopidogrel (Plavix)", "Certain HIV medications", "St. John's Wort"]),
    ("Famotidine", &["Itraconazole", "Ketoconazole", "Atazanavir"]),
    ("Pepcid", &["Itraconazole", "Ketoconazole", "Atazanavir"]),
    ("Pantoprazole", &["Methotrexate", "Rilpivirine", "Clopidogrel"]),
    ("Protonix", &["Methotrexate", "Rilpivirine", "Clopidogrel"]),
];
