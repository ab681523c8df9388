//! Response handlers for each question intent.
//!
//! Handlers never fail. When a context they rely on is missing they answer
//! with a sentence asking the user to search for a medication first.

use crate::rules::Query;
use crate::tables::{self, COMMON_MEDICATIONS, SUPPLEMENT_DESCRIPTIONS, SUPPLEMENT_INTERACTIONS};

pub const FALLBACK_RESPONSE: &str = "I'm a simple assistant designed to help with basic medication questions. For specific medical advice, please consult your healthcare provider.";

pub const SEARCH_FIRST_RESPONSE: &str = "Please search for a medication first so I can answer questions about it.";

pub const WHY_CHEAPER_RESPONSE: &str = "Generic medications are usually cheaper because they don't have the marketing and research costs that brand-name drugs do.";

pub const SAFETY_RESPONSE: &str = "Yes, the FDA requires generic medications to be as safe and effective as their brand-name counterparts.";

pub(crate) fn difference_between(q: &Query<'_>) -> String {
    let (Some(med), Some(alt)) = (q.medication, q.alternative) else {
        return SEARCH_FIRST_RESPONSE.to_string();
    };
    let med_class = med.class_lower();
    let alt_class = alt.class_lower();

    if med_class == alt_class {
        format!(
            "Both {} and {} belong to the same drug class ({}) and work in similar ways. \
             The main differences are typically in cost, potential side effects, and insurance coverage. \
             {} costs ${:.2} per month while {} costs ${:.2} per month.",
            med.name, alt.name, med_class, alt.name, alt.avg_cost, med.name, med.avg_cost
        )
    } else {
        format!(
            "{} belongs to the {} class, while {} is a {}. \
             Although they treat similar conditions, they may work through different mechanisms.",
            med.name, med_class, alt.name, alt_class
        )
    }
}

pub(crate) fn savings_estimate(q: &Query<'_>) -> String {
    let (Some(med), Some(alt)) = (q.medication, q.alternative) else {
        return SEARCH_FIRST_RESPONSE.to_string();
    };
    let savings = med.avg_cost - alt.avg_cost;
    format!(
        "By switching from {} to {}, you could save ${:.2} per month (about {}% of the original cost).",
        med.name,
        alt.name,
        savings,
        rounded_percent(savings, med.avg_cost)
    )
}

pub(crate) fn without_insurance(q: &Query<'_>) -> String {
    if let Some(alt) = q.alternative {
        let mut response = format!(
            "Yes, you can purchase {} without insurance for about ${:.2} per month.",
            alt.name, alt.avg_cost
        );
        if let Some(description) = &alt.insurance_description {
            response.push_str(" This is ");
            response.push_str(description);
        }
        return response;
    }
    if let Some(med) = q.medication {
        return format!(
            "Yes, you can purchase {} without insurance for about ${:.2} per month. \
             This may be expensive compared to alternatives.",
            med.name, med.avg_cost
        );
    }
    "All medications can be purchased without insurance, but costs will vary. \
     Generic medications are typically much more affordable than brand-name drugs."
        .to_string()
}

pub(crate) fn what_does_it_treat(q: &Query<'_>) -> String {
    let Some(ctx) = q.medication.or(q.alternative) else {
        return "Please specify which medication you'd like to know about.".to_string();
    };
    let class = ctx.class_lower();
    match tables::class_description(&class) {
        Some(description) => format!("{} is a {}. {}", ctx.name, class, description),
        None => format!("{} is used to treat conditions related to {}.", ctx.name, class),
    }
}

pub(crate) fn supplements_helpful(q: &Query<'_>) -> String {
    if let Some(med) = q.medication {
        if !med.supplement_suggestions.is_empty() {
            return format!(
                "Some supplements like {} may help with your condition, but they're typically less effective \
                 than prescription medications. Always consult with your healthcare provider before starting \
                 any supplements, especially alongside medication.",
                med.supplement_suggestions.join(", ")
            );
        }
    }
    "Supplements may offer some benefits, but they're typically less potent than prescription medications \
     and aren't FDA-approved to treat medical conditions. Always discuss supplements with your healthcare \
     provider before use, as some can interact with medications."
        .to_string()
}

pub(crate) fn no_alternative_found(q: &Query<'_>) -> String {
    match q.medication {
        Some(med) => format!(
            "Possible reasons include: 1) Your budget may be lower than the cost of alternatives, \
             2) You may have a restriction or allergy that conflicts with available alternatives, or \
             3) The database may not contain all possible alternatives for {}. \
             Try adjusting your search criteria or consult your healthcare provider.",
            med.name
        ),
        None => "Possible reasons include budget constraints, medical restrictions, or limitations in our database. \
                 Try adjusting your search criteria or consult your healthcare provider."
            .to_string(),
    }
}

pub(crate) fn why_cheaper(_q: &Query<'_>) -> String {
    WHY_CHEAPER_RESPONSE.to_string()
}

pub(crate) fn safety(_q: &Query<'_>) -> String {
    SAFETY_RESPONSE.to_string()
}

pub(crate) fn drug_class_info(q: &Query<'_>) -> String {
    let Some(med) = q.medication else {
        return SEARCH_FIRST_RESPONSE.to_string();
    };
    tables::class_description(&med.drug_class)
        .unwrap_or(FALLBACK_RESPONSE)
        .to_string()
}

pub(crate) fn alcohol_interaction(q: &Query<'_>) -> String {
    let Some(med) = q.medication else {
        return "To get information about alcohol interactions, please first search for a specific medication."
            .to_string();
    };
    tables::alcohol_interaction(&med.name, med.generic_name.as_deref())
        .unwrap_or(tables::GENERIC_ALCOHOL_CAUTION)
        .to_string()
}

pub(crate) fn drug_interaction(q: &Query<'_>) -> String {
    let Some(med) = q.medication else {
        return "To get information about medication interactions, please first search for a specific medication."
            .to_string();
    };

    let Some(other) = COMMON_MEDICATIONS.iter().copied().find(|m| q.contains(m)) else {
        return "Please specify which medication you're asking about combining with this one. \
                For example, 'Can I take this with Advil?'"
            .to_string();
    };

    // Forward: the searched medication is a primary key in the table.
    let forward = tables::DRUG_INTERACTIONS
        .iter()
        .find(|(key, _)| med.matches_key(key))
        .and_then(|(_, pairs)| pairs.iter().find(|(o, _)| *o == other));

    // Reverse: the other medication is the primary key.
    let note = forward.or_else(|| {
        tables::drug_interactions_for(other)
            .and_then(|pairs| pairs.iter().find(|(key, _)| med.matches_key(key)))
    });

    match note {
        Some((_, text)) => format!("**{} + {}:** {}", med.name, capitalize(other), text),
        None => format!(
            "I don't have specific information about interactions between {} and {}. \
             Always consult your healthcare provider or pharmacist before combining medications.",
            med.name,
            capitalize(other)
        ),
    }
}

pub(crate) fn supplement_interaction(q: &Query<'_>) -> String {
    let Some(med) = q.medication else {
        return "To get information about supplement interactions, please first search for a specific medication."
            .to_string();
    };

    if let Some(entry) = SUPPLEMENT_INTERACTIONS.iter().find(|s| q.contains(s.supplement)) {
        let text = entry
            .by_medication
            .iter()
            .find(|(key, _)| med.matches_key(key))
            .map(|(_, text)| *text)
            .unwrap_or(entry.default);
        return format!("**{} + {}:** {}", med.name, capitalize(entry.supplement), text);
    }

    format!(
        "I don't have specific information about interactions between {} and this supplement. \
         Always consult your healthcare provider before combining medications with supplements.",
        med.name
    )
}

pub(crate) fn supplement_info(q: &Query<'_>) -> String {
    if let Some(med) = q.medication {
        let suggestions = med.supplement_suggestions.join(", ").to_lowercase();
        if let Some((_, description)) = SUPPLEMENT_DESCRIPTIONS
            .iter()
            .find(|(key, _)| suggestions.contains(key))
        {
            return description.to_string();
        }
    }
    "Various supplements or lifestyle changes might help manage your condition alongside medication. \
     Always discuss these with your healthcare provider first."
        .to_string()
}

/// Savings as a whole-number percentage of `original`, ties to even; zero
/// when `original` is not positive.
fn rounded_percent(savings: f64, original: f64) -> i64 {
    if original <= 0.0 {
        return 0;
    }
    (savings / original * 100.0).round_ties_even() as i64
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
