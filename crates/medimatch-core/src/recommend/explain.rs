//! Explanation paragraphs for recommendations.
//!
//! Insurance banding (alternative's tier, alternative's monthly cost):
//! - Most: max($5, 40%) to max($10, 70%)
//! - Some: max($3, 20%) to max($6, 40%)
//! - Limited: low-savings caveat, no range
//! - None or unknown: not covered

use std::cmp::Ordering;

use crate::models::{InsuranceTier, MedicationRecord, Recommendation};

/// Savings relative to the original cost, in percent.
///
/// Returns 0 when the original cost is not positive.
pub fn savings_percent(original_cost: f64, alternative_cost: f64) -> f64 {
    if original_cost <= 0.0 || !original_cost.is_finite() {
        return 0.0;
    }
    (original_cost - alternative_cost) / original_cost * 100.0
}

/// Savings percent as shown to users: computed on whole cents and rounded
/// half to even, so 12.5% reads as 12% and 13.5% as 14%.
///
/// Returns 0 when the original cost is not positive.
pub fn whole_savings_percent(original_cost: f64, alternative_cost: f64) -> i64 {
    if original_cost <= 0.0 || !original_cost.is_finite() {
        return 0;
    }
    let original = to_cents(original_cost);
    if original <= 0 {
        return 0;
    }
    let numerator = (original - to_cents(alternative_cost)) * 100;
    let quotient = numerator.div_euclid(original);
    let remainder = numerator.rem_euclid(original);
    match (remainder * 2).cmp(&original) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient.rem_euclid(2),
    }
}

fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Estimated monthly insurance savings in whole dollars, as (min, max).
///
/// Only tiers with a dollar estimate return a range.
pub fn insurance_savings_range(tier: Option<InsuranceTier>, cost: f64) -> Option<(i64, i64)> {
    let (min_floor, min_pct, max_floor, max_pct) = match tier? {
        InsuranceTier::Most => (5, 40, 10, 70),
        InsuranceTier::Partial => (3, 20, 6, 40),
        InsuranceTier::Limited | InsuranceTier::NotCovered => return None,
    };
    let cents = to_cents(cost.max(0.0));
    let fraction = |pct: i64| cents * pct / 10_000;
    Some((
        min_floor.max(fraction(min_pct)),
        max_floor.max(fraction(max_pct)),
    ))
}

fn insurance_sentence(tier: Option<InsuranceTier>, cost: f64) -> String {
    match (tier, insurance_savings_range(tier, cost)) {
        (Some(InsuranceTier::Most), Some((min, max))) => format!(
            "Most plans cover this medication. You may save **${}–${}** per month with insurance.",
            min, max
        ),
        (Some(InsuranceTier::Partial), Some((min, max))) => format!(
            "Some plans offer partial coverage. Estimated savings: **${}–${}** monthly.",
            min, max
        ),
        (Some(InsuranceTier::Limited), _) => {
            "Only a few plans cover this drug. Savings may be small or none.".to_string()
        }
        _ => "This medication is not covered. Expect to pay the full price out of pocket."
            .to_string(),
    }
}

/// Render the paragraph justifying `alternative` over `original`.
pub fn explain_recommendation(original: &MedicationRecord, alternative: &Recommendation) -> String {
    let savings = original.avg_cost - alternative.avg_cost;
    let percent = whole_savings_percent(original.avg_cost, alternative.avg_cost);

    format!(
        "I recommend **{} ({})** as an alternative to **{}**.\n\n\
         It costs **${:.2} per month**, which is **${:.2} less** than **{}** \
         (a savings of about **{}%**).\n\n\
         **Insurance Coverage:** {}\n\n\
         Both medications are in the **{}** class and work in similar ways.",
        alternative.name,
        alternative.generic_or_name(),
        original.name,
        alternative.avg_cost,
        savings,
        original.name,
        percent,
        insurance_sentence(alternative.insurance, alternative.avg_cost),
        original.drug_class,
    )
}
