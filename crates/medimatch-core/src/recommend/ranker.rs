//! Budget and allergy filtering, cost ranking, truncation.

use tracing::debug;

use crate::models::{Constraint, Recommendation};

/// Drop recommendations costing more than `budget`.
pub fn filter_by_budget(recommendations: Vec<Recommendation>, budget: f64) -> Vec<Recommendation> {
    recommendations
        .into_iter()
        .filter(|rec| rec.avg_cost <= budget)
        .collect()
}

/// Drop recommendations whose explanation or side effects mention any term.
///
/// Plain substring containment against free text, so common words can
/// over-filter. Terms must already be lowercased.
pub fn filter_by_allergies(recommendations: Vec<Recommendation>, terms: &[String]) -> Vec<Recommendation> {
    if terms.is_empty() {
        return recommendations;
    }
    recommendations
        .into_iter()
        .filter(|rec| {
            let side_effects = rec.side_effects.to_lowercase();
            let explanation = rec.explanation.to_lowercase();
            !terms
                .iter()
                .any(|term| side_effects.contains(term.as_str()) || explanation.contains(term.as_str()))
        })
        .collect()
}

/// Whether any user term and any of a record's restrictions contain one another.
///
/// `restrictions` is comma-separated; a missing value or the literal "None"
/// never conflicts. Terms must already be lowercased.
pub fn conflicts_with_restrictions(terms: &[String], restrictions: Option<&str>) -> bool {
    let Some(restrictions) = restrictions.map(str::trim) else {
        return false;
    };
    if terms.is_empty() || restrictions.is_empty() || restrictions.eq_ignore_ascii_case("none") {
        return false;
    }
    let listed: Vec<String> = restrictions
        .split(',')
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();
    terms.iter().any(|term| {
        listed
            .iter()
            .any(|r| r.contains(term.as_str()) || term.contains(r.as_str()))
    })
}

/// Stable ascending sort by monthly cost.
pub fn sort_by_cost(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| a.avg_cost.total_cmp(&b.avg_cost));
}

/// Apply the constraint filters, sort by cost, and keep the first `limit`.
pub fn filter_and_rank(
    recommendations: Vec<Recommendation>,
    constraint: &Constraint,
    limit: usize,
) -> Vec<Recommendation> {
    let before = recommendations.len();

    let mut ranked = match constraint.effective_budget() {
        Some(budget) => filter_by_budget(recommendations, budget),
        None => recommendations,
    };
    let after_budget = ranked.len();

    ranked = filter_by_allergies(ranked, &constraint.allergy_terms());

    debug!(
        candidates = before,
        over_budget = before - after_budget,
        allergy_matches = after_budget - ranked.len(),
        "filtered recommendations"
    );

    sort_by_cost(&mut ranked);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationCategory;

    fn rec(name: &str, cost: f64) -> Recommendation {
        Recommendation {
            name: name.into(),
            generic_name: None,
            drug_class: "Statin".into(),
            avg_cost: cost,
            category: RecommendationCategory::CheaperSameClass,
            savings: 0.0,
            savings_percent: 0.0,
            explanation: format!("{} is in the same drug class", name),
            side_effects: "Headache, Nausea".into(),
            source: String::new(),
            availability: None,
            insurance: None,
            risk: None,
            contraindications: Vec::new(),
            treatment_type: None,
        }
    }

    fn names(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_budget_keeps_affordable() {
        let constraint = Constraint::new("Lipitor").with_budget(10.0);
        let ranked = filter_and_rank(vec![rec("Pricey", 20.0), rec("Cheap", 5.0)], &constraint, 5);
        assert_eq!(names(&ranked), vec!["Cheap"]);
    }

    #[test]
    fn test_budget_boundary_inclusive() {
        let constraint = Constraint::new("Lipitor").with_budget(20.0);
        let ranked = filter_and_rank(vec![rec("Exact", 20.0)], &constraint, 5);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_zero_or_negative_budget_ignored() {
        for budget in [0.0, -3.0] {
            let constraint = Constraint::new("Lipitor").with_budget(budget);
            let ranked = filter_and_rank(vec![rec("A", 20.0), rec("B", 5.0)], &constraint, 5);
            assert_eq!(ranked.len(), 2);
        }
    }

    #[test]
    fn test_allergy_matches_side_effects_or_explanation() {
        let mut rash = rec("Rashy", 5.0);
        rash.side_effects = "Rash, Itching".into();
        let mut grapefruit = rec("Fruity", 6.0);
        grapefruit.explanation = "Avoid grapefruit juice".into();
        let plain = rec("Plain", 7.0);

        let constraint = Constraint::new("Lipitor").with_allergies(" RASH , Grapefruit");
        let ranked = filter_and_rank(vec![rash, grapefruit, plain], &constraint, 5);
        assert_eq!(names(&ranked), vec!["Plain"]);
    }

    #[test]
    fn test_blank_allergy_terms_ignored() {
        let constraint = Constraint::new("Lipitor").with_allergies(" , ,");
        let ranked = filter_and_rank(vec![rec("A", 1.0), rec("B", 2.0)], &constraint, 5);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_sort_is_stable_and_truncated() {
        let input = vec![
            rec("D", 20.0),
            rec("A", 18.0),
            rec("B", 20.0),
            rec("C", 20.0),
            rec("E", 1.0),
            rec("F", 30.0),
            rec("G", 25.0),
        ];
        let ranked = filter_and_rank(input, &Constraint::new("Lipitor"), 5);
        assert_eq!(names(&ranked), vec!["E", "A", "D", "B", "C"]);
    }

    #[test]
    fn test_restriction_conflict_matches_either_direction() {
        let terms = vec!["pregnancy".to_string()];
        assert!(conflicts_with_restrictions(&terms, Some("Liver disease, pregnancy")));

        // User term contains the listed restriction
        let terms = vec!["chronic kidney disease".to_string()];
        assert!(conflicts_with_restrictions(&terms, Some("Kidney disease")));

        // Listed restriction contains the user term
        let terms = vec!["liver".to_string()];
        assert!(conflicts_with_restrictions(&terms, Some("Liver disease")));

        let terms = vec!["glaucoma".to_string()];
        assert!(!conflicts_with_restrictions(&terms, Some("Liver disease, pregnancy")));
    }

    #[test]
    fn test_restriction_conflict_ignores_missing_restrictions() {
        let terms = vec!["none".to_string(), "liver".to_string()];
        assert!(!conflicts_with_restrictions(&terms, None));
        assert!(!conflicts_with_restrictions(&terms, Some("None")));
        assert!(!conflicts_with_restrictions(&terms, Some("  ")));
        assert!(!conflicts_with_restrictions(&[], Some("Liver disease")));
    }
}
