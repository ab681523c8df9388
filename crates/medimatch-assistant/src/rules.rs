//! Ordered keyword dispatch table.
//!
//! Rules are evaluated top to bottom and the first rule whose predicate
//! matches answers the question. Predicates overlap (a question about the
//! safety of supplements mentions both "safe" and "supplement"), so the
//! order of [`RULES`] is part of the contract.

use serde::{Deserialize, Serialize};

use crate::context::QuestionContext;
use crate::handlers;

/// The kind of question that was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    DifferenceBetween,
    SavingsEstimate,
    WithoutInsurance,
    WhatDoesItTreat,
    SupplementsHelpful,
    NoAlternativeFound,
    WhyCheaper,
    Safety,
    DrugClassInfo,
    AlcoholInteraction,
    DrugInteraction,
    SupplementInteraction,
    SupplementInfo,
    /// No rule matched.
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::DifferenceBetween => "difference_between",
            Intent::SavingsEstimate => "savings_estimate",
            Intent::WithoutInsurance => "without_insurance",
            Intent::WhatDoesItTreat => "what_does_it_treat",
            Intent::SupplementsHelpful => "supplements_helpful",
            Intent::NoAlternativeFound => "no_alternative_found",
            Intent::WhyCheaper => "why_cheaper",
            Intent::Safety => "safety",
            Intent::DrugClassInfo => "drug_class_info",
            Intent::AlcoholInteraction => "alcohol_interaction",
            Intent::DrugInteraction => "drug_interaction",
            Intent::SupplementInteraction => "supplement_interaction",
            Intent::SupplementInfo => "supplement_info",
            Intent::Fallback => "fallback",
        }
    }
}

/// A question together with the contexts it was asked against.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    /// Lowercased question text
    pub text: String,
    pub medication: Option<&'a QuestionContext>,
    pub alternative: Option<&'a QuestionContext>,
}

impl<'a> Query<'a> {
    pub fn new(
        question: &str,
        medication: Option<&'a QuestionContext>,
        alternative: Option<&'a QuestionContext>,
    ) -> Self {
        Self {
            text: question.to_lowercase(),
            medication,
            alternative,
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }

    fn has_both_contexts(&self) -> bool {
        self.medication.is_some() && self.alternative.is_some()
    }
}

/// One entry of the dispatch table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    predicate: fn(&Query<'_>) -> bool,
    handler: fn(&Query<'_>) -> String,
}

impl Rule {
    /// Check whether this rule applies to the query.
    pub fn matches(&self, query: &Query<'_>) -> bool {
        (self.predicate)(query)
    }

    /// Render this rule's response.
    pub fn respond(&self, query: &Query<'_>) -> String {
        (self.handler)(query)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("intent", &self.intent).finish()
    }
}

const WHY_CHEAPER_TERMS: &[&str] = &["why cheaper", "why less expensive", "why cost less", "price difference"];
const SAFETY_TERMS: &[&str] = &["safe", "safety", "side effect", "dangerous"];
const ALCOHOL_TERMS: &[&str] = &["alcohol", "drink", "beer", "wine"];
const INTERACTION_TERMS: &[&str] = &["mix", "combine", "together", "interaction", "conflict"];
const SUPPLEMENT_NAME_TERMS: &[&str] = &["turmeric", "omega", "vitamin", "zinc", "magnesium", "st. john", "st john"];
const SUPPLEMENT_TOPIC_TERMS: &[&str] = &["supplement", "natural", "alternative treatment"];

/// The dispatch table, in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        intent: Intent::DifferenceBetween,
        predicate: |q| q.contains("difference between") && q.has_both_contexts(),
        handler: handlers::difference_between,
    },
    Rule {
        intent: Intent::SavingsEstimate,
        predicate: |q| q.contains("save") && q.contains("cheaper") && q.has_both_contexts(),
        handler: handlers::savings_estimate,
    },
    Rule {
        intent: Intent::WithoutInsurance,
        predicate: |q| q.contains("without insurance"),
        handler: handlers::without_insurance,
    },
    Rule {
        intent: Intent::WhatDoesItTreat,
        predicate: |q| q.contains("what does") && q.contains("treat"),
        handler: handlers::what_does_it_treat,
    },
    Rule {
        intent: Intent::SupplementsHelpful,
        predicate: |q| q.contains("supplement") && q.contains("helpful"),
        handler: handlers::supplements_helpful,
    },
    Rule {
        intent: Intent::NoAlternativeFound,
        predicate: |q| q.contains("no alternative") || q.contains("why wasn't"),
        handler: handlers::no_alternative_found,
    },
    Rule {
        intent: Intent::WhyCheaper,
        predicate: |q| q.contains_any(WHY_CHEAPER_TERMS),
        handler: handlers::why_cheaper,
    },
    Rule {
        intent: Intent::Safety,
        predicate: |q| q.contains_any(SAFETY_TERMS),
        handler: handlers::safety,
    },
    Rule {
        intent: Intent::DrugClassInfo,
        // Claims every "what is" question once a medication is known, even
        // when its class has no description.
        predicate: |q| q.contains("what is") && q.medication.is_some(),
        handler: handlers::drug_class_info,
    },
    Rule {
        intent: Intent::AlcoholInteraction,
        predicate: |q| q.contains_any(ALCOHOL_TERMS),
        handler: handlers::alcohol_interaction,
    },
    Rule {
        intent: Intent::DrugInteraction,
        predicate: |q| q.contains_any(INTERACTION_TERMS),
        handler: handlers::drug_interaction,
    },
    Rule {
        intent: Intent::SupplementInteraction,
        predicate: |q| q.contains_any(SUPPLEMENT_NAME_TERMS),
        handler: handlers::supplement_interaction,
    },
    Rule {
        intent: Intent::SupplementInfo,
        predicate: |q| q.contains_any(SUPPLEMENT_TOPIC_TERMS),
        handler: handlers::supplement_info,
    },
];

/// Find the first rule that matches the query.
pub fn first_match(query: &Query<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(query))
}
