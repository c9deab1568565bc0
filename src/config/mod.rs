use crate::pipeline::domain::RejectionClass;
use serde::{Deserialize, Serialize};

/// One classification rule: a remark containing `token` (case-insensitive)
/// is assigned `class`. Position in the table is the rule's priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub token: String,
    pub class: RejectionClass,
}

impl ClassifierRule {
    pub fn new(token: impl Into<String>, class: RejectionClass) -> Self {
        Self {
            token: token.into(),
            class,
        }
    }
}

/// Ordered rule table for the rejection classifier. Earlier rules win when a
/// remark matches more than one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub rules: Vec<ClassifierRule>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                ClassifierRule::new("Fake_document", RejectionClass::FakeDocument),
                ClassifierRule::new("Not_Covered", RejectionClass::NotCovered),
                ClassifierRule::new("Policy_expired", RejectionClass::PolicyExpired),
            ],
        }
    }
}

/// Weights blending normalized profit and profit margin into the closure
/// composite score. Lower scores read as weaker performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub profit_weight: f64,
    pub margin_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            profit_weight: 0.6,
            margin_weight: 0.4,
        }
    }
}

/// Top-level analysis configuration. The host process decides where this
/// comes from; the defaults reproduce the documented behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub classifier: ClassifierConfig,
    pub scoring: ScoringConfig,
}
