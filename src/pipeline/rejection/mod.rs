use crate::config::ClassifierConfig;
use crate::pipeline::domain::RejectionClass;

/// Stateless classifier applying an ordered substring rule table to
/// rejection remarks. Tokens are lowered once at construction; matching is a
/// first-match scan in table order.
pub struct RejectionClassifier {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    token: String,
    class: RejectionClass,
}

impl RejectionClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        let rules = config
            .rules
            .into_iter()
            .map(|rule| CompiledRule {
                token: rule.token.to_lowercase(),
                class: rule.class,
            })
            .collect();

        Self { rules }
    }

    /// Total over its input: always yields a category, never a fault.
    /// Empty and whitespace-only remarks are `InvalidRemark`; a non-empty
    /// remark matching no rule is `Unknown`. Absent remarks are the caller's
    /// concern and never reach this function.
    pub fn classify(&self, remark: &str) -> RejectionClass {
        if remark.trim().is_empty() {
            return RejectionClass::InvalidRemark;
        }

        let haystack = remark.to_lowercase();
        for rule in &self.rules {
            if haystack.contains(&rule.token) {
                return rule.class;
            }
        }

        RejectionClass::Unknown
    }
}

impl Default for RejectionClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
