use glob::{MatchOptions, Pattern};
use metalint_project::RulesConfig;
use tracing::debug;

/// Which rules run, by id.
///
/// A rule matching any `deny` pattern is skipped. With a non-empty `allow`
/// list, only rules matching one of its patterns run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePolicy {
    pub allow: Vec<String>,
    pub deny: Vec<String>,
}

impl RulePolicy {
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            allow: config.allow.clone(),
            deny: config.deny.clone(),
        }
    }

    pub fn enables(&self, rule_id: &str) -> bool {
        if self.deny.iter().any(|pat| glob_match(pat, rule_id)) {
            return false;
        }
        self.allow.is_empty() || self.allow.iter().any(|pat| glob_match(pat, rule_id))
    }
}

/// `*` also crosses `/`, so `*` alone selects every rule.
const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Match a rule id against a policy pattern (`*`, `?`, `[...]`).
///
/// A pattern `glob` rejects only matches the identical id.
pub fn glob_match(pat: &str, text: &str) -> bool {
    match Pattern::new(pat) {
        Ok(pattern) => pattern.matches_with(text, OPTIONS),
        Err(e) => {
            debug!(pattern = pat, error = %e, "invalid rule pattern, matching literally");
            pat == text
        }
    }
}
