//! Rule Fallback Engine: ordered keyword triggers with canned replies.
//!
//! A rule fires when the lowercased query contains any of its triggers as a
//! plain substring, so "deadline" also fires inside "deadlines". Rules are
//! tried in order and the first hit wins.

/// One trigger set and the reply it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRule {
    pub name: &'static str,
    pub triggers: Vec<String>,
    pub reply: String,
    pub score: f32,
}

impl KeywordRule {
    pub fn new(name: &'static str, triggers: &[&str], reply: impl Into<String>, score: f32) -> Self {
        Self {
            name,
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            reply: reply.into(),
            score,
        }
    }

    fn fires_on(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}

/// Reply produced by a fired rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleHit<'a> {
    pub rule: &'a str,
    pub reply: &'a str,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<KeywordRule>,
}

impl Default for RuleEngine {
    /// Admissions, then contact, then website.
    ///
    /// The website rule scores 0.9 while the other two score 0.6; the values
    /// are kept as they are.
    fn default() -> Self {
        Self::new(vec![
            KeywordRule::new(
                "admissions",
                &["admission", "admissions", "deadline", "apply"],
                "Admissions deadlines vary by program; please check the admissions page or email admissions@college.edu.",
                0.6,
            ),
            KeywordRule::new(
                "contact",
                &["contact", "phone", "call", "email"],
                "You can contact admin at admin@college.edu or call +1-555-1234.",
                0.6,
            ),
            KeywordRule::new(
                "website",
                &["website", "link", "url"],
                "You can visit our college website at http://127.0.0.1:5000/.",
                0.9,
            ),
        ])
    }
}

impl RuleEngine {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// First rule whose trigger occurs in `lowered`. Expects lowercase input.
    pub fn try_rules(&self, lowered: &str) -> Option<RuleHit<'_>> {
        self.rules
            .iter()
            .find(|r| r.fires_on(lowered))
            .map(|r| RuleHit {
                rule: r.name,
                reply: &r.reply,
                score: r.score,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_containment_fires() {
        let e = RuleEngine::default();
        assert_eq!(e.try_rules("admission deadline question").unwrap().rule, "admissions");
        // "deadline" inside an unrelated word still counts
        assert_eq!(e.try_rules("deadlines-ish").unwrap().rule, "admissions");
        assert_eq!(e.try_rules("recall the details").unwrap().rule, "contact");
        assert_eq!(e.try_rules("hyperlinked").unwrap().rule, "website");
    }

    #[test]
    fn first_rule_in_order_wins() {
        let e = RuleEngine::default();
        let hit = e.try_rules("contact me about admission deadline").unwrap();
        assert_eq!(hit.rule, "admissions");
        assert_eq!(hit.score, 0.6);

        let hit = e.try_rules("email or website").unwrap();
        assert_eq!(hit.rule, "contact");
    }

    #[test]
    fn reference_scores_are_kept() {
        let scores: Vec<f32> = RuleEngine::default().rules().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.6, 0.6, 0.9]);
        assert_eq!(RuleEngine::default().try_rules("url please").unwrap().score, 0.9);
    }

    #[test]
    fn no_trigger_means_no_hit() {
        assert!(RuleEngine::default().try_rules("asdkjasd random gibberish").is_none());
        assert!(RuleEngine::new(Vec::new()).try_rules("apply").is_none());
    }

    #[test]
    fn custom_order_is_respected() {
        let e = RuleEngine::new(vec![
            KeywordRule::new("b", &["x"], "B", 0.5),
            KeywordRule::new("a", &["x"], "A", 0.7),
        ]);
        assert_eq!(e.try_rules("xx").unwrap().reply, "B");
    }
}
