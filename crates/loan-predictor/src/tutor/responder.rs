use super::topics::{Topic, TopicRule, DEFAULT_RESPONSE, STANDARD_RULES};

/// Answers free-text questions from an ordered table of keyword rules.
#[derive(Debug, Clone)]
pub struct TutorResponder {
    rules: Vec<TopicRule>,
    fallback: &'static str,
}

impl TutorResponder {
    pub fn standard() -> Self {
        Self::with_rules(STANDARD_RULES.to_vec(), DEFAULT_RESPONSE)
    }

    pub fn with_rules(rules: Vec<TopicRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    fn matching_rule(&self, question: &str) -> Option<&TopicRule> {
        let question = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&question))
    }

    pub fn classify(&self, question: &str) -> Option<Topic> {
        self.matching_rule(question).map(|rule| rule.topic)
    }

    pub fn answer(&self, question: &str) -> &'static str {
        self.matching_rule(question)
            .map(|rule| rule.response)
            .unwrap_or(self.fallback)
    }
}

impl Default for TutorResponder {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor::topics::{Matcher, QUICK_QUESTIONS};

    #[test]
    fn matches_topics_case_insensitively() {
        let tutor = TutorResponder::standard();

        assert_eq!(
            tutor.classify("Why is CREDIT HISTORY so important?"),
            Some(Topic::CreditHistory)
        );
        assert_eq!(tutor.classify("What salary do I need?"), Some(Topic::Income));
        assert_eq!(
            tutor.classify("Can a guarantor help?"),
            Some(Topic::CoApplicant)
        );
        assert_eq!(tutor.classify("Is this biased?"), Some(Topic::Fairness));
    }

    #[test]
    fn earlier_rules_take_precedence() {
        let tutor = TutorResponder::standard();

        // income sits above loan amount
        assert_eq!(
            tutor.classify("Should my loan amount match my income?"),
            Some(Topic::Income)
        );
        // "explain" wins over "rejected"
        assert_eq!(
            tutor.classify("Explain why I was rejected"),
            Some(Topic::Explainability)
        );
        // "what" + "ai" is checked first even when other keywords appear
        assert_eq!(
            tutor.classify("What does the AI think of my credit history?"),
            Some(Topic::AiBasics)
        );
    }

    #[test]
    fn all_matcher_requires_every_keyword() {
        let tutor = TutorResponder::standard();

        assert_ne!(tutor.classify("my credit score"), Some(Topic::CreditHistory));
        assert!(Matcher::All(&["credit", "history"]).matches("credit history"));
        assert!(!Matcher::All(&["credit", "history"]).matches("credit"));
    }

    #[test]
    fn falls_back_to_default_response() {
        let tutor = TutorResponder::standard();

        assert_eq!(tutor.classify("hello there"), None);
        assert_eq!(tutor.answer("hello there"), DEFAULT_RESPONSE);
        assert_eq!(tutor.answer(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn quick_questions_all_hit_a_topic() {
        let tutor = TutorResponder::standard();
        let topics: Vec<_> = QUICK_QUESTIONS
            .iter()
            .map(|question| tutor.classify(question))
            .collect();

        assert_eq!(
            topics,
            vec![
                Some(Topic::AiBasics),
                Some(Topic::CreditHistory),
                Some(Topic::Improvement),
                Some(Topic::Rejection),
                Some(Topic::Explainability),
            ]
        );
    }

    #[test]
    fn custom_tables_are_respected() {
        let tutor = TutorResponder::with_rules(
            vec![TopicRule {
                topic: Topic::Fairness,
                matcher: Matcher::Any(&["equal"]),
                response: "equal treatment",
            }],
            "no idea",
        );

        assert_eq!(tutor.answer("Is everyone treated EQUALLY?"), "equal treatment");
        assert_eq!(tutor.answer("credit history"), "no idea");
    }
}
