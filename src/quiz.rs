//! The compliance check: question table, recorded answers and the flags
//! derived from them.
//!
//! State lives in a [`QuizState`] owned by the `App` component through
//! `use_reducer` and handed to pages as a [`QuizContext`]. Every flag is
//! recomputed from the [`AnswerSet`] when it is read.

use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

pub type QuestionId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub regulation_note: &'static str,
    pub category: Option<&'static str>,
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        id: 1,
        prompt: "Can you produce your TOMS (Technical & Organisational Measures) and all required data governance documents within 24 hours?",
        regulation_note: "Regulation: Demonstrating immediate compliance is mandatory under NDHC Article 5 and Federal Law No. 2 of 2019.",
        category: Some("Documentation"),
    },
    Question {
        id: 2,
        prompt: "Can you guarantee your team aren't using unauthorised public LLMs or recording patient information with wearables?",
        regulation_note: "Regulation: Staff monitoring and security obligations under ADHICS & NDHC Article 9. Unauthorized recording is against UAE law.",
        category: Some("Staff conduct"),
    },
    Question {
        id: 3,
        prompt: "Do your current consent forms and staff policies explicitly cover the use of AI tools and personal recording technologies?",
        regulation_note: "Governance & accountability are non-negotiable – lack of documented procedures is not a defense against fines.",
        category: Some("Governance"),
    },
];

pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Answers keyed by question id. A missing key means the question is
/// still unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, bool>,
}

impl AnswerSet {
    pub fn get(&self, id: QuestionId) -> Option<bool> {
        self.answers.get(&id).copied()
    }

    /// Stores `value` for `id`, replacing any earlier answer. Ids outside
    /// the question table are rejected and `false` is returned.
    pub fn record(&mut self, id: QuestionId, value: bool) -> bool {
        if question(id).is_none() {
            return false;
        }
        self.answers.insert(id, value);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn all_answered(&self) -> bool {
        QUESTIONS.iter().all(|q| self.answers.contains_key(&q.id))
    }

    pub fn has_any_no(&self) -> bool {
        self.answers.values().any(|answer| !answer)
    }

    pub fn all_yes(&self) -> bool {
        self.all_answered() && !self.has_any_no()
    }

    pub fn status(&self) -> QuizStatus {
        QuizStatus {
            all_answered: self.all_answered(),
            has_any_no: self.has_any_no(),
            all_yes: self.all_yes(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizStatus {
    pub all_answered: bool,
    pub has_any_no: bool,
    pub all_yes: bool,
}

impl QuizStatus {
    /// `None` until every question has an answer.
    pub fn verdict(&self) -> Option<Verdict> {
        if !self.all_answered {
            return None;
        }
        Some(if self.all_yes { Verdict::Compliant } else { Verdict::AtRisk })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    AtRisk,
}

impl Verdict {
    pub fn from_has_any_no(has_any_no: bool) -> Self {
        if has_any_no {
            Verdict::AtRisk
        } else {
            Verdict::Compliant
        }
    }

    /// One-line banner shown under the questions once all are answered.
    pub fn banner(self) -> &'static str {
        match self {
            Verdict::Compliant => "Excellent! You show high compliance.",
            Verdict::AtRisk => "Risk Detected! You have critical areas of exposure.",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Verdict::Compliant => "Compliance Confirmed. Next Steps.",
            Verdict::AtRisk => "Immediate Action Recommended.",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Compliant => "Your foundation is strong! Now, let's verify every detail and ensure you have the full documentation (TOMS) required for inspection.",
            Verdict::AtRisk => "Your 30-Second Check identified critical gaps in governance, staff training, or policy required by UAE law. Don't risk AED 2M fines.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Compliant => "✓",
            Verdict::AtRisk => "✕",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Compliant => "compliant",
            Verdict::AtRisk => "at-risk",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    pub answers: AnswerSet,
}

impl QuizState {
    pub fn status(&self) -> QuizStatus {
        self.answers.status()
    }
}

pub enum QuizAction {
    Answer { id: QuestionId, value: bool },
    Reset,
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            QuizAction::Answer { id, value } => {
                // Same answer again: keep the Rc so nothing re-renders
                if self.answers.get(id) == Some(value) {
                    return self;
                }
                let mut answers = self.answers.clone();
                if !answers.record(id, value) {
                    warn!("Ignoring answer for unknown question {}", id);
                    return self;
                }
                debug!("Recorded answer {} for question {}", value, id);
                Rc::new(QuizState { answers })
            }
            QuizAction::Reset => {
                if self.answers.is_empty() {
                    return self;
                }
                debug!("Clearing {} recorded answers", self.answers.answered_count());
                Rc::new(QuizState::default())
            }
        }
    }
}

/// Handle the pages use to read the quiz and dispatch [`QuizAction`]s.
pub type QuizContext = UseReducerHandle<QuizState>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn answers(pairs: &[(QuestionId, bool)]) -> AnswerSet {
        let mut set = AnswerSet::default();
        for &(id, value) in pairs {
            set.record(id, value);
        }
        set
    }

    #[test]
    fn question_ids_are_one_to_three() {
        let ids: Vec<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_set_is_unanswered() {
        let status = AnswerSet::default().status();
        assert!(!status.all_answered);
        assert!(!status.has_any_no);
        assert!(!status.all_yes);
        assert_eq!(status.verdict(), None);
    }

    #[test]
    fn all_yes_is_compliant() {
        let status = answers(&[(1, true), (2, true), (3, true)]).status();
        assert_eq!(
            status,
            QuizStatus { all_answered: true, has_any_no: false, all_yes: true }
        );
        assert_eq!(status.verdict(), Some(Verdict::Compliant));
    }

    #[test]
    fn one_no_is_at_risk() {
        let status = answers(&[(1, true), (2, false), (3, true)]).status();
        assert_eq!(
            status,
            QuizStatus { all_answered: true, has_any_no: true, all_yes: false }
        );
        assert_eq!(status.verdict(), Some(Verdict::AtRisk));
    }

    #[test]
    fn missing_third_answer_keeps_quiz_incomplete() {
        let status = answers(&[(1, true), (2, true)]).status();
        assert!(!status.all_answered);
        assert!(!status.all_yes);
        assert_eq!(status.verdict(), None);
    }

    #[test]
    fn early_no_is_visible_before_completion() {
        let status = answers(&[(2, false)]).status();
        assert!(status.has_any_no);
        assert!(!status.all_answered);
    }

    #[test]
    fn last_write_wins() {
        let set = answers(&[(1, true), (1, false)]);
        assert_eq!(set.get(1), Some(false));
        assert_eq!(set.answered_count(), 1);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut set = AnswerSet::default();
        assert!(!set.record(0, true));
        assert!(!set.record(4, false));
        assert!(set.is_empty());
        assert!(!set.has_any_no());
    }

    #[test]
    fn results_copy_differs_by_verdict() {
        assert_eq!(Verdict::from_has_any_no(true).title(), "Immediate Action Recommended.");
        assert_eq!(Verdict::from_has_any_no(false).title(), "Compliance Confirmed. Next Steps.");
        assert_ne!(Verdict::AtRisk.message(), Verdict::Compliant.message());
    }

    #[test]
    fn repeated_answer_returns_same_state() {
        let state = Rc::new(QuizState::default());
        let once = state.reduce(QuizAction::Answer { id: 1, value: true });
        let twice = once.clone().reduce(QuizAction::Answer { id: 1, value: true });
        assert!(Rc::ptr_eq(&once, &twice));
        assert_eq!(twice.answers.get(1), Some(true));
    }

    #[test]
    fn unknown_answer_leaves_state_untouched() {
        let state = Rc::new(QuizState::default())
            .reduce(QuizAction::Answer { id: 2, value: false });
        let after = state.clone().reduce(QuizAction::Answer { id: 9, value: true });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn unknown_answer_on_fresh_state_records_nothing() {
        let state = Rc::new(QuizState::default());
        for id in [0, 4, u8::MAX] {
            let after = state.clone().reduce(QuizAction::Answer { id, value: false });
            assert!(Rc::ptr_eq(&state, &after));
            assert!(after.answers.is_empty());
            assert!(!after.status().has_any_no);
        }
    }

    #[test]
    fn reset_clears_answers() {
        let state = Rc::new(QuizState::default())
            .reduce(QuizAction::Answer { id: 1, value: true })
            .reduce(QuizAction::Answer { id: 2, value: false })
            .reduce(QuizAction::Answer { id: 3, value: true });
        assert!(state.status().all_answered);

        let state = state.reduce(QuizAction::Reset);
        assert!(state.answers.is_empty());
        assert_eq!(state.status().verdict(), None);
    }

    proptest! {
        #[test]
        fn flags_follow_recorded_answers(
            writes in proptest::collection::vec((0u8..6, any::<bool>()), 0..12)
        ) {
            let mut state = Rc::new(QuizState::default());
            let mut expected: HashMap<QuestionId, bool> = HashMap::new();
            for &(id, value) in &writes {
                state = state.reduce(QuizAction::Answer { id, value });
                if (1..=3).contains(&id) {
                    expected.insert(id, value);
                }
            }

            let status = state.status();
            let has_no = expected.values().any(|v| !v);
            prop_assert_eq!(state.answers.answered_count(), expected.len());
            prop_assert_eq!(status.all_answered, expected.len() == 3);
            prop_assert_eq!(status.has_any_no, has_no);
            prop_assert_eq!(status.all_yes, expected.len() == 3 && !has_no);
            for (id, value) in &expected {
                prop_assert_eq!(state.answers.get(*id), Some(*value));
            }
        }
    }
}
