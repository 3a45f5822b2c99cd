//! Candidate partitioning and the adversarial response
//!
//! Given a guess, every candidate falls into exactly one group keyed by the
//! feedback it would produce. The adversary answers with the largest group.

use crate::core::{Feedback, Pattern, Word};
use rustc_hash::FxHashMap;

/// Candidates that all produce the same feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackGroup {
    pub feedback: Feedback,
    pub members: Vec<Word>,
}

impl FeedbackGroup {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn pattern(&self) -> Pattern {
        self.feedback.pattern()
    }
}

/// Feedback to show for a guess and the candidates that survive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub feedback: Feedback,
    pub remaining: Vec<Word>,
}

impl From<FeedbackGroup> for Response {
    fn from(group: FeedbackGroup) -> Self {
        Self {
            feedback: group.feedback,
            remaining: group.members,
        }
    }
}

/// Group `candidates` by the feedback `guess` would receive against each
///
/// Groups appear in the order their first member appears in `candidates`,
/// and members keep their input order.
#[must_use]
pub fn partition(guess: &Word, candidates: &[Word]) -> Vec<FeedbackGroup> {
    let mut index: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut groups: Vec<FeedbackGroup> = Vec::new();

    for candidate in candidates {
        let feedback = Feedback::evaluate(guess, candidate);
        let slot = *index.entry(feedback.pattern()).or_insert_with(|| {
            groups.push(FeedbackGroup {
                feedback,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(candidate.clone());
    }

    groups
}

/// Pick the feedback that keeps the most candidates alive
///
/// Ties go to the group encountered first. Returns `None` only when
/// `candidates` is empty.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::Word;
/// use adversarial_wordle::resolver::select_adversarial_response;
///
/// let candidates: Vec<Word> = ["crane", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crate").unwrap();
///
/// let response = select_adversarial_response(&guess, &candidates).unwrap();
///
/// // Three singleton groups: CRANE's comes first, so CRATE is not a win
/// assert!(!response.feedback.is_all_correct());
/// assert_eq!(response.remaining, vec![Word::new("crane").unwrap()]);
/// ```
#[must_use]
pub fn select_adversarial_response(guess: &Word, candidates: &[Word]) -> Option<Response> {
    largest_group(partition(guess, candidates)).map(Response::from)
}

/// First group with the strictly largest member count
fn largest_group(groups: Vec<FeedbackGroup>) -> Option<FeedbackGroup> {
    let mut best: Option<FeedbackGroup> = None;

    for group in groups {
        let better = best.as_ref().is_none_or(|b| group.len() > b.len());
        if better {
            best = Some(group);
        }
    }

    best
}
