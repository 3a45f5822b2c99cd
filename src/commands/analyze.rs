//! Guess analysis command
//!
//! Shows how a guess splits the candidate pool and which group the adversary
//! would keep.

use crate::core::Word;
use crate::game::ValidationError;
use crate::resolver::{FeedbackGroup, partition};
use crate::wordlists::WordList;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    pub total_candidates: usize,
    /// Groups ordered largest first; equal sizes keep first-appearance order
    pub groups: Vec<FeedbackGroup>,
}

impl AnalysisResult {
    /// The group the adversary answers with
    #[must_use]
    pub fn adversary_pick(&self) -> Option<&FeedbackGroup> {
        self.groups.first()
    }

    /// Size of the group the adversary keeps
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.adversary_pick().map_or(0, FeedbackGroup::len)
    }

    /// Number of distinct feedback patterns
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the guess could win immediately
    #[must_use]
    pub fn can_win(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.feedback.is_all_correct())
    }
}

/// Partition `candidates` by the feedback `guess` would get
///
/// # Errors
///
/// Returns `ValidationError::UnknownWord` if the guess is not in the dictionary.
pub fn analyze_guess(
    guess: &str,
    dictionary: &WordList,
    candidates: &[Word],
) -> Result<AnalysisResult, ValidationError> {
    let guess = dictionary
        .get(guess)
        .cloned()
        .ok_or_else(|| ValidationError::UnknownWord(guess.trim().to_ascii_uppercase()))?;

    let mut groups = partition(&guess, candidates);
    groups.sort_by(|a, b| b.len().cmp(&a.len()));

    Ok(AnalysisResult {
        guess,
        total_candidates: candidates.len(),
        groups,
    })
}
