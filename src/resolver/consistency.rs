//! History consistency checks
//!
//! A word is consistent with a history when, had it been the secret, every
//! recorded guess would have received exactly its recorded feedback.

use crate::core::{Feedback, GuessRecord, Word};

/// Check whether `word` reproduces every record in `history`
///
/// Stops at the first mismatch. The answer does not depend on record order.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::{GuessRecord, Word};
/// use adversarial_wordle::resolver::is_consistent;
///
/// let answer = Word::new("slate").unwrap();
/// let history = vec![GuessRecord::scored(Word::new("crane").unwrap(), &answer)];
///
/// assert!(is_consistent(&answer, &history));
/// assert!(!is_consistent(&Word::new("crane").unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, history: &[GuessRecord]) -> bool {
    history.iter().all(|record| {
        Feedback::evaluate(record.guess(), word).same_states(record.feedback())
    })
}

/// Words from `words` that are consistent with `history`, in input order
#[must_use]
pub fn filter_consistent(words: &[Word], history: &[GuessRecord]) -> Vec<Word> {
    if history.is_empty() {
        return words.to_vec();
    }

    words
        .iter()
        .filter(|&word| is_consistent(word, history))
        .cloned()
        .collect()
}
