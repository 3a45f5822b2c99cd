//! Response policies
//!
//! Defines the `ResponsePolicy` trait and its two implementations: the
//! adversary that never commits to a word, and the classic game that does.

use super::partition::{Response, select_adversarial_response};
use crate::core::{Feedback, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// How the game answers a guess
pub trait ResponsePolicy {
    /// Feedback for `guess` and the subset of `candidates` that survives it
    ///
    /// Returns `None` when no candidate can survive, which means the pool and
    /// the policy have fallen out of step.
    fn respond(&self, guess: &Word, candidates: &[Word]) -> Option<Response>;

    /// The committed secret, if this policy has one
    fn secret(&self) -> Option<&Word> {
        None
    }
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of policy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum PolicyType {
    /// Keep the largest feedback group alive (default)
    Adversarial(AdversarialPolicy),
    /// Classic Wordle against a fixed secret
    FixedTarget(FixedTargetPolicy),
}

impl ResponsePolicy for PolicyType {
    fn respond(&self, guess: &Word, candidates: &[Word]) -> Option<Response> {
        match self {
            Self::Adversarial(p) => p.respond(guess, candidates),
            Self::FixedTarget(p) => p.respond(guess, candidates),
        }
    }

    fn secret(&self) -> Option<&Word> {
        match self {
            Self::Adversarial(p) => p.secret(),
            Self::FixedTarget(p) => p.secret(),
        }
    }
}

/// Answers every guess with the feedback that eliminates the fewest candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct AdversarialPolicy;

impl ResponsePolicy for AdversarialPolicy {
    fn respond(&self, guess: &Word, candidates: &[Word]) -> Option<Response> {
        select_adversarial_response(guess, candidates)
    }
}

/// Scores every guess against one secret chosen up front
#[derive(Debug, Clone)]
pub struct FixedTargetPolicy {
    target: Word,
}

impl FixedTargetPolicy {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    /// Choose the secret uniformly from `words` using `rng`
    ///
    /// Returns `None` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::Word;
    /// use adversarial_wordle::resolver::{FixedTargetPolicy, ResponsePolicy};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let policy = FixedTargetPolicy::random(&words, &mut rng).unwrap();
    ///
    /// assert!(words.contains(policy.secret().unwrap()));
    /// ```
    pub fn random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Self> {
        words.choose(rng).cloned().map(Self::new)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl ResponsePolicy for FixedTargetPolicy {
    fn respond(&self, guess: &Word, candidates: &[Word]) -> Option<Response> {
        let feedback = Feedback::evaluate(guess, &self.target);

        let remaining: Vec<Word> = candidates
            .iter()
            .filter(|&c| Feedback::evaluate(guess, c).same_states(&feedback))
            .cloned()
            .collect();

        if remaining.is_empty() {
            return None;
        }

        Some(Response {
            feedback,
            remaining,
        })
    }

    fn secret(&self) -> Option<&Word> {
        Some(&self.target)
    }
}
