//! The adversarial resolver
//!
//! Consistency checks over guess history, partitioning of a candidate pool by
//! feedback, the response policies built on top of it, and counter-guess
//! search for players who want a hint.

mod consistency;
mod counter;
mod partition;
mod policy;

pub use consistency::{filter_consistent, is_consistent};
pub use counter::{best_counter_guess, worst_case_remaining};
pub use partition::{FeedbackGroup, Response, partition, select_adversarial_response};
pub use policy::{AdversarialPolicy, FixedTargetPolicy, PolicyType, ResponsePolicy};
