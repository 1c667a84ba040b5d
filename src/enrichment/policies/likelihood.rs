use crate::enrichment::domain::{AccessVector, Complexity, Likelihood};

/// Derives a qualitative likelihood from how a vulnerability is reached
/// and how complex the attack is.
///
/// Remote, low-complexity issues are the most likely to be exploited;
/// local and physical vectors the least. An unknown access vector yields
/// an unknown likelihood rather than a guessed one.
pub fn derive_likelihood(access: AccessVector, complexity: Complexity) -> Likelihood {
    match access {
        AccessVector::Network if complexity == Complexity::Low => Likelihood::VeryHigh,
        AccessVector::Network => Likelihood::High,
        AccessVector::AdjacentNetwork => Likelihood::Medium,
        AccessVector::Unknown => Likelihood::Unknown,
        AccessVector::Local | AccessVector::Physical => Likelihood::Low,
    }
}
