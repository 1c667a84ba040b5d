/// Pure derivation rules applied to canonical vulnerability data.
pub mod likelihood;

pub use likelihood::derive_likelihood;
