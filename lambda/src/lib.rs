//! Symbolic rewriting for untyped lambda-calculus terms: substitution,
//! alpha-renaming, one-step beta/eta reduction, and a normalization loop
//! driving one-step reduction to a fixed point.

pub mod normalize;
pub mod rewrite;
pub mod term;

pub use normalize::{normalize, Normalization, NormalizeError};
pub use rewrite::{alpha_rename, beta_step, eta_step, substitute, RewriteError};
pub use term::{Name, Term};
