use thiserror::Error;

use crate::{rewrite::beta_step, term::Term};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("No normal form found within {limit} steps")]
    StepLimitExceeded { limit: usize, trace: Vec<Term> },
}
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Outcome of a successful normalization: the normal form together with
/// every term visited on the way there, the input first.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Normalization {
    pub term: Term,
    pub trace: Vec<Term>,
}

impl Normalization {
    pub fn steps(&self) -> usize {
        self.trace.len() - 1
    }
}

/// Repeatedly applies [`beta_step`] until the term stops changing, or until
/// `max_steps` reductions have been applied without reaching a fixed point.
/// A term already at its fixed point succeeds under any limit, including
/// zero. An unbounded call diverges on terms whose reducts grow forever.
pub fn normalize(term: Term, max_steps: Option<usize>) -> Result<Normalization> {
    let mut current = term;
    let mut trace = vec![current.clone()];
    loop {
        let next = beta_step(&current);
        if next == current {
            return Ok(Normalization {
                term: current,
                trace,
            });
        }
        if let Some(limit) = max_steps {
            if trace.len() > limit {
                return Err(NormalizeError::StepLimitExceeded { limit, trace });
            }
        }
        trace.push(next.clone());
        current = next;
    }
}
