use std::collections::BTreeSet;

/// A variable or binder name, compared by value.
pub type Name = String;

/// An untyped lambda-calculus term. Subterms are exclusively owned; every
/// rewriting operation produces a fresh tree and never mutates in place.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Name),
    /// `c`, an uninterpreted atom
    Const(String),
    /// `lambda x. t`
    Abs(Name, Box<Term>),
    /// `t t`
    Apply(Box<Term>, Box<Term>),
}

impl Term {
    /// Names occurring free, i.e. not under a binder of the same name.
    pub fn free_variables(&self) -> BTreeSet<Name> {
        use Term::*;
        match self {
            Var(name) => BTreeSet::from([name.clone()]),
            Const(_) => BTreeSet::new(),
            Abs(x, body) => {
                let mut names = body.free_variables();
                names.remove(x);
                names
            }
            Apply(lhs, rhs) => {
                let mut names = lhs.free_variables();
                names.extend(rhs.free_variables());
                names
            }
        }
    }

    /// Names introduced by some abstraction within the term.
    pub fn bound_variables(&self) -> BTreeSet<Name> {
        use Term::*;
        match self {
            Var(_) | Const(_) => BTreeSet::new(),
            Abs(x, body) => {
                let mut names = body.bound_variables();
                names.insert(x.clone());
                names
            }
            Apply(lhs, rhs) => {
                let mut names = lhs.bound_variables();
                names.extend(rhs.bound_variables());
                names
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Const(literal) => f.write_str(literal),
            Term::Abs(x, body) => f.write_fmt(format_args!("λ{x}. {body}")),
            // Every application is parenthesized; chains are never ambiguous.
            Term::Apply(lhs, rhs) => f.write_fmt(format_args!("({lhs}  {rhs})")),
        }
    }
}
