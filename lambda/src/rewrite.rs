use std::collections::BTreeSet;

use thiserror::Error;

use crate::term::{Name, Term};

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Cannot alpha-rename `{0}`: not an abstraction")]
    InvalidOperand(Term),
}
pub type Result<T> = std::result::Result<T, RewriteError>;

/// Candidate binder names `a`, ..., `z`, `aa`, `ab`, ... for
/// capture-avoiding renames.
struct NameSupply {
    current: Name,
}

impl NameSupply {
    fn new() -> Self {
        Self {
            current: Name::new(),
        }
    }

    fn next_name(&mut self) -> Name {
        self.increment();
        self.current.clone()
    }

    fn increment(&mut self) {
        match self.current.pop() {
            None => self.current.push('a'),
            Some('z') => {
                self.increment();
                self.current.push('a');
            }
            Some(c) => self.current.push((c as u8 + 1) as char),
        }
    }
}

fn fresh_name(reserved: &BTreeSet<Name>) -> Name {
    let mut supply = NameSupply::new();
    loop {
        let name = supply.next_name();
        if !reserved.contains(&name) {
            return name;
        }
    }
}

/// Structural substitution `base[target := value]`, capture-avoiding: a
/// binder that occurs free in `value` is renamed to a fresh name before the
/// substitution descends under it.
pub fn substitute(base: &Term, target: &str, value: &Term) -> Term {
    use Term::*;
    match base {
        Var(name) if name == target => value.clone(),
        Var(_) | Const(_) => base.clone(),
        Abs(x, body) => {
            if x == target || !body.free_variables().contains(target) {
                // The binder shadows `target`, or `target` has no free
                // occurrence below it.
                base.clone()
            } else if value.free_variables().contains(x.as_str()) {
                let mut reserved = value.free_variables();
                reserved.extend(body.free_variables());
                reserved.insert(target.to_string());
                let fresh = fresh_name(&reserved);
                let renamed = substitute(body, x, &Var(fresh.clone()));
                Abs(fresh, substitute(&renamed, target, value).into())
            } else {
                Abs(x.clone(), substitute(body, target, value).into())
            }
        }
        Apply(lhs, rhs) => Apply(
            substitute(lhs, target, value).into(),
            substitute(rhs, target, value).into(),
        ),
    }
}

/// Renames an abstraction's binder: `lambda x. s` becomes
/// `lambda name. s[x := name]`. Any other operand is caller misuse.
pub fn alpha_rename(term: &Term, name: &str) -> Result<Term> {
    match term {
        Term::Abs(x, body) => Ok(if x == name {
            term.clone()
        } else {
            Term::Abs(
                name.to_string(),
                substitute(body, x, &Term::Var(name.to_string())).into(),
            )
        }),
        _ => Err(RewriteError::InvalidOperand(term.clone())),
    }
}

/// Exactly one beta-reduction step. The function position of an application
/// is reduced before the redex at this level is contracted, and the
/// argument position is only entered once the function position is neither
/// an application nor an abstraction; a bare abstraction reduces inside its
/// body. Terms with no applicable case come back unchanged, which is the
/// fixed-point signal driving [`crate::normalize::normalize`].
pub fn beta_step(term: &Term) -> Term {
    use Term::*;
    match term {
        Var(_) | Const(_) => term.clone(),
        Abs(x, body) => Abs(x.clone(), beta_step(body).into()),
        Apply(lhs, rhs) => match lhs.as_ref() {
            Apply(_, _) => Apply(beta_step(lhs).into(), rhs.clone()),
            Abs(x, body) => substitute(body, x, rhs),
            _ => match rhs.as_ref() {
                Abs(_, _) | Apply(_, _) => Apply(lhs.clone(), beta_step(rhs).into()),
                _ => term.clone(),
            },
        },
    }
}

/// One eta step: `(lambda x. (f x)) a` rewrites to `(f a)`. Every other
/// shape comes back unchanged.
pub fn eta_step(term: &Term) -> Term {
    use Term::*;
    if let Apply(lhs, rhs) = term {
        if let Abs(x, body) = lhs.as_ref() {
            if let Apply(inner, arg) = body.as_ref() {
                if matches!(arg.as_ref(), Var(v) if v == x) {
                    return Apply(inner.clone(), rhs.clone());
                }
            }
        }
    }
    term.clone()
}

#[cfg(test)]
mod test {
    use super::{Term::*, *};

    macro_rules! var {
        ($x:expr) => {
            Var($x.to_string())
        };
    }
    macro_rules! constant {
        ($c:expr) => {
            Const($c.to_string())
        };
    }
    macro_rules! lambda {
        ($x:expr, $body:expr) => {
            Abs($x.to_string(), $body.into())
        };
    }
    macro_rules! apply {
        ($lhs:expr, $rhs:expr) => {
            Apply($lhs.into(), $rhs.into())
        };
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute(&var!("x"), "x", &constant!("C")), constant!("C"));
        assert_eq!(substitute(&var!("y"), "x", &constant!("C")), var!("y"));
        assert_eq!(
            substitute(&constant!("A"), "x", &constant!("C")),
            constant!("A")
        );
        assert_eq!(
            substitute(
                &apply!(var!("x"), lambda!("y", var!("x"))),
                "x",
                &constant!("C")
            ),
            apply!(constant!("C"), lambda!("y", constant!("C")))
        );
    }

    #[test]
    fn test_substitute_shadowing() {
        let identity = lambda!("x", var!("x"));
        assert_eq!(substitute(&identity, "x", &constant!("C")), identity);
    }

    #[test]
    fn test_substitute_absent_target_is_identity() {
        // Even when the replacement's free names collide with a binder.
        let term = lambda!("a", var!("a"));
        let value = apply!(var!("a"), var!("b"));
        assert_eq!(substitute(&term, "q", &value), term);
    }

    #[test]
    fn test_substitute_avoids_capture() {
        // (lambda y. x)[x := y] must not capture the substituted `y`.
        assert_eq!(
            substitute(&lambda!("y", var!("x")), "x", &var!("y")),
            lambda!("a", var!("y"))
        );
    }

    #[test]
    fn test_alpha_rename() {
        let identity = lambda!("x", var!("x"));
        assert_eq!(
            alpha_rename(&identity, "y").unwrap().to_string(),
            "λy. y"
        );
        assert_eq!(alpha_rename(&identity, "x").unwrap(), identity);
        // Renaming toward an inner binder pushes that binder out of the way.
        assert_eq!(
            alpha_rename(&lambda!("x", lambda!("y", var!("x"))), "y").unwrap(),
            lambda!("y", lambda!("a", var!("y")))
        );
    }

    #[test]
    fn test_alpha_rename_rejects_non_abstraction() {
        assert!(matches!(
            alpha_rename(&var!("x"), "y"),
            Err(RewriteError::InvalidOperand(_))
        ));
        assert!(matches!(
            alpha_rename(&apply!(var!("f"), var!("x")), "y"),
            Err(RewriteError::InvalidOperand(_))
        ));
    }

    #[test]
    fn test_beta_step_fixed_points() {
        assert_eq!(beta_step(&var!("x")), var!("x"));
        assert_eq!(beta_step(&constant!("A")), constant!("A"));
        let stuck = apply!(constant!("A"), constant!("B"));
        assert_eq!(beta_step(&stuck), stuck);
    }

    #[test]
    fn test_beta_step_function_position_first() {
        let identity = lambda!("x", var!("x"));
        let term = apply!(
            apply!(identity.clone(), constant!("A")),
            apply!(identity.clone(), constant!("B"))
        );
        // Only the function position reduces; the argument redex waits.
        assert_eq!(
            beta_step(&term),
            apply!(constant!("A"), apply!(identity, constant!("B")))
        );
    }

    #[test]
    fn test_beta_step_contracts_redex() {
        let term = apply!(lambda!("x", apply!(var!("x"), var!("x"))), constant!("A"));
        assert_eq!(beta_step(&term), apply!(constant!("A"), constant!("A")));
    }

    #[test]
    fn test_beta_step_enters_abstraction_body() {
        let term = lambda!("y", apply!(lambda!("x", var!("x")), constant!("A")));
        assert_eq!(beta_step(&term), lambda!("y", constant!("A")));
    }

    #[test]
    fn test_beta_step_argument_position() {
        let term = apply!(var!("f"), apply!(lambda!("x", var!("x")), constant!("A")));
        assert_eq!(beta_step(&term), apply!(var!("f"), constant!("A")));
    }

    #[test]
    fn test_eta_step() {
        let term = apply!(
            lambda!("x", apply!(var!("f"), var!("x"))),
            constant!("A")
        );
        assert_eq!(eta_step(&term), apply!(var!("f"), constant!("A")));
    }

    #[test]
    fn test_eta_step_is_identity_elsewhere() {
        // Body argument is not the bound variable.
        let near_miss = apply!(
            lambda!("x", apply!(var!("f"), var!("y"))),
            constant!("A")
        );
        assert_eq!(eta_step(&near_miss), near_miss);
        let abstraction = lambda!("x", apply!(var!("f"), var!("x")));
        assert_eq!(eta_step(&abstraction), abstraction);
        assert_eq!(eta_step(&var!("x")), var!("x"));
    }
}
