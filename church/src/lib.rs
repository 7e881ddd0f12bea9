//! Church encodings assembled from the four `lambda::Term` constructors:
//! booleans, pairs, numerals and their arithmetic, and a factorial built
//! from a self-application fixed-point trick.

use lambda::Term;

fn var(name: &str) -> Term {
    Term::Var(name.to_string())
}

fn abs(binder: &str, body: Term) -> Term {
    Term::Abs(binder.to_string(), body.into())
}

fn apply(lhs: Term, rhs: Term) -> Term {
    Term::Apply(lhs.into(), rhs.into())
}

/// `lambda x. lambda y. x`
pub fn tru() -> Term {
    abs("x", abs("y", var("x")))
}

/// `lambda x. lambda y. y`
pub fn fls() -> Term {
    abs("x", abs("y", var("y")))
}

/// The Church numeral `lambda f. lambda x. f (f (... (f x)))` with `n`
/// applications of `f`.
pub fn numeral(n: u64) -> Term {
    let mut body = var("x");
    for _ in 0..n {
        body = apply(var("f"), body);
    }
    abs("f", abs("x", body))
}

/// `lambda f. lambda x. (f ((n f) x))`
pub fn successor(n: &Term) -> Term {
    abs(
        "f",
        abs(
            "x",
            apply(var("f"), apply(apply(n.clone(), var("f")), var("x"))),
        ),
    )
}

/// `lambda f. lambda x. ((m f) ((n f) x))`
pub fn plus(m: &Term, n: &Term) -> Term {
    abs(
        "f",
        abs(
            "x",
            apply(
                apply(m.clone(), var("f")),
                apply(apply(n.clone(), var("f")), var("x")),
            ),
        ),
    )
}

/// `lambda f. (m (n f))`
pub fn multiply(m: &Term, n: &Term) -> Term {
    abs("f", apply(m.clone(), apply(n.clone(), var("f"))))
}

/// The pair-shuffling predecessor
/// `lambda f. lambda x. (((n lambda g. lambda h. (h (g f))) lambda u. x) lambda u. u)`;
/// the predecessor of zero is zero.
pub fn predecessor(n: &Term) -> Term {
    abs(
        "f",
        abs(
            "x",
            apply(
                apply(
                    apply(
                        n.clone(),
                        abs("g", abs("h", apply(var("h"), apply(var("g"), var("f"))))),
                    ),
                    abs("u", var("x")),
                ),
                abs("u", var("u")),
            ),
        ),
    )
}

/// `((n lambda x. false) true)`
pub fn is_zero(n: &Term) -> Term {
    apply(apply(n.clone(), abs("x", fls())), tru())
}

/// Factorial of a concrete numeral via the self-application trick
/// `T = lambda f. lambda x. ((f f) x)` and
/// `G = lambda g. lambda n. ((n lambda g. (n * ((g g) (n - 1)))) 1)`,
/// with the given numeral spliced in for `n`. Its normal form wraps the
/// expected numeral in one extra leading binder.
pub fn factorial(n: &Term) -> Term {
    let t = abs("f", abs("x", apply(apply(var("f"), var("f")), var("x"))));
    let g = abs(
        "g",
        abs(
            "n",
            apply(
                apply(
                    n.clone(),
                    abs(
                        "g",
                        multiply(n, &apply(apply(var("g"), var("g")), predecessor(n))),
                    ),
                ),
                numeral(1),
            ),
        ),
    );
    apply(t, g)
}

/// The Church pair `lambda f. ((f a) b)`.
pub fn pair(a: &Term, b: &Term) -> Term {
    abs("f", apply(apply(var("f"), a.clone()), b.clone()))
}

/// `(p true)` — projects the first component of a [`pair`].
pub fn first(p: &Term) -> Term {
    apply(p.clone(), tru())
}

/// `(p false)` — projects the second component of a [`pair`].
pub fn second(p: &Term) -> Term {
    apply(p.clone(), fls())
}
