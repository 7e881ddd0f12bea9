use anyhow::{bail, Result};
use church::{
    factorial, first, fls, is_zero, multiply, numeral, pair, plus, predecessor, second, successor,
    tru,
};
use lambda::{normalize, Term};

const MAX_STEPS: usize = 10_000;

fn check(name: &str, term: Term, expected: &Term) -> Result<bool> {
    let result = normalize(term, Some(MAX_STEPS))?;
    if &result.term == expected {
        println!("{name}: ok in {} steps -> {}", result.steps(), result.term);
        Ok(true)
    } else {
        println!(
            "{name}: MISMATCH after {} steps: got `{}`, expected `{}`",
            result.steps(),
            result.term,
            expected
        );
        Ok(false)
    }
}

fn main() -> Result<()> {
    let constant = |name: &str| Term::Const(name.to_string());

    let projection = Term::Apply(
        Term::Apply(
            Term::Abs(
                "x".to_string(),
                Term::Abs("y".to_string(), Term::Var("x".to_string()).into()).into(),
            )
            .into(),
            constant("A").into(),
        )
        .into(),
        constant("B").into(),
    );
    let ab = pair(&constant("A"), &constant("B"));

    let mut ok = true;
    ok &= check("successor(1)", successor(&numeral(1)), &numeral(2))?;
    ok &= check("plus(1, 2)", plus(&numeral(1), &numeral(2)), &numeral(3))?;
    ok &= check(
        "multiply(2, 3)",
        multiply(&numeral(2), &numeral(3)),
        &numeral(6),
    )?;
    ok &= check("predecessor(2)", predecessor(&numeral(2)), &numeral(1))?;
    ok &= check("is_zero(0)", is_zero(&numeral(0)), &tru())?;
    ok &= check("is_zero(1)", is_zero(&numeral(1)), &fls())?;
    ok &= check("((λx. λy. x) A) B", projection, &constant("A"))?;
    ok &= check("first(pair(A, B))", first(&ab), &constant("A"))?;
    ok &= check("second(pair(A, B))", second(&ab), &constant("B"))?;
    ok &= check(
        "factorial(2)",
        factorial(&numeral(2)),
        &Term::Abs("x".to_string(), numeral(2).into()),
    )?;
    if !ok {
        bail!("some terms did not reduce to the expected normal form");
    }
    Ok(())
}
