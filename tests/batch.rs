use std::fmt::Write as _;
use std::io::Cursor;

use dupcheck_core::{CheckError, Strategy, Summary, run};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};
use strum::IntoEnumIterator as _;

fn check(input: &str, strategy: Strategy) -> Result<String, CheckError> {
    let mut out = Vec::new();
    run(Cursor::new(input), &mut out, strategy)?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn test_documented_scenarios() -> anyhow::Result<()> {
    for strategy in Strategy::iter() {
        assert_eq!(check("1\n3\n1 2 3\n", strategy)?, "NO\n", "{strategy}");
        assert_eq!(check("1\n3\n1 2 1\n", strategy)?, "YES\n", "{strategy}");
        assert_eq!(check("2\n2\n5 5\n2\n5 6\n", strategy)?, "YES\nNO\n", "{strategy}");
    }
    Ok(())
}

#[test]
fn test_boundaries() -> anyhow::Result<()> {
    assert_eq!(check("2\n0\n\n1\n-7\n", Strategy::default())?, "NO\nNO\n");
    assert_eq!(
        check("1\n4\n2147483647 -2147483648 2147483647 0\n", Strategy::default())?,
        "YES\n"
    );
    Ok(())
}

#[test]
fn test_tokens_may_be_split_freely() -> anyhow::Result<()> {
    let compact = check("2 3 1 2 3 3 9 9 9", Strategy::Sort)?;
    let spread = check("2\r\n3\r\n1\n2\n3\n\n3\n9 9\n9\n", Strategy::Sort)?;
    assert_eq!(compact, "NO\nYES\n");
    assert_eq!(compact, spread);
    Ok(())
}

#[test]
fn test_generated_batch_matches_expectation() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut input = String::new();
    let mut expected = String::new();
    let cases = 300;

    writeln!(input, "{cases}")?;
    for _ in 0..cases {
        let n: i64 = rng.gen_range(0..200);
        let mut values: Vec<i64> = (0..n).map(|i| i - 100).collect();
        let dup = n > 0 && rng.gen_bool(0.5);
        if dup {
            let idx = rng.gen_range(0..values.len());
            values[0] = values[idx];
            // index 0 duplicating itself is not a repeat
            if idx == 0 {
                values.push(values[0]);
            }
        }
        values.shuffle(&mut rng);

        writeln!(input, "{}", values.len())?;
        let line: Vec<String> = values.iter().map(i64::to_string).collect();
        writeln!(input, "{}", line.join(" "))?;
        expected.push_str(if dup { "YES\n" } else { "NO\n" });
    }

    for strategy in Strategy::iter() {
        let out = check(&input, strategy)?;
        assert_eq!(out.lines().count(), cases, "{strategy} line count");
        assert_eq!(out, expected, "{strategy} verdicts");
    }
    Ok(())
}

#[test]
fn test_same_input_same_output() -> anyhow::Result<()> {
    let input = "3\n3\n1 1 1\n2\n1 2\n5\n-1 -2 -3 -4 -1\n";
    let first = check(input, Strategy::HashSet)?;
    let second = check(input, Strategy::HashSet)?;
    assert_eq!(first, second);
    assert_eq!(first, "YES\nNO\nYES\n");
    Ok(())
}

#[test]
fn test_summary_counts() -> anyhow::Result<()> {
    let mut out = Vec::new();
    let summary = run(Cursor::new("3\n2\n1 1\n2\n1 2\n2\n3 3\n"), &mut out, Strategy::BTree)?;
    assert_eq!(
        summary,
        Summary {
            cases: 3,
            duplicates: 2
        }
    );
    Ok(())
}

#[test]
fn test_malformed_input_fails_fast() {
    let err = check("1\n3\n1 2\n", Strategy::default()).expect_err("truncated input");
    assert!(matches!(err, CheckError::UnexpectedEof { .. }), "got {err:?}");

    let err = check("1\n2\n1 x\n", Strategy::default()).expect_err("bad token");
    assert!(
        matches!(err, CheckError::InvalidToken { position: 4, .. }),
        "got {err:?}"
    );
    assert_eq!(err.to_string(), "invalid value at token 4: \"x\"");

    let err = check("-1\n", Strategy::default()).expect_err("negative count");
    assert!(matches!(err, CheckError::InvalidToken { .. }), "got {err:?}");
}
