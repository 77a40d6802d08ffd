use std::io::{BufRead, Write};

use crate::case::{Verdict, read_case};
use crate::checker::Strategy;
use crate::error::CheckError;
use crate::scanner::TokenScanner;

/// Totals for a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub cases: usize,
    pub duplicates: usize,
}

/// Read `T` test cases from `input` and write one verdict line per case to `output`.
///
/// Lines are written as soon as each case is decided. On error the lines for
/// earlier cases have already been flushed.
pub fn run<R, W>(input: R, mut output: W, strategy: Strategy) -> Result<Summary, CheckError>
where
    R: BufRead,
    W: Write,
{
    let mut scanner = TokenScanner::new(input);
    let result = run_cases(&mut scanner, &mut output, strategy);
    output.flush()?;
    let summary = result?;

    // only look at what is already buffered, stdin may be an open terminal
    if scanner.has_buffered() {
        log::warn!(
            "ignoring trailing tokens after {} test cases ({} tokens read)",
            summary.cases,
            scanner.tokens_read()
        );
    }
    log::debug!(
        "checked {} test cases with {strategy}, {} had duplicates",
        summary.cases,
        summary.duplicates
    );
    Ok(summary)
}

fn run_cases<R, W>(
    scanner: &mut TokenScanner<R>,
    output: &mut W,
    strategy: Strategy,
) -> Result<Summary, CheckError>
where
    R: BufRead,
    W: Write,
{
    let total: usize = scanner.next_token("test case count")?;
    log::info!("reading {total} test cases");

    let mut summary = Summary::default();
    for index in 0..total {
        let case = read_case(scanner)?;
        let verdict = case.check(strategy);
        log::trace!("case {}: {} values -> {verdict}", index + 1, case.len());

        writeln!(output, "{verdict}")?;
        summary.cases += 1;
        if verdict == Verdict::Yes {
            summary.duplicates += 1;
        }
    }
    Ok(summary)
}
