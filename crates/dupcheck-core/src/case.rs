use std::fmt;
use std::io::BufRead;

use crate::checker::Strategy;
use crate::error::CheckError;
use crate::scanner::TokenScanner;

/// One independent problem instance: `N` values in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCase {
    pub values: Vec<i64>,
}

/// Per-case answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn from_duplicate(found: bool) -> Self {
        if found { Self::Yes } else { Self::No }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TestCase {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn check(&self, strategy: Strategy) -> Verdict {
        Verdict::from_duplicate(strategy.check(&self.values))
    }
}

/// Read `N` followed by `N` values
pub fn read_case<R: BufRead>(scanner: &mut TokenScanner<R>) -> Result<TestCase, CheckError> {
    let n: usize = scanner.next_token("value count")?;
    // cap the up-front allocation, `n` is untrusted
    let mut values = Vec::with_capacity(n.min(1 << 16));
    for _ in 0..n {
        values.push(scanner.next_token("value")?);
    }
    Ok(TestCase::new(values))
}

/// Read one test case and decide it
pub fn check_case<R: BufRead>(
    scanner: &mut TokenScanner<R>,
    strategy: Strategy,
) -> Result<Verdict, CheckError> {
    Ok(read_case(scanner)?.check(strategy))
}
