//! Duplicate detection over batches of integer test cases
//!
//! Reads `T`, then `T` cases of `N` followed by `N` integers, and answers
//! `YES` for every case containing a repeated value and `NO` otherwise.

pub mod case;
pub mod checker;
pub mod error;
pub mod runner;
pub mod scanner;

pub use case::{TestCase, Verdict, check_case, read_case};
pub use checker::{FrequencyTable, Strategy};
pub use error::CheckError;
pub use runner::{Summary, run};
pub use scanner::TokenScanner;
