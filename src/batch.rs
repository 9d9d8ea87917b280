// src/batch.rs
//
// Many independent sequences at once. Sequences run in parallel on a rayon
// pool; each sequence's own fold stays sequential.

use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::algorithms::GcdAlgorithm;
use crate::core::cancellation_token::CancellationToken;
use crate::core::error::Result;
use crate::core::number_parser::parse_numbers;
use crate::core::reducer::{Reducer, Reduction};

/// Outcome for one input line.
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based line number in the original input.
    pub line: usize,
    pub input: String,
    pub result: Result<Reduction>,
}

fn is_content_line(line: &str) -> Option<&str> {
    let line = line.trim();
    (!line.is_empty() && !line.starts_with('#')).then_some(line)
}

/// Collects the non-blank, non-comment lines of `text` with their line numbers.
pub fn sequences(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| is_content_line(line).map(|l| (idx + 1, l.to_string())))
        .collect()
}

/// Builds a pool of `threads` workers, defaulting to the number of CPUs.
pub fn build_pool(threads: Option<usize>) -> std::result::Result<ThreadPool, ThreadPoolBuildError> {
    let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);
    info!("Batch pool: {} threads", num_threads);
    ThreadPoolBuilder::new().num_threads(num_threads).build()
}

/// Reduces every sequence with `algorithm`. Results keep input order and a
/// failure in one line does not affect the others.
pub fn reduce_all(
    inputs: &[(usize, String)],
    algorithm: GcdAlgorithm,
    cancel_token: &CancellationToken,
) -> Vec<BatchEntry> {
    inputs
        .par_iter()
        .map(|(line, input)| {
            let result = parse_numbers(input).and_then(|values| {
                Reducer::new(algorithm)
                    .with_cancellation(cancel_token)
                    .run(&values)
            });
            BatchEntry {
                line: *line,
                input: input.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GcdError;
    use num::BigInt;

    #[test]
    fn test_sequences_skip_blank_and_comment_lines() {
        let text = "# header\n12, 18\n\n  7, 14  \n";
        assert_eq!(
            sequences(text),
            vec![(2, "12, 18".to_string()), (4, "7, 14".to_string())]
        );
    }

    #[test]
    fn test_reduce_all_keeps_order_and_isolates_errors() {
        let inputs = sequences("12, 18, 24\n42\n17, abc\n100, 75");
        let pool = build_pool(Some(2)).unwrap();
        let token = CancellationToken::new();
        let entries = pool.install(|| reduce_all(&inputs, GcdAlgorithm::Stein, &token));

        assert_eq!(entries.len(), 4);
        assert_eq!(entries.iter().map(|e| e.line).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(entries[0].result.as_ref().unwrap().gcd, BigInt::from(6));
        assert_eq!(
            entries[1].result.as_ref().unwrap_err(),
            &GcdError::InsufficientOperands { found: 1 }
        );
        assert_eq!(
            entries[2].result.as_ref().unwrap_err(),
            &GcdError::InvalidNumber("abc".to_string())
        );
        assert_eq!(entries[3].result.as_ref().unwrap().gcd, BigInt::from(25));
    }

    #[test]
    fn test_cancelled_batch_reports_cancellation() {
        let inputs = sequences("4, 6\n8, 12");
        let token = CancellationToken::new();
        token.cancel();
        let entries = reduce_all(&inputs, GcdAlgorithm::Euclidean, &token);
        assert!(entries
            .iter()
            .all(|e| matches!(e.result, Err(GcdError::Cancelled { .. }))));
    }
}
