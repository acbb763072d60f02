//! Parallel hydration of many documents against one registry.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use ikona_core::IconRegistry;

use crate::hydrate::{Hydrated, HydrateOptions, hydrate};

/// One document to hydrate.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier (a file path, a route, ...).
    pub id: String,
    /// The document markup.
    pub html: String,
}

/// Outcome for a single batch input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// The input's identifier.
    pub id: String,
    /// Hydrated output, when the document succeeded.
    pub result: Option<Hydrated>,
    /// Error message, when it did not.
    pub error: Option<String>,
}

/// Aggregate statistics for one batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    /// Number of inputs submitted.
    pub total: u32,
    /// Documents hydrated successfully.
    pub succeeded: u32,
    /// Documents that failed.
    pub failed: u32,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Per-document results plus aggregate statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// One entry per submitted input, in submission order.
    pub results: Vec<BatchResult>,
    /// Aggregate counters.
    pub stats: BatchStats,
}

/// Batch processing options.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Keep going after a failing document (default true). When false,
    /// processing is sequential and stops at the first failure.
    pub continue_on_error: Option<bool>,
    /// Cap on rayon worker threads; rayon's default when unset.
    pub max_threads: Option<u32>,
}

/// Hydrates every input against the shared registry.
///
/// Documents are independent, so hydration fans out across a rayon
/// pool; a failing document never affects its siblings unless
/// `continue_on_error` is false.
pub fn hydrate_batch(
    inputs: Vec<BatchInput>,
    registry: &IconRegistry,
    options: &HydrateOptions,
    batch_options: &BatchOptions,
) -> BatchOutcome {
    let start = Instant::now();
    let continue_on_error = batch_options.continue_on_error.unwrap_or(true);

    let pool = batch_options.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match hydrate(&input.html, registry, options) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(result),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error - sequential so "first" is well-defined.
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();

    BatchOutcome {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikona_core::IconRegistry;

    fn registry() -> IconRegistry {
        IconRegistry::from_json(r#"{"Dot": ["svg", {}, [["circle", {"r": 1}]]]}"#).unwrap()
    }

    fn inputs() -> Vec<BatchInput> {
        vec![
            BatchInput {
                id: "a.html".into(),
                html: r#"<i data-icon="dot"></i>"#.into(),
            },
            BatchInput {
                id: "b.html".into(),
                html: "<p>nothing</p>".into(),
            },
        ]
    }

    #[test]
    fn every_input_is_accounted_for() {
        let outcome = hydrate_batch(
            inputs(),
            &registry(),
            &HydrateOptions::default(),
            &BatchOptions::default(),
        );
        assert_eq!(outcome.stats.total, 2);
        assert_eq!(outcome.stats.succeeded, 2);
        assert_eq!(outcome.stats.failed, 0);
        assert_eq!(outcome.results.len(), 2);

        let a = outcome.results.iter().find(|r| r.id == "a.html").unwrap();
        assert!(a.result.as_ref().unwrap().html.contains("<svg"));
        let b = outcome.results.iter().find(|r| r.id == "b.html").unwrap();
        assert_eq!(b.result.as_ref().unwrap().report.replaced, 0);
    }

    #[test]
    fn stop_on_first_error_truncates_results() {
        let bad_options = HydrateOptions {
            name_attr: "da ta".to_string(),
            ..HydrateOptions::default()
        };
        let outcome = hydrate_batch(
            inputs(),
            &registry(),
            &bad_options,
            &BatchOptions {
                continue_on_error: Some(false),
                ..BatchOptions::default()
            },
        );
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.stats.failed, 1);
        assert!(outcome.results[0].error.is_some());
    }

    #[test]
    fn thread_cap_is_accepted() {
        let outcome = hydrate_batch(
            inputs(),
            &registry(),
            &HydrateOptions::default(),
            &BatchOptions {
                max_threads: Some(1),
                ..BatchOptions::default()
            },
        );
        assert_eq!(outcome.stats.succeeded, 2);
    }
}
