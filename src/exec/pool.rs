use std::time::Duration;

use crossbeam::channel::{unbounded, RecvTimeoutError};
use tracing::warn;

use crate::analysis::error::AnalysisError;
use crate::analysis::scan::RunLengthMap;
use crate::exec::{SequenceExecutor, SequenceWorker};

/// Fixed pool of worker threads fed over channels. Workers pull
/// `(index, sequence)` jobs and send back `(index, result)`; the
/// orchestrator reassembles results into input order.
///
/// Timeout policy: if no result arrives within `unit_timeout`, the whole
/// batch is aborted with `WorkerTimeout` reporting the outstanding unit
/// count. The abort drains the job queue, so workers stop after the unit
/// they have in flight and `run_all` returns promptly. Stalled units are
/// never silently omitted from the reduction stream. A worker panic
/// disconnects the result channel and surfaces as `ExecutionFailure`.
pub struct ThreadPoolExecutor {
    workers: usize,
    unit_timeout: Duration,
}

impl ThreadPoolExecutor {
    pub fn new(workers: usize, unit_timeout: Duration) -> Self {
        Self {
            workers: workers.max(1),
            unit_timeout,
        }
    }
}

impl SequenceExecutor for ThreadPoolExecutor {
    fn run_all(
        &self,
        sequences: &[String],
        worker: SequenceWorker,
    ) -> Result<Vec<RunLengthMap>, AnalysisError> {
        if sequences.is_empty() {
            return Ok(Vec::new());
        }

        let (job_tx, job_rx) = unbounded::<(usize, &str)>();
        let (result_tx, result_rx) = unbounded::<(usize, RunLengthMap)>();

        for (idx, seq) in sequences.iter().enumerate() {
            job_tx
                .send((idx, seq.as_str()))
                .map_err(|e| AnalysisError::ExecutionFailure(format!("job queue closed: {}", e)))?;
        }
        // Close the job queue so workers exit once it drains.
        drop(job_tx);

        let outcome = crossbeam::scope(|s| {
            for _ in 0..self.workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                s.spawn(move |_| {
                    // Workers run until the job queue is drained, by
                    // completion or by an abort emptying it.
                    for (idx, seq) in job_rx.iter() {
                        let _ = result_tx.send((idx, worker(seq)));
                    }
                });
            }
            // Only workers hold senders now, so disconnection means all
            // workers are gone.
            drop(result_tx);

            let mut slots: Vec<Option<RunLengthMap>> = vec![None; sequences.len()];
            let mut received = 0;
            while received < sequences.len() {
                match result_rx.recv_timeout(self.unit_timeout) {
                    Ok((idx, map)) => {
                        slots[idx] = Some(map);
                        received += 1;
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        let pending = sequences.len() - received;
                        warn!(
                            "Aborting batch: no result within {:.2}s, {} unit(s) outstanding",
                            self.unit_timeout.as_secs_f64(),
                            pending
                        );
                        // Empty the job queue so workers stop after their
                        // in-flight unit instead of processing the backlog.
                        for _ in job_rx.try_iter() {}
                        return Err(AnalysisError::WorkerTimeout {
                            pending,
                            waited: self.unit_timeout,
                        });
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        let pending = sequences.len() - received;
                        warn!(
                            "Aborting batch: workers exited with {} unit(s) outstanding",
                            pending
                        );
                        for _ in job_rx.try_iter() {}
                        return Err(AnalysisError::ExecutionFailure(format!(
                            "workers exited with {} unit(s) outstanding",
                            pending
                        )));
                    }
                }
            }

            Ok(slots
                .into_iter()
                .map(|slot| slot.expect("every index received exactly one result"))
                .collect())
        })
        .map_err(|_| AnalysisError::ExecutionFailure("worker thread panicked".to_string()))?;

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scan::longest_runs;
    use crate::exec::SerialExecutor;

    #[test]
    fn test_pool_matches_serial() {
        let seqs: Vec<String> = vec![
            "aacbbb".into(),
            "aaabbbaabb".into(),
            "".into(),
            "tttggg".into(),
            "c".into(),
        ];
        let pool = ThreadPoolExecutor::new(3, Duration::from_secs(5));
        let pooled = pool.run_all(&seqs, longest_runs).unwrap();
        let serial = SerialExecutor.run_all(&seqs, longest_runs).unwrap();
        assert_eq!(pooled, serial);
    }

    #[test]
    fn test_pool_empty_collection() {
        let pool = ThreadPoolExecutor::new(2, Duration::from_secs(1));
        let results = pool.run_all(&[], longest_runs).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_pool_more_workers_than_jobs() {
        let seqs = vec!["aabb".to_string()];
        let pool = ThreadPoolExecutor::new(8, Duration::from_secs(5));
        let results = pool.run_all(&seqs, longest_runs).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get(&'a'), Some(&2));
        assert_eq!(results[0].get(&'b'), Some(&2));
    }

    #[test]
    fn test_pool_timeout_aborts_batch() {
        fn stall(_seq: &str) -> RunLengthMap {
            std::thread::sleep(Duration::from_millis(200));
            RunLengthMap::new()
        }

        let seqs = vec!["gatc".to_string(), "gatc".to_string()];
        let pool = ThreadPoolExecutor::new(1, Duration::from_millis(10));
        match pool.run_all(&seqs, stall) {
            Err(AnalysisError::WorkerTimeout { pending, .. }) => assert!(pending > 0),
            other => panic!("expected WorkerTimeout, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_abort_returns_before_backlog_is_processed() {
        fn slow(_seq: &str) -> RunLengthMap {
            std::thread::sleep(Duration::from_millis(300));
            RunLengthMap::new()
        }

        // 1 worker, 4 queued units of 300ms each, 50ms deadline. The
        // abort must return after the in-flight unit, not the ~1.2s it
        // would take to work through the whole queue.
        let seqs: Vec<String> = vec!["g".into(), "a".into(), "t".into(), "c".into()];
        let pool = ThreadPoolExecutor::new(1, Duration::from_millis(50));

        let start = std::time::Instant::now();
        let outcome = pool.run_all(&seqs, slow);
        let elapsed = start.elapsed();

        match outcome {
            Err(AnalysisError::WorkerTimeout { pending, .. }) => assert!(pending > 0),
            other => panic!("expected WorkerTimeout, got {:?}", other),
        }
        assert!(
            elapsed < Duration::from_secs(1),
            "abort took {:.2}s",
            elapsed.as_secs_f64()
        );
    }

    #[test]
    fn test_pool_worker_panic_is_execution_failure() {
        fn blow_up(_seq: &str) -> RunLengthMap {
            panic!("worker died");
        }

        let seqs = vec!["gatc".to_string()];
        let pool = ThreadPoolExecutor::new(1, Duration::from_secs(5));
        match pool.run_all(&seqs, blow_up) {
            Err(AnalysisError::ExecutionFailure(_)) => {}
            other => panic!("expected ExecutionFailure, got {:?}", other),
        }
    }
}
