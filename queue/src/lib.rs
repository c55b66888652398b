//! Asynchronous review-generation pipeline.
//!
//! The HTTP layer enqueues a [`FeedbackJob`] and gets back only an
//! acknowledgement (the job ID); it never awaits the outcome. Worker tasks
//! pull jobs off a shared channel, run the slow external AI call out of
//! band, and persist the resulting review. Outcomes land in a result store
//! keyed by job ID for tests and observability; nothing reads them back on
//! the request path.
//!
//! There is deliberately no deduplication: two jobs for the same essay
//! both insert a review. There is also no cancellation and no retry.

mod worker;

pub use worker::execute;

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock, mpsc};
use tracing::info;
use uuid::Uuid;

use ai::FeedbackClient;
use sea_orm::DatabaseConnection;

/// One unit of deferred work: "generate AI feedback for essay E".
#[derive(Debug, Clone)]
pub struct FeedbackJob {
    pub job_id: Uuid,
    pub essay_id: i64,
}

/// Terminal result of a feedback job.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobOutcome {
    /// Review row committed.
    #[serde(rename = "ok")]
    Completed { review_id: i64 },
    /// The essay was gone at execution time; nothing was written. This is
    /// terminal, not transient, so the transport must not retry it.
    NotFound,
    /// The database write failed; nothing durable was produced.
    Failed { reason: String },
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("feedback queue is closed")]
    Closed,
}

type ResultStore = Arc<RwLock<HashMap<Uuid, JobOutcome>>>;

/// Handle to the feedback queue. Cloning shares the same channel and
/// result store.
#[derive(Clone)]
pub struct FeedbackQueue {
    tx: mpsc::UnboundedSender<FeedbackJob>,
    results: ResultStore,
}

impl FeedbackQueue {
    /// Spawns `workers` background tasks pulling from a shared channel.
    /// Each worker runs its jobs strictly sequentially; jobs run
    /// concurrently only across workers.
    pub fn start(db: DatabaseConnection, client: Arc<FeedbackClient>, workers: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let rx = Arc::new(Mutex::new(rx));
        let results: ResultStore = Arc::new(RwLock::new(HashMap::new()));

        for worker_id in 0..workers.max(1) {
            tokio::spawn(worker::run(
                worker_id,
                Arc::clone(&rx),
                Arc::clone(&results),
                db.clone(),
                Arc::clone(&client),
            ));
        }

        Self { tx, results }
    }

    /// Accepts a job and returns immediately with its ID. The caller gets
    /// an acknowledgement that the job was accepted, not its outcome.
    pub fn enqueue(&self, essay_id: i64) -> Result<Uuid, QueueError> {
        let job_id = Uuid::new_v4();
        self.tx
            .send(FeedbackJob { job_id, essay_id })
            .map_err(|_| QueueError::Closed)?;
        info!(%job_id, essay_id, "feedback job enqueued");
        Ok(job_id)
    }

    /// Looks up a finished job's outcome. `None` while still queued or
    /// running.
    pub async fn outcome(&self, job_id: Uuid) -> Option<JobOutcome> {
        self.results.read().await.get(&job_id).cloned()
    }
}
