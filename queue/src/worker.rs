use std::sync::Arc;

use ai::FeedbackClient;
use sea_orm::DatabaseConnection;
use services::{essay_service, review_service};
use tokio::sync::{Mutex, mpsc};
use tracing::{info, warn};

use crate::{FeedbackJob, JobOutcome, ResultStore};

/// Worker loop: dequeue, execute, record the outcome. Exits when the
/// queue handle is dropped and the channel drains.
pub(crate) async fn run(
    worker_id: usize,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<FeedbackJob>>>,
    results: ResultStore,
    db: DatabaseConnection,
    client: Arc<FeedbackClient>,
) {
    loop {
        // Only the lock holder waits on the channel; the lock drops as
        // soon as a job (or `None`) is handed out.
        let job = { rx.lock().await.recv().await };
        let Some(job) = job else {
            info!(worker_id, "feedback queue closed, worker exiting");
            break;
        };

        info!(worker_id, job_id = %job.job_id, essay_id = job.essay_id, "feedback job running");
        let outcome = execute(&db, &client, job.essay_id).await;

        match &outcome {
            JobOutcome::Completed { review_id } => {
                info!(worker_id, job_id = %job.job_id, review_id, "feedback job succeeded");
            }
            JobOutcome::NotFound => {
                warn!(worker_id, job_id = %job.job_id, essay_id = job.essay_id, "essay not found, no review written");
            }
            JobOutcome::Failed { reason } => {
                warn!(worker_id, job_id = %job.job_id, reason, "feedback job failed");
            }
        }

        results.write().await.insert(job.job_id, outcome);
    }
}

/// The worker body for one job.
///
/// Loads the essay; if it is gone the job terminates with
/// [`JobOutcome::NotFound`] and writes nothing. Otherwise the AI client is
/// invoked (blocking this worker only, never the request path) and a new
/// review is persisted with `reviewer_id` absent and status
/// `ai_completed`. The AI call itself cannot fail, so the only failure
/// paths are the missing essay and the final write.
pub async fn execute(
    db: &DatabaseConnection,
    client: &FeedbackClient,
    essay_id: i64,
) -> JobOutcome {
    let essay = match essay_service::find_by_id(db, essay_id).await {
        Ok(Some(essay)) => essay,
        Ok(None) => return JobOutcome::NotFound,
        Err(e) => {
            return JobOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    let feedback = client.analyze_essay(&essay.content).await;

    match review_service::insert_ai_review(
        db,
        essay.id,
        feedback.grammar_score,
        feedback.clarity_score,
        feedback.argument_score,
        feedback.ai_summary,
    )
    .await
    {
        Ok(review) => JobOutcome::Completed {
            review_id: review.id,
        },
        Err(e) => JobOutcome::Failed {
            reason: e.to_string(),
        },
    }
}
