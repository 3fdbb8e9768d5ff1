//! Resource submission with progress feedback.
//!
//! A submission is validated locally first; nothing is sent when validation fails. A valid
//! draft moves through `Uploading` (progress simulated on a timer), `Processing` (the actual
//! write), then `Success` or `Error`, and returns to `Idle` after
//! [`PipelineTimings::reset_after`].

use std::{future::Future, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::sync::watch;

use crate::{
    client::api::{ApiClient, ClientError},
    model::{
        resource::ResourceDto,
        validation::{ResourceDraft, ValidationErrors},
    },
};

/// Where validated resources are written.
pub trait ResourceSink: Send + Sync {
    fn submit_resource(
        &self,
        draft: &ResourceDraft,
    ) -> impl Future<Output = Result<ResourceDto, ClientError>> + Send;
}

impl ResourceSink for ApiClient {
    fn submit_resource(
        &self,
        draft: &ResourceDraft,
    ) -> impl Future<Output = Result<ResourceDto, ClientError>> + Send {
        ApiClient::submit_resource(self, draft)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Uploading {
        progress: u8,
    },
    Processing,
    Success(ResourceDto),
    Error(String),
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("A submission is already in progress")]
    Busy,
    #[error(transparent)]
    Failed(#[from] ClientError),
}

#[derive(Clone, Debug)]
pub struct PipelineTimings {
    /// Interval between simulated progress updates
    pub tick: Duration,
    /// Progress added per tick
    pub step: u8,
    /// Progress the simulation stops at; the write itself completes the upload
    pub cap: u8,
    /// Time a `Success` or `Error` phase stays visible before returning to `Idle`
    pub reset_after: Duration,
}

impl Default for PipelineTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(200),
            step: 10,
            cap: 90,
            reset_after: Duration::from_secs(3),
        }
    }
}

pub struct SubmissionPipeline<S> {
    sink: S,
    timings: PipelineTimings,
    phase: Arc<watch::Sender<SubmissionPhase>>,
}

impl<S: ResourceSink> SubmissionPipeline<S> {
    pub fn new(sink: S, timings: PipelineTimings) -> Self {
        let (phase, _) = watch::channel(SubmissionPhase::Idle);

        Self {
            sink,
            // Progress must stay below 100 until the write finishes.
            timings: PipelineTimings {
                cap: timings.cap.min(99),
                step: timings.step.max(1),
                ..timings
            },
            phase: Arc::new(phase),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.borrow().clone()
    }

    /// Validates and submits a draft.
    ///
    /// # Returns
    /// - `Ok(ResourceDto)` - Resource stored, phase is `Success`
    /// - `Err(SubmissionError::Invalid)` - Draft rejected locally, phase stays `Idle`
    /// - `Err(SubmissionError::Busy)` - Previous submission has not reset yet
    /// - `Err(SubmissionError::Failed)` - The write failed, phase is `Error`
    pub async fn submit(&self, draft: &ResourceDraft) -> Result<ResourceDto, SubmissionError> {
        draft.validate()?;

        let started = self.phase.send_if_modified(|phase| {
            if *phase != SubmissionPhase::Idle {
                return false;
            }
            *phase = SubmissionPhase::Uploading { progress: 0 };
            true
        });
        if !started {
            return Err(SubmissionError::Busy);
        }

        let mut in_flight = InFlight {
            phase: &*self.phase,
            finished: false,
        };

        self.simulate_upload().await;

        self.phase.send_replace(SubmissionPhase::Processing);

        let result = self.sink.submit_resource(draft).await;

        let outcome = match &result {
            Ok(resource) => SubmissionPhase::Success(resource.clone()),
            Err(e) => {
                tracing::error!("Resource submission failed: {}", e);
                SubmissionPhase::Error(e.to_string())
            }
        };
        self.phase.send_replace(outcome);
        in_flight.finished = true;
        self.schedule_reset();

        Ok(result?)
    }

    async fn simulate_upload(&self) {
        let mut interval = tokio::time::interval(self.timings.tick);
        // First tick completes immediately.
        interval.tick().await;

        let mut progress = 0u8;
        while progress < self.timings.cap {
            interval.tick().await;

            progress = progress
                .saturating_add(self.timings.step)
                .min(self.timings.cap);
            self.phase
                .send_replace(SubmissionPhase::Uploading { progress });
        }
    }

    fn schedule_reset(&self) {
        let phase = Arc::clone(&self.phase);
        let delay = self.timings.reset_after;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            phase.send_if_modified(|phase| {
                let finished = matches!(
                    phase,
                    SubmissionPhase::Success(_) | SubmissionPhase::Error(_)
                );
                if finished {
                    *phase = SubmissionPhase::Idle;
                }
                finished
            });
        });
    }
}

/// Returns the pipeline to `Idle` when a `submit` future is dropped before it finishes.
struct InFlight<'a> {
    phase: &'a watch::Sender<SubmissionPhase>,
    finished: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Resource submission cancelled before completing");
            self.phase.send_replace(SubmissionPhase::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::model::resource::{NewResourceDto, ResourceCategory};

    struct FakeSink {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeSink {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl ResourceSink for FakeSink {
        async fn submit_resource(&self, draft: &ResourceDraft) -> Result<ResourceDto, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(300)).await;

            if self.fail {
                return Err(ClientError::Api {
                    status: 500,
                    message: "Internal server error".to_string(),
                });
            }

            Ok(ResourceDto {
                id: 1,
                title: draft.title.clone(),
                description: draft.description.clone(),
                url: draft.url.clone(),
                category: ResourceCategory::Skill {
                    skill_id: 7,
                    skill_name: "Rust".to_string(),
                    category_id: 1,
                    category_name: "Programming".to_string(),
                },
                is_approved: false,
                submitted_by: Some(1),
                created_at: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
                updated_at: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
            })
        }
    }

    fn valid_draft() -> NewResourceDto {
        NewResourceDto {
            title: "Ownership explained".to_string(),
            description: "A walkthrough of borrowing and lifetimes".to_string(),
            url: "https://example.com/ownership".to_string(),
            skill_id: Some(7),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_draft_never_reaches_sink() {
        let pipeline = SubmissionPipeline::new(FakeSink::new(false), PipelineTimings::default());
        let draft = NewResourceDto {
            description: "short".to_string(),
            ..valid_draft()
        };

        let result = pipeline.submit(&draft).await;

        match result {
            Err(SubmissionError::Invalid(errors)) => assert!(errors.get("description").is_some()),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 0);
        assert_eq!(pipeline.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn progresses_through_phases_and_resets() -> Result<(), SubmissionError> {
        let timings = PipelineTimings::default();
        let pipeline = SubmissionPipeline::new(FakeSink::new(false), timings.clone());
        let mut phases = pipeline.subscribe();

        let observer = async {
            let mut seen = Vec::new();
            while phases.changed().await.is_ok() {
                let phase = phases.borrow_and_update().clone();
                let done = matches!(phase, SubmissionPhase::Success(_));
                seen.push(phase);
                if done {
                    break;
                }
            }
            seen
        };

        let draft = valid_draft();
        let (result, seen) = tokio::join!(pipeline.submit(&draft), observer);
        let resource = result?;

        assert_eq!(resource.title, "Ownership explained");
        assert!(seen.iter().any(|p| matches!(p, SubmissionPhase::Uploading { .. })));
        assert!(seen.contains(&SubmissionPhase::Processing));
        assert!(seen.iter().all(|p| match p {
            SubmissionPhase::Uploading { progress } => *progress < 100,
            _ => true,
        }));
        assert_eq!(pipeline.phase(), SubmissionPhase::Success(resource));

        tokio::time::sleep(timings.reset_after + Duration::from_millis(1)).await;
        assert_eq!(pipeline.phase(), SubmissionPhase::Idle);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_shows_error_then_resets() {
        let timings = PipelineTimings {
            reset_after: Duration::from_secs(1),
            ..Default::default()
        };
        let pipeline = SubmissionPipeline::new(FakeSink::new(true), timings);

        let result = pipeline.submit(&valid_draft()).await;

        assert!(matches!(result, Err(SubmissionError::Failed(_))));
        assert!(matches!(pipeline.phase(), SubmissionPhase::Error(_)));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(pipeline.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_submission_until_reset() -> Result<(), SubmissionError> {
        let pipeline = SubmissionPipeline::new(FakeSink::new(false), PipelineTimings::default());

        pipeline.submit(&valid_draft()).await?;
        let second = pipeline.submit(&valid_draft()).await;

        assert!(matches!(second, Err(SubmissionError::Busy)));
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 1);

        Ok(())
    }

    /// Expect an abandoned submission to free the pipeline for the next one
    #[tokio::test(start_paused = true)]
    async fn cancelled_submission_returns_to_idle() -> Result<(), SubmissionError> {
        let pipeline = SubmissionPipeline::new(FakeSink::new(false), PipelineTimings::default());
        let draft = valid_draft();

        let abandoned =
            tokio::time::timeout(Duration::from_millis(500), pipeline.submit(&draft)).await;

        assert!(abandoned.is_err());
        assert_eq!(pipeline.phase(), SubmissionPhase::Idle);
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 0);

        let resource = pipeline.submit(&draft).await?;

        assert_eq!(resource.title, "Ownership explained");
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 1);

        Ok(())
    }

    /// Expect cancellation during the write itself to release the pipeline too
    #[tokio::test(start_paused = true)]
    async fn cancelled_during_processing_returns_to_idle() {
        let timings = PipelineTimings {
            tick: Duration::from_millis(10),
            ..Default::default()
        };
        let pipeline = SubmissionPipeline::new(FakeSink::new(false), timings);
        let draft = valid_draft();

        // Upload finishes after 90ms, the write takes another 300ms
        let abandoned =
            tokio::time::timeout(Duration::from_millis(200), pipeline.submit(&draft)).await;

        assert!(abandoned.is_err());
        assert_eq!(pipeline.sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(pipeline.phase(), SubmissionPhase::Idle);
        assert!(pipeline.submit(&draft).await.is_ok());
    }
}
