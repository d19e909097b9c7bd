//! Drives a session's submission through the single network exchange.
//!
//! [`SessionDriver`] owns the service seam: it applies the `Submit` command,
//! awaits the dispatched exchange, and feeds the outcome back into the
//! session as a completion event. Every failure path converges on
//! `Phase::Failed(message)`; there is no retry and no timeout.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::AnalyzeService;
use crate::session::{Command, Event, Session};

/// Record of one completed exchange, kept for verbose logging.
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    pub request_id: Uuid,
    pub generation: u64,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl ExchangeRecord {
    pub fn duration_ms(&self) -> i64 {
        (self.completed_at - self.submitted_at).num_milliseconds()
    }
}

pub struct SessionDriver<S> {
    service: S,
}

impl<S: AnalyzeService> SessionDriver<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Runs one submission to completion: applies `Submit`, awaits the
    /// exchange, and applies the resulting event.
    ///
    /// Returns `None` when the session was not submit-ready (the submit was
    /// a no-op). The request is built once and dropped after the round trip.
    pub async fn submit(&self, session: &mut Session) -> Option<ExchangeRecord> {
        let dispatch = session.apply(Command::Submit)?;
        let request_id = Uuid::new_v4();
        let submitted_at = Utc::now();

        let event = match self.service.analyze(&dispatch.request).await {
            Ok(result) => Event::RequestSucceeded {
                generation: dispatch.generation,
                result,
            },
            Err(err) => Event::RequestFailed {
                generation: dispatch.generation,
                message: err.user_message(),
            },
        };
        session.complete(event);

        Some(ExchangeRecord {
            request_id,
            generation: dispatch.generation,
            submitted_at,
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AnalysisMode, AnalysisRequest, AnalysisResult, ApiError, ResumeFile};
    use crate::session::Phase;

    struct MockService {
        response: Result<AnalysisResult, (u16, String)>,
    }

    impl MockService {
        fn ok(result: AnalysisResult) -> Self {
            Self {
                response: Ok(result),
            }
        }

        fn service_err(status: u16, message: &str) -> Self {
            Self {
                response: Err((status, message.to_string())),
            }
        }
    }

    impl AnalyzeService for MockService {
        async fn analyze(&self, _req: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
            match &self.response {
                Ok(result) => Ok(result.clone()),
                Err((status, message)) => Err(ApiError::Service {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    struct TransportFailure;

    impl AnalyzeService for TransportFailure {
        async fn analyze(&self, _req: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
            Err(ApiError::Transport("connection reset".into()))
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: 85,
            matching_keywords: vec!["python".into()],
            missing_keywords: vec!["docker".into(), "aws".into()],
            recommendations: vec![],
            mode_used: AnalysisMode::Quick,
            semantic_available: true,
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.apply(Command::SetFile(ResumeFile {
            filename: "resume.pdf".into(),
            bytes: vec![0],
        }));
        session.apply(Command::SetJobDescription(
            "Looking for a Python developer".into(),
        ));
        session
    }

    #[tokio::test]
    async fn submit_success_populates_session() {
        let driver = SessionDriver::new(MockService::ok(sample_result()));
        let mut session = ready_session();

        let record = driver.submit(&mut session).await.unwrap();

        assert_eq!(record.generation, 1);
        assert!(record.duration_ms() >= 0);
        match session.phase() {
            Phase::Succeeded(result) => assert_eq!(result.score, 85),
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_surfaces_service_failure_message() {
        let driver = SessionDriver::new(MockService::service_err(400, "Invalid file format"));
        let mut session = ready_session();

        driver.submit(&mut session).await.unwrap();

        assert_eq!(
            *session.phase(),
            Phase::Failed("Invalid file format".into())
        );
    }

    #[tokio::test]
    async fn submit_collapses_transport_failure_to_generic_message() {
        let driver = SessionDriver::new(TransportFailure);
        let mut session = ready_session();

        driver.submit(&mut session).await.unwrap();

        assert_eq!(*session.phase(), Phase::Failed("Analysis failed".into()));
    }

    #[tokio::test]
    async fn submit_on_unready_session_does_nothing() {
        let driver = SessionDriver::new(MockService::ok(sample_result()));
        let mut session = Session::new();

        assert!(driver.submit(&mut session).await.is_none());
        assert_eq!(*session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn failed_submission_can_be_resubmitted() {
        let mut session = ready_session();

        let driver = SessionDriver::new(MockService::service_err(500, "Server error"));
        driver.submit(&mut session).await.unwrap();
        assert!(matches!(session.phase(), Phase::Failed(_)));

        // Same input, new submission against a healthy service.
        let driver = SessionDriver::new(MockService::ok(sample_result()));
        let record = driver.submit(&mut session).await.unwrap();
        assert_eq!(record.generation, 2);
        assert!(matches!(session.phase(), Phase::Succeeded(_)));
    }
}
