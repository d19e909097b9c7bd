use crate::api::{AnalysisMode, AnalysisRequest, AnalysisResult, ResumeFile};

use super::input::InputState;

/// Where the single analysis exchange stands.
///
/// Idle → Submitting → {Succeeded, Failed}; the next submit re-enters
/// Submitting directly, dropping the prior payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// Closed set of user-driven commands against the session.
#[derive(Debug, Clone)]
pub enum Command {
    SetFile(ResumeFile),
    SetJobDescription(String),
    SetMode(AnalysisMode),
    Submit,
    Reset,
}

/// Completion events fed back from the network exchange. Each carries the
/// generation of the submission that produced it.
#[derive(Debug, Clone)]
pub enum Event {
    RequestSucceeded {
        generation: u64,
        result: AnalysisResult,
    },
    RequestFailed {
        generation: u64,
        message: String,
    },
}

/// A transition side effect: the driver must perform this exchange and feed
/// the outcome back as an [`Event`] tagged with `generation`.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub generation: u64,
    pub request: AnalysisRequest,
}

/// One logical analysis session: the user's input plus the exchange phase.
///
/// All transitions are synchronous; the only suspend point lives in the
/// driver that performs the dispatched exchange.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: InputState,
    phase: Phase,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies one command. Returns a [`Dispatch`] when the command starts a
    /// network exchange, `None` otherwise.
    ///
    /// `Submit` on a not-ready input is a no-op: readiness is enforced
    /// procedurally (the submit surface stays disabled), not as an error.
    /// `Reset` touches only the input; a prior Succeeded or Failed phase
    /// stays visible until the next submit.
    pub fn apply(&mut self, command: Command) -> Option<Dispatch> {
        match command {
            Command::SetFile(file) => {
                self.input.set_file(file);
                None
            }
            Command::SetJobDescription(text) => {
                self.input.set_job_description(text);
                None
            }
            Command::SetMode(mode) => {
                self.input.set_mode(mode);
                None
            }
            Command::Reset => {
                self.input.reset();
                None
            }
            Command::Submit => {
                let request = self.input.build_request()?;
                // Any previous result or error is dropped the instant a new
                // submission begins, before the outcome is known.
                self.phase = Phase::Submitting;
                self.generation += 1;
                Some(Dispatch {
                    generation: self.generation,
                    request,
                })
            }
        }
    }

    /// Applies a completion event. Events from a superseded generation are
    /// discarded so a late response never overwrites a newer submission.
    pub fn complete(&mut self, event: Event) {
        let (generation, phase) = match event {
            Event::RequestSucceeded { generation, result } => {
                (generation, Phase::Succeeded(result))
            }
            Event::RequestFailed {
                generation,
                message,
            } => (generation, Phase::Failed(message)),
        };
        if generation != self.generation {
            return;
        }
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(score: u8) -> AnalysisResult {
        AnalysisResult {
            score,
            matching_keywords: vec!["python".into()],
            missing_keywords: vec![],
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

    #[test]
    fn starts_idle_with_default_input() {
        let session = Session::new();
        assert_eq!(*session.phase(), Phase::Idle);
        assert_eq!(session.input().mode(), AnalysisMode::Quick);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn submit_without_ready_input_is_a_noop() {
        let mut session = Session::new();
        assert!(session.apply(Command::Submit).is_none());
        assert_eq!(*session.phase(), Phase::Idle);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn submit_dispatches_and_enters_submitting() {
        let mut session = ready_session();
        let dispatch = session.apply(Command::Submit).unwrap();

        assert_eq!(*session.phase(), Phase::Submitting);
        assert_eq!(dispatch.generation, 1);
        assert_eq!(dispatch.request.resume.filename, "resume.pdf");
        assert_eq!(dispatch.request.mode, AnalysisMode::Quick);
    }

    #[test]
    fn success_event_populates_result() {
        let mut session = ready_session();
        let dispatch = session.apply(Command::Submit).unwrap();

        session.complete(Event::RequestSucceeded {
            generation: dispatch.generation,
            result: sample_result(85),
        });

        match session.phase() {
            Phase::Succeeded(result) => assert_eq!(result.score, 85),
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn failure_event_records_message() {
        let mut session = ready_session();
        let dispatch = session.apply(Command::Submit).unwrap();

        session.complete(Event::RequestFailed {
            generation: dispatch.generation,
            message: "Invalid file format".into(),
        });

        assert_eq!(*session.phase(), Phase::Failed("Invalid file format".into()));
    }

    #[test]
    fn resubmit_clears_prior_failure() {
        let mut session = ready_session();
        let dispatch = session.apply(Command::Submit).unwrap();
        session.complete(Event::RequestFailed {
            generation: dispatch.generation,
            message: "Server error".into(),
        });

        session.apply(Command::Submit).unwrap();
        assert_eq!(*session.phase(), Phase::Submitting);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = ready_session();
        let first = session.apply(Command::Submit).unwrap();
        let second = session.apply(Command::Submit).unwrap();
        assert_ne!(first.generation, second.generation);

        // The first exchange resolves late; only the second may apply.
        session.complete(Event::RequestSucceeded {
            generation: first.generation,
            result: sample_result(10),
        });
        assert_eq!(*session.phase(), Phase::Submitting);

        session.complete(Event::RequestSucceeded {
            generation: second.generation,
            result: sample_result(90),
        });
        match session.phase() {
            Phase::Succeeded(result) => assert_eq!(result.score, 90),
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn reset_leaves_prior_result_in_place() {
        let mut session = ready_session();
        let dispatch = session.apply(Command::Submit).unwrap();
        session.complete(Event::RequestSucceeded {
            generation: dispatch.generation,
            result: sample_result(70),
        });

        session.apply(Command::Reset);

        assert!(matches!(session.phase(), Phase::Succeeded(_)));
        assert!(session.input().file().is_none());
        assert_eq!(session.input().job_description(), "");
        assert_eq!(session.input().mode(), AnalysisMode::Quick);
    }

    #[test]
    fn input_persists_across_submissions() {
        let mut session = ready_session();
        let first = session.apply(Command::Submit).unwrap();
        session.complete(Event::RequestFailed {
            generation: first.generation,
            message: "Server error".into(),
        });

        // Same input is still ready; the next submit reuses it.
        let second = session.apply(Command::Submit).unwrap();
        assert_eq!(second.request.resume.filename, "resume.pdf");
        assert_eq!(
            second.request.job_description,
            "Looking for a Python developer"
        );
    }
}
