pub mod input;
pub mod presenter;
pub mod state;

pub use input::{InputState, has_accepted_extension};
pub use presenter::{ReportView, ScoreTier, ViewState, present};
pub use state::{Command, Dispatch, Event, Phase, Session};
