//! Scripted loan tutor: keyword-matched explanations and chat transcripts.

mod responder;
pub mod router;
pub mod topics;
mod transcript;

pub use responder::TutorResponder;
pub use router::{tutor_router, AskRequest, AskResponse};
pub use topics::{Matcher, Topic, TopicRule, QUICK_QUESTIONS};
pub use transcript::{ChatMessage, ChatTranscript, Speaker, FAILURE_REPLY, GREETING};
