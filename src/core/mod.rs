pub mod extractor;
pub mod handler;
pub mod notifier;
pub mod prober;

pub use crate::domain::model::{ProbeOutcome, ProbeResponse, SqsEvent, SqsRecord};
pub use crate::domain::ports::Notify;
pub use crate::utils::error::Result;
