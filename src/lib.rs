pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::extractor::read_event_message;
pub use crate::core::{handler::ProbeHandler, notifier::SnsNotifier, prober::HttpProber};
pub use config::ProbeConfig;
pub use domain::model::{ProbeOutcome, ProbeResponse, SqsEvent, SqsRecord};
pub use domain::ports::Notify;
pub use utils::error::{ProbeError, Result, PROBE_ERROR_STATUS};
