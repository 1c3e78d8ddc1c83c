pub mod endpoint;
pub mod grading;
pub mod record;
pub mod response;

pub use endpoint::{Endpoint, Scheme};
pub use grading::{GradingParameters, PaperDirection};
pub use record::{LogRecord, Verdict};
pub use response::{ErrorBody, GradedSheet, GradingResponse, RecognitionResult, Student};
