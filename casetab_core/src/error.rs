use thiserror::Error;

use crate::linguistic::ServiceError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed case header {line:?}: {reason}")]
    MalformedHeader { line: String, reason: String },

    #[error("case header {header:?} has no narrative line")]
    DanglingHeader { header: String },

    #[error("age pattern preceded by non-numeric token {token:?}")]
    MalformedAgeToken { token: String },

    #[error("age {token:?} does not fit an unsigned 32-bit integer")]
    AgeOutOfRange { token: String },

    #[error("linguistic service error: {0}")]
    ExternalService(#[from] ServiceError),

    #[error("case {case_number}: {source}")]
    Case {
        case_number: i64,
        #[source]
        source: Box<Self>,
    },
}

impl Error {
    pub(crate) fn in_case(self, case_number: i64) -> Self {
        Self::Case {
            case_number,
            source: Box::new(self),
        }
    }
}
