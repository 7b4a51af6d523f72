//! Numeric status vocabulary carried in every result envelope.
//!
//! The numbers borrow HTTP semantics purely as a classifier; nothing in the
//! catalog speaks HTTP.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    /// Success with a payload.
    Ok,
    /// Success of a pure mutation (no payload expected).
    NoContent,
    /// Absent or malformed input, field validation failure, uniqueness conflict.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Unexpected failure while mutating (persistence, cancellation).
    InternalError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NoContent => 204,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalError => 500,
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        value.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = CoreError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            200 => Ok(Status::Ok),
            204 => Ok(Status::NoContent),
            400 => Ok(Status::BadRequest),
            404 => Ok(Status::NotFound),
            500 => Ok(Status::InternalError),
            other => Err(CoreError::UnknownStatus(other)),
        }
    }
}
