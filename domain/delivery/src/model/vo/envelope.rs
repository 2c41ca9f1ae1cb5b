use serde::{Deserialize, Serialize};

use crate::exception::DeliveryError;

/// Outcome marker carried by every data-source response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
}

/// The success/error wrapper returned by every data-source call.
///
/// `data` is always present: an error carries the type's default (an empty
/// collection for list responses), so consumers never deal with absence.
/// `err_msg` is human readable and empty on success.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub status: ResponseStatus,
    pub err_msg: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            err_msg: String::new(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

impl<T: Default> ResponseEnvelope<T> {
    pub fn error(err_msg: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            err_msg: err_msg.into(),
            data: T::default(),
        }
    }
}

impl<T: Default> From<DeliveryError> for ResponseEnvelope<T> {
    fn from(e: DeliveryError) -> Self {
        Self::error(e.to_string())
    }
}
