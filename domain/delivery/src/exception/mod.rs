use thiserror::Error;

pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Failures between the upstream catalog and the envelope boundary. None of
/// them escape a data source; they render into ERROR envelopes instead.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Software id is required.")]
    EmptySoftwareId,

    #[error("Upstream request failed with status {status}.")]
    Upstream { status: u16 },

    #[error("Upstream payload could not be decoded: {reason}.")]
    Decode { reason: String },

    #[error("Delivery internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for DeliveryError {
    fn from(e: anyhow::Error) -> Self {
        DeliveryError::InternalError { source: e }
    }
}
