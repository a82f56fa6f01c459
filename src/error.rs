use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Faults raised by the gateway client.
///
/// A gateway that *answers* with a failure code is not a fault: that answer is
/// classified into an [`OutcomeRecord`](crate::domain::outcome::OutcomeRecord).
/// These variants cover the cases where no answer could be obtained or read.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("malformed XML: {0}")]
    MalformedXml(#[from] quick_xml::Error),
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GatewayError {
    /// The request never produced a readable body.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_))
    }

    /// A body was received but could not be turned into a typed response.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Xml(_) | Self::MalformedXml(_) | Self::Json(_) | Self::Decode(_)
        )
    }
}
