use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Outbound HTTP exchange with the gateway.
///
/// GET requests carry `params` in the query string, POST requests as a
/// form-encoded body. Implementations return the raw response body and surface
/// network or HTTP-status failures as transport faults.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn issue_request(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String>;
}

pub type TransportBox = Box<dyn Transport>;
