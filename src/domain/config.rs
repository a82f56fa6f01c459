use crate::domain::hash::HashAlgorithm;
use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MERCHANT_API_BASE: &str =
    "https://auth.robokassa.ru/Merchant/WebService/Service.asmx";
pub const DEFAULT_NOTIFICATION_BASE: &str = "https://services.robokassa.ru/SMS/";

/// Merchant login and the two shop passwords.
///
/// `secret_key_primary` signs payment links and SMS requests,
/// `secret_key_secondary` signs payment-status queries.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    merchant_id: String,
    secret_key_primary: String,
    secret_key_secondary: String,
}

impl Credentials {
    pub fn new(
        merchant_id: impl Into<String>,
        secret_key_primary: impl Into<String>,
        secret_key_secondary: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Self {
            merchant_id: merchant_id.into(),
            secret_key_primary: secret_key_primary.into(),
            secret_key_secondary: secret_key_secondary.into(),
        };
        for (field, value) in [
            ("merchant_id", &credentials.merchant_id),
            ("secret_key_primary", &credentials.secret_key_primary),
            ("secret_key_secondary", &credentials.secret_key_secondary),
        ] {
            if value.is_empty() {
                return Err(GatewayError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        Ok(credentials)
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub(crate) fn secret_key_primary(&self) -> &str {
        &self.secret_key_primary
    }

    pub(crate) fn secret_key_secondary(&self) -> &str {
        &self.secret_key_secondary
    }
}

// Passwords stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("secret_key_primary", &"***")
            .field("secret_key_secondary", &"***")
            .finish()
    }
}

/// Currency the shop wants to receive, included in payment signatures when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputCurrency {
    Usd,
    Eur,
    Kzt,
}

impl OutputCurrency {
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Kzt => "KZT",
        }
    }
}

impl fmt::Display for OutputCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OutputCurrency {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "KZT" => Ok(Self::Kzt),
            _ => Err(GatewayError::InvalidConfig(format!(
                "unsupported output currency: {s}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub merchant_api_base: String,
    pub notification_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            merchant_api_base: DEFAULT_MERCHANT_API_BASE.to_owned(),
            notification_base: DEFAULT_NOTIFICATION_BASE.to_owned(),
        }
    }
}

impl Endpoints {
    /// URL of a merchant web-service method such as `OpStateExt`.
    pub fn merchant_method(&self, method: &str) -> String {
        format!("{}/{}", self.merchant_api_base.trim_end_matches('/'), method)
    }
}

/// Client settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub output_currency: Option<OutputCurrency>,
    pub test_mode: bool,
    /// Algorithm for payment-link signatures. Status checks always use md5.
    pub signature_algorithm: HashAlgorithm,
    pub language: String,
    pub endpoints: Endpoints,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            output_currency: None,
            test_mode: false,
            signature_algorithm: HashAlgorithm::default(),
            language: "ru".to_owned(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Configuration {
    /// The `IsTest` flag as the merchant API expects it.
    pub fn is_test_param(&self) -> &'static str {
        if self.test_mode { "1" } else { "0" }
    }
}
