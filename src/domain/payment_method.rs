use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

pub const DEFAULT_MIN_VALUE: Decimal = Decimal::ZERO;
pub const DEFAULT_MAX_VALUE: Decimal = dec!(9999999);

/// A payment channel the shop can offer, as listed by `GetCurrencies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethod {
    pub name: String,
    pub label: String,
    pub alias: String,
    /// Code of the `<Group>` the channel was listed under.
    pub group: String,
    pub min_value: Decimal,
    pub max_value: Decimal,
}

impl PaymentMethod {
    /// Builds a method from raw attribute values, applying the gateway defaults
    /// for missing or empty limits.
    pub fn from_attributes(
        name: String,
        label: Option<String>,
        alias: Option<String>,
        group: String,
        min_value: Option<&str>,
        max_value: Option<&str>,
    ) -> Result<Self> {
        let min_value = parse_limit("MinValue", min_value)?.unwrap_or(DEFAULT_MIN_VALUE);
        let max_value = parse_limit("MaxValue", max_value)?.unwrap_or(DEFAULT_MAX_VALUE);
        if min_value < Decimal::ZERO {
            return Err(GatewayError::Decode(format!(
                "MinValue of {name} is negative: {min_value}"
            )));
        }
        Ok(Self {
            name,
            label: label.unwrap_or_default(),
            alias: alias.unwrap_or_default(),
            group,
            min_value,
            max_value,
        })
    }

    /// Whether `amount` is within this channel's limits.
    pub fn accepts(&self, amount: Decimal) -> bool {
        self.min_value <= amount && amount <= self.max_value
    }
}

fn parse_limit(attribute: &str, raw: Option<&str>) -> Result<Option<Decimal>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Decimal::from_str(value)
            .map(Some)
            .map_err(|e| GatewayError::Decode(format!("invalid {attribute} {value:?}: {e}"))),
    }
}
