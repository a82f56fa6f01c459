use crate::domain::classifier::parse_code;
use crate::domain::payment_method::PaymentMethod;
use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Codes are kept as sent; classification decides what an unreadable one means.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResultNode {
    #[serde(default)]
    pub code: String,
    pub description: Option<String>,
}

impl ResultNode {
    pub fn is_success(&self) -> bool {
        parse_code(&self.code) == Some(0)
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StateNode {
    #[serde(default)]
    pub code: String,
    pub request_date: Option<String>,
    pub state_date: Option<String>,
}

/// `OpStateExt` answer.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OperationStateResponse {
    pub result: ResultNode,
    pub state: Option<StateNode>,
}

/// `CalcOutSumm` answer.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CalcSummsResponse {
    pub result: Option<ResultNode>,
    pub out_sum: Option<String>,
}

impl CalcSummsResponse {
    /// The amount the buyer pays including fees; must be present and positive.
    pub fn out_sum(&self) -> Result<Decimal> {
        let raw = self.out_sum.as_deref().map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            let reason = match &self.result {
                Some(result) if !result.is_success() => format!(
                    "gateway returned code {:?}: {}",
                    result.code,
                    result.description.as_deref().unwrap_or("no description")
                ),
                _ => "OutSum is missing".to_owned(),
            };
            return Err(GatewayError::Decode(reason));
        }
        let out_sum = Decimal::from_str(raw)
            .map_err(|e| GatewayError::Decode(format!("invalid OutSum {raw:?}: {e}")))?;
        if out_sum <= Decimal::ZERO {
            return Err(GatewayError::Decode(format!("OutSum must be positive, got {out_sum}")));
        }
        Ok(out_sum)
    }
}

/// `GetCurrencies` answer.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CurrenciesList {
    pub result: Option<ResultNode>,
    pub groups: Option<GroupsNode>,
}

#[derive(Debug, Deserialize, PartialEq, Default)]
pub struct GroupsNode {
    #[serde(rename = "Group", default)]
    pub groups: Vec<GroupNode>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct GroupNode {
    #[serde(rename = "@Code")]
    pub code: Option<String>,
    #[serde(rename = "@Description")]
    pub description: Option<String>,
    #[serde(rename = "Items")]
    pub items: Option<ItemsNode>,
}

#[derive(Debug, Deserialize, PartialEq, Default)]
pub struct ItemsNode {
    #[serde(rename = "Currency", default)]
    pub currencies: Vec<CurrencyNode>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct CurrencyNode {
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "@Label")]
    pub label: Option<String>,
    #[serde(rename = "@Alias")]
    pub alias: Option<String>,
    #[serde(rename = "@MinValue")]
    pub min_value: Option<String>,
    #[serde(rename = "@MaxValue")]
    pub max_value: Option<String>,
}

impl CurrenciesList {
    /// Flattens every group into payment methods, skipping unnamed entries.
    pub fn into_payment_methods(self) -> Result<Vec<PaymentMethod>> {
        let mut methods = Vec::new();
        for group in self.groups.unwrap_or_default().groups {
            let group_code = group.code.unwrap_or_default();
            for currency in group.items.unwrap_or_default().currencies {
                let Some(name) = currency.name.filter(|name| !name.is_empty()) else {
                    continue;
                };
                methods.push(PaymentMethod::from_attributes(
                    name,
                    currency.label,
                    currency.alias,
                    group_code.clone(),
                    currency.min_value.as_deref(),
                    currency.max_value.as_deref(),
                )?);
            }
        }
        Ok(methods)
    }
}
