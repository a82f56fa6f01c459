//! Canonical strings hashed into request signatures.
//!
//! Every builder lists its fields in gateway order, drops the empty ones and
//! joins the rest with `:`. "Empty" means absent or the empty string. Numeric
//! fields are rendered before filtering and are therefore always present,
//! including `0`.
//!
//! The gateway recomputes the signature from the values it received, so the
//! strings produced here must match byte for byte.

use crate::domain::config::{Credentials, OutputCurrency};
use rust_decimal::Decimal;

pub const SEPARATOR: &str = ":";

/// Keeps the present, non-empty fields in call order and joins them.
pub fn join_present<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fields
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// `merchantId:amount:invoiceId[:outputCurrency][:receipt]:secretKeyPrimary`
///
/// `amount` is rendered with its own scale (`100` and `100.00` differ), so pass
/// the same value that goes into the payment form.
pub fn build_canonical_string(
    credentials: &Credentials,
    output_currency: Option<OutputCurrency>,
    amount: Decimal,
    invoice_id: u64,
    receipt: Option<&str>,
) -> String {
    let amount = amount.to_string();
    let invoice_id = invoice_id.to_string();
    join_present([
        Some(credentials.merchant_id()),
        Some(amount.as_str()),
        Some(invoice_id.as_str()),
        output_currency.map(OutputCurrency::code),
        receipt,
        Some(credentials.secret_key_primary()),
    ])
}

/// `merchantId:phone:message:secretKeyPrimary`
pub fn build_notification_canonical_string(
    merchant_id: &str,
    phone: &str,
    message: &str,
    secret_key_primary: &str,
) -> String {
    join_present([
        Some(merchant_id),
        Some(phone),
        Some(message),
        Some(secret_key_primary),
    ])
}

/// `merchantId:invoiceId:secretKeySecondary`
pub fn build_status_canonical_string(credentials: &Credentials, invoice_id: u64) -> String {
    let invoice_id = invoice_id.to_string();
    join_present([
        Some(credentials.merchant_id()),
        Some(invoice_id.as_str()),
        Some(credentials.secret_key_secondary()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn credentials() -> Credentials {
        Credentials::new("login", "pass1", "pass2").unwrap()
    }

    #[test]
    fn test_canonical_string_without_receipt() {
        let canonical = build_canonical_string(&credentials(), None, dec!(100), 1, None);
        assert_eq!(canonical, "login:100:1:pass1");
    }

    #[test]
    fn test_empty_receipt_collapses_to_absent() {
        let absent = build_canonical_string(&credentials(), None, dec!(100), 1, None);
        let empty = build_canonical_string(&credentials(), None, dec!(100), 1, Some(""));
        assert_eq!(absent, empty);
        assert!(!empty.contains("::"));
        assert!(!empty.ends_with(':'));
    }

    #[test]
    fn test_receipt_keeps_its_position() {
        let receipt = r#"{"items":[{"name":"Tea","quantity":1,"sum":100,"tax":"none"}]}"#;
        let canonical =
            build_canonical_string(&credentials(), None, dec!(100), 1, Some(receipt));
        assert_eq!(canonical, format!("login:100:1:{receipt}:pass1"));
    }

    #[test]
    fn test_output_currency_precedes_receipt() {
        let canonical = build_canonical_string(
            &credentials(),
            Some(OutputCurrency::Usd),
            dec!(12.50),
            7,
            Some("{}"),
        );
        assert_eq!(canonical, "login:12.50:7:USD:{}:pass1");
    }

    #[test]
    fn test_zero_values_are_never_dropped() {
        let canonical = build_canonical_string(&credentials(), None, Decimal::ZERO, 0, None);
        assert_eq!(canonical, "login:0:0:pass1");
    }

    #[test]
    fn test_notification_canonical_string() {
        assert_eq!(
            build_notification_canonical_string("login", "71234567890", "Test", "pass1"),
            "login:71234567890:Test:pass1"
        );
    }

    #[test]
    fn test_status_canonical_string_uses_secondary_key() {
        assert_eq!(build_status_canonical_string(&credentials(), 1234), "login:1234:pass2");
    }

    #[test]
    fn test_join_present_preserves_order() {
        assert_eq!(join_present([Some("a"), None, Some(""), Some("b"), Some("c")]), "a:b:c");
        assert_eq!(join_present([None, Some("")]), "");
    }
}
