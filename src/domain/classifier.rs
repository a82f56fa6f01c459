use crate::domain::outcome::{CallKind, OutcomeRecord, UNKNOWN_ANSWER, lookup};
use crate::error::{GatewayError, Result};

/// Outer `Result.Code` value that defers to `State.Code`.
pub const RESULT_SEE_STATE: i32 = 0;

/// Reads a code as the gateway sent it; `None` when it is not a readable `i32`.
pub fn parse_code(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn lookup_raw(kind: CallKind, raw: &str) -> OutcomeRecord {
    parse_code(raw).map_or(UNKNOWN_ANSWER, |code| lookup(kind, code))
}

pub fn classify_notification(error_code: &str) -> OutcomeRecord {
    lookup_raw(CallKind::Notification, error_code)
}

/// Two-level payment-status classification over the raw `Result.Code` and
/// `State.Code` texts.
///
/// A non-zero `result_code` is final on its own and `state_code` is never read.
/// `result_code == 0` without a `State` node is a decode fault, not an outcome.
/// Every other unreadable or uncatalogued code resolves to [`UNKNOWN_ANSWER`].
pub fn classify_payment_status(
    result_code: &str,
    state_code: Option<&str>,
) -> Result<OutcomeRecord> {
    match parse_code(result_code) {
        Some(RESULT_SEE_STATE) => {
            let state_code = state_code.ok_or_else(|| {
                GatewayError::Decode("Result.Code is 0 but the State node is missing".to_owned())
            })?;
            Ok(lookup_raw(CallKind::PaymentState, state_code))
        }
        Some(code) => Ok(lookup(CallKind::PaymentResult, code)),
        None => Ok(UNKNOWN_ANSWER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::*;

    #[test]
    fn test_notification_table() {
        let cases = [
            ("0", REQUEST_SUCCESSFULLY),
            ("1", NO_QUERY_OPTION),
            ("2", PARTNER_NOT_FOUND),
            ("3", PARTNER_INACTIVE),
            ("4", PARTNER_NOT_AVAILABLE),
            ("5", PARTNER_NOT_POSSIBLE),
            ("6", SMS_LIMIT_HIGHER),
            ("1000", INVALID_REQUEST_SIGNATURE),
            ("9999", INTERNAL_ERROR),
        ];
        for (code, expected) in cases {
            let record = classify_notification(code);
            assert_eq!(record, expected, "notification code {code}");
            assert_eq!(record.code.to_string(), code);
        }
    }

    #[test]
    fn test_unreadable_notification_codes() {
        for code in ["42", "-1", "", "abc", "5.0", "99999999999"] {
            assert_eq!(classify_notification(code), UNKNOWN_ANSWER, "notification code {code:?}");
        }
        assert_eq!(classify_notification(" 4 "), PARTNER_NOT_AVAILABLE);
    }

    #[test]
    fn test_notification_code_five_is_reported_as_success() {
        let record = classify_notification("5");
        assert_eq!(record, PARTNER_NOT_POSSIBLE);
        assert!(record.success);
    }

    #[test]
    fn test_terminal_result_codes_ignore_state() {
        for state in [None, Some("100"), Some("5"), Some("-3"), Some(""), Some("4294967296")] {
            assert_eq!(classify_payment_status("1", state).unwrap(), INCORRECT_SIGNATURE);
            assert_eq!(classify_payment_status("3", state).unwrap(), OPERATION_NOT_FOUND);
            assert_eq!(classify_payment_status("4", state).unwrap(), FOUND_TWO_OPERATIONS);
        }
    }

    #[test]
    fn test_state_transitions() {
        let cases = [
            ("5", OPERATION_INITIATED),
            ("10", OPERATION_CANCELLED_MONEY_NOT_RECEIVED),
            ("50", MONEY_CREDITED_STORE),
            ("60", MONEY_RETURNED_BUYER),
            ("80", OPERATION_SUSPENDED),
            ("100", OPERATION_COMPLETED_SUCCESSFULLY),
            ("800", UNKNOWN_ANSWER),
            ("0", UNKNOWN_ANSWER),
        ];
        for (state, expected) in cases {
            assert_eq!(classify_payment_status("0", Some(state)).unwrap(), expected);
        }
    }

    #[test]
    fn test_unreadable_state_code_is_unknown() {
        for state in ["", "abc", "4294967296", "-4294967296", "100.0"] {
            assert_eq!(
                classify_payment_status("0", Some(state)).unwrap(),
                UNKNOWN_ANSWER,
                "state code {state:?}"
            );
        }
    }

    #[test]
    fn test_unreadable_result_code_is_unknown() {
        for result in ["", "zero", "4294967296"] {
            assert_eq!(classify_payment_status(result, None).unwrap(), UNKNOWN_ANSWER);
            assert_eq!(classify_payment_status(result, Some("100")).unwrap(), UNKNOWN_ANSWER);
        }
    }

    #[test]
    fn test_classification_is_total() {
        let outer = ["0", "1", "2", "3", "4", "800", "-1", "", "x"];
        let inner = [
            None,
            Some("0"),
            Some("5"),
            Some("10"),
            Some("50"),
            Some("60"),
            Some("80"),
            Some("100"),
            Some("999"),
            Some(""),
            Some("99999999999"),
        ];
        for result_code in outer {
            for state_code in inner {
                let outcome = classify_payment_status(result_code, state_code);
                if result_code == "0" && state_code.is_none() {
                    assert!(outcome.unwrap_err().is_decode());
                    continue;
                }
                let record = outcome.unwrap();
                assert_eq!(record.success, result_code == "0" && state_code == Some("100"));
            }
        }
    }

    #[test]
    fn test_unknown_result_code() {
        assert_eq!(classify_payment_status("800", None).unwrap(), UNKNOWN_ANSWER);
    }

    #[test]
    fn test_pending_states_are_not_failures() {
        for state in ["5", "50", "80"] {
            let record = classify_payment_status("0", Some(state)).unwrap();
            assert!(!record.success);
            assert_eq!(record.disposition, Disposition::Pending);
        }
    }

    #[test]
    fn test_missing_state_is_a_decode_fault() {
        let err = classify_payment_status("0", None).unwrap_err();
        assert!(err.is_decode());
    }
}
