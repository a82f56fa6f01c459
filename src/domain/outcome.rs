use serde::Serialize;
use Disposition::{Failed, Pending, Success, Unknown};

/// What an outcome means for the caller, independent of the raw gateway code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Success,
    Pending,
    Failed,
    Unknown,
}

/// Caller-facing result of a gateway call.
///
/// `success` alone does not separate "still in progress" from "failed"; branch
/// on `code` (or [`Disposition`]) for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    pub code: i32,
    pub message: &'static str,
    pub success: bool,
    #[serde(skip)]
    pub disposition: Disposition,
}

impl OutcomeRecord {
    const fn new(code: i32, message: &'static str, success: bool, disposition: Disposition) -> Self {
        Self {
            code,
            message,
            success,
            disposition,
        }
    }
}

/// Endpoint whose code table a raw code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Notification,
    /// Outer `Result.Code` of a payment-status answer.
    PaymentResult,
    /// Inner `State.Code`, consulted only when `Result.Code` is 0.
    PaymentState,
}

pub const UNKNOWN_ANSWER: OutcomeRecord =
    OutcomeRecord::new(-1, "unknown answer", false, Unknown);

pub const REQUEST_SUCCESSFULLY: OutcomeRecord =
    OutcomeRecord::new(0, "request handled successfully", true, Success);
pub const NO_QUERY_OPTION: OutcomeRecord =
    OutcomeRecord::new(1, "no query option", false, Failed);
pub const PARTNER_NOT_FOUND: OutcomeRecord =
    OutcomeRecord::new(2, "partner was not found", false, Failed);
pub const PARTNER_INACTIVE: OutcomeRecord =
    OutcomeRecord::new(3, "partner is inactive", false, Failed);
pub const PARTNER_NOT_AVAILABLE: OutcomeRecord = OutcomeRecord::new(
    4,
    "SMS sending for this partner is not available",
    false,
    Failed,
);
// The gateway documents code 5 as non-fatal; integrators rely on `success: true`.
pub const PARTNER_NOT_POSSIBLE: OutcomeRecord = OutcomeRecord::new(
    5,
    "currently sending SMS messages by the indicated partner is not possible",
    true,
    Success,
);
pub const SMS_LIMIT_HIGHER: OutcomeRecord =
    OutcomeRecord::new(6, "SMS limit is higher", false, Failed);
pub const INVALID_REQUEST_SIGNATURE: OutcomeRecord =
    OutcomeRecord::new(1000, "invalid request signature", false, Failed);
pub const INTERNAL_ERROR: OutcomeRecord =
    OutcomeRecord::new(9999, "internal error", false, Failed);

pub const INCORRECT_SIGNATURE: OutcomeRecord =
    OutcomeRecord::new(1, "incorrect digital signature of the request", false, Failed);
pub const OPERATION_NOT_FOUND: OutcomeRecord = OutcomeRecord::new(
    3,
    "information about the operation with this InvoiceID was not found",
    false,
    Failed,
);
pub const FOUND_TWO_OPERATIONS: OutcomeRecord =
    OutcomeRecord::new(4, "found two operations with this InvoiceID", false, Failed);

pub const OPERATION_INITIATED: OutcomeRecord = OutcomeRecord::new(
    5,
    "operation is only initiated, payment has not been received",
    false,
    Pending,
);
pub const OPERATION_CANCELLED_MONEY_NOT_RECEIVED: OutcomeRecord = OutcomeRecord::new(
    10,
    "operation was cancelled, money from the buyer was not received",
    false,
    Failed,
);
pub const MONEY_CREDITED_STORE: OutcomeRecord = OutcomeRecord::new(
    50,
    "money from the buyer was received, crediting to the store account is in progress",
    false,
    Pending,
);
pub const MONEY_RETURNED_BUYER: OutcomeRecord = OutcomeRecord::new(
    60,
    "money was returned to the buyer after receipt",
    false,
    Failed,
);
pub const OPERATION_SUSPENDED: OutcomeRecord =
    OutcomeRecord::new(80, "execution of the operation is suspended", false, Pending);
pub const OPERATION_COMPLETED_SUCCESSFULLY: OutcomeRecord =
    OutcomeRecord::new(100, "operation was completed successfully", true, Success);

/// Every known `(call kind, gateway code)` pair.
///
/// `PaymentResult` code 0 is deliberately absent: it is not an outcome, it
/// means "look at `State.Code`".
pub static CATALOG: &[(CallKind, i32, OutcomeRecord)] = &[
    (CallKind::Notification, 0, REQUEST_SUCCESSFULLY),
    (CallKind::Notification, 1, NO_QUERY_OPTION),
    (CallKind::Notification, 2, PARTNER_NOT_FOUND),
    (CallKind::Notification, 3, PARTNER_INACTIVE),
    (CallKind::Notification, 4, PARTNER_NOT_AVAILABLE),
    (CallKind::Notification, 5, PARTNER_NOT_POSSIBLE),
    (CallKind::Notification, 6, SMS_LIMIT_HIGHER),
    (CallKind::Notification, 1000, INVALID_REQUEST_SIGNATURE),
    (CallKind::Notification, 9999, INTERNAL_ERROR),
    (CallKind::PaymentResult, 1, INCORRECT_SIGNATURE),
    (CallKind::PaymentResult, 3, OPERATION_NOT_FOUND),
    (CallKind::PaymentResult, 4, FOUND_TWO_OPERATIONS),
    (CallKind::PaymentState, 5, OPERATION_INITIATED),
    (CallKind::PaymentState, 10, OPERATION_CANCELLED_MONEY_NOT_RECEIVED),
    (CallKind::PaymentState, 50, MONEY_CREDITED_STORE),
    (CallKind::PaymentState, 60, MONEY_RETURNED_BUYER),
    (CallKind::PaymentState, 80, OPERATION_SUSPENDED),
    (CallKind::PaymentState, 100, OPERATION_COMPLETED_SUCCESSFULLY),
];

/// Looks up a code; anything not in [`CATALOG`] is [`UNKNOWN_ANSWER`].
pub fn lookup(kind: CallKind, code: i32) -> OutcomeRecord {
    CATALOG
        .iter()
        .find(|(k, c, _)| *k == kind && *c == code)
        .map(|(_, _, record)| *record)
        .unwrap_or(UNKNOWN_ANSWER)
}
