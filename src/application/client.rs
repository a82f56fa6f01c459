use crate::domain::classifier::{classify_notification, classify_payment_status};
use crate::domain::config::{Configuration, Credentials};
use crate::domain::hash::HashAlgorithm;
use crate::domain::outcome::OutcomeRecord;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::{HttpMethod, TransportBox};
use crate::domain::signature::{
    build_canonical_string, build_notification_canonical_string, build_status_canonical_string,
};
use crate::error::{GatewayError, Result};
use crate::interfaces::notification;
use crate::interfaces::xml::{self, responses};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, instrument, warn};

/// Channel label callers use to mean "no specific channel".
pub const ALL_CHANNELS: &str = "all";

/// Status queries are always signed with md5, whatever the configured algorithm.
pub const STATUS_SIGNATURE_ALGORITHM: HashAlgorithm = HashAlgorithm::Md5;
pub const NOTIFICATION_SIGNATURE_ALGORITHM: HashAlgorithm = HashAlgorithm::Md5;

/// Client for the gateway's merchant web service and SMS service.
///
/// `RobokassaClient` owns the shop credentials and configuration, signs each
/// outbound call, and turns the gateway's answer into an [`OutcomeRecord`] or
/// a typed value. Every operation performs exactly one request through the
/// injected transport; nothing is cached or retried, so a single instance can
/// serve concurrent callers.
pub struct RobokassaClient {
    credentials: Credentials,
    config: Configuration,
    transport: TransportBox,
}

impl RobokassaClient {
    /// Creates a new `RobokassaClient`.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Merchant login and the two shop passwords.
    /// * `config` - Currency, test-mode and endpoint settings.
    /// * `transport` - The HTTP exchange used for every call.
    pub fn new(credentials: Credentials, config: Configuration, transport: TransportBox) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The unhashed payment-link signature string for this shop.
    pub fn canonical_string(
        &self,
        amount: Decimal,
        invoice_id: u64,
        receipt: Option<&str>,
    ) -> String {
        build_canonical_string(
            &self.credentials,
            self.config.output_currency,
            amount,
            invoice_id,
            receipt,
        )
    }

    /// Signature for a payment link, hashed with the configured algorithm.
    pub fn payment_signature(
        &self,
        amount: Decimal,
        invoice_id: u64,
        receipt: Option<&str>,
    ) -> String {
        self.config
            .signature_algorithm
            .digest(&self.canonical_string(amount, invoice_id, receipt))
    }

    /// Sends an SMS through the gateway and classifies the service's answer.
    #[instrument(skip_all, fields(merchant = self.credentials.merchant_id()))]
    pub async fn send_notification(&self, phone: &str, message: &str) -> Result<OutcomeRecord> {
        let canonical = build_notification_canonical_string(
            self.credentials.merchant_id(),
            phone,
            message,
            self.credentials.secret_key_primary(),
        );
        let params = vec![
            ("login".to_owned(), self.credentials.merchant_id().to_owned()),
            ("phone".to_owned(), phone.to_owned()),
            ("message".to_owned(), message.to_owned()),
            (
                "signature".to_owned(),
                NOTIFICATION_SIGNATURE_ALGORITHM.digest(&canonical),
            ),
        ];

        let body = self
            .transport
            .issue_request(HttpMethod::Get, &self.config.endpoints.notification_base, &params)
            .await?;
        let response = notification::decode(&body)?;
        let outcome = classify_notification(&response.error_code);
        debug!(code = outcome.code, success = outcome.success, "notification classified");
        Ok(outcome)
    }

    /// Amount the buyer pays for `amount` through `channel_label`, fees included.
    ///
    /// Pass [`ALL_CHANNELS`] or an empty label to let the gateway pick.
    #[instrument(skip(self))]
    pub async fn compute_fee_adjusted_amount(
        &self,
        channel_label: &str,
        amount: Decimal,
    ) -> Result<Decimal> {
        let response: responses::CalcSummsResponse = self
            .merchant_call(
                "CalcOutSumm",
                vec![
                    ("MerchantLogin", self.credentials.merchant_id().to_owned()),
                    ("IncCurrLabel", normalize_label(channel_label).to_owned()),
                    ("IncSum", amount.to_string()),
                ],
            )
            .await?;
        response.out_sum()
    }

    /// Fee of `channel_label` in whole percent of `amount`.
    pub async fn commission_percent(&self, channel_label: &str, amount: Decimal) -> Result<Decimal> {
        let out_sum = self.compute_fee_adjusted_amount(channel_label, amount).await?;
        let ratio = (amount - out_sum)
            .checked_div(out_sum)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .ok_or_else(|| {
                GatewayError::Decode(format!("cannot derive commission from OutSum {out_sum}"))
            })?;
        // Half-way values round up, as the gateway's own calculator does.
        Ok((ratio + dec!(0.5)).floor().abs())
    }

    /// Payment channels available to the shop; empty when none are listed.
    #[instrument(skip(self))]
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>> {
        let response: responses::CurrenciesList = self
            .merchant_call(
                "GetCurrencies",
                vec![
                    ("MerchantLogin", self.credentials.merchant_id().to_owned()),
                    ("Language", self.config.language.clone()),
                ],
            )
            .await?;
        if let Some(result) = &response.result
            && !result.is_success()
        {
            warn!(code = %result.code, "GetCurrencies returned a non-zero result code");
        }
        let methods = response.into_payment_methods()?;
        debug!(count = methods.len(), "payment methods listed");
        Ok(methods)
    }

    /// Current state of the payment for `invoice_id`.
    #[instrument(skip(self))]
    pub async fn check_payment_status(&self, invoice_id: u64) -> Result<OutcomeRecord> {
        let canonical = build_status_canonical_string(&self.credentials, invoice_id);
        let response: responses::OperationStateResponse = self
            .merchant_call(
                "OpStateExt",
                vec![
                    ("MerchantLogin", self.credentials.merchant_id().to_owned()),
                    ("InvoiceID", invoice_id.to_string()),
                    ("Signature", STATUS_SIGNATURE_ALGORITHM.digest(&canonical)),
                ],
            )
            .await?;
        let outcome = classify_payment_status(
            &response.result.code,
            response.state.as_ref().map(|state| state.code.as_str()),
        )?;
        debug!(code = outcome.code, success = outcome.success, "payment status classified");
        Ok(outcome)
    }

    /// POSTs to a merchant web-service method with `IsTest` appended and
    /// decodes the XML answer.
    async fn merchant_call<T>(&self, method: &str, params: Vec<(&str, String)>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect();
        params.push(("IsTest".to_owned(), self.config.is_test_param().to_owned()));

        let url = self.config.endpoints.merchant_method(method);
        let body = self
            .transport
            .issue_request(HttpMethod::Post, &url, &params)
            .await?;
        xml::decode(&body)
    }
}

fn normalize_label(channel_label: &str) -> &str {
    if channel_label == ALL_CHANNELS { "" } else { channel_label }
}
