#![allow(dead_code)]

use std::fmt::Display;
use robokassa::infrastructure::scripted::ScriptedTransport;
use robokassa::{Configuration, Credentials, RobokassaClient};

pub const LOGIN: &str = "login";
pub const PASSWORD1: &str = "pass1";
pub const PASSWORD2: &str = "pass2";

pub const FULL_OPERATION: &str = include_str!("../fixtures/full_operation.xml");
pub const FULL_CURRENCIES: &str = include_str!("../fixtures/full_currencies.xml");
pub const EMPTY_CURRENCIES: &str = include_str!("../fixtures/empty_currencies.xml");
pub const CALC_OUT_SUMM_SUCCESS: &str = include_str!("../fixtures/calc_out_summ_success.xml");
pub const CALC_OUT_SUMM_ERROR: &str = include_str!("../fixtures/calc_out_summ_error.xml");

/// Payment-status answer carrying only a `Result` node.
pub fn empty_operation(code: i32) -> String {
    format!(
        r#"
<?xml version="1.0" encoding="utf-8"?>
<OperationStateResponse xmlns="http://merchant.roboxchange.com/WebService/">
    <Result>
        <Code>{code}</Code>
        <Description>Problem description</Description>
    </Result>
</OperationStateResponse>
"#
    )
}

/// Payment-status answer with `Result.Code` 0 and the given `State.Code`.
pub fn incomplete_operation(state: impl Display) -> String {
    operation(0, state)
}

/// Payment-status answer carrying both a `Result` and a `State` node.
pub fn operation(result: impl Display, state: impl Display) -> String {
    format!(
        r#"
<?xml version="1.0" encoding="utf-8"?>
<OperationStateResponse xmlns="http://merchant.roboxchange.com/WebService/">
    <Result>
        <Code>{result}</Code>
    </Result>
    <State>
        <Code>{state}</Code>
        <RequestDate>2019-11-13T10:21:22.0500029+03:00</RequestDate>
        <StateDate>2018-02-22T15:56:54.6833333+03:00</StateDate>
    </State>
</OperationStateResponse>
"#
    )
}

pub fn sms_answer(error_code: i32) -> String {
    format!(
        r#"{{"result": {}, "count": 10, "errorCode": {error_code}, "errorMessage": ""}}"#,
        error_code == 0
    )
}

pub fn client(transport: &ScriptedTransport, config: Configuration) -> RobokassaClient {
    RobokassaClient::new(
        Credentials::new(LOGIN, PASSWORD1, PASSWORD2).unwrap(),
        config,
        Box::new(transport.clone()),
    )
}

pub fn test_client(transport: &ScriptedTransport) -> RobokassaClient {
    client(
        transport,
        Configuration {
            test_mode: true,
            ..Configuration::default()
        },
    )
}
