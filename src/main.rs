use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use robokassa::infrastructure::http::{HttpConfig, ReqwestTransport};
use robokassa::{Configuration, Credentials, HashAlgorithm, OutputCurrency, RobokassaClient};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant login
    #[arg(long, env = "ROBOKASSA_LOGIN")]
    login: String,

    /// Shop password #1 (payment links, SMS)
    #[arg(long, env = "ROBOKASSA_PASSWORD1", hide_env_values = true)]
    password1: String,

    /// Shop password #2 (payment status)
    #[arg(long, env = "ROBOKASSA_PASSWORD2", hide_env_values = true)]
    password2: String,

    /// Output currency included in payment signatures (USD, EUR, KZT)
    #[arg(long)]
    currency: Option<String>,

    /// Send requests in test mode
    #[arg(long)]
    test: bool,

    /// Payment-link signature algorithm
    #[arg(long, default_value = "md5")]
    algorithm: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the signature for a payment link
    Sign {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        invoice_id: u64,
        /// Receipt JSON, included verbatim
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Send an SMS through the gateway
    Sms {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
    /// Amount the buyer pays including fees
    Fee {
        #[arg(long, default_value = "all")]
        label: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Fee of a payment channel in percent
    Commission {
        #[arg(long, default_value = "all")]
        label: String,
        #[arg(long, default_value = "10000")]
        amount: Decimal,
    },
    /// List the shop's payment methods
    Methods,
    /// Check the payment status of an invoice
    Status {
        #[arg(long)]
        invoice_id: u64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).into_diagnostic()?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let credentials =
        Credentials::new(cli.login, cli.password1, cli.password2).into_diagnostic()?;
    let output_currency = cli
        .currency
        .as_deref()
        .map(str::parse::<OutputCurrency>)
        .transpose()
        .into_diagnostic()?;
    let config = Configuration {
        output_currency,
        test_mode: cli.test,
        signature_algorithm: cli.algorithm.parse::<HashAlgorithm>().into_diagnostic()?,
        ..Configuration::default()
    };
    let transport = ReqwestTransport::with_config(&HttpConfig {
        timeout_secs: cli.timeout,
        ..HttpConfig::default()
    })
    .into_diagnostic()?;
    let client = RobokassaClient::new(credentials, config, Box::new(transport));

    match cli.command {
        Command::Sign {
            amount,
            invoice_id,
            receipt,
        } => {
            println!(
                "{}",
                client.payment_signature(amount, invoice_id, receipt.as_deref())
            );
        }
        Command::Sms { phone, message } => {
            print_json(&client.send_notification(&phone, &message).await.into_diagnostic()?)?;
        }
        Command::Fee { label, amount } => {
            let out_sum = client
                .compute_fee_adjusted_amount(&label, amount)
                .await
                .into_diagnostic()?;
            println!("{out_sum}");
        }
        Command::Commission { label, amount } => {
            let percent = client
                .commission_percent(&label, amount)
                .await
                .into_diagnostic()?;
            println!("{percent}");
        }
        Command::Methods => {
            print_json(&client.list_payment_methods().await.into_diagnostic()?)?;
        }
        Command::Status { invoice_id } => {
            print_json(&client.check_payment_status(invoice_id).await.into_diagnostic()?)?;
        }
    }

    Ok(())
}
