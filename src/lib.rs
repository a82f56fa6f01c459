pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::client::RobokassaClient;
pub use domain::config::{Configuration, Credentials, Endpoints, OutputCurrency};
pub use domain::hash::{HashAlgorithm, hash};
pub use domain::outcome::{Disposition, OutcomeRecord};
pub use domain::payment_method::PaymentMethod;
pub use error::{GatewayError, Result};
