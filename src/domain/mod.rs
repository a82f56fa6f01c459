pub mod classifier;
pub mod config;
pub mod hash;
pub mod outcome;
pub mod payment_method;
pub mod ports;
pub mod signature;
