//! Application layer: the request façade over the gateway.
//!
//! [`client::RobokassaClient`] composes canonical strings, hashing, transport,
//! decoding and classification into the public operations.

pub mod client;
