//! Wire formats of the gateway's answers.

pub mod notification;
pub mod xml;
