//! Signature schemes
//!
//! Both schemes work on a SHA-256 digest computed by the caller.

pub mod ecdsa;
pub mod rsa;
