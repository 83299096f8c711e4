//! Noxsub API — Shared Library
//!
//! Holds the greeting constants and response builder used by the
//! serverless function in `api/`, keeping the handler itself thin.

pub mod greeting;
