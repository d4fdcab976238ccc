//! Straddle API client library.
//!
//! Typed records for customers, paykeys, bridge links, charges, payouts,
//! payments and funding events, plus an async client that sends them.
//!
//! # Modules
//!
//! - `model`: serialization framework shared by every record (raw field map,
//!   open enums, nullable tri-state, builders, validation, variant resolution).
//! - `models`: the API's records, one submodule per resource.
//! - `client`: `StraddleClient`, the HTTP transport.
//! - `services`: one service per resource, reached through the client.
//! - `config`: client configuration, from code or `STRADDLE_*` env vars.
//! - `errors`: `ModelError`, `ValidationError` and `ClientError`.
//! - `circuit_breaker`: breaker guarding outbound calls.
//! - `obs`: tracing setup.
//!
//! ```no_run
//! use straddle_client::{ClientConfig, StraddleClient};
//!
//! # async fn run() -> Result<(), straddle_client::errors::ClientError> {
//! let client = StraddleClient::new(ClientConfig::new("sk_test_..."))?;
//! let customer = client.customers().get("0190e4c2-7d8d-7a3b-b4c6-8c3f2e1d0a9b").await?;
//! println!("{:?}", customer.data().and_then(|c| c.status()));
//! # Ok(())
//! # }
//! ```

pub mod circuit_breaker;
pub mod client;
pub mod config;
pub mod errors;
pub mod model;
pub mod models;
pub mod obs;
pub mod services;

pub use client::StraddleClient;
pub use config::{ClientConfig, Environment};
