//! Admin REST API client and resource operations.
//!
//! - [`AdminClient`]: credentials, base URL and transport for one shop
//! - [`admin_base_url`]: the base URL rules for private and OAuth apps
//! - [`wrap_payload`], [`query_from_params`]: how payloads reach the wire
//! - [`AdminError`]: failures of resource calls
//!
//! Resource operations (products, variants, webhooks, customers, orders and
//! shop) are methods on [`AdminClient`] and return the decoded JSON body.

mod client;
mod errors;
mod payload;
mod resources;
mod url;

pub use client::AdminClient;
pub use errors::AdminError;
pub use payload::{query_from_params, wrap_payload, wrap_payload_with_id};
pub use url::admin_base_url;
