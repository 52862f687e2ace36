//! NetBox IPAM provider
//!
//! Maps declarative resources (RIRs, VRFs, aggregates, prefixes, IP
//! addresses, tenants, tenant groups) onto CRUD calls against the NetBox REST
//! API, and exposes read-only lookups for prefixes and IP addresses.
//!
//! # Example
//!
//! ```no_run
//! use netbox_provider::provider;
//! use serde_json::{json, Map, Value};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let block: Map<String, Value> = serde_json::from_value(json!({
//!     "app_id": "your-api-token",
//!     "endpoint": "https://netbox.example.com/api",
//! }))?;
//! let provider = provider::configure(block).await?;
//!
//! let desired = serde_json::from_value(json!({
//!     "name": "prod-vrf",
//!     "route_distinguisher": "65000:1",
//! }))?;
//! let state = provider.create("netbox_ipam_vrf", desired).await?;
//! println!("created {}", state.id());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_sources;
pub mod error;
pub mod provider;
pub mod resources;
pub mod schema;
pub mod state;

pub use config::Config;
pub use error::ProviderError;
pub use provider::Provider;
pub use schema::{Attribute, AttributeType, Schema, SchemaError};
pub use state::ResourceData;
