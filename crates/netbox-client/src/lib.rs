//! NetBox REST API Client
//!
//! A Rust client library for interacting with the NetBox REST API.
//! Provides type-safe models and CRUD methods for the IPAM (RIRs, VRFs,
//! aggregates, prefixes, IP addresses) and tenancy (tenants, tenant groups)
//! collections.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, WritableVrf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Probe connectivity and the token
//! client.validate_connection().await?;
//!
//! // Create a VRF
//! let vrf = client
//!     .create_vrf(&WritableVrf {
//!         name: "prod".to_string(),
//!         rd: "65000:1".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Query prefixes in that VRF
//! let vrf_id = vrf.id.to_string();
//! let prefixes = client.query_prefixes(&[("vrf_id", vrf_id.as_str())], false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **IPAM Operations**: RIRs, VRFs, aggregates, prefixes, IP addresses
//! - **Tenancy Operations**: Tenants and tenant groups
//! - **Pagination**: Support for fetching all pages of large result sets
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;
