//! Provider error types.
//!
//! Remote failures keep the underlying `NetBoxError` as their source so the
//! text reported to the user is the text NetBox returned.

use crate::schema::SchemaError;
use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur while configuring the provider or running a
/// resource / data source operation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The endpoint could not be parsed as an absolute URI
    #[error("Invalid endpoint {endpoint:?}: {source}")]
    Configuration {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The connectivity probe made during configuration failed
    #[error("Unable to validate NetBox connection: {0}")]
    ConnectionValidation(#[source] NetBoxError),

    /// The HTTP client could not be constructed
    #[error("Unable to build NetBox client: {0}")]
    ClientBuild(#[source] NetBoxError),

    /// A read or list call against NetBox failed
    #[error("{operation} failed: {source}")]
    RemoteRead {
        operation: &'static str,
        #[source]
        source: NetBoxError,
    },

    /// A create, update or delete call against NetBox failed
    #[error("{operation} failed: {source}")]
    RemoteWrite {
        operation: &'static str,
        #[source]
        source: NetBoxError,
    },

    /// A data source search matched nothing
    #[error("{kind} not found")]
    NotFound { kind: &'static str },

    /// A data source search matched more than one record
    #[error("More than one {kind} matches search terms, please narrow")]
    AmbiguousResult { kind: &'static str },

    /// A required attribute is absent from state
    #[error("Missing required attribute '{name}'")]
    MissingAttribute { name: String },

    /// A stored or imported identifier does not end in a numeric ID
    #[error("Invalid resource identifier {identifier:?}")]
    InvalidIdentifier { identifier: String },

    /// Configuration did not satisfy the schema
    #[error("Invalid configuration for {type_name}: {}", join_errors(.errors))]
    Schema {
        type_name: String,
        errors: Vec<SchemaError>,
    },

    /// No resource is registered under this name
    #[error("Unknown resource type '{0}'")]
    UnknownResourceType(String),

    /// No data source is registered under this name
    #[error("Unknown data source '{0}'")]
    UnknownDataSource(String),
}

fn join_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ProviderError {
    /// Returns true for failures of a remote read or list call
    pub fn is_remote_read(&self) -> bool {
        matches!(self, ProviderError::RemoteRead { .. })
    }

    /// Returns true for failures of a remote create, update or delete call
    pub fn is_remote_write(&self) -> bool {
        matches!(self, ProviderError::RemoteWrite { .. })
    }
}
