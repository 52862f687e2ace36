//! Provider registration and operation dispatch
//!
//! The registry is a static table of resource types and data sources.
//! `configure` turns the provider block into a client; the returned
//! `Provider` runs lifecycle operations by type name, applying schema
//! defaults and validating desired configuration first.

use crate::config::Config;
use crate::data_sources::{DataSource, IpAddressDataSource, PrefixesDataSource};
use crate::error::ProviderError;
use crate::resources::{
    AggregateResource, IpAddressResource, PrefixResource, Resource, RirResource, TenantGroupResource,
    TenantResource, VrfResource,
};
use crate::schema::{Attribute, Schema};
use crate::state::ResourceData;
use netbox_client::NetBoxClientTrait;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

static RESOURCES: &[&dyn Resource] = &[
    &RirResource,
    &VrfResource,
    &AggregateResource,
    &PrefixResource,
    &IpAddressResource,
    &TenantResource,
    &TenantGroupResource,
];

static DATA_SOURCES: &[&dyn DataSource] = &[&PrefixesDataSource, &IpAddressDataSource];

/// Registered resource types
pub fn resources() -> &'static [&'static dyn Resource] {
    RESOURCES
}

/// Registered data sources
pub fn data_sources() -> &'static [&'static dyn DataSource] {
    DATA_SOURCES
}

/// Look up a resource type by registered name
pub fn resource(type_name: &str) -> Result<&'static dyn Resource, ProviderError> {
    RESOURCES
        .iter()
        .copied()
        .find(|r| r.type_name() == type_name)
        .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))
}

/// Look up a data source by registered name
pub fn data_source(type_name: &str) -> Result<&'static dyn DataSource, ProviderError> {
    DATA_SOURCES
        .iter()
        .copied()
        .find(|d| d.type_name() == type_name)
        .ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
}

/// Schema of the provider configuration block
pub fn provider_schema() -> Schema {
    Schema::new()
        .attribute(
            "app_id",
            Attribute::string().with_default("").with_description(
                "API key used to access NetBox, generated under Admin -> Users -> Tokens and assigned to a user",
            ),
        )
        .attribute(
            "endpoint",
            Attribute::string()
                .with_default("")
                .with_description("Endpoint of your NetBox instance"),
        )
}

/// Every registered schema, keyed the way the host runtime expects
pub fn schemas() -> Value {
    let resource_schemas: Map<String, Value> = RESOURCES
        .iter()
        .map(|r| (r.type_name().to_string(), json!(r.schema())))
        .collect();
    let data_source_schemas: Map<String, Value> = DATA_SOURCES
        .iter()
        .map(|d| (d.type_name().to_string(), json!(d.schema())))
        .collect();

    json!({
        "provider": provider_schema(),
        "resource_schemas": resource_schemas,
        "data_source_schemas": data_source_schemas,
    })
}

/// Apply defaults and validate against a schema
fn prepare(type_name: &str, schema: &Schema, values: &mut Map<String, Value>) -> Result<(), ProviderError> {
    schema.apply_defaults(values);
    schema.validate(values).map_err(|errors| ProviderError::Schema {
        type_name: type_name.to_string(),
        errors,
    })
}

/// Translate the provider block into a configured provider
pub async fn configure(block: Map<String, Value>) -> Result<Provider, ProviderError> {
    let mut data = ResourceData::from_attributes(block);
    prepare("provider", &provider_schema(), data.attributes_mut())?;

    let client = Config::from_data(&data).client().await?;
    Ok(Provider::new(client))
}

/// A configured provider holding the shared NetBox client
#[derive(Debug, Clone)]
pub struct Provider {
    client: Arc<dyn NetBoxClientTrait>,
}

impl Provider {
    /// Provider over an already validated client
    pub fn new(client: Arc<dyn NetBoxClientTrait>) -> Self {
        Self { client }
    }

    /// Client shared by every operation
    pub fn client(&self) -> &dyn NetBoxClientTrait {
        self.client.as_ref()
    }

    /// Create a resource from desired configuration
    pub async fn create(&self, type_name: &str, desired: Map<String, Value>) -> Result<ResourceData, ProviderError> {
        let resource = resource(type_name)?;
        let mut data = ResourceData::from_attributes(desired);
        prepare(type_name, &resource.schema(), data.attributes_mut())?;

        resource.create(self.client(), &mut data).await?;
        info!("Created {} {}", type_name, data.id());
        Ok(data)
    }

    /// Refresh state from NetBox; `prior` is never modified
    pub async fn read(&self, type_name: &str, prior: &ResourceData) -> Result<ResourceData, ProviderError> {
        let resource = resource(type_name)?;
        let mut data = prior.clone();
        resource.read(self.client(), &mut data).await?;
        Ok(data)
    }

    /// Replace a resource with desired configuration
    ///
    /// The identifier and computed attributes are carried over from `prior`.
    pub async fn update(
        &self,
        type_name: &str,
        prior: &ResourceData,
        desired: Map<String, Value>,
    ) -> Result<ResourceData, ProviderError> {
        let resource = resource(type_name)?;
        let schema = resource.schema();

        let mut data = ResourceData::from_attributes(desired);
        data.set_id(prior.id());
        for (name, attr) in schema.attributes() {
            if attr.computed
                && data.get(name).is_none()
                && let Some(value) = prior.get(name)
            {
                data.set(name, value.clone());
            }
        }
        prepare(type_name, &schema, data.attributes_mut())?;

        resource.update(self.client(), &data).await?;
        info!("Updated {} {}", type_name, data.id());
        Ok(data)
    }

    /// Delete the object behind `prior`; a missing object is an error
    pub async fn delete(&self, type_name: &str, prior: &ResourceData) -> Result<(), ProviderError> {
        let resource = resource(type_name)?;
        resource.delete(self.client(), prior).await?;
        info!("Deleted {} {}", type_name, prior.id());
        Ok(())
    }

    /// Import an existing NetBox object by identifier
    pub async fn import(&self, type_name: &str, identifier: &str) -> Result<ResourceData, ProviderError> {
        let resource = resource(type_name)?;
        let data = resource.import(self.client(), identifier).await?;
        info!("Imported {} {}", type_name, data.id());
        Ok(data)
    }

    /// Resolve a data source lookup
    pub async fn read_data_source(&self, type_name: &str, config: Map<String, Value>) -> Result<ResourceData, ProviderError> {
        let data_source = data_source(type_name)?;
        let mut data = ResourceData::from_attributes(config);
        prepare(type_name, &data_source.schema(), data.attributes_mut())?;

        data_source.read(self.client(), &mut data).await?;
        Ok(data)
    }
}
