//! Read-only data sources
//!
//! A data source is either looked up directly by NetBox ID or searched with
//! the filters the user supplied. A search must match exactly one record.

mod ip_address;
mod prefixes;

pub use ip_address::IpAddressDataSource;
pub use prefixes::PrefixesDataSource;

use crate::error::ProviderError;
use crate::schema::Schema;
use crate::state::ResourceData;
use netbox_client::NetBoxClientTrait;
use tracing::debug;

/// Page size for searches; two records are enough to detect ambiguity
pub(crate) const SEARCH_LIMIT: &str = "2";

/// A read-only lookup
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Registered name, e.g. `netbox_prefixes`
    fn type_name(&self) -> &'static str;

    /// Filter and result attributes
    fn schema(&self) -> Schema;

    /// Resolve the lookup and write the matched record into `data`
    async fn read(&self, client: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;
}

/// Query parameters built from the filters actually supplied
#[derive(Debug, Default)]
pub(crate) struct SearchFilters {
    params: Vec<(&'static str, String)>,
}

impl SearchFilters {
    pub(crate) fn push(&mut self, param: &'static str, value: impl Into<String>) {
        self.params.push((param, value.into()));
    }

    /// Add `param` when the attribute holds a non-empty string
    pub(crate) fn push_attribute(&mut self, data: &ResourceData, attribute: &str, param: &'static str) {
        if let Some(value) = data.get_non_empty(attribute) {
            self.push(param, value);
        }
    }

    /// Borrowed pairs with the search limit appended
    pub(crate) fn query(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(std::iter::once(("limit", SEARCH_LIMIT)))
            .collect()
    }
}

/// Exactly one search result, or `NotFound` / `AmbiguousResult`
pub(crate) fn single_match<T>(kind: &'static str, mut results: Vec<T>) -> Result<T, ProviderError> {
    debug!("{} search returned {} result(s)", kind, results.len());
    match results.len() {
        0 => Err(ProviderError::NotFound { kind }),
        1 => results.pop().ok_or(ProviderError::NotFound { kind }),
        _ => Err(ProviderError::AmbiguousResult { kind }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(single_match("Prefix", vec![7]).unwrap(), 7);
        assert!(matches!(
            single_match::<u8>("Prefix", vec![]),
            Err(ProviderError::NotFound { kind: "Prefix" })
        ));
        assert!(matches!(
            single_match("Prefix", vec![1, 2]),
            Err(ProviderError::AmbiguousResult { kind: "Prefix" })
        ));
    }

    #[test]
    fn test_filters_only_include_supplied_values() {
        let data = ResourceData::new().with("query", "edge").with("site", "");
        let mut filters = SearchFilters::default();
        filters.push_attribute(&data, "query", "q");
        filters.push_attribute(&data, "site", "site");
        filters.push_attribute(&data, "role", "role");
        assert_eq!(filters.query(), vec![("q", "edge"), ("limit", "2")]);
    }
}
