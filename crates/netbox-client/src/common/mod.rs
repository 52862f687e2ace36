//! HTTP plumbing shared by every NetBox endpoint: token auth, status
//! classification and pagination.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total matches across all pages
    pub count: u64,
    /// Absolute URL of the next page
    pub next: Option<String>,
    /// Absolute URL of the previous page
    pub previous: Option<String>,
    /// Objects on this page
    pub results: Vec<T>,
}

/// HTTP client wrapper with authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Map a non-success response onto a `NetBoxError`, consuming the body for context
    async fn check_status(
        method: &str,
        path: &str,
        response: Response,
    ) -> Result<Response, NetBoxError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(NetBoxError::NotFound(format!("{} {}", method, path))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(NetBoxError::Authentication(
                format!("{} {} ({}): {}", method, path, status.as_u16(), body),
            )),
            StatusCode::BAD_REQUEST => Err(NetBoxError::InvalidRequest(format!(
                "{} {}: {}",
                method, path, body
            ))),
            StatusCode::CONFLICT => Err(NetBoxError::Conflict(format!(
                "{} {}: {}",
                method, path, body
            ))),
            _ => Err(NetBoxError::Api {
                status: status.as_u16(),
                message: format!("{} {}: {}", method, path, body),
            }),
        }
    }

    /// Attach auth and content negotiation, send, and classify the status
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, NetBoxError> {
        let url = self.build_url(path);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json");
        match body {
            Some(body) => {
                debug!("{} {} {}", method, url, body);
                request = request.json(body);
            }
            None => debug!("{} {}", method, url),
        }

        let response = request.send().await?;
        Self::check_status(method.as_str(), path, response).await
    }

    fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, NetBoxError> {
        serde_json::to_value(body).map_err(|e| NetBoxError::Decode(e.to_string()))
    }

    /// Fetch all pages of a paginated response, following `next` links
    pub async fn fetch_all_pages<T: for<'de> Deserialize<'de>>(
        &self,
        first: String,
    ) -> Result<Vec<T>, NetBoxError> {
        let mut results = Vec::new();
        let mut next = Some(first);

        while let Some(url) = next.take() {
            let text = self.send(Method::GET, &url, None).await?.text().await?;
            let page: PaginatedResponse<T> = serde_json::from_str(&text).map_err(|e| {
                NetBoxError::Decode(format!(
                    "{} ({})",
                    e,
                    text.chars().take(200).collect::<String>()
                ))
            })?;
            results.extend(page.results);
            next = page.next.map(|link| self.build_url(&link));
        }

        Ok(results)
    }

    /// GET and decode the JSON body
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, NetBoxError> {
        Ok(self.send(Method::GET, path, None).await?.json().await?)
    }

    /// POST a JSON body and decode the created object
    pub async fn post<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        let body = Self::encode_body(body)?;
        Ok(self.send(Method::POST, path, Some(&body)).await?.json().await?)
    }

    /// Full replacement of the object; fields left out of `body` are reset by NetBox
    pub async fn put<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        let body = Self::encode_body(body)?;
        Ok(self.send(Method::PUT, path, Some(&body)).await?.json().await?)
    }

    /// DELETE; any 2xx (usually 204) is success
    pub async fn delete(&self, path: &str) -> Result<(), NetBoxError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        if filters.is_empty() {
            String::new()
        } else {
            filters
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> HttpClient {
        HttpClient::new(
            Client::new(),
            "http://netbox.local/".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = http();
        assert_eq!(http.base_url(), "http://netbox.local");
        assert_eq!(
            http.build_url("/api/ipam/vrfs/"),
            "http://netbox.local/api/ipam/vrfs/"
        );
    }

    #[test]
    fn test_build_url_keeps_absolute_next_links() {
        let http = http();
        let next = "http://netbox.local/api/ipam/prefixes/?limit=50&offset=50";
        assert_eq!(http.build_url(next), next);
    }

    #[test]
    fn test_query_string_is_encoded() {
        let http = http();
        let query = http.build_query_string(&[("q", "10.0.0.0/8"), ("tenant", "acme corp")]);
        assert_eq!(query, "q=10.0.0.0%2F8&tenant=acme%20corp");
        assert_eq!(http.build_query_string(&[]), "");
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", http());
        assert!(rendered.contains("http://netbox.local"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        assert_eq!(http().auth_header(), "Token secret");
    }
}
