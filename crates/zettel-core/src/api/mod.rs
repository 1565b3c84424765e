//! HTTP client for the remote zettel store.
//!
//! The store is an opaque collaborator: every mutation is a single
//! request/response cycle and the client's view of a zettel is only ever a
//! cache of the last response. There is exactly one failure kind from the
//! caller's perspective ("remote call failed"); callers surface it inline
//! and stay interactive.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{
    CreatedZettel, SavedZettel, SearchFilter, TagCount, ZettelContent, ZettelId, ZettelSummary,
};
use crate::util::{compact_text, is_http_url};

/// Typed client for the zettel store API.
#[derive(Debug, Clone)]
pub struct ZettelStoreClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct IdRequest {
    id: ZettelId,
}

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    id: ZettelId,
    body: &'a str,
}

impl ZettelStoreClient {
    /// Build a client for an explicit store base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load one zettel's editable source and rendered display form.
    pub async fn fetch_zettel(&self, id: ZettelId) -> Result<ZettelContent> {
        tracing::debug!("fetching zettel {id}");
        self.post_json("/zettel", &IdRequest { id }).await
    }

    /// Persist an edited body; the store answers with refreshed metadata
    /// and its authoritative rendering.
    pub async fn save_zettel(&self, id: ZettelId, body: &str) -> Result<SavedZettel> {
        tracing::debug!("saving zettel {id} ({} bytes)", body.len());
        self.post_json("/savezettel", &SaveRequest { id, body }).await
    }

    /// Remove a zettel. The response body carries nothing of interest.
    pub async fn delete_zettel(&self, id: ZettelId) -> Result<()> {
        tracing::debug!("deleting zettel {id}");
        let response = self
            .client
            .post(format!("{}/deletezettel", self.base_url))
            .json(&IdRequest { id })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Create a blank zettel; the store chooses the id and all initial
    /// field values.
    pub async fn create_zettel(&self) -> Result<CreatedZettel> {
        let response = self
            .client
            .post(format!("{}/newzettel", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// The catalog of tags in use, for the filter modal's checkbox list.
    pub async fn list_tags(&self) -> Result<Vec<TagCount>> {
        let response = self
            .client
            .post(format!("{}/tags", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Reload the zettel list for a search filter.
    ///
    /// Applying or clearing a filter re-fetches the whole list through
    /// `/index?q=..&tags=..`, the same URL the store's search page uses.
    pub async fn list_zettels(&self, filter: &SearchFilter) -> Result<Vec<ZettelSummary>> {
        tracing::debug!("listing zettels (q={:?}, tags={:?})", filter.query, filter.tags);
        let response = self
            .client
            .get(self.search_url(filter))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// The search URL for a filter, with `q` and `tags` percent-encoded.
    #[must_use]
    pub fn search_url(&self, filter: &SearchFilter) -> String {
        format!(
            "{}/index?q={}&tags={}",
            self.base_url,
            urlencoding::encode(&filter.query),
            urlencoding::encode(&filter.tags)
        )
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, route: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, route))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        body: compact_text(&body),
    })
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("store base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "store base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("notes.local").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://notes.local:5000/").unwrap(),
            "http://notes.local:5000"
        );
    }

    #[test]
    fn search_url_percent_encodes_query_and_tags() {
        let client = ZettelStoreClient::new("http://notes.local").unwrap();
        let filter = SearchFilter::new("coffee beans", "food drink");
        assert_eq!(
            client.search_url(&filter),
            "http://notes.local/index?q=coffee%20beans&tags=food%20drink"
        );
    }

    #[test]
    fn search_url_with_empty_filter_keeps_both_parameters() {
        let client = ZettelStoreClient::new("http://notes.local").unwrap();
        assert_eq!(
            client.search_url(&SearchFilter::default()),
            "http://notes.local/index?q=&tags="
        );
    }

    #[test]
    fn save_request_serializes_id_and_body() {
        let request = SaveRequest {
            id: ZettelId::new(42),
            body: "world",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"id": 42, "body": "world"})
        );
    }
}
