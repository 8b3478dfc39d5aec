// src/zendesk/mod.rs

//! Typed client for the Zendesk help-center and ticketing APIs.
//!
//! Requests are routed per country through a base-URL table built from
//! configuration. Globally-scoped resources (ticket forms, ticket fields,
//! dynamic-content items) always route through a fixed country slot because
//! upstream ignores the tenant for them. Listing endpoints follow the
//! server's `next_page` links while enforcing a minimum page size. No retries
//! happen at this layer; every failure surfaces to the caller unchanged.

pub mod forms;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::config::Config;
use crate::error::{AppError, Result};
use forms::{
    Article, Category, DynamicContentItem, InstantSearch, ListArticles, ListCategories,
    ListDynamicContentItems, ListSections, ListTicketFields, ListTicketForms, Search, Section,
    ShowArticle, TicketField, TicketForm, Vote,
};

/// Country slot used for globally-scoped resources.
const GLOBAL_COUNTRY_SLOT: &str = "tw";

/// Minimum page size enforced on help-center listing pagination.
const MIN_PER_PAGE: &str = "&per_page=100";

/// Client for the Zendesk API.
pub struct ZenDesk {
    token: String,
    client: reqwest::Client,
    url_table: HashMap<String, String>,
}

/// Paging inputs for help-center search.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub per_page: i64,
    pub page: i64,
    pub sort_order: String,
}

impl ZenDesk {
    /// Build a client from configuration.
    pub fn new(conf: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(conf.zendesk.request_timeout_sec))
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        let z = &conf.zendesk;
        let url_table = HashMap::from([
            ("hk".to_string(), z.hk_base_url.clone()),
            ("id".to_string(), z.id_base_url.clone()),
            ("jp".to_string(), z.jp_base_url.clone()),
            ("my".to_string(), z.my_base_url.clone()),
            ("ph".to_string(), z.ph_base_url.clone()),
            ("sg".to_string(), z.sg_base_url.clone()),
            ("th".to_string(), z.th_base_url.clone()),
            ("tw".to_string(), z.tw_base_url.clone()),
        ]);

        Ok(Self {
            token: z.auth_token.clone(),
            client,
            url_table,
        })
    }

    /// Resolve a country code to its base URL.
    ///
    /// Unknown codes resolve to the empty string on purpose: the resulting
    /// invalid URL fails at the transport layer instead of needing a lookup
    /// error path here.
    fn base_url(&self, country_code: &str) -> &str {
        self.url_table
            .get(country_code)
            .map(String::as_str)
            .unwrap_or("")
    }

    // --- request plumbing ---

    fn get(&self, url: &str, auth: bool) -> reqwest::RequestBuilder {
        let req = self.client.get(url);
        if auth {
            req.header(AUTHORIZATION, format!("Basic {}", self.token))
        } else {
            req
        }
    }

    /// Send a request, enforcing the expected status.
    async fn execute(
        &self,
        req: reqwest::RequestBuilder,
        url: &str,
        expect: u16,
    ) -> Result<reqwest::Response> {
        let path = url::Url::parse(url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| url.to_string());
        let span = tracing::info_span!("zendesk_request", path = %path);

        async move {
            let resp = req
                .header(CACHE_CONTROL, "no-cache")
                .send()
                .await
                .map_err(|source| AppError::Transport {
                    url: url.to_string(),
                    source,
                })?;

            let actual = resp.status().as_u16();
            if actual != expect {
                return Err(AppError::UnexpectedStatus {
                    url: url.to_string(),
                    expected: expect,
                    actual,
                });
            }
            Ok(resp)
        }
        .instrument(span)
        .await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response, url: &str) -> Result<T> {
        let bytes = resp.bytes().await.map_err(|source| AppError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, auth: bool, expect: u16) -> Result<T> {
        let resp = self.execute(self.get(url, auth), url, expect).await?;
        Self::decode(resp, url).await
    }

    /// Follow `next_page` links, accumulating every page's items.
    ///
    /// `enforce_min_page` appends `&per_page=100` to server-issued next URLs
    /// that do not already carry a `per_page`, preserving the server's page
    /// boundaries while keeping pages from degrading to tiny sizes.
    async fn list_all<Out, T>(
        &self,
        first_url: String,
        auth: bool,
        enforce_min_page: bool,
        split: fn(Out) -> (Vec<T>, Option<String>),
    ) -> Result<Vec<T>>
    where
        Out: DeserializeOwned,
    {
        let mut url = first_url;
        let mut ret = Vec::new();

        loop {
            let out: Out = self.get_json(&url, auth, 200).await?;
            let (items, next_page) = split(out);
            ret.extend(items);

            match next_page {
                Some(next) if !next.is_empty() => {
                    url = next;
                    if enforce_min_page && !url.contains("per_page") {
                        url.push_str(MIN_PER_PAGE);
                    }
                }
                _ => break,
            }
        }

        Ok(ret)
    }

    // --- operations ---

    /// POST a new support request. Expects 201; no response body consumed.
    pub async fn create_request<T: Serialize + ?Sized>(
        &self,
        country_code: &str,
        payload: &T,
    ) -> Result<()> {
        let url = format!("{}/api/v2/requests.json", self.base_url(country_code));
        let req = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.token))
            .json(payload);
        self.execute(req, &url, 201).await.map(|_| ())
    }

    /// List all ticket forms. The upstream ignores the tenant for this
    /// resource, so the request routes via the fixed country slot.
    pub async fn list_ticket_forms(&self) -> Result<Vec<TicketForm>> {
        let url = format!(
            "{}/api/v2/ticket_forms.json",
            self.base_url(GLOBAL_COUNTRY_SLOT)
        );
        self.list_all(url, true, false, |out: ListTicketForms| {
            (out.ticket_forms, out.base.next_page)
        })
        .await
    }

    /// List all ticket fields. Routed via the fixed country slot.
    pub async fn list_ticket_fields(&self) -> Result<Vec<TicketField>> {
        let url = format!(
            "{}/api/v2/ticket_fields.json",
            self.base_url(GLOBAL_COUNTRY_SLOT)
        );
        self.list_all(url, true, false, |out: ListTicketFields| {
            (out.ticket_fields, out.base.next_page)
        })
        .await
    }

    /// List all dynamic-content items. Routed via the fixed country slot.
    pub async fn list_dynamic_content_items(&self) -> Result<Vec<DynamicContentItem>> {
        let url = format!(
            "{}/api/v2/dynamic_content/items.json",
            self.base_url(GLOBAL_COUNTRY_SLOT)
        );
        self.list_all(url, true, false, |out: ListDynamicContentItems| {
            (out.items, out.base.next_page)
        })
        .await
    }

    /// List every help-center category for the country and locale.
    pub async fn list_categories(&self, country_code: &str, locale: &str) -> Result<Vec<Category>> {
        let url = format!(
            "{}/api/v2/help_center/{}/categories.json?page=1&per_page=100",
            self.base_url(country_code),
            locale,
        );
        self.list_all(url, false, true, |out: ListCategories| {
            (out.categories, out.base.next_page)
        })
        .await
    }

    /// List every help-center section for the country and locale.
    pub async fn list_sections(&self, country_code: &str, locale: &str) -> Result<Vec<Section>> {
        let url = format!(
            "{}/api/v2/help_center/{}/sections.json?page=1&per_page=100",
            self.base_url(country_code),
            locale,
        );
        self.list_all(url, false, true, |out: ListSections| {
            (out.sections, out.base.next_page)
        })
        .await
    }

    /// List every help-center article for the country and locale.
    pub async fn list_articles(&self, country_code: &str, locale: &str) -> Result<Vec<Article>> {
        let url = format!(
            "{}/api/v2/help_center/{}/articles.json?page=1&per_page=100",
            self.base_url(country_code),
            locale,
        );
        self.list_all(url, false, true, |out: ListArticles| {
            (out.articles, out.base.next_page)
        })
        .await
    }

    /// Fetch a single article by id.
    pub async fn show_article(
        &self,
        id: i64,
        country_code: &str,
        locale: &str,
    ) -> Result<Article> {
        let url = format!(
            "{}/api/v2/help_center/{}/articles/{}.json",
            self.base_url(country_code),
            locale,
            id,
        );
        let out: ShowArticle = self.get_json(&url, false, 200).await?;
        Ok(out.article)
    }

    /// Cast a vote on an article. Form-encoded POST.
    pub async fn create_vote(
        &self,
        id: i64,
        value: &str,
        country_code: &str,
        locale: &str,
    ) -> Result<Vote> {
        let url = format!(
            "{}/hc/{}/articles/{}/vote",
            self.base_url(country_code),
            locale,
            id,
        );
        let req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("value={value}"));
        let resp = self.execute(req, &url, 200).await?;
        Self::decode(resp, &url).await
    }

    /// Query the internal instant-search endpoint.
    pub async fn instant_search(
        &self,
        query: &str,
        country_code: &str,
        locale: &str,
    ) -> Result<InstantSearch> {
        let url = format!(
            "{}/hc/api/internal/instant_search.json?locale={}&query={}",
            self.base_url(country_code),
            locale,
            query_escape(query),
        );
        self.get_json(&url, false, 200).await
    }

    /// Query help-center article search, optionally filtered to categories.
    pub async fn search(
        &self,
        category_ids: &[i64],
        query: &str,
        country_code: &str,
        locale: &str,
        pagination: &Pagination,
    ) -> Result<Search> {
        let mut filter = String::new();
        if !category_ids.is_empty() {
            filter.push_str("&category=");
            filter.push_str(
                &category_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        let url = format!(
            "{}/api/v2/help_center/articles/search.json?per_page={}&page={}&sort_order={}&locale={}&query={}{}",
            self.base_url(country_code),
            pagination.per_page,
            pagination.page,
            pagination.sort_order,
            locale,
            query_escape(query),
            filter,
        );
        self.get_json(&url, false, 200).await
    }
}

fn query_escape(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_escape_encodes_reserved_characters() {
        assert_eq!(query_escape("how to refund"), "how+to+refund");
        assert_eq!(query_escape("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn unknown_country_resolves_to_empty_base() {
        let zend = ZenDesk::new(&Config::default()).unwrap();
        assert_eq!(zend.base_url("xx"), "");
    }
}
