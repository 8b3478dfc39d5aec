// src/zendesk/forms.rs

//! Wire shapes returned by the Zendesk API.
//!
//! Listing envelopes flatten the shared pagination fields ([`BaseOut`]);
//! `next_page` drives the pagination loop in the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared pagination fields on every listing response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaseOut {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
    #[serde(default)]
    pub page_count: Option<i64>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub previous_page: Option<String>,
}

/// A help-center category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub source_locale: String,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locale: String,
}

/// GET /api/v2/help_center/{locale}/categories.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListCategories {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// A help-center section.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub category_id: i64,
    pub id: i64,
    #[serde(default)]
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub source_locale: String,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locale: String,
}

/// GET /api/v2/help_center/{locale}/sections.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListSections {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// A help-center article.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub section_id: i64,
    pub id: i64,
    #[serde(default)]
    pub author_id: i64,
    #[serde(default)]
    pub comments_disable: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub promoted: bool,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub vote_sum: i64,
    #[serde(default)]
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub source_locale: String,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub outdated_locales: Vec<String>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub label_names: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub locale: String,
}

/// GET /api/v2/help_center/{locale}/articles.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListArticles {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// GET /api/v2/help_center/{locale}/articles/{id}.json
#[derive(Debug, Clone, Deserialize)]
pub struct ShowArticle {
    pub article: Article,
}

/// POST /hc/{locale}/articles/{id}/vote
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    pub id: i64,
    #[serde(default)]
    pub vote_sum: i64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub upvote_count: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// A ticket form. Globally scoped: the tenant is ignored upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketForm {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub raw_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub raw_display_name: String,
    #[serde(default)]
    pub end_user_visible: bool,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub in_all_brands: bool,
    #[serde(default)]
    pub restricted_brand_ids: Vec<i64>,
    #[serde(default)]
    pub ticket_field_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GET /api/v2/ticket_forms.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListTicketForms {
    #[serde(default)]
    pub ticket_forms: Vec<TicketForm>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// A ticket field, with its option arrays still typed.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketField {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub raw_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub raw_description: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub collapsed_for_agents: bool,
    #[serde(default)]
    pub regexp_for_validation: String,
    #[serde(default)]
    pub title_in_portal: String,
    #[serde(default)]
    pub raw_title_in_portal: String,
    #[serde(default)]
    pub visible_in_portal: bool,
    #[serde(default)]
    pub editable_in_portal: bool,
    #[serde(default)]
    pub required_in_portal: bool,
    #[serde(default)]
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub removable: bool,
    #[serde(default)]
    pub custom_field_options: Option<Vec<CustomFieldOption>>,
    #[serde(default)]
    pub system_field_options: Option<Vec<SystemFieldOption>>,
}

/// One entry of `TicketField::custom_field_options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldOption {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub raw_name: String,
    #[serde(default)]
    pub value: String,
}

/// One entry of `TicketField::system_field_options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemFieldOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// GET /api/v2/ticket_fields.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListTicketFields {
    #[serde(default)]
    pub ticket_fields: Vec<TicketField>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// A dynamic-content item with its locale variants.
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicContentItem {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub default_locale_id: i64,
    #[serde(default)]
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub variants: Option<Vec<Variant>>,
}

/// One entry of `DynamicContentItem::variants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub locale_id: i64,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GET /api/v2/dynamic_content/items.json
#[derive(Debug, Clone, Deserialize)]
pub struct ListDynamicContentItems {
    #[serde(default)]
    pub items: Vec<DynamicContentItem>,
    #[serde(flatten)]
    pub base: BaseOut,
}

/// GET /hc/api/internal/instant_search.json
#[derive(Debug, Clone, Deserialize)]
pub struct InstantSearch {
    #[serde(default)]
    pub results: Vec<InstantSearchResult>,
}

/// One instant-search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct InstantSearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category_title: String,
    #[serde(default)]
    pub url: String,
}

/// An article as returned by help-center search, with search extras.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchArticle {
    #[serde(flatten)]
    pub article: Article,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub result_type: String,
}

/// GET /api/v2/help_center/articles/search.json
#[derive(Debug, Clone, Deserialize)]
pub struct Search {
    #[serde(rename = "results", default)]
    pub articles: Vec<SearchArticle>,
    #[serde(flatten)]
    pub base: BaseOut,
}
