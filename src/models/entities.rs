// src/models/entities.rs

//! Mirror entity structures.
//!
//! Each help-center entity records the `country_code` it was ingested under;
//! ticket forms, ticket fields and dynamic-content items are global and carry
//! none. Option arrays and dynamic-content variants are kept as opaque
//! serialized JSON byte-strings so their upstream shape round-trips without
//! schema growth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mirrored help-center category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,

    /// Country the row was ingested under
    pub country_code: String,
}

/// A mirrored help-center section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub category_id: i64,
    pub id: i64,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub description: String,
    pub locale: String,

    /// Country the row was ingested under
    pub country_code: String,
}

/// A mirrored help-center article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub section_id: i64,
    pub id: i64,
    pub author_id: i64,
    pub comments_disable: bool,
    pub draft: bool,
    pub promoted: bool,
    pub position: i64,
    pub vote_sum: i64,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub source_locale: String,
    pub outdated: bool,
    pub outdated_locales: Vec<String>,
    pub edited_at: Option<DateTime<Utc>>,
    pub label_names: Vec<String>,
    pub url: String,
    pub html_url: String,
    pub name: String,
    pub title: String,
    pub body: String,
    pub locale: String,

    /// Country the row was ingested under
    pub country_code: String,
}

/// A mirrored ticket form. Global: no country/locale keying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncTicketForm {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub raw_name: String,
    pub display_name: String,
    pub raw_display_name: String,
    pub end_user_visible: bool,
    pub position: i64,
    pub active: bool,
    pub in_all_brands: bool,
    pub restricted_brand_ids: Vec<i64>,
    pub ticket_field_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A mirrored ticket field. Global: no country/locale keying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncTicketField {
    pub id: i64,
    pub url: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub title: String,
    pub raw_title: String,
    pub description: String,
    pub raw_description: String,
    pub position: i64,
    pub active: bool,
    pub required: bool,
    pub collapsed_for_agents: bool,
    pub regexp_for_validation: String,
    pub title_in_portal: String,
    pub raw_title_in_portal: String,
    pub visible_in_portal: bool,
    pub editable_in_portal: bool,
    pub required_in_portal: bool,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removable: bool,

    /// Serialized JSON array; an absent upstream value is the literal `[]`
    pub custom_field_options: Vec<u8>,

    /// Serialized JSON array; an absent upstream value is the literal `[]`
    pub system_field_options: Vec<u8>,
}

/// A mirrored dynamic-content item. Global: no country/locale keying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncDynamicContentItem {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub placeholder: String,
    pub default_locale_id: i64,
    pub outdated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Serialized JSON array; an absent upstream value is the literal `[]`
    pub variants: Vec<u8>,
}
