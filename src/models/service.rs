// src/models/service.rs

//! The Service port.
//!
//! Abstract interface to the durable store, the hot cache, and the
//! counter/lock primitives they share. Counters and locks are
//! process-external values: every replica of this crate observes the same
//! counter and competes for the same advisory lock. The concrete backend
//! lives outside this crate.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Article, Category, Section, SyncDynamicContentItem, SyncTicketField, SyncTicketForm,
};

/// Store + cache + counter/lock port used by the examiner.
///
/// Lock acquisition has three-valued semantics: `Ok(true)` means the lock is
/// held by the caller, `Ok(false)` means another holder owns it (expected
/// contention), `Err` is a store or transport failure. Locks carry a TTL on
/// the backend so an abandoned holder cannot stall a subject forever.
#[async_trait]
pub trait Service: Send + Sync {
    // --- categories(country_code, locale) ---

    /// Increment the categories read counter, returning the new count.
    async fn plus_one_categories_counter(&self, country_code: &str, locale: &str) -> Result<i64>;
    /// Try to take the categories sync lock.
    async fn lock_categories_counter(&self, country_code: &str, locale: &str) -> Result<bool>;
    async fn unlock_categories_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    async fn reset_categories_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    /// Upsert the full categories listing for the scope.
    async fn sync_with_categories(
        &self,
        categories: &[Category],
        country_code: &str,
        locale: &str,
    ) -> Result<()>;
    /// Drop every cached categories entry within the scope.
    async fn categories_cache_invalidate(&self, country_code: &str, locale: &str) -> Result<()>;

    // --- sections(country_code, locale) ---

    async fn plus_one_sections_counter(&self, country_code: &str, locale: &str) -> Result<i64>;
    async fn lock_sections_counter(&self, country_code: &str, locale: &str) -> Result<bool>;
    async fn unlock_sections_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    async fn reset_sections_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    async fn sync_with_sections(
        &self,
        sections: &[Section],
        country_code: &str,
        locale: &str,
    ) -> Result<()>;
    async fn sections_cache_invalidate(&self, country_code: &str, locale: &str) -> Result<()>;

    // --- articles(country_code, locale) ---

    async fn plus_one_articles_counter(&self, country_code: &str, locale: &str) -> Result<i64>;
    async fn lock_articles_counter(&self, country_code: &str, locale: &str) -> Result<bool>;
    async fn unlock_articles_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    async fn reset_articles_counter(&self, country_code: &str, locale: &str) -> Result<()>;
    async fn sync_with_articles(
        &self,
        articles: &[Article],
        country_code: &str,
        locale: &str,
    ) -> Result<()>;
    async fn articles_cache_invalidate(&self, country_code: &str, locale: &str) -> Result<()>;

    /// Upsert a single article by id, bypassing the listing path.
    async fn sync_with_article(
        &self,
        article_id: i64,
        article: &Article,
        country_code: &str,
        locale: &str,
    ) -> Result<()>;

    // --- ticket_forms (global scope) ---

    async fn plus_one_ticket_forms_counter(&self) -> Result<i64>;
    async fn lock_ticket_forms_counter(&self) -> Result<bool>;
    async fn unlock_ticket_forms_counter(&self) -> Result<()>;
    async fn reset_ticket_forms_counter(&self) -> Result<()>;
    async fn sync_with_ticket_forms(&self, forms: &[SyncTicketForm]) -> Result<()>;
    async fn ticket_form_cache_invalidate(&self) -> Result<()>;

    async fn sync_with_ticket_fields(&self, fields: &[SyncTicketField]) -> Result<()>;
    async fn ticket_field_cache_invalidate(&self) -> Result<()>;
    async fn ticket_field_custom_field_option_cache_invalidate(&self) -> Result<()>;
    async fn ticket_field_system_field_option_cache_invalidate(&self) -> Result<()>;

    async fn sync_with_dynamic_content_items(
        &self,
        items: &[SyncDynamicContentItem],
    ) -> Result<()>;
}
