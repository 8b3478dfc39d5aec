// src/examiner/mod.rs

//! Refresh throttling and single-flight synchronization.
//!
//! The examiner owns a bounded task queue consumed by a fixed pool of
//! workers. Each read check increments the subject's counter through the
//! [`Service`] port; when the post-increment count reaches the subject's
//! refresh limit, the worker runs a locked sync: pull the full listing from
//! upstream, write it through the service, invalidate the subject's cache
//! scope, reset the counter, release the lock — strictly in that order.
//!
//! Mutual exclusion is service-backed, not in-process: two replicas hitting
//! the threshold both try the lock and exactly one syncs. On any failure
//! after lock acquisition the lock is deliberately left to expire via TTL,
//! which throttles retries against an upstream that is already failing.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    Article, Category, Section, Service, SyncDynamicContentItem, SyncTicketField, SyncTicketForm,
};
use crate::zendesk::{ZenDesk, forms};

/// A cache subject: one refresh domain with its own counter and lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Categories,
    Sections,
    Articles,
    /// Global scope; a sync transitively refreshes ticket fields and
    /// dynamic-content items.
    TicketForms,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Categories => "categories",
            Subject::Sections => "sections",
            Subject::Articles => "articles",
            Subject::TicketForms => "ticket_forms",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of work pulled by the pool.
enum Task {
    /// Count a read against a subject scope and sync if over the limit.
    Check {
        deadline: Option<Instant>,
        subject: Subject,
        country_code: String,
        locale: String,
    },
    /// Refresh one article by id; bypasses counters and locks.
    Article {
        deadline: Option<Instant>,
        article_id: i64,
        country_code: String,
        locale: String,
    },
}

impl Task {
    fn deadline(&self) -> Option<Instant> {
        match self {
            Task::Check { deadline, .. } | Task::Article { deadline, .. } => *deadline,
        }
    }
}

/// Counter examiner and single-flight sync engine.
pub struct Examiner {
    tasks: mpsc::Sender<Task>,
    workers: Vec<JoinHandle<()>>,
    inner: Arc<Inner>,
}

struct Inner {
    service: Arc<dyn Service>,
    zendesk: Arc<ZenDesk>,
    categories_refresh_limit: i64,
    sections_refresh_limit: i64,
    articles_refresh_limit: i64,
    ticket_forms_refresh_limit: i64,
}

impl Examiner {
    /// Build the examiner and start its workers.
    pub fn new(conf: &Config, service: Arc<dyn Service>, zendesk: Arc<ZenDesk>) -> Self {
        let (tasks, rx) = mpsc::channel(conf.examiner.max_pool_size);
        let rx = Arc::new(Mutex::new(rx));

        let inner = Arc::new(Inner {
            service,
            zendesk,
            categories_refresh_limit: conf.examiner.categories_refresh_limit,
            sections_refresh_limit: conf.examiner.sections_refresh_limit,
            articles_refresh_limit: conf.examiner.articles_refresh_limit,
            ticket_forms_refresh_limit: conf.examiner.ticket_forms_refresh_limit,
        });

        let workers = (0..conf.examiner.max_worker_size)
            .map(|worker_id| {
                let rx = Arc::clone(&rx);
                let inner = Arc::clone(&inner);
                tokio::spawn(worker(worker_id, rx, inner))
            })
            .collect();

        Self {
            tasks,
            workers,
            inner,
        }
    }

    async fn check(
        &self,
        deadline: Option<Instant>,
        subject: Subject,
        country_code: &str,
        locale: &str,
    ) {
        let task = Task::Check {
            deadline,
            subject,
            country_code: country_code.to_string(),
            locale: locale.to_string(),
        };
        if self.tasks.send(task).await.is_err() {
            tracing::error!(%subject, "examiner task queue is closed, check dropped");
        }
    }

    /// Queue a categories check for the scope. Fire-and-forget: the caller
    /// does not observe the outcome.
    pub async fn check_categories(
        &self,
        deadline: Option<Instant>,
        country_code: &str,
        locale: &str,
    ) {
        self.check(deadline, Subject::Categories, country_code, locale)
            .await;
    }

    /// Queue a sections check for the scope.
    pub async fn check_sections(
        &self,
        deadline: Option<Instant>,
        country_code: &str,
        locale: &str,
    ) {
        self.check(deadline, Subject::Sections, country_code, locale)
            .await;
    }

    /// Queue an articles check for the scope.
    pub async fn check_articles(
        &self,
        deadline: Option<Instant>,
        country_code: &str,
        locale: &str,
    ) {
        self.check(deadline, Subject::Articles, country_code, locale)
            .await;
    }

    /// Queue a ticket-forms check. Globally scoped; a triggered sync covers
    /// ticket forms, ticket fields and dynamic-content items.
    pub async fn check_ticket_forms(&self, deadline: Option<Instant>) {
        self.check(deadline, Subject::TicketForms, "", "").await;
    }

    /// Queue a single-article refresh.
    pub async fn sync_article(
        &self,
        deadline: Option<Instant>,
        article_id: i64,
        country_code: &str,
        locale: &str,
    ) {
        let task = Task::Article {
            deadline,
            article_id,
            country_code: country_code.to_string(),
            locale: locale.to_string(),
        };
        if self.tasks.send(task).await.is_err() {
            tracing::error!(article_id, "examiner task queue is closed, article sync dropped");
        }
    }

    /// Sync categories now, on the caller, bypassing the counter check.
    /// A sync already in flight surfaces as [`AppError::AcquireLockFailed`].
    pub async fn force_sync_categories(&self, country_code: &str, locale: &str) -> Result<()> {
        self.inner
            .categories_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("force_sync_categories", e))
    }

    /// Sync sections now, on the caller, bypassing the counter check.
    pub async fn force_sync_sections(&self, country_code: &str, locale: &str) -> Result<()> {
        self.inner
            .sections_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("force_sync_sections", e))
    }

    /// Sync articles now, on the caller, bypassing the counter check.
    pub async fn force_sync_articles(&self, country_code: &str, locale: &str) -> Result<()> {
        self.inner
            .articles_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("force_sync_articles", e))
    }

    /// Sync ticket forms, ticket fields and dynamic-content items now, on
    /// the caller, bypassing the counter check.
    pub async fn force_sync_ticket_forms(&self) -> Result<()> {
        self.inner
            .ticket_forms_sync()
            .await
            .map_err(|e| wrap_unless_contended("force_sync_ticket_forms", e))
    }

    /// Close the task queue and wait for the workers to drain it and exit.
    pub async fn close(self) {
        drop(self.tasks);
        join_all(self.workers).await;
    }
}

async fn worker(worker_id: usize, rx: Arc<Mutex<mpsc::Receiver<Task>>>, inner: Arc<Inner>) {
    loop {
        let task = { rx.lock().await.recv().await };
        let Some(task) = task else {
            break;
        };

        if let Err(err) = inner.dispatch(&task).await {
            // Lock contention means another holder is already syncing;
            // expected, not logged.
            if !err.is_lock_contention() {
                match &task {
                    Task::Check {
                        subject,
                        country_code,
                        locale,
                        ..
                    } => tracing::error!(
                        worker_id,
                        %subject,
                        %country_code,
                        %locale,
                        error = %err,
                        "examiner check task failed"
                    ),
                    Task::Article {
                        article_id,
                        country_code,
                        locale,
                        ..
                    } => tracing::error!(
                        worker_id,
                        article_id = *article_id,
                        %country_code,
                        %locale,
                        error = %err,
                        "examiner article task failed"
                    ),
                }
            }
        }
    }

    tracing::info!(worker_id, "examiner worker exit");
}

/// Limit semantics shared by all subjects:
/// - `<= 0`: never sync
/// - `== 1`: every check syncs
/// - `> 1`: sync when the post-increment count reaches the limit
fn over_limit(limit: i64, count: i64) -> bool {
    limit > 0 && count >= limit
}

/// Wrap a sync failure with context, letting the contention sentinel pass
/// through untouched so callers can still tell it apart.
fn wrap_unless_contended(context: &str, err: AppError) -> AppError {
    if err.is_lock_contention() {
        err
    } else {
        AppError::sync(context, err)
    }
}

impl Inner {
    async fn dispatch(&self, task: &Task) -> Result<()> {
        let run = async {
            match task {
                Task::Check {
                    subject,
                    country_code,
                    locale,
                    ..
                } => match subject {
                    Subject::Categories => self.categories_work(country_code, locale).await,
                    Subject::Sections => self.sections_work(country_code, locale).await,
                    Subject::Articles => self.articles_work(country_code, locale).await,
                    Subject::TicketForms => self.ticket_forms_work().await,
                },
                Task::Article {
                    article_id,
                    country_code,
                    locale,
                    ..
                } => self.article_sync(*article_id, country_code, locale).await,
            }
        };

        match task.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, run)
                .await
                .map_err(|_| AppError::sync("dispatch", "task deadline exceeded"))?,
            None => run.await,
        }
    }

    // --- categories ---

    async fn categories_work(&self, country_code: &str, locale: &str) -> Result<()> {
        let count = self
            .service
            .plus_one_categories_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_work: plus_one_categories_counter", e))?;

        if !over_limit(self.categories_refresh_limit, count) {
            return Ok(());
        }

        self.categories_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("categories_work", e))
    }

    async fn categories_sync(&self, country_code: &str, locale: &str) -> Result<()> {
        let acquired = self
            .service
            .lock_categories_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_sync: lock_categories_counter", e))?;
        if !acquired {
            return Err(AppError::AcquireLockFailed);
        }

        let listing = self
            .zendesk
            .list_categories(country_code, locale)
            .await
            .map_err(|e| AppError::sync("categories_sync: list_categories", e))?;

        tracing::info!(
            country_code,
            locale,
            length = listing.len(),
            "pulled categories listing from zendesk"
        );

        if listing.is_empty() {
            return Err(AppError::EmptyListing {
                item: Subject::Categories.as_str().to_string(),
            });
        }

        let categories: Vec<Category> = listing
            .into_iter()
            .map(|c| mirror_category(c, country_code))
            .collect();

        self.service
            .sync_with_categories(&categories, country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_sync: sync_with_categories", e))?;
        self.service
            .categories_cache_invalidate(country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_sync: categories_cache_invalidate", e))?;
        self.service
            .reset_categories_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_sync: reset_categories_counter", e))?;
        self.service
            .unlock_categories_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("categories_sync: unlock_categories_counter", e))?;

        Ok(())
    }

    // --- sections ---

    async fn sections_work(&self, country_code: &str, locale: &str) -> Result<()> {
        let count = self
            .service
            .plus_one_sections_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_work: plus_one_sections_counter", e))?;

        if !over_limit(self.sections_refresh_limit, count) {
            return Ok(());
        }

        self.sections_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("sections_work", e))
    }

    async fn sections_sync(&self, country_code: &str, locale: &str) -> Result<()> {
        let acquired = self
            .service
            .lock_sections_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_sync: lock_sections_counter", e))?;
        if !acquired {
            return Err(AppError::AcquireLockFailed);
        }

        let listing = self
            .zendesk
            .list_sections(country_code, locale)
            .await
            .map_err(|e| AppError::sync("sections_sync: list_sections", e))?;

        tracing::info!(
            country_code,
            locale,
            length = listing.len(),
            "pulled sections listing from zendesk"
        );

        if listing.is_empty() {
            return Err(AppError::EmptyListing {
                item: Subject::Sections.as_str().to_string(),
            });
        }

        let sections: Vec<Section> = listing
            .into_iter()
            .map(|s| mirror_section(s, country_code))
            .collect();

        self.service
            .sync_with_sections(&sections, country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_sync: sync_with_sections", e))?;
        self.service
            .sections_cache_invalidate(country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_sync: sections_cache_invalidate", e))?;
        self.service
            .reset_sections_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_sync: reset_sections_counter", e))?;
        self.service
            .unlock_sections_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("sections_sync: unlock_sections_counter", e))?;

        Ok(())
    }

    // --- articles ---

    async fn articles_work(&self, country_code: &str, locale: &str) -> Result<()> {
        let count = self
            .service
            .plus_one_articles_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_work: plus_one_articles_counter", e))?;

        if !over_limit(self.articles_refresh_limit, count) {
            return Ok(());
        }

        self.articles_sync(country_code, locale)
            .await
            .map_err(|e| wrap_unless_contended("articles_work", e))
    }

    async fn articles_sync(&self, country_code: &str, locale: &str) -> Result<()> {
        let acquired = self
            .service
            .lock_articles_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_sync: lock_articles_counter", e))?;
        if !acquired {
            return Err(AppError::AcquireLockFailed);
        }

        let listing = self
            .zendesk
            .list_articles(country_code, locale)
            .await
            .map_err(|e| AppError::sync("articles_sync: list_articles", e))?;

        tracing::info!(
            country_code,
            locale,
            length = listing.len(),
            "pulled articles listing from zendesk"
        );

        if listing.is_empty() {
            return Err(AppError::EmptyListing {
                item: Subject::Articles.as_str().to_string(),
            });
        }

        let articles: Vec<Article> = listing
            .into_iter()
            .map(|a| mirror_article(a, country_code))
            .collect();

        self.service
            .sync_with_articles(&articles, country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_sync: sync_with_articles", e))?;
        self.service
            .articles_cache_invalidate(country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_sync: articles_cache_invalidate", e))?;
        self.service
            .reset_articles_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_sync: reset_articles_counter", e))?;
        self.service
            .unlock_articles_counter(country_code, locale)
            .await
            .map_err(|e| AppError::service("articles_sync: unlock_articles_counter", e))?;

        Ok(())
    }

    /// Refresh one article by id. Idempotent and already targeted, so the
    /// amplification risk that motivates locking does not apply; no counter,
    /// no lock.
    async fn article_sync(&self, article_id: i64, country_code: &str, locale: &str) -> Result<()> {
        let upstream = self
            .zendesk
            .show_article(article_id, country_code, locale)
            .await
            .map_err(|e| AppError::sync("article_sync: show_article", e))?;

        let article = mirror_article(upstream, country_code);

        self.service
            .sync_with_article(article_id, &article, country_code, locale)
            .await
            .map_err(|e| AppError::service("article_sync: sync_with_article", e))
    }

    // --- ticket forms (composite, global scope) ---

    async fn ticket_forms_work(&self) -> Result<()> {
        let count = self
            .service
            .plus_one_ticket_forms_counter()
            .await
            .map_err(|e| AppError::service("ticket_forms_work: plus_one_ticket_forms_counter", e))?;

        if !over_limit(self.ticket_forms_refresh_limit, count) {
            return Ok(());
        }

        self.ticket_forms_sync()
            .await
            .map_err(|e| wrap_unless_contended("ticket_forms_work", e))
    }

    /// Composite sync under one lock hold: ticket forms, then ticket fields,
    /// then dynamic-content items. The counter resets and the lock releases
    /// only after all three resources synced; a partial failure leaves the
    /// earlier writes in place and the next trigger retries the whole
    /// composite.
    async fn ticket_forms_sync(&self) -> Result<()> {
        let acquired = self
            .service
            .lock_ticket_forms_counter()
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: lock_ticket_forms_counter", e))?;
        if !acquired {
            return Err(AppError::AcquireLockFailed);
        }

        // 1. ticket forms
        let upstream_forms = self
            .zendesk
            .list_ticket_forms()
            .await
            .map_err(|e| AppError::sync("ticket_forms_sync: list_ticket_forms", e))?;

        tracing::info!(
            length = upstream_forms.len(),
            "pulled ticket forms listing from zendesk"
        );

        if upstream_forms.is_empty() {
            return Err(AppError::EmptyListing {
                item: Subject::TicketForms.as_str().to_string(),
            });
        }

        let ticket_forms: Vec<SyncTicketForm> =
            upstream_forms.into_iter().map(mirror_ticket_form).collect();

        self.service
            .sync_with_ticket_forms(&ticket_forms)
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: sync_with_ticket_forms", e))?;
        self.service
            .ticket_form_cache_invalidate()
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: ticket_form_cache_invalidate", e))?;

        // 2. ticket fields
        let upstream_fields = self
            .zendesk
            .list_ticket_fields()
            .await
            .map_err(|e| AppError::sync("ticket_forms_sync: list_ticket_fields", e))?;

        tracing::info!(
            length = upstream_fields.len(),
            "pulled ticket fields listing from zendesk"
        );

        if upstream_fields.is_empty() {
            return Err(AppError::EmptyListing {
                item: "ticket_fields".to_string(),
            });
        }

        let ticket_fields = upstream_fields
            .into_iter()
            .map(mirror_ticket_field)
            .collect::<Result<Vec<_>>>()?;

        self.service
            .sync_with_ticket_fields(&ticket_fields)
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: sync_with_ticket_fields", e))?;
        self.service
            .ticket_field_cache_invalidate()
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: ticket_field_cache_invalidate", e))?;
        self.service
            .ticket_field_custom_field_option_cache_invalidate()
            .await
            .map_err(|e| {
                AppError::service(
                    "ticket_forms_sync: ticket_field_custom_field_option_cache_invalidate",
                    e,
                )
            })?;
        self.service
            .ticket_field_system_field_option_cache_invalidate()
            .await
            .map_err(|e| {
                AppError::service(
                    "ticket_forms_sync: ticket_field_system_field_option_cache_invalidate",
                    e,
                )
            })?;

        // 3. dynamic content items
        let upstream_items = self
            .zendesk
            .list_dynamic_content_items()
            .await
            .map_err(|e| AppError::sync("ticket_forms_sync: list_dynamic_content_items", e))?;

        tracing::info!(
            length = upstream_items.len(),
            "pulled dynamic content items listing from zendesk"
        );

        if upstream_items.is_empty() {
            return Err(AppError::EmptyListing {
                item: "dynamic_content_items".to_string(),
            });
        }

        let dc_items = upstream_items
            .into_iter()
            .map(mirror_dynamic_content_item)
            .collect::<Result<Vec<_>>>()?;

        self.service
            .sync_with_dynamic_content_items(&dc_items)
            .await
            .map_err(|e| {
                AppError::service("ticket_forms_sync: sync_with_dynamic_content_items", e)
            })?;
        self.service
            .reset_ticket_forms_counter()
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: reset_ticket_forms_counter", e))?;
        self.service
            .unlock_ticket_forms_counter()
            .await
            .map_err(|e| AppError::service("ticket_forms_sync: unlock_ticket_forms_counter", e))?;

        Ok(())
    }
}

// --- upstream-to-mirror translation ---

fn mirror_category(c: forms::Category, country_code: &str) -> Category {
    Category {
        id: c.id,
        position: c.position,
        created_at: c.created_at,
        updated_at: c.updated_at,
        source_locale: c.source_locale,
        outdated: c.outdated,
        url: c.url,
        html_url: c.html_url,
        name: c.name,
        description: c.description,
        locale: c.locale,
        country_code: country_code.to_string(),
    }
}

fn mirror_section(s: forms::Section, country_code: &str) -> Section {
    Section {
        category_id: s.category_id,
        id: s.id,
        position: s.position,
        created_at: s.created_at,
        updated_at: s.updated_at,
        source_locale: s.source_locale,
        outdated: s.outdated,
        url: s.url,
        html_url: s.html_url,
        name: s.name,
        description: s.description,
        locale: s.locale,
        country_code: country_code.to_string(),
    }
}

fn mirror_article(a: forms::Article, country_code: &str) -> Article {
    Article {
        section_id: a.section_id,
        id: a.id,
        author_id: a.author_id,
        comments_disable: a.comments_disable,
        draft: a.draft,
        promoted: a.promoted,
        position: a.position,
        vote_sum: a.vote_sum,
        vote_count: a.vote_count,
        created_at: a.created_at,
        updated_at: a.updated_at,
        source_locale: a.source_locale,
        outdated: a.outdated,
        outdated_locales: a.outdated_locales,
        edited_at: a.edited_at,
        label_names: a.label_names,
        url: a.url,
        html_url: a.html_url,
        name: a.name,
        title: a.title,
        body: a.body,
        locale: a.locale,
        country_code: country_code.to_string(),
    }
}

fn mirror_ticket_form(f: forms::TicketForm) -> SyncTicketForm {
    SyncTicketForm {
        id: f.id,
        url: f.url,
        name: f.name,
        raw_name: f.raw_name,
        display_name: f.display_name,
        raw_display_name: f.raw_display_name,
        end_user_visible: f.end_user_visible,
        position: f.position,
        active: f.active,
        in_all_brands: f.in_all_brands,
        restricted_brand_ids: f.restricted_brand_ids,
        ticket_field_ids: f.ticket_field_ids,
        created_at: f.created_at,
        updated_at: f.updated_at,
    }
}

fn mirror_ticket_field(f: forms::TicketField) -> Result<SyncTicketField> {
    Ok(SyncTicketField {
        id: f.id,
        url: f.url,
        field_type: f.field_type,
        title: f.title,
        raw_title: f.raw_title,
        description: f.description,
        raw_description: f.raw_description,
        position: f.position,
        active: f.active,
        required: f.required,
        collapsed_for_agents: f.collapsed_for_agents,
        regexp_for_validation: f.regexp_for_validation,
        title_in_portal: f.title_in_portal,
        raw_title_in_portal: f.raw_title_in_portal,
        visible_in_portal: f.visible_in_portal,
        editable_in_portal: f.editable_in_portal,
        required_in_portal: f.required_in_portal,
        tag: f.tag,
        created_at: f.created_at,
        updated_at: f.updated_at,
        removable: f.removable,
        custom_field_options: marshal_opaque(f.custom_field_options)?,
        system_field_options: marshal_opaque(f.system_field_options)?,
    })
}

fn mirror_dynamic_content_item(i: forms::DynamicContentItem) -> Result<SyncDynamicContentItem> {
    Ok(SyncDynamicContentItem {
        id: i.id,
        url: i.url,
        name: i.name,
        placeholder: i.placeholder,
        default_locale_id: i.default_locale_id,
        outdated: i.outdated,
        created_at: i.created_at,
        updated_at: i.updated_at,
        variants: marshal_opaque(i.variants)?,
    })
}

/// Persist an optional array as an opaque serialized byte-string; an absent
/// upstream value normalizes to the literal `[]`.
fn marshal_opaque<T: Serialize>(value: Option<Vec<T>>) -> Result<Vec<u8>> {
    match value {
        None => Ok(b"[]".to_vec()),
        Some(items) => Ok(serde_json::to_vec(&items)?),
    }
}
