// src/models/mod.rs

//! Domain models for the mirror.
//!
//! Mirror entities are the rows written through the [`Service`] port on a
//! successful sync; the port itself abstracts the durable store, the hot
//! cache, and the counter/lock primitives.

mod entities;
mod service;

pub use entities::{
    Article, Category, Section, SyncDynamicContentItem, SyncTicketField, SyncTicketForm,
};
pub use service::Service;
