//! HTTP adapters for the hosted table API.
//!
//! This crate implements `regata-core`'s [`SettingsProvider`] and
//! [`TourCatalog`] contracts over a PostgREST-style table API, plus the
//! administrative write surface (settings update, catalog create/update/
//! delete). Authentication state is injected explicitly as an
//! [`AdminSession`]; no ambient lookup.
//!
//! # Architecture
//!
//! The core traits are synchronous to keep the engine embeddable in
//! synchronous contexts. [`RestTableClient`] bridges async HTTP calls to
//! that interface by blocking on an owned current-thread Tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use regata_core::{SettingsProvider, TourCatalog};
//! use regata_data::{RestTableClient, TableClientConfig};
//!
//! let config = TableClientConfig::new("https://svc.example", "anon-key");
//! let client = RestTableClient::with_config(config)?;
//!
//! let settings = client.get_configuration()?;
//! let tours = client.list_tours()?;
//! println!("{} tours, {} max points", tours.len(), settings.max_points);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`SettingsProvider`]: regata_core::SettingsProvider
//! [`TourCatalog`]: regata_core::TourCatalog

#![forbid(unsafe_code)]

mod admin;
mod client;
mod rows;

pub use admin::{AdminSession, RouteValidationError, TourDraft, WriteError};
pub use client::{ClientBuildError, DEFAULT_USER_AGENT, RestTableClient, TableClientConfig};
