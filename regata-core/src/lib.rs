//! Core domain types for the Regata tour engine.
//!
//! This crate owns the tour composition logic: waypoint selection under
//! geofence and count constraints, great-circle route distance, and the
//! derived price. Provider traits describe the narrow contracts to the
//! hosted settings and catalog services; their HTTP implementations live in
//! `regata-data`.
//!
//! Constructors and mutating operations return `Result` to surface invalid
//! input early; rejected operations never mutate state.

#![forbid(unsafe_code)]

mod catalog;
mod config;
pub mod distance;
mod latlng;
mod mode;
mod provider;
mod session;
pub mod test_support;
mod waypoint;

pub use catalog::{PredefinedTour, PredefinedTourError};
pub use config::{TourConfiguration, TourConfigurationError};
pub use distance::DistanceUnit;
pub use latlng::LatLng;
pub use mode::TourMode;
pub use provider::{FetchError, SettingsProvider, TourCatalog};
pub use session::{CompositionSession, OccupancyError, ProposeError, Quote};
pub use waypoint::{Waypoint, WaypointId};
