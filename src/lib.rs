//! Facade crate for the Regata tour engine.
//!
//! Re-exports the core composition and pricing types together with the
//! hosted table-API adapter, so applications depend on one crate.

#![forbid(unsafe_code)]

pub use regata_core::{
    CompositionSession, DistanceUnit, FetchError, LatLng, OccupancyError, PredefinedTour,
    PredefinedTourError, ProposeError, Quote, SettingsProvider, TourCatalog, TourConfiguration,
    TourConfigurationError, TourMode, Waypoint, WaypointId,
};

pub use regata_data::{
    AdminSession, ClientBuildError, RestTableClient, RouteValidationError, TableClientConfig,
    TourDraft, WriteError,
};
