//! Test-only in-memory provider implementations used by unit and behaviour
//! tests.

use crate::{FetchError, PredefinedTour, SettingsProvider, TourCatalog, TourConfiguration};

/// In-memory [`SettingsProvider`] returning a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticSettings {
    config: TourConfiguration,
}

impl StaticSettings {
    /// Create a provider that always returns `config`.
    #[must_use]
    pub const fn new(config: TourConfiguration) -> Self {
        Self { config }
    }
}

impl SettingsProvider for StaticSettings {
    fn get_configuration(&self) -> Result<TourConfiguration, FetchError> {
        Ok(self.config.clone())
    }
}

/// In-memory [`TourCatalog`] returning a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tours: Vec<PredefinedTour>,
}

impl StaticCatalog {
    /// Create a catalog from a collection of tours, assumed newest first.
    #[must_use]
    pub fn with_tours<I>(tours: I) -> Self
    where
        I: IntoIterator<Item = PredefinedTour>,
    {
        Self {
            tours: tours.into_iter().collect(),
        }
    }
}

impl TourCatalog for StaticCatalog {
    fn list_tours(&self) -> Result<Vec<PredefinedTour>, FetchError> {
        Ok(self.tours.clone())
    }
}

/// Provider that fails every call with a fixed [`FetchError`].
///
/// Useful for exercising the retry-affordance paths.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    error: FetchError,
}

impl FailingProvider {
    /// Create a provider that always returns `error`.
    #[must_use]
    pub const fn new(error: FetchError) -> Self {
        Self { error }
    }
}

impl SettingsProvider for FailingProvider {
    fn get_configuration(&self) -> Result<TourConfiguration, FetchError> {
        Err(self.error.clone())
    }
}

impl TourCatalog for FailingProvider {
    fn list_tours(&self) -> Result<Vec<PredefinedTour>, FetchError> {
        Err(self.error.clone())
    }
}
