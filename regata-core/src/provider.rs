//! Contracts to the hosted settings and catalog services.
//!
//! The engine treats both services as opaque collaborators reached through a
//! narrow, synchronous interface. A failed fetch is terminal for that
//! attempt; the consumer's policy is to surface a retry affordance, never to
//! retry automatically.

use thiserror::Error;

use crate::{PredefinedTour, TourConfiguration};

/// Errors from fetching or writing remote records.
///
/// Variants carry enough context to render an actionable message; none of
/// them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service could not be reached.
    #[error("network error fetching {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Transport-level failure description.
        message: String,
    },
    /// The service answered with a failure status.
    #[error("{url} returned HTTP {status}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response or client error description.
        message: String,
    },
    /// The request ran out of time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The response body could not be decoded into the expected record.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Decoder failure description.
        message: String,
    },
    /// The expected record does not exist.
    #[error("no record found in {table}")]
    MissingRecord {
        /// Table the lookup targeted.
        table: &'static str,
    },
}

/// Supplies the single active [`TourConfiguration`] record.
///
/// Implementations fetch by a fixed identity; the engine reads the result
/// once per session as an immutable snapshot.
pub trait SettingsProvider {
    /// Fetch the active configuration.
    ///
    /// # Errors
    ///
    /// [`FetchError`] when the service is unreachable, answers with a
    /// failure, or returns no record.
    fn get_configuration(&self) -> Result<TourConfiguration, FetchError>;
}

/// Supplies the catalog of pre-authored tours.
pub trait TourCatalog {
    /// Fetch all catalog entries, most recently created first.
    ///
    /// Ordering is the service's responsibility; implementations request it
    /// rather than sorting locally.
    ///
    /// # Errors
    ///
    /// [`FetchError`] on transport or service failure.
    fn list_tours(&self) -> Result<Vec<PredefinedTour>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_name_the_endpoint() {
        let err = FetchError::Http {
            url: "https://svc.example/rest/v1/tour_settings".to_owned(),
            status: 503,
            message: "service unavailable".to_owned(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("tour_settings"));
        assert!(rendered.contains("503"));
    }

    #[test]
    fn missing_record_names_the_table() {
        let err = FetchError::MissingRecord {
            table: "tour_settings",
        };
        assert_eq!(err.to_string(), "no record found in tour_settings");
    }
}
