//! Customer-facing activity modes.

use crate::{CompositionSession, PredefinedTour};

/// What the customer is currently doing.
///
/// Each mode carries only its own data: browsing holds the fetched catalog,
/// building holds the mutable composition session, and choosing holds
/// nothing. Leaving a mode discards its payload; there is no terminal
/// "booked" state.
///
/// # Examples
/// ```
/// use regata_core::{CompositionSession, LatLng, TourConfiguration, TourMode};
///
/// let mode = TourMode::default();
/// assert!(matches!(mode, TourMode::Choosing));
///
/// let session =
///     CompositionSession::new(LatLng::new(43.5081, 16.4402), TourConfiguration::default());
/// let mode = mode.enter_build(session);
/// assert!(mode.session().is_some());
/// assert!(matches!(mode.leave(), TourMode::Choosing));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TourMode {
    /// No activity selected yet.
    #[default]
    Choosing,
    /// Browsing the pre-authored catalog; read-only.
    Explore {
        /// The fetched catalog entries, newest first.
        tours: Vec<PredefinedTour>,
    },
    /// Building a custom tour.
    Build {
        /// The in-progress composition session.
        session: CompositionSession,
    },
}

impl TourMode {
    /// Switch into the browse experience with a fetched catalog.
    #[must_use]
    pub fn enter_explore(self, tours: Vec<PredefinedTour>) -> Self {
        Self::Explore { tours }
    }

    /// Switch into the build experience with a fresh session.
    #[must_use]
    pub fn enter_build(self, session: CompositionSession) -> Self {
        Self::Build { session }
    }

    /// Return to [`TourMode::Choosing`], discarding any mode payload.
    #[must_use]
    pub fn leave(self) -> Self {
        Self::Choosing
    }

    /// The active composition session, if building.
    #[must_use]
    pub const fn session(&self) -> Option<&CompositionSession> {
        match self {
            Self::Build { session } => Some(session),
            _ => None,
        }
    }

    /// Mutable access to the active composition session, if building.
    pub const fn session_mut(&mut self) -> Option<&mut CompositionSession> {
        match self {
            Self::Build { session } => Some(session),
            _ => None,
        }
    }

    /// The fetched catalog, if browsing.
    #[must_use]
    pub fn tours(&self) -> Option<&[PredefinedTour]> {
        match self {
            Self::Explore { tours } => Some(tours),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LatLng, TourConfiguration};

    fn session() -> CompositionSession {
        CompositionSession::new(LatLng::new(43.5081, 16.4402), TourConfiguration::default())
    }

    #[test]
    fn starts_in_choosing() {
        assert_eq!(TourMode::default(), TourMode::Choosing);
    }

    #[test]
    fn explore_carries_the_catalog_only() {
        let mode = TourMode::default().enter_explore(Vec::new());
        assert!(mode.tours().is_some());
        assert!(mode.session().is_none());
    }

    #[test]
    fn build_carries_the_session_only() {
        let mut mode = TourMode::default().enter_build(session());
        assert!(mode.tours().is_none());
        let active = mode.session_mut().expect("building");
        active
            .propose_waypoint(LatLng::new(43.5138, 16.2522))
            .expect("accepted");
        assert_eq!(mode.session().map(|s| s.waypoints().len()), Some(1));
    }

    #[test]
    fn leaving_discards_the_payload() {
        let mode = TourMode::default().enter_build(session()).leave();
        assert_eq!(mode, TourMode::Choosing);
    }
}
