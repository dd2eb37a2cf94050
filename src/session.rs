//! Browsing session state
//!
//! Holds the catalog, the latest metrics and the selection ledger for one
//! user session. Nothing here is persisted.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::models::{Metrics, Profile};
use crate::nutrition::SharedLedger;

/// The most recent profile submission and its metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub profile: Profile,
    pub metrics: Metrics,
    pub submitted_at: DateTime<Utc>,
}

/// Per-session state shared by the service tools
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    assessment: RwLock<Option<Assessment>>,
    ledger: SharedLedger,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            assessment: RwLock::new(None),
            ledger: SharedLedger::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Latest assessment, if a profile has been submitted
    pub fn assessment(&self) -> Option<Assessment> {
        *self.assessment.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn metrics(&self) -> Option<Metrics> {
        self.assessment().map(|a| a.metrics)
    }

    /// Replace the assessment wholesale
    pub fn set_assessment(&self, assessment: Assessment) {
        *self.assessment.write().unwrap_or_else(PoisonError::into_inner) = Some(assessment);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Sex};
    use crate::nutrition::compute_metrics;

    fn assessment(weight: f64) -> Assessment {
        let profile = Profile::new(weight, 175.0, 30, Sex::Male, ActivityLevel::Sedentary).unwrap();
        Assessment {
            profile,
            metrics: compute_metrics(&profile),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(session.assessment().is_none());
        assert!(session.metrics().is_none());
        assert!(session.ledger().snapshot().is_empty());
        assert_eq!(session.catalog().len(), 12);
    }

    #[test]
    fn test_assessment_replaced_wholesale() {
        let session = Session::default();
        session.set_assessment(assessment(70.0));
        let second = assessment(90.0);
        session.set_assessment(second);

        assert_eq!(session.assessment(), Some(second));
        assert_eq!(session.metrics(), Some(second.metrics));
    }
}
