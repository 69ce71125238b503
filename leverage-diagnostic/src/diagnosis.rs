//! End-to-end diagnosis: derive, classify, look up actions.

use serde::Serialize;

use crate::action_catalog::{self, ActionPlan};
use crate::constraint_classifier::classify;
use crate::metrics_deriver::derive;
use crate::types::{ConstraintLabel, DerivedMetrics, RawBusinessMetrics};

/// Whether the caller has cleared its own access check for detailed plans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailAccess {
    #[default]
    Locked,
    Unlocked,
}

/// The full result handed back to a caller.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnosis {
    pub constraint: ConstraintLabel,
    pub derived: DerivedMetrics,
    pub previews: &'static [&'static str; 3],
    /// Present only when the caller unlocked details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static [ActionPlan; 3]>,
}

/// Run the whole pipeline for one business.
pub fn diagnose(raw: &RawBusinessMetrics, access: DetailAccess) -> Diagnosis {
    let derived = derive(raw);
    let constraint = classify(&derived);

    log::debug!(
        "diagnosed {} (runway {:.2} mo, gross margin {:.3}, utilization {:.3}, conversion {:.3})",
        constraint,
        derived.runway_months,
        derived.gross_margin,
        derived.capacity_utilization,
        derived.conversion_rate,
    );

    Diagnosis {
        constraint,
        derived,
        previews: action_catalog::previews_for(constraint),
        details: match access {
            DetailAccess::Unlocked => Some(action_catalog::details_for(constraint)),
            DetailAccess::Locked => None,
        },
    }
}
