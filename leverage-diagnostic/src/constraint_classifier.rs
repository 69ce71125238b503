//! Constraint classification from derived metrics.
//!
//! An ordered, short-circuiting decision tree. Rules overlap on purpose; the
//! first one that matches wins, and the order encodes severity:
//!
//! 1. Cash flow: runway under 2 months, or collections slower than 45 days
//! 2. Margin: gross margin under 40%, or net margin under 10%
//! 3. Capacity: utilization over 85%
//! 4. Conversion: lead-to-close rate under 20%
//! 5. Lead volume: everything above is healthy
//!
//! An infinite runway (no burn) never satisfies the runway clause.

use crate::thresholds::{
    MAX_CAPACITY_UTILIZATION, MAX_DAYS_TO_COLLECT, MIN_CONVERSION_RATE, MIN_GROSS_MARGIN,
    MIN_NET_MARGIN, MIN_RUNWAY_MONTHS,
};
use crate::types::{ConstraintLabel, DerivedMetrics};

/// Select exactly one constraint for a set of derived metrics.
pub fn classify(derived: &DerivedMetrics) -> ConstraintLabel {
    if derived.runway_months < MIN_RUNWAY_MONTHS
        || derived.average_days_to_collect > MAX_DAYS_TO_COLLECT
    {
        ConstraintLabel::CashFlow
    } else if derived.gross_margin < MIN_GROSS_MARGIN || derived.net_margin < MIN_NET_MARGIN {
        ConstraintLabel::Margin
    } else if derived.capacity_utilization > MAX_CAPACITY_UTILIZATION {
        ConstraintLabel::Capacity
    } else if derived.conversion_rate < MIN_CONVERSION_RATE {
        ConstraintLabel::Conversion
    } else {
        ConstraintLabel::LeadVolume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Metrics that clear every threshold.
    fn healthy() -> DerivedMetrics {
        DerivedMetrics {
            gross_margin: 0.60,
            net_profit: 5_000.0,
            net_margin: 0.50,
            conversion_rate: 0.30,
            capacity_utilization: 0.50,
            monthly_burn: 5_000.0,
            runway_months: 10.0,
            average_days_to_collect: 10.0,
        }
    }

    #[test]
    fn healthy_business_is_lead_constrained() {
        assert_eq!(classify(&healthy()), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn short_runway_is_cash_flow() {
        let d = DerivedMetrics { runway_months: 1.99, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::CashFlow);
    }

    #[test]
    fn runway_of_exactly_two_months_is_not_cash_flow() {
        let d = DerivedMetrics { runway_months: 2.0, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn slow_collections_are_cash_flow() {
        let d = DerivedMetrics { average_days_to_collect: 46.0, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::CashFlow);
        let d = DerivedMetrics { average_days_to_collect: 45.0, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn infinite_runway_never_trips_runway_clause() {
        let d = DerivedMetrics {
            runway_months: f64::INFINITY,
            monthly_burn: 0.0,
            ..healthy()
        };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);

        // The collection clause still applies.
        let d = DerivedMetrics { average_days_to_collect: 60.0, ..d };
        assert_eq!(classify(&d), ConstraintLabel::CashFlow);
    }

    #[test]
    fn margin_thresholds() {
        let d = DerivedMetrics { gross_margin: 0.39, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::Margin);
        let d = DerivedMetrics { net_margin: 0.09, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::Margin);
        let d = DerivedMetrics { gross_margin: 0.40, net_margin: 0.10, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn capacity_threshold_is_strict() {
        let d = DerivedMetrics { capacity_utilization: 0.86, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::Capacity);
        let d = DerivedMetrics { capacity_utilization: 0.85, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn conversion_threshold() {
        let d = DerivedMetrics { conversion_rate: 0.19, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::Conversion);
        let d = DerivedMetrics { conversion_rate: 0.20, ..healthy() };
        assert_eq!(classify(&d), ConstraintLabel::LeadVolume);
    }

    #[test]
    fn earlier_rules_take_priority() {
        // Every rule fires; cash flow wins.
        let d = DerivedMetrics {
            runway_months: 0.5,
            gross_margin: 0.10,
            capacity_utilization: 0.99,
            conversion_rate: 0.01,
            ..healthy()
        };
        assert_eq!(classify(&d), ConstraintLabel::CashFlow);

        // Without the cash problem, margin wins over capacity and conversion.
        let d = DerivedMetrics { runway_months: 12.0, ..d };
        assert_eq!(classify(&d), ConstraintLabel::Margin);

        // Capacity wins over conversion.
        let d = DerivedMetrics { gross_margin: 0.70, ..d };
        assert_eq!(classify(&d), ConstraintLabel::Capacity);
    }
}
