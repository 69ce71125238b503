//! Centralized decision thresholds for constraint classification.
//!
//! These values are business-calibrated for small service businesses and are
//! not tunable parameters. Changing a threshold here changes which constraint
//! a business is told to work on, so every value is pinned by a test in
//! `constraint_classifier.rs`.

/// Runway (months of cash at current burn) below which cash flow is the constraint.
pub const MIN_RUNWAY_MONTHS: f64 = 2.0;

/// Average collection period (days) above which cash flow is the constraint.
pub const MAX_DAYS_TO_COLLECT: f64 = 45.0;

/// Gross margin below which margin is the constraint.
pub const MIN_GROSS_MARGIN: f64 = 0.40;

/// Net margin below which margin is the constraint.
pub const MIN_NET_MARGIN: f64 = 0.10;

/// Capacity utilization above which delivery capacity is the constraint.
pub const MAX_CAPACITY_UTILIZATION: f64 = 0.85;

/// Lead-to-close rate below which conversion is the constraint.
pub const MIN_CONVERSION_RATE: f64 = 0.20;

/// Value used for any raw field that is missing or not numeric.
pub const DEFAULT_FIELD_VALUE: f64 = 0.0;

/// Value used for a missing or non-numeric `maxCapacityPerMonth`.
/// Keeps the utilization denominator non-zero for businesses that skip the field.
pub const DEFAULT_MAX_CAPACITY: f64 = 1.0;
