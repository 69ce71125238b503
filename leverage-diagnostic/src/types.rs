use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lenient::deserialize_lenient_f64;
use crate::thresholds::{DEFAULT_FIELD_VALUE, DEFAULT_MAX_CAPACITY};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Self-reported monthly figures, exactly as submitted.
///
/// Every field is optional and deserializes leniently: a missing, blank or
/// non-numeric value is stored as `None`. Defaults are applied by
/// [`RawBusinessMetrics::resolve`], never during parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBusinessMetrics {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub monthly_revenue: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub cost_of_delivery: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub fixed_expenses: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub leads_per_month: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub deals_closed_per_month: Option<f64>,
    /// Accepted and carried through, but no derived metric uses it.
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub average_deal_value: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub max_capacity_per_month: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub current_output_per_month: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub cash_on_hand: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub average_days_to_collect: Option<f64>,
}

impl RawBusinessMetrics {
    /// Apply field defaults: `0` everywhere, `1` for `maxCapacityPerMonth`.
    ///
    /// An explicit `0` capacity is kept as `0`; only a missing or unusable
    /// value falls back to `1`.
    pub fn resolve(&self) -> BusinessInputs {
        let or_zero = |v: Option<f64>| v.unwrap_or(DEFAULT_FIELD_VALUE);
        BusinessInputs {
            monthly_revenue: or_zero(self.monthly_revenue),
            cost_of_delivery: or_zero(self.cost_of_delivery),
            fixed_expenses: or_zero(self.fixed_expenses),
            leads_per_month: or_zero(self.leads_per_month),
            deals_closed_per_month: or_zero(self.deals_closed_per_month),
            average_deal_value: or_zero(self.average_deal_value),
            max_capacity_per_month: self
                .max_capacity_per_month
                .unwrap_or(DEFAULT_MAX_CAPACITY),
            current_output_per_month: or_zero(self.current_output_per_month),
            cash_on_hand: or_zero(self.cash_on_hand),
            average_days_to_collect: or_zero(self.average_days_to_collect),
        }
    }
}

/// Raw figures after defaults are applied. Every field is a finite number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusinessInputs {
    pub monthly_revenue: f64,
    pub cost_of_delivery: f64,
    pub fixed_expenses: f64,
    pub leads_per_month: f64,
    pub deals_closed_per_month: f64,
    pub average_deal_value: f64,
    pub max_capacity_per_month: f64,
    pub current_output_per_month: f64,
    pub cash_on_hand: f64,
    pub average_days_to_collect: f64,
}

/// One business as loaded from a batch file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusinessRecord {
    pub business_id: Option<String>,
    pub metrics: RawBusinessMetrics,
}

// ---------------------------------------------------------------------------
// Derived types
// ---------------------------------------------------------------------------

/// Canonical ratios computed from one set of inputs.
///
/// Ratio fields are `0` whenever their denominator is not positive.
/// `runway_months` is the only field that may be infinite (no burn); it
/// serializes to JSON `null` in that case.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub gross_margin: f64,
    pub net_profit: f64,
    pub net_margin: f64,
    pub conversion_rate: f64,
    pub capacity_utilization: f64,
    pub monthly_burn: f64,
    pub runway_months: f64,
    pub average_days_to_collect: f64,
}

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// The single business function currently limiting growth.
///
/// Variants are declared in priority order: the classifier checks them top
/// to bottom and `LeadVolume` is the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstraintLabel {
    #[serde(rename = "Cash Flow")]
    CashFlow,
    Margin,
    Capacity,
    Conversion,
    #[serde(rename = "Lead Volume")]
    LeadVolume,
}

impl ConstraintLabel {
    /// Every label, in classifier priority order.
    pub const ALL: [ConstraintLabel; 5] = [
        ConstraintLabel::CashFlow,
        ConstraintLabel::Margin,
        ConstraintLabel::Capacity,
        ConstraintLabel::Conversion,
        ConstraintLabel::LeadVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintLabel::CashFlow => "Cash Flow",
            ConstraintLabel::Margin => "Margin",
            ConstraintLabel::Capacity => "Capacity",
            ConstraintLabel::Conversion => "Conversion",
            ConstraintLabel::LeadVolume => "Lead Volume",
        }
    }
}

impl fmt::Display for ConstraintLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
