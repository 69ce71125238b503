//! Derived-metric computation.
//!
//! Turns one set of self-reported figures into the ratios the classifier
//! reads. Pure arithmetic: no I/O, no state, and the same input always gives
//! bit-identical output.
//!
//! - Gross margin: (revenue - delivery cost) / revenue
//! - Net profit: revenue - delivery cost - fixed expenses (may be negative)
//! - Net margin: net profit / revenue
//! - Conversion rate: deals closed / leads
//! - Capacity utilization: current output / max capacity
//! - Monthly burn: fixed expenses + delivery cost
//! - Runway: cash on hand / monthly burn (infinite when nothing is burned)

use crate::types::{BusinessInputs, DerivedMetrics, RawBusinessMetrics};

/// Derive canonical metrics from raw input. Never fails.
pub fn derive(raw: &RawBusinessMetrics) -> DerivedMetrics {
    derive_from_inputs(&raw.resolve())
}

/// Derive canonical metrics from already-resolved inputs.
pub fn derive_from_inputs(inputs: &BusinessInputs) -> DerivedMetrics {
    let revenue = inputs.monthly_revenue;

    let gross_margin = ratio_or_zero(revenue - inputs.cost_of_delivery, revenue);

    let net_profit = revenue - inputs.cost_of_delivery - inputs.fixed_expenses;
    let net_margin = ratio_or_zero(net_profit, revenue);

    let conversion_rate =
        ratio_or_zero(inputs.deals_closed_per_month, inputs.leads_per_month);

    let capacity_utilization = ratio_or_zero(
        inputs.current_output_per_month,
        inputs.max_capacity_per_month,
    );

    let monthly_burn = inputs.fixed_expenses + inputs.cost_of_delivery;
    let runway_months = if monthly_burn > 0.0 {
        inputs.cash_on_hand / monthly_burn
    } else {
        f64::INFINITY
    };

    DerivedMetrics {
        gross_margin,
        net_profit,
        net_margin,
        conversion_rate,
        capacity_utilization,
        monthly_burn,
        runway_months,
        average_days_to_collect: inputs.average_days_to_collect,
    }
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw(revenue: f64, delivery: f64, fixed: f64, cash: f64) -> RawBusinessMetrics {
        RawBusinessMetrics {
            monthly_revenue: Some(revenue),
            cost_of_delivery: Some(delivery),
            fixed_expenses: Some(fixed),
            cash_on_hand: Some(cash),
            ..Default::default()
        }
    }

    #[test]
    fn margins_and_runway_from_financials() {
        let derived = derive(&make_raw(10_000.0, 4_000.0, 1_000.0, 50_000.0));
        assert!((derived.gross_margin - 0.60).abs() < 1e-9);
        assert!((derived.net_profit - 5_000.0).abs() < 1e-9);
        assert!((derived.net_margin - 0.50).abs() < 1e-9);
        assert!((derived.monthly_burn - 5_000.0).abs() < 1e-9);
        // 50,000 / 5,000 = 10 months
        assert!((derived.runway_months - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_revenue_zeroes_both_margins() {
        let derived = derive(&make_raw(0.0, 3_000.0, 2_000.0, 1_000.0));
        assert_eq!(derived.gross_margin, 0.0);
        assert_eq!(derived.net_margin, 0.0);
        // Net profit is not floored.
        assert!((derived.net_profit - (-5_000.0)).abs() < 1e-9);
    }

    #[test]
    fn negative_revenue_is_treated_like_zero_for_ratios() {
        let derived = derive(&make_raw(-500.0, 100.0, 100.0, 1_000.0));
        assert_eq!(derived.gross_margin, 0.0);
        assert_eq!(derived.net_margin, 0.0);
    }

    #[test]
    fn zero_leads_zeroes_conversion() {
        let raw = RawBusinessMetrics {
            leads_per_month: Some(0.0),
            deals_closed_per_month: Some(12.0),
            ..Default::default()
        };
        assert_eq!(derive(&raw).conversion_rate, 0.0);
    }

    #[test]
    fn explicit_zero_capacity_zeroes_utilization() {
        let raw = RawBusinessMetrics {
            max_capacity_per_month: Some(0.0),
            current_output_per_month: Some(40.0),
            ..Default::default()
        };
        assert_eq!(derive(&raw).capacity_utilization, 0.0);
    }

    #[test]
    fn missing_capacity_divides_by_one() {
        let raw = RawBusinessMetrics {
            current_output_per_month: Some(3.0),
            ..Default::default()
        };
        assert!((derive(&raw).capacity_utilization - 3.0).abs() < 1e-9);
    }

    #[test]
    fn no_burn_means_infinite_runway() {
        let derived = derive(&make_raw(8_000.0, 0.0, 0.0, 0.0));
        assert_eq!(derived.monthly_burn, 0.0);
        assert!(derived.runway_months.is_infinite());
        assert!(derived.runway_months > 0.0);
    }

    #[test]
    fn days_to_collect_passes_through() {
        let raw = RawBusinessMetrics {
            average_days_to_collect: Some(37.5),
            ..Default::default()
        };
        assert_eq!(derive(&raw).average_days_to_collect, 37.5);
    }

    #[test]
    fn ratios_are_never_nan() {
        let derived = derive(&RawBusinessMetrics::default());
        for value in [
            derived.gross_margin,
            derived.net_margin,
            derived.conversion_rate,
            derived.capacity_utilization,
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn derive_is_bit_identical_across_calls() {
        let raw = RawBusinessMetrics {
            monthly_revenue: Some(13_337.77),
            cost_of_delivery: Some(4_321.09),
            fixed_expenses: Some(987.65),
            leads_per_month: Some(71.0),
            deals_closed_per_month: Some(9.0),
            max_capacity_per_month: Some(33.0),
            current_output_per_month: Some(29.0),
            cash_on_hand: Some(12_345.6),
            ..Default::default()
        };
        let a = derive(&raw);
        let b = derive(&raw);
        assert_eq!(a.gross_margin.to_bits(), b.gross_margin.to_bits());
        assert_eq!(a.net_margin.to_bits(), b.net_margin.to_bits());
        assert_eq!(a.conversion_rate.to_bits(), b.conversion_rate.to_bits());
        assert_eq!(a.capacity_utilization.to_bits(), b.capacity_utilization.to_bits());
        assert_eq!(a.runway_months.to_bits(), b.runway_months.to_bits());
    }
}
