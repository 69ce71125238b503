//! CLI report rendering: JSON contract and human-readable text.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use leverage_diagnostic::{BusinessRecord, ConstraintLabel, DerivedMetrics, Diagnosis};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ReportJson {
    generated_at: String,
    source: String,
    records_processed: usize,
    results: Vec<ResultJson>,
    summary: BTreeMap<ConstraintLabel, usize>,
}

#[derive(Serialize)]
struct ResultJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    business_id: Option<String>,
    #[serde(flatten)]
    diagnosis: Diagnosis,
}

/// Count diagnoses per constraint, listing every constraint even at zero.
pub fn summarize(diagnoses: &[Diagnosis]) -> BTreeMap<ConstraintLabel, usize> {
    let mut counts: BTreeMap<ConstraintLabel, usize> =
        ConstraintLabel::ALL.iter().map(|label| (*label, 0)).collect();
    for d in diagnoses {
        *counts.entry(d.constraint).or_insert(0) += 1;
    }
    counts
}

pub fn build_json(source: &str, records: &[BusinessRecord], diagnoses: &[Diagnosis]) -> ReportJson {
    ReportJson {
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        records_processed: records.len(),
        results: records
            .iter()
            .zip(diagnoses)
            .map(|(record, diagnosis)| ResultJson {
                business_id: record.business_id.clone(),
                diagnosis: diagnosis.clone(),
            })
            .collect(),
        summary: summarize(diagnoses),
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Format a whole-dollar amount with comma thousands separators.
pub fn format_dollars(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped.chars().rev().collect::<String>())
}

fn format_pct(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn format_runway(months: f64) -> String {
    if months.is_infinite() {
        "unlimited (no burn)".to_string()
    } else {
        format!("{:.1} months", months)
    }
}

fn print_derived(derived: &DerivedMetrics) {
    println!(
        "       gross margin {}  \u{00b7}  net margin {}  \u{00b7}  net profit {}",
        format_pct(derived.gross_margin),
        format_pct(derived.net_margin),
        format_dollars(derived.net_profit),
    );
    println!(
        "       runway {}  \u{00b7}  collect in {:.0} days  \u{00b7}  utilization {}  \u{00b7}  conversion {}",
        format_runway(derived.runway_months),
        derived.average_days_to_collect,
        format_pct(derived.capacity_utilization),
        format_pct(derived.conversion_rate),
    );
}

pub fn print_human(source: &str, records: &[BusinessRecord], diagnoses: &[Diagnosis], load_ms: u128) {
    println!();
    println!("  GROWTH CONSTRAINT DIAGNOSTIC");
    println!("  {:\u{2500}<64}", "");
    println!(
        "  {} businesses diagnosed from {}  \u{00b7}  loaded in {}ms",
        records.len(),
        source,
        load_ms
    );
    println!();

    for (i, (record, diagnosis)) in records.iter().zip(diagnoses).enumerate() {
        let name = record
            .business_id
            .clone()
            .unwrap_or_else(|| format!("record {}", i + 1));
        println!("  {}. {:28} constraint: {}", i + 1, name, diagnosis.constraint);
        print_derived(&diagnosis.derived);
        for preview in diagnosis.previews.iter() {
            println!("       - {}", preview);
        }
        if let Some(details) = diagnosis.details {
            for plan in details.iter() {
                println!();
                println!("       {} ({})", plan.title, plan.metric);
                for (n, step) in plan.steps.iter().enumerate() {
                    println!("         {}. {}", n + 1, step);
                }
            }
        }
        println!();
    }

    println!("  {:\u{2500}<64}", "");
    let summary = summarize(diagnoses);
    let line: Vec<String> = summary
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(label, count)| format!("{} {}", count, label))
        .collect();
    if line.is_empty() {
        println!("  No records found.");
    } else {
        println!("  {}", line.join("  \u{00b7}  "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use leverage_diagnostic::{diagnose, DetailAccess, RawBusinessMetrics};

    #[test]
    fn format_dollars_groups_thousands() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.0), "$999");
        assert_eq!(format_dollars(5_000.0), "$5,000");
        assert_eq!(format_dollars(1_234_567.4), "$1,234,567");
        assert_eq!(format_dollars(-9_500.0), "-$9,500");
    }

    #[test]
    fn runway_formatting_handles_infinity() {
        assert_eq!(format_runway(f64::INFINITY), "unlimited (no burn)");
        assert_eq!(format_runway(0.526), "0.5 months");
    }

    #[test]
    fn json_report_lists_every_label_in_summary() {
        let records = vec![
            BusinessRecord {
                business_id: Some("acme".into()),
                metrics: RawBusinessMetrics {
                    monthly_revenue: Some(10_000.0),
                    cost_of_delivery: Some(9_000.0),
                    fixed_expenses: Some(500.0),
                    cash_on_hand: Some(5_000.0),
                    ..Default::default()
                },
            },
            BusinessRecord::default(),
        ];
        let diagnoses: Vec<Diagnosis> = records
            .iter()
            .map(|r| diagnose(&r.metrics, DetailAccess::Locked))
            .collect();

        let json = serde_json::to_value(build_json("test.csv", &records, &diagnoses)).unwrap();
        assert_eq!(json["records_processed"], 2);
        assert_eq!(json["results"][0]["business_id"], "acme");
        assert_eq!(json["results"][0]["constraint"], "Cash Flow");
        assert!(json["results"][1].get("business_id").is_none());
        assert_eq!(json["results"][1]["constraint"], "Margin");
        assert_eq!(json["summary"]["Cash Flow"], 1);
        assert_eq!(json["summary"]["Margin"], 1);
        assert_eq!(json["summary"]["Lead Volume"], 0);
        assert_eq!(json["summary"].as_object().unwrap().len(), 5);
    }
}
