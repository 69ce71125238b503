//! Growth-constraint diagnostic.
//!
//! Takes a small business's self-reported monthly figures and names the one
//! constraint limiting growth: cash flow, margin, capacity, conversion or
//! lead volume. Deterministic thresholds, no model, no I/O on the hot path.
//!
//! Pipeline: [`RawBusinessMetrics`] -> [`derive`] -> [`DerivedMetrics`] ->
//! [`classify`] -> [`ConstraintLabel`] -> [`previews_for`] / [`details_for`].
//! [`diagnose`] runs all of it.

pub mod action_catalog;
pub mod constraint_classifier;
pub mod diagnosis;
pub mod error;
pub mod lenient;
pub mod metrics_deriver;
pub mod metrics_loader;
pub mod thresholds;
pub mod types;

pub use action_catalog::{details_for, previews_for, ActionPlan};
pub use constraint_classifier::classify;
pub use diagnosis::{diagnose, DetailAccess, Diagnosis};
pub use error::{DiagnosticError, DiagnosticResult};
pub use metrics_deriver::{derive, derive_from_inputs};
pub use metrics_loader::{load_metrics_csv, load_metrics_file, load_metrics_json};
pub use types::{BusinessInputs, BusinessRecord, ConstraintLabel, DerivedMetrics, RawBusinessMetrics};
