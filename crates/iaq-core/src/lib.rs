//! Parameter evaluation and IAQI computation engine.
//!
//! This crate is the algorithmic core of an IoT air-quality monitoring
//! backend: it takes raw sensor readings and device-specific parameter
//! standards, classifies each parameter against its thresholds, remaps
//! raw values onto the canonical 0–500 IAQI scale, and aggregates the
//! results into one overall score and severity bucket.
//!
//! Everything around it — transports, persistence, notification delivery —
//! is a collaborator. The engine consumes already-resolved
//! [`ParameterStandard`](iaq_types::ParameterStandard) lists and typed
//! [`Reading`](iaq_types::Reading)s, and produces value types the
//! collaborators persist, render, or push.
//!
//! # Pipeline
//!
//! ```text
//! Reading ──▶ evaluate ──▶ [EvaluatedParameter]
//!               │  (per parameter: resolve_threshold ▶ remap)
//!               ├──▶ classify   (notification triggering)
//!               └──▶ aggregate  (dashboard reporting)
//! ```
//!
//! The engine is pure, synchronous computation: no I/O, no shared mutable
//! state, no global caches. Every function operates only on its arguments
//! and returns freshly allocated results, so concurrent evaluations (one
//! per inbound message, one per dashboard request) need no locking.
//!
//! # Quick Start
//!
//! ```
//! use iaq_core::{classify, evaluate, aggregate, ThresholdTable};
//! use iaq_types::{ParameterName, ParameterStandard, Reading, Severity};
//!
//! let table = ThresholdTable::new();
//! let standards = vec![
//!     ParameterStandard::builder(ParameterName::Pm25)
//!         .unit("µg/m³")
//!         .threshold(Severity::Good, 0.0, 50.0)
//!         .threshold(Severity::Moderate, 50.0, 100.0)
//!         .threshold(Severity::Unhealthy, 100.0, 500.0)
//!         .try_build()?,
//! ];
//! let reading = Reading::builder().pm25(120.0).build();
//!
//! let evaluated = evaluate(&reading, &standards, &table);
//! let overall = aggregate(&evaluated, &table);
//! assert_eq!(overall.overall_iaqi, Some(152.5));
//!
//! let classified = classify(evaluated);
//! assert!(classified.has_warnings());
//! # Ok::<(), iaq_types::ConfigError>(())
//! ```

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod evaluate;
pub mod remap;
pub mod report;
pub mod resolve;
pub mod table;

pub use aggregate::{OverallIndexReport, aggregate};
pub use classify::{Classified, classify};
pub use error::{Error, Result};
pub use evaluate::{Classification, EvaluatedParameter, evaluate};
pub use remap::remap;
pub use report::QualityReport;
pub use resolve::resolve_threshold;
pub use table::{CanonicalThreshold, ThresholdTable};
