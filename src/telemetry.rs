//! Telemetry metric name constants.
//!
//! Centralised metric names for stancemeter operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `stancemeter_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `stance` — per-post label: "pro_a", "pro_b" or "neutral"
//! - `reason` — why a record was rejected: "missing_text", "not_an_object"

/// Total `analyze` runs.
pub const ANALYSES_TOTAL: &str = "stancemeter_analyses_total";

/// Total posts scored.
///
/// Labels: `stance`.
pub const POSTS_SCORED_TOTAL: &str = "stancemeter_posts_scored_total";

/// Total post records rejected before scoring.
///
/// Labels: `reason`.
pub const POSTS_REJECTED_TOTAL: &str = "stancemeter_posts_rejected_total";

/// Wall-clock duration of one `analyze` run in seconds.
pub const ANALYSIS_DURATION_SECONDS: &str = "stancemeter_analysis_duration_seconds";
