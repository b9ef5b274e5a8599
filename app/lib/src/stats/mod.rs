//! Statistical reduction of extracted samples.
//!
//! Reduces a non-empty sample sequence to a fixed summary. Reduction never
//! silently defaults: an empty sequence is an error, because a benchmark log
//! that produced no samples is indistinguishable from a scraping bug and
//! must not average into the results as zero.

mod summary;

pub use summary::SummaryStats;
