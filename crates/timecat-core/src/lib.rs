//! # timecat Core Library
//!
//! Classifies calendar meetings into organizational categories and reports
//! how much time a week spent in each one, per day and in total.
//!
//! ## Architecture
//!
//! - **Registry**: declarative keyword table per category, compiled once into
//!   word-boundary patterns
//! - **Categorizer**: keyword scoring with priority tie-breaking; exactly one
//!   category per meeting
//! - **Aggregation**: weekday/series/category grouping over durations rounded
//!   up to 30-minute blocks
//! - **Sources**: the [`CalendarSource`] seam plus a JSON export reader
//!
//! ## Key Components
//!
//! - [`Categorizer`]: assigns a [`Category`] to a [`MeetingRecord`]
//! - [`KeywordRegistry`]: keyword table, injectable for tests and config
//! - [`WeeklyReport`]: serializable week summary for presentation layers
//! - [`Config`]: application configuration management

pub mod aggregate;
pub mod categorizer;
pub mod category;
pub mod config;
pub mod error;
pub mod meeting;
pub mod registry;
pub mod report;
pub mod rounding;
pub mod source;
pub mod week;

pub use aggregate::{
    category_totals, daily_category_totals, format_duration, group_by_series, group_by_weekday,
    minutes_to_hours, range_total, CategoryTotals, DailySummary, DayTotals, SeriesGroup,
    TotalsMode,
};
pub use categorizer::{CategorizedCollection, Categorizer, CategoryScore, Classification};
pub use category::Category;
pub use config::{Config, KeywordConfig, ReportConfig};
pub use error::{ConfigError, CoreError, Result};
pub use meeting::{MeetingRecord, RawMeeting};
pub use registry::{builtin_rules, CategoryRule, KeywordPattern, KeywordRegistry};
pub use report::{ReportOptions, WeeklyReport};
pub use rounding::round_up_30;
pub use source::{CalendarSource, JsonFileSource};
pub use week::WeekRange;
