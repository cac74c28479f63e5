//! # cadence-prediction
//!
//! Next-login prediction from a user's login history.
//!
//! ## 3 Prediction Strategies
//!
//! | Strategy | Signal Source |
//! |----------|--------------|
//! | Interval | Mean gap between consecutive logins |
//! | Pattern | Most frequent weekday and hour of day |
//! | Cluster | Weekday/weekend × morning/afternoon/evening clusters, fixed transition table, Gaussian interval sampling |
//!
//! ## Backtest
//!
//! With at least 3 logins every strategy is re-run with the most recent
//! login withheld, and its prediction is scored 10–100 against that login.

pub mod backtest;
pub mod engine;
pub mod parsing;
pub mod strategies;

pub use backtest::score_backtest;
pub use engine::{summarize_users, PredictionEngine, StrategyExplanation};
pub use parsing::{parse_logins, parse_timestamp, ParsedHistory};
pub use strategies::{ClusterPredictor, IntervalPredictor, PatternPredictor, Strategy};
