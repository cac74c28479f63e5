pub mod backtest;
pub mod cluster;
pub mod diagnostics;
pub mod login_history;
pub mod prediction;
pub mod predictor_kind;
pub mod timestamp;
pub mod user;

pub use backtest::BacktestScore;
pub use cluster::{DayType, LoginCluster, TimeOfDay};
pub use diagnostics::{
    ClusterDiagnostics, ClusterSummary, DayCount, HourCount, IntervalDiagnostics,
    PatternDiagnostics, PredictorDiagnostics,
};
pub use login_history::LoginHistory;
pub use prediction::{PredictionBundle, StrategyPrediction, UserPrediction, UserPredictionReport};
pub use predictor_kind::PredictorKind;
pub use user::{LoginApiData, LoginApiResponse, UserRecord, UserSummary};
