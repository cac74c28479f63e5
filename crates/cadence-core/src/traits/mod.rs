pub mod predictor;

pub use predictor::ILoginPredictor;
