mod algorithm;
mod login_history;
mod prediction_set;
mod reliability_tier;
mod user_prediction;

pub use algorithm::Algorithm;
pub use login_history::LoginHistory;
pub use prediction_set::{PredictionSet, ReliabilityScores};
pub use reliability_tier::ReliabilityTier;
pub use user_prediction::UserPrediction;
