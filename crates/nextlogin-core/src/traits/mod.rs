mod forecaster;

pub use forecaster::Forecaster;
