pub mod config;
pub mod disease;
pub mod paths;
pub mod predictor;
pub mod risk;

pub use disease::Disease;
pub use risk::RiskLevel;
