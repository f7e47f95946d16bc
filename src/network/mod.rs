pub mod cache;
pub mod network;
pub mod params;

pub use cache::{ActivationCache, GradientSet};
pub use network::Network;
pub use params::ParameterSet;
