mod guards;
mod metrics;


pub use guards::{evaluate_and_observe, navigate_and_observe};
pub use metrics::{ComplianceMetrics, MetricsError};
