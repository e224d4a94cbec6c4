pub mod activity;
pub mod dosage;
pub mod error;
pub mod ids;
pub mod masterdata;
pub mod permission;
pub mod session;
mod time;


pub use activity::*;
pub use dosage::*;
pub use error::CoreError;
pub use ids::*;
pub use masterdata::*;
pub use permission::*;
pub use session::*;
