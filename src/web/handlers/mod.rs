//! Web page handlers.

pub mod dashboard;
pub mod landing;
pub mod stats;

pub use dashboard::dashboard_handler;
pub use landing::landing_handler;
pub use stats::stats_handler;
