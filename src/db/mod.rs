//! Database access for the business entities

pub mod maintenance;
pub mod queries;

pub use maintenance::wipe_all_data;
pub use queries::*;
