pub mod countries;
pub mod models;

pub use countries::*;
pub use models::*;
