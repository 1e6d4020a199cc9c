pub mod model;
pub mod query;
pub mod service;

pub use model::*;
pub use service::StudentRegistry;
