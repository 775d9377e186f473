pub mod errors;
pub mod filters;
pub mod models;
pub mod provider;
pub mod repo;
pub mod samples;
pub mod session;
pub mod stats;

pub use errors::*;
pub use filters::*;
pub use models::*;
pub use provider::*;
pub use repo::*;
pub use samples::*;
pub use session::*;
pub use stats::*;
