pub mod config;
pub mod lister;
pub mod routes;

pub use routes::{create_router, ListerState};
