//! Users Module
//!
//! Entity and persistence layer for user records.

mod model;
mod repository;

pub use model::User;
pub use repository::UserRepository;
