//! Tally Domain Concerns

pub mod audit;
pub mod mutation;
pub mod products;
pub mod users;
pub mod validation;
