pub mod account;
pub mod dashboard;
pub mod projections;
pub mod registration;
pub mod token;
