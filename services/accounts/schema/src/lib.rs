//! SeaORM entities owned by the accounts service.

pub mod agrovets;
pub mod farmers;
pub mod users;
