pub mod export;
pub mod open;
pub mod profiles;
