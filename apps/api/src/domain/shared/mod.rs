pub mod authorization;
pub mod errors;
