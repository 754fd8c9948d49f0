pub mod lookup;
pub mod validation;
