pub mod behavior;
pub mod person;
