pub mod page;
pub mod registration;
