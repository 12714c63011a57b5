pub mod layout;
pub mod reports;
pub mod status;
