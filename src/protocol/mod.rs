pub mod command;
pub mod driver;
