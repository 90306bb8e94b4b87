pub mod demo;
pub mod foods;
pub mod goals;
pub mod readings;
