pub mod audit;
pub mod list;
pub mod validate;
