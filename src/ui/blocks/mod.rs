pub mod check_item;
pub mod error;
pub mod header;
pub mod manual_fix;
pub mod summary;
pub mod warning;
