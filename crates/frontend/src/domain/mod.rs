pub mod sales;
pub mod summary;
