pub mod calculation;
pub mod edit;
pub mod list;

pub use list::SalesPage;
