pub mod sort;
pub mod sortable_header_cell;

pub use sort::{apply_permutation, sort_permutation, CellValue, TableSort};
pub use sortable_header_cell::SortableHeaderCell;
