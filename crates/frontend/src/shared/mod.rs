pub mod alerts;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
