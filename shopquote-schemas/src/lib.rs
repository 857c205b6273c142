pub mod catalog;
pub mod employee;
pub mod file_formats;
pub mod overhead;
pub mod work_order;
