pub mod range_selector;
pub mod tables;
