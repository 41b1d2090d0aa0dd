pub mod form;
pub mod social;
