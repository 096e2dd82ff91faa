//! Dashboard components

pub mod advice;
pub mod charts;
pub mod footer;
pub mod form;
pub mod header;
pub mod logs;
pub mod records;
pub mod summary;
