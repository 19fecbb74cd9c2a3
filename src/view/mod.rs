// src/view/mod.rs

pub mod chart;
pub mod csv;
pub mod form;
pub mod summary;
