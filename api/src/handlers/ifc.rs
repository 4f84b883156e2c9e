//! Source IFC file endpoints

pub mod get_all;
