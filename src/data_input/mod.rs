// src/data_input/mod.rs

pub mod decimal;
pub mod log_data;
pub mod log_parser;

// src/data_input/mod.rs
