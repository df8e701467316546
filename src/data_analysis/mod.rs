// src/data_analysis/mod.rs

pub mod density;
pub mod derivative;
pub mod hit_detection;
pub mod session;
pub mod session_stats;
pub mod smoothing;

// src/data_analysis/mod.rs
