//! Core types for the groundwater forecast dashboard.
//!
//! - `well`: the four monitored wells and their static metadata
//! - `model`: model names, chart traces and score rows
//! - `forecast`: per-well forecast tables parsed from prediction artifacts
//! - `artifact`: locating and reading artifact files on disk
//! - `navigation`: the overview / well-detail view state machine
//! - `series`: plain row types shared by the database and data crates

pub mod artifact;
pub mod forecast;
pub mod model;
pub mod navigation;
pub mod series;
pub mod well;
