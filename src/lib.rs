//! COVID-19 Country Wise Dashboard
//!
//! Loads a per-country case table, filters it by country and shows the
//! filtered rows, the top countries by confirmed cases and two charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
