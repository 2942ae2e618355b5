//! Earnings split calculator for restaurant bill tracking.
//!
//! This crate takes logged lunch and dinner bills plus a small set of
//! configurable percentages, and computes how much of the revenue belongs to
//! the shop operator ("phulkas earnings") versus the common pool shared among
//! the dinner staff, per meal, per day and over a date range.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
