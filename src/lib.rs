//! Rate Plan Duplicate-Detection & Availability-Consistency Engine
//!
//! This crate compares per-day room rates of hotel rate plans over a date
//! window to find plans that are exact duplicates, checks a proposed
//! schedule against existing plans before it is created, and flags dates
//! where room availability drops below an expected count.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
