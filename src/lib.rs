//! Rotating shift scheduler for a manufacturing plant.
//!
//! This crate maps every (worker group, calendar date) to one of four daily
//! shift slots using a fixed anchor week and a forward weekly rotation, and
//! validates assignments against restrictions derived from employee notes.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rotation;
pub mod validation;
