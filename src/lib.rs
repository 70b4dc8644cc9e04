//! Annual income-tax refund estimator for Israeli Form 106 wage reports
//!
//! This crate estimates whether an employee is owed a refund or may owe
//! additional tax for a given year, from the Form 106 figures of one or more
//! employers and an optional set of questionnaire answers. Every estimate
//! carries a breakdown, the assumptions it rests on, warnings, a confidence
//! level and an audit trace of the rules applied.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
