//! Interview Scheduler - Availability matching for interview booking
//!
//! This crate matches a candidate's declared open time windows against
//! one or more interviewers' windows and returns the slots common to all
//! of them, so an interview can be scheduled without back-and-forth.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
