//! HTML route handlers

pub mod calculator;
