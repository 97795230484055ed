//! Loan approval demo core: a heuristic score engine with illustrative feature
//! contributions, request intake validation, and a keyword-driven loan tutor.

pub mod config;
pub mod error;
pub mod prediction;
pub mod telemetry;
pub mod tutor;
