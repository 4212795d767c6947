//!
//! A crate containing IO related functionality. This includes reading and
//! writing automata and conversion results in a JSON format.
//!

#![forbid(unsafe_code)]

pub mod io_json;
