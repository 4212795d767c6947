//!
//! A crate containing nondeterministic finite automata related functionality:
//! the automaton model, epsilon closures and the elimination of epsilon
//! transitions.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod automaton;
mod epsilon_closure;
mod epsilon_elimination;
mod random_automaton;
mod transition_index;

pub use automaton::*;
pub use epsilon_closure::*;
pub use epsilon_elimination::*;
pub use random_automaton::*;
pub use transition_index::*;
