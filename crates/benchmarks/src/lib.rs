//!
//! Helper functionality for the benchmarks.
//!

#![forbid(unsafe_code)]

use enfarust_automata::random_automaton;
use enfarust_automata::Automaton;

/// Creates a random automaton of the given size for the benchmarks, with a
/// fixed alphabet size and out degrees.
pub fn benchmark_automaton(num_of_states: usize) -> Automaton {
    random_automaton(num_of_states, 5, 4, 2)
}
