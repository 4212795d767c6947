use std::fmt;

use thiserror::Error;

/// The index type for a state.
pub type StateIndex = usize;

/// The index type for an input symbol.
pub type SymbolIndex = usize;

/// The canonical spelling of the epsilon (empty word) symbol.
pub const EPSILON: &str = "ε";

/// Returns true iff the given symbol denotes epsilon.
///
/// The empty string is accepted as an alternative spelling; it is rewritten to
/// [EPSILON] when the automaton is constructed.
pub fn is_epsilon(symbol: &str) -> bool {
    symbol == EPSILON || symbol.is_empty()
}

/// A single transition `from --[symbol]-> to` between two named states.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub symbol: String,
}

impl Transition {
    /// Creates the transition `from --[symbol]-> to`.
    pub fn new(from: impl Into<String>, symbol: impl Into<String>, to: impl Into<String>) -> Transition {
        Transition {
            from: from.into(),
            to: to.into(),
            symbol: symbol.into(),
        }
    }

    /// Returns true iff this transition is labelled with epsilon.
    pub fn is_epsilon(&self) -> bool {
        is_epsilon(&self.symbol)
    }
}

/// The ways in which an automaton can violate well-formedness. Raised when the
/// transition index is built, before any closure or projection work begins.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unknown initial state '{0}'")]
    UnknownInitialState(String),

    #[error("Unknown final state '{0}'")]
    UnknownFinalState(String),

    #[error("Transition endpoint '{0}' is not a declared state")]
    DanglingTransitionEndpoint(String),

    #[error("Transition symbol '{0}' does not occur in the alphabet")]
    UndeclaredSymbol(String),
}

/// Represents a nondeterministic finite automaton over named states, possibly
/// containing epsilon transitions.
///
/// States and symbols keep their declaration order, which is used for display
/// and deterministic output, never for semantics.
#[derive(PartialEq, Eq)]
pub struct Automaton {
    states: Vec<String>,
    alphabet: Vec<String>,
    transitions: Vec<Transition>,
    initial_state: String,
    final_states: Vec<String>,

    num_of_epsilon_transitions: usize,
}

impl Automaton {
    /// Creates a new automaton with the given states, alphabet, transitions,
    /// initial state and final states.
    ///
    /// This is the single construction boundary: the empty string spelling of
    /// epsilon is rewritten to [EPSILON], and duplicate states, symbols, final
    /// states and transition triples are collapsed to their first occurrence.
    /// Whether the automaton is well-formed is only checked when a
    /// [crate::TransitionIndex] is built for it.
    pub fn new(
        states: Vec<String>,
        alphabet: Vec<String>,
        transitions: Vec<Transition>,
        initial_state: String,
        final_states: Vec<String>,
    ) -> Automaton {
        let mut unique_states: Vec<String> = Vec::with_capacity(states.len());
        for state in states {
            if !unique_states.contains(&state) {
                unique_states.push(state);
            }
        }

        let mut unique_alphabet: Vec<String> = Vec::with_capacity(alphabet.len());
        for symbol in alphabet {
            let symbol = canonical_symbol(symbol);
            if !unique_alphabet.contains(&symbol) {
                unique_alphabet.push(symbol);
            }
        }

        let mut unique_final_states: Vec<String> = Vec::with_capacity(final_states.len());
        for state in final_states {
            if !unique_final_states.contains(&state) {
                unique_final_states.push(state);
            }
        }

        let mut unique_transitions: Vec<Transition> = Vec::with_capacity(transitions.len());
        for mut transition in transitions {
            transition.symbol = canonical_symbol(transition.symbol);
            if !unique_transitions.contains(&transition) {
                unique_transitions.push(transition);
            }
        }

        let num_of_epsilon_transitions = unique_transitions
            .iter()
            .filter(|transition| transition.is_epsilon())
            .count();

        Automaton {
            states: unique_states,
            alphabet: unique_alphabet,
            transitions: unique_transitions,
            initial_state,
            final_states: unique_final_states,
            num_of_epsilon_transitions,
        }
    }

    /// Returns the states in declaration order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Returns the alphabet in declaration order, which may include [EPSILON].
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Returns the transitions.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the name of the initial state.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// Returns the names of the final states.
    pub fn final_states(&self) -> &[String] {
        &self.final_states
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of symbols, counting the epsilon marker if listed.
    pub fn num_of_symbols(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the number of transitions labelled with epsilon.
    pub fn num_of_epsilon_transitions(&self) -> usize {
        self.num_of_epsilon_transitions
    }
}

/// Rewrites the empty string spelling of epsilon to the canonical one.
fn canonical_symbol(symbol: String) -> String {
    if symbol.is_empty() {
        EPSILON.to_string()
    } else {
        symbol
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the automaton.
        writeln!(f, "Number of states: {}", self.states.len())?;
        writeln!(f, "Number of symbols: {}", self.alphabet.len())?;
        write!(f, "Number of transitions: {}", self.transitions.len())
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;
        writeln!(f, "Initial state: {}", self.initial_state)?;
        writeln!(f, "Final states: {:?}", self.final_states)?;

        for transition in &self.transitions {
            writeln!(f, "{} --[{}]-> {}", transition.from, transition.symbol, transition.to)?;
        }

        Ok(())
    }
}
