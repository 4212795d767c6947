use log::debug;
use rustc_hash::FxHashMap;

use crate::is_epsilon;
use crate::Automaton;
use crate::StateIndex;
use crate::SymbolIndex;
use crate::ValidationError;

/// An adjacency view of an automaton, built once per conversion: for every
/// pair of (state, input symbol) the set of direct successor states, with the
/// epsilon successors kept separately. All successor sets are sorted by state
/// index.
///
/// Building the index checks the well-formedness of the automaton, so an
/// invalid automaton never yields an index and the algorithms on top never
/// re-check it.
pub struct TransitionIndex<'a> {
    automaton: &'a Automaton,
    input_symbols: Vec<&'a str>,

    epsilon_successors: Vec<Vec<StateIndex>>,
    successors: Vec<Vec<StateIndex>>,

    initial_state: StateIndex,
    final_states: Vec<StateIndex>,
}

impl<'a> TransitionIndex<'a> {
    /// Creates the index for the given automaton, interning state and symbol
    /// names to dense indices in declaration order.
    pub fn new(automaton: &'a Automaton) -> Result<TransitionIndex<'a>, ValidationError> {
        let mut state_indices: FxHashMap<&str, StateIndex> = FxHashMap::default();
        for (index, name) in automaton.states().iter().enumerate() {
            state_indices.insert(name, index);
        }

        // The input symbols are the alphabet without the epsilon marker.
        let mut symbol_indices: FxHashMap<&str, SymbolIndex> = FxHashMap::default();
        let mut input_symbols: Vec<&str> = Vec::new();
        for symbol in automaton.alphabet() {
            if !is_epsilon(symbol) {
                symbol_indices.insert(symbol, input_symbols.len());
                input_symbols.push(symbol);
            }
        }

        let initial_state = *state_indices
            .get(automaton.initial_state())
            .ok_or_else(|| ValidationError::UnknownInitialState(automaton.initial_state().to_string()))?;

        let mut final_states = Vec::with_capacity(automaton.final_states().len());
        for name in automaton.final_states() {
            let index = *state_indices
                .get(name.as_str())
                .ok_or_else(|| ValidationError::UnknownFinalState(name.clone()))?;
            final_states.push(index);
        }
        final_states.sort_unstable();

        let num_of_states = automaton.num_of_states();
        let mut epsilon_successors: Vec<Vec<StateIndex>> = vec![Vec::new(); num_of_states];
        let mut successors: Vec<Vec<StateIndex>> = vec![Vec::new(); num_of_states * input_symbols.len()];

        for transition in automaton.transitions() {
            let from = *state_indices
                .get(transition.from.as_str())
                .ok_or_else(|| ValidationError::DanglingTransitionEndpoint(transition.from.clone()))?;
            let to = *state_indices
                .get(transition.to.as_str())
                .ok_or_else(|| ValidationError::DanglingTransitionEndpoint(transition.to.clone()))?;

            if transition.is_epsilon() {
                epsilon_successors[from].push(to);
            } else {
                let symbol = *symbol_indices
                    .get(transition.symbol.as_str())
                    .ok_or_else(|| ValidationError::UndeclaredSymbol(transition.symbol.clone()))?;
                successors[from * input_symbols.len() + symbol].push(to);
            }
        }

        for list in epsilon_successors.iter_mut().chain(successors.iter_mut()) {
            list.sort_unstable();
        }

        debug!(
            "indexed {} states, {} input symbols and {} transitions ({} epsilon)",
            num_of_states,
            input_symbols.len(),
            automaton.num_of_transitions(),
            automaton.num_of_epsilon_transitions()
        );

        Ok(TransitionIndex {
            automaton,
            input_symbols,
            epsilon_successors,
            successors,
            initial_state,
            final_states,
        })
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.automaton.num_of_states()
    }

    /// Returns the number of input symbols, never counting the epsilon marker.
    pub fn num_of_input_symbols(&self) -> usize {
        self.input_symbols.len()
    }

    /// Iterate over all state indices in declaration order.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> {
        0..self.num_of_states()
    }

    /// Returns the name of the given state.
    pub fn state_name(&self, state: StateIndex) -> &str {
        &self.automaton.states()[state]
    }

    /// Returns the name of the given input symbol.
    pub fn input_symbol(&self, symbol: SymbolIndex) -> &str {
        self.input_symbols[symbol]
    }

    /// Returns the states reachable from the given state with one epsilon
    /// transition, sorted by state index.
    pub fn epsilon_successors(&self, state: StateIndex) -> &[StateIndex] {
        &self.epsilon_successors[state]
    }

    /// Returns the states reachable from the given state with one transition
    /// labelled with the given input symbol, sorted by state index.
    pub fn successors(&self, state: StateIndex, symbol: SymbolIndex) -> &[StateIndex] {
        &self.successors[state * self.input_symbols.len() + symbol]
    }

    /// Returns the index of the initial state.
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns true iff the given state is a final state of the automaton.
    pub fn is_final(&self, state: StateIndex) -> bool {
        self.final_states.binary_search(&state).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::Transition;
    use crate::EPSILON;

    use super::*;

    fn automaton(transitions: Vec<Transition>, initial_state: &str, final_states: Vec<String>) -> Automaton {
        Automaton::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec!["a".into(), "b".into()],
            transitions,
            initial_state.into(),
            final_states,
        )
    }

    #[test]
    fn test_transition_index() {
        let automaton = automaton(
            vec![
                Transition::new("A", "a", "C"),
                Transition::new("A", "a", "B"),
                Transition::new("A", EPSILON, "C"),
                Transition::new("B", "b", "B"),
            ],
            "A",
            vec!["C".into()],
        );
        let index = TransitionIndex::new(&automaton).unwrap();

        assert_eq!(index.num_of_states(), 3);
        assert_eq!(index.num_of_input_symbols(), 2);
        assert_eq!(index.initial_state_index(), 0);

        // Successor sets are sorted by state index.
        assert_eq!(index.successors(0, 0), [1, 2]);
        assert_eq!(index.successors(0, 1), []);
        assert_eq!(index.epsilon_successors(0), [2]);
        assert_eq!(index.successors(1, 1), [1]);

        assert!(index.is_final(2));
        assert!(!index.is_final(0));
    }

    #[test]
    fn test_unknown_initial_state() {
        let automaton = automaton(vec![], "missing", vec![]);

        assert!(matches!(
            TransitionIndex::new(&automaton),
            Err(ValidationError::UnknownInitialState(_))
        ));
    }

    #[test]
    fn test_unknown_final_state() {
        let automaton = automaton(vec![], "A", vec!["missing".into()]);

        assert!(matches!(
            TransitionIndex::new(&automaton),
            Err(ValidationError::UnknownFinalState(_))
        ));
    }

    #[test]
    fn test_dangling_transition_endpoint() {
        let automaton = automaton(vec![Transition::new("A", "a", "missing")], "A", vec![]);

        assert!(matches!(
            TransitionIndex::new(&automaton),
            Err(ValidationError::DanglingTransitionEndpoint(state)) if state == "missing"
        ));
    }

    #[test]
    fn test_undeclared_symbol() {
        let automaton = automaton(vec![Transition::new("A", "c", "B")], "A", vec![]);

        assert!(matches!(
            TransitionIndex::new(&automaton),
            Err(ValidationError::UndeclaredSymbol(symbol)) if symbol == "c"
        ));
    }

    #[test]
    fn test_epsilon_is_implicit() {
        // Epsilon transitions are allowed even when the alphabet does not
        // list the epsilon marker.
        let automaton = automaton(vec![Transition::new("A", EPSILON, "B")], "A", vec![]);

        let index = TransitionIndex::new(&automaton).unwrap();
        assert_eq!(index.epsilon_successors(0), [1]);
        assert_eq!(index.num_of_input_symbols(), 2);
    }
}
