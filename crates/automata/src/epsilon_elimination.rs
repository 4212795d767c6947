use log::debug;

use crate::epsilon_closure_map;
use crate::Automaton;
use crate::ClosureMap;
use crate::StateIndex;
use crate::Transition;
use crate::TransitionIndex;
use crate::ValidationError;

/// The result of eliminating the epsilon transitions of an automaton: the
/// equivalent automaton without epsilon transitions and the closure map that
/// produced it.
pub struct Conversion {
    pub nfa: Automaton,
    pub closures: ClosureMap,
}

/// Projects the transitions of the indexed automaton through the given
/// closures. For every state q and input symbol a the targets are the states
/// reachable by following epsilon transitions, then a single a transition,
/// then epsilon transitions again.
///
/// Transitions are emitted per state in declaration order, per symbol in
/// declaration order, with targets in ascending state order.
pub fn project_transitions(index: &TransitionIndex, closures: &ClosureMap) -> Vec<Transition> {
    let mut transitions = Vec::new();

    for state in index.iter_states() {
        for symbol in 0..index.num_of_input_symbols() {
            // The states reached by reading the symbol from the closure.
            let mut reached: Vec<StateIndex> = Vec::new();
            for &member in closures.closure(state) {
                reached.extend_from_slice(index.successors(member, symbol));
            }

            reached.sort_unstable();
            reached.dedup();

            // Close the reached states under epsilon transitions again.
            let mut targets: Vec<StateIndex> = Vec::new();
            for &reached_state in &reached {
                targets.extend_from_slice(closures.closure(reached_state));
            }

            targets.sort_unstable();
            targets.dedup();

            for &target in &targets {
                transitions.push(Transition::new(
                    index.state_name(state),
                    index.input_symbol(symbol),
                    index.state_name(target),
                ));
            }
        }
    }

    transitions
}

/// Selects the final states of the converted automaton: every state whose
/// closure contains a final state of the original, in declaration order.
pub fn select_final_states(index: &TransitionIndex, closures: &ClosureMap) -> Vec<String> {
    index
        .iter_states()
        .filter(|&state| closures.closure(state).iter().any(|&member| index.is_final(member)))
        .map(|state| index.state_name(state).to_string())
        .collect()
}

/// Converts the given automaton into an equivalent one without epsilon
/// transitions, accepting the same language over the same states.
///
/// Returns an error when the automaton refers to undeclared states or
/// symbols.
pub fn eliminate_epsilon(enfa: &Automaton) -> Result<Conversion, ValidationError> {
    let index = TransitionIndex::new(enfa)?;

    // The alphabet of the result contains no epsilon entry.
    let alphabet: Vec<String> = (0..index.num_of_input_symbols())
        .map(|symbol| index.input_symbol(symbol).to_string())
        .collect();

    let closures = epsilon_closure_map(&index);
    let transitions = project_transitions(&index, &closures);
    let final_states = select_final_states(&index, &closures);

    debug!(
        "eliminated {} epsilon transitions, projected {} transitions and selected {} final states",
        enfa.num_of_epsilon_transitions(),
        transitions.len(),
        final_states.len()
    );

    let nfa = Automaton::new(
        enfa.states().to_vec(),
        alphabet,
        transitions,
        enfa.initial_state().to_string(),
        final_states,
    );

    Ok(Conversion { nfa, closures })
}
