use std::fmt;

use itertools::Itertools;
use log::debug;
use log::trace;

use crate::StateIndex;
use crate::TransitionIndex;

/// Computes the epsilon closure of the given state: every state reachable
/// through zero or more epsilon transitions, sorted by state index.
///
/// Every state enters the stack at most once, so the walk terminates even
/// when the epsilon transitions form cycles.
pub fn epsilon_closure(index: &TransitionIndex, state: StateIndex) -> Vec<StateIndex> {
    let mut closure = vec![state];

    // The stack for the depth first search over epsilon transitions.
    let mut stack = vec![state];

    // Keep track of already visited states.
    let mut visited = vec![false; index.num_of_states()];
    visited[state] = true;

    while let Some(inner_state_index) = stack.pop() {
        for &to_index in index.epsilon_successors(inner_state_index) {
            if !visited[to_index] {
                visited[to_index] = true;
                closure.push(to_index);
                stack.push(to_index);
            }
        }
    }

    closure.sort_unstable();

    trace!("epsilon closure of {state} is {closure:?}");
    closure
}

/// The epsilon closure of every state of an automaton, with entries in state
/// declaration order.
#[derive(PartialEq, Eq)]
pub struct ClosureMap {
    state_names: Vec<String>,
    closures: Vec<Vec<StateIndex>>,
}

impl ClosureMap {
    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.closures.len()
    }

    /// Returns the name of the given state.
    pub fn state_name(&self, state: StateIndex) -> &str {
        &self.state_names[state]
    }

    /// Returns the closure of the given state, sorted by state index.
    pub fn closure(&self, state: StateIndex) -> &[StateIndex] {
        &self.closures[state]
    }

    /// Returns the closure of the given state as lexicographically sorted
    /// state names, the canonical order for output and comparison.
    pub fn closure_names(&self, state: StateIndex) -> Vec<&str> {
        self.closures[state]
            .iter()
            .map(|&member| self.state_names[member].as_str())
            .sorted()
            .collect()
    }
}

impl fmt::Debug for ClosureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, name) in self.state_names.iter().enumerate() {
            writeln!(f, "{name}: {{{}}}", self.closure_names(state).iter().format(", "))?;
        }

        Ok(())
    }
}

/// Computes the epsilon closure of every state of the indexed automaton.
///
/// The map is total: a state without epsilon transitions has the singleton of
/// itself as its closure. The per-state walks are independent of each other.
pub fn epsilon_closure_map(index: &TransitionIndex) -> ClosureMap {
    let closures: Vec<Vec<StateIndex>> = index
        .iter_states()
        .map(|state| epsilon_closure(index, state))
        .collect();

    debug!("computed epsilon closures for {} states", closures.len());

    ClosureMap {
        state_names: index.iter_states().map(|state| index.state_name(state).to_string()).collect(),
        closures,
    }
}

/// Returns true iff some state can reach itself through a nonempty chain of
/// epsilon transitions. Such cycles are a normal input for the conversion,
/// this is a diagnostic only.
pub fn has_epsilon_cycle(index: &TransitionIndex) -> bool {
    for state_index in index.iter_states() {
        for &to_index in index.epsilon_successors(state_index) {
            // A cycle exists iff an epsilon successor reaches the state back.
            if epsilon_closure(index, to_index).binary_search(&state_index).is_ok() {
                trace!("epsilon cycle through {state_index} and {to_index}");
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::random_automaton;
    use crate::Automaton;
    use crate::Transition;
    use crate::EPSILON;

    use super::*;

    fn epsilon_chain(transitions: Vec<Transition>) -> Automaton {
        Automaton::new(
            vec!["X".into(), "Y".into(), "Z".into()],
            vec![],
            transitions,
            "X".into(),
            vec![],
        )
    }

    #[test]
    fn test_closure_on_epsilon_cycle() {
        // X and Y form an epsilon cycle, so their closures are equal.
        let automaton = epsilon_chain(vec![
            Transition::new("X", EPSILON, "Y"),
            Transition::new("Y", EPSILON, "X"),
            Transition::new("Y", EPSILON, "Z"),
        ]);
        let index = TransitionIndex::new(&automaton).unwrap();

        assert_eq!(epsilon_closure(&index, 0), [0, 1, 2]);
        assert_eq!(epsilon_closure(&index, 1), [0, 1, 2]);
        assert_eq!(epsilon_closure(&index, 2), [2]);
        assert!(has_epsilon_cycle(&index));
    }

    #[test]
    fn test_no_cycle_in_diamond() {
        // A diamond of epsilon transitions is acyclic even though Y is
        // reachable twice.
        let automaton = epsilon_chain(vec![
            Transition::new("X", EPSILON, "Y"),
            Transition::new("X", EPSILON, "Z"),
            Transition::new("Z", EPSILON, "Y"),
        ]);
        let index = TransitionIndex::new(&automaton).unwrap();

        assert!(!has_epsilon_cycle(&index));
        assert_eq!(epsilon_closure(&index, 0), [0, 1, 2]);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let automaton = epsilon_chain(vec![Transition::new("X", EPSILON, "X")]);
        let index = TransitionIndex::new(&automaton).unwrap();

        assert!(has_epsilon_cycle(&index));
    }

    #[test]
    fn test_closure_map_properties() {
        let automaton = random_automaton(32, 3, 3, 2);
        let index = TransitionIndex::new(&automaton).unwrap();
        let closures = epsilon_closure_map(&index);

        assert_eq!(closures.num_of_states(), automaton.num_of_states());

        for state in index.iter_states() {
            let closure = closures.closure(state);

            // Reflexive: every state is in its own closure.
            assert!(closure.binary_search(&state).is_ok());

            // Closed under epsilon reachability.
            for &member in closure {
                for &to_index in index.epsilon_successors(member) {
                    assert!(closure.binary_search(&to_index).is_ok());
                }
            }
        }
    }

    #[test]
    fn test_epsilon_free_automaton() {
        let automaton = random_automaton(16, 3, 3, 0);
        let index = TransitionIndex::new(&automaton).unwrap();
        let closures = epsilon_closure_map(&index);

        assert!(!has_epsilon_cycle(&index));

        // Without epsilon transitions every closure is a singleton.
        for state in index.iter_states() {
            assert_eq!(closures.closure(state), [state]);
        }
    }
}
