use rand::Rng;

use crate::Automaton;
use crate::Transition;
use crate::EPSILON;

/// Generates a random automaton with the desired number of states and input
/// symbols. Every state receives at most `outdegree` labelled transitions and
/// at most `epsilon_outdegree` epsilon transitions, both drawn uniformly.
///
/// The first state is initial and a single random state is final.
pub fn random_automaton(
    num_of_states: usize,
    num_of_symbols: u32,
    outdegree: usize,
    epsilon_outdegree: usize,
) -> Automaton {
    debug_assert!(num_of_states > 0, "A random automaton has at least one state");

    let states: Vec<String> = (0..num_of_states).map(|index| format!("s{index}")).collect();

    // Introduce lower case letters for the input symbols.
    let mut alphabet: Vec<String> = Vec::new();
    for i in 0..num_of_symbols {
        alphabet.push(char::from_digit(i + 10, 36).unwrap().to_string());
    }

    let mut rng = rand::rng();
    let mut transitions: Vec<Transition> = Vec::new();

    for from in &states {
        // Introduce outgoing transitions for this state based on the desired
        // out degrees. Duplicate draws collapse in the constructor.
        if num_of_symbols > 0 {
            for _ in 0..rng.random_range(0..=outdegree) {
                let symbol = rng.random_range(0..alphabet.len());
                let to = rng.random_range(0..num_of_states);

                transitions.push(Transition::new(from, &alphabet[symbol], &states[to]));
            }
        }

        for _ in 0..rng.random_range(0..=epsilon_outdegree) {
            let to = rng.random_range(0..num_of_states);

            transitions.push(Transition::new(from, EPSILON, &states[to]));
        }
    }

    let final_state = rng.random_range(0..num_of_states);
    let initial_state = states[0].clone();
    let final_states = vec![states[final_state].clone()];

    Automaton::new(states, alphabet, transitions, initial_state, final_states)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::eliminate_epsilon;

    use super::*;

    #[test]
    fn test_random_automaton() {
        let automaton = random_automaton(10, 3, 3, 2);
        let conversion = eliminate_epsilon(&automaton).unwrap();

        assert_eq!(conversion.nfa.num_of_epsilon_transitions(), 0);
        assert_eq!(conversion.nfa.num_of_states(), 10);
    }
}
