use std::io::Read;
use std::io::Write;

use log::trace;
use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

use enfarust_automata::Automaton;
use enfarust_automata::ClosureMap;
use enfarust_automata::Conversion;
use enfarust_automata::Transition;

#[derive(Error, Debug)]
pub enum IOError {
    #[error("Invalid automaton record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The JSON record of an automaton:
///     `{ "states": [...], "alphabet": [...], "transitions": [...],
///        "initialState": "...", "finalStates": [...] }`
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AutomatonRecord {
    states: Vec<String>,
    alphabet: Vec<String>,
    transitions: Vec<TransitionRecord>,
    initial_state: String,
    final_states: Vec<String>,
}

/// A single transition `{ "from": "...", "symbol": "...", "to": "..." }`.
#[derive(Debug, Deserialize, Serialize)]
struct TransitionRecord {
    from: String,
    symbol: String,
    to: String,
}

impl From<&Automaton> for AutomatonRecord {
    fn from(automaton: &Automaton) -> AutomatonRecord {
        AutomatonRecord {
            states: automaton.states().to_vec(),
            alphabet: automaton.alphabet().to_vec(),
            transitions: automaton
                .transitions()
                .iter()
                .map(|transition| TransitionRecord {
                    from: transition.from.clone(),
                    symbol: transition.symbol.clone(),
                    to: transition.to.clone(),
                })
                .collect(),
            initial_state: automaton.initial_state().to_string(),
            final_states: automaton.final_states().to_vec(),
        }
    }
}

/// Loads an automaton in the JSON format from the given reader.
///
/// Both the empty string and "ε" denote epsilon in the input, the returned
/// automaton uses the canonical spelling. Well-formedness is not checked
/// here, it is checked when the transition index is built.
pub fn read_automaton(reader: impl Read) -> Result<Automaton, IOError> {
    let record: AutomatonRecord = serde_json::from_reader(reader)?;

    trace!(
        "read {} states, {} symbols and {} transitions",
        record.states.len(),
        record.alphabet.len(),
        record.transitions.len()
    );

    let transitions: Vec<Transition> = record
        .transitions
        .into_iter()
        .map(|transition| Transition::new(transition.from, transition.symbol, transition.to))
        .collect();

    Ok(Automaton::new(
        record.states,
        record.alphabet,
        transitions,
        record.initial_state,
        record.final_states,
    ))
}

/// Writes the automaton in the JSON format to the given writer.
pub fn write_automaton(mut writer: impl Write, automaton: &Automaton) -> Result<(), IOError> {
    serde_json::to_writer_pretty(&mut writer, &AutomatonRecord::from(automaton))?;
    writeln!(writer)?;

    Ok(())
}

/// The closures as a JSON object with one entry per state in declaration
/// order, each entry a lexicographically sorted list of state names.
struct ClosuresRecord<'a>(&'a ClosureMap);

impl Serialize for ClosuresRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.num_of_states()))?;
        for state in 0..self.0.num_of_states() {
            map.serialize_entry(self.0.state_name(state), &self.0.closure_names(state))?;
        }

        map.end()
    }
}

#[derive(Serialize)]
struct ConversionRecord<'a> {
    nfa: AutomatonRecord,
    closures: ClosuresRecord<'a>,
}

/// Writes the conversion result in the JSON format to the given writer: the
/// converted automaton under "nfa" and the epsilon closures under "closures".
pub fn write_conversion(mut writer: impl Write, conversion: &Conversion) -> Result<(), IOError> {
    let record = ConversionRecord {
        nfa: AutomatonRecord::from(&conversion.nfa),
        closures: ClosuresRecord(&conversion.closures),
    };

    serde_json::to_writer_pretty(&mut writer, &record)?;
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use enfarust_automata::EPSILON;

    use super::*;

    #[test]
    fn test_read_automaton() {
        let text = r#"{
            "states": ["A", "B"],
            "alphabet": ["a", ""],
            "transitions": [
                { "from": "A", "symbol": "a", "to": "B" },
                { "from": "A", "symbol": "", "to": "B" }
            ],
            "initialState": "A",
            "finalStates": ["B"]
        }"#;

        let automaton = read_automaton(text.as_bytes()).unwrap();

        assert_eq!(automaton.num_of_states(), 2);
        assert_eq!(automaton.num_of_epsilon_transitions(), 1);
        assert_eq!(automaton.initial_state(), "A");
        assert_eq!(automaton.alphabet(), vec!["a", EPSILON]);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let result = read_automaton(r#"{ "states": ["#.as_bytes());

        assert!(matches!(result, Err(IOError::InvalidRecord(_))));
    }

    #[test]
    fn test_write_automaton() {
        let automaton = Automaton::new(
            vec!["A".into(), "B".into()],
            vec!["a".into()],
            vec![Transition::new("A", "a", "B")],
            "A".into(),
            vec!["B".into()],
        );

        let mut buffer = Vec::new();
        write_automaton(&mut buffer, &automaton).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["initialState"], "A");
        assert_eq!(value["finalStates"], serde_json::json!(["B"]));
        assert_eq!(value["transitions"][0]["symbol"], "a");

        let reread = read_automaton(buffer.as_slice()).unwrap();
        assert_eq!(reread, automaton);
    }
}
