//! Property-based tests for machines and composites.
//!
//! These tests use proptest to generate random transition tables and event
//! sequences, and check the engine against a plain lookup-table model.

use machina::{combine, create_machine, Definition, Goto, Machine, StateMachine};
use proptest::prelude::*;

const EVENTS: [&str; 4] = ["a", "b", "c", "d"];
const UNKNOWN: &str = "zz";

/// `table[state][event]` is the target state index, if the event is handled.
type Table = Vec<Vec<Option<usize>>>;

fn name(index: usize) -> String {
    format!("s{index}")
}

fn event_name(index: usize) -> &'static str {
    EVENTS.get(index).copied().unwrap_or(UNKNOWN)
}

fn definition(table: &Table, initial: usize, structured: bool) -> Definition {
    let mut builder = Definition::builder(name(initial));

    for (index, row) in table.iter().enumerate() {
        let row = row.clone();
        builder = builder.state(name(index), move |mut state| {
            for (event, target) in row.iter().enumerate() {
                if let Some(target) = target {
                    let target = name(*target);
                    state = if structured {
                        state.on(EVENTS[event], move || Goto::new(target.clone()))
                    } else {
                        state.on(EVENTS[event], move || target.clone())
                    };
                }
            }
            state
        });
    }

    builder.build().unwrap()
}

fn model_step(table: &Table, current: usize, event: usize) -> usize {
    table[current]
        .get(event)
        .copied()
        .flatten()
        .unwrap_or(current)
}

prop_compose! {
    fn arbitrary_machine()(states in 1..6usize)(
        table in prop::collection::vec(
            prop::collection::vec(prop::option::of(0..states), EVENTS.len()),
            states,
        ),
        initial in 0..states,
    ) -> (Table, usize) {
        (table, initial)
    }
}

fn arbitrary_events() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=EVENTS.len(), 0..30)
}

proptest! {
    #[test]
    fn new_machine_is_in_initial_state((table, initial) in arbitrary_machine()) {
        let machine = create_machine(definition(&table, initial, false));
        prop_assert_eq!(machine.current_state().as_str(), name(initial));
    }

    #[test]
    fn machine_follows_transition_table(
        (table, initial) in arbitrary_machine(),
        events in arbitrary_events(),
    ) {
        let mut machine = create_machine(definition(&table, initial, false));
        let mut expected = initial;

        for event in events {
            machine.send(event_name(event)).unwrap();
            expected = model_step(&table, expected, event);
            prop_assert_eq!(machine.current_state().as_str(), name(expected));
        }
    }

    #[test]
    fn state_is_always_declared(
        (table, initial) in arbitrary_machine(),
        events in arbitrary_events(),
    ) {
        let mut machine = create_machine(definition(&table, initial, true));

        for event in events {
            machine.send(event_name(event)).unwrap();
            prop_assert!(machine.definition().declares(machine.current_state().as_str()));
        }
    }

    #[test]
    fn unknown_event_is_a_no_op((table, initial) in arbitrary_machine(), prefix in arbitrary_events()) {
        let mut machine = create_machine(definition(&table, initial, false));
        for event in prefix {
            machine.send(event_name(event)).unwrap();
        }

        let before = machine.current_state().clone();
        machine.send(UNKNOWN).unwrap();
        prop_assert_eq!(machine.current_state(), &before);
    }

    #[test]
    fn bare_and_structured_results_are_equivalent(
        (table, initial) in arbitrary_machine(),
        events in arbitrary_events(),
    ) {
        let mut bare = create_machine(definition(&table, initial, false));
        let mut structured = create_machine(definition(&table, initial, true));

        for event in events {
            bare.send(event_name(event)).unwrap();
            structured.send(event_name(event)).unwrap();
            prop_assert_eq!(bare.current_state(), structured.current_state());
        }
    }

    #[test]
    fn composite_state_mirrors_children(
        (left_table, left_initial) in arbitrary_machine(),
        (right_table, right_initial) in arbitrary_machine(),
        events in arbitrary_events(),
    ) {
        let mut left: Machine = create_machine(definition(&left_table, left_initial, false));
        let mut right: Machine = create_machine(definition(&right_table, right_initial, true));

        let mut composite = combine(vec![
            ("left", Box::new(left.clone()) as Box<dyn StateMachine>),
            ("right", Box::new(right.clone())),
        ])
        .unwrap();

        for event in events {
            let event = event_name(event);
            composite.send(event).unwrap();
            left.send(event).unwrap();
            right.send(event).unwrap();

            let state = composite.state();
            prop_assert_eq!(&state["left"], &StateMachine::state(&left));
            prop_assert_eq!(&state["right"], &StateMachine::state(&right));
        }
    }
}
