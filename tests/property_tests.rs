//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences and tables.

use proptest::prelude::*;
use reflex::builder::StateMachineBuilder;
use reflex::core::{Action, StateId};
use reflex::engine::StateMachine;
use reflex::{command_enum, event_enum};
use std::sync::Arc;

event_enum! {
    enum TestEvent {
        A,
        B,
        C,
        D,
    }
}

command_enum! {
    enum TestCommand {
        X,
        Y,
    }
}

const EVENTS: [TestEvent; 4] = [TestEvent::A, TestEvent::B, TestEvent::C, TestEvent::D];

prop_compose! {
    fn arbitrary_event()(variant in 0..4usize) -> TestEvent {
        EVENTS[variant]
    }
}

/// (state, event, successor, command) rows; `None` command = silent.
type Table = Vec<(usize, usize, usize, Option<bool>)>;

prop_compose! {
    fn arbitrary_table(states: usize)(
        rows in prop::collection::vec(
            (0..states, 0..4usize, 0..states, prop::option::of(any::<bool>())),
            0..16,
        )
    ) -> Table {
        rows
    }
}

fn build(states: usize, table: &Table) -> StateMachine<TestEvent, TestCommand> {
    let mut builder = StateMachineBuilder::new();
    let ids: Vec<StateId> = (0..states).map(|i| builder.state(format!("S{i}"))).collect();
    let x = Action::shared(TestCommand::X);
    let y = Action::shared(TestCommand::Y);

    for &(from, event, to, command) in table {
        let wiring = builder.on(ids[from]);
        match command {
            Some(true) => wiring.transition(EVENTS[event], ids[to], &x),
            Some(false) => wiring.transition(EVENTS[event], ids[to], &y),
            None => wiring.transition_silent(EVENTS[event], ids[to]),
        };
    }

    builder.initial(ids[0]).build().unwrap()
}

fn trace(
    machine: &mut StateMachine<TestEvent, TestCommand>,
    events: &[TestEvent],
) -> Vec<(String, Option<TestCommand>)> {
    events
        .iter()
        .map(|event| {
            let command = machine.process(event).map(|a| *a.command());
            (machine.current_state().name().to_string(), command)
        })
        .collect()
}

proptest! {
    #[test]
    fn machine_is_deterministic(
        table in arbitrary_table(4),
        events in prop::collection::vec(arbitrary_event(), 0..32),
    ) {
        let first = trace(&mut build(4, &table), &events);
        let second = trace(&mut build(4, &table), &events);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unhandled_event_is_a_no_op(
        table in arbitrary_table(3),
        prefix in prop::collection::vec(arbitrary_event(), 0..8),
        event in arbitrary_event(),
    ) {
        let mut machine = build(3, &table);
        trace(&mut machine, &prefix);

        if !machine.current_state().handles(&event) {
            let before = machine.current_id();
            prop_assert!(machine.process(&event).is_none());
            prop_assert_eq!(machine.current_id(), before);
        }
    }

    #[test]
    fn last_registration_wins(table in arbitrary_table(3)) {
        let machine = build(3, &table);

        for (from, event, _, _) in &table {
            let last = table
                .iter()
                .rev()
                .find(|(f, e, _, _)| f == from && e == event)
                .map(|(_, _, t, _)| *t);
            let resolved = machine.states()[*from]
                .lookup(&EVENTS[*event])
                .map(|t| t.successor().index());
            prop_assert_eq!(resolved, last);
        }
    }

    #[test]
    fn history_has_one_step_per_event(
        table in arbitrary_table(3),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let mut machine = build(3, &table);
        let trace = trace(&mut machine, &events);

        prop_assert_eq!(machine.history().len(), events.len());
        let path = machine.history().path();
        if !events.is_empty() {
            prop_assert_eq!(path.len(), events.len() + 1);
            for (i, (state, _)) in trace.iter().enumerate() {
                prop_assert_eq!(path[i + 1], state.as_str());
            }
        }
    }

    #[test]
    fn shared_actions_stay_identical(
        table in arbitrary_table(3),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let mut machine = build(3, &table);
        let fired: Vec<Arc<Action<TestCommand>>> =
            events.iter().filter_map(|e| machine.process(e)).collect();

        for action in &fired {
            let twin = fired.iter().find(|other| other.command() == action.command());
            prop_assert!(Arc::ptr_eq(action, twin.unwrap()));
        }
    }
}
