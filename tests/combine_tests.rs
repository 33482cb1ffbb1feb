//! Composite machines built with `combine`.

use machina::{combine, create_machine, Definition, Goto, Machine, MachineError, StateMachine};
use serde_json::json;

fn toggle_machine() -> Machine {
    create_machine(
        Definition::builder("OFF")
            .state("ON", |s| s.on("toggle", || Goto::new("OFF")))
            .state("OFF", |s| s.on("toggle", || Goto::new("ON")))
            .build()
            .unwrap(),
    )
}

fn loading_machine() -> Machine {
    create_machine(
        Definition::builder("idle")
            .state("idle", |s| s.on("load", || Goto::new("loading")))
            .state("loading", |s| s.on("loaded", || Goto::new("idle")))
            .build()
            .unwrap(),
    )
}

fn event_machine() -> Machine {
    create_machine(
        Definition::builder("open")
            .state("open", |s| {
                s.on("close", || Goto::new("closed"))
                    .on("suspend", || Goto::new("suspended"))
            })
            .terminal("closed")
            .terminal("suspended")
            .build()
            .unwrap(),
    )
}

#[test]
fn combines_several_machines_into_one() {
    let machine = machina::combine! {
        load: loading_machine(),
        toggle: toggle_machine(),
    }
    .unwrap();

    assert_eq!(
        serde_json::to_value(machine.state()).unwrap(),
        json!({ "toggle": "OFF", "load": "idle" })
    );
}

#[test]
fn accepts_any_event_supported_by_at_least_one_machine() {
    let mut machine = machina::combine! {
        load: loading_machine(),
        toggle: toggle_machine(),
    }
    .unwrap();

    machine.send("toggle").unwrap();
    assert_eq!(machine.state()["toggle"], "ON");
    assert_eq!(machine.state()["load"], "idle");

    machine.send("load").unwrap();
    assert_eq!(machine.state()["load"], "loading");
    assert_eq!(machine.state()["toggle"], "ON");
}

#[test]
fn combination_result_can_be_combined_again() {
    let betslip = machina::combine! {
        load: loading_machine(),
        toggle: toggle_machine(),
    }
    .unwrap();

    let mut machine = machina::combine! {
        betslip: betslip,
        event: event_machine(),
    }
    .unwrap();

    machine.send("toggle").unwrap();
    assert_eq!(machine.state()["betslip"]["toggle"], "ON");

    machine.send("load").unwrap();
    assert_eq!(machine.state()["betslip"]["load"], "loading");

    machine.send("close").unwrap();
    assert_eq!(machine.state()["event"], "closed");

    assert_eq!(
        serde_json::to_value(machine.state()).unwrap(),
        json!({
            "betslip": { "toggle": "ON", "load": "loading" },
            "event": "closed",
        })
    );
}

#[test]
fn combine_function_takes_boxed_children() {
    let mut machine = combine(vec![
        ("toggle", Box::new(toggle_machine()) as Box<dyn StateMachine>),
        ("event", Box::new(event_machine())),
    ])
    .unwrap();

    machine.send("suspend").unwrap();

    assert_eq!(machine.state()["event"], "suspended");
    assert_eq!(machine.state()["toggle"], "OFF");
}

#[test]
fn unknown_event_leaves_every_child_unchanged() {
    let mut machine = machina::combine! {
        load: loading_machine(),
        toggle: toggle_machine(),
    }
    .unwrap();
    let before = machine.state();

    machine.send("refresh").unwrap();

    assert_eq!(machine.state(), before);
}

#[test]
fn child_failure_is_reported_with_its_name() {
    let broken = create_machine(
        Definition::builder("idle")
            .state("idle", |s| s.goto("load", "nowhere"))
            .build()
            .unwrap(),
    );

    let mut machine = machina::combine! {
        broken: broken,
        loader: loading_machine(),
    }
    .unwrap();

    let err = machine.send("load").unwrap_err();

    match &err {
        MachineError::Broadcast { failures, .. } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].name, "broken");
            assert!(matches!(
                failures[0].error,
                MachineError::UndeclaredTarget { .. }
            ));
        }
        other => panic!("expected broadcast error, got {other:?}"),
    }

    // The healthy child still received the event.
    assert_eq!(machine.state()["loader"], "loading");
    assert_eq!(machine.state()["broken"], "idle");
}
