//! A context-bearing machine counting items in and out.

use machina::{create_machine, Definition, Goto, MachineConfig};
use serde_json::{json, Map, Value};

fn count(context: &Map<String, Value>) -> i64 {
    context.get("count").and_then(Value::as_i64).unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let context = match json!({ "count": 0 }) {
        Value::Object(fields) => fields,
        _ => unreachable!(),
    };

    let definition = Definition::with_context("empty", context)
        .state("empty", |s| {
            s.on_context("inc", |ctx| {
                let next = count(ctx.get()) + 1;
                ctx.set_field("count", next);
                "not_empty"
            })
        })
        .state("not_empty", |s| {
            s.on_context("inc", |ctx| {
                let next = count(ctx.get()) + 1;
                ctx.set_field("count", next);
                Goto::new("not_empty")
            })
            .on_context("dec", |ctx| {
                let next = count(ctx.get()) - 1;
                ctx.set_field("count", next);
                if next == 0 {
                    Goto::new("empty")
                } else {
                    Goto::new("not_empty")
                }
            })
        })
        .build()?;

    let config: MachineConfig = serde_json::from_str(r#"{ "strictness": "strict" }"#)?;
    let mut counter = machina::create_machine_with(definition, config);

    for event in ["inc", "inc", "dec", "dec", "dec"] {
        counter.send(event)?;
        println!(
            "{event}: state={} count={}",
            counter.current_state(),
            count(counter.context())
        );
    }

    let fresh = create_machine(counter.definition().clone());
    println!("fresh machine: state={} count={}", fresh.current_state(), count(fresh.context()));

    Ok(())
}
