//! Two independent machines driven as one.
//!
//! Run with `RUST_LOG=machina=debug cargo run --example toggle_and_loader`
//! to see ignored events and transitions logged.

use machina::{combine, create_machine, Definition, Goto};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let toggle = create_machine(
        Definition::builder("OFF")
            .state("ON", |s| s.goto("toggle", "OFF"))
            .state("OFF", |s| s.goto("toggle", "ON"))
            .build()?,
    );

    let load = create_machine(
        Definition::builder("idle")
            .state("idle", |s| s.on("load", || Goto::new("loading")))
            .state("loading", |s| s.on("loaded", || Goto::new("idle")))
            .build()?,
    );

    let event = create_machine(
        Definition::builder("open")
            .state("open", |s| s.goto("close", "closed").goto("suspend", "suspended"))
            .terminal("closed")
            .terminal("suspended")
            .build()?,
    );

    let betslip = combine! { load: load, toggle: toggle }?;
    let mut page = combine! { betslip: betslip, event: event }?;

    println!("start:   {}", serde_json::to_string(&page.state())?);

    for name in ["toggle", "load", "close", "loaded"] {
        page.send(name)?;
        println!("{name:>7}: {}", serde_json::to_string(&page.state())?);
    }

    Ok(())
}
