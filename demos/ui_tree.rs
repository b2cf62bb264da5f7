//! # Example: ui_tree
//!
//! Builds a small UI event tree and fires events by path and by cascade.
//!
//! Demonstrates how to:
//! - Nest groups under the registry root and attach channels to them.
//! - Attach closure listeners and the built-in `LogWriter`.
//! - Activate one channel by path, a typed channel with a payload, and a whole subtree.
//!
//! ## Flow
//! ```text
//! Root
//!  └─ UI
//!      ├─ Buttons: Click, Hover
//!      └─ Audio:   Volume(u8)
//!
//! activate("UI/Buttons:Click")     → Click listeners
//! activate_with("UI/Audio:Volume") → Volume listeners with 7
//! group("UI").activate()           → every channel below UI
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example ui_tree --features logging
//! ```

use std::sync::Arc;

use eventree::{Channel, Event, EventGroup, LogWriter, Registry, TypedEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Channels with listeners
    let click = Event::arc("Click");
    click.subscribe(|| println!("[ui] button clicked"));
    click.attach(Arc::new(LogWriter::new()));

    let hover = Event::arc("Hover");
    hover.attach(Arc::new(LogWriter::new()));

    let volume = TypedEvent::<u8>::arc("Volume");
    volume.subscribe(|v: &u8| println!("[ui] volume set to {v}"));
    volume.attach(Arc::new(LogWriter::new()));

    // 2) Tree
    let mut registry = Registry::new();
    let ui = registry.root_mut().add_group(EventGroup::new("UI"))?;
    let buttons = ui.add_group(EventGroup::new("Buttons"))?;
    buttons.add_event(click)?;
    buttons.add_event(hover.clone())?;
    ui.add_group(EventGroup::new("Audio"))?.add_event(volume)?;

    // 3) Path-addressed activation
    registry.activate("UI/Buttons:Click")?;
    registry.activate_with("UI/Audio:Volume", &7u8)?;

    // 4) Cascade with a gated channel
    hover.disable();
    println!("-- cascade from UI (Hover disabled) --");
    registry.group("UI")?.activate();

    // 5) Misses are errors, not silence
    if let Err(e) = registry.activate("UI/Buttons:Missing") {
        println!("[ui] {} ({})", e, e.as_label());
    }
    Ok(())
}
