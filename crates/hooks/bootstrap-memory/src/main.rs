//! agent:bootstrap hook binary.
//!
//! Reads one event from stdin and prints the context keys it set.
//! Always exits 0: memory loading must never block session bootstrap.

use anyhow::Result;
use bootstrap_memory::{HookOutcome, handle};
use hook_common::prelude::{Environment, HookEvent, HookOutput};
use hook_common::init_tracing;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");

    let mut event = match HookEvent::from_stdin() {
        Ok(event) => event,
        Err(e) => {
            debug!("Ignoring unreadable hook input: {}", e);
            return Ok(());
        }
    };

    let env = Environment::from_process();
    let output = match handle(&mut event, &env).await {
        HookOutcome::Skipped => return Ok(()),
        HookOutcome::Published(patch) => {
            HookOutput::for_event(event.event_name()).with_context(patch.to_map())
        }
        // Already logged; publish nothing
        HookOutcome::Failed(_) => HookOutput::for_event(event.event_name()),
    };

    output.write_stdout()?;
    Ok(())
}
