use anyhow::Context;
use stack::Stack;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid element count {arg:?}"))?,
        None => 8,
    };

    let mut stack = Stack::new();
    for n in 1..=count {
        stack.push(n);
    }
    tracing::info!(len = stack.len(), capacity = stack.capacity(), "{stack}");

    let snapshot = stack.clone();
    stack.reverse();
    tracing::info!(reversed = %stack, original = %snapshot);

    match stack.peek() {
        Ok(top) => tracing::info!(top, "peek"),
        Err(error) => tracing::warn!(%error, "peek"),
    }

    while let Ok(value) = stack.pop() {
        tracing::debug!(value, remaining = stack.len(), "pop");
    }
    if let Err(error) = stack.pop() {
        tracing::info!(%error, capacity = stack.capacity(), "drained");
    }

    stack.clear();
    tracing::info!(capacity = stack.capacity(), "cleared");
    Ok(())
}
