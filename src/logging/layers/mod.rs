//! Sinks for the `wl` subscriber. Only the console sink exists; transcripts
//! from the transport are already redacted before they reach it.

use tracing::Subscriber;
use tracing_subscriber::layer::Layer;

pub mod console;

/// Layer erased to a trait object so every console variant has one type.
pub type BoxLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Stand-in used when console output is `none`.
pub struct Silent;

impl<S: Subscriber> Layer<S> for Silent {}

pub fn noop_layer<S>() -> BoxLayer<S>
where
    S: Subscriber + 'static,
{
    Box::new(Silent)
}
