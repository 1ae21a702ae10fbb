//! Logging facilities for Horizon Probe.
//!
//! Horizon Probe uses the `tracing` crate for instrumentation. Every miss in
//! the interaction simulator (element not found, disabled target, stale cell)
//! degrades to a silent no-op by design; the trace stream is where those
//! no-ops become visible while debugging a test.
//!
//! To see logs, install a tracing subscriber in the test binary:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_probe=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=horizon_probe::locator=trace`.
pub mod targets {
    /// Object identity and tree assembly.
    pub const OBJECT: &str = "horizon_probe_core::object";
    /// Signal emission and connection management.
    pub const SIGNAL: &str = "horizon_probe_core::signal";
    /// Tree traversal and element lookup.
    pub const LOCATOR: &str = "horizon_probe::locator";
    /// Callback dispatch for simulated interactions.
    pub const DISPATCH: &str = "horizon_probe::dispatch";
    /// List/grid cell selection.
    pub const SELECTION: &str = "horizon_probe::selection";
}
