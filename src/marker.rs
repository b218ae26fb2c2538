//! Transaction Marker
//!
//! A pass-through call that APM agents hook to name the surrounding
//! transaction. The agent matches the call site by its path and reads the
//! first argument as the transaction name.
//!
//! Shape: `run(name, computation) -> result`, name first, computation second.

/// Fully qualified path of [`run`]; every monomorphized symbol starts with it.
pub const MARKER_PATH: &str = "transaction_marker::marker::run";

/// Invoke `computation` once and return its result unchanged.
///
/// `name` is never read. It stays alive until `computation` has returned so
/// an agent hooking the call can read it for the whole transaction.
///
/// `Err` values come back as-is and panics unwind through untouched.
///
/// ```
/// let total = transaction_marker::run("checkout", || 40 + 2);
/// assert_eq!(total, 42);
/// ```
#[inline(never)]
pub fn run<N, T, F>(name: N, computation: F) -> T
where
    F: FnOnce() -> T,
{
    let _name = name;
    computation()
}
