//! Campus paths CLI library.
//!
//! Command handlers and output formatting for the `campuspaths-cli` binary.
//! Handlers write to any `io::Write` so they can be exercised without a
//! terminal.

pub mod commands;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
