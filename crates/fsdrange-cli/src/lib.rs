//! fsdrange CLI library.
//!
//! Terminal styling and output formatting for the `fsdrange` binary.

pub mod output;
pub mod terminal;
