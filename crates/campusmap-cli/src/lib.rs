//! Campus map CLI library.
//!
//! Output formatting shared by the `campusmap` subcommands.

pub mod output;
