//! Library side of the `bf` command line tool
//!
//! The binary only wires these pieces together: it parses [`cli::Cli`],
//! loads credentials, builds a client and hands off to
//! [`commands::execute`].

pub mod cli;
pub mod commands;
pub mod logging;
