//! IDL inspector and PDA calculator for Anchor programs.
//!
//! Provides:
//! - Seed classification and PDA derivation from the command line
//! - A file-backed address book
//! - IDL inspection and PDA resolution from IDL seed layouts
//!
//! Use this as a library to embed the commands elsewhere, or use the
//! `anchor-inspector` binary.

pub mod hex;
pub mod parse;
pub mod pda;
pub mod inspect;
pub mod storage;
pub mod cli;
pub mod commands;
