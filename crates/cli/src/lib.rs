//! PDMS CLI library - commands and interactive mode

pub mod commands;
pub mod interactive;
