//! Utility functions shared by collectors and renderers

pub mod command;
pub mod file;
pub mod parsing;
pub mod terminal;
