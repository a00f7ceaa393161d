// SQL module - statement trees produced by an external parser

pub mod statement;

pub use statement::*;
