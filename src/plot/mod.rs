// ABOUTME: Plot module - histogram rendering for numeric columns.
// ABOUTME: Produces PNG files named after the plotted column.

mod histogram;

pub use histogram::*;
