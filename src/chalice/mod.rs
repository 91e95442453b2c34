//! # Chalice Module
//!
//! Path helper for Chalice view functions.
//!
//! A Chalice view may be bound to several methods. [`ChalicePlugin`] collects
//! the paths the view serves for the methods its docstring documents (every
//! method when it documents none) and requires them to agree on a single path.

mod app;
mod plugin;


pub use app::{Chalice, RouteEntry};
pub use plugin::ChalicePlugin;
