//! Direction providers that implement agent behaviours.

pub mod ai;
