//! Structs to help parse operators.

pub mod op;
