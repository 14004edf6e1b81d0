//! The syntax tree produced by the parser.
//!
//! The tree is made of a closed set of node kinds (see [`Expr`]). Every node owns its children, and
//! records the region of the source code it was parsed from.

pub mod binary;
pub mod equation;
pub mod expr;
pub mod literal;
pub mod pow;
pub mod unary;

pub use binary::Binary;
pub use equation::Equation;
pub use expr::Expr;
pub use literal::{Literal, LitNum, LitVar};
pub use pow::Pow;
pub use unary::Neg;
