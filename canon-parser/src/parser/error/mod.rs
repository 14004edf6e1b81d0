pub mod kind;

pub use canon_error::Error;
