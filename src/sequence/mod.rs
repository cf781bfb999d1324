//! Working with whole move sequences rather than single moves:
//! simplifying recorded sequences and generating scrambles.

pub mod scramble;
pub mod simplify;
