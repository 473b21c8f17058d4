//! Pluggable strategies for the two choice points of the backtracking
//! search: which slot to fill next, and in which order to try its words.

pub mod slot;
pub mod value;
