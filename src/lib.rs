//! cppify — a transpiler from a small typed scripting language to C++.

pub mod artifact;
pub mod config;
pub mod lang;
