//! CLI command implementations.

pub mod algebra;
pub mod components;
pub mod degree;
pub mod edit;
pub mod floyd;
pub mod metrics;
pub mod mst;
pub mod path;
pub mod show;
pub mod traverse;
