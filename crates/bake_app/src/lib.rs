//! `bake` driver: configuration, logging and the discover/compile/write
//! pass over an asset tree.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::BakeConfig;
pub use runner::{BakeOutput, Baker};
