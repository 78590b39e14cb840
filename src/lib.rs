//! # verdure
//!
//! An engine-agnostic plant generator that grows branching structures from
//! [L-System](https://en.wikipedia.org/wiki/L-system) grammars.
//!
//! It decouples the *grammar* (an iteratively rewritten symbol string) from
//! the *geometry* (branch segments and point markers), producing a
//! [`PlantSkeleton`] that can be ingested by game engines, DCC tools, or
//! plotting pipelines.
//!
//! The quickest way in is [`PlantGenerator`]: load a grammar, pick an angle
//! and step length, and ask for the geometry of generation `n`.

pub mod error;
pub mod generator;
pub mod grammar;
pub mod interpreter;
pub mod skeleton;
pub mod turtle;

pub use error::*;
pub use generator::*;
pub use grammar::*;
pub use interpreter::*;
pub use skeleton::*;
pub use turtle::*;
