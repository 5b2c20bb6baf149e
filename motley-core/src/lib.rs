#![no_std]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

// Type-level indices
mod index;
pub use index::*;

// Alternative lists and their union representation
mod list;
pub use list::*;

// The tagged slot owning the payload
mod slot;
pub use slot::*;

// Capability matrix: per-list dispatch for clone/compare/hash/debug/swap
mod caps;
pub use caps::*;

// Visitation dispatch
mod visit;
pub use visit::*;

// Access errors
mod error;
pub use error::*;

// The in-place exchange capability and its impls for `core` types
mod swap;
pub use swap::*;

#[cfg(feature = "alloc")]
mod impls_alloc;
