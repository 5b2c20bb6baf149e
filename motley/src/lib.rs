#![no_std]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

pub use motley_core::*;

mod variant;
pub use variant::*;

mod assign;

mod swap;

mod visit;
pub use visit::*;

mod cmp;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}

/// Spells an alternative list as the nested tuple the container expects:
/// `Alts![A, B, C]` is `(A, (B, (C, ())))`.
#[macro_export]
macro_rules! Alts {
    [] => [()];
    [$head:ty $(, $rest:ty)* $(,)?] => [($head, $crate::Alts![$($rest),*])];
}

/// Spells a container type over an alternative list:
/// `Variant![A, B, C]` is `Variant<Alts![A, B, C]>`.
#[macro_export]
macro_rules! Variant {
    [$($alt:ty),* $(,)?] => [$crate::Variant<$crate::Alts![$($alt),*]>];
}
