//! [`Swap`] impls for `alloc` types.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Swap;

impl Swap for String {}
impl<T> Swap for Vec<T> {}
impl<T: ?Sized> Swap for Box<T> {}
