//! Reference-counted heap handle for compound values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, single-threaded handle to heap data owned by a [`Value`](super::Value).
///
/// Cloning is O(1). Mutation goes through [`Heap::make_mut`], which copies the
/// data first when other handles still point at it, so a snapshot taken
/// before a write never observes that write.
///
/// The constructor is private to the `value` module: heap values are built
/// through the `Value` factory methods (`Value::string`, `Value::object`, ...).
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Heap<T> {
    /// Mutable access, cloning the data if it is shared.
    #[inline]
    pub(super) fn make_mut(&mut self) -> &mut T {
        Rc::make_mut(&mut self.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
