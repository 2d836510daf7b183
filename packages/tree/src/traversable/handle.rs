use super::Traversable;

/// A borrow of a [`Traversable`] tree a cursor walks through.
///
/// Implemented for shared and exclusive references. The kind of the borrow
/// decides whether the cursor may hand out mutable access to the values.
pub trait Handle {
    type Tree: Traversable + ?Sized;

    fn tree(&self) -> &Self::Tree;
}

impl<T> Handle for &T
where
    T: Traversable + ?Sized,
{
    type Tree = T;

    #[inline]
    fn tree(&self) -> &Self::Tree {
        self
    }
}

impl<T> Handle for &mut T
where
    T: Traversable + ?Sized,
{
    type Tree = T;

    #[inline]
    fn tree(&self) -> &Self::Tree {
        self
    }
}
