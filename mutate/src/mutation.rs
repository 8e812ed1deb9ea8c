//! Apply a mutating closure to a copy of a value.
//!
//! The transformation only ever sees the copy. How deep that copy goes is
//! decided by the type's `Clone` impl: owned data (`Vec`, `String`, nested
//! structs) is duplicated, shared handles (`Rc`, `Arc`) are not.

use std::any::type_name;

/// Clone `original`, run `transform` on the clone, and return it.
///
/// `original` is only borrowed and is never passed to `transform`. If
/// `transform` panics, the panic unwinds through this call unchanged and the
/// partially mutated copy is dropped.
///
/// ```
/// use copy_mutate::with_mutation;
///
/// let base = vec![1, 2, 3];
/// let extended = with_mutation(&base, |v| v.push(4));
///
/// assert_eq!(base, [1, 2, 3]);
/// assert_eq!(extended, [1, 2, 3, 4]);
/// ```
///
/// Types that cannot be duplicated are rejected at compile time:
///
/// ```compile_fail
/// use copy_mutate::with_mutation;
///
/// struct Handle(u32);
///
/// let handle = Handle(7);
/// let _bumped = with_mutation(&handle, |h| h.0 += 1);
/// ```
#[must_use]
pub fn with_mutation<T: Clone>(original: &T, transform: impl FnOnce(&mut T)) -> T {
    tracing::trace!(ty = type_name::<T>(), "mutating private copy");
    let mut copy = original.clone();
    transform(&mut copy);
    copy
}

/// Method form of [`with_mutation`], implemented for every `Clone` type.
///
/// ```
/// use copy_mutate::Mutate;
///
/// let greeting = String::from("hello");
/// let shouted = greeting.with_mutation(|s| s.make_ascii_uppercase());
///
/// assert_eq!(greeting, "hello");
/// assert_eq!(shouted, "HELLO");
/// ```
pub trait Mutate: Clone {
    /// Same contract as [`with_mutation`].
    #[must_use]
    fn with_mutation(&self, transform: impl FnOnce(&mut Self)) -> Self;

    /// Owned-receiver form: `self` is consumed and becomes the copy, so no
    /// clone is made.
    ///
    /// ```
    /// use copy_mutate::Mutate;
    ///
    /// let tags = vec!["a", "b"].into_mutated(|t| t.retain(|tag| *tag != "a"));
    /// assert_eq!(tags, ["b"]);
    /// ```
    #[must_use]
    fn into_mutated(self, transform: impl FnOnce(&mut Self)) -> Self;
}

impl<T: Clone> Mutate for T {
    fn with_mutation(&self, transform: impl FnOnce(&mut Self)) -> Self {
        with_mutation(self, transform)
    }

    fn into_mutated(mut self, transform: impl FnOnce(&mut Self)) -> Self {
        tracing::trace!(ty = type_name::<T>(), owned = true, "mutating owned value");
        transform(&mut self);
        self
    }
}
