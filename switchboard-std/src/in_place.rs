//! In-place construction tags.

use std::{fmt, marker::PhantomData};

/// Tag naming the type `T` to be constructed in place, for APIs that pick a
/// type by tag rather than by value.
pub struct InPlaceType<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> InPlaceType<T> {
    /// Create the tag.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for InPlaceType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for InPlaceType<T> {}

impl<T: ?Sized> Default for InPlaceType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for InPlaceType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InPlaceType<{}>", std::any::type_name::<T>())
    }
}

/// Implemented only by [`InPlaceType`] tags.
pub trait InPlace {
    /// The tagged type.
    type Target: ?Sized;
}

impl<T: ?Sized> InPlace for InPlaceType<T> {
    type Target = T;
}

#[doc(hidden)]
pub struct InPlaceProbe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> InPlaceProbe<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[doc(hidden)]
pub trait IsInPlace {
    fn is_in_place_type(&self) -> bool {
        true
    }
}

impl<T: InPlace + ?Sized> IsInPlace for &InPlaceProbe<T> {}

#[doc(hidden)]
pub trait NotInPlace {
    fn is_in_place_type(&self) -> bool {
        false
    }
}

impl<T: ?Sized> NotInPlace for InPlaceProbe<T> {}

/// Whether the concrete type `T` is an [`InPlaceType`] tag.
///
/// # Example
/// ```rust
/// use switchboard_std::{in_place::InPlaceType, is_in_place_type};
///
/// assert!(is_in_place_type!(InPlaceType<String>));
/// assert!(!is_in_place_type!(String));
/// ```
#[macro_export]
macro_rules! is_in_place_type {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::in_place::{IsInPlace as _, NotInPlace as _};
        (&&$crate::in_place::InPlaceProbe::<$t>::new()).is_in_place_type()
    }};
}
