use std::borrow::Cow;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Values that may or may not be able to represent absence.
///
/// Used by the `*_if_nullable` guards: types that can be absent report it
/// through [`Nullable::is_null`], everything else always returns `false`.
pub trait Nullable {
    /// Returns `true` when the value is absent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullable for $ty {
                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! never_null_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Nullable for $ty<T> {
                #[inline]
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_null!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    (), str, String,
);

never_null_generic!(Box, Rc, Arc, NonNull);

impl<T> Nullable for [T] {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Vec<T> {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized + ToOwned> Nullable for Cow<'_, T> {
    fn is_null(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_null_only_when_none() {
        assert!(None::<i32>.is_null());
        assert!(!Some(0).is_null());
        assert!(!Some(None::<i32>).is_null());
    }

    #[test]
    fn raw_pointers_report_null() {
        let value = 7u8;
        assert!(Nullable::is_null(&std::ptr::null::<u8>()));
        assert!(Nullable::is_null(&std::ptr::null_mut::<u8>()));
        assert!(!Nullable::is_null(&(&value as *const u8)));
    }

    #[test]
    fn references_forward_to_target() {
        let absent: Option<&str> = None;
        let present = Some("x");
        assert!((&absent).is_null());
        assert!(!(&&present).is_null());

        let mut slot = None::<u8>;
        let slot_ref = &mut slot;
        assert!(Nullable::is_null(&slot_ref));
        *slot_ref = Some(1);
        assert!(!Nullable::is_null(&slot_ref));
    }

    #[test]
    fn value_types_are_never_null() {
        assert!(!0i32.is_null());
        assert!(!"".is_null());
        assert!(!String::new().is_null());
        assert!(!Box::new(1).is_null());
        assert!(!Arc::new("shared").is_null());
        assert!(!Vec::<u8>::new().is_null());
        assert!(!Cow::Borrowed("c").is_null());
    }
}
