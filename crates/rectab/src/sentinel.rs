//! The "unset" marker written into freshly expanded rows.

/// Element types that have a designated "unset" value.
///
/// Expanded rows are filled with [`Unset::UNSET`] so every cell of a table
/// always holds a valid value. Integer and float payloads use the image of
/// `-1` in the type (so `u32::MAX` for unsigned types). Payloads where every
/// value is meaningful should be stored as `Option<T>`, whose sentinel is
/// `None`.
pub trait Unset: Copy {
    /// The sentinel value.
    const UNSET: Self;

    /// Returns `true` if `self` is the sentinel value.
    fn is_unset(&self) -> bool;
}

macro_rules! impl_unset_signed {
    ($($t:ty),*) => {
        $(
            impl Unset for $t {
                const UNSET: Self = -1;

                #[inline]
                fn is_unset(&self) -> bool {
                    *self == Self::UNSET
                }
            }
        )*
    };
}

macro_rules! impl_unset_unsigned {
    ($($t:ty),*) => {
        $(
            impl Unset for $t {
                const UNSET: Self = <$t>::MAX;

                #[inline]
                fn is_unset(&self) -> bool {
                    *self == Self::UNSET
                }
            }
        )*
    };
}

impl_unset_signed!(i8, i16, i32, i64, i128, isize);
impl_unset_unsigned!(u8, u16, u32, u64, u128, usize);

impl Unset for f32 {
    const UNSET: Self = -1.0;

    #[inline]
    fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl Unset for f64 {
    const UNSET: Self = -1.0;

    #[inline]
    fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl<T: Copy> Unset for Option<T> {
    const UNSET: Self = None;

    #[inline]
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}
