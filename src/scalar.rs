/// A totally ordered value that can be fed into a [`crate::Tracker`]
///
/// Ordering drives which half of the tracker a value lands in.
/// [`Self::to_real`] is only used when the median has to average the two middle values,
/// so that an even count like `[1, 2]` yields `1.5` rather than a truncated `1`.
///
/// Implementations are provided for the primitive integer types.
/// Floats are not [`Ord`], so they need a newtype with a total order (see the `custom_data` example).
pub trait Scalar: Ord + Clone {
    /// Converts the value to a real number for averaging
    fn to_real(&self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_real(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
