//! The [`Scalar`] element bound.

mod sealed {
    pub trait Sealed {}
}

/// A fixed-size, plain-old-data element type that a buffer may hold.
///
/// Implemented for the primitive integer and floating-point types only.
/// The trait is sealed: every implementor is `Copy`, has no drop glue,
/// and has an all-zero bit pattern equal to [`Scalar::ZERO`].
pub trait Scalar: Copy + Send + Sync + 'static + sealed::Sealed {
    /// The zero value of this type.
    const ZERO: Self;
}

macro_rules! impl_scalar {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_scalar! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Scalar>() -> T {
        T::ZERO
    }

    #[test]
    fn zero_values() {
        assert_eq!(zero_of::<i32>(), 0);
        assert_eq!(zero_of::<u8>(), 0);
        assert_eq!(zero_of::<f64>(), 0.0);
        assert_eq!(zero_of::<f32>().to_bits(), 0);
    }
}
