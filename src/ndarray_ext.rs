//! ndarray integration for typed views
//!
//! Reads the elements of a [`TypedView`] out as a 1-D `ndarray` array, and
//! packs an `ndarray` array into a fresh [`ByteBuffer`].
//!
//! Enable with the `ndarray` feature flag.

use crate::types::{ByteBuffer, DType, TypedView};
use ndarray::{Array1, ArrayD, ArrayView1, ArrayViewD};
use std::mem::size_of;

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdarrayError {
    /// Element type doesn't match the view's dtype
    #[error("DType mismatch: expected {expected:?}, got {actual:?}")]
    DTypeMismatch { expected: DType, actual: DType },
    /// View bytes are not properly aligned for the element type
    #[error("Data is not properly aligned for element type")]
    AlignmentError,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for i8 {}
    impl Sealed for u16 {}
    impl Sealed for i16 {}
    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element types a typed view can be read as
///
/// Sealed: only the primitive element types implement it, so the borrowing
/// cast in [`TypedView::try_as_ndarray`] can rely on their layout.
///
/// ```compile_fail
/// use rawbuf::{DType, ViewElement};
///
/// #[derive(Clone)]
/// struct Wide([u8; 8]);
///
/// impl ViewElement for Wide {
///     const DTYPE: DType = DType::U8;
///     fn from_ne_slice(bytes: &[u8]) -> Self {
///         Wide([bytes[0]; 8])
///     }
///     fn write_ne(&self, out: &mut [u8]) {
///         out[0] = self.0[0];
///     }
/// }
/// ```
pub trait ViewElement: sealed::Sealed + Sized + Clone + 'static {
    const DTYPE: DType;

    fn from_ne_slice(bytes: &[u8]) -> Self;

    fn write_ne(&self, out: &mut [u8]);

    /// Whether a view of `dtype` holds this element type
    fn accepts(dtype: DType) -> bool {
        dtype == Self::DTYPE
    }
}

macro_rules! view_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl ViewElement for $ty {
                const DTYPE: DType = DType::$dtype;

                fn from_ne_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }

                fn write_ne(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

view_element! {
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

impl ViewElement for u8 {
    const DTYPE: DType = DType::U8;

    fn from_ne_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write_ne(&self, out: &mut [u8]) {
        out[0] = *self;
    }

    fn accepts(dtype: DType) -> bool {
        matches!(dtype, DType::U8 | DType::U8Clamped)
    }
}

fn check_dtype<T: ViewElement>(view: &TypedView<'_>) -> Result<(), NdarrayError> {
    if T::accepts(view.dtype()) {
        Ok(())
    } else {
        Err(NdarrayError::DTypeMismatch {
            expected: T::DTYPE,
            actual: view.dtype(),
        })
    }
}

impl<'a> TypedView<'a> {
    /// Copy the view's elements into a 1-D ndarray
    pub fn to_ndarray<T: ViewElement>(&self) -> Result<ArrayD<T>, NdarrayError> {
        check_dtype::<T>(self)?;
        let elements: Vec<T> = self
            .bytes()
            .chunks_exact(size_of::<T>())
            .map(T::from_ne_slice)
            .collect();
        Ok(Array1::from(elements).into_dyn())
    }

    /// Try to borrow the view's elements without copying
    ///
    /// This will fail if the bytes are not properly aligned for the element type.
    pub fn try_as_ndarray<T: ViewElement>(&self) -> Result<ArrayViewD<'a, T>, NdarrayError> {
        check_dtype::<T>(self)?;
        let bytes = self.bytes();
        if (bytes.as_ptr() as usize) % std::mem::align_of::<T>() != 0 {
            return Err(NdarrayError::AlignmentError);
        }

        let len = bytes.len() / size_of::<T>();
        // SAFETY:
        // - Alignment is checked above before the cast
        // - len * size_of::<T>() <= bytes.len() by construction of len
        // - T is a primitive (ViewElement) with no invalid bit patterns
        // - Lifetime 'a of the view is preserved in ArrayViewD<'a, T>
        let slice = unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const T, len) };
        Ok(ArrayView1::from(slice).into_dyn())
    }
}

impl ByteBuffer {
    /// Pack an ndarray's elements, in logical order, into a new buffer
    pub fn from_ndarray<T: ViewElement>(arr: &ArrayD<T>) -> (Self, DType) {
        let size = size_of::<T>();
        let mut data = vec![0u8; arr.len() * size];
        for (elem, out) in arr.iter().zip(data.chunks_exact_mut(size)) {
            elem.write_ne(out);
        }
        (ByteBuffer::from(data), T::DTYPE)
    }
}
