//! Polyfill byte buffer

use std::fmt;

use super::range::resolve_range;
use super::{MAX_SAFE_INTEGER, Value};
use crate::error::BufferError;

/// Tag a host prints for buffer objects
pub const TO_STRING_TAG: &str = "ArrayBuffer";

/// Fixed-length, zero-initialized, exclusively owned raw bytes
///
/// The length is fixed at construction. [`ByteBuffer::slice`] always copies,
/// so two buffers never share storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    data: Box<[u8]>,
}

impl ByteBuffer {
    /// Allocate `size` zero bytes
    pub fn new(size: u64) -> Result<Self, BufferError> {
        if size > MAX_SAFE_INTEGER {
            return Err(BufferError::LengthTooLarge {
                requested: size,
                max: MAX_SAFE_INTEGER,
            });
        }
        Ok(Self {
            data: zeroed(size)?.into_boxed_slice(),
        })
    }

    /// Construct from a dynamic length argument
    pub fn create(size: &Value<'_>) -> Result<Self, BufferError> {
        Self::new(size.to_index()?)
    }

    /// Number of owned bytes
    #[inline]
    pub fn byte_length(&self) -> u64 {
        self.data.len() as u64
    }

    /// Copy `[start, end)` into a new buffer
    ///
    /// Negative offsets count from the end. Out-of-range offsets are clamped,
    /// and `start > end` gives an empty buffer.
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self {
        let (begin, end) = resolve_range(start, end, self.byte_length());
        tracing::trace!(begin, end, len = self.data.len(), "slicing byte buffer");
        // both bounds are <= data.len(), so they fit in usize
        Self {
            data: self.data[begin as usize..end as usize].into(),
        }
    }

    /// True if `value` is a view over a buffer
    pub fn is_view(value: &Value<'_>) -> bool {
        value.is_view()
    }

    /// True if `value` is a buffer itself rather than a view over one
    pub fn is_array_buffer(value: &Value<'_>) -> bool {
        value.is_buffer()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

/// Allocate zeroed storage, reporting allocator failure instead of aborting
pub(crate) fn zeroed(size: u64) -> Result<Vec<u8>, BufferError> {
    let len = usize::try_from(size).map_err(|_| BufferError::AllocationFailed { requested: size })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed { requested: size })?;
    data.resize(len, 0);
    tracing::trace!(len, "allocated zeroed storage");
    Ok(data)
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("byte_length", &self.data.len())
            .finish()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for ByteBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(v: Vec<u8>) -> Self {
        debug_assert!(v.len() as u64 <= MAX_SAFE_INTEGER);
        Self {
            data: v.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(v: &[u8]) -> Self {
        debug_assert!(v.len() as u64 <= MAX_SAFE_INTEGER);
        Self { data: v.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(len: u8) -> ByteBuffer {
        ByteBuffer::from((0..len).collect::<Vec<u8>>())
    }

    #[test]
    fn new_is_zeroed() {
        let buf = ByteBuffer::new(5).unwrap();
        assert_eq!(buf.byte_length(), 5);
        assert_eq!(buf.as_bytes(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn empty_buffer() {
        let buf = ByteBuffer::new(0).unwrap();
        assert_eq!(buf.byte_length(), 0);
        assert_eq!(buf.slice(Some(-1), Some(1)).byte_length(), 0);
    }

    #[test]
    fn too_large() {
        let err = ByteBuffer::new(MAX_SAFE_INTEGER + 1).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthTooLarge {
                requested: MAX_SAFE_INTEGER + 1,
                max: MAX_SAFE_INTEGER
            }
        );
    }

    #[test]
    fn slice_copies_range() {
        let buf = counting(10);
        assert_eq!(buf.slice(Some(2), Some(6)).as_bytes(), &[2, 3, 4, 5]);
        assert_eq!(buf.slice(Some(-4), Some(-2)).as_bytes(), &[6, 7]);
        assert_eq!(buf.slice(Some(2), Some(-2)).as_bytes(), &[2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn slice_does_not_alias() {
        let mut buf = counting(4);
        let mut copy = buf.slice(None, None);
        assert_ne!(buf.as_bytes().as_ptr(), copy.as_bytes().as_ptr());

        copy.as_bytes_mut()[0] = 0xFF;
        assert_eq!(buf.as_bytes()[0], 0);

        buf.as_bytes_mut()[1] = 0xEE;
        assert_eq!(copy.as_bytes()[1], 1);
    }

    #[test]
    fn from_bytes_keeps_length() {
        let buf = ByteBuffer::from(&[1u8, 2, 3][..]);
        assert_eq!(buf.byte_length(), 3);
        assert_eq!(ByteBuffer::from(vec![0u8; 7]).byte_length(), 7);
        assert_eq!(ByteBuffer::from(Vec::new()).byte_length(), 0);
    }

    #[test]
    fn debug_hides_contents() {
        let buf = counting(3);
        assert_eq!(format!("{:?}", buf), "ByteBuffer { byte_length: 3 }");
    }
}
