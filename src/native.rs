//! Host-native buffer backing
//!
//! Wraps `bytes::BytesMut`. Length validation and allocator failures are
//! reported exactly as the polyfill reports them.

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::error::BufferError;
use crate::types::range::resolve_range;
use crate::types::{MAX_SAFE_INTEGER, Value, zeroed};

/// Buffer backed by the ecosystem's native mutable byte container
#[derive(Clone, PartialEq, Eq)]
pub struct NativeBuffer {
    inner: BytesMut,
}

impl NativeBuffer {
    pub fn new(size: u64) -> Result<Self, BufferError> {
        if size > MAX_SAFE_INTEGER {
            return Err(BufferError::LengthTooLarge {
                requested: size,
                max: MAX_SAFE_INTEGER,
            });
        }
        // a uniquely owned Bytes converts back to BytesMut without copying
        let data = zeroed(size)?;
        Ok(Self {
            inner: BytesMut::from(Bytes::from(data)),
        })
    }

    pub fn create(size: &Value<'_>) -> Result<Self, BufferError> {
        Self::new(size.to_index()?)
    }

    #[inline]
    pub fn byte_length(&self) -> u64 {
        self.inner.len() as u64
    }

    /// Copy `[start, end)` into a fresh `BytesMut`, never a shared split
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self {
        let (begin, end) = resolve_range(start, end, self.byte_length());
        tracing::trace!(begin, end, len = self.inner.len(), "slicing native buffer");
        Self {
            inner: BytesMut::from(&self.inner[begin as usize..end as usize]),
        }
    }

    pub fn is_view(value: &Value<'_>) -> bool {
        value.is_view()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    pub fn into_inner(self) -> BytesMut {
        self.inner
    }
}

impl fmt::Debug for NativeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBuffer")
            .field("byte_length", &self.inner.len())
            .finish()
    }
}

impl AsRef<[u8]> for NativeBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl AsMut<[u8]> for NativeBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.inner
    }
}

impl From<BytesMut> for NativeBuffer {
    fn from(inner: BytesMut) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let buf = NativeBuffer::new(4).unwrap();
        assert_eq!(buf.byte_length(), 4);
        assert_eq!(buf.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn create_validates_like_polyfill() {
        assert!(NativeBuffer::create(&Value::Number(-1.0)).unwrap_err().is_range_error());
        assert!(NativeBuffer::create(&Value::Null).unwrap_err().is_type_error());
        assert!(
            NativeBuffer::create(&Value::from(MAX_SAFE_INTEGER + 1))
                .unwrap_err()
                .is_range_error()
        );
    }

    #[test]
    fn allocation_failure_is_an_error() {
        let err = NativeBuffer::new(MAX_SAFE_INTEGER).unwrap_err();
        assert_eq!(
            err,
            BufferError::AllocationFailed {
                requested: MAX_SAFE_INTEGER
            }
        );
    }

    #[test]
    fn slice_is_independent() {
        let mut buf = NativeBuffer::from(BytesMut::from(&b"abcdef"[..]));
        let mut part = buf.slice(Some(1), Some(-1));
        assert_eq!(part.as_bytes(), b"bcde");

        part.as_bytes_mut()[0] = b'X';
        buf.as_bytes_mut()[2] = b'Y';
        assert_eq!(buf.as_bytes(), b"abYdef");
        assert_eq!(part.as_bytes(), b"Xcde");
    }
}
