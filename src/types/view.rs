//! View descriptors over buffer bytes
//!
//! Views borrow the bytes they describe and never own storage. They exist so
//! that `is_view` has a closed set of variants to recognize.

use super::DType;
use crate::error::ViewError;

/// Any view over a buffer
#[derive(Debug, Clone, Copy)]
pub enum BufferView<'a> {
    Typed(TypedView<'a>),
    Data(DataView<'a>),
}

impl<'a> BufferView<'a> {
    pub fn byte_offset(&self) -> usize {
        match self {
            BufferView::Typed(v) => v.byte_offset,
            BufferView::Data(v) => v.byte_offset,
        }
    }

    pub fn byte_length(&self) -> usize {
        self.bytes().len()
    }

    /// The viewed window of the underlying buffer
    pub fn bytes(&self) -> &'a [u8] {
        match self {
            BufferView::Typed(v) => v.bytes,
            BufferView::Data(v) => v.bytes,
        }
    }

    /// Host constructor name of this view
    pub fn view_name(&self) -> &'static str {
        match self {
            BufferView::Typed(v) => v.dtype.view_name(),
            BufferView::Data(_) => "DataView",
        }
    }
}

/// Elements of a single dtype laid over a buffer window
#[derive(Debug, Clone, Copy)]
pub struct TypedView<'a> {
    dtype: DType,
    byte_offset: usize,
    bytes: &'a [u8],
}

impl<'a> TypedView<'a> {
    /// Lay `dtype` elements over `buffer` starting at `byte_offset`
    ///
    /// With `length` unset the view runs to the end of the buffer, which must
    /// then hold a whole number of elements.
    pub fn new(
        buffer: &'a impl AsRef<[u8]>,
        dtype: DType,
        byte_offset: usize,
        length: Option<usize>,
    ) -> Result<Self, ViewError> {
        let buffer = buffer.as_ref();
        let size = dtype.element_size();
        let misaligned = |byte_length| ViewError::Misaligned {
            dtype_size: size,
            byte_offset,
            byte_length,
        };

        if byte_offset % size != 0 {
            return Err(misaligned(buffer.len()));
        }

        let byte_length = match length {
            Some(n) => n.checked_mul(size).ok_or(ViewError::OutOfBounds {
                byte_offset,
                byte_length: usize::MAX,
                buffer_length: buffer.len(),
            })?,
            None => {
                let rest = buffer.len().checked_sub(byte_offset).ok_or(ViewError::OutOfBounds {
                    byte_offset,
                    byte_length: 0,
                    buffer_length: buffer.len(),
                })?;
                if rest % size != 0 {
                    return Err(misaligned(rest));
                }
                rest
            }
        };

        let bytes = window(buffer, byte_offset, byte_length)?;
        Ok(Self {
            dtype,
            byte_offset,
            bytes,
        })
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.bytes.len() / self.dtype.element_size()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Untyped window over a buffer
#[derive(Debug, Clone, Copy)]
pub struct DataView<'a> {
    byte_offset: usize,
    bytes: &'a [u8],
}

impl<'a> DataView<'a> {
    pub fn new(
        buffer: &'a impl AsRef<[u8]>,
        byte_offset: usize,
        byte_length: Option<usize>,
    ) -> Result<Self, ViewError> {
        let buffer = buffer.as_ref();
        let byte_length = match byte_length {
            Some(n) => n,
            None => buffer.len().saturating_sub(byte_offset),
        };
        let bytes = window(buffer, byte_offset, byte_length)?;
        Ok(Self { byte_offset, bytes })
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

fn window(buffer: &[u8], byte_offset: usize, byte_length: usize) -> Result<&[u8], ViewError> {
    let out_of_bounds = ViewError::OutOfBounds {
        byte_offset,
        byte_length,
        buffer_length: buffer.len(),
    };
    let end = byte_offset.checked_add(byte_length).ok_or_else(|| out_of_bounds.clone())?;
    buffer.get(byte_offset..end).ok_or(out_of_bounds)
}

impl<'a> From<TypedView<'a>> for BufferView<'a> {
    fn from(v: TypedView<'a>) -> Self {
        BufferView::Typed(v)
    }
}

impl<'a> From<DataView<'a>> for BufferView<'a> {
    fn from(v: DataView<'a>) -> Self {
        BufferView::Data(v)
    }
}
