//! Core types for rawbuf

mod buffer;
mod dtype;
pub(crate) mod range;
mod value;
mod view;

pub use buffer::{ByteBuffer, TO_STRING_TAG};
pub(crate) use buffer::zeroed;
pub use dtype::DType;
pub use value::{MAX_SAFE_INTEGER, Value, ValueKind};
pub use view::{BufferView, DataView, TypedView};
