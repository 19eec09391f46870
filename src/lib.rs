//! rawbuf - Fixed-length raw byte buffers with native and polyfill backings
//!
//! A [`ByteBuffer`] owns a fixed number of zero-initialized bytes. Its
//! [`slice`](ByteBuffer::slice) copies a clamped byte range into a new,
//! independent buffer. A [`Dispatcher`] decides once whether buffers are
//! backed by the native `bytes::BytesMut` container or by the polyfill, so
//! callers never see which path was taken.
//!
//! # Features
//!
//! - Host-compatible length validation (type vs range errors, 2^53 - 1 cap)
//! - Negative-index, silently clamped slicing that never aliases
//! - View detection over a closed set of typed-array and data views
//! - Optional ndarray interop for typed views
//!
//! # Example
//!
//! ```rust
//! use rawbuf::{Backend, Dispatcher, Value};
//!
//! let dispatcher = Dispatcher::new(Backend::Polyfill);
//! let buf = dispatcher.make_buffer(&Value::from(10)).unwrap();
//! assert_eq!(buf.byte_length(), 10);
//!
//! let tail = buf.slice(Some(-2), None);
//! assert_eq!(tail.byte_length(), 2);
//!
//! assert!(!dispatcher.is_view(&Value::List(vec![])));
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod native;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use config::{BackendChoice, Config};
pub use dispatch::{
    ArrayBufferLike, Backend, Buffer, Dispatcher, backend, global, init, is_view, make_buffer,
};
pub use error::{BufferError, ErrorKind, ViewError};
pub use native::NativeBuffer;
pub use types::{
    BufferView, ByteBuffer, DType, DataView, MAX_SAFE_INTEGER, TO_STRING_TAG, TypedView, Value,
    ValueKind,
};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::{NdarrayError, ViewElement};
