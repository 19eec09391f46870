//! Selection between the native and polyfill backings
//!
//! A [`Dispatcher`] is fixed to one [`Backend`] when it is built. The
//! process-wide dispatcher is built once, either by [`init`] or lazily from
//! [`Config::from_env`], and never changes afterwards.

use std::sync::OnceLock;

use crate::config::Config;
use crate::error::BufferError;
use crate::native::NativeBuffer;
use crate::types::{ByteBuffer, Value};

/// Shared interface of both backings
pub trait ArrayBufferLike: AsRef<[u8]> + AsMut<[u8]> + Into<Buffer> + Sized {
    /// Allocate `size` zero bytes
    fn with_length(size: u64) -> Result<Self, BufferError>;

    /// Allocate from a dynamic length argument
    fn create(size: &Value<'_>) -> Result<Self, BufferError> {
        Self::with_length(size.to_index()?)
    }

    fn byte_length(&self) -> u64;

    /// Copy a clamped byte range into a new, independent buffer
    fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self;

    fn is_view(value: &Value<'_>) -> bool {
        value.is_view()
    }
}

impl ArrayBufferLike for ByteBuffer {
    fn with_length(size: u64) -> Result<Self, BufferError> {
        ByteBuffer::new(size)
    }

    fn byte_length(&self) -> u64 {
        ByteBuffer::byte_length(self)
    }

    fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self {
        ByteBuffer::slice(self, start, end)
    }
}

impl ArrayBufferLike for NativeBuffer {
    fn with_length(size: u64) -> Result<Self, BufferError> {
        NativeBuffer::new(size)
    }

    fn byte_length(&self) -> u64 {
        NativeBuffer::byte_length(self)
    }

    fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self {
        NativeBuffer::slice(self, start, end)
    }
}

/// Which backing a dispatcher constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Native,
    Polyfill,
}

impl Backend {
    pub fn select(has_native: bool) -> Self {
        if has_native {
            Backend::Native
        } else {
            Backend::Polyfill
        }
    }

    /// Consult a capability probe once
    pub fn detect(probe: impl FnOnce() -> bool) -> Self {
        let has_native = probe();
        let backend = Self::select(has_native);
        tracing::debug!(has_native, ?backend, "selected buffer backend");
        backend
    }
}

/// Default capability probe
///
/// `bytes` is always linked, so the native backing is always available.
pub fn native_supported() -> bool {
    true
}

/// A buffer from either backing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Buffer {
    Native(NativeBuffer),
    Polyfill(ByteBuffer),
}

impl Buffer {
    pub fn backend(&self) -> Backend {
        match self {
            Buffer::Native(_) => Backend::Native,
            Buffer::Polyfill(_) => Backend::Polyfill,
        }
    }

    pub fn byte_length(&self) -> u64 {
        match self {
            Buffer::Native(b) => b.byte_length(),
            Buffer::Polyfill(b) => b.byte_length(),
        }
    }

    /// Copy a clamped byte range into a new buffer of the same backing
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Self {
        match self {
            Buffer::Native(b) => Buffer::Native(b.slice(start, end)),
            Buffer::Polyfill(b) => Buffer::Polyfill(b.slice(start, end)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Buffer::Native(b) => b.as_bytes(),
            Buffer::Polyfill(b) => b.as_bytes(),
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Buffer::Native(b) => b.as_bytes_mut(),
            Buffer::Polyfill(b) => b.as_bytes_mut(),
        }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for Buffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl From<ByteBuffer> for Buffer {
    fn from(b: ByteBuffer) -> Self {
        Buffer::Polyfill(b)
    }
}

impl From<NativeBuffer> for Buffer {
    fn from(b: NativeBuffer) -> Self {
        Buffer::Native(b)
    }
}

/// Uniform constructor over the chosen backing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    backend: Backend,
}

impl Dispatcher {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub fn detect(probe: impl FnOnce() -> bool) -> Self {
        Self::new(Backend::detect(probe))
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Construct a buffer from a dynamic length argument
    ///
    /// Validation belongs to the chosen backing.
    pub fn make_buffer(&self, size: &Value<'_>) -> Result<Buffer, BufferError> {
        match self.backend {
            Backend::Native => build::<NativeBuffer>(size),
            Backend::Polyfill => build::<ByteBuffer>(size),
        }
    }

    pub fn with_length(&self, size: u64) -> Result<Buffer, BufferError> {
        match self.backend {
            Backend::Native => NativeBuffer::with_length(size).map(Into::into),
            Backend::Polyfill => ByteBuffer::with_length(size).map(Into::into),
        }
    }

    pub fn is_view(&self, value: &Value<'_>) -> bool {
        match self.backend {
            Backend::Native => <NativeBuffer as ArrayBufferLike>::is_view(value),
            Backend::Polyfill => <ByteBuffer as ArrayBufferLike>::is_view(value),
        }
    }
}

fn build<B: ArrayBufferLike>(size: &Value<'_>) -> Result<Buffer, BufferError> {
    B::create(size).map(Into::into)
}

static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();

/// Fix the process-wide backend; the first call wins
///
/// Returns the backend actually in effect.
pub fn init(backend: Backend) -> Backend {
    let installed = GLOBAL.get_or_init(|| Dispatcher::new(backend)).backend;
    if installed != backend {
        tracing::debug!(requested = ?backend, ?installed, "buffer backend already fixed");
    }
    installed
}

/// The process-wide dispatcher, initialized from the environment on first use
pub fn global() -> &'static Dispatcher {
    GLOBAL.get_or_init(|| {
        let backend = Config::from_env().backend(native_supported);
        tracing::debug!(?backend, "initialized process-wide buffer backend");
        Dispatcher::new(backend)
    })
}

pub fn backend() -> Backend {
    global().backend()
}

/// Construct a buffer through the process-wide dispatcher
pub fn make_buffer(size: &Value<'_>) -> Result<Buffer, BufferError> {
    global().make_buffer(size)
}

pub fn is_view(value: &Value<'_>) -> bool {
    global().is_view(value)
}
