//! Integration tests for ndarray support

#![cfg(feature = "ndarray")]

use ndarray::{ArrayD, array};
use rawbuf::{Backend, DType, Dispatcher, NdarrayError, TypedView};

#[test]
fn read_floats_from_dispatched_buffer() {
    for backend in [Backend::Native, Backend::Polyfill] {
        let mut buf = Dispatcher::new(backend).with_length(12).unwrap();
        for (out, v) in buf.as_bytes_mut().chunks_exact_mut(4).zip([0.5f32, 1.5, -2.0]) {
            out.copy_from_slice(&v.to_ne_bytes());
        }

        let view = TypedView::new(&buf, DType::F32, 0, None).unwrap();
        let arr: ArrayD<f32> = view.to_ndarray().unwrap();
        assert_eq!(arr, array![0.5f32, 1.5, -2.0].into_dyn());
    }
}

#[test]
fn sliced_buffer_keeps_elements() {
    let arr = array![10u16, 20, 30, 40].into_dyn();
    let (buf, dtype) = rawbuf::ByteBuffer::from_ndarray(&arr);

    let tail = buf.slice(Some(-4), None);
    let view = TypedView::new(&tail, dtype, 0, None).unwrap();
    let back: ArrayD<u16> = view.to_ndarray().unwrap();
    assert_eq!(back.as_slice().unwrap(), &[30, 40]);
}

#[test]
fn wrong_element_type() {
    let buf = rawbuf::ByteBuffer::new(4).unwrap();
    let view = TypedView::new(&buf, DType::I32, 0, None).unwrap();
    let err = view.to_ndarray::<u32>().unwrap_err();
    assert_eq!(
        err,
        NdarrayError::DTypeMismatch {
            expected: DType::U32,
            actual: DType::I32
        }
    );
}
