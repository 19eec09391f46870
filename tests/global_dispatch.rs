//! Process-wide dispatcher behavior.
//!
//! Kept in its own test binary with a single test, since the global backend
//! can only be fixed once per process.

use rawbuf::{Backend, Buffer, DType, TypedView, Value};

#[test]
fn first_init_wins() {
    assert_eq!(rawbuf::init(Backend::Polyfill), Backend::Polyfill);
    assert_eq!(rawbuf::init(Backend::Native), Backend::Polyfill);
    assert_eq!(rawbuf::backend(), Backend::Polyfill);

    let buf = rawbuf::make_buffer(&Value::from(10)).unwrap();
    assert!(matches!(buf, Buffer::Polyfill(_)));
    assert_eq!(buf.slice(Some(2), None).byte_length(), 8);

    let err = rawbuf::make_buffer(&Value::from("10")).unwrap_err();
    assert!(err.is_type_error());

    let view = TypedView::new(&buf, DType::I32, 0, Some(2)).unwrap();
    assert!(rawbuf::is_view(&Value::View(view.into())));
    assert!(!rawbuf::is_view(&Value::List(vec![])));
}
