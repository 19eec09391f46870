//! Element types a typed view may interpret bytes as

/// Element type of a typed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    U8Clamped,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl DType {
    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::U8 | DType::U8Clamped | DType::I8 => 1,
            DType::U16 | DType::I16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }

    /// Host constructor name of a view with this element type
    pub fn view_name(self) -> &'static str {
        match self {
            DType::U8 => "Uint8Array",
            DType::U8Clamped => "Uint8ClampedArray",
            DType::I8 => "Int8Array",
            DType::U16 => "Uint16Array",
            DType::I16 => "Int16Array",
            DType::U32 => "Uint32Array",
            DType::I32 => "Int32Array",
            DType::U64 => "BigUint64Array",
            DType::I64 => "BigInt64Array",
            DType::F32 => "Float32Array",
            DType::F64 => "Float64Array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_sizes() {
        assert_eq!(DType::U8Clamped.element_size(), 1);
        assert_eq!(DType::I16.element_size(), 2);
        assert_eq!(DType::F32.element_size(), 4);
        assert_eq!(DType::I64.element_size(), 8);
        assert_eq!(DType::F64.view_name(), "Float64Array");
    }
}
