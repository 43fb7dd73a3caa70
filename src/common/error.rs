use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    #[error("data too long: {len} digits exceed the capacity of {capacity}")]
    DataTooLong { len: usize, capacity: usize },
    #[error("invalid error correction level: {0}")]
    InvalidECLevel(String),
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;

    #[test]
    fn test_display() {
        let err = QRError::DataTooLong { len: 42, capacity: 41 };
        assert_eq!(err.to_string(), "data too long: 42 digits exceed the capacity of 41");
        let err = QRError::InvalidECLevel("Q".into());
        assert_eq!(err.to_string(), "invalid error correction level: Q");
    }
}
