use thiserror::Error;

/// Errors raised by display state operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptionError {
    #[error("preset index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = CaptionError::OutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "preset index 7 out of range (0..5)");
    }
}
