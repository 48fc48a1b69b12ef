#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Segment index must have at least one leaf")]
    Empty,

    #[error("Try to access position #{position} but only {len} available")]
    OutOfRange { position: usize, len: usize },

    #[error("Range start {low} is greater than range end {high}")]
    InvalidRange { low: usize, high: usize },

    #[error("Range is empty")]
    EmptyRange,

    #[error("Value at position #{position} is NaN")]
    NotANumber { position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::OutOfRange {
            position: 7,
            len: 4,
        };
        assert_eq!(err.to_string(), "Try to access position #7 but only 4 available");

        let err = Error::InvalidRange { low: 3, high: 1 };
        assert_eq!(err.to_string(), "Range start 3 is greater than range end 1");
    }
}
