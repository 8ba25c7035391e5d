#[cfg(test)]
mod tests {
    use crate::buffer::{RandomBuffer, checksum};
    use anyhow::Result;

    #[test]
    fn test_generate_has_requested_len() {
        let buffer = RandomBuffer::generate(1024, Some(7));
        assert_eq!(buffer.len(), 1024);
        assert_eq!(buffer.seed(), Some(7));
    }

    #[test]
    fn test_same_seed_same_contents() {
        let a = RandomBuffer::generate(256, Some(42));
        let b = RandomBuffer::generate(256, Some(42));
        assert_eq!(a, b);
        let c = RandomBuffer::generate(256, Some(43));
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn test_values_span_sign_range() {
        let buffer = RandomBuffer::generate(4096, Some(1));
        assert!(buffer.as_slice().iter().any(|&w| w < 0));
        assert!(buffer.as_slice().iter().any(|&w| w > 0));
    }

    #[test]
    fn test_prefix_bounds() -> Result<()> {
        let buffer = RandomBuffer::from_words(vec![5, 3, 4, 1, 2]);
        assert_eq!(buffer.prefix(3)?, &[5, 3, 4]);
        assert_eq!(buffer.prefix(5)?.len(), 5);
        let err = buffer.prefix(6).unwrap_err();
        assert!(err.to_string().contains("only holds 5"));
        Ok(())
    }

    #[test]
    fn test_checksum_is_order_sensitive() {
        assert_eq!(checksum(&[1, 2, 3]), checksum(&[1, 2, 3]));
        assert_ne!(checksum(&[1, 2, 3]), checksum(&[3, 2, 1]));
        let buffer = RandomBuffer::from_words(vec![1, 2, 3]);
        assert_eq!(buffer.checksum(), checksum(&[1, 2, 3]));
    }
}
