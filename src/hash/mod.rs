//! Hashing utilities

/// Compute a 64-bit content hash of one line.
///
/// Uses Blake3 and truncates to the first 8 bytes. The truncation keeps the
/// table slot math cheap while leaving collisions rare enough that the
/// byte-wise chain comparison almost never runs more than once.
///
/// # Arguments
/// * `bytes` - Line content with the newline terminator already stripped
///
/// # Returns
/// A 64-bit hash; equal inputs always hash equal, so membership checks can
/// filter on the hash before comparing content.
pub fn line_hash(bytes: &[u8]) -> u64 {
    let digest = blake3::hash(bytes);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(line_hash(b"some line"), line_hash(b"some line"));
    }

    #[test]
    fn test_hash_differs_on_content() {
        assert_ne!(line_hash(b"Content A"), line_hash(b"Content B"));
        assert_ne!(line_hash(b"row"), line_hash(b"row\r"));
    }

    #[test]
    fn test_hash_empty_line() {
        // Empty lines are legal records and must hash consistently
        assert_eq!(line_hash(b""), line_hash(b""));
        assert_ne!(line_hash(b""), line_hash(b" "));
    }
}
