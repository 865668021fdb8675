//! Line record type

/// One newline-delimited unit of a text file.
///
/// Lines are compared byte-exactly: no trimming, no encoding validation,
/// no normalization. A carriage return before the newline is content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(Box<[u8]>);

impl Line {
    /// Raw line content with the newline terminator already stripped
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the line content in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length line (an empty record inside a file)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Line(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Line(bytes.to_vec().into_boxed_slice())
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line(s.as_bytes().to_vec().into_boxed_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_exact_equality() {
        let a = Line::from("hello");
        let b = Line::from("hello");
        let c = Line::from("hello ");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_carriage_return_is_content() {
        let unix = Line::from("row");
        let dos = Line::from("row\r");
        assert_ne!(unix, dos);
    }

    #[test]
    fn test_empty_line() {
        let line = Line::from(Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
        assert_eq!(line.as_bytes(), b"");
    }
}
