
/// Certifies that spans of an encoded byte buffer are in bounds.
///
/// A [`Reader`] never copies or interprets the buffer: decoders call
/// [`Reader::is_valid_offset`] before overlaying a typed view onto a span,
/// or use [`Reader::slice_at`] to obtain the span with the check applied.
/// The buffer must not be mutated for the reader's lifetime, which the
/// shared borrow enforces.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    memory: &'a [u8],
    size: u64,
}

impl<'a> Reader<'a> {
    /// Returns a new [`Reader`] over the given buffer.
    ///
    /// The buffer is expected to contain, and begin with, an encoded
    /// structure. An empty buffer yields a reader which rejects every
    /// non-empty span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebuf::Reader;
    /// let buffer = [0u8; 10];
    /// let reader = Reader::new(&buffer);
    /// assert!(reader.is_valid_offset(6, 4));
    /// assert!(!reader.is_valid_offset(7, 4));
    /// ```
    #[must_use]
    pub fn new(memory: &'a [u8]) -> Self {
        Self {
            memory,
            size: memory.len() as u64,
        }
    }

    /// Returns `true` if the span `[offset, offset + size)` lies within
    /// the buffer.
    ///
    /// This is the single safety gate for zero-copy decoding: every decode
    /// operation must see `true` here before interpreting the span as a
    /// typed value. The sum is computed in 64 bits, so it cannot wrap for
    /// any pair of arguments.
    #[must_use]
    pub fn is_valid_offset(&self, offset: u32, size: u32) -> bool {
        self.size >= u64::from(offset) + u64::from(size)
    }

    /// Returns the span `[offset, offset + size)` of the buffer, or `None`
    /// if it is out of bounds.
    ///
    /// Equivalent to checking [`Reader::is_valid_offset`] and slicing the
    /// buffer directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebuf::Reader;
    /// let buffer = [1u8, 2, 3, 4];
    /// let reader = Reader::new(&buffer);
    /// assert_eq!(reader.slice_at(1, 2), Some(&[2u8, 3][..]));
    /// assert_eq!(reader.slice_at(3, 2), None);
    /// ```
    #[must_use]
    pub fn slice_at(&self, offset: u32, size: u32) -> Option<&'a [u8]> {
        if !self.is_valid_offset(offset, size) {
            return None;
        }
        let start = offset as usize;
        self.memory.get(start..start + size as usize)
    }

    /// Returns the whole underlying buffer.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.memory
    }

    /// Returns the length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }
}
