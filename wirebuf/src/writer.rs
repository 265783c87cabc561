use super::{Error, Result};

mod tests;

/// Writes encoded data to a byte buffer through bump allocation.
///
/// Encoders reserve trailing space with [`Writer::alloc`], fill it with
/// [`Writer::write_at`], and retrieve the finished encoding with
/// [`Writer::bytes`]. Allocated regions are contiguous and never reused
/// until the writer is [reset](Writer::reset).
///
/// A writer is either growable, owning its storage and extending it on
/// demand, or fixed, borrowing a caller-supplied buffer which is never
/// reallocated. The mode is chosen at construction and cannot change.
pub struct Writer<'a> {
    memory: Memory<'a>,
    len: usize,
}

enum Memory<'a> {
    Growable(Vec<u8>),
    Fixed(&'a mut [u8]),
}

impl<'a> Writer<'a> {
    /// Returns a growable [`Writer`] with the given initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebuf::Writer;
    /// let mut writer = Writer::with_capacity(4);
    /// assert_eq!(writer.alloc(4), Ok(0));
    /// writer.write_at(0, &[1, 2, 3, 4]);
    /// assert_eq!(writer.bytes(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Writer<'static> {
        Writer {
            memory: Memory::Growable(Vec::with_capacity(capacity)),
            len: 0,
        }
    }

    /// Returns a fixed [`Writer`] over the given buffer.
    ///
    /// The buffer's length becomes the writer's capacity, and is never
    /// extended: allocating past it fails with [`Error::OutOfMemory`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebuf::{Error, Writer};
    /// let mut buffer = [0u8; 4];
    /// let mut writer = Writer::fixed(&mut buffer);
    /// assert_eq!(writer.alloc(4), Ok(0));
    /// assert_eq!(writer.alloc(1), Err(Error::OutOfMemory));
    /// ```
    #[must_use]
    pub fn fixed(buffer: &'a mut [u8]) -> Self {
        Self {
            memory: Memory::Fixed(buffer),
            len: 0,
        }
    }

    /// Allocates `n` bytes at the end of the buffer, returning the offset
    /// of the allocated region.
    ///
    /// Offsets from repeated calls are contiguous: a fresh writer returns
    /// `0`, and each call returns the previous length. The new region is
    /// zero-filled in growable mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the writer is fixed and the
    /// allocation exceeds its remaining capacity, in which case the length
    /// and buffer contents are left untouched. A growable writer never
    /// fails.
    pub fn alloc(&mut self, n: usize) -> Result<usize> {
        let offset = self.len;
        let total = offset + n;
        match &mut self.memory {
            Memory::Growable(vec) => vec.resize(total, 0),
            Memory::Fixed(buffer) => {
                if total > buffer.len() {
                    return Err(Error::OutOfMemory);
                }
            }
        }
        self.len = total;
        Ok(offset)
    }

    /// Copies the source slice into the buffer at the given offset.
    ///
    /// This is a raw copy on the encoding hot path: the span must already
    /// have been allocated. Use [`Writer::try_write_at`] when the span is
    /// not known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `offset + src.len()` exceeds the allocated length.
    pub fn write_at(&mut self, offset: usize, src: &[u8]) {
        let end = offset + src.len();
        self.allocated_mut()[offset..end].copy_from_slice(src);
    }

    /// Copies the source slice into the buffer at the given offset,
    /// checking that the destination span was allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferOverflow`] if `offset + src.len()` exceeds
    /// the allocated length, in which case nothing is written.
    pub fn try_write_at(&mut self, offset: usize, src: &[u8]) -> Result<()> {
        let end = offset.checked_add(src.len()).ok_or(Error::BufferOverflow)?;
        self.allocated_mut()
            .get_mut(offset..end)
            .map(|dst| dst.copy_from_slice(src))
            .ok_or(Error::BufferOverflow)
    }

    /// Resets the length to zero, keeping the backing storage and its
    /// capacity for reuse.
    pub fn reset(&mut self) {
        if self.len == 0 {
            return;
        }
        if let Memory::Growable(vec) = &mut self.memory {
            vec.clear();
        }
        self.len = 0;
    }

    /// Returns the encoded bytes written so far.
    ///
    /// The slice is not a copy: it borrows the writer's storage, so the
    /// writer cannot be allocated into or reset while the view is alive.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match &self.memory {
            Memory::Growable(vec) => vec,
            Memory::Fixed(buffer) => &buffer[..self.len],
        }
    }

    /// Returns the current allocated length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been allocated since construction or
    /// the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        match &self.memory {
            Memory::Growable(vec) => vec.capacity(),
            Memory::Fixed(buffer) => buffer.len(),
        }
    }

    /// Returns `true` if the writer never reallocates its storage.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self.memory, Memory::Fixed(_))
    }

    /// The allocated region `[0, len)` of the backing storage.
    fn allocated_mut(&mut self) -> &mut [u8] {
        match &mut self.memory {
            Memory::Growable(vec) => vec,
            Memory::Fixed(buffer) => &mut buffer[..self.len],
        }
    }
}

impl std::fmt::Debug for Writer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("fixed", &self.is_fixed())
            .finish()
    }
}
