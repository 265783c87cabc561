use thiserror::Error;


/// A specialized result type for `wirebuf` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error associated with `wirebuf` operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fixed-capacity writer cannot reallocate to satisfy an allocation.
    #[error("out of memory, a fixed writer can't reallocate")]
    OutOfMemory,
    /// A checked write would exceed the allocated region of the buffer.
    #[error("writing exceeds the allocated region")]
    BufferOverflow,
}
