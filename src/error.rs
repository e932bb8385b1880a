/// Error type for the [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  /// Indicates that a level-indexed accessor was called with a level above the
  /// current maximum level of the skiplist.
  LevelOutOfRange {
    /// The requested level.
    level: usize,
    /// The current maximum level, `None` if no node has ever been linked.
    max_level: Option<usize>,
  },
}

impl Error {
  #[inline]
  pub(crate) const fn level_out_of_range(level: usize, max_level: Option<usize>) -> Self {
    Self::LevelOutOfRange { level, max_level }
  }
}

impl core::fmt::Display for Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::LevelOutOfRange {
        level,
        max_level: Some(max),
      } => write!(f, "level {level} out of range {max}"),
      Self::LevelOutOfRange {
        level,
        max_level: None,
      } => write!(f, "level {level} out of range, the skiplist has no levels"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
