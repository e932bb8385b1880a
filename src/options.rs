/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  seed: Option<u64>,
  capacity: usize,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      seed: None,
      capacity: 0,
    }
  }

  /// Set the seed of the level generator.
  ///
  /// Two skiplists built with the same seed and fed the same sequence of
  /// insertions end up with exactly the same level layout, which is mostly
  /// useful for tests and benchmarks.
  ///
  /// The default is `None`, which seeds the generator from OS entropy.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::Options;
  ///
  /// let opts = Options::new().with_seed(Some(42));
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
    self.seed = seed;
    self
  }

  /// Set how many nodes the skiplist reserves room for up front.
  ///
  /// The skiplist grows on demand, so this is only a hint.
  ///
  /// The default is `0`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::Options;
  ///
  /// let opts = Options::new().with_capacity(1024);
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Returns the seed of the level generator.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::Options;
  ///
  /// let opts = Options::new().with_seed(Some(7));
  /// assert_eq!(opts.seed(), Some(7));
  /// ```
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }

  /// Returns the number of nodes reserved up front.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::Options;
  ///
  /// let opts = Options::new().with_capacity(16);
  /// assert_eq!(opts.capacity(), 16);
  /// ```
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }
}
