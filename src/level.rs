use rand::{rngs::SmallRng, RngCore, SeedableRng};

/// Draws node levels from a geometric distribution with `p = 1/2`.
///
/// Level `L` is drawn with probability `(1/2)^(L + 1)`: level `0` for half of
/// the nodes, level `1` for a quarter, and so on. Every [`SkipList`] owns its
/// own generator, so two lists never share random state.
///
/// [`SkipList`]: crate::SkipList
#[derive(Debug, Clone)]
pub struct LevelGenerator<R = SmallRng> {
  rng: R,
}

impl Default for LevelGenerator<SmallRng> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl LevelGenerator<SmallRng> {
  /// Creates a generator seeded from OS entropy.
  #[inline]
  pub fn new() -> Self {
    Self {
      rng: SmallRng::from_os_rng(),
    }
  }

  /// Creates a deterministic generator from `seed`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklite::LevelGenerator;
  ///
  /// let mut a = LevelGenerator::with_seed(1);
  /// let mut b = LevelGenerator::with_seed(1);
  /// assert_eq!(a.random_level(), b.random_level());
  /// ```
  #[inline]
  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: SmallRng::seed_from_u64(seed),
    }
  }
}

impl<R> LevelGenerator<R> {
  /// Creates a generator backed by the given random source.
  #[inline]
  pub const fn from_rng(rng: R) -> Self {
    Self { rng }
  }

  /// Consumes the generator, returning the underlying random source.
  #[inline]
  pub fn into_inner(self) -> R {
    self.rng
  }
}

impl<R: RngCore> LevelGenerator<R> {
  /// Returns a random level.
  ///
  /// Each random bit is one coin flip, a set bit meaning "go one level up".
  /// The level is the number of trailing ones; a word made only of ones
  /// carries the count over into the next word, so the distribution is never
  /// truncated.
  pub fn random_level(&mut self) -> usize {
    let mut level = 0;
    loop {
      let flips = self.rng.next_u64().trailing_ones() as usize;
      level += flips;
      if flips < u64::BITS as usize {
        return level;
      }
    }
  }
}
