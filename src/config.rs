use crate::Predicate;

/// Settings of a [`PlanarGraph`](crate::data::PlanarGraph).
///
/// ```rust
/// # use incremental_hull::{Config, Predicate};
/// let config = Config::default()
///   .with_predicate(Predicate::Fast)
///   .with_validation(false);
/// assert_eq!(config.predicate, Predicate::Fast);
/// assert!(!config.validate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
  /// How orientation tests are evaluated.
  pub predicate: Predicate,
  /// Run the full [`PlanarGraph::validate`](crate::data::PlanarGraph::validate)
  /// check after every mutation. Failures panic in debug builds only.
  pub validate: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      predicate: Predicate::default(),
      validate: cfg!(debug_assertions),
    }
  }
}

impl Config {
  #[must_use]
  pub const fn with_predicate(mut self, predicate: Predicate) -> Self {
    self.predicate = predicate;
    self
  }

  #[must_use]
  pub const fn with_validation(mut self, validate: bool) -> Self {
    self.validate = validate;
    self
  }
}
