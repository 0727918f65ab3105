use serde::{Deserialize, Serialize};

/// Default number of sampled values per column.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;
/// Default RNG seed for random sampling.
pub const DEFAULT_SEED: u64 = 42;
/// Default display width of the column-name field.
pub const DEFAULT_NAME_WIDTH: usize = 25;
/// Default maximum characters per previewed value before truncation.
pub const DEFAULT_MAX_VALUE_CHARS: usize = 50;

/// Options controlling a glimpse report.
///
/// Use [`Default`] for the common case and struct-update syntax for the rest:
///
/// ```rust
/// use data_glimpse::glimpse::GlimpseOptions;
///
/// let opts = GlimpseOptions {
///     random: true,
///     ..Default::default()
/// };
/// assert_eq!(opts.sample_size, 5);
/// assert_eq!(opts.seed, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlimpseOptions {
    /// Maximum number of values previewed per column.
    pub sample_size: usize,
    /// Sample rows at random (seeded) instead of taking the first rows.
    pub random: bool,
    /// Seed used when `random` is set.
    pub seed: u64,
    /// Column names are right-padded to this many characters (never truncated).
    pub name_width: usize,
    /// Previewed values longer than this many characters are cut and suffixed with `...`.
    pub max_value_chars: usize,
}

impl Default for GlimpseOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            random: false,
            seed: DEFAULT_SEED,
            name_width: DEFAULT_NAME_WIDTH,
            max_value_chars: DEFAULT_MAX_VALUE_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlimpseOptions;

    #[test]
    fn partial_json_fills_defaults() {
        let opts: GlimpseOptions = serde_json::from_str(r#"{"random": true}"#).unwrap();
        assert!(opts.random);
        assert_eq!(opts.sample_size, 5);
        assert_eq!(opts.seed, 42);
        assert_eq!(opts.name_width, 25);
        assert_eq!(opts.max_value_chars, 50);
    }
}
