use rand::{Rng, distr::Bernoulli, distr::Distribution as _};
use twofold_core::Tile;

/// Relative weights of spawning a 2 or a 4.
///
/// The default is [`TileDistribution::even`]: both values equally likely.
///
/// # Examples
///
/// ```
/// use twofold_spawn::TileDistribution;
///
/// let classic = TileDistribution::new(9, 1).unwrap();
/// assert_eq!(classic, TileDistribution::classic());
/// assert!((classic.four_probability() - 0.1).abs() < 1e-9);
///
/// assert!(TileDistribution::new(0, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TileDistribution {
    two_weight: u32,
    four_weight: u32,
    four: Bernoulli,
}

/// Errors returned when building a [`TileDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DistributionError {
    /// Both weights are zero.
    #[display("tile weights must not both be zero")]
    ZeroWeight,
    /// The weights do not fit in a `u32` when summed.
    #[display("tile weights overflow")]
    Overflow,
}

impl TileDistribution {
    /// Creates a distribution from relative weights for 2 and 4.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::ZeroWeight`] if both weights are zero and
    /// [`DistributionError::Overflow`] if their sum exceeds `u32::MAX`.
    pub fn new(two_weight: u32, four_weight: u32) -> Result<Self, DistributionError> {
        let total = two_weight
            .checked_add(four_weight)
            .ok_or(DistributionError::Overflow)?;
        let four =
            Bernoulli::from_ratio(four_weight, total).map_err(|_| DistributionError::ZeroWeight)?;
        Ok(Self {
            two_weight,
            four_weight,
            four,
        })
    }

    /// 2 and 4 with probability 1/2 each.
    #[must_use]
    pub fn even() -> Self {
        Self::new(1, 1).expect("1:1 is a valid ratio")
    }

    /// 2 with probability 9/10 and 4 with probability 1/10.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(9, 1).expect("9:1 is a valid ratio")
    }

    /// Returns the weight of 2.
    #[must_use]
    pub fn two_weight(&self) -> u32 {
        self.two_weight
    }

    /// Returns the weight of 4.
    #[must_use]
    pub fn four_weight(&self) -> u32 {
        self.four_weight
    }

    /// Returns the probability that a spawned tile is a 4.
    #[must_use]
    pub fn four_probability(&self) -> f64 {
        f64::from(self.four_weight) / (f64::from(self.two_weight) + f64::from(self.four_weight))
    }

    /// Draws a tile value.
    pub fn sample<R>(&self, rng: &mut R) -> Tile
    where
        R: Rng + ?Sized,
    {
        if self.four.sample(rng) {
            Tile::FOUR
        } else {
            Tile::TWO
        }
    }
}

impl Default for TileDistribution {
    fn default() -> Self {
        Self::even()
    }
}

impl PartialEq for TileDistribution {
    fn eq(&self, other: &Self) -> bool {
        // Compare ratios, so 2:2 equals 1:1.
        u64::from(self.two_weight) * u64::from(other.four_weight)
            == u64::from(self.four_weight) * u64::from(other.two_weight)
    }
}

impl Eq for TileDistribution {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::SpawnRng;

    fn four_ratio(distribution: &TileDistribution, trials: u32) -> f64 {
        let mut rng = SpawnRng::seed_from_u64(7);
        let fours = (0..trials)
            .filter(|_| distribution.sample(&mut rng) == Tile::FOUR)
            .count();
        #[expect(clippy::cast_precision_loss)]
        let fours = fours as f64;
        fours / f64::from(trials)
    }

    #[test]
    fn test_even_is_default() {
        assert_eq!(TileDistribution::default(), TileDistribution::even());
        assert_eq!(TileDistribution::new(3, 3).unwrap(), TileDistribution::even());
        assert_ne!(TileDistribution::classic(), TileDistribution::even());
        assert!((TileDistribution::even().four_probability() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_weights_are_kept_as_given() {
        let distribution = TileDistribution::new(6, 2).unwrap();
        assert_eq!(distribution.two_weight(), 6);
        assert_eq!(distribution.four_weight(), 2);
        assert!((distribution.four_probability() - 0.25).abs() < 1e-9);

        let classic = TileDistribution::classic();
        assert_eq!((classic.two_weight(), classic.four_weight()), (9, 1));
    }

    #[test]
    fn test_rejects_invalid_weights() {
        assert_eq!(
            TileDistribution::new(0, 0),
            Err(DistributionError::ZeroWeight)
        );
        assert_eq!(
            TileDistribution::new(u32::MAX, 1),
            Err(DistributionError::Overflow)
        );
    }

    #[test]
    fn test_degenerate_weights() {
        let mut rng = SpawnRng::seed_from_u64(1);
        let only_two = TileDistribution::new(1, 0).unwrap();
        let only_four = TileDistribution::new(0, 1).unwrap();
        for _ in 0..100 {
            assert_eq!(only_two.sample(&mut rng), Tile::TWO);
            assert_eq!(only_four.sample(&mut rng), Tile::FOUR);
        }
    }

    #[test]
    fn test_sample_frequencies() {
        let even = four_ratio(&TileDistribution::even(), 20_000);
        assert!((0.47..0.53).contains(&even), "even ratio {even}");

        let classic = four_ratio(&TileDistribution::classic(), 20_000);
        assert!((0.08..0.12).contains(&classic), "classic ratio {classic}");
    }
}
