use rand::Rng;

/// Shortest duration any timed phase may have, in seconds.
/// Keeps every tick making progress.
pub const MIN_PHASE_SECS: f32 = 0.001;

/// Longest burst interval or burst duration, in seconds
pub const MAX_BURST_SECS: f32 = 1000.0;

/// Longest single lit or dimmed blink phase, in seconds
pub const MAX_BLINK_SECS: f32 = 10.0;

/// Inclusive `[min, max]` range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always samples `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if !self.is_finite() || self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    /// Swaps NaN bounds for the matching bound of `fallback`
    fn or_else_nan(self, fallback: Self) -> Self {
        let pick = |value: f32, fallback: f32| if value.is_nan() { fallback } else { value };
        Self {
            min: pick(self.min, fallback.min),
            max: pick(self.max, fallback.max),
        }
    }

    /// Raises `max` to `min` when the bounds are inverted
    fn ordered(self) -> Self {
        Self {
            min: self.min,
            max: self.max.max(self.min),
        }
    }

    fn clamped(self, low: f32, high: f32) -> Self {
        Self {
            min: self.min.clamp(low, high),
            max: self.max.clamp(low, high),
        }
    }

    /// NaN replaced, bounds ordered, then clamped to `[low, high]`
    fn corrected(self, fallback: Self, low: f32, high: f32) -> Self {
        self.or_else_nan(fallback).ordered().clamped(low, high)
    }
}

/// Timing and intensity parameters of a blinker.
/// All durations are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkConfig {
    /// Steady time between two bursts
    pub burst_interval: FloatRange,
    /// Total length of one burst
    pub burst_duration: FloatRange,
    /// Time at full intensity within a burst
    pub blink_on_duration: FloatRange,
    /// Time at reduced intensity within a burst
    pub blink_off_duration: FloatRange,
    /// Fraction of the original intensity used while dimmed (0 = dark)
    pub dim_factor: FloatRange,
    /// Put the light back to its pre-blink intensity when blinking halts
    pub restore_on_stop: bool,
    /// Whether blinking behavior is active when the blinker is created
    pub starts_active: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            burst_interval: FloatRange::new(5.0, 30.0),
            burst_duration: FloatRange::new(1.0, 5.0),
            blink_on_duration: FloatRange::new(0.01, 0.2),
            blink_off_duration: FloatRange::new(0.05, 0.5),
            dim_factor: FloatRange::new(0.0, 0.2),
            restore_on_stop: true,
            starts_active: false,
        }
    }
}

impl BlinkConfig {
    /// Corrects the configuration instead of rejecting it: NaN bounds fall
    /// back to the defaults, inverted ranges get `max` raised to `min`,
    /// durations are clamped to `[MIN_PHASE_SECS, MAX_BURST_SECS]` (blink
    /// phases to `MAX_BLINK_SECS`) and the dim factor to `[0, 1]`.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        let config = Self {
            burst_interval: self
                .burst_interval
                .corrected(defaults.burst_interval, MIN_PHASE_SECS, MAX_BURST_SECS),
            burst_duration: self
                .burst_duration
                .corrected(defaults.burst_duration, MIN_PHASE_SECS, MAX_BURST_SECS),
            blink_on_duration: self
                .blink_on_duration
                .corrected(defaults.blink_on_duration, MIN_PHASE_SECS, MAX_BLINK_SECS),
            blink_off_duration: self
                .blink_off_duration
                .corrected(defaults.blink_off_duration, MIN_PHASE_SECS, MAX_BLINK_SECS),
            dim_factor: self.dim_factor.corrected(defaults.dim_factor, 0.0, 1.0),
            ..self
        };
        debug_assert!(config.is_valid(), "validated config out of range: {:?}", config);
        config
    }

    pub fn ranges(&self) -> [FloatRange; 5] {
        [
            self.burst_interval,
            self.burst_duration,
            self.blink_on_duration,
            self.blink_off_duration,
            self.dim_factor,
        ]
    }

    /// Whether every range is finite, ordered and within its limits.
    /// Always true for the output of [`validated`](BlinkConfig::validated).
    pub fn is_valid(&self) -> bool {
        let within = |range: FloatRange, low: f32, high: f32| {
            range.is_finite() && low <= range.min && range.min <= range.max && range.max <= high
        };
        within(self.burst_interval, MIN_PHASE_SECS, MAX_BURST_SECS)
            && within(self.burst_duration, MIN_PHASE_SECS, MAX_BURST_SECS)
            && within(self.blink_on_duration, MIN_PHASE_SECS, MAX_BLINK_SECS)
            && within(self.blink_off_duration, MIN_PHASE_SECS, MAX_BLINK_SECS)
            && within(self.dim_factor, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_is_valid() {
        let config = BlinkConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.validated(), config);
        assert!(config.restore_on_stop);
        assert!(!config.starts_active);
    }

    #[test]
    fn validated_raises_inverted_max_to_min() {
        let config = BlinkConfig {
            burst_interval: FloatRange::new(10.0, 2.0),
            burst_duration: FloatRange::new(3.0, 1.0),
            blink_on_duration: FloatRange::new(0.3, 0.1),
            blink_off_duration: FloatRange::new(0.6, 0.05),
            dim_factor: FloatRange::new(0.5, 0.1),
            ..Default::default()
        }
        .validated();

        assert_eq!(config.burst_interval, FloatRange::fixed(10.0));
        assert_eq!(config.burst_duration, FloatRange::fixed(3.0));
        assert_eq!(config.blink_on_duration, FloatRange::fixed(0.3));
        assert_eq!(config.blink_off_duration, FloatRange::fixed(0.6));
        assert_eq!(config.dim_factor, FloatRange::fixed(0.5));
        assert!(config.is_valid());
    }

    #[test]
    fn validated_keeps_every_range_ordered() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut range = || {
                FloatRange::new(rng.gen_range(-5.0..50.0), rng.gen_range(-5.0..50.0))
            };
            let config = BlinkConfig {
                burst_interval: range(),
                burst_duration: range(),
                blink_on_duration: range(),
                blink_off_duration: range(),
                dim_factor: range(),
                ..Default::default()
            }
            .validated();

            for range in config.ranges() {
                assert!(range.min <= range.max, "inverted range {:?}", range);
            }
            assert!(config.is_valid());
        }
    }

    #[test]
    fn validated_clamps_dim_factor_to_unit_interval() {
        let config = BlinkConfig {
            dim_factor: FloatRange::new(1.5, 0.3),
            ..Default::default()
        }
        .validated();
        assert_eq!(config.dim_factor, FloatRange::fixed(1.0));

        let config = BlinkConfig {
            dim_factor: FloatRange::new(-0.4, 2.0),
            ..Default::default()
        }
        .validated();
        assert_eq!(config.dim_factor, FloatRange::new(0.0, 1.0));
    }

    #[test]
    fn validated_floors_durations() {
        let config = BlinkConfig {
            blink_on_duration: FloatRange::new(0.0, 0.0),
            burst_interval: FloatRange::new(-1.0, 0.5),
            ..Default::default()
        }
        .validated();
        assert_eq!(config.blink_on_duration, FloatRange::fixed(MIN_PHASE_SECS));
        assert_eq!(config.burst_interval, FloatRange::new(MIN_PHASE_SECS, 0.5));
    }

    #[test]
    fn validated_clamps_durations_to_upper_limits() {
        let config = BlinkConfig {
            burst_interval: FloatRange::new(500.0, 5000.0),
            blink_off_duration: FloatRange::new(20.0, 40.0),
            ..Default::default()
        }
        .validated();
        assert_eq!(config.burst_interval, FloatRange::new(500.0, MAX_BURST_SECS));
        assert_eq!(config.blink_off_duration, FloatRange::fixed(MAX_BLINK_SECS));
        assert!(config.is_valid());
    }

    #[test]
    fn validated_replaces_nan_bounds_with_defaults() {
        let defaults = BlinkConfig::default();
        let config = BlinkConfig {
            burst_interval: FloatRange::new(f32::NAN, 10.0),
            burst_duration: FloatRange::new(2.0, f32::NAN),
            blink_on_duration: FloatRange::fixed(f32::NAN),
            blink_off_duration: FloatRange::new(f32::NAN, 0.3),
            dim_factor: FloatRange::new(f32::NAN, 0.2),
            ..Default::default()
        }
        .validated();

        assert_eq!(config.burst_interval, FloatRange::new(defaults.burst_interval.min, 10.0));
        assert_eq!(config.burst_duration, FloatRange::new(2.0, defaults.burst_duration.max));
        assert_eq!(config.blink_on_duration, defaults.blink_on_duration);
        assert_eq!(config.blink_off_duration, FloatRange::new(defaults.blink_off_duration.min, 0.3));
        assert_eq!(config.dim_factor, FloatRange::new(0.0, 0.2));
        assert!(config.is_valid());
    }

    #[test]
    fn validated_clamps_infinite_bounds() {
        let config = BlinkConfig {
            burst_interval: FloatRange::new(1.0, f32::INFINITY),
            burst_duration: FloatRange::new(f32::NEG_INFINITY, 2.0),
            blink_on_duration: FloatRange::fixed(f32::INFINITY),
            blink_off_duration: FloatRange::new(f32::NEG_INFINITY, f32::INFINITY),
            dim_factor: FloatRange::new(f32::NEG_INFINITY, f32::INFINITY),
            ..Default::default()
        }
        .validated();

        assert_eq!(config.burst_interval, FloatRange::new(1.0, MAX_BURST_SECS));
        assert_eq!(config.burst_duration, FloatRange::new(MIN_PHASE_SECS, 2.0));
        assert_eq!(config.blink_on_duration, FloatRange::fixed(MAX_BLINK_SECS));
        assert_eq!(
            config.blink_off_duration,
            FloatRange::new(MIN_PHASE_SECS, MAX_BLINK_SECS)
        );
        assert_eq!(config.dim_factor, FloatRange::new(0.0, 1.0));
        assert!(config.is_valid());
    }

    #[test]
    fn validated_non_finite_config_samples_without_panicking() {
        let config = BlinkConfig {
            burst_interval: FloatRange::new(1.0, f32::INFINITY),
            dim_factor: FloatRange::new(f32::NAN, 0.2),
            ..Default::default()
        }
        .validated();
        let mut rng = StdRng::seed_from_u64(13);
        for range in config.ranges() {
            for _ in 0..20 {
                assert!(range.contains(range.sample(&mut rng)));
            }
        }
    }

    #[test]
    fn raw_non_finite_config_is_not_valid() {
        let config = BlinkConfig {
            dim_factor: FloatRange::new(f32::NAN, 0.2),
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn sample_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = FloatRange::new(0.05, 0.5);
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn fixed_range_always_samples_its_value() {
        let mut rng = StdRng::seed_from_u64(5);
        let range = FloatRange::fixed(1.0);
        for _ in 0..10 {
            assert_eq!(range.sample(&mut rng), 1.0);
        }
    }
}
