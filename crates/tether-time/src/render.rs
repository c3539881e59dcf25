// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Duration Rendering
//!
//! Converts durations into human-readable text such as `1.50ms` or `2.00s`.
//!
//! Rendering is a pure function of the duration and the `RenderConfig`: identical
//! durations always render identically. With `DurationUnit::Auto` the largest unit
//! in which the magnitude is at least one is chosen; durations below one
//! microsecond (including zero) are rendered in nanoseconds.

/// The largest supported number of fractional digits.
pub const MAX_PRECISION: usize = 9;

/// The unit a duration is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DurationUnit {
    /// Pick the largest unit in which the magnitude is at least one.
    #[default]
    Auto,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl DurationUnit {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Seconds => "Seconds",
            Self::Millis => "Millis",
            Self::Micros => "Micros",
            Self::Nanos => "Nanos",
        }
    }

    /// Returns the unit suffix used in rendered text.
    ///
    /// # Panics
    ///
    /// This function will panic if called on `DurationUnit::Auto`.
    #[inline]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "µs",
            Self::Nanos => "ns",
            Self::Auto => panic!("called `DurationUnit::suffix` on `Auto`"),
        }
    }

    /// Returns the number of nanoseconds in one unit.
    ///
    /// # Panics
    ///
    /// This function will panic if called on `DurationUnit::Auto`.
    #[inline]
    pub fn nanos_per_unit(&self) -> u128 {
        match self {
            Self::Seconds => 1_000_000_000,
            Self::Millis => 1_000_000,
            Self::Micros => 1_000,
            Self::Nanos => 1,
            Self::Auto => panic!("called `DurationUnit::nanos_per_unit` on `Auto`"),
        }
    }

    #[inline]
    fn larger(&self) -> Option<DurationUnit> {
        match self {
            Self::Nanos => Some(Self::Micros),
            Self::Micros => Some(Self::Millis),
            Self::Millis => Some(Self::Seconds),
            Self::Seconds | Self::Auto => None,
        }
    }

    /// Resolves `Auto` to a concrete unit for `duration`; concrete units are returned unchanged.
    #[inline]
    pub fn resolve(&self, duration: std::time::Duration) -> DurationUnit {
        match self {
            Self::Auto => {
                let nanos = duration.as_nanos();
                if nanos >= 1_000_000_000 {
                    Self::Seconds
                } else if nanos >= 1_000_000 {
                    Self::Millis
                } else if nanos >= 1_000 {
                    Self::Micros
                } else {
                    Self::Nanos
                }
            }
            unit => *unit,
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatting policy for durations.
///
/// # Examples
///
/// ```rust
/// # use tether_time::render::{render, DurationUnit, RenderConfig};
///
/// let config = RenderConfig::default()
///     .with_unit(DurationUnit::Micros)
///     .with_precision(0);
/// assert_eq!(render(std::time::Duration::from_millis(2), &config), "2000µs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    unit: DurationUnit,
    precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unit: DurationUnit::Auto,
            precision: 2,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration; `precision` is clamped to `MAX_PRECISION`.
    #[inline]
    pub fn new(unit: DurationUnit, precision: usize) -> Self {
        Self {
            unit,
            precision: precision.min(MAX_PRECISION),
        }
    }

    #[inline]
    pub fn with_unit(self, unit: DurationUnit) -> Self {
        Self { unit, ..self }
    }

    /// Sets the number of fractional digits, clamped to `MAX_PRECISION`.
    #[inline]
    pub fn with_precision(self, precision: usize) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            ..self
        }
    }

    #[inline]
    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl std::fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RenderConfig(unit: {}, precision: {})",
            self.unit, self.precision
        )
    }
}

/// Renders `duration` according to `config`.
///
/// With `DurationUnit::Auto`, a magnitude that rounds up to 1000 is promoted to
/// the next larger unit, so `999_999ns` renders as `1.00ms`.
pub fn render(duration: std::time::Duration, config: &RenderConfig) -> String {
    let nanos = duration.as_nanos();
    let precision = config.precision();
    let mut unit = config.unit().resolve(duration);

    loop {
        let (whole, digits) = split(nanos, unit, precision);
        match unit.larger() {
            Some(larger) if config.unit() == DurationUnit::Auto && whole >= 1_000 => {
                unit = larger;
            }
            _ => return format!("{}{}{}", whole, digits, unit.suffix()),
        }
    }
}

/// Splits `nanos` into the whole part in `unit` and the rounded fractional
/// digits (including the decimal point, if any).
fn split(nanos: u128, unit: DurationUnit, precision: usize) -> (u128, String) {
    let per_unit = unit.nanos_per_unit();

    // Split into whole and fractional parts before converting to f64 so that
    // large durations keep their integral digits exact.
    let whole = nanos / per_unit;
    let fraction = (nanos % per_unit) as f64 / per_unit as f64;

    let fraction_text = format!("{:.*}", precision, fraction);
    // Rounding the fraction may carry into the whole part ("1.00").
    match fraction_text.strip_prefix('1') {
        Some(rest) => (whole + 1, rest.to_owned()),
        None => (whole, fraction_text[1..].to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn default_render(duration: Duration) -> String {
        render(duration, &RenderConfig::default())
    }

    #[test]
    fn test_auto_unit_selection() {
        assert_eq!(default_render(Duration::from_nanos(0)), "0.00ns");
        assert_eq!(default_render(Duration::from_nanos(999)), "999.00ns");
        assert_eq!(default_render(Duration::from_nanos(1_000)), "1.00µs");
        assert_eq!(default_render(Duration::from_micros(1_500)), "1.50ms");
        assert_eq!(default_render(Duration::from_millis(2_250)), "2.25s");
        assert_eq!(default_render(Duration::from_secs(3_600)), "3600.00s");
    }

    #[test]
    fn test_fixed_unit() {
        let config = RenderConfig::default().with_unit(DurationUnit::Millis);
        assert_eq!(render(Duration::from_secs(1), &config), "1000.00ms");
        assert_eq!(render(Duration::from_micros(5), &config), "0.01ms");
    }

    #[test]
    fn test_precision_zero_has_no_decimal_point() {
        let config = RenderConfig::default().with_precision(0);
        assert_eq!(render(Duration::from_millis(7), &config), "7ms");
        assert_eq!(render(Duration::from_micros(7_600), &config), "8ms");
    }

    #[test]
    fn test_rounding_carries_into_whole_part() {
        let config = RenderConfig::default().with_unit(DurationUnit::Seconds);
        assert_eq!(render(Duration::from_millis(1_999), &config.with_precision(2)), "2.00s");
        assert_eq!(render(Duration::from_millis(1_999), &config.with_precision(3)), "1.999s");
    }

    #[test]
    fn test_auto_promotes_unit_after_carry() {
        assert_eq!(default_render(Duration::from_nanos(999_994)), "999.99µs");
        assert_eq!(default_render(Duration::from_nanos(999_999)), "1.00ms");
        assert_eq!(default_render(Duration::from_nanos(999_999_999)), "1.00s");
        assert_eq!(default_render(Duration::from_nanos(999_996)), "1.00ms");
    }

    #[test]
    fn test_fixed_unit_is_not_promoted() {
        let config = RenderConfig::default().with_unit(DurationUnit::Micros);
        assert_eq!(render(Duration::from_nanos(999_999), &config), "1000.00µs");
    }

    #[test]
    fn test_precision_is_clamped() {
        let config = RenderConfig::new(DurationUnit::Seconds, 42);
        assert_eq!(config.precision(), MAX_PRECISION);
        assert_eq!(render(Duration::from_nanos(1), &config), "0.000000001s");
    }

    #[test]
    fn test_large_durations_keep_integral_digits() {
        let config = RenderConfig::default().with_unit(DurationUnit::Nanos);
        assert_eq!(
            render(Duration::from_secs(u64::MAX), &config),
            format!("{}.00ns", u64::MAX as u128 * 1_000_000_000)
        );
    }

    #[test]
    fn test_resolve_keeps_concrete_units() {
        assert_eq!(
            DurationUnit::Micros.resolve(Duration::from_secs(10)),
            DurationUnit::Micros
        );
        assert_eq!(
            DurationUnit::Auto.resolve(Duration::from_secs(10)),
            DurationUnit::Seconds
        );
    }

    #[test]
    #[should_panic(expected = "called `DurationUnit::suffix` on `Auto`")]
    fn test_auto_has_no_suffix() {
        let _ = DurationUnit::Auto.suffix();
    }

    #[test]
    fn test_config_display() {
        assert_eq!(
            RenderConfig::default().to_string(),
            "RenderConfig(unit: Auto, precision: 2)"
        );
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(nanos in any::<u64>(), precision in 0usize..12) {
            let config = RenderConfig::default().with_precision(precision);
            let duration = Duration::from_nanos(nanos);
            prop_assert_eq!(render(duration, &config), render(duration, &config));
        }

        #[test]
        fn prop_auto_magnitude_is_below_next_unit(nanos in 1u64..1_000_000_000) {
            let config = RenderConfig::default().with_precision(0);
            let text = render(Duration::from_nanos(nanos), &config);
            let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
            let magnitude: u64 = digits.parse().unwrap();
            prop_assert!(magnitude < 1_000);
        }
    }
}
