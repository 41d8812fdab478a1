// File: crates/scope-core/src/scale.rs
// Summary: Integer scale levels on the 1-2-10 ladder used for trace zoom.

/// Zoom step. Level 0 is unit scale; each pair of levels is a decade:
/// ..., -2 => 0.1, -1 => 0.2, 0 => 1, 1 => 2, 2 => 10, 3 => 20, ...
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleLevel(pub i32);

impl ScaleLevel {
    pub fn factor(self) -> f64 { scale_factor(self.0) }
    /// One level up (zoom in), saturating.
    pub fn up(self) -> Self { Self(self.0.saturating_add(1)) }
    /// One level down (zoom out), saturating.
    pub fn down(self) -> Self { Self(self.0.saturating_sub(1)) }
}

impl From<i32> for ScaleLevel {
    fn from(v: i32) -> Self { Self(v) }
}

/// Multiplier for `level`: `10^(level div 2)`, doubled for odd levels.
pub fn scale_factor(level: i32) -> f64 {
    let decade = level.div_euclid(2);
    let odd = level.rem_euclid(2) == 1;
    let base = 10f64.powi(decade);
    if odd { base * 2.0 } else { base }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_matches_one_two_ten() {
        assert_eq!(scale_factor(0), 1.0);
        assert_eq!(scale_factor(1), 2.0);
        assert_eq!(scale_factor(2), 10.0);
        assert_eq!(scale_factor(3), 20.0);
        assert!((scale_factor(-1) - 0.2).abs() < 1e-12);
        assert!((scale_factor(-2) - 0.1).abs() < 1e-12);
        assert!((scale_factor(-3) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn steps_saturate() {
        assert_eq!(ScaleLevel(i32::MAX).up(), ScaleLevel(i32::MAX));
        assert_eq!(ScaleLevel(i32::MIN).down(), ScaleLevel(i32::MIN));
        assert_eq!(ScaleLevel(0).up().up().down(), ScaleLevel(1));
    }
}
