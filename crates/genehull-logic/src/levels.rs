//! Vertical sampling levels per station.
//!
//! Each station is sampled at ten Z heights: four below the waterline at
//! fixed fractions of the draft, the waterline itself, and five fixed
//! heights above it. The submerged levels scale with the current draft,
//! so the level list is regenerated per compute call.

/// Draft fractions sampled below the waterline, deepest first.
pub const DRAFT_FRACTIONS: [f64; 4] = [1.0, 0.75, 0.5, 0.25];

/// Fixed heights sampled above the waterline (meters).
pub const ABOVE_WATERLINE: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Number of levels per station.
pub const LEVEL_COUNT: usize = DRAFT_FRACTIONS.len() + 1 + ABOVE_WATERLINE.len();

/// Generate the Z sampling levels for a given draft, keel to deck.
pub fn vertical_levels(tc: f64) -> [f64; LEVEL_COUNT] {
    let mut levels = [0.0; LEVEL_COUNT];
    for (i, fraction) in DRAFT_FRACTIONS.iter().enumerate() {
        levels[i] = -tc * fraction;
    }
    // levels[4] is the waterline (0.0)
    for (i, z) in ABOVE_WATERLINE.iter().enumerate() {
        levels[DRAFT_FRACTIONS.len() + 1 + i] = *z;
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_levels_per_station() {
        assert_eq!(LEVEL_COUNT, 10);
        assert_eq!(vertical_levels(0.37).len(), 10);
    }

    #[test]
    fn submerged_levels_scale_with_draft() {
        let levels = vertical_levels(0.37);
        assert_eq!(levels[0], -0.37);
        assert_eq!(levels[1], -0.37 * 0.75);
        assert_eq!(levels[2], -0.37 * 0.5);
        assert_eq!(levels[3], -0.37 * 0.25);
    }

    #[test]
    fn waterline_and_fixed_levels_do_not_scale() {
        let shallow = vertical_levels(0.1);
        let deep = vertical_levels(1.0);
        assert_eq!(shallow[4], 0.0);
        assert_eq!(deep[4], 0.0);
        assert_eq!(&shallow[5..], &deep[5..]);
        assert_eq!(&shallow[5..], &[0.1, 0.2, 0.3, 0.4, 0.5][..]);
    }

    #[test]
    fn zero_draft_collapses_submerged_levels() {
        let levels = vertical_levels(0.0);
        assert!(levels[..5].iter().all(|&z| z == 0.0));
    }
}
