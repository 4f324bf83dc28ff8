//! Physical distance between frets.

/// `ln(2) / 12`: decay of fret spacing per semitone.
const FRET_DECAY: f64 = 0.057762265046662105;
/// Fret 0 → infinity distance in units of `a`.
const FRET_SCALE: f64 = 18.876616839465076;

/// Distance between the `m`-th and the `n`-th fret.
///
/// `a` is the first fret width, result is in the same unit. Negative when
/// `n` is closer to the nut than `m`. Fret indices are not validated.
///
/// ```
/// # use fretboard_theory::fret::fret_distance;
/// let octave = fret_distance(38.0, 0, 12);
/// let rest = fret_distance(38.0, 12, 24);
/// assert!((octave - 2.0 * rest).abs() < 1e-9);
/// assert_eq!(fret_distance(38.0, 5, 5), 0.0);
/// ```
pub fn fret_distance(a: f64, m: i32, n: i32) -> f64 {
    -FRET_SCALE
        * a
        * ((-FRET_DECAY * n as f64).exp() - (-FRET_DECAY * m as f64).exp())
}
