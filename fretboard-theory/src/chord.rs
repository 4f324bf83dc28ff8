//! Chords as 12-bit interval sets.
//!
//! Bit `i` of the mask is set if the chord holds interval `i` above its
//! root. Generic (root-relative) masks become concrete by [transpose]:
//! after it bit `i` means pitch class `i` sounds.
//!
//! # Example
//!
//! ```
//! use fretboard_theory::chord::{note_in_chord, transpose, GenericChord};
//!
//! let major = GenericChord::by_name("Major").unwrap();
//! assert_eq!(major.mask, 0b000010010001); // C E G
//! let d_major = transpose(major.mask, 2); // D F# A
//! assert!(note_in_chord(6, d_major));
//! assert!(!note_in_chord(5, d_major));
//! assert_eq!(d_major, major.in_key(2));
//! ```

use crate::{
    pitch::SEMITONES,
    tables::{CHORD_NAMES, GENERIC_CHORDS},
};

pub type ChordMask = u16;

/// All twelve interval bits turned on.
pub const CHORD_MASK_BITS: ChordMask = 0xFFF;

/// Rotate low 12 bits of chord mask left by `key` semitones.
///
/// Bits shifted above the 11th wrap to the low end, bits above the 11th in
/// the input are dropped. Key is taken modulo 12, so key 12 is the same as
/// key 0, which returns the mask unchanged.
pub fn transpose(chord_mask: ChordMask, key: u8) -> ChordMask {
    let mask = chord_mask & CHORD_MASK_BITS;
    let key = key % SEMITONES as u8;
    if key == 0 {
        return mask;
    }
    ((mask << key) & CHORD_MASK_BITS) | (mask >> (SEMITONES as u8 - key))
}

/// True if pitch class of `pitch` is in the chord.
///
/// `pitch` can be either pitch class or note id, negative values included.
pub fn note_in_chord(pitch: i32, chord_mask: ChordMask) -> bool {
    chord_mask & (1 << pitch.rem_euclid(SEMITONES)) != 0
}

/// Pitch classes of the chord in ascending order.
pub fn chord_pitch_classes(
    chord_mask: ChordMask,
) -> impl Iterator<Item = u8> {
    (0..SEMITONES as u8).filter(move |pc| chord_mask & (1 << pc) != 0)
}

/// Entry of the generic chords catalogue.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GenericChord {
    pub name: &'static str,
    pub mask: ChordMask,
}
impl GenericChord {
    /// Whole catalogue in its fixed order, sentinel `"-"` chord first.
    pub fn all() -> impl Iterator<Item = Self> {
        CHORD_NAMES
            .iter()
            .zip(GENERIC_CHORDS.iter())
            .map(|(&name, &mask)| Self { name, mask })
    }
    /// First catalogue entry with the given display name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::all().find(|chord| chord.name == name)
    }
    pub fn in_key(&self, key: u8) -> ChordMask {
        transpose(self.mask, key)
    }
}
