//! Default instrument setup and fixed lookup tables.
//!
//! All lengths are in millimeters. Per-guitar arrays are indexed in the
//! [GuitarType] order: Acoustic, Classical, Electric.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{chord::ChordMask, pitch::NoteId};

pub const DEFAULT_SCALE_LENGTH: [f64; 3] = [620.0, 660.0, 630.0];
pub const DEFAULT_FIRST_FRET_WIDTH: [f64; 3] = [38.0, 36.0, 34.0];
pub const DEFAULT_BRIDGE_SPACING: [f64; 3] = [58.7375, 56.0, 52.0];
pub const DEFAULT_NUT_SPACING: [f64; 3] = [44.45, 48.0, 46.0];
pub const GUITAR_TYPE_NAMES: [&str; 3] = ["Acoustic", "Classical", "Electric"];

// 1-2, 1-3, 1-4, 2-3, 2-4, 3-4
pub const DEFAULT_MAX_FINGER_DISTANCE: [f64; 6] =
    [80.0, 95.0, 110.0, 52.0, 69.0, 47.0];
pub const DEFAULT_MIN_FINGER_DISTANCE: [f64; 6] =
    [5.0, 15.0, 25.0, 6.0, 12.0, 8.5];
/// Maximum distance between any two fingers.
pub const MAX_FINGER_SPAN: f64 = 110.0;

pub const STANDARD: [NoteId; 6] = [40, 45, 50, 55, 59, 64];
pub const DROP_D: [NoteId; 6] = [38, 45, 50, 55, 59, 64];
pub const BARITONE: [NoteId; 6] = [35, 40, 45, 50, 54, 59];
pub const STANDARD_7: [NoteId; 7] = [35, 40, 45, 50, 55, 59, 64];
pub const STANDARD_8: [NoteId; 8] = [28, 35, 40, 45, 50, 55, 59, 64];

/// Root-relative chords, to be shifted to a key by
/// [transpose](crate::chord::transpose).
///
/// Bit 0 is C, bit 1 is C#/Db, ..., bit 11 is B. Aligned with
/// [CHORD_NAMES].
pub const GENERIC_CHORDS: [ChordMask; 39] = [
    0,    // Empty chord
    657,  // 6th chord
    517,  // 6th (no 5th)
    533,  // 6/9
    273,  // Augmented
    73,   // Diminished
    521,  // Diminished 7
    585,  // Diminished 7 + flat 5th
    145,  // Major
    17,   // Major 3rd
    2065, // Major 7
    2193, // Major 7 + 5th
    2069, // Major 9th
    2197, // Major 9 + 5th
    149,  // Major Add 9
    1041, // Major Dominant 7th
    1169, // Major Dominant 7th + 5th
    1105, // Major 7b5
    1297, // Major 7/5
    1045, // Major 9th
    1043, // Major 7b9
    1049, // Major 7/9
    1553, // Major 13th
    137,  // Minor
    265,  // Minor 6th
    393,  // Minor 6th + 5th
    141,  // Minor 9th
    169,  // Minor 11th
    393,  // Minor 13th
    397,  // Minor 13th + 9th
    1033, // Minor 7th
    1161, // Minor 7th + 5th
    1097, // Minor 7b5
    1289, // Minor 7/5
    1037, // Minor 9
    1035, // Minor 7b9
    129,  // Power chord
    161,  // Sus
    133,  // Sus2
];

pub const CHORD_NAMES: [&str; 39] = [
    "-",
    "6th chord",
    "6th (no 5th)",
    "6/9",
    "Augmented",
    "Diminished",
    "Diminished 7",
    "Diminished 7 + flat 5th",
    "Major",
    "Major 3rd",
    "Major 7",
    "Major 7 + 5th",
    "Major 9th",
    "Major 9 + 5th",
    "Major Add 9",
    "Major Dominant 7th",
    "Major Dominant 7th + 5th",
    "Major 7b5",
    "Major 7/5",
    "Major 9th",
    "Major 7b9",
    "Major 7/9",
    "Major 13th",
    "Minor",
    "Minor 6th",
    "Minor 6th + 5th",
    "Minor 9th",
    "Minor 11th",
    "Minor 13th",
    "Minor 13th + 9th",
    "Minor 7th",
    "Minor 7th + 5th",
    "Minor 7b5",
    "Minor 7/5",
    "Minor 9",
    "Minor 7b9",
    "Power chord",
    "Sus",
    "Sus2",
];

/// Key display names, index is key + 1. Index 0 stands for "no key".
pub const KEY_NAMES: [&str; 13] = [
    "-", "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A",
    "A#/Bb", "B",
];

/// Display name of the key, `"-"` if key is out of `0..12`.
///
/// Takes a signed key unlike [transpose](crate::chord::transpose): any
/// value a host computes, negative included, maps to a name or to the
/// `"-"` sentinel instead of being reduced mod 12.
pub fn key_name(key: i32) -> &'static str {
    match key {
        0..=11 => KEY_NAMES[key as usize + 1],
        _ => KEY_NAMES[0],
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown guitar type: `{0}`")]
pub struct UnknownGuitarType(pub String);

#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize,
)]
pub enum GuitarType {
    #[default]
    Acoustic,
    Classical,
    Electric,
}
impl GuitarType {
    pub const ALL: [Self; 3] = [Self::Acoustic, Self::Classical, Self::Electric];

    /// Index in per-guitar default arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::Acoustic => 0,
            Self::Classical => 1,
            Self::Electric => 2,
        }
    }
    pub fn name(&self) -> &'static str {
        GUITAR_TYPE_NAMES[self.index()]
    }
    pub fn defaults(&self) -> GuitarDefaults {
        let idx = self.index();
        GuitarDefaults {
            scale_length: DEFAULT_SCALE_LENGTH[idx],
            first_fret_width: DEFAULT_FIRST_FRET_WIDTH[idx],
            bridge_spacing: DEFAULT_BRIDGE_SPACING[idx],
            nut_spacing: DEFAULT_NUT_SPACING[idx],
        }
    }
}
impl fmt::Display for GuitarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for GuitarType {
    type Err = UnknownGuitarType;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|guitar| guitar.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGuitarType(s.to_string()))
    }
}

/// Default geometry of one guitar type.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct GuitarDefaults {
    pub scale_length: f64,
    pub first_fret_width: f64,
    pub bridge_spacing: f64,
    pub nut_spacing: f64,
}
impl Default for GuitarDefaults {
    fn default() -> Self {
        GuitarType::default().defaults()
    }
}

/// Pair of fretting fingers, 1 is the index finger.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum FingerPair {
    IndexMiddle,
    IndexRing,
    IndexLittle,
    MiddleRing,
    MiddleLittle,
    RingLittle,
}
impl FingerPair {
    pub const ALL: [Self; 6] = [
        Self::IndexMiddle,
        Self::IndexRing,
        Self::IndexLittle,
        Self::MiddleRing,
        Self::MiddleLittle,
        Self::RingLittle,
    ];

    /// Finger pair by finger numbers (1..=4), in any order.
    pub fn from_fingers(a: u8, b: u8) -> Option<Self> {
        match (a.min(b), a.max(b)) {
            (1, 2) => Some(Self::IndexMiddle),
            (1, 3) => Some(Self::IndexRing),
            (1, 4) => Some(Self::IndexLittle),
            (2, 3) => Some(Self::MiddleRing),
            (2, 4) => Some(Self::MiddleLittle),
            (3, 4) => Some(Self::RingLittle),
            _ => None,
        }
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    pub fn min_distance(&self) -> f64 {
        DEFAULT_MIN_FINGER_DISTANCE[self.index()]
    }
    pub fn max_distance(&self) -> f64 {
        DEFAULT_MAX_FINGER_DISTANCE[self.index()]
    }
}

#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize,
)]
pub enum Tuning {
    #[default]
    Standard,
    DropD,
    Baritone,
    Standard7,
    Standard8,
}
impl Tuning {
    pub const ALL: [Self; 5] = [
        Self::Standard,
        Self::DropD,
        Self::Baritone,
        Self::Standard7,
        Self::Standard8,
    ];

    /// Open string notes, lowest string first.
    pub fn notes(&self) -> &'static [NoteId] {
        match self {
            Self::Standard => &STANDARD,
            Self::DropD => &DROP_D,
            Self::Baritone => &BARITONE,
            Self::Standard7 => &STANDARD_7,
            Self::Standard8 => &STANDARD_8,
        }
    }
    pub fn string_count(&self) -> usize {
        self.notes().len()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        key_name, FingerPair, GuitarDefaults, GuitarType, Tuning,
        UnknownGuitarType, CHORD_NAMES, GENERIC_CHORDS, KEY_NAMES,
        MAX_FINGER_SPAN,
    };
    use crate::{chord::CHORD_MASK_BITS, pitch::note_id_to_string};

    #[test]
    fn test_chord_catalogue() {
        assert_eq!(GENERIC_CHORDS.len(), CHORD_NAMES.len());
        assert_eq!(GENERIC_CHORDS[0], 0);
        assert_eq!(CHORD_NAMES[0], "-");
        assert!(GENERIC_CHORDS.iter().all(|mask| *mask <= CHORD_MASK_BITS));
        // every chord but the sentinel holds its root
        assert!(GENERIC_CHORDS[1..].iter().all(|mask| mask & 1 == 1));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KEY_NAMES.len(), 13);
        assert_eq!(key_name(0), "C");
        assert_eq!(key_name(1), "C#/Db");
        assert_eq!(key_name(11), "B");
        assert_eq!(key_name(-1), "-");
        assert_eq!(key_name(12), "-");
        assert_eq!(key_name(i32::MIN), "-");
        for key in 0..12_u8 {
            assert_ne!(key_name(key.into()), "-");
        }
    }

    #[test]
    fn test_guitar_defaults() {
        assert_eq!(
            GuitarType::Classical.defaults(),
            GuitarDefaults {
                scale_length: 660.0,
                first_fret_width: 36.0,
                bridge_spacing: 56.0,
                nut_spacing: 48.0,
            }
        );
        assert_eq!(GuitarDefaults::default().bridge_spacing, 58.7375);
        assert_eq!(GuitarType::Electric.to_string(), "Electric");
        assert_eq!("classical".parse::<GuitarType>(), Ok(GuitarType::Classical));
        assert_eq!(
            "Bass".parse::<GuitarType>(),
            Err(UnknownGuitarType("Bass".to_string()))
        );
        for (idx, guitar) in GuitarType::ALL.iter().enumerate() {
            assert_eq!(guitar.index(), idx);
            let defaults = guitar.defaults();
            assert!(defaults.nut_spacing < defaults.bridge_spacing);
        }
    }

    #[test]
    fn test_finger_pairs() {
        assert_eq!(
            FingerPair::from_fingers(3, 1),
            Some(FingerPair::IndexRing)
        );
        assert_eq!(FingerPair::from_fingers(2, 2), None);
        assert_eq!(FingerPair::from_fingers(0, 5), None);
        assert_eq!(FingerPair::RingLittle.min_distance(), 8.5);
        assert_eq!(FingerPair::IndexLittle.max_distance(), MAX_FINGER_SPAN);
        for pair in FingerPair::ALL {
            assert!(pair.min_distance() < pair.max_distance());
            assert!(pair.max_distance() <= MAX_FINGER_SPAN);
        }
    }

    #[test]
    fn test_tunings() {
        let names = Tuning::Standard
            .notes()
            .iter()
            .map(|note| note_id_to_string(*note, true))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["E2", "A2", "D3", "G3", "B3", "E4"]);
        assert_eq!(note_id_to_string(Tuning::DropD.notes()[0], true), "D2");
        assert_eq!(Tuning::Standard7.string_count(), 7);
        assert_eq!(Tuning::Standard8.string_count(), 8);
        for tuning in Tuning::ALL {
            assert!(tuning.notes().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
