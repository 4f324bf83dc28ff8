//! Pitch classes, note ids and note names.
//!
//! A concrete pitch is stored as a single integer, the note id:
//! `(octave + 1) * 12 + pitch_class`. So `C-1` is `0`, `C4` is `60` and
//! `A4` is `69`, the same numbering MIDI uses.
//!
//! # Examples
//!
//! ```
//! use fretboard_theory::pitch::{note_id, note_id_to_string, parse_note_string};
//!
//! let c_sharp = note_id(1, 4);
//! assert_eq!(c_sharp, 61);
//! assert_eq!(note_id_to_string(c_sharp, true), "C#4");
//! assert_eq!(note_id_to_string(c_sharp, false), "Db4");
//! assert_eq!(parse_note_string("Db4").unwrap(), c_sharp);
//! ```

use std::{fmt, num::ParseIntError, str::FromStr};

/// Integer uniquely identifying a (pitch class, octave) pair.
pub type NoteId = i32;

/// Amount of pitch classes in an octave.
pub const SEMITONES: i32 = 12;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum PitchError {
    #[error("Invalid format! Note string: `{0}`")]
    Format(String),
    #[error("Invalid octave in note string `{input}`: {source}")]
    Octave {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid note name! Note string: `{0}`")]
    InvalidNoteName(String),
}
impl PitchError {
    /// True for every malformed-string failure, including a bad octave.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Octave { .. })
    }
}
pub type PitchResult<T> = Result<T, PitchError>;

/// Build note id from pitch class and octave.
///
/// Nothing is validated: negative octaves give negative (or small) ids,
/// which still decode back to the same pair.
///
/// The id must fit into [NoteId], so `octave` is expected to stay within
/// roughly `±178_956_969`. Use [checked_note_id] for untrusted input.
pub fn note_id(pitch_class: u8, octave: i32) -> NoteId {
    (octave + 1) * SEMITONES + pitch_class as NoteId
}

/// Same as [note_id], but `None` if the id does not fit into [NoteId].
///
/// ```
/// # use fretboard_theory::pitch::{checked_note_id, note_id};
/// assert_eq!(checked_note_id(1, 4), Some(note_id(1, 4)));
/// assert_eq!(checked_note_id(0, i32::MAX), None);
/// ```
pub fn checked_note_id(pitch_class: u8, octave: i32) -> Option<NoteId> {
    octave
        .checked_add(1)?
        .checked_mul(SEMITONES)?
        .checked_add(pitch_class as NoteId)
}

/// Pitch class (0..=11) of the note id.
pub fn pitch_class_of(note_id: NoteId) -> u8 {
    note_id.rem_euclid(SEMITONES) as u8
}

/// Octave of the note id, rounded toward negative infinity.
///
/// ```
/// # use fretboard_theory::pitch::octave_of;
/// assert_eq!(octave_of(60), 4);
/// assert_eq!(octave_of(0), -1);
/// assert_eq!(octave_of(-1), -2);
/// ```
pub fn octave_of(note_id: NoteId) -> i32 {
    note_id.div_euclid(SEMITONES) - 1
}

/// Name of the pitch class without octave.
///
/// Black keys are spelled with `#` if `prefer_sharp`, else with `b`.
/// Naturals ignore the flag.
pub fn pitch_name(pitch_class: u8, prefer_sharp: bool) -> &'static str {
    let idx = (pitch_class % SEMITONES as u8) as usize;
    match prefer_sharp {
        true => SHARP_NAMES[idx],
        false => FLAT_NAMES[idx],
    }
}

/// Name with octave, like `"C#4"`. Octave is rounded toward negative
/// infinity, so `-1` is `"B-2"`.
pub fn note_id_to_string(note_id: NoteId, prefer_sharp: bool) -> String {
    format!(
        "{}{}",
        pitch_name(pitch_class_of(note_id), prefer_sharp),
        octave_of(note_id)
    )
}

/// Lookup one of the 17 recognized spellings.
///
/// Only the letter is case-normalized, the accidental is matched as typed,
/// so `"c#"` and `"C#"` are found, but `"CB"` is not.
pub fn pitch_class_from_name(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let accidental = chars.next();
    if chars.next().is_some() {
        return None;
    }
    match (letter, accidental) {
        ('C', None) => Some(0),
        ('C', Some('#')) | ('D', Some('b')) => Some(1),
        ('D', None) => Some(2),
        ('D', Some('#')) | ('E', Some('b')) => Some(3),
        ('E', None) => Some(4),
        ('F', None) => Some(5),
        ('F', Some('#')) | ('G', Some('b')) => Some(6),
        ('G', None) => Some(7),
        ('G', Some('#')) | ('A', Some('b')) => Some(8),
        ('A', None) => Some(9),
        ('A', Some('#')) | ('B', Some('b')) => Some(10),
        ('B', None) => Some(11),
        _ => None,
    }
}

/// Parse strings like `"E2"`, `"c#4"`, `"Bb-1"` to note id.
///
/// Name goes first: one letter, optionally followed by `#` or `b`. Octave
/// follows immediately, as a (possibly signed) integer.
///
/// # Errors
///
/// - [PitchError::Format] if the string is shorter than two characters.
/// - [PitchError::Octave] if the rest after the name is not an integer.
///   It is checked before the name.
/// - [PitchError::InvalidNoteName] if the name is not recognized.
/// - [PitchError::Format] if the octave is too far away for the note id
///   to fit into [NoteId].
pub fn parse_note_string(s: &str) -> PitchResult<NoteId> {
    log::trace!("parsing note string: {:?}", s);
    let mut chars = s.char_indices();
    let second = chars.nth(1);
    let split = match second {
        None => {
            log::debug!("note string is too short: {:?}", s);
            return Err(PitchError::Format(s.to_string()));
        }
        Some((idx, '#')) | Some((idx, 'b')) => idx + 1,
        Some((idx, _)) => idx,
    };
    let (name, octave) = s.split_at(split);
    let octave = octave.parse::<i32>().map_err(|source| {
        log::debug!("can not parse octave of {:?}: {}", s, source);
        PitchError::Octave {
            input: s.to_string(),
            source,
        }
    })?;
    let pitch_class = pitch_class_from_name(name).ok_or_else(|| {
        log::debug!("unknown note name {:?} in {:?}", name, s);
        PitchError::InvalidNoteName(s.to_string())
    })?;
    checked_note_id(pitch_class, octave).ok_or_else(|| {
        log::debug!("octave of {:?} is out of range", s);
        PitchError::Format(s.to_string())
    })
}

/// Concrete pitch, thin wrapper around [NoteId].
///
/// Displays with sharps, parses every recognized spelling.
///
/// ```
/// # use fretboard_theory::pitch::Note;
/// let note: Note = "eb3".parse().unwrap();
/// assert_eq!(note.id(), 51);
/// assert_eq!(note.to_string(), "D#3");
/// assert_eq!(note.to_string_with(false), "Eb3");
/// ```
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Note {
    id: NoteId,
}
impl Note {
    pub fn new(pitch_class: u8, octave: i32) -> Self {
        Self {
            id: note_id(pitch_class, octave),
        }
    }
    pub fn from_id(id: NoteId) -> Self {
        Self { id }
    }
    pub fn id(&self) -> NoteId {
        self.id
    }
    pub fn pitch_class(&self) -> u8 {
        pitch_class_of(self.id)
    }
    pub fn octave(&self) -> i32 {
        octave_of(self.id)
    }
    pub fn to_string_with(&self, prefer_sharp: bool) -> String {
        note_id_to_string(self.id, prefer_sharp)
    }
}
impl From<NoteId> for Note {
    fn from(id: NoteId) -> Self {
        Self::from_id(id)
    }
}
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(true))
    }
}
impl FromStr for Note {
    type Err = PitchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note_string(s).map(Self::from_id)
    }
}
