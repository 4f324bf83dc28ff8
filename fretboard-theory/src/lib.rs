//! Music-theory primitives for laying out a guitar fretboard and
//! identifying chords.
//!
//! - [pitch]: note ids and note names.
//! - [chord]: 12-bit chord masks and their transposition.
//! - [fret]: distance between frets.
//! - [tables]: default guitar setup, tunings and the chord catalogue.
//!
//! Everything here is pure: no state, no I/O.

pub mod chord;
pub mod fret;
pub mod pitch;
pub mod tables;

pub use chord::{
    chord_pitch_classes, note_in_chord, transpose, ChordMask, GenericChord,
    CHORD_MASK_BITS,
};
pub use fret::fret_distance;
pub use pitch::{
    checked_note_id, note_id, note_id_to_string, octave_of, parse_note_string,
    pitch_class_from_name, pitch_class_of, pitch_name, Note, NoteId,
    PitchError, PitchResult,
};
pub use tables::{
    key_name, FingerPair, GuitarDefaults, GuitarType, Tuning,
    UnknownGuitarType,
};
