use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::{String, ToString};
use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

/// Universal part-of-speech tag, as emitted by English NLP pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Adj = 0,
    Adp = 1,
    Adv = 2,
    Aux = 3,
    Cconj = 4,
    Det = 5,
    Intj = 6,
    Noun = 7,
    Num = 8,
    Part = 9,
    Pron = 10,
    Propn = 11,
    Punct = 12,
    Sconj = 13,
    Sym = 14,
    Verb = 15,
    X = 16,
    Space = 17,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 18] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Propn,
        PartOfSpeech::Punct,
        PartOfSpeech::Sconj,
        PartOfSpeech::Sym,
        PartOfSpeech::Verb,
        PartOfSpeech::X,
        PartOfSpeech::Space,
    ];

    /// The canonical tag string ("VERB", "NOUN", ...).
    pub const fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosTag(pub String);

impl fmt::Display for UnknownPosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown part-of-speech tag '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPosTag {}

impl FromStr for PartOfSpeech {
    type Err = UnknownPosTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        PartOfSpeech::ALL
            .iter()
            .copied()
            .find(|pos| pos.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownPosTag(tag.to_string()))
    }
}

bitflags! {
    /// A set of POS tags. One bit per `PartOfSpeech` discriminant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct PosFlags: u32 {
        const ADJ = 1 << 0;
        const ADP = 1 << 1;
        const ADV = 1 << 2;
        const AUX = 1 << 3;
        const CCONJ = 1 << 4;
        const DET = 1 << 5;
        const INTJ = 1 << 6;
        const NOUN = 1 << 7;
        const NUM = 1 << 8;
        const PART = 1 << 9;
        const PRON = 1 << 10;
        const PROPN = 1 << 11;
        const PUNCT = 1 << 12;
        const SCONJ = 1 << 13;
        const SYM = 1 << 14;
        const VERB = 1 << 15;
        const X = 1 << 16;
        const SPACE = 1 << 17;
    }
}

impl From<PartOfSpeech> for PosFlags {
    fn from(pos: PartOfSpeech) -> Self {
        PosFlags::from_bits_truncate(1 << (pos as u32))
    }
}

impl FromIterator<PartOfSpeech> for PosFlags {
    fn from_iter<I: IntoIterator<Item = PartOfSpeech>>(iter: I) -> Self {
        iter.into_iter().fold(PosFlags::empty(), |acc, pos| acc | PosFlags::from(pos))
    }
}

impl PosFlags {
    pub fn contains_pos(&self, pos: PartOfSpeech) -> bool {
        self.contains(PosFlags::from(pos))
    }

    /// Member tags in discriminant order.
    pub fn tags(&self) -> impl Iterator<Item = PartOfSpeech> + '_ {
        PartOfSpeech::ALL.iter().copied().filter(move |pos| self.contains_pos(*pos))
    }
}
