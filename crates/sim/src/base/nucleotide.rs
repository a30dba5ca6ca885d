use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidNucleotide;

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers is stable
/// (A=0, C=1, G=2, T=3). Only these four bases exist; anything else is
/// rejected when converting from bytes or chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// All four bases in index order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Convert from u8 index (0-3)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the Watson-Crick partner (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true for the bases counted towards GC content.
    #[inline(always)]
    pub const fn is_gc(self) -> bool {
        matches!(self, Self::C | Self::G)
    }

    /// Draw one base uniformly at random.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        // Non-ASCII chars can never be bases; report them as '?'.
        let byte = u8::try_from(c).unwrap_or(b'?');
        Self::try_from(byte)
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_nucleotide_index_roundtrip() {
        for nuc in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_index(nuc.to_index()), Some(nuc));
        }
        assert_eq!(Nucleotide::from_index(4), None);
        assert_eq!(Nucleotide::from_index(255), None);
    }

    #[test]
    fn test_nucleotide_from_ascii() {
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        for byte in [b'E', b'S', b'B', b'H', b'Y', b'Z', b'N', b' '] {
            assert_eq!(Nucleotide::from_ascii(byte), None);
        }
    }

    #[test]
    fn test_nucleotide_try_from_char() {
        assert_eq!(Nucleotide::try_from('A'), Ok(Nucleotide::A));
        assert_eq!(Nucleotide::try_from('t'), Ok(Nucleotide::T));
        assert_eq!(Nucleotide::try_from('X'), Err(InvalidNucleotide(b'X')));
        assert_eq!(Nucleotide::try_from('α'), Err(InvalidNucleotide(b'?')));
    }

    #[test]
    fn test_nucleotide_complement() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);

        for nuc in Nucleotide::ALL {
            assert_eq!(nuc.complement().complement(), nuc);
        }
    }

    #[test]
    fn test_nucleotide_is_gc() {
        assert!(!Nucleotide::A.is_gc());
        assert!(Nucleotide::C.is_gc());
        assert!(Nucleotide::G.is_gc());
        assert!(!Nucleotide::T.is_gc());
    }

    #[test]
    fn test_nucleotide_random_covers_alphabet() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[Nucleotide::random(&mut rng).to_index() as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_invalid_nucleotide_display() {
        let msg = format!("{}", InvalidNucleotide(b'X'));
        assert!(msg.contains("Invalid"));
        assert!(msg.contains("88"));
        assert!(msg.contains('X'));
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
