use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{ensure, Result};

/// Symbol reserved for alignment gaps. It's never a valid sequence symbol.
pub const GAP: u8 = b'-';

/// Translation stop symbol, allowed in protein sequences.
pub const STOP: u8 = b'*';

/// An immutable biological sequence (nucleotides or amino acids).
///
/// Symbols are normalized to uppercase at construction, so two sequences are equal if and only if
/// they spell the same residues. Only ASCII letters and the stop symbol `*` are accepted; the gap
/// symbol `-` and everything else is rejected. Empty sequences are valid.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self> {
        let mut symbols = symbols.into();
        validate(&symbols)?;
        symbols.make_ascii_uppercase();
        Ok(Self { symbols })
    }

    /// Sequence symbols as uppercase ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Consume the sequence and return the underlying symbols.
    pub fn into_bytes(self) -> Vec<u8> {
        self.symbols
    }
}

pub fn validate(symbols: &[u8]) -> Result<()> {
    for (i, &x) in symbols.iter().enumerate() {
        ensure!(
            x.is_ascii_alphabetic() || x == STOP,
            "Invalid sequence symbol at index {i} = {:?}",
            x as char
        );
    }
    Ok(())
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Symbols are validated ASCII, nothing is lost here
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

impl FromStr for Sequence {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Sequence {
    type Error = eyre::Report;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value.as_bytes())
    }
}

impl TryFrom<&[u8]> for Sequence {
    type Error = eyre::Report;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}
