use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use eyre::{eyre, Result};

/// Which parts of the sequences must be covered by the alignment.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub enum Mode {
    /// Both sequences are aligned end-to-end (Needleman-Wunsch)
    #[default]
    Global,
    /// The best-scoring pair of subsequences (Smith-Waterman)
    Local,
    /// The shorter sequence is aligned end-to-end, overhangs of the longer one are free (fitting)
    SemiGlobal,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Global => "global",
            Mode::Local => "local",
            Mode::SemiGlobal => "semiglobal",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "global" => Ok(Mode::Global),
            "local" => Ok(Mode::Local),
            "semiglobal" | "semi-global" => Ok(Mode::SemiGlobal),
            _ => Err(eyre!(
                "Unknown alignment mode: {s:?} (expected \"global\", \"local\", or \"semiglobal\")"
            )),
        }
    }
}
