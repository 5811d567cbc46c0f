use std::fmt;

/// Three-state secondary structure label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecStrucType {
    AlphaHelix,
    BetaStrand,
    #[default]
    Coil,
}

impl SecStrucType {
    pub fn to_dssp_code(self) -> char {
        match self {
            Self::AlphaHelix => 'H',
            Self::BetaStrand => 'E',
            Self::Coil => 'C',
        }
    }

    /// Reduces a full DSSP code to three states: `H` is helix, `E` is strand,
    /// everything else (including `G`, `I`, `B`, `T`, `S` and blank) is coil.
    pub fn from_dssp_code(code: char) -> Self {
        match code {
            'H' => Self::AlphaHelix,
            'E' => Self::BetaStrand,
            _ => Self::Coil,
        }
    }
}

impl fmt::Display for SecStrucType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AlphaHelix => "ALPHA_HELIX",
            Self::BetaStrand => "BETA_STRAND",
            Self::Coil => "COIL",
        };
        f.write_str(name)
    }
}

pub fn sec_strucs_to_string(labels: &[SecStrucType]) -> String {
    labels.iter().map(|label| label.to_dssp_code()).collect()
}
