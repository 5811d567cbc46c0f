use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcidType {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (ALA)
    Glycine,    // Glycine (GLY)
    Isoleucine, // Isoleucine (ILE)
    Leucine,    // Leucine (LEU)
    Proline,    // Proline (PRO)
    Valine,     // Valine (VAL)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (PHE)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (ASN)
    Cysteine,   // Cysteine (CYS)
    Glutamine,  // Glutamine (GLN)
    Serine,     // Serine (SER)
    Threonine,  // Threonine (THR)
    Methionine, // Methionine (MET)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (ARG)
    Lysine,    // Lysine (LYS)
    Histidine, // Histidine (HIS, and the HSD/HSE/HSP/HID/HIE/HIP protonation names)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (ASP)
    GlutamicAcid, // Glutamic Acid (GLU)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown amino acid code: '{0}'")]
pub struct ParseAminoAcidError(pub String);

impl AminoAcidType {
    pub fn three_letter_code(&self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Glycine => "GLY",
            Self::Isoleucine => "ILE",
            Self::Leucine => "LEU",
            Self::Proline => "PRO",
            Self::Valine => "VAL",
            Self::Phenylalanine => "PHE",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
            Self::Asparagine => "ASN",
            Self::Cysteine => "CYS",
            Self::Glutamine => "GLN",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Methionine => "MET",
            Self::Arginine => "ARG",
            Self::Lysine => "LYS",
            Self::Histidine => "HIS",
            Self::AsparticAcid => "ASP",
            Self::GlutamicAcid => "GLU",
        }
    }

    pub fn one_letter_code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Glycine => 'G',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Proline => 'P',
            Self::Valine => 'V',
            Self::Phenylalanine => 'F',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Asparagine => 'N',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Methionine => 'M',
            Self::Arginine => 'R',
            Self::Lysine => 'K',
            Self::Histidine => 'H',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
        }
    }
}

impl FromStr for AminoAcidType {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALA" => Ok(Self::Alanine),
            "GLY" => Ok(Self::Glycine),
            "ILE" => Ok(Self::Isoleucine),
            "LEU" => Ok(Self::Leucine),
            "PRO" => Ok(Self::Proline),
            "VAL" => Ok(Self::Valine),
            "PHE" => Ok(Self::Phenylalanine),
            "TRP" => Ok(Self::Tryptophan),
            "TYR" => Ok(Self::Tyrosine),
            "ASN" => Ok(Self::Asparagine),
            "CYS" => Ok(Self::Cysteine),
            "GLN" => Ok(Self::Glutamine),
            "SER" => Ok(Self::Serine),
            "THR" => Ok(Self::Threonine),
            "MET" => Ok(Self::Methionine),
            "ARG" => Ok(Self::Arginine),
            "LYS" => Ok(Self::Lysine),
            "HIS" | "HSD" | "HSE" | "HSP" | "HID" | "HIE" | "HIP" => Ok(Self::Histidine),
            "ASP" => Ok(Self::AsparticAcid),
            "GLU" => Ok(Self::GlutamicAcid),
            _ => Err(ParseAminoAcidError(s.to_string())),
        }
    }
}

impl fmt::Display for AminoAcidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.three_letter_code())
    }
}

/// Backbone geometry of a single residue.
///
/// Every backbone atom is optional; the assignment engine treats a missing atom
/// as "cannot take part" in whichever hydrogen bond would need it. An
/// `amino_acid` of `None` marks a residue that is not one of the twenty
/// standard amino acids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackboneResidue {
    pub chain_id: char,
    pub amino_acid: Option<AminoAcidType>,
    pub n: Option<Point3<f64>>,
    pub ca: Option<Point3<f64>>,
    pub c: Option<Point3<f64>>,
    pub o: Option<Point3<f64>>,
}

impl BackboneResidue {
    pub fn new(chain_id: char, amino_acid: Option<AminoAcidType>) -> Self {
        Self {
            chain_id,
            amino_acid,
            ..Default::default()
        }
    }

    pub fn with_backbone(
        mut self,
        n: Point3<f64>,
        ca: Point3<f64>,
        c: Point3<f64>,
        o: Point3<f64>,
    ) -> Self {
        self.n = Some(n);
        self.ca = Some(ca);
        self.c = Some(c);
        self.o = Some(o);
        self
    }

    /// Only a recognised standard proline counts; non-standard residues never do.
    #[inline]
    pub fn is_standard_proline(&self) -> bool {
        self.amino_acid == Some(AminoAcidType::Proline)
    }

    pub fn has_complete_backbone(&self) -> bool {
        self.n.is_some() && self.ca.is_some() && self.c.is_some() && self.o.is_some()
    }
}
