use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetaBridgeType {
    Parallel,
    AntiParallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BetaBridgeContext {
    #[default]
    LoneBridge,
    InSheet,
}

/// A beta bridge from the residue that owns it to `partner_index`.
///
/// Equality ignores `context`: two bridges are the same bridge if they reach
/// the same partner with the same orientation.
#[derive(Debug, Clone, Copy)]
pub struct BetaBridge {
    pub partner_index: usize,
    pub bridge_type: BetaBridgeType,
    pub context: BetaBridgeContext,
}

impl BetaBridge {
    pub fn new(partner_index: usize, bridge_type: BetaBridgeType) -> Self {
        Self {
            partner_index,
            bridge_type,
            context: BetaBridgeContext::LoneBridge,
        }
    }

    pub fn is_in_sheet(&self) -> bool {
        self.context == BetaBridgeContext::InSheet
    }
}

impl PartialEq for BetaBridge {
    fn eq(&self, other: &Self) -> bool {
        self.partner_index == other.partner_index && self.bridge_type == other.bridge_type
    }
}

impl Eq for BetaBridge {}

impl fmt::Display for BetaBridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parallel => "PARALLEL",
            Self::AntiParallel => "ANTIPARA",
        })
    }
}

impl fmt::Display for BetaBridgeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LoneBridge => "BRDGE",
            Self::InSheet => "SHEET",
        })
    }
}

impl fmt::Display for BetaBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "beta_bridge[partner:{:>5}, type:{}, context:{}]",
            self.partner_index, self.bridge_type, self.context
        )
    }
}
