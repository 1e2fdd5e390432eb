//! Feast records and categories

use std::str::FromStr;

/// Categories of liturgical observances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeastKind {
    /// Great feasts of the liturgical year
    Major,
    /// Lesser feasts of the Lord and the Theotokos
    Minor,
    /// Commemorations of individual saints
    Saint,
}

impl FeastKind {
    /// Lowercase label used in listings and CLI arguments
    pub fn label(&self) -> &'static str {
        match self {
            FeastKind::Major => "major",
            FeastKind::Minor => "minor",
            FeastKind::Saint => "saint",
        }
    }
}

impl FromStr for FeastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(FeastKind::Major),
            "minor" => Ok(FeastKind::Minor),
            "saint" => Ok(FeastKind::Saint),
            _ => Err(format!(
                "Unknown feast kind: '{}'. Valid kinds are: major, minor, saint",
                s
            )),
        }
    }
}

/// One liturgical observance tied to a single calendar date.
///
/// `date` is zero-padded ISO `YYYY-MM-DD`. Every lookup in this crate
/// compares these strings lexically, which agrees with chronological order
/// as long as the zero-padding is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feast {
    pub id: u32,
    pub date: &'static str,
    /// Canonical (English) name
    pub name: &'static str,
    /// Romanian display name
    pub name_ro: &'static str,
    pub kind: FeastKind,
    pub description: Option<&'static str>,
    /// Destination names consumed by the pilgrimage recommendation heuristic
    pub places: &'static [&'static str],
    /// Whether the day itself is kept as a fasting day. Authoritative for
    /// the date: overrides both period membership and the weekly rule.
    pub fasting: bool,
}

impl Feast {
    /// Month component (1-12) of the feast date
    pub fn month(&self) -> u32 {
        self.date
            .get(5..7)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    /// Year component of the feast date
    pub fn year(&self) -> i32 {
        self.date
            .get(0..4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}
