use std::collections::HashMap;

use crate::error::ParseError;

/// Regions recognized in ROM filename tags.
///
/// Each region has a short code (GoodTools style, e.g. `U`) and a full name
/// (No-Intro style, e.g. `USA`); a filename tag matches a region when it
/// equals either one exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Asia,
    Australia,
    Brazil,
    Canada,
    China,
    /// Netherlands under the older `D` (Dutch) code
    Dutch,
    Europe,
    France,
    Finland,
    Germany,
    Greece,
    HongKong,
    Italy,
    Japan,
    Korea,
    Netherlands,
    Norway,
    Russia,
    Spain,
    Sweden,
    Usa,
    UnitedKingdom,
    World,
    Unlicensed,
    PublicDomain,
    /// No region tag at all
    Unknown,
}

impl Region {
    pub const ALL: [Region; 26] = [
        Self::Asia,
        Self::Australia,
        Self::Brazil,
        Self::Canada,
        Self::China,
        Self::Dutch,
        Self::Europe,
        Self::France,
        Self::Finland,
        Self::Germany,
        Self::Greece,
        Self::HongKong,
        Self::Italy,
        Self::Japan,
        Self::Korea,
        Self::Netherlands,
        Self::Norway,
        Self::Russia,
        Self::Spain,
        Self::Sweden,
        Self::Usa,
        Self::UnitedKingdom,
        Self::World,
        Self::Unlicensed,
        Self::PublicDomain,
        Self::Unknown,
    ];

    /// Returns the short code for this region (case sensitive).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Asia => "As",
            Self::Australia => "A",
            Self::Brazil => "B",
            Self::Canada => "C",
            Self::China => "Ch",
            Self::Dutch => "D",
            Self::Europe => "E",
            Self::France => "F",
            Self::Finland => "Fn",
            Self::Germany => "G",
            Self::Greece => "Gr",
            Self::HongKong => "Hk",
            Self::Italy => "I",
            Self::Japan => "J",
            Self::Korea => "K",
            Self::Netherlands => "Nl",
            Self::Norway => "No",
            Self::Russia => "R",
            Self::Spain => "S",
            Self::Sweden => "Sw",
            Self::Usa => "U",
            Self::UnitedKingdom => "UK",
            Self::World => "W",
            Self::Unlicensed => "Unl",
            Self::PublicDomain => "PD",
            Self::Unknown => "Unk",
        }
    }

    /// Returns the full name of this region as it appears in tags.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::Canada => "Canada",
            Self::China => "China",
            Self::Dutch | Self::Netherlands => "Netherlands",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::Finland => "Finland",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::HongKong => "Hong Kong",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::Norway => "Norway",
            Self::Russia => "Russia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Usa => "USA",
            Self::UnitedKingdom => "United Kingdom",
            Self::World => "World",
            Self::Unlicensed => "Unlicensed",
            Self::PublicDomain => "Public Domain",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Token (code or full name) → regions it denotes. "Netherlands" names two codes.
fn token_lookup() -> HashMap<&'static str, Vec<Region>> {
    let mut lookup: HashMap<&'static str, Vec<Region>> = HashMap::new();
    for region in Region::ALL {
        lookup.entry(region.code()).or_default().push(region);
        let by_name = lookup.entry(region.name()).or_default();
        if !by_name.contains(&region) {
            by_name.push(region);
        }
    }
    lookup
}

/// Region priority table built from the user's preference order.
///
/// Higher rank wins. Preferred regions outrank everything else, the first
/// preference highest. Remaining regions follow in reverse alphabetical
/// order of their codes, and `Unk` sits at the bottom unless preferred.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    tokens: HashMap<&'static str, Vec<Region>>,
    ranks: HashMap<Region, i32>,
}

impl RegionTable {
    /// Build the table from preference tokens such as `["U", "E"]` or `["USA"]`.
    pub fn new<S: AsRef<str>>(preferred: &[S]) -> Result<Self, ParseError> {
        let tokens = token_lookup();

        let mut wanted: Vec<Region> = Vec::new();
        for token in preferred {
            let token = token.as_ref();
            let regions = tokens
                .get(token)
                .ok_or_else(|| ParseError::invalid_region(token))?;
            for &region in regions {
                if !wanted.contains(&region) {
                    wanted.push(region);
                }
            }
        }

        let mut others: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|r| *r != Region::Unknown && !wanted.contains(r))
            .collect();
        others.sort_by(|a, b| b.code().cmp(a.code()));

        let mut ranks = HashMap::new();
        if !wanted.contains(&Region::Unknown) {
            ranks.insert(Region::Unknown, 0);
        }
        let mut next = 1;
        for region in others.into_iter().chain(wanted.into_iter().rev()) {
            ranks.insert(region, next);
            next += 1;
        }

        Ok(Self { tokens, ranks })
    }

    /// Rank of a single region, if present in the table.
    pub fn rank(&self, region: Region) -> Option<i32> {
        self.ranks.get(&region).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Regions named by a set of filename tags. Falls back to `Unknown`.
    pub fn regions_of<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> Vec<Region> {
        let mut regions: Vec<Region> = Vec::new();
        for tag in tags {
            if let Some(found) = self.tokens.get(tag.as_str()) {
                for &region in found {
                    if !regions.contains(&region) {
                        regions.push(region);
                    }
                }
            }
        }
        if regions.is_empty() {
            regions.push(Region::Unknown);
        }
        regions
    }

    /// Best rank among the regions a tag set names.
    pub fn try_score<'a>(
        &self,
        tags: impl IntoIterator<Item = &'a String>,
    ) -> Result<i32, ParseError> {
        self.regions_of(tags)
            .into_iter()
            .filter_map(|r| self.rank(r))
            .max()
            .ok_or(ParseError::NoRegionMatch)
    }

    /// Like [`try_score`](Self::try_score), with 0 for a table that has no ranks.
    pub fn score<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> i32 {
        self.try_score(tags).unwrap_or(0)
    }

    /// Regions ordered from highest to lowest rank.
    pub fn ordered(&self) -> Vec<(Region, i32)> {
        let mut ordered: Vec<(Region, i32)> = self.ranks.iter().map(|(&r, &n)| (r, n)).collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        ordered
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
