use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical place an item can currently be
///
/// The declaration order is significant: `next()` cycles through the
/// variants in this order and wraps around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Dad's home
    #[default]
    Dads,
    /// Mom's home
    Moms,
    /// At school
    School,
    /// Being carried between places
    InTransit,
}

impl Location {
    /// All locations in declaration order
    pub const ALL: [Location; 4] = [
        Location::Dads,
        Location::Moms,
        Location::School,
        Location::InTransit,
    ];

    /// The location after this one, wrapping from the last back to the first
    pub const fn next(self) -> Location {
        match self {
            Location::Dads => Location::Moms,
            Location::Moms => Location::School,
            Location::School => Location::InTransit,
            Location::InTransit => Location::Dads,
        }
    }

    /// Position of this location in `ALL`
    pub const fn index(self) -> usize {
        match self {
            Location::Dads => 0,
            Location::Moms => 1,
            Location::School => 2,
            Location::InTransit => 3,
        }
    }

    /// Human readable label, also accepted by `FromStr`
    pub const fn label(self) -> &'static str {
        match self {
            Location::Dads => "Dad's",
            Location::Moms => "Mom's",
            Location::School => "School",
            Location::InTransit => "In Transit",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dads" | "dad's" | "dad" => Ok(Location::Dads),
            "moms" | "mom's" | "mom" => Ok(Location::Moms),
            "school" => Ok(Location::School),
            "in_transit" | "in transit" | "intransit" => Ok(Location::InTransit),
            _ => Err(format!(
                "Invalid location '{}'. Valid options are: dads, moms, school, in_transit",
                s
            )),
        }
    }
}

/// Clothing category of an item
///
/// Display only; category never affects flag derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Socks,
    Sweaters,
    Tshirts,
    Pants,
    Shoes,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Socks,
        Category::Sweaters,
        Category::Tshirts,
        Category::Pants,
        Category::Shoes,
        Category::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Socks => "socks",
            Category::Sweaters => "sweaters",
            Category::Tshirts => "t-shirts",
            Category::Pants => "pants",
            Category::Shoes => "shoes",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "socks" => Ok(Category::Socks),
            "sweaters" => Ok(Category::Sweaters),
            "tshirts" | "t-shirts" => Ok(Category::Tshirts),
            "pants" => Ok(Category::Pants),
            "shoes" => Ok(Category::Shoes),
            "other" => Ok(Category::Other),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: socks, sweaters, tshirts, pants, shoes, other",
                s
            )),
        }
    }
}

/// Location restriction for inventory queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(Location),
}

impl LocationFilter {
    pub fn matches(self, location: Location) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(wanted) => wanted == location,
        }
    }
}

impl From<Location> for LocationFilter {
    fn from(location: Location) -> Self {
        LocationFilter::Only(location)
    }
}

impl FromStr for LocationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(LocationFilter::All);
        }
        s.parse::<Location>()
            .map(LocationFilter::Only)
            .map_err(|_| {
                format!(
                    "Invalid location filter '{}'. Valid options are: all, dads, moms, school, in_transit",
                    s
                )
            })
    }
}
