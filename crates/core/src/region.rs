use serde::{Deserialize, Serialize};

/// Region a query can reference.
///
/// The vocabulary is fixed; matching order is the declaration order below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    California,
    India,
    Texas,
    Australia,
    Europe,
    Africa,
}

/// All known regions, in matching priority order.
pub const REGION_VOCABULARY: [Region; 6] = [
    Region::California,
    Region::India,
    Region::Texas,
    Region::Australia,
    Region::Europe,
    Region::Africa,
];

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::California => "California",
            Self::India => "India",
            Self::Texas => "Texas",
            Self::Australia => "Australia",
            Self::Europe => "Europe",
            Self::Africa => "Africa",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "california" => Ok(Self::California),
            "india" => Ok(Self::India),
            "texas" => Ok(Self::Texas),
            "australia" => Ok(Self::Australia),
            "europe" => Ok(Self::Europe),
            "africa" => Ok(Self::Africa),
            _ => Err(format!("unknown region: {s}")),
        }
    }
}
