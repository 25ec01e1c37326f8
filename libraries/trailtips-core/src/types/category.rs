/// Experience categorisation
use serde::{Deserialize, Serialize};

/// Top-level kind of post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A trip report
    Experiences,
    /// A practical tip
    Tips,
}

impl Category {
    /// Wire name, as the API spells it
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Experiences => "Experiences",
            Self::Tips => "Tips",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gear/topic filter a post is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    /// Tents, tarps, bags and mats
    ShelterAndSleeping,
    /// Stoves, food and water
    CookingAndEating,
    /// Layers and boots
    ClothingAndFootwear,
    /// Maps, compasses and first aid
    NavigationAndSafety,
    /// Toiletries and small comforts
    PersonalItemsAndComfort,
    /// Anything else
    Miscellaneous,
    /// Nice to have, not essential
    OptionalButUseful,
}

impl FilterCategory {
    /// All filter categories in API order
    pub const ALL: [Self; 7] = [
        Self::ShelterAndSleeping,
        Self::CookingAndEating,
        Self::ClothingAndFootwear,
        Self::NavigationAndSafety,
        Self::PersonalItemsAndComfort,
        Self::Miscellaneous,
        Self::OptionalButUseful,
    ];

    /// Wire name, as the API spells it
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShelterAndSleeping => "ShelterAndSleeping",
            Self::CookingAndEating => "CookingAndEating",
            Self::ClothingAndFootwear => "ClothingAndFootwear",
            Self::NavigationAndSafety => "NavigationAndSafety",
            Self::PersonalItemsAndComfort => "PersonalItemsAndComfort",
            Self::Miscellaneous => "Miscellaneous",
            Self::OptionalButUseful => "OptionalButUseful",
        }
    }
}

impl std::fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
