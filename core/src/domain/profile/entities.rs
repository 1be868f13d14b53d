use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    Hypertension,
    Celiac,
    None,
}

impl Disease {
    /// Conditions the profile screen lets the user toggle.
    pub const SELECTABLE: [Disease; 3] = [Disease::Diabetes, Disease::Hypertension, Disease::Celiac];

    pub fn as_str(&self) -> &str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::Hypertension => "hypertension",
            Disease::Celiac => "celiac",
            Disease::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    None,
    Vegan,
    Keto,
    Paleo,
    GlutenFree,
}

impl DietType {
    pub const ALL: [DietType; 5] = [
        DietType::None,
        DietType::Vegan,
        DietType::Keto,
        DietType::Paleo,
        DietType::GlutenFree,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DietType::None => "none",
            DietType::Vegan => "vegan",
            DietType::Keto => "keto",
            DietType::Paleo => "paleo",
            DietType::GlutenFree => "gluten_free",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    #[default]
    Free,
    Calculated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    International,
    Gulf,
    Egyptian,
    Levant,
    Maghreb,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::International,
        Region::Gulf,
        Region::Egyptian,
        Region::Levant,
        Region::Maghreb,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Region::International => "international",
            Region::Gulf => "gulf",
            Region::Egyptian => "egyptian",
            Region::Levant => "levant",
            Region::Maghreb => "maghreb",
        }
    }
}

macro_rules! impl_from_str {
    ($ty:ty, $($tag:literal => $variant:expr),+ $(,)?) => {
        impl std::str::FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($tag => Ok($variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

impl_from_str!(Disease,
    "diabetes" => Disease::Diabetes,
    "hypertension" => Disease::Hypertension,
    "celiac" => Disease::Celiac,
    "none" => Disease::None,
);
impl_from_str!(DietType,
    "none" => DietType::None,
    "vegan" => DietType::Vegan,
    "keto" => DietType::Keto,
    "paleo" => DietType::Paleo,
    "gluten_free" => DietType::GlutenFree,
);
impl_from_str!(CalculationMode,
    "free" => CalculationMode::Free,
    "calculated" => CalculationMode::Calculated,
);
impl_from_str!(Region,
    "international" => Region::International,
    "gulf" => Region::Gulf,
    "egyptian" => Region::Egyptian,
    "levant" => Region::Levant,
    "maghreb" => Region::Maghreb,
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub diseases: Vec<Disease>,
    pub diet: DietType,
    pub mode: CalculationMode,
    pub region: Region,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: Some(30),
            weight: Some(70),
            height: Some(170),
            diseases: Vec::new(),
            diet: DietType::None,
            mode: CalculationMode::Free,
            region: Region::International,
        }
    }
}

impl UserProfile {
    /// Conditions that actually constrain a recipe (`none` is dropped).
    pub fn active_diseases(&self) -> impl Iterator<Item = Disease> + '_ {
        self.diseases
            .iter()
            .copied()
            .filter(|d| *d != Disease::None)
    }

    pub fn has_disease(&self, disease: Disease) -> bool {
        self.diseases.contains(&disease)
    }
}
