use serde::{Deserialize, Serialize};

use crate::domain::profile::entities::{CalculationMode, DietType, Disease, Region, UserProfile};

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub height: Option<u32>,
    pub diseases: Option<Vec<Disease>>,
    pub diet: Option<DietType>,
    pub mode: Option<CalculationMode>,
    pub region: Option<Region>,
}

impl ProfilePatch {
    pub fn region(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Default::default()
        }
    }

    pub fn diet(diet: DietType) -> Self {
        Self {
            diet: Some(diet),
            ..Default::default()
        }
    }

    pub fn mode(mode: CalculationMode) -> Self {
        Self {
            mode: Some(mode),
            ..Default::default()
        }
    }

    /// Patch that flips one condition on or off relative to `current`.
    pub fn toggle_disease(current: &UserProfile, disease: Disease) -> Self {
        let diseases = if current.has_disease(disease) {
            current
                .diseases
                .iter()
                .copied()
                .filter(|d| *d != disease)
                .collect()
        } else {
            let mut next = current.diseases.clone();
            next.push(disease);
            next
        };

        Self {
            diseases: Some(diseases),
            ..Default::default()
        }
    }

    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
        if let Some(weight) = self.weight {
            profile.weight = Some(weight);
        }
        if let Some(height) = self.height {
            profile.height = Some(height);
        }
        if let Some(diseases) = self.diseases {
            profile.diseases = diseases;
        }
        if let Some(diet) = self.diet {
            profile.diet = diet;
        }
        if let Some(mode) = self.mode {
            profile.mode = mode;
        }
        if let Some(region) = self.region {
            profile.region = region;
        }
    }
}
