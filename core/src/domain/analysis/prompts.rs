use std::fmt::Write as _;

use crate::domain::{
    analysis::value_objects::{AnalysisInput, AnalysisMode, AnalyzeInput},
    localization::Language,
    profile::entities::{CalculationMode, DietType, Disease, Region, UserProfile},
};

fn disease_constraint(disease: Disease) -> Option<&'static str> {
    match disease {
        Disease::Diabetes => Some("diabetes: keep the glycemic load low, no added sugar, prefer whole grains"),
        Disease::Hypertension => Some("hypertension: keep sodium low, avoid pickles, stock cubes and processed meat"),
        Disease::Celiac => Some("celiac disease: strictly gluten free, no wheat, barley or rye"),
        Disease::None => None,
    }
}

fn diet_constraint(diet: DietType) -> Option<&'static str> {
    match diet {
        DietType::None => None,
        DietType::Vegan => Some("vegan: no meat, fish, eggs, dairy or honey"),
        DietType::Keto => Some("keto: very low carbohydrate, high fat"),
        DietType::Paleo => Some("paleo: no grains, legumes, dairy or refined sugar"),
        DietType::GlutenFree => Some("gluten free"),
    }
}

fn region_style(region: Region) -> &'static str {
    match region {
        Region::International => "international home cooking",
        Region::Gulf => "Gulf (Khaleeji) home cooking",
        Region::Egyptian => "Egyptian home cooking",
        Region::Levant => "Levantine (Shami) home cooking",
        Region::Maghreb => "Maghrebi (North African) home cooking",
    }
}

// Writing into a `String` cannot fail, so the `fmt::Result`s below are discarded.
fn write_profile_constraints(out: &mut String, profile: &UserProfile) {
    let constraints: Vec<&str> = profile
        .active_diseases()
        .filter_map(disease_constraint)
        .chain(diet_constraint(profile.diet))
        .collect();

    if constraints.is_empty() {
        out.push_str("Dietary constraints: none.\n");
    } else {
        out.push_str("Dietary constraints that every dish must respect:\n");
        for constraint in constraints {
            let _ = writeln!(out, "- {constraint}");
        }
    }

    if profile.mode == CalculationMode::Calculated {
        out.push_str("Portions must be calorie aware for this person:");
        if let Some(age) = profile.age {
            let _ = write!(out, " age {age} years,");
        }
        if let Some(weight) = profile.weight {
            let _ = write!(out, " weight {weight} kg,");
        }
        if let Some(height) = profile.height {
            let _ = write!(out, " height {height} cm,");
        }
        out.push_str(" give a calorie estimate per serving.\n");
    }
}

/// Builds the prompt for recipe suggestion or meal evaluation.
pub fn build_analysis_prompt(input: &AnalyzeInput) -> String {
    let mut out = String::new();

    match input.mode {
        AnalysisMode::Ingredients => {
            let _ = writeln!(
                out,
                "You are a family chef. Suggest 1 to 3 recipes in the style of {} that can be cooked mainly from the available ingredients.",
                region_style(input.profile.region)
            );
        }
        AnalysisMode::Meal => {
            out.push_str("You are a clinical nutritionist. Evaluate the finished meal described below and return exactly one entry where the title is the dish name, ingredients are its visible components and steps are health report notes for this person.\n");
        }
    }

    match &input.input {
        AnalysisInput::Image(_) => {
            out.push_str("The food is shown in the attached photo. List what you recognise in detectedIngredients.\n");
        }
        AnalysisInput::Text(text) => {
            let _ = writeln!(out, "Available ingredients: {}", text.trim());
        }
    }

    write_profile_constraints(&mut out, &input.profile);

    let _ = writeln!(
        out,
        "Write every text field in {}. Return JSON only, shaped as {{\"recipes\": [{{\"title\", \"ingredients\": [..], \"steps\": [..], \"calories\", \"prepTime\", \"detectedIngredients\": [..]}}]}}.",
        input.language.prompt_name()
    );

    out
}

/// Builds the prompt asking for alternatives to one ingredient.
pub fn build_substitutes_prompt(ingredient: &str, language: Language) -> String {
    format!(
        "Give up to 4 practical kitchen substitutes for the ingredient \"{}\". Write them in {}. Return JSON only, shaped as {{\"substitutes\": [..]}}.",
        ingredient.trim(),
        language.prompt_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proxy::value_objects::InlineImage;

    fn analyze_input(mode: AnalysisMode, profile: UserProfile) -> AnalyzeInput {
        AnalyzeInput {
            input: AnalysisInput::text("eggs, tomato, onion"),
            mode,
            profile,
            language: Language::En,
        }
    }

    #[test]
    fn test_prompt_carries_constraints_and_language() {
        let profile = UserProfile {
            diseases: vec![Disease::Diabetes, Disease::Celiac],
            diet: DietType::Vegan,
            region: Region::Levant,
            ..Default::default()
        };
        let prompt = build_analysis_prompt(&analyze_input(AnalysisMode::Ingredients, profile));

        assert!(prompt.contains("Levantine"));
        assert!(prompt.contains("eggs, tomato, onion"));
        assert!(prompt.contains("diabetes"));
        assert!(prompt.contains("celiac"));
        assert!(prompt.contains("vegan"));
        assert!(prompt.contains("in English"));
        assert!(!prompt.contains("calorie aware"));
    }

    #[test]
    fn test_calculated_mode_includes_measurements() {
        let profile = UserProfile {
            mode: CalculationMode::Calculated,
            age: Some(45),
            weight: Some(90),
            height: Some(180),
            ..Default::default()
        };
        let prompt = build_analysis_prompt(&analyze_input(AnalysisMode::Ingredients, profile));

        assert!(prompt.contains("age 45 years"));
        assert!(prompt.contains("weight 90 kg"));
        assert!(prompt.contains("height 180 cm"));
    }

    #[test]
    fn test_meal_mode_with_image() {
        let input = AnalyzeInput {
            input: AnalysisInput::Image(InlineImage {
                mime_type: "image/jpeg".to_string(),
                data: String::new(),
            }),
            mode: AnalysisMode::Meal,
            profile: UserProfile::default(),
            language: Language::Ar,
        };
        let prompt = build_analysis_prompt(&input);

        assert!(prompt.contains("Evaluate the finished meal"));
        assert!(prompt.contains("attached photo"));
        assert!(prompt.contains("in Arabic"));
        assert!(prompt.contains("Dietary constraints: none."));
    }

    #[test]
    fn test_substitutes_prompt() {
        let prompt = build_substitutes_prompt(" butter ", Language::Ar);
        assert!(prompt.contains("\"butter\""));
        assert!(prompt.contains("Arabic"));
    }
}
