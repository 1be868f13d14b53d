use std::fmt::Write;

use visionchef_core::domain::{
    localization::{Translations, diet_label, region_label, translations},
    profile::entities::{CalculationMode, DietType, Disease, Region},
    recipe::entities::Recipe,
    state::entities::AppState,
    view::entities::{Alert, Session, View},
};

/// Text for the active screen. Writing into a `String` cannot fail, so the
/// `fmt::Result`s are discarded. Right-to-left languages get every line
/// prefixed with a right-to-left mark.
pub fn render(session: &Session, state: &AppState) -> String {
    let t = translations(state.language);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "== {} | {} ({}) ==",
        t.app_name,
        screen_title(t, session.view),
        t.switch_language
    );

    if let Some(Alert::AnalysisFailed) = session.alert {
        let _ = writeln!(out, "! {}", t.analysis_failed);
    }

    if session.loading {
        let _ = writeln!(out, "{}", t.detecting);
        return out;
    }

    match session.view {
        View::Home => render_home(&mut out, t),
        View::Choices => render_choices(&mut out, t, &session.choices),
        View::History => render_history(&mut out, t, &state.history),
        View::Profile => render_profile(&mut out, t, state),
        View::Recipe => {
            if let Some(recipe) = &session.current_recipe {
                render_recipe(&mut out, t, recipe, session);
            }
        }
    }

    if state.language.is_rtl() {
        return out.lines().map(|line| format!("\u{200F}{line}\n")).collect();
    }
    out
}

fn screen_title(t: &Translations, view: View) -> &'static str {
    match view {
        View::Home | View::Choices => t.tagline,
        View::History => t.history,
        View::Profile => t.profile,
        View::Recipe => t.generate_recipe,
    }
}

fn render_home(out: &mut String, t: &Translations) {
    let _ = writeln!(out, "{}", t.kitchen_prompt);
    let _ = writeln!(out, "  {}", t.kitchen_example);
    let _ = writeln!(out, "{}: cook <ingredients>", t.create_from_these);
    let _ = writeln!(out, "{}", t.or_use_camera);
    let _ = writeln!(out, "{}: photo <path>", t.scan_ingredients);
    let _ = writeln!(out, "{}: meal <path>", t.analyze_meal);
}

fn render_choices(out: &mut String, t: &Translations, choices: &[Recipe]) {
    let _ = writeln!(out, "{}", t.choose_meal);
    for (i, recipe) in choices.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} {}: {} ({})",
            t.option,
            i + 1,
            recipe.title,
            recipe.prep_time
        );
    }
    let _ = writeln!(out, "cancel: {}", t.cancel_and_back);
}

fn render_history(out: &mut String, t: &Translations, history: &[Recipe]) {
    if history.is_empty() {
        let _ = writeln!(out, "{}", t.history_empty);
        return;
    }
    for (i, recipe) in history.iter().enumerate() {
        let date = recipe
            .created_at()
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let _ = write!(out, "  {}. {} [{}]", i + 1, recipe.title, date);
        if let Some(calories) = recipe.calories {
            let _ = write!(out, " | {} kcal", calories);
        }
        let _ = writeln!(out);
    }
}

fn render_profile(out: &mut String, t: &Translations, state: &AppState) {
    let profile = &state.user_profile;
    let lang = state.language;
    let measure = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_default();

    if profile.mode == CalculationMode::Calculated {
        let _ = writeln!(out, "{}: {}", t.age, measure(profile.age));
        let _ = writeln!(out, "{}: {}", t.weight, measure(profile.weight));
        let _ = writeln!(out, "{}: {}", t.height, measure(profile.height));
    }

    let diseases = profile
        .active_diseases()
        .map(|d| t.disease(d))
        .collect::<Vec<_>>();
    let diseases = if diseases.is_empty() {
        t.none.to_string()
    } else {
        diseases.join(", ")
    };
    let _ = writeln!(out, "{}: {}", t.diseases, diseases);
    let _ = writeln!(out, "{}: {}", t.dietary_prefs, diet_label(lang, profile.diet));
    let _ = writeln!(out, "{}: {}", t.region, region_label(lang, profile.region));
    let _ = writeln!(out, "{}: {}", t.calculation_mode, t.mode(profile.mode));

    let options = |values: Vec<&str>| values.join(" | ");
    let _ = writeln!(
        out,
        "  disease: {}",
        options(Disease::SELECTABLE.iter().map(|d| d.as_str()).collect())
    );
    let _ = writeln!(
        out,
        "  diet: {}",
        options(DietType::ALL.iter().map(|d| d.as_str()).collect())
    );
    let _ = writeln!(
        out,
        "  region: {}",
        options(Region::ALL.iter().map(|r| r.as_str()).collect())
    );
    let _ = writeln!(out, "save: {}", t.save);
}

fn render_recipe(out: &mut String, t: &Translations, recipe: &Recipe, session: &Session) {
    let _ = writeln!(out, "# {}", recipe.title);
    match recipe.calories {
        Some(calories) => {
            let _ = writeln!(out, "{} | {} kcal", recipe.prep_time, calories);
        }
        None => {
            let _ = writeln!(out, "{}", recipe.prep_time);
        }
    }

    if !recipe.detected_ingredients.is_empty() {
        let _ = writeln!(
            out,
            "{}: {}",
            t.ingredients_found,
            recipe.detected_ingredients.join(", ")
        );
    }

    let _ = writeln!(out, "{}:", t.ingredients);
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let _ = write!(out, "  {}. {}", i + 1, ingredient);
        if let Some(subs) = session.cached_substitutes(ingredient) {
            let _ = write!(out, "  -> {}: {}", t.substitutes, subs.join(", "));
        }
        let _ = writeln!(out);
    }

    let heading = if recipe.is_meal_analysis {
        t.health_report
    } else {
        t.preparation
    };
    let _ = writeln!(out, "{}:", heading);
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use visionchef_core::domain::{
        localization::Language,
        recipe::entities::NewRecipe,
    };

    use super::*;

    fn recipe(is_meal_analysis: bool) -> Recipe {
        Recipe::new(
            NewRecipe {
                title: "Shakshuka".to_string(),
                ingredients: vec!["eggs".to_string(), "tomato".to_string()],
                steps: vec!["simmer tomatoes".to_string(), "crack eggs".to_string()],
                calories: Some(320),
                prep_time: "20 min".to_string(),
                detected_ingredients: vec![],
                is_meal_analysis,
            },
            Utc::now(),
        )
    }

    fn english() -> AppState {
        AppState {
            language: Language::En,
            ..Default::default()
        }
    }

    #[test]
    fn test_home_defaults_to_arabic() {
        let out = render(&Session::default(), &AppState::default());
        assert!(out.contains("شيف العيلة"));
        assert!(out.contains("ماذا يوجد في مطبخك الآن؟"));
    }

    #[test]
    fn test_loading_hides_screen_body() {
        let session = Session {
            loading: true,
            ..Default::default()
        };
        let out = render(&session, &english());
        assert!(out.contains("Cooking up ideas..."));
        assert!(!out.contains("What is in your kitchen?"));
    }

    #[test]
    fn test_alert_is_shown() {
        let session = Session {
            alert: Some(Alert::AnalysisFailed),
            ..Default::default()
        };
        assert!(render(&session, &english()).contains("Sorry, an error occurred."));
    }

    #[test]
    fn test_recipe_lists_substitutes() {
        let dish = recipe(false);
        let mut session = Session {
            view: View::Recipe,
            current_recipe: Some(dish),
            ..Default::default()
        };
        session
            .substitutes
            .insert("eggs".to_string(), vec!["tofu".to_string()]);

        let out = render(&session, &english());
        assert!(out.contains("# Shakshuka"));
        assert!(out.contains("20 min | 320 kcal"));
        assert!(out.contains("1. eggs  -> Substitutes: tofu"));
        assert!(out.contains("2. crack eggs"));
    }

    #[test]
    fn test_meal_analysis_uses_health_report_heading() {
        let session = Session {
            view: View::Recipe,
            current_recipe: Some(recipe(true)),
            ..Default::default()
        };
        let out = render(&session, &english());
        let ingredients = out.find("Ingredients:").unwrap();
        let report = out.find("Health Report:").unwrap();
        assert!(ingredients < report);
        assert!(out[ingredients..report].contains("1. eggs"));
        assert!(out[report..].contains("1. simmer tomatoes"));
        assert!(!out.contains("Preparation:"));
    }

    #[test]
    fn test_recipe_uses_preparation_heading() {
        let session = Session {
            view: View::Recipe,
            current_recipe: Some(recipe(false)),
            ..Default::default()
        };
        let out = render(&session, &english());
        assert!(out.contains("Ingredients:"));
        assert!(out.contains("Preparation:"));
        assert!(!out.contains("Health Report:"));
    }

    #[test]
    fn test_empty_history() {
        let session = Session {
            view: View::History,
            ..Default::default()
        };
        assert!(render(&session, &english()).contains("History is empty"));
    }

    #[test]
    fn test_profile_shows_labels() {
        let session = Session {
            view: View::Profile,
            ..Default::default()
        };
        let out = render(&session, &english());
        assert!(!out.contains("Age:"));
        assert!(!out.contains("Weight"));
        assert!(out.contains("Health Status: None"));
        assert!(out.contains("Kitchen Region: International"));
        assert!(out.contains("Calculation Mode: Free Mode"));
    }

    #[test]
    fn test_calculated_profile_shows_measurements() {
        let session = Session {
            view: View::Profile,
            ..Default::default()
        };
        let mut state = english();
        state.user_profile.mode = CalculationMode::Calculated;

        let out = render(&session, &state);
        assert!(out.contains("Age: 30"));
        assert!(out.contains("Calculation Mode: Calculated"));
    }

    #[test]
    fn test_history_shows_calories() {
        let session = Session {
            view: View::History,
            ..Default::default()
        };
        let mut light = recipe(false);
        light.title = "Fattoush".to_string();
        light.calories = None;
        let mut state = english();
        state.history = vec![recipe(false), light];

        let out = render(&session, &state);
        let lines = out.lines().collect::<Vec<_>>();
        assert!(lines.iter().any(|l| l.contains("1. Shakshuka") && l.ends_with("| 320 kcal")));
        assert!(lines.iter().any(|l| l.contains("2. Fattoush") && !l.contains("kcal")));
    }

    #[test]
    fn test_home_offers_typed_and_camera_input() {
        let out = render(&Session::default(), &english());
        assert!(out.contains("Create recipes from these: cook <ingredients>"));
        assert!(out.contains("OR use Camera"));
    }

    #[test]
    fn test_arabic_lines_carry_rtl_mark() {
        let out = render(&Session::default(), &AppState::default());
        assert!(out.lines().all(|line| line.starts_with('\u{200F}')));

        let out = render(&Session::default(), &english());
        assert!(!out.contains('\u{200F}'));
    }
}
