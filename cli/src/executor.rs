use anyhow::bail;
use visionchef_core::{
    application::ChefApp,
    domain::{
        analysis::{
            services::AnalysisService,
            value_objects::{AnalysisInput, AnalysisMode},
        },
        profile::value_objects::ProfilePatch,
        state::ports::StatePersistence,
        view::value_objects::Action,
    },
};

use crate::commands::{Command, HELP, load_image};

/// What the loop should do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Print(String),
    Quit,
}

/// Typed ingredients are separated by commas (Latin or Arabic) or newlines.
fn lists_items(text: &str) -> bool {
    text.split([',', '،', '\n'])
        .any(|item| !item.trim().is_empty())
}

fn edit(patch: ProfilePatch) -> Action {
    Action::EditProfile(patch)
}

pub async fn execute<A, P>(app: &mut ChefApp<A, P>, command: Command) -> Result<Flow, anyhow::Error>
where
    A: AnalysisService,
    P: StatePersistence,
{
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => return Ok(Flow::Print(HELP.to_string())),
        Command::Ingredients(text) => {
            if !lists_items(&text) {
                return Ok(Flow::Print(app.translations().no_ingredients.to_string()));
            }
            app.analyze(AnalysisInput::text(text), AnalysisMode::Ingredients)
                .await?
        }
        Command::Photo { path, mode } => {
            let input = load_image(&path).await?;
            app.analyze(input, mode).await?
        }
        Command::Choose(index) => app.dispatch(Action::ChooseRecipe(index))?,
        Command::Cancel => app.dispatch(Action::CancelChoices)?,
        Command::Open(index) => app.dispatch(Action::OpenHistoryEntry(index))?,
        Command::Close => app.dispatch(Action::CloseRecipe)?,
        Command::Substitutes(index) => {
            let Some(ingredient) = app
                .session()
                .current_recipe
                .as_ref()
                .and_then(|recipe| recipe.ingredients.get(index))
                .cloned()
            else {
                bail!("no ingredient {} on this screen", index + 1);
            };

            match app.substitutes(&ingredient).await {
                Ok(_) => {}
                Err(e) if e.is_analysis_failure() => {
                    tracing::warn!("Substitutes for {} unavailable: {}", ingredient, e);
                    return Ok(Flow::Print(app.translations().analysis_failed.to_string()));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Age(age) => app.dispatch(edit(ProfilePatch {
            age: Some(age),
            ..Default::default()
        }))?,
        Command::Weight(weight) => app.dispatch(edit(ProfilePatch {
            weight: Some(weight),
            ..Default::default()
        }))?,
        Command::Height(height) => app.dispatch(edit(ProfilePatch {
            height: Some(height),
            ..Default::default()
        }))?,
        Command::Diet(diet) => app.dispatch(edit(ProfilePatch::diet(diet)))?,
        Command::Region(region) => app.dispatch(edit(ProfilePatch::region(region)))?,
        Command::Mode(mode) => app.dispatch(edit(ProfilePatch::mode(mode)))?,
        Command::Disease(disease) => {
            let patch = ProfilePatch::toggle_disease(&app.state().user_profile, disease);
            app.dispatch(edit(patch))?
        }
        Command::Save => app.dispatch(Action::SaveProfile)?,
        Command::Language => app.dispatch(Action::ToggleLanguage)?,
        Command::Go(tab) => app.dispatch(Action::Navigate(tab))?,
    }

    Ok(Flow::Continue)
}
