use tracing::debug;

use crate::domain::{
    recipe::entities::Recipe,
    state::entities::AppState,
    view::{
        entities::{Alert, Session, View},
        value_objects::{Action, NavTab, StoreCommand},
    },
};

fn show_recipe(session: &mut Session, recipe: Recipe) {
    if session.current_recipe_id() != Some(recipe.id.as_str()) {
        session.substitutes.clear();
    }
    session.current_recipe = Some(recipe);
    session.view = View::Recipe;
}

fn leave_to(session: &mut Session, view: View) {
    if session.view == View::Recipe && view != View::Recipe {
        session.substitutes.clear();
    }
    session.view = view;
}

fn fail_analysis(session: &mut Session) {
    session.pending_request = None;
    session.loading = false;
    session.alert = Some(Alert::AnalysisFailed);
    leave_to(session, View::Home);
}

/// Applies one user or network event to the session.
///
/// Returns the next session and the persisted-state changes the event implies.
/// Events that make no sense for the active screen leave the session untouched.
pub fn reduce(mut session: Session, action: Action, app: &AppState) -> (Session, Vec<StoreCommand>) {
    let mut commands = Vec::new();

    match action {
        Action::Navigate(tab) => {
            // Leaving the screen abandons any analysis still in flight.
            session.pending_request = None;
            session.loading = false;
            let target = match tab {
                NavTab::Home => View::Home,
                NavTab::History => View::History,
                NavTab::Profile => View::Profile,
            };
            leave_to(&mut session, target);
        }
        Action::AnalysisStarted => {
            if session.view == View::Home {
                session.last_request += 1;
                session.pending_request = Some(session.last_request);
                session.loading = true;
                session.alert = None;
            }
        }
        Action::AnalysisSucceeded { request, recipes } => {
            if session.pending_request != Some(request) {
                debug!(request, "dropping stale analysis result");
                return (session, commands);
            }
            session.pending_request = None;
            session.loading = false;

            let mut recipes = recipes;
            match recipes.len() {
                0 => fail_analysis(&mut session),
                1 => {
                    let recipe = recipes.remove(0);
                    commands.push(StoreCommand::RecordRecipe(recipe.clone()));
                    session.choices.clear();
                    show_recipe(&mut session, recipe);
                }
                _ => {
                    session.choices = recipes;
                    leave_to(&mut session, View::Choices);
                }
            }
        }
        Action::AnalysisFailed { request } => {
            if session.pending_request == Some(request) {
                fail_analysis(&mut session);
            } else {
                debug!(request, "dropping stale analysis failure");
            }
        }
        Action::ChooseRecipe(index) => {
            if session.view == View::Choices && index < session.choices.len() {
                let recipe = session.choices.remove(index);
                session.choices.clear();
                commands.push(StoreCommand::RecordRecipe(recipe.clone()));
                show_recipe(&mut session, recipe);
            }
        }
        Action::CancelChoices => {
            if session.view == View::Choices {
                session.choices.clear();
                leave_to(&mut session, View::Home);
            }
        }
        Action::OpenHistoryEntry(index) => {
            if session.view == View::History {
                if let Some(recipe) = app.history.get(index) {
                    show_recipe(&mut session, recipe.clone());
                }
            }
        }
        Action::CloseRecipe => {
            if session.view == View::Recipe {
                leave_to(&mut session, View::Home);
            }
        }
        Action::EditProfile(patch) => {
            if session.view == View::Profile {
                commands.push(StoreCommand::PatchProfile(patch));
            }
        }
        Action::SaveProfile => {
            if session.view == View::Profile {
                leave_to(&mut session, View::Home);
            }
        }
        Action::ToggleLanguage => commands.push(StoreCommand::ToggleLanguage),
        Action::SubstitutesLoaded {
            recipe_id,
            ingredient,
            substitutes,
        } => {
            if session.view == View::Recipe && session.current_recipe_id() == Some(recipe_id.as_str()) {
                session.substitutes.insert(ingredient, substitutes);
            }
        }
        Action::DismissAlert => session.alert = None,
    }

    (session, commands)
}
