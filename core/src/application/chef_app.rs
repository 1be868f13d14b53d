use tracing::{error, instrument};

use crate::domain::{
    analysis::{
        services::AnalysisService,
        value_objects::{AnalysisInput, AnalysisMode, AnalyzeInput},
    },
    common::entities::app_errors::CoreError,
    localization::{Translations, translations},
    recipe::entities::Recipe,
    state::{entities::AppState, ports::StatePersistence, services::StateStore},
    view::{
        entities::{Session, View},
        services::reduce,
        value_objects::{Action, StoreCommand},
    },
};

/// An analysis that has been started and is waiting for the model.
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub request: u64,
    pub input: AnalyzeInput,
}

/// Client controller: feeds actions through the reducer, applies the
/// resulting commands to the state store and performs the network calls.
pub struct ChefApp<A, P>
where
    A: AnalysisService,
    P: StatePersistence,
{
    analysis: A,
    store: StateStore<P>,
    session: Session,
}

impl<A, P> ChefApp<A, P>
where
    A: AnalysisService,
    P: StatePersistence,
{
    pub fn new(analysis: A, store: StateStore<P>) -> Self {
        Self {
            analysis,
            store,
            session: Session::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        self.session.view
    }

    pub fn translations(&self) -> &'static Translations {
        translations(self.store.state().language)
    }

    /// Runs one action. Persisted changes are written before this returns.
    pub fn dispatch(&mut self, action: Action) -> Result<(), CoreError> {
        let session = std::mem::take(&mut self.session);
        let (session, commands) = reduce(session, action, self.store.state());
        self.session = session;

        let mut outcome = Ok(());
        for command in commands {
            let result = match command {
                StoreCommand::RecordRecipe(recipe) => self.store.record_recipe(recipe),
                StoreCommand::PatchProfile(patch) => self.store.patch_profile(patch),
                StoreCommand::ToggleLanguage => self.store.toggle_language(),
            };
            if let Err(e) = result {
                error!("Failed to persist state: {}", e);
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }

    /// Marks an analysis as started and snapshots the profile it runs against.
    /// Returns `None` when the active screen cannot start one.
    pub fn begin_analysis(
        &mut self,
        input: AnalysisInput,
        mode: AnalysisMode,
    ) -> Result<Option<PendingAnalysis>, CoreError> {
        let before = self.session.last_request;
        self.dispatch(Action::AnalysisStarted)?;

        if self.session.last_request == before {
            return Ok(None);
        }

        let state = self.store.state();
        Ok(Some(PendingAnalysis {
            request: self.session.last_request,
            input: AnalyzeInput {
                input,
                mode,
                profile: state.user_profile.clone(),
                language: state.language,
            },
        }))
    }

    /// Applies the outcome of an analysis. Outcomes for abandoned requests are ignored.
    pub fn complete_analysis(
        &mut self,
        request: u64,
        result: Result<Vec<Recipe>, CoreError>,
    ) -> Result<(), CoreError> {
        let action = match result {
            Ok(recipes) => Action::AnalysisSucceeded { request, recipes },
            Err(e) => {
                error!("Analysis failed: {}", e);
                Action::AnalysisFailed { request }
            }
        };
        self.dispatch(action)
    }

    /// Full analysis round trip. Model and transport failures end up as the
    /// session alert; only persistence failures are returned.
    #[instrument(skip(self, input))]
    pub async fn analyze(
        &mut self,
        input: AnalysisInput,
        mode: AnalysisMode,
    ) -> Result<(), CoreError> {
        let Some(pending) = self.begin_analysis(input, mode)? else {
            return Ok(());
        };

        let result = self.analysis.analyze(pending.input).await;
        self.complete_analysis(pending.request, result)
    }

    /// Substitutes for one ingredient of the open recipe, fetched at most once
    /// per ingredient while the recipe stays open.
    #[instrument(skip(self))]
    pub async fn substitutes(&mut self, ingredient: &str) -> Result<Vec<String>, CoreError> {
        let recipe_id = match &self.session.current_recipe {
            Some(recipe) if self.session.view == View::Recipe && recipe.offers_substitutes() => {
                recipe.id.clone()
            }
            _ => return Err(CoreError::Invalid),
        };

        if let Some(cached) = self.session.cached_substitutes(ingredient) {
            return Ok(cached.to_vec());
        }

        let substitutes = self
            .analysis
            .substitutes(ingredient.to_string(), self.store.state().language)
            .await?;

        self.dispatch(Action::SubstitutesLoaded {
            recipe_id,
            ingredient: ingredient.to_string(),
            substitutes: substitutes.clone(),
        })?;

        Ok(substitutes)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use chrono::Utc;

    use super::*;
    use crate::{
        domain::{
            localization::Language,
            profile::{entities::DietType, value_objects::ProfilePatch},
            recipe::entities::NewRecipe,
            state::entities::{HISTORY_LIMIT, STORAGE_KEY},
            view::{entities::Alert, value_objects::NavTab},
        },
        infrastructure::storage::MemoryStatePersistence,
    };

    #[derive(Default)]
    struct ScriptedAnalysis {
        replies: Mutex<VecDeque<Result<Vec<Recipe>, CoreError>>>,
        seen: Mutex<Vec<AnalyzeInput>>,
        substitute_calls: AtomicUsize,
    }

    impl ScriptedAnalysis {
        fn with_replies(replies: Vec<Result<Vec<Recipe>, CoreError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                ..Default::default()
            }
        }
    }

    impl AnalysisService for ScriptedAnalysis {
        async fn analyze(&self, input: AnalyzeInput) -> Result<Vec<Recipe>, CoreError> {
            self.seen.lock().unwrap().push(input);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(CoreError::AnalysisFailed))
        }

        async fn substitutes(
            &self,
            ingredient: String,
            _language: Language,
        ) -> Result<Vec<String>, CoreError> {
            self.substitute_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("{ingredient} alternative")])
        }
    }

    fn recipe(title: &str) -> Recipe {
        Recipe::new(
            NewRecipe {
                title: title.to_string(),
                ingredients: vec!["chickpeas".to_string(), "tahini".to_string()],
                steps: vec!["blend".to_string()],
                calories: Some(250),
                prep_time: "10 min".to_string(),
                detected_ingredients: vec![],
                is_meal_analysis: false,
            },
            Utc::now(),
        )
    }

    fn app(
        analysis: ScriptedAnalysis,
        persistence: MemoryStatePersistence,
    ) -> ChefApp<ScriptedAnalysis, MemoryStatePersistence> {
        ChefApp::new(analysis, StateStore::load(persistence, STORAGE_KEY))
    }

    fn stored_state(persistence: &MemoryStatePersistence) -> AppState {
        let payload = persistence.read(STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&payload).unwrap()
    }

    #[tokio::test]
    async fn test_single_recipe_is_shown_and_persisted() {
        let persistence = MemoryStatePersistence::new();
        let dish = recipe("Hummus");
        let mut app = app(
            ScriptedAnalysis::with_replies(vec![Ok(vec![dish.clone()])]),
            persistence.clone(),
        );

        app.analyze(AnalysisInput::text("chickpeas"), AnalysisMode::Ingredients)
            .await
            .unwrap();

        assert_eq!(app.view(), View::Recipe);
        assert_eq!(app.session().current_recipe.as_ref(), Some(&dish));
        assert_eq!(stored_state(&persistence).history, vec![dish]);
    }

    #[tokio::test]
    async fn test_choices_then_pick() {
        let options = vec![recipe("One"), recipe("Two")];
        let mut app = app(
            ScriptedAnalysis::with_replies(vec![Ok(options.clone())]),
            MemoryStatePersistence::new(),
        );

        app.analyze(AnalysisInput::text("x"), AnalysisMode::Ingredients)
            .await
            .unwrap();
        assert_eq!(app.view(), View::Choices);
        assert!(app.state().history.is_empty());

        app.dispatch(Action::ChooseRecipe(1)).unwrap();
        assert_eq!(app.session().current_recipe.as_ref(), Some(&options[1]));
        assert_eq!(app.state().history, vec![options[1].clone()]);
    }

    #[tokio::test]
    async fn test_failure_raises_alert() {
        let mut app = app(
            ScriptedAnalysis::with_replies(vec![Err(CoreError::MalformedReply("junk".to_string()))]),
            MemoryStatePersistence::new(),
        );

        app.analyze(AnalysisInput::text("x"), AnalysisMode::Meal)
            .await
            .unwrap();

        assert_eq!(app.view(), View::Home);
        assert_eq!(app.session().alert, Some(Alert::AnalysisFailed));
        assert!(!app.session().loading);
    }

    #[tokio::test]
    async fn test_history_keeps_twenty_most_recent_across_analyses() {
        let replies = (0..23).map(|i| Ok(vec![recipe(&format!("dish {i}"))])).collect();
        let persistence = MemoryStatePersistence::new();
        let mut app = app(ScriptedAnalysis::with_replies(replies), persistence.clone());

        for _ in 0..23 {
            app.analyze(AnalysisInput::text("x"), AnalysisMode::Ingredients)
                .await
                .unwrap();
            app.dispatch(Action::CloseRecipe).unwrap();
        }

        let history = stored_state(&persistence).history;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].title, "dish 22");
        assert_eq!(history[HISTORY_LIMIT - 1].title, "dish 3");
    }

    #[tokio::test]
    async fn test_analysis_uses_current_profile_and_language() {
        let analysis = ScriptedAnalysis::with_replies(vec![Ok(vec![recipe("a")])]);
        let mut app = app(analysis, MemoryStatePersistence::new());

        app.dispatch(Action::Navigate(NavTab::Profile)).unwrap();
        app.dispatch(Action::EditProfile(ProfilePatch::diet(DietType::Paleo)))
            .unwrap();
        app.dispatch(Action::SaveProfile).unwrap();
        app.dispatch(Action::ToggleLanguage).unwrap();

        let pending = app
            .begin_analysis(AnalysisInput::text("beef"), AnalysisMode::Ingredients)
            .unwrap()
            .unwrap();

        assert_eq!(pending.input.profile.diet, DietType::Paleo);
        assert_eq!(pending.input.language, Language::En);
    }

    #[tokio::test]
    async fn test_stale_result_after_navigation_is_ignored() {
        let mut app = app(ScriptedAnalysis::default(), MemoryStatePersistence::new());

        let pending = app
            .begin_analysis(AnalysisInput::text("x"), AnalysisMode::Ingredients)
            .unwrap()
            .unwrap();
        app.dispatch(Action::Navigate(NavTab::History)).unwrap();
        app.complete_analysis(pending.request, Ok(vec![recipe("late")]))
            .unwrap();

        assert_eq!(app.view(), View::History);
        assert!(app.state().history.is_empty());
    }

    #[tokio::test]
    async fn test_begin_outside_home_does_nothing() {
        let mut app = app(ScriptedAnalysis::default(), MemoryStatePersistence::new());
        app.dispatch(Action::Navigate(NavTab::Profile)).unwrap();

        let pending = app
            .begin_analysis(AnalysisInput::text("x"), AnalysisMode::Ingredients)
            .unwrap();
        assert!(pending.is_none());
    }

    #[tokio::test]
    async fn test_substitutes_are_fetched_once_per_recipe_view() {
        let dish = recipe("Falafel");
        let mut app = app(
            ScriptedAnalysis::with_replies(vec![Ok(vec![dish.clone()])]),
            MemoryStatePersistence::new(),
        );
        app.analyze(AnalysisInput::text("x"), AnalysisMode::Ingredients)
            .await
            .unwrap();

        let first = app.substitutes("tahini").await.unwrap();
        let second = app.substitutes("tahini").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(app.analysis.substitute_calls.load(Ordering::SeqCst), 1);

        app.substitutes("chickpeas").await.unwrap();
        assert_eq!(app.analysis.substitute_calls.load(Ordering::SeqCst), 2);

        // Reopening the recipe starts a fresh cache.
        app.dispatch(Action::CloseRecipe).unwrap();
        app.dispatch(Action::Navigate(NavTab::History)).unwrap();
        app.dispatch(Action::OpenHistoryEntry(0)).unwrap();
        app.substitutes("tahini").await.unwrap();
        assert_eq!(app.analysis.substitute_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_no_substitutes_for_meal_analysis() {
        let mut meal = recipe("Mandi");
        meal.is_meal_analysis = true;
        let mut app = app(
            ScriptedAnalysis::with_replies(vec![Ok(vec![meal])]),
            MemoryStatePersistence::new(),
        );
        app.analyze(AnalysisInput::text("x"), AnalysisMode::Meal)
            .await
            .unwrap();

        assert_eq!(app.substitutes("rice").await.unwrap_err(), CoreError::Invalid);
        assert_eq!(app.analysis.substitute_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reload_reproduces_state() {
        let persistence = MemoryStatePersistence::new();
        let mut first = app(ScriptedAnalysis::default(), persistence.clone());
        first.dispatch(Action::ToggleLanguage).unwrap();
        first.dispatch(Action::Navigate(NavTab::Profile)).unwrap();
        first
            .dispatch(Action::EditProfile(ProfilePatch {
                age: Some(52),
                ..Default::default()
            }))
            .unwrap();

        let second = app(ScriptedAnalysis::default(), persistence);
        assert_eq!(second.state(), first.state());
        assert_eq!(second.view(), View::Home);
    }
}
