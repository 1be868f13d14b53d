use std::future::Future;

use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    analysis::{
        helpers::{parse_recipes, parse_substitutes},
        ports::PromptGateway,
        prompts::{build_analysis_prompt, build_substitutes_prompt},
        schema::{get_recipe_reply_schema, get_substitutes_reply_schema},
        value_objects::{AnalysisInput, AnalyzeInput},
    },
    common::entities::app_errors::CoreError,
    localization::Language,
    proxy::value_objects::ForwardPromptInput,
    recipe::entities::Recipe,
};

/// Service trait for turning user input into recipes
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn substitutes(
        &self,
        ingredient: String,
        language: Language,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

#[derive(Debug, Clone)]
pub struct AnalysisAdapter<G>
where
    G: PromptGateway,
{
    gateway: G,
}

impl<G> AnalysisAdapter<G>
where
    G: PromptGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G> AnalysisService for AnalysisAdapter<G>
where
    G: PromptGateway,
{
    #[instrument(skip(self, input), fields(mode = ?input.mode, language = input.language.as_str()))]
    async fn analyze(&self, input: AnalyzeInput) -> Result<Vec<Recipe>, CoreError> {
        let prompt = build_analysis_prompt(&input);
        let image = match input.input {
            AnalysisInput::Image(image) => Some(image),
            AnalysisInput::Text(_) => None,
        };

        let reply = self
            .gateway
            .complete(ForwardPromptInput {
                prompt,
                image,
                response_schema: Some(get_recipe_reply_schema()),
            })
            .await?;

        let recipes = parse_recipes(&reply, input.mode.is_meal(), Utc::now())?;
        tracing::info!(count = recipes.len(), "analysis produced recipes");
        Ok(recipes)
    }

    #[instrument(skip(self))]
    async fn substitutes(
        &self,
        ingredient: String,
        language: Language,
    ) -> Result<Vec<String>, CoreError> {
        let reply = self
            .gateway
            .complete(ForwardPromptInput {
                prompt: build_substitutes_prompt(&ingredient, language),
                image: None,
                response_schema: Some(get_substitutes_reply_schema()),
            })
            .await?;

        parse_substitutes(&reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{
        analysis::value_objects::AnalysisMode,
        profile::entities::{Disease, UserProfile},
    };

    #[derive(Clone, Default)]
    struct CannedGateway {
        reply: Option<String>,
        sent: Arc<Mutex<Vec<ForwardPromptInput>>>,
    }

    impl PromptGateway for CannedGateway {
        async fn complete(&self, input: ForwardPromptInput) -> Result<String, CoreError> {
            self.sent.lock().unwrap().push(input);
            self.reply.clone().ok_or(CoreError::AnalysisFailed)
        }
    }

    fn gateway(reply: &str) -> CannedGateway {
        CannedGateway {
            reply: Some(reply.to_string()),
            ..Default::default()
        }
    }

    fn text_input(mode: AnalysisMode) -> AnalyzeInput {
        AnalyzeInput {
            input: AnalysisInput::text("rice, lentils"),
            mode,
            profile: UserProfile {
                diseases: vec![Disease::Hypertension],
                ..Default::default()
            },
            language: Language::En,
        }
    }

    #[tokio::test]
    async fn test_analyze_sends_prompt_with_schema() {
        let gateway = gateway(
            r#"{"recipes": [{"title": "Mujadara", "ingredients": ["rice", "lentils"], "steps": ["cook"], "prepTime": "40 min"}]}"#,
        );
        let adapter = AnalysisAdapter::new(gateway.clone());

        let recipes = adapter.analyze(text_input(AnalysisMode::Ingredients)).await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Mujadara");

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].prompt.contains("hypertension"));
        assert!(sent[0].image.is_none());
        assert_eq!(sent[0].response_schema, Some(get_recipe_reply_schema()));
    }

    #[tokio::test]
    async fn test_meal_analysis_marks_recipes() {
        let gateway = gateway(
            r#"[{"title": "Kabsa", "ingredients": ["rice", "chicken"], "steps": ["High sodium"], "calories": 780, "prepTime": "-"}]"#,
        );
        let adapter = AnalysisAdapter::new(gateway);

        let recipes = adapter.analyze(text_input(AnalysisMode::Meal)).await.unwrap();
        assert!(recipes[0].is_meal_analysis);
        assert_eq!(recipes[0].calories, Some(780));
    }

    #[tokio::test]
    async fn test_image_input_is_forwarded() {
        let gateway = gateway(
            r#"{"recipes": [{"title": "Salad", "ingredients": ["cucumber"], "steps": ["chop"], "prepTime": "5 min"}]}"#,
        );
        let adapter = AnalysisAdapter::new(gateway.clone());

        let mut input = text_input(AnalysisMode::Ingredients);
        input.input = AnalysisInput::from_image_bytes(&[0xff, 0xd8, 0xff], "image/jpeg");
        adapter.analyze(input).await.unwrap();

        let sent = gateway.sent.lock().unwrap();
        let image = sent[0].image.as_ref().unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "/9j/");
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let adapter = AnalysisAdapter::new(CannedGateway::default());
        let err = adapter
            .analyze(text_input(AnalysisMode::Ingredients))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::AnalysisFailed);
    }

    #[tokio::test]
    async fn test_substitutes_lookup() {
        let gateway = gateway(r#"{"substitutes": ["margarine", "coconut oil"]}"#);
        let adapter = AnalysisAdapter::new(gateway.clone());

        let subs = adapter
            .substitutes("butter".to_string(), Language::Ar)
            .await
            .unwrap();

        assert_eq!(subs, vec!["margarine".to_string(), "coconut oil".to_string()]);
        assert!(gateway.sent.lock().unwrap()[0].prompt.contains("butter"));
    }
}
