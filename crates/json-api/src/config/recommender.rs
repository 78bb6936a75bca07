//! Recommender Config

use clap::Args;
use partsmith_app::recommender::RecommenderConfig;

/// Language model settings.
#[derive(Debug, Args)]
pub struct RecommenderArgs {
    /// OpenAI-compatible API base URL; recommendations are disabled when omitted
    #[arg(long, env = "RECOMMENDER_BASE_URL")]
    pub recommender_base_url: Option<String>,

    /// API key sent as a bearer token
    #[arg(long, env = "RECOMMENDER_API_KEY", hide_env_values = true)]
    pub recommender_api_key: Option<String>,

    /// Model name
    #[arg(long, env = "RECOMMENDER_MODEL", default_value = "gpt-4o-mini")]
    pub recommender_model: String,
}

impl RecommenderArgs {
    /// Client configuration, `None` when no base URL is set.
    pub fn config(&self) -> Option<RecommenderConfig> {
        self.recommender_base_url
            .as_ref()
            .map(|base_url| RecommenderConfig {
                base_url: base_url.clone(),
                api_key: self.recommender_api_key.clone(),
                model: self.recommender_model.clone(),
            })
    }
}
