use super::{extract_age, AgeResolver, LookupError};
use crate::config::SearchConfig;
use crate::core::{Error, Result, ResultExt};
use base64::prelude::*;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextParam {
    pub key: String,
    pub value: String,
}

/// Request body understood by the search proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub source: String,
    pub domain: String,
    pub query: String,
    pub start_page: u32,
    pub pages: u32,
    pub context: Vec<ContextParam>,
}

impl SearchQuery {
    /// Single-page `"<first> <last> age"` query.
    pub fn for_person(settings: &SearchConfig, first_name: &str, last_name: &str) -> Self {
        Self {
            source: settings.source.clone(),
            domain: settings.domain.clone(),
            query: format!("{first_name} {last_name} age"),
            start_page: 1,
            pages: 1,
            context: vec![ContextParam {
                key: "results_language".to_string(),
                value: settings.results_language.clone(),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    content: Option<String>,
}

/// Raw HTML of the first search result.
fn first_result_html(body: &str) -> std::result::Result<String, LookupError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    response
        .results
        .into_iter()
        .next()
        .and_then(|result| result.content)
        .ok_or_else(|| LookupError::MalformedResponse("missing results[0].content".to_string()))
}

/// `Basic <base64(user:pass)>`
pub fn basic_authorization(user: &str, pass: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(format!("{user}:{pass}")))
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnv(name.to_string())),
    }
}

/// Resolves ages through a realtime search-proxy API.
pub struct SearchProxyResolver {
    client: reqwest::Client,
    settings: SearchConfig,
    authorization: String,
}

impl SearchProxyResolver {
    pub fn new(settings: SearchConfig, user: &str, pass: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stancemap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            authorization: basic_authorization(user, pass),
            settings,
        })
    }

    /// Build a resolver with credentials taken from the environment variables
    /// named in `settings`.
    pub fn from_env(settings: SearchConfig) -> Result<Self> {
        let user = required_env(&settings.user_env).context("Reading search credentials")?;
        let pass = required_env(&settings.pass_env).context("Reading search credentials")?;
        Self::new(settings, &user, &pass)
    }
}

impl AgeResolver for SearchProxyResolver {
    async fn resolve_age(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> std::result::Result<u32, LookupError> {
        let query = SearchQuery::for_person(&self.settings, first_name, last_name);
        log::trace!("Querying search proxy: {:?}", query.query);

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let html = first_result_html(&body)?;
        extract_age(&html)
    }
}
