//! Client for the hosted generative-text endpoint behind the "Ask AI"
//! buttons.
//!
//! The endpoint is optional. Every failure, including a missing key, ends in
//! a fixed apology string from [`ask_or_apologize`]; callers never see an
//! error.

use futures::future::LocalBoxFuture;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("No API key configured.")]
    MissingApiKey,
    /// An unhandled API error, containing the response text.
    #[error("{1}")]
    Api(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("The model returned no text.")]
    EmptyResponse,
}

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, GenAiError>>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, with its parts joined.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String =
            content.parts.into_iter().filter_map(|p| p.text).collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Talks to the `generateContent` REST endpoint.
pub struct GenAiClient {
    pub api_key: Option<String>,
    pub model: String,
    pub inner_client: reqwest::Client,
}

impl GenAiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self) -> String {
        format!("{ENDPOINT}/{}:generateContent", self.model)
    }

    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<String, GenAiError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenAiError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let response = self
            .inner_client
            .post(self.format_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenAiError::Api(
                response.status(),
                response.text().await?,
            ));
        }

        response
            .json::<GenerateResponse>()
            .await?
            .into_text()
            .ok_or(GenAiError::EmptyResponse)
    }
}

impl TextGenerator for GenAiClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, GenAiError>> {
        Box::pin(self.generate_content(prompt))
    }
}

/// A prompt together with the strings shown when it cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Shown when the call fails.
    pub apology: &'static str,
    /// Shown when the call succeeds with no text.
    pub empty: &'static str,
}

impl Prompt {
    /// Household waste guide: where does `item` go?
    pub fn disposal(item: &str) -> Self {
        Self {
            text: format!(
                "You are a waste management expert for Kigali, Rwanda.\n\
                 User asks: \"How do I dispose of {item}?\"\n\
                 Provide a concise instruction (max 2 sentences) on which bin \
                 it goes to (Green for Organic, Blue for Recycling, Black for \
                 General) and any special handling (e.g. wash it)."
            ),
            apology: "AI Service unavailable. Please check the standard guide.",
            empty: "Could not retrieve info.",
        }
    }

    /// Official enforcement: assess one compliance case.
    pub fn compliance(case_id: &str, finding: &str) -> Self {
        Self {
            text: format!(
                "You are a city compliance officer. Analyze Report #{case_id}: \
                 \"{finding}\"\n\
                 Assess severity (Low/Medium/High), environmental risk, and \
                 recommended immediate action. Keep it under 50 words."
            ),
            apology: "AI Analysis Service Unavailable.",
            empty: "Analysis failed.",
        }
    }

    /// Official policy docs: summarise the sanitation master plan.
    pub fn policy_summary() -> Self {
        Self {
            text: "Summarize the \"Kigali Sanitation Master Plan 2025\" \
                   focusing on household responsibilities and fines for \
                   non-compliance. Keep it concise bullet points."
                .to_string(),
            apology: "AI Service Unavailable.",
            empty: "No summary.",
        }
    }
}

/// Ask `generator`, converting every failure into the prompt's fixed text.
pub async fn ask_or_apologize(
    generator: &impl TextGenerator,
    prompt: &Prompt,
) -> String {
    match generator.generate(&prompt.text).await {
        Ok(text) => text,
        Err(GenAiError::EmptyResponse) => {
            tracing::warn!("generative model returned no text");
            prompt.empty.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "generative text request failed");
            prompt.apology.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Scripted {
        reply: RefCell<Option<Result<String, GenAiError>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(reply: Result<String, GenAiError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                prompts: RefCell::default(),
            }
        }
    }

    impl TextGenerator for Scripted {
        fn generate<'a>(
            &'a self,
            prompt: &'a str,
        ) -> LocalBoxFuture<'a, Result<String, GenAiError>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            let reply = self
                .reply
                .borrow_mut()
                .take()
                .unwrap_or(Err(GenAiError::EmptyResponse));
            Box::pin(async move { reply })
        }
    }

    #[test]
    fn answer_passes_through() {
        let generator = Scripted::new(Ok("Blue bin, rinse first.".into()));
        let prompt = Prompt::disposal("yoghurt cup");
        let answer = block_on(ask_or_apologize(&generator, &prompt));
        assert_eq!(answer, "Blue bin, rinse first.");
        assert!(
            generator.prompts.borrow()[0].contains("dispose of yoghurt cup")
        );
    }

    #[test]
    fn missing_key_yields_the_apology() {
        let generator = Scripted::new(Err(GenAiError::MissingApiKey));
        let prompt = Prompt::policy_summary();
        let answer = block_on(ask_or_apologize(&generator, &prompt));
        assert_eq!(answer, "AI Service Unavailable.");
    }

    #[test]
    fn api_error_yields_the_apology() {
        let generator = Scripted::new(Err(GenAiError::Api(
            StatusCode::FORBIDDEN,
            "quota".into(),
        )));
        let prompt = Prompt::compliance("1092", "Dumping near wetland.");
        let answer = block_on(ask_or_apologize(&generator, &prompt));
        assert_eq!(answer, "AI Analysis Service Unavailable.");
        assert!(generator.prompts.borrow()[0].contains("Report #1092"));
    }

    #[test]
    fn empty_answer_uses_the_empty_fallback() {
        let generator = Scripted::new(Err(GenAiError::EmptyResponse));
        let answer =
            block_on(ask_or_apologize(&generator, &Prompt::disposal("glass")));
        assert_eq!(answer, "Could not retrieve info.");
    }

    #[test]
    fn client_without_key_fails_before_the_network() {
        let client = GenAiClient::new(None, DEFAULT_MODEL);
        let result = block_on(client.generate_content("hello"));
        assert!(matches!(result, Err(GenAiError::MissingApiKey)));

        let client = GenAiClient::new(Some(String::new()), DEFAULT_MODEL);
        let result = block_on(client.generate_content("hello"));
        assert!(matches!(result, Err(GenAiError::MissingApiKey)));
    }

    #[test]
    fn response_text_is_joined_and_trimmed() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"text":"Green bin. "},{"text":"Compost it.\n"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.into_text().as_deref(),
            Some("Green bin. Compost it.")
        );

        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(parsed.into_text(), None);
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents":[{"parts":[{"text":"hi"}]}]})
        );
    }
}
