use std::time::Instant;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::{timeout_duration, HTTP_REFERER, HTTP_TITLE};
use crate::constants::prompts::SYSTEM_PROMPT;
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::prompt_generator::generate_prompt;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::verdict_parser::parse_verdict;
use crate::structs::ai::api_error::ApiErrorBody;
use crate::structs::ai::chat::chat_message::ChatMessage;
use crate::structs::ai::chat::chat_request::{ChatRequest, ResponseFormat};
use crate::structs::ai::chat::chat_response::ChatResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::verdict::Verdict;
use crate::traits::verdict_provider::VerdictProvider;

/// Verdict client for OpenAI-compatible chat-completions endpoints
/// (OpenRouter by default). One attempt per call, bounded by the client
/// timeout, no retries.
#[derive(Clone)]
pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_diff_chars: usize,
}

impl OpenRouterProvider {
    pub fn new(api_key: &str, config: &AiConfig, max_diff_chars: usize) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: Self::clean_api_key(api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_diff_chars,
        })
    }

    /// Keys pasted into CI secrets often carry quotes or trailing newlines.
    pub fn clean_api_key(raw: &str) -> String {
        raw.trim().trim_matches('"').trim_matches('\'').to_string()
    }

    fn get_request(&self, user_prompt: String) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
            response_format: Some(ResponseFormat::json_object()),
        }
    }

    async fn make_request(&self, request_body: &ChatRequest) -> Result<reqwest::Response, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", HTTP_REFERER)
            .header("X-Title", HTTP_TITLE)
            .json(request_body)
            .send()
            .await
            .map_err(AiProviderError::from_reqwest)
    }

    pub async fn request_verdict(&self, diff_text: &str) -> Result<Verdict, AiProviderError> {
        let prompt = generate_prompt(diff_text, self.max_diff_chars);
        log::info!("🤖 Sending diff to {}...", self.model);
        log::info!("📦 Context payload: {} chars", prompt.submitted_chars);
        if prompt.truncated {
            log::warn!(
                "✂️ Diff exceeds {} chars; only the first {} chars are reviewed by AI",
                self.max_diff_chars, prompt.submitted_chars
            );
        }

        let request_body = self.get_request(prompt.content);
        let started = Instant::now();
        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = ApiErrorBody::message_from(&error_text);

            return Err(match status.as_u16() {
                401 | 403 => AiProviderError::AuthenticationError(message),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", message)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, message)),
            });
        }

        let body: ChatResponse = response.json().await.map_err(AiProviderError::from_reqwest)?;
        log::info!("⏱️ AI analysis time: {:.2}s", started.elapsed().as_secs_f64());

        let content = body
            .first_content()
            .ok_or_else(|| AiProviderError::SchemaViolation("No content in response".to_string()))?;

        parse_verdict(content).map_err(|e| {
            log::warn!("⚠️ Raw AI response could not be parsed: {}", content);
            e
        })
    }
}

#[async_trait]
impl VerdictProvider for OpenRouterProvider {
    async fn analyze(&self, diff_text: &str) -> Verdict {
        let mut logger = AnimatedLogger::new(format!("Analyzing diff with {}", self.model));
        logger.start();
        let result = self.request_verdict(diff_text).await;

        match result {
            Ok(verdict) => {
                logger.stop("AI analysis complete").await;
                verdict
            }
            Err(e) => {
                logger.error("AI analysis failed").await;
                log::error!("❌ AI engine failure, failing closed: {}", e);
                let reason = match e {
                    AiProviderError::SerializationError(_) | AiProviderError::SchemaViolation(_) => {
                        format!("AI output parsing failed. Manual review required. ({})", e)
                    }
                    _ => format!("Internal Engine Error: {}", e),
                };
                Verdict::fail_closed(&reason)
            }
        }
    }
}
