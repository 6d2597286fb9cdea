use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, ClassifyRequest};

impl ApiClient {
    /// Ask the library assistant a question.
    pub async fn ask_chatbot(&self, question: &str) -> Result<String, ApiError> {
        let response: ChatResponse = self
            .send_json(
                self.anonymous_request(Method::POST, "/chatbot")
                    .json(&ChatRequest { question }),
            )
            .await?;
        Ok(response.answer)
    }

    /// Run the document classifier over one book.
    pub async fn classify_book(&self, request: &ClassifyRequest) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.request(Method::POST, "/classify-doc").json(request))
            .await
    }
}
