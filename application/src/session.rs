//! Budgeted call session.
//!
//! A [`CallSession`] is created for exactly one question and handed to the
//! classifier and every strategy by `&mut`. It owns that question's
//! [`CallBudget`], so calls can never leak across questions.

use crate::ports::call_logger::{CallEvent, CallLogger, NoCallLogger};
use crate::ports::completion_client::{CompletionClient, CompletionRequest};
use serde_json::json;
use strata_domain::core::string::truncate;
use strata_domain::{BudgetExhausted, CallBudget, Category, PromptTemplate};
use thiserror::Error;
use tracing::{debug, warn};

/// Characters of prompt/reply kept in transcript previews
const PREVIEW_LEN: usize = 400;

/// Failure of a single budgeted call
///
/// The display strings are the inline error texts recorded in answer slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("ERROR: max call limit reached")]
    BudgetExhausted,

    #[error("ERROR status={status} {detail}")]
    Remote { status: i32, detail: String },
}

impl From<BudgetExhausted> for CallError {
    fn from(_: BudgetExhausted) -> Self {
        CallError::BudgetExhausted
    }
}

impl CallError {
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, CallError::BudgetExhausted)
    }
}

/// Per-question wrapper around the completion client
pub struct CallSession<'a> {
    client: &'a dyn CompletionClient,
    logger: &'a dyn CallLogger,
    budget: CallBudget,
    position: Option<usize>,
    category: Option<String>,
    stage: &'static str,
}

impl<'a> CallSession<'a> {
    pub fn new(client: &'a dyn CompletionClient, budget: CallBudget) -> Self {
        Self {
            client,
            logger: &NoCallLogger,
            budget,
            position: None,
            category: None,
            stage: "unlabelled",
        }
    }

    /// Record every call to `logger`
    pub fn with_logger(mut self, logger: &'a dyn CallLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Tag transcript entries with the question's 1-based position
    pub fn for_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Label subsequent calls in the transcript (e.g. "classify", "math")
    pub fn set_stage(&mut self, stage: &'static str) {
        self.stage = stage;
    }

    /// Tag subsequent transcript entries with the routed category
    pub fn set_category(&mut self, category: &Category) {
        self.category = Some(category.to_string());
    }

    pub fn budget(&self) -> &CallBudget {
        &self.budget
    }

    pub fn calls_made(&self) -> usize {
        self.budget.used()
    }

    /// Issue one budgeted call and return the trimmed reply text
    ///
    /// `system` defaults to the generic assistant instruction. Once the
    /// budget is spent this returns [`CallError::BudgetExhausted`] without
    /// contacting the endpoint.
    pub async fn invoke(
        &mut self,
        prompt: &str,
        temperature: f64,
        system: Option<&str>,
    ) -> Result<String, CallError> {
        let call = match self.budget.try_consume() {
            Ok(call) => call,
            Err(exhausted) => {
                warn!(
                    stage = self.stage,
                    ceiling = self.budget.ceiling(),
                    "Call budget exhausted"
                );
                return Err(exhausted.into());
            }
        };

        let system = system.unwrap_or(PromptTemplate::default_system());
        debug!(stage = self.stage, call, temperature, "Remote call");

        let request = CompletionRequest::new(system, prompt, temperature);
        let result = self.client.complete(request).await;

        match result {
            Ok(completion) => {
                let text = completion.text.trim().to_string();
                self.log_call(call, prompt, temperature, completion.status, &text);
                Ok(text)
            }
            Err(e) => {
                let error = CallError::Remote {
                    status: e.status(),
                    detail: e.detail(),
                };
                warn!(stage = self.stage, call, "Remote call failed: {}", e);
                self.log_call(call, prompt, temperature, e.status(), &error.to_string());
                Err(error)
            }
        }
    }

    fn log_call(&self, call: usize, prompt: &str, temperature: f64, status: i32, reply: &str) {
        self.logger.log(CallEvent::new(
            "completion",
            json!({
                "position": self.position,
                "category": self.category,
                "stage": self.stage,
                "call": call,
                "model": self.client.model(),
                "temperature": temperature,
                "status": status,
                "prompt": truncate(prompt, PREVIEW_LEN),
                "reply": truncate(reply, PREVIEW_LEN),
            }),
        ));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{EchoClient, ScriptedClient};
    use super::*;
    use crate::ports::completion_client::CompletionError;

    #[tokio::test]
    async fn test_invoke_trims_reply_and_counts() {
        let client = ScriptedClient::new(["  hello \n"]);
        let mut session = CallSession::new(&client, CallBudget::default());

        let reply = session.invoke("hi", 0.0, None).await.unwrap();

        assert_eq!(reply, "hello");
        assert_eq!(session.calls_made(), 1);
        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].system, "You are a helpful assistant.");
        assert_eq!(requests[0].temperature, 0.0);
    }

    #[tokio::test]
    async fn test_custom_system_prompt() {
        let client = ScriptedClient::new(["ok"]);
        let mut session = CallSession::new(&client, CallBudget::default());
        session.invoke("p", 0.5, Some("Be terse.")).await.unwrap();
        assert_eq!(client.requests.lock().unwrap()[0].system, "Be terse.");
    }

    #[tokio::test]
    async fn test_twenty_first_call_is_rejected_without_remote_call() {
        let client = EchoClient("ok");
        let mut session = CallSession::new(&client, CallBudget::default());

        for _ in 0..20 {
            assert_eq!(session.invoke("p", 0.0, None).await.unwrap(), "ok");
        }
        let err = session.invoke("p", 0.0, None).await.unwrap_err();

        assert_eq!(err, CallError::BudgetExhausted);
        assert_eq!(err.to_string(), "ERROR: max call limit reached");
        assert_eq!(session.calls_made(), 20);
    }

    #[tokio::test]
    async fn test_exhausted_budget_never_reaches_client() {
        let client = ScriptedClient::new(["unused"]);
        let mut session = CallSession::new(&client, CallBudget::new(0));
        assert!(session.invoke("p", 0.0, None).await.unwrap_err().is_budget_exhausted());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_is_formatted() {
        let client = ScriptedClient::with_results([Err(CompletionError::Http {
            status: 503,
            detail: "{\"error\": \"overloaded\"}".to_string(),
        })]);
        let mut session = CallSession::new(&client, CallBudget::default());

        let err = session.invoke("p", 0.0, None).await.unwrap_err();

        assert_eq!(err.to_string(), "ERROR status=503 {\"error\": \"overloaded\"}");
        // failed calls still count against the budget
        assert_eq!(session.calls_made(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_uses_negative_status() {
        let client =
            ScriptedClient::with_results([Err(CompletionError::Transport("refused".to_string()))]);
        let mut session = CallSession::new(&client, CallBudget::default());
        let err = session.invoke("p", 0.0, None).await.unwrap_err();
        assert_eq!(err.to_string(), "ERROR status=-1 refused");
    }
}
