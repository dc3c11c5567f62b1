//! Question classification.

use crate::session::{CallError, CallSession};
use strata_domain::Category;
use strata_domain::prompt::PromptTemplate;
use tracing::debug;

/// Ask for exactly one category label at temperature 0
///
/// The reply is trimmed and lower-cased; labels outside the known set come
/// back as [`Category::Unrecognized`].
pub async fn classify_question(
    session: &mut CallSession<'_>,
    question: &str,
) -> Result<Category, CallError> {
    session.set_stage("classify");
    let reply = session
        .invoke(
            &PromptTemplate::classify_prompt(question),
            0.0,
            Some(PromptTemplate::classify_system()),
        )
        .await?;
    let category = Category::from_label(&reply);
    debug!(label = %reply, category = %category, "Classified question");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::ScriptedClient;
    use strata_domain::CallBudget;

    #[tokio::test]
    async fn test_label_is_trimmed_and_lowercased() {
        let client = ScriptedClient::new(["  MATH\n"]);
        let mut session = CallSession::new(&client, CallBudget::default());

        let category = classify_question(&mut session, "2+2?").await.unwrap();

        assert_eq!(category, Category::Math);
        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].temperature, 0.0);
        assert_eq!(
            requests[0].system,
            "Return only one label: math, commonsense, future_prediction, coding, or planning."
        );
    }

    #[tokio::test]
    async fn test_unknown_label_is_unrecognized() {
        let client = ScriptedClient::new(["Trivia"]);
        let mut session = CallSession::new(&client, CallBudget::default());
        let category = classify_question(&mut session, "q").await.unwrap();
        assert_eq!(category, Category::Unrecognized("trivia".to_string()));
    }
}
