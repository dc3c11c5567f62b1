//! Prompt templates for every routing stage and strategy

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    // ==================== Shared ====================

    /// System prompt used when a stage does not supply its own
    pub fn default_system() -> &'static str {
        "You are a helpful assistant."
    }

    /// System prompt for stages that must return nothing but the answer
    pub fn answer_only_system() -> &'static str {
        "Return only the answer."
    }

    // ==================== Classification ====================

    pub fn classify_system() -> &'static str {
        "Return only one label: math, commonsense, future_prediction, coding, or planning."
    }

    pub fn classify_prompt(question: &str) -> String {
        format!(
            r#"Classify the following question into ONE category:
- math (requires calculation, equations, numbers, mathematical reasoning)
- commonsense (real-world knowledge, everyday reasoning, general facts)
- future_prediction (asking about what will happen, forecasting, predictions)
- coding (requires programming, code generation, debugging)
- planning (requires step-by-step planning, strategy, multi-step processes)

QUESTION:
{}

Return ONLY one word, NO EXTRA CHARACTER: math, commonsense, future_prediction, coding, or planning."#,
            question
        )
    }

    // ==================== Chain of thought ====================

    pub fn chain_of_thought(question: &str) -> String {
        format!(
            r#"{}

Think through the problem step by step.
After your reasoning, write the answer on its own line in this exact form:
Final Answer: <answer>"#,
            question
        )
    }

    // ==================== Self-consistency ====================

    pub fn consistency_sample(question: &str) -> String {
        format!(
            r#"{}

Solve carefully.
End your response with:
Final Answer: <your answer>"#,
            question
        )
    }

    pub fn extract_answer(response: &str) -> String {
        format!("Extract ONLY the final answer from this:\n\n{}", response)
    }

    pub fn future_sample(question: &str) -> String {
        format!(
            r#"{}

Reason about the most likely outcome given what is known today.
Put your single final prediction on its own line inside \boxed{{...}}."#,
            question
        )
    }

    // ==================== Self-refinement ====================

    pub fn initial_answer(question: &str) -> String {
        format!(
            r#"Answer the following question as accurately as you can.

QUESTION:
{}"#,
            question
        )
    }

    pub fn critique(question: &str, answer: &str) -> String {
        format!(
            r#"You are reviewing an answer for correctness and completeness.

QUESTION:
{}

ANSWER:
{}

List the concrete mistakes or omissions in the answer. If it is already correct, say so."#,
            question, answer
        )
    }

    pub fn refine(question: &str, answer: &str, critique: &str) -> String {
        format!(
            r#"Improve the answer using the critique.

QUESTION:
{}

CURRENT ANSWER:
{}

CRITIQUE:
{}

Return ONLY the improved answer, without commentary."#,
            question, answer, critique
        )
    }

    // ==================== Think / act / observe ====================

    pub fn thought(question: &str) -> String {
        format!(
            r#"QUESTION:
{}

Thought: describe what you need to figure out and which everyday knowledge applies.
Do NOT give the answer yet."#,
            question
        )
    }

    pub fn action(question: &str, thought: &str) -> String {
        format!(
            r#"QUESTION:
{}

THOUGHT:
{}

Action: describe the reasoning step or check you would perform next, based on the thought."#,
            question, thought
        )
    }

    pub fn observation(question: &str, thought: &str, action: &str) -> String {
        format!(
            r#"QUESTION:
{}

THOUGHT:
{}

ACTION:
{}

Observation: state what that action reveals."#,
            question, thought, action
        )
    }

    pub fn react_answer(question: &str, thought: &str, action: &str, observation: &str) -> String {
        format!(
            r#"QUESTION:
{}

THOUGHT:
{}

ACTION:
{}

OBSERVATION:
{}

Give the final answer to the question in as few words as possible. No explanation."#,
            question, thought, action, observation
        )
    }

    // ==================== Plan generation ====================

    pub fn plan_system() -> &'static str {
        "You are a classical planner. Output only plan actions, one per line."
    }

    pub fn plan(question: &str, max_steps: usize) -> String {
        format!(
            r#"{}

Produce the plan that reaches the goal.
RULES:
- Output ONLY action lines, each wrapped in parentheses, e.g. (pick-up a)
- Use at most {} actions
- No numbering, no explanation, no blank commentary"#,
            question, max_steps
        )
    }

    // ==================== Math ====================

    pub fn math_system() -> &'static str {
        "You are a careful mathematician. Show numbered steps and finish with the final answer."
    }

    pub fn math_solve(question: &str) -> String {
        format!(
            r#"Solve the problem below.

PROBLEM:
{}

FORMAT:
Step 1: ...
Step 2: ...
(as many steps as needed)
Final Answer: <answer>"#,
            question
        )
    }

    pub fn math_continue(question: &str, work: &str) -> String {
        format!(
            r#"PROBLEM:
{}

WORK SO FAR:
{}

Continue from the last step. Write the remaining steps and end with:
Final Answer: <answer>"#,
            question, work
        )
    }

    pub fn math_force_answer(question: &str, work: &str) -> String {
        format!(
            r#"PROBLEM:
{}

WORK:
{}

Based on the work above, write exactly one line:
Final Answer: <answer>"#,
            question, work
        )
    }

    pub fn math_number(question: &str, answer: &str) -> String {
        format!(
            r#"PROBLEM:
{}

PROPOSED ANSWER:
{}

Return only the bare final answer: no units, no words, no explanation."#,
            question, answer
        )
    }

    pub fn math_verify(question: &str, answer: &str) -> String {
        format!(
            "Verify this math solution:\n\nQuestion: {}\n\nProposed Answer: {}\n\nIs this correct? If not, provide the correct answer.",
            question, answer
        )
    }

    // ==================== Code refinement ====================

    pub fn code_generate(question: &str) -> String {
        format!(
            r#"You are a professional Python developer.

TASK:
Generate a correct and minimal code solution for the following problem.

OUTPUT RULES (MANDATORY):
- Output ONLY Python code.
- Include all required imports and constants.
- Define the function exactly as requested.
- Do NOT explain.
- Do NOT include markdown.
- Ensure the function returns the correct object.
- Follow instructions literally (title, labels, return type, etc).

QUESTION:
{}"#,
            question
        )
    }

    pub fn code_review(question: &str, code: &str) -> String {
        format!(
            r#"You are a strict code reviewer.

TASK:
Check if the following code fully satisfies the specification.

QUESTION:
{}

CODE:
{}

OUTPUT FORMAT (STRICT, ONE LINE ONLY):
- If correct, output EXACTLY:
VALID
- If incorrect, output EXACTLY ONE LINE in this form:
FIX: <short actionable correction instruction>

NO explanation. NO bullets. ONE line only."#,
            question, code
        )
    }

    pub fn code_patch(question: &str, code: &str, instruction: &str) -> String {
        format!(
            r#"You are in CORRECTION MODE.

QUESTION:
{}

CURRENT CODE:
{}

CRITIQUE:
FIX: {}

INSTRUCTIONS:
- Apply ONLY the fix described in the critique.
- Do NOT rewrite the entire solution.
- Do NOT change working logic.
- Preserve the exact function signature.
- Output ONLY corrected Python code."#,
            question, code, instruction
        )
    }
}
