use serde::Deserialize;

/// One multiple-choice question as delivered by the remote source.
///
/// Text fields arrive entity-escaped and must go through
/// [`crate::text::normalize`] before being shown or compared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "correct_answer")]
    pub correct_choice: String,
    #[serde(rename = "incorrect_answers")]
    pub incorrect_choices: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        prompt: impl Into<String>,
        correct_choice: impl Into<String>,
        incorrect_choices: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_choice: correct_choice.into(),
            incorrect_choices: incorrect_choices.into_iter().map(Into::into).collect(),
            category: None,
            difficulty: None,
            kind: None,
        }
    }

    /// Incorrect choices followed by the correct one, unshuffled.
    pub fn choices(&self) -> Vec<String> {
        let mut choices = self.incorrect_choices.clone();
        choices.push(self.correct_choice.clone());
        choices
    }
}
