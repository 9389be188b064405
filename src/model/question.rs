use serde::Serialize;

/// One multiple-choice question. Generated in a batch per quiz session and
/// discarded when the session ends.
#[derive(Debug, Serialize, Clone)]
pub struct Question {
    pub category: QuizCategory,
    pub prompt: String,
    pub answer: String,

    /// Up to four distinct options, the correct answer among them exactly
    /// once. Fewer than four when the distractor pool runs dry.
    pub options: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Verbs,
    Pronouns,
    Prepositions,
    Articles,
}

impl QuizCategory {
    pub fn from_name(name: &str) -> Option<QuizCategory> {
        match name {
            "Verbs" => Some(QuizCategory::Verbs),
            "Pronouns" => Some(QuizCategory::Pronouns),
            "Prepositions" => Some(QuizCategory::Prepositions),
            "Articles" => Some(QuizCategory::Articles),
            _ => None,
        }
    }
}
