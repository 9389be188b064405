use serde::Serialize;

/// One normalized, searchable record derived from the raw grammar content.
/// The index is built fresh at startup and never mutated afterwards.
#[derive(Debug, Serialize, Clone)]
pub struct SearchEntry {
    /// Unique across the whole index.
    pub id: String,

    /// German term; pronoun rows join their distinct case forms with "/".
    pub german: String,

    pub english: String,
    pub category: Category,
    pub category_label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_en: Option<String>,

    /// Target page path for the navigation shell.
    pub link: String,

    /// Section anchor the shell scrolls to and highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Marks verbs so the shell can deep-link to the conjugation tables.
    pub is_verb: bool,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Verb,
    Preposition,
    Conjunction,
    Question,
    Connector,
    Negation,
    Article,
    Pronoun,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Verb,
        Category::Preposition,
        Category::Conjunction,
        Category::Question,
        Category::Connector,
        Category::Negation,
        Category::Article,
        Category::Pronoun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Verb => "verb",
            Category::Preposition => "preposition",
            Category::Conjunction => "conjunction",
            Category::Question => "question",
            Category::Connector => "connector",
            Category::Negation => "negation",
            Category::Article => "article",
            Category::Pronoun => "pronoun",
        }
    }
}
