use serde::Deserialize;
use std::collections::HashMap;

/// All bundled grammar datasets, deserialized once at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Content {
    pub verbs: VerbsData,
    pub prepositions: PrepositionsData,
    pub sentences: SentencesData,
    pub articles: ArticlesData,
    pub pronouns: PronounsData,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Meta {
    pub icon: String,
    pub title: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VerbsData {
    pub meta: Meta,

    /// The six grammatical person labels, in conjugation order.
    pub pronouns: Vec<String>,

    pub tenses: Vec<String>,
    pub sections: Vec<VerbSection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VerbSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub verbs: Vec<Verb>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Verb {
    pub infinitive: String,
    pub english: String,

    /// Tense name → six conjugated forms, one per grammatical person.
    pub conjugations: HashMap<String, Vec<String>>,
}

impl Verb {
    pub fn tense(&self, name: &str) -> Option<&[String]> {
        self.conjugations.get(name).map(|v| v.as_slice())
    }
}

impl VerbsData {
    pub fn all_verbs(&self) -> Vec<&Verb> {
        self.sections.iter().flat_map(|s| s.verbs.iter()).collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PrepositionsData {
    pub meta: Meta,
    pub sections: Vec<PrepositionSection>,
}

/// One case group; the title starts with the case name and may carry
/// a parenthetical suffix, e.g. "Wechselpräpositionen (Two-Way Prepositions)".
#[derive(Debug, Deserialize, Clone)]
pub struct PrepositionSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub mnemonic: Option<String>,

    pub items: Vec<PrepositionItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PrepositionItem {
    pub german: String,
    pub english: String,
    pub example: String,
    pub example_en: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentencesData {
    pub meta: Meta,
    pub sections: Vec<SentenceSection>,
}

/// Heterogeneous sentence-structure sections, closed over their kinds so the
/// index builder can match exhaustively instead of probing optional fields.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SentenceSection {
    WordOrder(PatternSection),
    Subordinate(SubordinateSection),
    Questions(QuestionSection),
    Negation(NegationSection),
    Connectors(ConnectorSection),
}

#[derive(Debug, Deserialize, Clone)]
pub struct PatternSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub patterns: Vec<SentencePattern>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubordinateSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub patterns: Vec<SentencePattern>,
    pub conjunctions: Vec<WordPair>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuestionSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub question_words: Vec<WordPair>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NegationSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub rules: Vec<NegationRule>,

    #[serde(default)]
    pub nicht_position: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConnectorSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub connectors: Vec<WordPair>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentencePattern {
    pub name: String,
    pub structure: Vec<String>,
    pub example: String,
    pub example_en: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WordPair {
    pub german: String,
    pub english: String,
}

/// Rules without a word are prose notes; only worded rules become searchable.
#[derive(Debug, Deserialize, Clone)]
pub struct NegationRule {
    #[serde(default)]
    pub word: Option<String>,

    pub usage: String,
    pub example: String,
    pub example_en: String,
}

impl SentencesData {
    pub fn subordinate(&self) -> Option<&SubordinateSection> {
        self.sections.iter().find_map(|s| match s {
            SentenceSection::Subordinate(sec) => Some(sec),
            _ => None,
        })
    }

    pub fn questions(&self) -> Option<&QuestionSection> {
        self.sections.iter().find_map(|s| match s {
            SentenceSection::Questions(sec) => Some(sec),
            _ => None,
        })
    }

    pub fn negation(&self) -> Option<&NegationSection> {
        self.sections.iter().find_map(|s| match s {
            SentenceSection::Negation(sec) => Some(sec),
            _ => None,
        })
    }

    pub fn connectors(&self) -> Option<&ConnectorSection> {
        self.sections.iter().find_map(|s| match s {
            SentenceSection::Connectors(sec) => Some(sec),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArticlesData {
    pub meta: Meta,
    pub sections: Vec<ArticleSection>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArticleSection {
    Definite(ArticleTable),
    Indefinite(ArticleTable),
    Possessive(ArticleTable),
    GenderTips(GenderTipsSection),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArticleTable {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TableRow {
    #[serde(default)]
    pub label: String,

    pub cells: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenderTipsSection {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub gender_tips: Vec<GenderTip>,
}

/// A gender label like "Feminin (die)" plus endings like "-ung (Zeitung)".
#[derive(Debug, Deserialize, Clone)]
pub struct GenderTip {
    pub gender: String,
    pub endings: Vec<String>,
}

impl ArticlesData {
    pub fn definite(&self) -> Option<&ArticleTable> {
        self.sections.iter().find_map(|s| match s {
            ArticleSection::Definite(t) => Some(t),
            _ => None,
        })
    }

    pub fn indefinite(&self) -> Option<&ArticleTable> {
        self.sections.iter().find_map(|s| match s {
            ArticleSection::Indefinite(t) => Some(t),
            _ => None,
        })
    }

    pub fn possessive(&self) -> Option<&ArticleTable> {
        self.sections.iter().find_map(|s| match s {
            ArticleSection::Possessive(t) => Some(t),
            _ => None,
        })
    }

    pub fn gender_tips(&self) -> Option<&GenderTipsSection> {
        self.sections.iter().find_map(|s| match s {
            ArticleSection::GenderTips(t) => Some(t),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PronounsData {
    pub meta: Meta,
    pub sections: Vec<PronounSection>,
}

/// Pronoun tables share one shape; the kind tells them apart.
#[derive(Debug, Deserialize, Clone)]
pub struct PronounSection {
    pub kind: PronounKind,
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PronounKind {
    Personal,
    Reflexive,
    Interrogative,
}

impl PronounKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PronounKind::Personal => "personal",
            PronounKind::Reflexive => "reflexive",
            PronounKind::Interrogative => "interrogative",
        }
    }
}

impl PronounsData {
    pub fn personal(&self) -> Option<&PronounSection> {
        self.sections
            .iter()
            .find(|s| s.kind == PronounKind::Personal)
    }
}
