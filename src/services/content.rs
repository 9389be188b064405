use crate::model::content::{
    ArticlesData, Content, PrepositionsData, PronounsData, SentencesData, VerbsData,
};

const VERBS_JSON: &str = include_str!("../../data/verbs.json");
const PREPOSITIONS_JSON: &str = include_str!("../../data/prepositions.json");
const SENTENCES_JSON: &str = include_str!("../../data/sentences.json");
const ARTICLES_JSON: &str = include_str!("../../data/articles.json");
const PRONOUNS_JSON: &str = include_str!("../../data/pronouns.json");

/// Deserializes the bundled datasets. A parse failure means the bundled data
/// itself is malformed, which is fatal at startup and caught by the tests.
pub fn load() -> Result<Content, String> {
    Ok(Content {
        verbs: parse::<VerbsData>("verbs", VERBS_JSON)?,
        prepositions: parse::<PrepositionsData>("prepositions", PREPOSITIONS_JSON)?,
        sentences: parse::<SentencesData>("sentences", SENTENCES_JSON)?,
        articles: parse::<ArticlesData>("articles", ARTICLES_JSON)?,
        pronouns: parse::<PronounsData>("pronouns", PRONOUNS_JSON)?,
    })
}

fn parse<T: serde::de::DeserializeOwned>(name: &str, raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid bundled dataset {name}: {e}"))
}
