use regex::Regex;
use std::collections::HashSet;

use crate::model::content::{
    ArticlesData, Content, PrepositionsData, PronounsData, SentencesData, VerbsData,
};
use crate::model::entry::{Category, SearchEntry};
use crate::services::slug::slugify;

const PRESENT_TENSE: &str = "Präsens";

/// Flattens every grammar category into one uniform list of search entries.
/// Order is insertion order by category and carries no meaning.
pub fn build_index(content: &Content) -> Vec<SearchEntry> {
    let mut entries = Vec::new();

    verb_entries(&content.verbs, &mut entries);
    preposition_entries(&content.prepositions, &mut entries);
    conjunction_entries(&content.sentences, &mut entries);
    question_word_entries(&content.sentences, &mut entries);
    connector_entries(&content.sentences, &mut entries);
    negation_entries(&content.sentences, &mut entries);
    article_entries(&content.articles, &mut entries);
    pronoun_entries(&content.pronouns, &mut entries);

    entries
}

/// "Regular Verbs (Regelmäßige Verben)" → "Regular Verbs"
fn strip_parenthetical(title: &str) -> String {
    title.split('(').next().unwrap_or("").trim().to_string()
}

fn verb_entries(verbs: &VerbsData, out: &mut Vec<SearchEntry>) {
    for section in &verbs.sections {
        for verb in &section.verbs {
            let example = verb
                .tense(PRESENT_TENSE)
                .and_then(|forms| forms.first())
                .map(|form| format!("Ich {form}"));

            out.push(SearchEntry {
                id: format!("verb-{}", verb.infinitive),
                german: verb.infinitive.clone(),
                english: verb.english.clone(),
                category: Category::Verb,
                category_label: strip_parenthetical(&section.title),
                example,
                example_en: None,
                link: "/verbs".to_string(),
                section_id: Some(slugify(&section.title)),
                is_verb: true,
            });
        }
    }
}

fn preposition_entries(prepositions: &PrepositionsData, out: &mut Vec<SearchEntry>) {
    for section in &prepositions.sections {
        for item in &section.items {
            out.push(SearchEntry {
                id: format!("prep-{}", item.german),
                german: item.german.clone(),
                english: item.english.clone(),
                category: Category::Preposition,
                category_label: strip_parenthetical(&section.title),
                example: Some(item.example.clone()),
                example_en: Some(item.example_en.clone()),
                link: "/prepositions".to_string(),
                section_id: Some(slugify(&section.title)),
                is_verb: false,
            });
        }
    }
}

fn conjunction_entries(sentences: &SentencesData, out: &mut Vec<SearchEntry>) {
    let Some(section) = sentences.subordinate() else {
        return;
    };

    for conj in &section.conjunctions {
        // Heuristic join carried over from the content authoring: the first
        // pattern whose name contains the conjunction word provides the
        // example. "ob" therefore picks up the "obwohl" pattern; the data
        // was written expecting this loose match.
        let pattern = section.patterns.iter().find(|p| {
            p.name.to_lowercase().contains(&conj.german.to_lowercase())
        });

        out.push(SearchEntry {
            id: format!("conj-{}", conj.german),
            german: conj.german.clone(),
            english: conj.english.clone(),
            category: Category::Conjunction,
            category_label: "Subordinate Conjunction".to_string(),
            example: pattern.map(|p| p.example.clone()),
            example_en: pattern.map(|p| p.example_en.clone()),
            link: "/sentences".to_string(),
            section_id: Some(slugify(&section.title)),
            is_verb: false,
        });
    }
}

fn question_word_entries(sentences: &SentencesData, out: &mut Vec<SearchEntry>) {
    let Some(section) = sentences.questions() else {
        return;
    };

    for qw in &section.question_words {
        out.push(SearchEntry {
            id: format!("qw-{}", qw.german),
            german: qw.german.clone(),
            english: qw.english.clone(),
            category: Category::Question,
            category_label: "Question Word".to_string(),
            example: None,
            example_en: None,
            link: "/sentences".to_string(),
            section_id: Some(slugify(&section.title)),
            is_verb: false,
        });
    }
}

fn connector_entries(sentences: &SentencesData, out: &mut Vec<SearchEntry>) {
    let Some(section) = sentences.connectors() else {
        return;
    };

    for conn in &section.connectors {
        out.push(SearchEntry {
            id: format!("conn-{}", conn.german),
            german: conn.german.clone(),
            english: conn.english.clone(),
            category: Category::Connector,
            category_label: "Coordinating Conjunction".to_string(),
            example: None,
            example_en: None,
            link: "/sentences".to_string(),
            section_id: Some(slugify(&section.title)),
            is_verb: false,
        });
    }
}

fn negation_entries(sentences: &SentencesData, out: &mut Vec<SearchEntry>) {
    let Some(section) = sentences.negation() else {
        return;
    };

    // Rules without a word are prose notes, not searchable terms.
    for rule in &section.rules {
        let Some(word) = rule.word.as_deref().filter(|w| !w.is_empty()) else {
            continue;
        };

        out.push(SearchEntry {
            id: format!("neg-{word}"),
            german: word.to_string(),
            english: rule.usage.clone(),
            category: Category::Negation,
            category_label: "Negation".to_string(),
            example: Some(rule.example.clone()),
            example_en: Some(rule.example_en.clone()),
            link: "/sentences".to_string(),
            section_id: Some(slugify(&section.title)),
            is_verb: false,
        });
    }
}

fn article_entries(articles: &ArticlesData, out: &mut Vec<SearchEntry>) {
    let definite_anchor = articles.definite().map(|t| slugify(&t.title));
    let indefinite_anchor = articles.indefinite().map(|t| slugify(&t.title));

    // The article forms are a closed set; enumerate them by hand instead of
    // deriving them from the declension tables.
    for (art, english) in [
        ("der", "the (masculine)"),
        ("die", "the (feminine/plural)"),
        ("das", "the (neuter)"),
    ] {
        out.push(SearchEntry {
            id: format!("art-def-{art}"),
            german: art.to_string(),
            english: english.to_string(),
            category: Category::Article,
            category_label: "Definite Article".to_string(),
            example: None,
            example_en: None,
            link: "/articles".to_string(),
            section_id: definite_anchor.clone(),
            is_verb: false,
        });
    }

    for (art, english) in [("ein", "a/an (masculine/neuter)"), ("eine", "a/an (feminine)")] {
        out.push(SearchEntry {
            id: format!("art-indef-{art}"),
            german: art.to_string(),
            english: english.to_string(),
            category: Category::Article,
            category_label: "Indefinite Article".to_string(),
            example: None,
            example_en: None,
            link: "/articles".to_string(),
            section_id: indefinite_anchor.clone(),
            is_verb: false,
        });
    }

    possessive_entries(articles, out);
}

/// Distinct table rows may share a possessive spelling across persons
/// ("sein" for er and es, "ihr" for sie and sie/Pl.); the first row wins.
fn possessive_entries(articles: &ArticlesData, out: &mut Vec<SearchEntry>) {
    let Some(table) = articles.possessive() else {
        return;
    };

    let anchor = slugify(&table.title);
    let mut seen: HashSet<String> = HashSet::new();

    for row in &table.rows {
        let (Some(possessive), Some(english)) = (row.cells.first(), row.cells.get(1)) else {
            continue;
        };

        let key = possessive.to_lowercase();
        if !seen.insert(key.clone()) {
            continue;
        }

        out.push(SearchEntry {
            id: format!("art-poss-{key}"),
            german: possessive.clone(),
            english: english.clone(),
            category: Category::Article,
            category_label: "Possessive Article".to_string(),
            example: None,
            example_en: None,
            link: "/articles".to_string(),
            section_id: Some(anchor.clone()),
            is_verb: false,
        });
    }
}

fn pronoun_entries(pronouns: &PronounsData, out: &mut Vec<SearchEntry>) {
    let gloss_re = Regex::new(r"\(([^)]*)\)").unwrap();

    for section in &pronouns.sections {
        let anchor = slugify(&section.title);

        for row in &section.rows {
            // Display form: the row's distinct case forms, in table order.
            let mut forms: Vec<&str> = Vec::new();
            for cell in &row.cells {
                let cell = cell.trim();
                if !cell.is_empty() && !forms.contains(&cell) {
                    forms.push(cell);
                }
            }
            if forms.is_empty() {
                continue;
            }

            // English gloss from the parenthetical in the row label,
            // e.g. "du (you, informal)"; rows without one keep the label.
            let english = match gloss_re.captures(&row.label) {
                Some(caps) => caps[1].trim().to_string(),
                None => row.label.trim().to_string(),
            };

            out.push(SearchEntry {
                id: format!("pron-{}-{}", section.kind.as_str(), slugify(&row.label)),
                german: forms.join("/"),
                english,
                category: Category::Pronoun,
                category_label: strip_parenthetical(&section.title),
                example: None,
                example_en: None,
                link: "/pronouns".to_string(),
                section_id: Some(anchor.clone()),
                is_verb: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::content;
    use pretty_assertions::assert_eq;

    fn index() -> Vec<SearchEntry> {
        let content = content::load().expect("bundled content loads");
        build_index(&content)
    }

    #[test]
    fn every_id_is_unique() {
        let entries = index();
        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn verb_entries_synthesize_first_person_example() {
        let entries = index();
        let machen = entries.iter().find(|e| e.id == "verb-machen").unwrap();
        assert_eq!(machen.example.as_deref(), Some("Ich mache"));
        assert!(machen.is_verb);
        assert_eq!(machen.category_label, "Regular Verbs");
        assert_eq!(machen.link, "/verbs");
    }

    #[test]
    fn preposition_label_drops_parenthetical_suffix() {
        let entries = index();
        let an = entries.iter().find(|e| e.id == "prep-an").unwrap();
        assert_eq!(an.category_label, "Wechselpräpositionen");
        assert_eq!(an.section_id.as_deref(), Some("wechselpr-positionen-two-way-prepositions"));
    }

    #[test]
    fn conjunction_example_joins_by_first_name_match() {
        let entries = index();

        let weil = entries.iter().find(|e| e.id == "conj-weil").unwrap();
        assert_eq!(weil.example.as_deref(), Some("Ich bleibe zu Hause, weil es regnet."));

        // The loose substring join: "ob" hits the "obwohl (although)" pattern.
        let ob = entries.iter().find(|e| e.id == "conj-ob").unwrap();
        assert_eq!(ob.example.as_deref(), Some("Obwohl er müde ist, arbeitet er weiter."));

        // No pattern mentions "als"; the entry simply has no example.
        let als = entries.iter().find(|e| e.id == "conj-als").unwrap();
        assert_eq!(als.example, None);
    }

    #[test]
    fn wordless_negation_rules_are_skipped() {
        let entries = index();
        let negations: Vec<_> = entries
            .iter()
            .filter(|e| e.category == Category::Negation)
            .collect();
        let words: Vec<&str> = negations.iter().map(|e| e.german.as_str()).collect();
        assert_eq!(words, ["nicht", "kein", "nie", "niemand"]);
    }

    #[test]
    fn possessives_are_deduplicated_by_lowercased_form() {
        let entries = index();
        let possessives: Vec<_> = entries
            .iter()
            .filter(|e| e.category_label == "Possessive Article")
            .collect();

        // "sein" appears for er and es, "ihr" for sie, ihr, sie (Pl.) and
        // Sie; a single entry survives per spelling, first occurrence wins.
        let germans: Vec<&str> = possessives.iter().map(|e| e.german.as_str()).collect();
        assert_eq!(germans, ["mein", "dein", "sein", "ihr", "unser", "euer"]);

        let sein = possessives.iter().find(|e| e.german == "sein").unwrap();
        assert_eq!(sein.english, "his");
    }

    #[test]
    fn pronoun_rows_join_distinct_case_forms() {
        let entries = index();

        let ich = entries.iter().find(|e| e.id == "pron-personal-ich-i").unwrap();
        assert_eq!(ich.german, "ich/mich/mir");
        assert_eq!(ich.english, "I");
        assert_eq!(ich.category_label, "Personal Pronouns");

        // "sich"/"sich" collapses to a single form; the label has no
        // parenthetical, so it doubles as the gloss.
        let sich = entries
            .iter()
            .find(|e| e.id == "pron-reflexive-er-sie-es")
            .unwrap();
        assert_eq!(sich.german, "sich");
        assert_eq!(sich.english, "er/sie/es");
    }

    #[test]
    fn fixed_article_entries_are_present() {
        let entries = index();
        for id in ["art-def-der", "art-def-die", "art-def-das", "art-indef-ein", "art-indef-eine"] {
            assert!(entries.iter().any(|e| e.id == id), "missing {id}");
        }
    }
}
