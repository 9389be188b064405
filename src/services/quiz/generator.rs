use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::content::{ArticlesData, Content, PrepositionsData, PronounsData, VerbsData};
use crate::model::question::{Question, QuizCategory};
use crate::services::quiz::sampling;

pub const SESSION_LENGTH: usize = 10;

const PRESENT_TENSE: &str = "Präsens";
const PERSON_COUNT: usize = 6;
const MEANING_SAMPLE: usize = 10;
const PREPOSITIONS_PER_GROUP: usize = 4;
const ENDINGS_PER_TIP: usize = 2;
const DECLENSION_COLUMNS: usize = 4;

const CASE_OPTIONS: [&str; 4] = ["Akkusativ", "Dativ", "Wechselpräpositionen", "Genitiv"];
const GENDER_OPTIONS: [&str; 3] = ["Maskulin", "Feminin", "Neutrum"];

/// Generates the full shuffled question pool across all categories.
pub fn generate_pool<R: Rng>(content: &Content, rng: &mut R) -> Vec<Question> {
    let mut questions = Vec::new();

    verb_conjugation_questions(&content.verbs, rng, &mut questions);
    verb_meaning_questions(&content.verbs, rng, &mut questions);
    pronoun_case_questions(&content.pronouns, rng, &mut questions);
    preposition_case_questions(&content.prepositions, rng, &mut questions);
    article_gender_questions(&content.articles, rng, &mut questions);
    article_declension_questions(&content.articles, rng, &mut questions);

    questions.shuffle(rng);
    questions
}

/// One quiz session: the pool, optionally filtered to a category, capped at
/// ten questions. A filter that leaves fewer than ten is a short session,
/// not an error.
pub fn session<R: Rng>(
    content: &Content,
    filter: Option<QuizCategory>,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool = generate_pool(content, rng);
    if let Some(category) = filter {
        pool.retain(|q| q.category == category);
    }
    pool.truncate(SESSION_LENGTH);
    pool
}

/// One question per verb: a random grammatical person, the present form as
/// the answer, other verbs' forms for the same person as distractors.
fn verb_conjugation_questions<R: Rng>(verbs: &VerbsData, rng: &mut R, out: &mut Vec<Question>) {
    let all = verbs.all_verbs();

    for verb in &all {
        let person = rng.gen_range(0..PERSON_COUNT);

        let Some(answer) = verb.tense(PRESENT_TENSE).and_then(|f| f.get(person)) else {
            continue;
        };
        let Some(person_label) = verbs.pronouns.get(person) else {
            continue;
        };

        let pool: Vec<String> = all
            .iter()
            .filter(|other| other.infinitive != verb.infinitive)
            .filter_map(|other| other.tense(PRESENT_TENSE).and_then(|f| f.get(person)))
            .cloned()
            .collect();

        out.push(Question {
            category: QuizCategory::Verbs,
            prompt: format!("{person_label} _____ ({} — {PRESENT_TENSE})", verb.infinitive),
            answer: answer.clone(),
            options: sampling::build_options(answer, &pool, rng),
            hint: Some(verb.english.clone()),
        });
    }
}

/// English gloss of the infinitive, for a random subset of verbs.
fn verb_meaning_questions<R: Rng>(verbs: &VerbsData, rng: &mut R, out: &mut Vec<Question>) {
    let all = verbs.all_verbs();

    for verb in all.choose_multiple(rng, MEANING_SAMPLE) {
        let pool: Vec<String> = all
            .iter()
            .filter(|other| other.infinitive != verb.infinitive)
            .map(|other| other.english.clone())
            .collect();

        out.push(Question {
            category: QuizCategory::Verbs,
            prompt: format!("What does \"{}\" mean?", verb.infinitive),
            answer: verb.english.clone(),
            options: sampling::build_options(&verb.english, &pool, rng),
            hint: None,
        });
    }
}

/// One question per personal-pronoun row, asking either the accusative or
/// the dative form; distractors come from the same column of other rows.
fn pronoun_case_questions<R: Rng>(pronouns: &PronounsData, rng: &mut R, out: &mut Vec<Question>) {
    let Some(personal) = pronouns.personal() else {
        return;
    };

    for row in &personal.rows {
        // Column 0 is Nominativ; quiz only the oblique cases.
        let case_idx = rng.gen_range(1..=2);

        let (Some(case_name), Some(answer)) =
            (personal.headers.get(case_idx), row.cells.get(case_idx))
        else {
            continue;
        };

        let pool: Vec<String> = personal
            .rows
            .iter()
            .filter(|other| other.label != row.label)
            .filter_map(|other| other.cells.get(case_idx))
            .cloned()
            .collect();

        out.push(Question {
            category: QuizCategory::Pronouns,
            prompt: format!("{} → {case_name}?", row.label),
            answer: answer.clone(),
            options: sampling::build_options(answer, &pool, rng),
            hint: Some(case_name.clone()),
        });
    }
}

/// Which case does the preposition govern? Closed four-option set rather
/// than sampled distractors.
fn preposition_case_questions<R: Rng>(
    prepositions: &PrepositionsData,
    rng: &mut R,
    out: &mut Vec<Question>,
) {
    for section in &prepositions.sections {
        let Some(case_name) = section.title.split_whitespace().next() else {
            continue;
        };
        if !CASE_OPTIONS.contains(&case_name) {
            continue;
        }

        for item in section.items.iter().take(PREPOSITIONS_PER_GROUP) {
            let mut options: Vec<String> = CASE_OPTIONS.iter().map(|c| c.to_string()).collect();
            options.shuffle(rng);

            out.push(Question {
                category: QuizCategory::Prepositions,
                prompt: format!("\"{}\" requires which case?", item.german),
                answer: case_name.to_string(),
                options,
                hint: Some(item.english.clone()),
            });
        }
    }
}

/// Gender of an example noun, taken from the ending patterns. Closed
/// three-option set.
fn article_gender_questions<R: Rng>(articles: &ArticlesData, rng: &mut R, out: &mut Vec<Question>) {
    let Some(section) = articles.gender_tips() else {
        return;
    };

    for tip in &section.gender_tips {
        // "Feminin (die)" → "Feminin"
        let Some(answer) = tip.gender.split_whitespace().next() else {
            continue;
        };
        if !GENDER_OPTIONS.contains(&answer) {
            continue;
        }

        for ending in tip.endings.iter().take(ENDINGS_PER_TIP) {
            // "-ung (Zeitung)" → "Zeitung"; endings without an example noun
            // are asked as the bare ending.
            let word = ending
                .split_once('(')
                .map(|(_, rest)| rest.trim_end_matches(')').trim())
                .unwrap_or(ending.as_str());

            let mut options: Vec<String> = GENDER_OPTIONS.iter().map(|g| g.to_string()).collect();
            options.shuffle(rng);

            out.push(Question {
                category: QuizCategory::Articles,
                prompt: format!("What is the gender of \"{word}\"?"),
                answer: answer.to_string(),
                options,
                hint: Some(tip.gender.clone()),
            });
        }
    }
}

/// One question per definite-article row (case), asking the form in a random
/// gender column; distractors come from the rest of the table.
fn article_declension_questions<R: Rng>(
    articles: &ArticlesData,
    rng: &mut R,
    out: &mut Vec<Question>,
) {
    let Some(table) = articles.definite() else {
        return;
    };

    let pool: Vec<String> = table.rows.iter().flat_map(|r| r.cells.clone()).collect();

    for row in &table.rows {
        let columns = table.headers.len().min(DECLENSION_COLUMNS);
        if columns == 0 {
            continue;
        }
        let col = rng.gen_range(0..columns);

        let (Some(gender), Some(answer)) = (table.headers.get(col), row.cells.get(col)) else {
            continue;
        };

        out.push(Question {
            category: QuizCategory::Articles,
            prompt: format!("Definite article: {} + {gender}?", row.label),
            answer: answer.clone(),
            options: sampling::build_options(answer, &pool, rng),
            hint: Some(row.label.clone()),
        });
    }
}
