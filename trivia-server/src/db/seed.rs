//! Starter data: the six frontend categories and a handful of questions
//!
//! Seeding is skipped when any category already exists.

use std::collections::HashMap;

use super::repos::{DbError, TriviaRepository};
use crate::models::NewQuestion;

/// Category names, in id order. The frontend maps these to icons.
pub const CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category, difficulty)
const QUESTIONS: &[(&str, &str, &str, i32)] = &[
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        "History",
        2,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "History", 1),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        "Entertainment",
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        "Entertainment",
        4,
    ),
    (
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        "Entertainment",
        3,
    ),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "Sports", 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "Sports", 4),
    ("Who invented Peanut Butter?", "George Washington Carver", "History", 2),
    ("What is the largest lake in Africa?", "Lake Victoria", "Geography", 2),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        "Geography",
        3,
    ),
    ("The Taj Mahal is located in which Indian city?", "Agra", "Geography", 2),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        "Art",
        1,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", "Art", 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", "Art", 4),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        "Art",
        2,
    ),
    ("What is the heaviest organ in the human body?", "The Liver", "Science", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "Science", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "Science", 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", "History", 4),
];

/// Counts of rows written by `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Insert the starter categories and questions into an empty store.
pub async fn run(repo: &dyn TriviaRepository) -> Result<SeedReport, DbError> {
    if !repo.list_categories().await?.is_empty() {
        tracing::info!("Categories already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut ids = HashMap::new();
    for name in CATEGORIES {
        let category = repo.insert_category(name).await?;
        ids.insert(*name, category.id);
    }

    let mut report = SeedReport {
        categories: ids.len(),
        questions: 0,
    };

    for (question, answer, category, difficulty) in QUESTIONS {
        let Some(&category) = ids.get(category) else {
            tracing::warn!(category, "Seed question references unknown category");
            continue;
        };
        repo.insert_question(NewQuestion {
            question: (*question).to_owned(),
            answer: (*answer).to_owned(),
            category,
            difficulty: *difficulty,
        })
        .await?;
        report.questions += 1;
    }

    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "Seeded trivia data"
    );
    Ok(report)
}
