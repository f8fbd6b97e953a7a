use serde::Serialize;

use crate::modules::posts::core::post::{Post, non_empty};

pub const NO_MATCH_MESSAGE: &str = "Could not find any matching posts.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    ByTitle(String),
    ByContent(String),
    Unfiltered,
}

impl SearchQuery {
    /// A title wins over content when both are given.
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        match (non_empty(title), non_empty(content)) {
            (Some(title), _) => Self::ByTitle(title),
            (None, Some(content)) => Self::ByContent(content),
            (None, None) => Self::Unfiltered,
        }
    }

    pub fn run(&self, posts: &[Post]) -> SearchOutcome {
        match self {
            Self::ByTitle(title) => SearchOutcome::Matches(
                posts
                    .iter()
                    .filter(|p| &p.title == title)
                    .map(|p| p.title.clone())
                    .collect(),
            ),
            Self::ByContent(content) => {
                let needle = content.to_lowercase();
                SearchOutcome::Matches(
                    posts
                        .iter()
                        .filter(|p| p.content.to_lowercase().contains(&needle))
                        .map(|p| p.content.clone())
                        .collect(),
                )
            }
            Self::Unfiltered => SearchOutcome::Fallback {
                message: NO_MATCH_MESSAGE.to_string(),
                available_titles: posts.iter().map(|p| p.title.clone()).collect(),
                available_contents: posts.iter().map(|p| p.content.clone()).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Matches(Vec<String>),
    Fallback {
        message: String,
        available_titles: Vec<String>,
        available_contents: Vec<String>,
    },
}
