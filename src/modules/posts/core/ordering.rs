use std::cmp::Reverse;
use std::str::FromStr;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::post::{Post, non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl FromStr for SortField {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            _ => Err(PostError::invalid(
                r#"Invalid sort field. Use "title" or "content"."#,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PostError::invalid(r#"Invalid direction. Use "asc" or "desc"."#)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrdering {
    pub field: SortField,
    pub direction: SortDirection,
}

impl PostOrdering {
    /// Parses the raw `sort` and `direction` query values.
    ///
    /// Empty values count as absent. The sort field is validated before the
    /// direction, and a direction without a sort field is validated but
    /// otherwise ignored.
    pub fn parse(
        sort: Option<String>,
        direction: Option<String>,
    ) -> Result<Option<Self>, PostError> {
        let field = non_empty(sort).map(|s| s.parse::<SortField>()).transpose()?;
        let direction = non_empty(direction)
            .map(|d| d.parse::<SortDirection>())
            .transpose()?
            .unwrap_or_default();

        Ok(field.map(|field| Self { field, direction }))
    }

    /// Sorts case-insensitively. Equal keys keep their relative order in both
    /// directions.
    pub fn sort(&self, posts: &mut [Post]) {
        let key = |post: &Post| match self.field {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        };
        match self.direction {
            SortDirection::Asc => posts.sort_by_cached_key(key),
            SortDirection::Desc => posts.sort_by_cached_key(|post| Reverse(key(post))),
        }
    }
}
