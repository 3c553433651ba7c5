//! Closed value sets for listing parameters. Only these values reach SQL text.

use crate::error::AppError;
use std::str::FromStr;

/// Category slugs accepted by the `category` filter.
pub const KNOWN_CATEGORIES: &[&str] =
    &["euro game", "social deduction", "dexterity", "children's games"];

pub fn is_known_category(slug: &str) -> bool {
    KNOWN_CATEGORIES.contains(&slug)
}

/// Columns the reviews listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Owner,
    Category,
    Title,
    ReviewId,
    ReviewImgUrl,
    CreatedAt,
    Votes,
    Designer,
    CommentCount,
}

impl SortColumn {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Owner => "reviews.owner",
            SortColumn::Category => "reviews.category",
            SortColumn::Title => "reviews.title",
            SortColumn::ReviewId => "reviews.review_id",
            SortColumn::ReviewImgUrl => "reviews.review_img_url",
            SortColumn::CreatedAt => "reviews.created_at",
            SortColumn::Votes => "reviews.votes",
            SortColumn::Designer => "reviews.designer",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "owner" => SortColumn::Owner,
            "category" => SortColumn::Category,
            "title" => SortColumn::Title,
            "review_id" => SortColumn::ReviewId,
            "review_img_url" => SortColumn::ReviewImgUrl,
            "created_at" => SortColumn::CreatedAt,
            "votes" => SortColumn::Votes,
            "designer" => SortColumn::Designer,
            "comment_count" => SortColumn::CommentCount,
            _ => return Err(AppError::InvalidSortQuery),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Case-sensitive: `asc` is rejected.
impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(AppError::InvalidOrderQuery),
        }
    }
}
