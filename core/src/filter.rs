use serde::{Deserialize, Serialize};

/// Inclusive bounds on a movie's release year and rating.
///
/// An absent bound leaves that side unconstrained. A filter is applied
/// uniformly wherever an edge is considered, so filtered traversal can
/// legitimately reach fewer actors than unfiltered traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
}

impl MovieFilter {
    pub fn new(
        min_year: Option<i32>,
        max_year: Option<i32>,
        min_rating: Option<f32>,
        max_rating: Option<f32>,
    ) -> Self {
        Self {
            min_year,
            max_year,
            min_rating,
            max_rating,
        }
    }

    pub fn year_range(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year: Some(min_year),
            max_year: Some(max_year),
            ..Self::default()
        }
    }

    pub fn rating_range(min_rating: f32, max_rating: f32) -> Self {
        Self {
            min_rating: Some(min_rating),
            max_rating: Some(max_rating),
            ..Self::default()
        }
    }

    pub fn admits(&self, year: i32, rating: f32) -> bool {
        self.min_year.is_none_or(|min| year >= min)
            && self.max_year.is_none_or(|max| year <= max)
            && self.min_rating.is_none_or(|min| rating >= min)
            && self.max_rating.is_none_or(|max| rating <= max)
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }
}
