//! Per-region ratings on a 1 to 5 scale.
//!
//! Ratings are independent of geometry: they never influence region counting
//! or catalog applicability, and only appear in the report.

use std::{collections::HashMap, fmt};

use log::debug;

use venn_core::identifier::Id;

use crate::error::VennError;

/// A rating between [`Rating::MIN`] and [`Rating::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Returns `None` for values outside the scale.
    pub fn new(value: i32) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then(|| Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ratings keyed by region id. Missing entries are unset.
#[derive(Debug, Clone, Default)]
pub struct Ratings {
    entries: HashMap<Id, Rating>,
}

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the rating of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::InvalidRating`] for values outside 1..=5; the
    /// previous rating is kept.
    pub fn set(&mut self, id: Id, value: i32) -> Result<Rating, VennError> {
        let rating = Rating::new(value).ok_or(VennError::InvalidRating { id, value })?;
        self.entries.insert(id, rating);
        debug!(id:% = id, rating = rating.value(); "Rating set");
        Ok(rating)
    }

    /// Resets `id` to unset, returning the previous rating.
    pub fn clear(&mut self, id: Id) -> Option<Rating> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: Id) -> Option<Rating> {
        self.entries.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_range() {
        assert_eq!(Rating::new(1).map(Rating::value), Some(1));
        assert_eq!(Rating::new(5).map(Rating::value), Some(5));
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert!(Rating::new(-3).is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let mut ratings = Ratings::new();
        let id = Id::new("agile");

        ratings.set(id, 2).unwrap();
        ratings.set(id, 4).unwrap();

        assert_eq!(ratings.get(id).map(Rating::value), Some(4));
        assert_eq!(ratings.len(), 1);
    }

    #[test]
    fn test_invalid_value_keeps_previous() {
        let mut ratings = Ratings::new();
        let id = Id::new("agile");
        ratings.set(id, 3).unwrap();

        let err = ratings.set(id, 9).unwrap_err();
        assert!(matches!(err, VennError::InvalidRating { value: 9, .. }));
        assert_eq!(ratings.get(id).map(Rating::value), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut ratings = Ratings::new();
        let id = Id::new("change");
        ratings.set(id, 1).unwrap();

        assert_eq!(ratings.clear(id).map(Rating::value), Some(1));
        assert!(ratings.get(id).is_none());
        assert!(ratings.clear(id).is_none());
        assert!(ratings.is_empty());
    }
}
