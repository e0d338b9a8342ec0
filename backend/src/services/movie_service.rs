//! Movie business logic service.
//!
//! Handles movie CRUD and the read path that joins movies with their reviews
//! and ranks them by average rating.

use crate::database::models::{Movie, MovieRequest, MovieWithReviews, Review};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::movie_repository::MovieRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::{new_object_id, parse_object_id};
use sqlx::SqlitePool;
use std::cmp::Ordering;
use std::collections::HashMap;

pub struct MovieService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MovieService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Validates and stores a new movie.
    pub async fn create_movie(&self, request: MovieRequest) -> ServiceResult<Movie> {
        let fields = request.into_fields()?;
        let repo = MovieRepository::new(self.pool);
        Ok(repo.create_movie(&new_object_id(), fields).await?)
    }

    /// Lists every movie without reviews.
    pub async fn list_movies(&self) -> ServiceResult<Vec<Movie>> {
        let repo = MovieRepository::new(self.pool);
        Ok(repo.list_movies().await?)
    }

    /// Lists every movie joined with its reviews, best rated first.
    pub async fn list_movies_with_reviews(&self) -> ServiceResult<Vec<MovieWithReviews>> {
        let movies = MovieRepository::new(self.pool).list_movies().await?;
        let ids: Vec<String> = movies.iter().map(|m| m.id.clone()).collect();
        let reviews = ReviewRepository::new(self.pool)
            .get_reviews_by_movie_ids(&ids)
            .await?;

        Ok(aggregate_reviews(movies, reviews))
    }

    /// Retrieves a movie by id.
    ///
    /// # Errors
    /// `Validation` for a malformed id, `NotFound` when absent.
    pub async fn get_movie_required(&self, id: &str) -> ServiceResult<Movie> {
        let id = parse_object_id(id)?;
        let repo = MovieRepository::new(self.pool);
        repo.get_movie_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Movie", id))
    }

    /// Retrieves a movie joined with its reviews and their average rating.
    pub async fn get_movie_with_reviews(&self, id: &str) -> ServiceResult<MovieWithReviews> {
        let movie = self.get_movie_required(id).await?;
        let reviews = ReviewRepository::new(self.pool)
            .get_reviews_by_movie_id(&movie.id)
            .await?;

        Ok(MovieWithReviews::new(movie, reviews))
    }

    /// Replaces a movie's fields. The payload is validated before the store
    /// is touched, so a rejected update leaves the record unchanged.
    pub async fn update_movie(&self, id: &str, request: MovieRequest) -> ServiceResult<Movie> {
        let id = parse_object_id(id)?;
        let fields = request.into_fields()?;
        let repo = MovieRepository::new(self.pool);
        repo.update_movie(&id, fields)
            .await?
            .ok_or_else(|| ServiceError::not_found("Movie", id))
    }

    /// Deletes a movie. Its reviews are left in place.
    pub async fn delete_movie(&self, id: &str) -> ServiceResult<()> {
        let id = parse_object_id(id)?;
        let repo = MovieRepository::new(self.pool);
        if repo.delete_movie(&id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Movie", id))
        }
    }
}

/// Joins movies with their reviews and sorts by average rating descending,
/// unrated movies last, ties broken by title ascending.
pub fn aggregate_reviews(movies: Vec<Movie>, reviews: Vec<Review>) -> Vec<MovieWithReviews> {
    let mut by_movie: HashMap<String, Vec<Review>> = HashMap::new();
    for review in reviews {
        by_movie
            .entry(review.movie_id.clone())
            .or_default()
            .push(review);
    }

    let mut joined: Vec<MovieWithReviews> = movies
        .into_iter()
        .map(|movie| {
            let reviews = by_movie.remove(&movie.id).unwrap_or_default();
            MovieWithReviews::new(movie, reviews)
        })
        .collect();

    joined.sort_by(|a, b| {
        compare_ratings_desc(a.avg_rating, b.avg_rating).then_with(|| a.title.cmp(&b.title))
    });
    joined
}

fn compare_ratings_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Actor, Genre};
    use chrono::Utc;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            release_date: 2000,
            genre: Genre::Drama,
            actors: vec![Actor {
                actor_name: "A".to_string(),
                character_name: "B".to_string(),
            }],
            image_url: None,
            avg_rating: Some(1.0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn review(movie_id: &str, rating: f64) -> Review {
        Review {
            id: new_object_id(),
            movie_id: movie_id.to_string(),
            username: "critic".to_string(),
            review: "ok".to_string(),
            rating,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_of_reviews() {
        let joined = aggregate_reviews(
            vec![movie("m1", "Heat")],
            vec![review("m1", 8.0), review("m1", 6.0)],
        );

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].avg_rating, Some(7.0));
        assert_eq!(joined[0].reviews.len(), 2);
    }

    #[test]
    fn test_unreviewed_movies_sort_last() {
        let joined = aggregate_reviews(
            vec![
                movie("m1", "Alpha"),
                movie("m2", "Bravo"),
                movie("m3", "Charlie"),
                movie("m4", "Delta"),
            ],
            vec![
                review("m2", 5.0),
                review("m3", 9.0),
                review("m4", 5.0),
                review("orphan", 10.0),
            ],
        );

        let titles: Vec<&str> = joined.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Charlie", "Bravo", "Delta", "Alpha"]);
        assert_eq!(joined[3].avg_rating, None);
        assert!(joined[3].reviews.is_empty());
    }

    #[test]
    fn test_unrated_ties_break_on_title() {
        let joined = aggregate_reviews(vec![movie("m1", "Zodiac"), movie("m2", "Amelie")], vec![]);
        let titles: Vec<&str> = joined.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Amelie", "Zodiac"]);
    }

    #[test]
    fn test_computed_rating_replaces_stored_rating() {
        let joined = aggregate_reviews(vec![movie("m1", "Heat")], vec![]);
        let value = serde_json::to_value(&joined[0]).unwrap();
        assert!(value["avgRating"].is_null());
        assert_eq!(value["reviews"], serde_json::json!([]));
    }
}
