//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, plus the request payloads that create or replace them.
//! Records serialize with camelCase field names and expose their id as `_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub password_hash: String,
}

/// Closed set of genres a movie may be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Thriller,
    Western,
    #[serde(rename = "Science Fiction")]
    #[sqlx(rename = "Science Fiction")]
    ScienceFiction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub actor_name: String,
    pub character_name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub release_date: i32,
    pub genre: Genre,
    #[sqlx(json)]
    pub actors: Vec<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Stored rating supplied by clients, unrelated to review averages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated column values for inserting or replacing a movie.
#[derive(Debug, Clone)]
pub struct MovieFields {
    pub title: String,
    pub release_date: i32,
    pub genre: Genre,
    pub actors: Vec<Actor>,
    pub image_url: Option<String>,
    pub avg_rating: Option<f64>,
}

/// Body of `POST /movies` and `PUT /movies/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Release date is required"),
        range(min = 1900, max = 2100, message = "Release date must be between 1900 and 2100")
    )]
    pub release_date: Option<i32>,

    #[validate(required(message = "Genre is required"))]
    pub genre: Option<Genre>,

    #[validate(
        required(message = "At least one actor is required"),
        length(min = 1, message = "At least one actor is required")
    )]
    pub actors: Option<Vec<Actor>>,

    pub image_url: Option<String>,

    #[validate(range(min = 0.0, max = 10.0, message = "Average rating must be between 0 and 10"))]
    pub avg_rating: Option<f64>,
}

impl MovieRequest {
    /// Validates the payload and extracts the column values.
    pub fn into_fields(self) -> ServiceResult<MovieFields> {
        self.validate().map_err(ServiceError::from_validation_errors)?;

        let missing = |field: &str| ServiceError::validation(format!("{} is required", field));

        Ok(MovieFields {
            title: self.title.ok_or_else(|| missing("Title"))?,
            release_date: self.release_date.ok_or_else(|| missing("Release date"))?,
            genre: self.genre.ok_or_else(|| missing("Genre"))?,
            actors: self.actors.ok_or_else(|| missing("Actors"))?,
            image_url: self.image_url,
            avg_rating: self.avg_rating,
        })
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub movie_id: String,
    pub username: String,
    pub review: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateReview {
    pub id: String,
    pub movie_id: String,
    pub username: String,
    pub review: String,
    pub rating: f64,
}

/// Body of `POST /movies/{id}/review`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Review is required"),
        length(min = 1, message = "Review is required")
    )]
    pub review: Option<String>,

    #[validate(required(message = "Rating is required"))]
    pub rating: Option<f64>,
}

/// A movie joined with its reviews and the mean of their ratings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieWithReviews {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub release_date: i32,
    pub genre: Genre,
    pub actors: Vec<Actor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub reviews: Vec<Review>,
    /// `None` serializes as `null` when the movie has no reviews.
    pub avg_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieWithReviews {
    pub fn new(movie: Movie, reviews: Vec<Review>) -> Self {
        let avg_rating = if reviews.is_empty() {
            None
        } else {
            Some(reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64)
        };

        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            genre: movie.genre,
            actors: movie.actors,
            image_url: movie.image_url,
            reviews,
            avg_rating,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
