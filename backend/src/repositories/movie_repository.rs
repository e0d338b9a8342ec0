//! Database repository for movie records.
//!
//! Provides CRUD operations over the `movies` table. Actor lists are stored
//! as a JSON column so their submitted order survives a round trip.

use crate::database::models::{Movie, MovieFields};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;

const MOVIE_COLUMNS: &str =
    "id, title, release_date, genre, actors, image_url, avg_rating, created_at, updated_at";

/// Repository for movie database operations.
pub struct MovieRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MovieRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a movie under the given id.
    pub async fn create_movie(&self, id: &str, fields: MovieFields) -> Result<Movie> {
        let now = Utc::now();
        let movie = sqlx::query_as::<_, Movie>(&format!(
            r#"
            INSERT INTO movies (id, title, release_date, genre, actors, image_url, avg_rating, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.title)
        .bind(fields.release_date)
        .bind(fields.genre)
        .bind(Json(fields.actors))
        .bind(fields.image_url)
        .bind(fields.avg_rating)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(movie)
    }

    /// Retrieves every movie in insertion order.
    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(movies)
    }

    /// Retrieves a movie by its identifier.
    ///
    /// # Returns
    /// `Some(Movie)` if found, `None` otherwise
    pub async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(movie)
    }

    /// Replaces the stored fields of a movie.
    ///
    /// # Returns
    /// The updated movie, or `None` if no movie has this id
    pub async fn update_movie(&self, id: &str, fields: MovieFields) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            r#"
            UPDATE movies
            SET title = ?, release_date = ?, genre = ?, actors = ?, image_url = ?, avg_rating = ?, updated_at = ?
            WHERE id = ?
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(fields.title)
        .bind(fields.release_date)
        .bind(fields.genre)
        .bind(Json(fields.actors))
        .bind(fields.image_url)
        .bind(fields.avg_rating)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(movie)
    }

    /// Deletes a movie.
    ///
    /// # Returns
    /// `true` if a row was removed
    pub async fn delete_movie(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
