//! Database repository for movie reviews.
//!
//! Reviews reference movies by id only; nothing here checks that the movie
//! still exists.

use crate::database::models::{CreateReview, Review};
use anyhow::Result;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct ReviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a review.
    pub async fn create_review(&self, review: CreateReview) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, movie_id, username, review, rating, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, movie_id, username, review, rating, created_at
            "#,
        )
        .bind(review.id)
        .bind(review.movie_id)
        .bind(review.username)
        .bind(review.review)
        .bind(review.rating)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(review)
    }

    /// Retrieves the reviews of a single movie, oldest first.
    pub async fn get_reviews_by_movie_id(&self, movie_id: &str) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, movie_id, username, review, rating, created_at
            FROM reviews WHERE movie_id = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Retrieves the reviews of any of the given movies, oldest first.
    pub async fn get_reviews_by_movie_ids(&self, movie_ids: &[String]) -> Result<Vec<Review>> {
        if movie_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, movie_id, username, review, rating, created_at FROM reviews WHERE movie_id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in movie_ids {
            separated.push_bind(id.as_str());
        }
        separated.push_unseparated(") ORDER BY created_at ASC, id ASC");

        let reviews = builder
            .build_query_as::<Review>()
            .fetch_all(self.pool)
            .await?;

        Ok(reviews)
    }

    /// Counts the reviews attached to a movie id.
    #[cfg(test)]
    pub async fn count_by_movie_id(&self, movie_id: &str) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE movie_id = ?")
            .bind(movie_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
