//! Review business logic service.

use crate::database::models::{CreateReview, Review, ReviewRequest};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::movie_repository::MovieRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::{new_object_id, parse_object_id};
use sqlx::SqlitePool;
use validator::Validate;

pub struct ReviewService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a review for an existing movie.
    ///
    /// The movie is only checked at this moment; it may be deleted later
    /// without touching its reviews.
    ///
    /// # Errors
    /// `Validation` for a malformed movie id or missing fields, `NotFound`
    /// when the movie does not exist.
    pub async fn create_review(
        &self,
        movie_id: &str,
        request: ReviewRequest,
    ) -> ServiceResult<Review> {
        let movie_id = parse_object_id(movie_id)?;
        request
            .validate()
            .map_err(ServiceError::from_validation_errors)?;

        let (Some(username), Some(review), Some(rating)) =
            (request.username, request.review, request.rating)
        else {
            return Err(ServiceError::validation(
                "Username, review and rating are required",
            ));
        };

        if MovieRepository::new(self.pool)
            .get_movie_by_id(&movie_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Movie", movie_id));
        }

        let data = CreateReview {
            id: new_object_id(),
            movie_id,
            username,
            review,
            rating,
        };

        Ok(ReviewRepository::new(self.pool).create_review(data).await?)
    }
}
