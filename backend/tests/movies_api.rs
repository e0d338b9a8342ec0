mod common;

use axum::http::StatusCode;
use cinereview::auth::middleware::RouteAuthPolicy;
use common::{movie_body, spawn_app, spawn_app_with_policy};
use serde_json::json;

#[tokio::test]
async fn created_movie_keeps_actor_order() {
    let app = spawn_app().await;
    let token = app.login("ana").await;

    let body = json!({
        "title": "Heat",
        "releaseDate": 1995,
        "genre": "Thriller",
        "imageUrl": "https://example.com/heat.jpg",
        "actors": [
            { "actorName": "Al Pacino", "characterName": "Vincent Hanna" },
            { "actorName": "Robert De Niro", "characterName": "Neil McCauley" },
            { "actorName": "Val Kilmer", "characterName": "Chris Shiherlis" }
        ]
    });
    let movie = app.create_movie(&token, body.clone()).await;
    let id = movie["_id"].as_str().unwrap();

    let (status, fetched) = app
        .send("GET", &format!("/movies/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["success"], json!(true));
    assert_eq!(fetched["movie"]["actors"], body["actors"]);
    assert_eq!(fetched["movie"]["genre"], json!("Thriller"));
    assert_eq!(fetched["movie"]["releaseDate"], json!(1995));
    assert_eq!(fetched["movie"]["imageUrl"], json!("https://example.com/heat.jpg"));
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = spawn_app().await;
    let token = app.login("ana").await;

    let mut empty_actors = movie_body("Empty Cast");
    empty_actors["actors"] = json!([]);

    let mut no_title = movie_body("x");
    no_title["title"] = json!("");

    let mut text_year = movie_body("Text Year");
    text_year["releaseDate"] = json!("nineteen ninety");

    let mut old_year = movie_body("Too Old");
    old_year["releaseDate"] = json!(1850);

    let mut bad_genre = movie_body("Romcom");
    bad_genre["genre"] = json!("Romance");

    let mut no_genre = movie_body("No Genre");
    no_genre.as_object_mut().unwrap().remove("genre");

    for body in [empty_actors, no_title, text_year, old_year, bad_genre, no_genre] {
        let (status, response) = app.send("POST", "/movies", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{response}");
        assert_eq!(response["success"], json!(false));
    }

    let (_, movies) = app.send("GET", "/movies", Some(&token), None).await;
    assert_eq!(movies, json!([]));
}

#[tokio::test]
async fn list_without_flag_is_bare_array() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    app.create_movie(&token, movie_body("The Matrix")).await;

    let (status, body) = app.send("GET", "/movies", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let movies = body.as_array().expect("bare array");
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], json!("The Matrix"));
    assert!(movies[0].get("reviews").is_none());
}

#[tokio::test]
async fn list_with_reviews_averages_and_sorts() {
    let app = spawn_app().await;
    let token = app.login("ana").await;

    let unrated = app.create_movie(&token, movie_body("Alpha")).await;
    let middling = app.create_movie(&token, movie_body("Bravo")).await;
    let best = app.create_movie(&token, movie_body("Charlie")).await;

    for (movie, rating) in [(&middling, 8.0), (&middling, 6.0), (&best, 9.5)] {
        let id = movie["_id"].as_str().unwrap();
        let (status, _) = app
            .send(
                "POST",
                &format!("/movies/{id}/review"),
                Some(&token),
                Some(json!({ "username": "ana", "review": "ok", "rating": rating })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .send("GET", "/movies?reviews=true", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let movies = body["movies"].as_array().unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Charlie", "Bravo", "Alpha"]);

    assert_eq!(movies[1]["avgRating"], json!(7.0));
    assert_eq!(movies[1]["reviews"].as_array().unwrap().len(), 2);
    assert!(movies[2]["avgRating"].is_null());
    assert_eq!(movies[2]["_id"], unrated["_id"]);
}

#[tokio::test]
async fn single_movie_with_reviews() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    let movie = app.create_movie(&token, movie_body("Heat")).await;
    let id = movie["_id"].as_str().unwrap();

    let (_, body) = app
        .send("GET", &format!("/movies/{id}?reviews=true"), Some(&token), None)
        .await;
    assert!(body["movie"]["avgRating"].is_null());
    assert_eq!(body["movie"]["reviews"], json!([]));
    assert_eq!(body["movie"]["createdAt"], movie["createdAt"]);
    assert_eq!(body["movie"]["updatedAt"], movie["updatedAt"]);

    for rating in [8.0, 6.0] {
        app.send(
            "POST",
            &format!("/movies/{id}/review"),
            Some(&token),
            Some(json!({ "username": "ana", "review": "ok", "rating": rating })),
        )
        .await;
    }

    let (status, body) = app
        .send("GET", &format!("/movies/{id}?reviews=true"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movie"]["avgRating"], json!(7.0));
}

#[tokio::test]
async fn get_movie_reports_malformed_and_missing_ids() {
    let app = spawn_app().await;
    let token = app.login("ana").await;

    let (status, body) = app.send("GET", "/movies/not-an-id", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let absent = uuid::Uuid::now_v7();
    let (status, _) = app
        .send("GET", &format!("/movies/{absent}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    let movie = app.create_movie(&token, movie_body("The Matrix")).await;
    let id = movie["_id"].as_str().unwrap();

    let mut replacement = movie_body("The Matrix Reloaded");
    replacement["releaseDate"] = json!(2003);
    replacement["avgRating"] = json!(7.2);

    let (status, body) = app
        .send("PUT", &format!("/movies/{id}"), Some(&token), Some(replacement))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movie"]["title"], json!("The Matrix Reloaded"));
    assert_eq!(body["movie"]["releaseDate"], json!(2003));
    assert_eq!(body["movie"]["avgRating"], json!(7.2));
    assert_eq!(body["movie"]["_id"], json!(id));
}

#[tokio::test]
async fn update_missing_field_leaves_record_unchanged() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    let movie = app.create_movie(&token, movie_body("The Matrix")).await;
    let id = movie["_id"].as_str().unwrap();

    let mut replacement = movie_body("Renamed");
    replacement.as_object_mut().unwrap().remove("genre");

    let (status, _) = app
        .send("PUT", &format!("/movies/{id}"), Some(&token), Some(replacement))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app
        .send("GET", &format!("/movies/{id}"), Some(&token), None)
        .await;
    assert_eq!(body["movie"]["title"], json!("The Matrix"));
    assert_eq!(body["movie"]["genre"], json!("Science Fiction"));
}

#[tokio::test]
async fn update_unknown_movie_not_found() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    let absent = uuid::Uuid::now_v7();

    let (status, _) = app
        .send(
            "PUT",
            &format!("/movies/{absent}"),
            Some(&token),
            Some(movie_body("Ghost")),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_then_not_found() {
    let app = spawn_app().await;
    let token = app.login("ana").await;
    let movie = app.create_movie(&token, movie_body("Short Lived")).await;
    let uri = format!("/movies/{}", movie["_id"].as_str().unwrap());

    let (status, body) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn collection_put_and_delete_are_unsupported() {
    let app = spawn_app().await;
    let token = app.login("ana").await;

    for method in ["PUT", "DELETE"] {
        let (status, body) = app.send(method, "/movies", Some(&token), None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("HTTP method not supported."));
    }

    let (status, _) = app.send("PUT", "/movies", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn movie_detail_gate_follows_policy() {
    let gated = spawn_app().await;
    let token = gated.login("ana").await;
    let movie = gated.create_movie(&token, movie_body("Heat")).await;
    let uri = format!("/movies/{}", movie["_id"].as_str().unwrap());
    let (status, _) = gated.send("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let open = spawn_app_with_policy(RouteAuthPolicy {
        movie_detail: false,
        review: true,
    })
    .await;
    let token = open.login("ana").await;
    let movie = open.create_movie(&token, movie_body("Heat")).await;
    let uri = format!("/movies/{}", movie["_id"].as_str().unwrap());

    let (status, _) = open.send("GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);

    // Writes on the same path stay gated.
    let (status, _) = open.send("DELETE", &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = open.send("GET", "/movies", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
