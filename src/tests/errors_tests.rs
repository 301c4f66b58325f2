use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::errors::image::ImageError;
use crate::errors::lesson::LessonError;
use crate::errors::order::OrderError;
use crate::errors::search::SearchError;
use crate::errors::AppError;

#[test]
fn lesson_errors_map_to_expected_statuses() {
    assert_eq!(
        LessonError::not_found(7).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        LessonError::NoFieldsToUpdate.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        LessonError::database("boom").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn order_validation_errors_are_client_errors() {
    assert_eq!(
        OrderError::invalid_name("x1").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        OrderError::invalid_phone("abc").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        OrderError::EmptyLessonList.status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn database_failures_do_not_leak_their_cause() {
    let cause = "connection refused by mongod at 10.0.0.3";
    for message in [
        LessonError::database(cause).user_message(),
        OrderError::database(cause).user_message(),
        SearchError::database(cause).user_message(),
    ] {
        assert!(!message.contains("mongod"));
        assert!(!message.contains("10.0.0.3"));
    }
}

#[test]
fn error_responses_carry_the_mapped_status() {
    let response = ImageError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = LessonError::not_found(1).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = SearchError::query_too_long(300, 256).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn error_codes_are_stable_identifiers() {
    assert_eq!(LessonError::not_found(1).error_code(), "LESSON_NOT_FOUND");
    assert_eq!(
        OrderError::EmptyLessonList.error_code(),
        "ORDER_EMPTY_LESSON_LIST"
    );
    assert_eq!(
        SearchError::query_too_long(300, 256).error_code(),
        "SEARCH_QUERY_TOO_LONG"
    );
    assert_eq!(ImageError::NotFound.error_code(), "IMAGE_NOT_FOUND");
}
