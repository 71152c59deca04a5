use axum::http::StatusCode;
use rstest::rstest;
use tracing::Level;
use venuebook_api::{
    config::parse_log_level,
    middleware::{auth::parse_bearer, error_handling::map_error},
};
use venuebook_core::errors::VenueError;

#[rstest]
#[case(VenueError::ConfigIncomplete(vec!["date"]), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(VenueError::NoSlotsGenerated, StatusCode::UNPROCESSABLE_ENTITY)]
#[case(
    VenueError::CommitItemFailed { sequence_number: 1, reason: "overlap".to_string() },
    StatusCode::BAD_GATEWAY
)]
#[case(VenueError::NotFound("Ground not found".to_string()), StatusCode::NOT_FOUND)]
#[case(VenueError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(VenueError::Authentication("Invalid token".to_string()), StatusCode::UNAUTHORIZED)]
#[case(VenueError::Authorization("Not authorized".to_string()), StatusCode::FORBIDDEN)]
#[case(VenueError::Upstream(eyre::eyre!("backend down")), StatusCode::BAD_GATEWAY)]
#[case(
    VenueError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: VenueError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[rstest]
#[case("Bearer abc", Some("abc"))]
#[case("bearer abc", Some("abc"))]
#[case("  Bearer   abc  ", Some("abc"))]
#[case("Bearer ", None)]
#[case("Basic dXNlcjpwYXNz", None)]
#[case("abc", None)]
fn test_parse_bearer(#[case] header: &str, #[case] expected: Option<&str>) {
    assert_eq!(parse_bearer(header), expected);
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("warn", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_log_level_parsing(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}
