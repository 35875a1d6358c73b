use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_zero_classifies_as_network() {
    assert_eq!(ApiError::network("offline").kind(), ErrorKind::Network);
    assert_eq!(ApiError::timeout().kind(), ErrorKind::Network);
}

#[test]
fn status_401_classifies_as_unauthorized() {
    assert_eq!(ApiError::unauthorized("stale token").kind(), ErrorKind::Unauthorized);
}

#[test]
fn other_4xx_classify_as_client() {
    assert_eq!(ApiError::from_status(400, "bad").kind(), ErrorKind::Client);
    assert_eq!(ApiError::from_status(404, "missing").kind(), ErrorKind::Client);
    assert_eq!(ApiError::from_status(409, "taken").kind(), ErrorKind::Client);
    assert_eq!(ApiError::validation(Vec::new()).kind(), ErrorKind::Client);
}

#[test]
fn fivexx_and_everything_else_classify_as_server() {
    assert_eq!(ApiError::from_status(500, "boom").kind(), ErrorKind::Server);
    assert_eq!(ApiError::from_status(503, "busy").kind(), ErrorKind::Server);
    assert_eq!(ApiError::from_status(302, "odd").kind(), ErrorKind::Server);
}

// =============================================================
// Retriability and forced logout
// =============================================================

#[test]
fn network_and_server_errors_are_retriable() {
    assert!(ApiError::network("offline").is_retriable());
    assert!(ApiError::timeout().is_retriable());
    assert!(ApiError::from_status(500, "boom").is_retriable());
}

#[test]
fn client_errors_are_not_retriable() {
    assert!(!ApiError::unauthorized("stale").is_retriable());
    assert!(!ApiError::from_status(404, "missing").is_retriable());
    assert!(!ApiError::validation(Vec::new()).is_retriable());
}

#[test]
fn force_logout_only_on_401() {
    assert!(ApiError::unauthorized("stale").should_force_logout());
    assert!(!ApiError::from_status(403, "forbidden").should_force_logout());
    assert!(!ApiError::from_status(500, "boom").should_force_logout());
    assert!(!ApiError::network("offline").should_force_logout());
}

// =============================================================
// Field errors
// =============================================================

#[test]
fn field_message_finds_matching_field() {
    let err = ApiError::validation(vec![
        FieldError::new("email", "Enter a valid email address"),
        FieldError::new("password", "Too short"),
    ]);
    assert_eq!(err.field_message("password"), Some("Too short"));
    assert_eq!(err.field_message("name"), None);
}

// =============================================================
// Error body parsing
// =============================================================

#[test]
fn parse_error_body_reads_message_and_field_errors() {
    let raw = r#"{"message":"Validation failed","errors":{"email":"Already registered"}}"#;
    let err = parse_error_body(422, raw);
    assert_eq!(err.status, 422);
    assert_eq!(err.message, "Validation failed");
    assert_eq!(err.field_message("email"), Some("Already registered"));
}

#[test]
fn parse_error_body_tolerates_missing_message() {
    let err = parse_error_body(500, "{}");
    assert_eq!(err.message, "request failed with status 500");
    assert!(err.field_errors.is_empty());
}

#[test]
fn parse_error_body_tolerates_non_json_bodies() {
    let err = parse_error_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err.status, 502);
    assert_eq!(err.message, "request failed with status 502");
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::from_status(404, "not found");
    assert_eq!(err.to_string(), "not found (status 404)");
}
