use sundial::http::response::{Body, Response, ResponseBuilder, SERVER_IDENT, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_every_response_carries_server_header() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert_eq!(response.header("Server"), Some(SERVER_IDENT));
}

#[test]
fn test_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(Body::Bytes(b"This is the body".to_vec()))
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(Body::Bytes(b"test".to_vec()))
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
}

#[test]
fn test_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_headers_keep_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-First", "1")
        .header("X-Second", "2")
        .body(Body::Bytes(b"x".to_vec()))
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Server",
            "Content-Type",
            "X-First",
            "X-Second",
            "Content-Length"
        ]
    );
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .build();

    assert_eq!(response.header("content-type"), Some("text/html"));
}

#[test]
fn test_error_response_body_format() {
    let response = Response::error(StatusCode::NotFound, "/missing.html", "not found");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));

    match &response.body {
        Body::Bytes(bytes) => {
            assert_eq!(bytes.as_slice(), b"'/missing.html': not found\r\n");
        }
        other => panic!("expected in-memory body, got {other:?}"),
    }
}

#[test]
fn test_body_len() {
    assert_eq!(Body::Empty.len(), 0);
    assert_eq!(Body::Bytes(vec![0; 42]).len(), 42);
}
