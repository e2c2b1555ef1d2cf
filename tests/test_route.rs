use std::path::Path;

use sundial::http::response::StatusCode;
use sundial::serve::route::{MAX_DIMENSION, RouteDecision, resolve};

fn rejected(status: StatusCode, reason: &str) -> RouteDecision {
    RouteDecision::Rejected {
        status,
        reason: reason.to_string(),
    }
}

#[tokio::test]
async fn test_image_target_in_range() {
    let decision = resolve(Path::new("httpdocs"), "/640,480").await;

    assert_eq!(
        decision,
        RouteDecision::Image {
            width: 640,
            height: 480
        }
    );
}

#[tokio::test]
async fn test_image_target_accepts_bounds() {
    let max = format!("/{MAX_DIMENSION},{MAX_DIMENSION}");

    assert_eq!(
        resolve(Path::new("httpdocs"), "/1,1").await,
        RouteDecision::Image {
            width: 1,
            height: 1
        }
    );
    assert_eq!(
        resolve(Path::new("httpdocs"), &max).await,
        RouteDecision::Image {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION
        }
    );
}

#[tokio::test]
async fn test_image_size_zero_rejected() {
    let decision = resolve(Path::new("httpdocs"), "/0,10").await;

    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad image size"));
}

#[tokio::test]
async fn test_image_size_over_limit_rejected() {
    let decision = resolve(Path::new("httpdocs"), "/2049,5").await;

    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad image size"));
}

#[tokio::test]
async fn test_malformed_dimensions_fall_through_to_file() {
    // Not an image target at all; with no such file it is a plain 404.
    let dir = tempfile::tempdir().unwrap();
    let decision = resolve(dir.path(), "/12x,5").await;

    assert_eq!(decision, rejected(StatusCode::NotFound, "not found"));
}

#[tokio::test]
async fn test_traversal_rejected_without_touching_filesystem() {
    // The root does not even exist; rejection must come from the path
    // check alone.
    let root = Path::new("/nonexistent-root-for-sundial-tests");

    let decision = resolve(root, "/../etc/passwd").await;
    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad path"));

    let decision = resolve(root, "/a/..b/c").await;
    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad path"));
}

#[tokio::test]
async fn test_relative_path_rejected() {
    let decision = resolve(Path::new("httpdocs"), "index.html").await;

    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad path"));
}

#[tokio::test]
async fn test_empty_path_rejected() {
    let decision = resolve(Path::new("httpdocs"), "").await;

    assert_eq!(decision, rejected(StatusCode::BadRequest, "bad path"));
}

#[tokio::test]
async fn test_root_rewrites_to_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

    let decision = resolve(dir.path(), "/").await;

    assert_eq!(
        decision,
        RouteDecision::File {
            path: dir.path().join("index.html")
        }
    );
}

#[tokio::test]
async fn test_existing_file_resolves_under_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/site.css"), "body {}").unwrap();

    let decision = resolve(dir.path(), "/css/site.css").await;

    assert_eq!(
        decision,
        RouteDecision::File {
            path: dir.path().join("css/site.css")
        }
    );
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let decision = resolve(dir.path(), "/missing.html").await;

    assert_eq!(decision, rejected(StatusCode::NotFound, "not found"));
}

#[tokio::test]
async fn test_directory_target_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();

    let decision = resolve(dir.path(), "/assets").await;

    assert_eq!(decision, rejected(StatusCode::NotFound, "not found"));
}
