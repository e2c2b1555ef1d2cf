/// Content-type for a path, derived from its file extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type(path: impl AsRef<std::path::Path>) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_extensions() {
        assert_eq!(content_type("/index.html"), "text/html");
        assert_eq!(content_type("/logo.bmp"), "image/bmp");
        assert_eq!(content_type("/style.css"), "text/css");
    }

    #[test]
    fn unknown_extension_defaults_to_octet_stream() {
        assert_eq!(content_type("/data.blob"), "application/octet-stream");
        assert_eq!(content_type("/noextension"), "application/octet-stream");
    }
}
