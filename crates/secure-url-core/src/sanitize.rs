//! Leading-slash sanitization for candidate paths.

use std::borrow::Cow;

/// Collapses any leading run of `/` and `\` into a single `/`.
///
/// Scheme-relative inputs such as `//evil.example/x` or `/\/\evil.example/x`
/// become the absolute path `/evil.example/x`, so the resolver never treats
/// them as carrying an authority. Input without a leading slash or backslash
/// is returned untouched.
pub fn sanitize_path(path: &str) -> Cow<'_, str> {
    let rest = path.trim_start_matches(|c| c == '/' || c == '\\');
    if rest.len() == path.len() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_leading_slashes() {
        assert_eq!(sanitize_path("//\\//\\foo.bar/hello"), "/foo.bar/hello");
        assert_eq!(sanitize_path("//foo.bar/hello"), "/foo.bar/hello");
        assert_eq!(sanitize_path("\\foo"), "/foo");
    }

    #[test]
    fn single_slash_is_kept() {
        assert_eq!(sanitize_path("/hello/world"), "/hello/world");
        assert_eq!(sanitize_path("/"), "/");
    }

    #[test]
    fn only_slashes_becomes_root() {
        assert_eq!(sanitize_path("///"), "/");
        assert_eq!(sanitize_path("\\\\"), "/");
    }

    #[test]
    fn no_leading_slash_is_borrowed_unchanged() {
        for input in ["hello/world", "https://foo.bar//x", "", "a\\b"] {
            let out = sanitize_path(input);
            assert!(matches!(out, Cow::Borrowed(_)), "{input} was rewritten");
            assert_eq!(out, input);
        }
    }

    #[test]
    fn inner_slashes_untouched() {
        assert_eq!(sanitize_path("//a//b\\\\c"), "/a//b\\\\c");
    }
}
