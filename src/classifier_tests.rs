// File: classifier_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::boring::BoringHeaders;
    use crate::classifier::{trunc, HeaderClassifier};
    use crate::headermap::ResponseHeaders;
    use rstest::*;

    fn classifier() -> HeaderClassifier {
        HeaderClassifier::new(BoringHeaders::from_lines(
            "date\ncontent-length\ncontent-type\n",
        ))
    }

    fn headers(pairs: &[(&str, &str)]) -> ResponseHeaders {
        let mut map = ResponseHeaders::new();
        for (name, value) in pairs {
            map.insert(*name, *value);
        }
        map
    }

    #[test]
    fn test_server_header_is_interesting() {
        let result = classifier().classify(&headers(&[("Server", "nginx/1.18.0")]));
        assert_eq!(result.interesting, "Server: nginx/1.18.0\n");
    }

    #[test]
    fn test_boring_filter_is_case_insensitive() {
        let result = classifier().classify(&headers(&[
            ("Date", "Mon, 01 Jan 2024 00:00:00 GMT"),
            ("Content-Type", "text/html"),
            ("X-Powered-By", "PHP/8.1"),
        ]));
        assert_eq!(result.interesting, "X-Powered-By: PHP/8.1\n");
    }

    #[test]
    fn test_interesting_keeps_response_order() {
        let result = classifier().classify(&headers(&[
            ("X-Backend", "web-3"),
            ("Server", "nginx"),
        ]));
        assert_eq!(result.interesting, "X-Backend: web-3\nServer: nginx\n");
    }

    #[test]
    fn test_trunc_boundaries() {
        let exactly_80 = "a".repeat(80);
        assert_eq!(trunc(&exactly_80), exactly_80);

        let over = "b".repeat(81);
        let expected = format!("{}[...]", "b".repeat(75));
        assert_eq!(trunc(&over), expected);
    }

    #[test]
    fn test_long_value_is_truncated_in_blob() {
        let value = "x".repeat(100);
        let result = classifier().classify(&headers(&[("X-Long", value.as_str())]));
        assert_eq!(
            result.interesting,
            format!("X-Long: {}[...]\n", "x".repeat(75))
        );
    }

    #[rstest]
    #[case("DENY")]
    #[case("SAMEORIGIN")]
    #[case("sameorigin")]
    #[case("allow-from https://a.example, deny")]
    fn test_frame_options_accepted(#[case] value: &str) {
        let result = classifier().classify(&headers(&[("x-frame-options", value)]));
        assert!(!result.bad_headers.contains("x-frame-options"));
        assert!(!result.missing_security.contains("x-frame-options"));
    }

    #[test]
    fn test_frame_options_weak_value_is_bad() {
        let result = classifier().classify(&headers(&[("x-frame-options", "ALLOW-FROM https://a.example")]));
        assert_eq!(
            result.bad_headers,
            "x-frame-options: ALLOW-FROM https://a.example\n"
        );
    }

    #[test]
    fn test_frame_options_absent_is_missing() {
        let result = classifier().classify(&headers(&[]));
        assert!(result.missing_security.contains("x-frame-options\n"));
    }

    #[rstest]
    #[case("nosniff")]
    #[case("NOSNIFF")]
    fn test_content_type_options_accepted(#[case] value: &str) {
        let result = classifier().classify(&headers(&[("x-content-type-options", value)]));
        assert!(!result.missing_security.contains("x-content-type-options"));
    }

    #[test]
    fn test_content_type_options_without_nosniff_counts_as_missing() {
        let result = classifier().classify(&headers(&[("x-content-type-options", "none")]));
        assert!(result.missing_security.contains("x-content-type-options\n"));
        assert!(!result.bad_headers.contains("x-content-type-options"));
    }

    #[test]
    fn test_xss_protection_silent_when_absent() {
        let result = classifier().classify(&headers(&[]));
        assert!(!result.missing_security.contains("x-xss-protection"));
        assert!(!result.bad_headers.contains("x-xss-protection"));
    }

    #[test]
    fn test_xss_protection_disabled_is_bad() {
        let result = classifier().classify(&headers(&[("x-xss-protection", "0")]));
        assert_eq!(result.bad_headers, "x-xss-protection: 0\n");
    }

    #[test]
    fn test_xss_protection_block_mode_passes() {
        let result = classifier().classify(&headers(&[("x-xss-protection", "1; mode=block")]));
        assert!(!result.bad_headers.contains("x-xss-protection"));
    }

    #[test]
    fn test_hsts_absent_is_missing() {
        let result = classifier().classify(&headers(&[]));
        assert!(result
            .missing_security
            .contains("strict-transport-security\n"));
    }

    #[rstest]
    #[case("max-age=600")]
    #[case("max-age=2591999; includeSubDomains")]
    fn test_hsts_short_max_age_is_bad(#[case] value: &str) {
        let result = classifier().classify(&headers(&[("strict-transport-security", value)]));
        assert_eq!(
            result.bad_headers,
            format!("strict-transport-security: {}\n", value)
        );
    }

    #[rstest]
    #[case("max-age=2592000")]
    #[case("max-age=31536000; includeSubDomains; preload")]
    #[case("MAX-AGE=63072000")]
    fn test_hsts_long_max_age_passes(#[case] value: &str) {
        let result = classifier().classify(&headers(&[("strict-transport-security", value)]));
        assert!(!result.bad_headers.contains("strict-transport-security"));
        assert!(!result
            .missing_security
            .contains("strict-transport-security"));
    }

    #[test]
    fn test_hsts_unparsable_counts_as_missing() {
        let result =
            classifier().classify(&headers(&[("strict-transport-security", "includeSubDomains")]));
        assert!(result
            .missing_security
            .contains("strict-transport-security\n"));
        assert!(!result.bad_headers.contains("strict-transport-security"));
    }

    #[test]
    fn test_cors_wildcard_is_bad() {
        let result = classifier().classify(&headers(&[("access-control-allow-origin", "*")]));
        assert_eq!(result.bad_headers, "access-control-allow-origin: *\n");
    }

    #[test]
    fn test_cors_specific_origin_passes() {
        let result = classifier().classify(&headers(&[(
            "access-control-allow-origin",
            "https://app.example.com",
        )]));
        assert!(!result.bad_headers.contains("access-control-allow-origin"));
    }

    #[test]
    fn test_cors_silent_when_absent() {
        let result = classifier().classify(&headers(&[]));
        assert!(!result
            .missing_security
            .contains("access-control-allow-origin"));
    }

    #[rstest]
    #[case("content-security-policy")]
    #[case("x-content-security-policy")]
    #[case("x-webkit-csp")]
    fn test_csp_satisfied_by_any_variant(#[case] name: &str) {
        let result = classifier().classify(&headers(&[(name, "default-src 'self'")]));
        assert!(!result.missing_security.contains("content-security-policy"));
    }

    #[test]
    fn test_empty_header_map_yields_full_missing_list() {
        let result = classifier().classify(&headers(&[]));
        assert_eq!(
            result.missing_security,
            "x-frame-options\nx-content-type-options\nstrict-transport-security\ncontent-security-policy\n"
        );
        assert!(result.interesting.is_empty());
        assert!(result.bad_headers.is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_clean_response_has_no_findings() {
        let boring = BoringHeaders::from_lines(
            "server\nx-frame-options\nx-content-type-options\nstrict-transport-security\ncontent-security-policy\n",
        );
        let clean = HeaderClassifier::new(boring).classify(&headers(&[
            ("Server", "nginx"),
            ("X-Frame-Options", "DENY"),
            ("X-Content-Type-Options", "nosniff"),
            ("Strict-Transport-Security", "max-age=63072000"),
            ("Content-Security-Policy", "default-src 'self'"),
        ]));
        assert!(clean.is_empty());
    }

    #[test]
    fn test_multiple_bad_findings_concatenate() {
        let result = classifier().classify(&headers(&[
            ("x-frame-options", "allowall"),
            ("access-control-allow-origin", "*"),
        ]));
        assert_eq!(
            result.bad_headers,
            "x-frame-options: allowall\naccess-control-allow-origin: *\n"
        );
    }

    #[test]
    fn test_security_headers_found_by_any_casing() {
        let result = classifier().classify(&headers(&[
            ("X-Frame-Options", "DENY"),
            ("X-Content-Type-Options", "nosniff"),
            ("Strict-Transport-Security", "max-age=63072000"),
            ("Content-Security-Policy", "default-src 'none'"),
        ]));
        assert!(result.missing_security.is_empty());
        assert!(result.bad_headers.is_empty());
    }
}
