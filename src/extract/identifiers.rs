use regex::Regex;
use tracing::debug;

/// Scan raw markup for element ids of the form `id="<namespace>.<name>"`
/// and return the matched `<namespace>.<name>` strings in document order.
///
/// Duplicates are preserved and zero matches is a valid outcome (empty
/// vec), not an error. The match is exact on the attribute syntax: added
/// whitespace or different quoting on the source page makes matches
/// silently disappear.
pub fn extract_identifiers(markup: &str, namespace: &str) -> Vec<String> {
    let pattern = format!(r#"id="({}\.\w+)""#, regex::escape(namespace));
    let re = Regex::new(&pattern).expect("escaped identifier pattern should compile");

    let ids: Vec<String> = re
        .captures_iter(markup)
        .map(|cap| cap[1].to_string())
        .collect();
    debug!(namespace, count = ids.len(), "extracted identifiers");
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_identifiers_in_document_order() {
        let markup = r#"
            <dt id="stats.mean">mean</dt>
            <dt id="stats.median">median</dt>
            <dt id="stats.mode">mode</dt>
        "#;
        assert_eq!(
            extract_identifiers(markup, "stats"),
            vec!["stats.mean", "stats.median", "stats.mode"]
        );
    }

    #[test]
    fn keeps_duplicates() {
        let markup = r#"<a id="stats.mean"></a><a id="stats.mean"></a>"#;
        assert_eq!(
            extract_identifiers(markup, "stats"),
            vec!["stats.mean", "stats.mean"]
        );
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        assert!(extract_identifiers("<p>no ids here</p>", "stats").is_empty());
    }

    #[test]
    fn ignores_other_namespaces() {
        let markup = r#"<dt id="stats.mean"></dt><dt id="io.read"></dt>"#;
        assert_eq!(extract_identifiers(markup, "stats"), vec!["stats.mean"]);
    }

    #[test]
    fn changed_quoting_silently_yields_nothing() {
        // Single quotes are outside the fixed pattern. Documented fragility.
        let markup = "<dt id='stats.mean'></dt>";
        assert!(extract_identifiers(markup, "stats").is_empty());
    }

    #[test]
    fn namespace_with_regex_metacharacters_is_escaped() {
        let markup = r#"<dt id="numpy.linalg.solve"></dt>"#;
        assert_eq!(
            extract_identifiers(markup, "numpy.linalg"),
            vec!["numpy.linalg.solve"]
        );
        // The dot must not match an arbitrary character.
        assert!(extract_identifiers(r#"<dt id="numpyXlinalg.solve"></dt>"#, "numpy.linalg")
            .is_empty());
    }
}
