//! Property tests for base-name selection.

use proptest::prelude::*;

use asset_sha::{base_name, AssetPatterns, AssetSelector, BuildAsset};

const PATTERN_POOL: &[&str] = &[
    "*.css",
    "*.js",
    "*.{png,map}",
    "a*",
    "?.html",
    "[m-z]*",
    "+(app|main).js",
    "@(a|b)*.css",
    "!(*.min).css",
    "?(x)*.map",
    "*(a|b).png",
    "!*.min.js",
    ".*",
    ".*.css",
];

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("\\.?[A-Za-z0-9_-]{1,12}").unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop_oneof![
            prop::sample::select(vec!["app", "main", "a", "b", "ab", "x", "vendor"])
                .prop_map(String::from),
            proptest::string::string_regex("[a-z0-9_-]{1,10}").unwrap(),
        ],
        any::<bool>(),
        prop::sample::select(vec!["css", "js", "png", "map", "html"]),
    )
        .prop_map(|(dot, stem, min, ext)| {
            format!(
                "{}{}{}.{}",
                if dot { "." } else { "" },
                stem,
                if min { ".min" } else { "" },
                ext
            )
        })
}

fn pattern() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PATTERN_POOL)
}

fn patterns() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(pattern(), 0..4)
}

/// Pattern text after a whole-pattern `!`
fn body(pattern: &str) -> &str {
    match pattern.strip_prefix('!') {
        Some(rest) if !rest.starts_with('(') => rest,
        _ => pattern,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Directory prefixes never change whether an asset is selected.
    #[test]
    fn property_directory_prefix_is_irrelevant(
        dirs_a in prop::collection::vec(segment(), 0..4),
        dirs_b in prop::collection::vec(segment(), 0..4),
        name in file_name(),
        pats in patterns(),
    ) {
        let patterns = AssetPatterns::new(&pats).unwrap();
        let mut a = dirs_a.clone();
        a.push(name.clone());
        let mut b = dirs_b.clone();
        b.push(name.clone());

        prop_assert_eq!(patterns.matches(&a.join("/")), patterns.matches(&b.join("/")));
        prop_assert_eq!(patterns.matches(&a.join("/")), patterns.matches(&name));
    }

    /// PROPERTY: base_name is always the last segment.
    #[test]
    fn property_base_name_is_last_segment(
        dirs in prop::collection::vec(segment(), 0..4),
        name in file_name(),
    ) {
        let mut parts = dirs;
        parts.push(name.clone());
        let joined = parts.join("/");
        prop_assert_eq!(base_name(&joined), name.as_str());
    }

    /// PROPERTY: Selection is an order-preserving subsequence of the input.
    #[test]
    fn property_selection_preserves_order(
        names in prop::collection::vec(file_name(), 0..12),
        pats in patterns(),
    ) {
        let assets: Vec<BuildAsset> = names
            .iter()
            .enumerate()
            .map(|(i, n)| BuildAsset::text(format!("{}/{}", i, n), ""))
            .collect();
        let patterns = AssetPatterns::new(&pats).unwrap();
        let selector = AssetSelector::new(patterns.clone());

        let selected: Vec<&str> = selector.select(&assets).iter().map(|a| a.name()).collect();
        let expected: Vec<&str> = assets
            .iter()
            .map(|a| a.name())
            .filter(|n| patterns.matches(n))
            .collect();

        prop_assert_eq!(selected, expected);
    }

    /// PROPERTY: A name starting with `.` is only selected by a pattern
    /// that itself starts with `.`.
    #[test]
    fn property_dot_names_need_dot_patterns(
        name in file_name(),
        pat in pattern(),
    ) {
        let patterns = AssetPatterns::new([pat]).unwrap();
        if name.starts_with('.') && patterns.matches(&name) {
            prop_assert!(body(pat).starts_with('.'), "{} selected {}", pat, name);
        }
    }

    /// PROPERTY: `!pattern` selects exactly the visible names `pattern` does not.
    #[test]
    fn property_negation_complements_visible_names(
        name in file_name(),
        pat in pattern(),
    ) {
        prop_assume!(!name.starts_with('.'));
        prop_assume!(body(pat) == pat);

        let plain = AssetPatterns::new([pat]).unwrap();
        let negated = AssetPatterns::new([format!("!{}", pat)]).unwrap();

        prop_assert_ne!(plain.matches(&name), negated.matches(&name));
    }

    /// PROPERTY: `@(a|b)` and `{a,b}` select the same names.
    #[test]
    fn property_exactly_one_group_equals_braces(
        name in file_name(),
    ) {
        let group = AssetPatterns::new(["@(app|main)*.@(css|js)"]).unwrap();
        let braces = AssetPatterns::new(["{app,main}*.{css,js}"]).unwrap();

        prop_assert_eq!(group.matches(&name), braces.matches(&name));
    }

    /// PROPERTY: `!(x)` never lets through a name the group itself matches.
    #[test]
    fn property_negated_group_excludes_its_alternatives(
        name in file_name(),
    ) {
        prop_assume!(!name.starts_with('.'));

        let unminified = AssetPatterns::new(["!(*.min).css"]).unwrap();
        let expected = name.ends_with(".css") && !name.ends_with(".min.css");

        prop_assert_eq!(unminified.matches(&name), expected);
    }
}
