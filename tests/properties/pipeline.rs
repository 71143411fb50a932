//! Property tests for whole passes.

use proptest::prelude::*;

use asset_sha::{extension_key, BuildAsset, Config, ContentDigest, HashingAlgorithm, ManifestPipeline};

fn assets() -> impl Strategy<Value = Vec<BuildAsset>> {
    prop::collection::vec(
        (
            proptest::string::string_regex("[a-z]{1,6}").unwrap(),
            prop::sample::select(vec!["css", "js", "svg"]),
            "(?s).{0,64}",
        ),
        0..10,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (stem, ext, content))| {
                BuildAsset::text(format!("dir{}/{}.{}", i, stem, ext), content)
            })
            .collect()
    })
}

fn config(compact: bool) -> Config {
    Config {
        asset_patterns: vec!["*.css".to_string(), "*.js".to_string()],
        compact,
        ..Config::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Two passes over the same input emit byte-identical JSON.
    #[test]
    fn property_pass_is_idempotent(assets in assets(), compact in any::<bool>()) {
        let pipeline = ManifestPipeline::new(&config(compact)).unwrap();

        let first = pipeline.emit(&assets).unwrap();
        let second = pipeline.emit(&assets).unwrap();

        prop_assert_eq!(first.content(), second.content());
    }

    /// PROPERTY: Compact sequences list digests in encounter order.
    #[test]
    fn property_compact_preserves_encounter_order(assets in assets()) {
        let pipeline = ManifestPipeline::new(&config(true)).unwrap();
        let manifest = pipeline.run_pass(&assets).unwrap();

        for ext in [".css", ".js"] {
            let expected: Vec<ContentDigest> = assets
                .iter()
                .filter(|a| extension_key(a.name()) == ext)
                .map(|a| match a.content() {
                    asset_sha::AssetContent::Text(t) => ContentDigest::compute(HashingAlgorithm::Sha256, t),
                    asset_sha::AssetContent::Binary(_) => unreachable!(),
                })
                .collect();
            let actual = manifest.hashes().by_extension(ext).map(<[_]>::to_vec);

            if expected.is_empty() {
                prop_assert!(actual.is_none(), "extension {} must be absent", ext);
            } else {
                prop_assert_eq!(actual, Some(expected));
            }
        }
        prop_assert!(manifest.hashes().by_extension(".svg").is_none());
    }

    /// PROPERTY: Flat manifests hold exactly one entry per selected asset.
    #[test]
    fn property_flat_has_one_entry_per_selected_asset(assets in assets()) {
        let pipeline = ManifestPipeline::new(&config(false)).unwrap();
        let manifest = pipeline.run_pass(&assets).unwrap();

        let selected = assets
            .iter()
            .filter(|a| !a.name().ends_with(".svg"))
            .count();
        prop_assert_eq!(manifest.hashes().len(), selected);
    }
}
