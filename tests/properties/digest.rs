//! Property tests for digest computation.

use proptest::prelude::*;

use asset_sha::{
    ContentDigest, DigestAggregator, HashingAlgorithm, ManifestHashes, ManifestShape,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

fn algorithm() -> impl Strategy<Value = HashingAlgorithm> {
    prop::sample::select(HashingAlgorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Digests are deterministic.
    #[test]
    fn property_digest_is_deterministic(alg in algorithm(), content in "(?s).{0,256}") {
        let a = ContentDigest::compute(alg, &content);
        let b = ContentDigest::compute(alg, &content);
        prop_assert_eq!(a, b);
    }

    /// PROPERTY: Digests are padded base64 of exactly the algorithm's output length.
    #[test]
    fn property_digest_decodes_to_output_len(alg in algorithm(), content in "(?s).{0,256}") {
        let digest = ContentDigest::compute(alg, &content);
        let raw = BASE64.decode(digest.as_str()).expect("digest must be standard base64");
        prop_assert_eq!(raw.len(), alg.output_len());
        prop_assert_eq!(digest.as_str().len() % 4, 0);
    }

    /// PROPERTY: The manifest shape never changes a digest, only where it is placed.
    #[test]
    fn property_shape_does_not_affect_digest(
        alg in algorithm(),
        stem in "[a-z]{1,8}",
        ext in "[a-z]{1,4}",
        content in "(?s).{0,128}",
    ) {
        let name = format!("{}.{}", stem, ext);
        let key = format!(".{}", ext);

        let mut flat = DigestAggregator::new(alg, ManifestShape::Flat);
        let mut compact = DigestAggregator::new(alg, ManifestShape::Compact);
        flat.add(&name, content.as_str()).unwrap();
        compact.add(&name, content.as_str()).unwrap();

        let flat = flat.into_manifest();
        let compact = compact.into_manifest();
        let from_flat = match flat.hashes() {
            ManifestHashes::Flat(map) => map[&name].clone(),
            ManifestHashes::Compact(_) => unreachable!(),
        };
        let from_compact = compact.hashes().by_extension(&key).unwrap()[0].clone();

        prop_assert_eq!(from_flat, from_compact);
    }
}
