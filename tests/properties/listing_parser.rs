//! Property tests for parsing technical listings.

use proptest::prelude::*;

use arctree::{parse_listing, PathSeparator};

const SEP: PathSeparator = PathSeparator::SLASH;

fn stanza(path: &str, is_dir: bool) -> String {
    let flag = if is_dir { "D" } else { "A" };
    format!("Path = {}\nSize = 0\nAttributes = {}\n\n", path, flag)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary text never makes the parser panic.
    #[test]
    fn property_parser_never_panics(text in "\\PC{0,400}") {
        let _ = parse_listing(&text, SEP);
    }

    /// PROPERTY: every stanza lands in exactly one of the two sequences,
    /// in listing order.
    #[test]
    fn property_stanzas_are_partitioned(
        entries in prop::collection::btree_map("[a-z]{1,6}(/[a-z]{1,6}){0,2}", any::<bool>(), 0..16),
    ) {
        let mut text = String::from("Path = sample.7z\nType = 7z\n\n----------\n");
        for (path, is_dir) in &entries {
            text.push_str(&stanza(path, *is_dir));
        }

        let listing = parse_listing(&text, SEP);
        let dirs: Vec<String> = entries.iter().filter(|(_, d)| **d).map(|(p, _)| p.clone()).collect();
        let files: Vec<String> = entries.iter().filter(|(_, d)| !**d).map(|(p, _)| p.clone()).collect();
        prop_assert_eq!(listing.directories, dirs);
        prop_assert_eq!(listing.files, files);
    }
}
