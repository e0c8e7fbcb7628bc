//! Property tests for building the directory tree from a listing.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use proptest::prelude::*;

use arctree::{build_index, ArchiveEntry, Listing, NodeIndex, PathSeparator};

const SEP: PathSeparator = PathSeparator::SLASH;

/// File paths one to four levels deep over a small alphabet, so that
/// directories are shared between files
fn file_paths() -> impl Strategy<Value = BTreeSet<String>> {
    let dir = prop::sample::select(vec!["a", "b", "docs", "img"]);
    let file = prop::sample::select(vec!["x.txt", "y.png", "readme.md"]);
    let path = (prop::collection::vec(dir, 0..4), file).prop_map(|(dirs, file)| {
        let mut segments: Vec<&str> = dirs;
        segments.push(file);
        segments.join("/")
    });
    prop::collection::btree_set(path, 1..24)
}

/// Every proper prefix of every file path
fn implied_dirs(files: &BTreeSet<String>) -> BTreeSet<String> {
    let mut dirs = BTreeSet::new();
    for file in files {
        let mut prefix = String::new();
        let segments: Vec<&str> = file.split('/').collect();
        for segment in &segments[..segments.len() - 1] {
            prefix = SEP.join(&prefix, segment);
            dirs.insert(prefix.clone());
        }
    }
    dirs
}

fn complete_listing(files: &BTreeSet<String>) -> Listing {
    Listing::new(
        implied_dirs(files).into_iter().collect(),
        files.iter().cloned().collect(),
    )
}

/// A complete listing with directories and files each in random order, so
/// children may come before their parents
fn shuffled_listing() -> impl Strategy<Value = (BTreeSet<String>, Listing)> {
    file_paths()
        .prop_flat_map(|files| {
            let dirs: Vec<String> = implied_dirs(&files).into_iter().collect();
            let list: Vec<String> = files.iter().cloned().collect();
            (Just(files), Just(dirs).prop_shuffle(), Just(list).prop_shuffle())
        })
        .prop_map(|(files, dirs, list)| (files, Listing::new(dirs, list)))
}

/// Surface and children of every directory, ignoring order
fn shape(index: &NodeIndex) -> (BTreeSet<String>, BTreeMap<String, BTreeSet<String>>) {
    let surface = index.surface().iter().cloned().collect();
    let nodes = index
        .nodes()
        .map(|node| (node.path.clone(), node.children.iter().cloned().collect()))
        .collect();
    (surface, nodes)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every entry is reachable from the surface exactly once.
    #[test]
    fn property_every_entry_reachable_once(files in file_paths()) {
        let listing = complete_listing(&files);
        let index = build_index(&listing, SEP).unwrap();

        let flat = index.flatten();
        let unique: HashSet<&ArchiveEntry> = flat.iter().collect();
        prop_assert_eq!(unique.len(), flat.len(), "an entry was reached twice");
        prop_assert_eq!(flat.len(), listing.len());
    }

    /// PROPERTY: no name is a child of two directories.
    #[test]
    fn property_no_entry_has_two_parents(files in file_paths()) {
        let index = build_index(&complete_listing(&files), SEP).unwrap();

        let mut seen = HashSet::new();
        for node in index.nodes() {
            for child in &node.children {
                let full = SEP.join(&node.path, child);
                prop_assert!(seen.insert(full.clone()), "'{}' listed twice", full);
            }
        }
        for name in index.surface() {
            prop_assert!(seen.insert(name.clone()), "'{}' listed twice", name);
        }
    }

    /// PROPERTY: flattening the tree reproduces the listing.
    #[test]
    fn property_flatten_round_trips(files in file_paths()) {
        let listing = complete_listing(&files);
        let index = build_index(&listing, SEP).unwrap();

        let expected: HashSet<ArchiveEntry> = listing.entries().collect();
        let actual: HashSet<ArchiveEntry> = index.flatten().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: building twice from the same listing yields the same tree.
    #[test]
    fn property_build_is_idempotent(files in file_paths()) {
        let listing = complete_listing(&files);
        let first = build_index(&listing, SEP).unwrap();
        let second = build_index(&listing, SEP).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a listing that omits directories still yields every file,
    /// with the missing ancestors materialized.
    #[test]
    fn property_missing_directories_are_materialized(
        files in file_paths(),
        keep in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let dirs: Vec<String> = implied_dirs(&files)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| keep.get(*i).copied().unwrap_or(false))
            .map(|(_, d)| d)
            .collect();
        let listing = Listing::new(dirs, files.iter().cloned().collect());
        let index = build_index(&listing, SEP).unwrap();

        let actual: HashSet<ArchiveEntry> = index.flatten().into_iter().collect();
        let expected: HashSet<ArchiveEntry> = complete_listing(&files).entries().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: the order of the listing does not change the tree.
    #[test]
    fn property_listing_order_does_not_matter((files, shuffled) in shuffled_listing()) {
        let sorted = build_index(&complete_listing(&files), SEP).unwrap();
        let index = build_index(&shuffled, SEP).unwrap();

        prop_assert_eq!(shape(&index), shape(&sorted));
        prop_assert_eq!(index.flatten().len(), shuffled.len());
    }
}
