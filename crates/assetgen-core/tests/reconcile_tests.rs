//! Scenario and property tests for manifest reconciliation

use assetgen_core::{
    AssetEntry, FontAsset, FontFamilyBlock, ManifestFragment, ResourceIndex, ResourceLayout,
    reconcile,
};
use assetgen_fs::DirectoryScan;
use proptest::prelude::*;

fn index(paths: &[&str]) -> ResourceIndex {
    ResourceIndex::from_scan(&DirectoryScan::from_listing("resources", paths))
}

fn asset_paths(fragment: &ManifestFragment) -> Vec<&str> {
    fragment.asset_paths()
}

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resource_root_absent() {
        let fresh = ResourceIndex::empty("resources");

        let result = reconcile(&ManifestFragment::default(), &fresh, &ResourceLayout::default());

        assert!(result.merged.assets.is_empty());
        assert!(result.merged.fonts.is_empty());
        assert!(result.counts.is_empty());
    }

    #[test]
    fn single_image_declares_its_directory() {
        let result = reconcile(
            &ManifestFragment::default(),
            &index(&["images/logo.png"]),
            &ResourceLayout::default(),
        );

        assert_eq!(asset_paths(&result.merged), vec!["resources/images/"]);
        assert_eq!(result.counts.added, 1);
        assert_eq!(result.counts.removed, 0);
    }

    #[test]
    fn two_roboto_files_form_one_family() {
        let result = reconcile(
            &ManifestFragment::default(),
            &index(&["fonts/Roboto-Regular.ttf", "fonts/Roboto-Bold.ttf"]),
            &ResourceLayout::default(),
        );

        assert_eq!(result.merged.fonts.len(), 1);
        let roboto = &result.merged.fonts[0];
        assert_eq!(roboto.family, "Roboto");
        assert_eq!(
            roboto.asset_paths(),
            vec!["resources/fonts/Roboto-Bold.ttf", "resources/fonts/Roboto-Regular.ttf"]
        );
        assert_eq!(result.counts.fonts_added, 2);
    }

    #[test]
    fn deleted_only_asset_drops_family() {
        let existing = ManifestFragment {
            assets: vec![AssetEntry::Path("resources/fonts/".into())],
            fonts: vec![FontFamilyBlock::new(
                "Lato",
                vec![FontAsset::new("resources/fonts/Lato-Regular.ttf")],
            )],
        };

        let result = reconcile(&existing, &index(&["images/a.png"]), &ResourceLayout::default());

        assert!(result.merged.fonts.is_empty());
        assert_eq!(result.counts.fonts_removed, 1);
        assert_eq!(asset_paths(&result.merged), vec!["resources/images/"]);
        assert_eq!(result.counts.removed, 1);
    }

    #[test]
    fn directory_with_new_files_is_not_readded() {
        let existing = ManifestFragment {
            assets: vec![AssetEntry::Path("resources/data/".into())],
            fonts: Vec::new(),
        };

        let result = reconcile(
            &existing,
            &index(&["data/seed.json", "data/more/x.json"]),
            &ResourceLayout::default(),
        );

        assert_eq!(
            asset_paths(&result.merged),
            vec!["resources/data/", "resources/data/more/"]
        );
        assert_eq!(result.counts.added, 1);
    }

    #[test]
    fn empty_directories_reported_but_declared() {
        let result = reconcile(
            &ManifestFragment::default(),
            &index(&["placeholder/", "images/a.png"]),
            &ResourceLayout::default(),
        );

        assert_eq!(
            asset_paths(&result.merged),
            vec!["resources/images/", "resources/placeholder/"]
        );
        assert_eq!(result.empty_directories, vec!["resources/placeholder/"]);
    }

    #[test]
    fn font_weights_survive_reconciliation() {
        let doc = assetgen_core::PubspecDocument::parse(
            "flutter:\n  fonts:\n  - family: Roboto\n    fonts:\n    - asset: resources/fonts/Roboto-Bold.ttf\n      weight: 700\n",
            "pubspec.yaml",
        )
        .unwrap();
        let existing = doc.fragment().unwrap();

        let result = reconcile(
            &existing,
            &index(&["fonts/Roboto-Bold.ttf", "fonts/Roboto-Regular.ttf"]),
            &ResourceLayout::default(),
        );

        let roboto = &result.merged.fonts[0];
        assert_eq!(
            roboto.fonts[0].get("weight").and_then(serde_yaml::Value::as_u64),
            Some(700)
        );
        assert_eq!(roboto.fonts[1].get("weight"), None);
        assert_eq!(result.counts.fonts_added, 1);
    }

    #[test]
    fn declared_font_of_any_extension_is_kept() {
        let existing = ManifestFragment {
            assets: vec![AssetEntry::Path("resources/fonts/".into())],
            fonts: vec![FontFamilyBlock::new(
                "Roboto",
                vec![FontAsset::new("resources/fonts/Roboto-Regular.woff2")],
            )],
        };

        let result = reconcile(
            &existing,
            &index(&["fonts/Roboto-Regular.woff2"]),
            &ResourceLayout::default(),
        );

        assert_eq!(result.merged, existing);
        assert!(result.counts.is_empty());
    }

    #[test]
    fn extension_filter_is_opt_in() {
        let fresh = index(&["fonts/Lato-Bold.ttf", "fonts/OFL.txt"]);

        let unfiltered = reconcile(&ManifestFragment::default(), &fresh, &ResourceLayout::default());
        let filtered = reconcile(
            &ManifestFragment::default(),
            &fresh,
            &ResourceLayout::default().with_font_extensions(["ttf"]),
        );

        let names = |r: &assetgen_core::Reconciliation| {
            r.merged.fonts.iter().map(|b| b.family.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&unfiltered), vec!["Lato", "OFL"]);
        assert_eq!(names(&filtered), vec!["Lato"]);
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing() -> impl Strategy<Value = Vec<String>> {
        let group = prop::sample::select(vec!["images", "audio", "fonts", "data"]);
        let nested = prop::option::of(prop::sample::select(vec!["a", "b"]));
        let stem = prop::sample::select(vec!["x", "Roboto-Bold", "Roboto_Thin", "Lato", "lato-it"]);
        let ext = prop::sample::select(vec!["png", "ttf", "otf", "json"]);

        prop::collection::vec((group, nested, stem, ext), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(group, nested, stem, ext)| match nested {
                    Some(dir) => format!("{group}/{dir}/{stem}.{ext}"),
                    None => format!("{group}/{stem}.{ext}"),
                })
                .collect()
        })
    }

    fn existing_fragment() -> impl Strategy<Value = ManifestFragment> {
        let asset = prop::sample::select(vec![
            "resources/images/",
            "resources/audio",
            "./resources/data/a/",
            "resources/gone/",
            "packages/shared/",
            "resources/images/",
        ]);
        let font = prop::sample::select(vec![
            "resources/fonts/Roboto-Bold.ttf",
            "resources/fonts/Lato.otf",
            "resources/fonts/Missing-Regular.ttf",
            "packages/icons/Icons.ttf",
        ]);
        let family = prop::sample::select(vec!["Roboto", "Lato", "Missing", "Icons"]);

        (
            prop::collection::vec(asset, 0..6),
            prop::collection::vec((family, prop::collection::vec(font, 0..4)), 0..4),
        )
            .prop_map(|(assets, blocks)| ManifestFragment {
                assets: assets
                    .into_iter()
                    .map(|a| AssetEntry::Path(a.to_string()))
                    .collect(),
                fonts: blocks
                    .into_iter()
                    .map(|(family, fonts)| {
                        FontFamilyBlock::new(family, fonts.into_iter().map(FontAsset::new).collect())
                    })
                    .collect(),
            })
    }

    proptest! {
        #[test]
        fn reconcile_is_idempotent(paths in listing(), existing in existing_fragment()) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let fresh = index(&refs);
            let layout = ResourceLayout::default();

            let first = reconcile(&existing, &fresh, &layout);
            let second = reconcile(&first.merged, &fresh, &layout);

            prop_assert_eq!(&second.merged, &first.merged);
            prop_assert!(second.counts.is_empty(), "second run changed {:?}", second.counts);
        }

        #[test]
        fn no_family_block_is_empty(paths in listing(), existing in existing_fragment()) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let result = reconcile(&existing, &index(&refs), &ResourceLayout::default());

            for block in &result.merged.fonts {
                prop_assert!(!block.fonts.is_empty(), "empty block for {}", block.family);
            }
        }

        #[test]
        fn kept_declarations_keep_relative_order(paths in listing(), existing in existing_fragment()) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let result = reconcile(&existing, &index(&refs), &ResourceLayout::default());

            let original: Vec<&str> = existing.asset_paths();
            let mut remaining = original.iter();
            for merged in result.merged.asset_paths() {
                if original.contains(&merged) {
                    prop_assert!(remaining.any(|o| *o == merged), "order changed at {}", merged);
                }
            }
        }

        #[test]
        fn every_fresh_directory_is_declared(paths in listing()) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let fresh = index(&refs);
            let result = reconcile(&ManifestFragment::default(), &fresh, &ResourceLayout::default());

            let declared = result.merged.asset_paths();
            for dir in fresh.directories() {
                prop_assert!(declared.contains(&dir.path.as_str()));
            }
            prop_assert_eq!(result.counts.added, fresh.directories().len());
        }
    }
}
