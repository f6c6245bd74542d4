use assetgen_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_clean_relative_invariants(s in "\\PC*") {
        let cleaned = NormalizedPath::new(&s).clean_relative();
        let as_str = cleaned.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.starts_with('/'));
        prop_assert!(!as_str.contains("//"));
        prop_assert!(!as_str.split('/').any(|segment| segment == "."));
    }

    #[test]
    fn test_clean_relative_is_idempotent(s in "\\PC*") {
        let once = NormalizedPath::new(&s).clean_relative();
        let twice = once.clean_relative();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_relative_keeps_directory_form(s in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let dir = NormalizedPath::new(format!("{s}/")).clean_relative();
        prop_assert!(dir.is_dir_form());

        let file = NormalizedPath::new(&s).clean_relative();
        prop_assert!(!file.is_dir_form());
    }
}
