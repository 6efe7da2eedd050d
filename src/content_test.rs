use super::*;

#[test]
fn features_have_distinct_nonempty_titles() {
    for (i, a) in FEATURES.iter().enumerate() {
        assert!(!a.title.is_empty());
        assert!(!a.description.is_empty());
        assert!(!a.icon.is_empty());
        for b in &FEATURES[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn nav_links_are_same_page_anchors() {
    for (href, label) in NAV_LINKS {
        assert!(href.starts_with('#'));
        assert!(!label.is_empty());
    }
}
