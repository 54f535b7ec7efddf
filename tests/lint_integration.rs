//! Integration tests for the --lint checks

use justified_layout::layout::lint::{self, LintCategory};
use justified_layout::{Gallery, LayoutConfig, LayoutEngine, LayoutItem};
use pretty_assertions::assert_eq;

fn categories(warnings: &[lint::LintWarning]) -> Vec<LintCategory> {
    warnings.iter().map(|w| w.category).collect()
}

#[test]
fn test_rigid_fixture_reports_bounds_and_unresolved() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rigid.toml");
    let gallery = Gallery::from_file(&path).expect("Should load");
    let width = gallery.width.expect("fixture names a width");
    let arrangement = gallery.engine().arrange(width);

    // spans are still produced
    assert_eq!(arrangement.spans(), vec![3]);

    let warnings = lint::check(&arrangement, &gallery.layout, width);
    assert_eq!(
        categories(&warnings),
        vec![LintCategory::Bounds, LintCategory::Unresolved]
    );
    assert_eq!(
        warnings[0].to_string(),
        "[bounds] row 1: item 0 (landscape) forced to 3, below its minimum of 5"
    );
    assert_eq!(
        warnings[1].to_string(),
        "[unresolved] candidate row 1 matched no fitting strategy"
    );
}

#[test]
fn test_short_tail_reports_stretched_first_row() {
    // the first row keeps a single landscape forced up to 8
    let engine = LayoutEngine::with_defaults(&[LayoutItem::new(16.0, 9.0); 5]);
    let arrangement = engine.arrange(8);
    let warnings = lint::check(&arrangement, engine.config(), 8);
    assert_eq!(categories(&warnings), vec![LintCategory::Bounds]);
    assert!(warnings[0].message.contains("above its maximum of 5"));
}

#[test]
fn test_clean_gallery_has_no_warnings() {
    let items = [
        LayoutItem::new(4.0, 3.0),
        LayoutItem::new(4.0, 3.0),
        LayoutItem::new(3.0, 4.0),
        LayoutItem::new(1.0, 1.0),
        LayoutItem::new(4.0, 3.0),
    ];
    let config = LayoutConfig::default();
    let arrangement = LayoutEngine::new(&items, config.clone()).arrange(8);
    assert!(lint::check(&arrangement, &config, 8).is_empty());
}
