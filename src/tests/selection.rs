use super::Selection;
use crate::locale::Locale;
use crate::taxonomy::Taxonomy;

fn taxonomy() -> Taxonomy {
    Taxonomy::builtin().unwrap()
}

#[test]
fn test_defaults() {
    let taxonomy = taxonomy();
    let selection = Selection::new(&taxonomy);

    assert_eq!(selection.section(), 1);
    assert_eq!(selection.subsection(), 0);
    assert_eq!(selection.locale(), Locale::En);
}

#[test]
fn test_out_of_range_subsection_resets() {
    let taxonomy = taxonomy();
    let mut selection = Selection::new(&taxonomy);

    selection.select_subsection(&taxonomy, 5);

    assert_eq!(selection.subsection(), 0);
}

#[test]
fn test_stale_index_resets_after_section_and_locale_switch() {
    let taxonomy = taxonomy();
    let mut selection = Selection::new(&taxonomy);

    // Brand Assets has six subsections, Brand Narrative only four.
    selection.select_section(&taxonomy, 5);
    selection.select_subsection(&taxonomy, 5);
    assert_eq!(selection.subsection(), 5);

    selection.select_locale(&taxonomy, Locale::Ko);
    assert_eq!(selection.subsection(), 5);

    selection.select_section(&taxonomy, 1);
    assert_eq!(selection.subsection(), 0);
    assert_eq!(selection.locale(), Locale::Ko);
}

#[test]
fn test_in_range_index_survives_section_change() {
    let taxonomy = taxonomy();
    let mut selection = Selection::new(&taxonomy);

    selection.select_subsection(&taxonomy, 3);
    selection.select_section(&taxonomy, 2);

    assert_eq!(selection.subsection(), 3);
}

#[test]
fn test_unknown_section_is_ignored() {
    let taxonomy = taxonomy();
    let mut selection = Selection::new(&taxonomy);
    selection.select_section(&taxonomy, 3);
    selection.select_subsection(&taxonomy, 2);

    selection.select_section(&taxonomy, 42);

    assert_eq!(selection.section(), 3);
    assert_eq!(selection.subsection(), 2);
}

#[test]
fn test_repeated_calls_reflect_latest() {
    let taxonomy = taxonomy();
    let mut selection = Selection::new(&taxonomy);

    selection.select_locale(&taxonomy, Locale::Ko);
    selection.select_locale(&taxonomy, Locale::Ko);
    selection.select_locale(&taxonomy, Locale::En);
    selection.select_subsection(&taxonomy, 1);
    selection.select_subsection(&taxonomy, 2);

    assert_eq!(selection.locale(), Locale::En);
    assert_eq!(selection.subsection(), 2);
}
