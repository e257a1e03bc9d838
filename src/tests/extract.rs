use super::{extract, find_block, SubsectionLines};

const NARRATIVE: &str = "# Brand Narrative
## Mission & Vision
Our mission is X.
## Audience Insight
Our audience is Y.
";

#[test]
fn test_extracts_until_next_subsection() {
    let block = extract(NARRATIVE, "Mission & Vision");
    assert_eq!(block, "## Mission & Vision\nOur mission is X.\n");
    assert_eq!(block.lines().count(), 2);
}

#[test]
fn test_last_subsection_runs_to_end() {
    let block = extract(NARRATIVE, "Audience Insight");
    assert_eq!(block, "## Audience Insight\nOur audience is Y.\n");
}

#[test]
fn test_missing_heading_returns_input_unchanged() {
    assert_eq!(find_block(NARRATIVE, "Strategic Definitions"), None);
    assert_eq!(extract(NARRATIVE, "Strategic Definitions"), NARRATIVE);
}

#[test]
fn test_match_is_exact_and_case_sensitive() {
    assert_eq!(extract(NARRATIVE, "mission & vision"), NARRATIVE);
    assert_eq!(extract(NARRATIVE, "Mission"), NARRATIVE);
    assert_eq!(extract(NARRATIVE, " Mission & Vision"), NARRATIVE);
}

#[test]
fn test_irregular_spacing_after_marker_does_not_match() {
    let text = "##  Mission & Vision\nOur mission is X.\n";
    assert_eq!(find_block(text, "Mission & Vision"), None);
}

#[test]
fn test_heading_line_is_trimmed_before_matching() {
    let text = "   ## Logo Suite  \nUse the mark.\n## Typography System\nSerif.";
    assert_eq!(
        extract(text, "Logo Suite"),
        "   ## Logo Suite  \nUse the mark.\n"
    );
}

#[test]
fn test_deeper_headings_stay_inside_the_block() {
    let text = "## Color Strategy\n### Primary\nGreen.\n#### Notes\nMore.\n## Layout & Grid Systems\nGrid.";
    assert_eq!(
        extract(text, "Color Strategy"),
        "## Color Strategy\n### Primary\nGreen.\n#### Notes\nMore.\n"
    );
}

#[test]
fn test_marker_inside_code_fence_still_ends_the_block() {
    let text = "## Logo Suite\n```\n## not a heading\n```\n";
    assert_eq!(extract(text, "Logo Suite"), "## Logo Suite\n```\n");
}

#[test]
fn test_first_match_wins() {
    let text = "## Logo Suite\nfirst\n## Logo Suite\nsecond";
    assert_eq!(extract(text, "Logo Suite"), "## Logo Suite\nfirst\n");
}

#[test]
fn test_extraction_is_idempotent() {
    let once = extract(NARRATIVE, "Mission & Vision");
    let twice = extract(once, "Mission & Vision");
    assert_eq!(twice, once);
}

#[test]
fn test_block_is_a_slice_of_the_input() {
    let text = "## Logo Suite\r\nUse the mark.\r\n\r\n## Typography System\r\nSerif.\r\n";

    let block = find_block(text, "Logo Suite").unwrap();

    assert_eq!(block, "## Logo Suite\r\nUse the mark.\r\n\r\n");
    assert!(text.starts_with(block));
    assert_eq!(extract(block, "Logo Suite"), block);
}

#[test]
fn test_unterminated_last_line() {
    let text = "# Typography\r\n## Typography System\r\nSerif.";
    assert_eq!(
        extract(text, "Typography System"),
        "## Typography System\r\nSerif."
    );
}

#[test]
fn test_scanner_is_lazy() {
    let mut lines = SubsectionLines::new(NARRATIVE, "Mission & Vision");
    assert_eq!(lines.span(), None);

    assert_eq!(lines.next(), Some("## Mission & Vision"));
    assert_eq!(lines.span(), Some(18..38));
    assert_eq!(lines.next(), Some("Our mission is X."));
    assert_eq!(lines.span(), Some(18..56));
    assert_eq!(lines.next(), None);
    assert_eq!(lines.next(), None);
}

#[test]
fn test_empty_input() {
    assert_eq!(extract("", "Anything"), "");
}
