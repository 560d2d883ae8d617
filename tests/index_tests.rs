//! Integration tests for index directives and the small node helpers

use mystex::{
    add_index_entries, format_index_entry, get_classes, latex_image_width, parse_index_entries,
    ImageWidth, IndexEntry, IndexTarget, SubEntryKind, TexBuffer,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Recorder {
    directives: Vec<String>,
    flag_sets: usize,
}

impl IndexTarget for Recorder {
    fn write(&mut self, latex: &str) {
        self.directives.push(latex.to_string());
    }

    fn set_has_index(&mut self) {
        self.flag_sets += 1;
    }
}

#[test]
fn test_entries_in_order() {
    let entries = vec![
        IndexEntry::new("alpha"),
        IndexEntry::new("beta").with_sub_entry(SubEntryKind::See, "gamma"),
        IndexEntry::new("delta")
            .with_sub_entry(SubEntryKind::SeeAlso, "epsilon")
            .emphasized(),
        IndexEntry::new("zeta").with_sub_entry(SubEntryKind::Entry, "eta"),
    ];
    let mut recorder = Recorder::default();
    add_index_entries(&entries, &mut recorder);
    assert_eq!(
        recorder.directives,
        vec![
            "\\index{alpha}",
            "\\index{beta|see{gamma}}",
            "\\index{delta|seealso{epsilon}|textbf}",
            "\\index{zeta!eta}",
        ]
    );
    assert!(recorder.flag_sets >= 1);
}

#[test]
fn test_tex_buffer_sets_flag() {
    let mut buffer = TexBuffer::default();
    add_index_entries(&[IndexEntry::new("a").emphasized()], &mut buffer);
    assert!(buffer.has_index);
    assert_eq!(buffer.out, "\\index{a|textbf}");

    // flag stays set
    add_index_entries(&[], &mut buffer);
    assert!(buffer.has_index);
}

#[test]
fn test_from_json() {
    let json = r#"[
        {"entry": "Rust", "subEntry": {"value": "ownership", "kind": "entry"}},
        {"entry": "crab", "subEntry": {"value": "Rust", "kind": "seealso"}, "emphasis": true}
    ]"#;
    let entries = parse_index_entries(json).unwrap();
    let directives: Vec<String> = entries.iter().map(format_index_entry).collect();
    assert_eq!(
        directives,
        vec!["\\index{Rust!ownership}", "\\index{crab|seealso{Rust}|textbf}"]
    );
}

#[test]
fn test_image_width() {
    assert_eq!(latex_image_width(None), "0.7\\linewidth");
    assert_eq!(
        latex_image_width(Some(&ImageWidth::Text("25%".to_string()))),
        "0.25\\linewidth"
    );
    assert_eq!(
        latex_image_width(Some(&ImageWidth::Text("12em".to_string()))),
        "0.7\\linewidth"
    );
}

#[test]
fn test_classes() {
    assert_eq!(
        get_classes(Some("Full-Width full-width margin")),
        vec!["full-width", "margin"]
    );
}
