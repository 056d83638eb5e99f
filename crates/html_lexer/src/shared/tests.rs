use super::*;

#[test]
fn attributes_reject_duplicates_first_wins() {
    let mut attrs = Attributes::new();
    assert!(attrs.push("href", "a"));
    assert!(attrs.push("id", "x"));
    assert!(!attrs.push("href", "b"));
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("href"), Some("a"));
    assert_eq!(attrs.index_of("id"), Some(1));
    assert!(!attrs.contains("class"));
}

#[test]
fn attributes_preserve_encounter_order() {
    let mut attrs = Attributes::new();
    for name in ["z", "a", "m"] {
        attrs.push(name, "");
    }
    let names: Vec<&str> = attrs.iter().map(|attr| attr.name.as_str()).collect();
    assert_eq!(names, ["z", "a", "m"]);
}

#[test]
fn position_display_includes_ids() {
    let ids = DocumentIds::new(Some("-//W3C//DTD HTML 4.01//EN"), Some("file.html"));
    let pos = ids.at(3, 14);
    assert_eq!(pos.to_string(), "file.html:3:14 (-//W3C//DTD HTML 4.01//EN)");
    assert_eq!(Position::default().to_string(), "1:0");
}

#[test]
fn collecting_sink_filters_by_severity() {
    let mut sink = CollectingSink::new();
    sink.report(&Diagnostic::new(Severity::Error, "bad", Position::new(1, 1)));
    sink.report(&Diagnostic::new(Severity::Warning, "meh", Position::new(1, 2)));
    sink.report(&Diagnostic::new(Severity::Error, "worse", Position::new(2, 1)));
    assert_eq!(sink.error_count(), 2);
    assert_eq!(sink.warnings().count(), 1);
    assert!(sink.mentions("worse"));
    assert_eq!(sink.diagnostics()[1].position.column, 2);
}

#[test]
fn fatal_error_displays_diagnostic() {
    let diagnostic = Diagnostic::new(Severity::Fatal, "stop", Position::new(4, 2));
    let err = TokenizeError::Fatal(diagnostic);
    assert_eq!(err.to_string(), "fatal at 4:2: stop");
    assert!(err.as_fatal().is_some());
}

#[test]
fn default_policy_alters_infoset() {
    assert_eq!(XmlViolationPolicy::default(), XmlViolationPolicy::AlterInfoset);
}
