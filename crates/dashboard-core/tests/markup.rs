// File: crates/dashboard-core/tests/markup.rs
// Purpose: Escaping and element shape of the markup writer.

use dashboard_core::markup::Markup;

#[test]
fn text_and_attributes_are_escaped() {
    let mut w = Markup::new();
    w.start("p").attr("title", "a \"b\" <c>").open().text("x < y & z").end("p");
    let out = w.finish();
    assert!(!out.contains("\"b\""));
    assert!(out.contains("&quot;b&quot;"));
    assert!(out.contains("x &lt; y &amp; z"));
    assert!(out.starts_with("<p title=\""));
    assert!(out.ends_with("</p>"));
}

#[test]
fn raw_is_passed_through() {
    let mut w = Markup::default();
    w.raw("<br>").newline();
    assert_eq!(w.finish(), "<br>\n");
}

#[test]
fn flags_and_empty_elements() {
    let mut w = Markup::new();
    w.start("option").attr("value", "cityB").flag("selected", true).flag("disabled", false).open().end("option");
    w.start("rect").attr("width", 60).close_empty();
    assert_eq!(w.finish(), "<option value=\"cityB\" selected></option><rect width=\"60\"/>");
}
