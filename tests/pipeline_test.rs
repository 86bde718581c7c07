//! End-to-end tests for transform + compile.

use proptest::prelude::*;

use wikimeta::compile::reconcile_document;
use wikimeta::{AggregatedEntry, HeaderPath, Node, compile, slugify, transform};

fn path(segments: &[&str]) -> HeaderPath {
    segments.iter().copied().collect()
}

fn paragraph(children: Vec<Node>) -> Node {
    Node::container("paragraph", children)
}

#[test]
fn test_header_paths_follow_depth_sequence() {
    let tree = Node::root(vec![
        Node::heading(1, "M1"),
        Node::heading(2, "S1"),
        Node::heading(1, "M2"),
        Node::heading(2, "S2"),
        Node::heading(4, "SS1"),
        Node::heading(3, "SS2"),
    ]);
    let doc = transform(&tree, "m1.md");

    assert_eq!(
        doc.outline(),
        &[
            path(&["M1"]),
            path(&["M1", "S1"]),
            path(&["M2"]),
            path(&["M2", "S2"]),
            path(&["M2", "S2", "SS1"]),
            path(&["M2", "S2", "SS2"]),
        ]
    );
}

#[test]
fn test_reference_resolves_to_later_definition() {
    let tree = Node::root(vec![
        Node::heading(1, "Doc"),
        paragraph(vec![Node::reference("handbook", "Handbook", "the handbook")]),
        Node::heading(2, "Links"),
        Node::definition("handbook", "https://example.com/handbook", None),
    ]);
    let doc = transform(&tree, "doc.md");

    assert!(doc.orphans.is_empty());
    let entries = doc.links_to("https://example.com/handbook");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].aliases, vec!["the handbook", "Handbook"]);
    // Context is where the reference sits, not the definition
    assert_eq!(entries[0].header, path(&["Doc"]));
}

#[test]
fn test_duplicate_alias_collapses_to_single_entry() {
    let tree = Node::root(vec![
        Node::heading(1, "h1"),
        paragraph(vec![Node::link("Greeting", Some("Hello"), "Hello")]),
    ]);
    let doc = transform(&tree, "h1.md");

    assert_eq!(
        doc.links_to("Greeting"),
        &[AggregatedEntry {
            aliases: vec!["Hello".to_string()],
            header: path(&["h1"]),
        }]
    );
}

#[test]
fn test_missing_definition_is_orphan_only() {
    let tree = Node::root(vec![paragraph(vec![Node::reference(
        "missing", "missing", "Missing",
    )])]);
    let doc = transform(&tree, "doc.md");

    assert_eq!(doc.orphan_identifiers().collect::<Vec<_>>(), vec!["missing"]);
    assert!(doc.links.is_empty());
}

#[test]
fn test_dot_slash_targets_share_a_key() {
    let tree = Node::root(vec![paragraph(vec![
        Node::link("./page.md", None, "one"),
        Node::link("page.md", None, "two"),
    ])]);
    let doc = transform(&tree, "doc.md");

    assert_eq!(doc.links.keys().collect::<Vec<_>>(), vec!["page.md"]);
    assert_eq!(doc.links.get("page.md").len(), 2);
}

#[test]
fn test_bad_root_heading_rewritten_in_every_view() {
    let tree = Node::root(vec![
        Node::heading(1, "WrongName"),
        paragraph(vec![Node::link("a.md", None, "A")]),
        Node::heading(2, "Sub"),
        paragraph(vec![Node::reference("nope", "nope", "Nope")]),
    ]);
    let compiled = compile(&transform(&tree, "foo.md"));

    for line in compiled.text.lines() {
        assert!(line.starts_with(":foo"), "line not rewritten: {line}");
        assert!(!line.contains("WrongName"), "stale root in: {line}");
    }
    assert_eq!(
        compiled.warning_lines().collect::<Vec<_>>(),
        vec!["WARNING: FILE: foo.md: BAD HEADING: WrongName"]
    );
}

#[test]
fn test_matching_root_heading_has_no_warning() {
    let tree = Node::root(vec![
        Node::heading(1, "Getting Started"),
        paragraph(vec![Node::link("install.md", None, "install")]),
    ]);
    let compiled = compile(&transform(&tree, "getting-started.md"));

    assert!(compiled.warnings.is_empty());
    assert_eq!(
        compiled.text,
        ":Getting Started ::install :::install.md\n:Getting Started"
    );
}

#[test]
fn test_links_inside_heading_carry_that_heading() {
    let tree = Node::root(vec![Node::Heading {
        depth: 1,
        children: vec![
            Node::text("See "),
            Node::link("other.md", None, "Other"),
        ],
    }]);
    let doc = transform(&tree, "see-other.md");

    assert_eq!(doc.outline(), &[path(&["See Other"])]);
    assert_eq!(doc.links_to("other.md")[0].header, path(&["See Other"]));
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (1u8..=6, "[A-Za-z ]{0,8}").prop_map(|(d, t)| Node::heading(d, t)),
        ("(\\./)?[a-c]\\.md", proptest::option::of("[A-Z][a-z]{0,4}"), "[a-z ]{0,6}")
            .prop_map(|(u, title, t)| Node::link(u, title.as_deref(), t)),
        ("[a-d]", "[a-d]", "[a-z]{0,4}").prop_map(|(i, l, t)| Node::reference(i, l, t)),
        ("[a-b]", "[a-c]\\.md").prop_map(|(i, u)| Node::definition(i, u, None)),
        "[a-z ]{0,6}".prop_map(Node::text),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(|children| Node::container("block", children))
    })
    .prop_map(|block| Node::root(vec![block]))
}

proptest! {
    #[test]
    fn prop_pipeline_is_deterministic(tree in arb_tree(), name in "[a-z]{1,6}") {
        let filename = format!("{name}.md");
        let first = compile(&transform(&tree, &filename));
        let second = compile(&transform(&tree, &filename));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reconciled_roots_match_filename(tree in arb_tree(), name in "[a-z]{1,6}") {
        let doc = transform(&tree, &format!("{name}.md"));
        let (reconciled, warning) = reconcile_document(&doc, &slugify);

        let mut paths: Vec<&HeaderPath> = reconciled.outline().iter().collect();
        for (_, entries) in reconciled.links.iter().chain(reconciled.orphans.iter()) {
            paths.extend(entries.iter().map(|e| &e.header));
        }
        for path in paths {
            let root = path.root().unwrap_or("");
            prop_assert_eq!(slugify(root), name.clone());
        }
        if let Some(warning) = warning {
            prop_assert_eq!(warning.filename, format!("{name}.md"));
        }
    }

    #[test]
    fn prop_one_entry_per_occurrence(tree in arb_tree()) {
        let doc = transform(&tree, "x.md");
        let walk = wikimeta::extract::walk(&tree);
        prop_assert_eq!(
            doc.links.occurrences() + doc.orphans.occurrences(),
            walk.links.len() + walk.references.len()
        );
        prop_assert_eq!(doc.outline().len(), walk.headings.len());
    }
}
