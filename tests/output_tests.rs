use include_viewer::graph::export_graph;
use include_viewer::output::{
    read_graph_file, render_tree, to_dgml, validate_path, write_graph, GraphFormat,
};
use include_viewer::parser::parse_trace;
use std::path::Path;
use tempfile::NamedTempFile;

const TRACE: &str = "\
Note: including file: C:\\proj\\a.h
Note: including file:  C:\\proj\\sub\\b.h
Note: including file: C:\\proj\\c.h
";

#[test]
fn test_write_dgml() {
    let tree = parse_trace(TRACE, &["C:\\proj\\"]).unwrap();
    let graph = export_graph(&tree.root);

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested/dirs/includes.dgml");
    write_graph(&graph, &path, GraphFormat::Dgml, None, tree.num_includes).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, to_dgml(&graph));
    assert!(content.contains(r#"<Node Id="C:\proj\sub\b.h" Label="sub\b.h" />"#));
    assert!(content.contains(r#"<Link Source="C:\proj\a.h" Target="C:\proj\sub\b.h" />"#));
    assert_eq!(content.matches("<Link ").count(), 1);
}

#[test]
fn test_write_and_read_json() {
    let tree = parse_trace(TRACE, &["C:\\proj\\"]).unwrap();
    let graph = export_graph(&tree.root);
    let temp_file = NamedTempFile::new().unwrap();

    write_graph(
        &graph,
        temp_file.path(),
        GraphFormat::Json,
        Some("C:\\proj\\main.cpp"),
        tree.num_includes,
    )
    .unwrap();

    let loaded = read_graph_file(temp_file.path()).unwrap();
    assert_eq!(loaded.graph, graph);
    assert_eq!(loaded.num_includes, 3);
    assert_eq!(loaded.translation_unit.as_deref(), Some("C:\\proj\\main.cpp"));
}

#[test]
fn test_write_dot() {
    let tree = parse_trace(TRACE, &["C:\\proj\\"]).unwrap();
    let graph = export_graph(&tree.root);
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("includes.dot");

    write_graph(&graph, &path, GraphFormat::Dot, None, 0).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("digraph"));
}

#[test]
fn test_write_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let tree = parse_trace(TRACE, &["C:\\proj\\"]).unwrap();
    let graph = export_graph(&tree.root);

    assert!(write_graph(&graph, temp_dir.path(), GraphFormat::Dgml, None, 0).is_err());
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_render_reference_tree() {
    let tree = parse_trace(TRACE, &["C:\\proj\\"]).unwrap();
    assert_eq!(render_tree(&tree, false), "a.h\n  sub\\b.h\nc.h\n");
}
