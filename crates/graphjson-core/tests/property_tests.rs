//! # Property-Based Tests
//!
//! Determinism, order fidelity and encoding invariants checked with proptest
//! over randomly generated graphs. Output is parsed back with `serde_json`
//! (built with `preserve_order`, so object key order survives parsing).

use graphjson_core::attribute::{self, AttributeMap};
use graphjson_core::primitives;
use graphjson_core::{AttributeValue, EdgeId, ExportError, Graph, JsonExporter};
use proptest::collection::vec;
use proptest::prelude::*;
use serde_json::Value;

// =============================================================================
// HELPERS
// =============================================================================

/// Build a directed graph with `n` vertices and edges picked from `pairs`.
fn build_graph(n: u32, pairs: &[(u32, u32)], weighted: bool) -> Graph<u32> {
    let mut graph = if weighted {
        Graph::directed().weighted()
    } else {
        Graph::directed()
    };
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n > 0 {
        for (a, b) in pairs {
            graph.add_edge(a % n, b % n).expect("endpoints exist");
        }
    }
    graph
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("output must be valid JSON")
}

fn keys(object: &Value) -> Vec<String> {
    object
        .as_object()
        .expect("object")
        .keys()
        .cloned()
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Same graph and providers produce byte-identical documents.
    #[test]
    fn determinism_identical_input_produces_identical_output(
        n in 0u32..30,
        pairs in vec((0u32..100, 0u32..100), 0..60),
        labels in vec("[a-z]{0,8}", 30),
    ) {
        let graph = build_graph(n, &pairs, true);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            |v: &u32| {
                let mut map = AttributeMap::new();
                map.insert("label", labels[*v as usize].as_str());
                map
            },
        ));

        let first = exporter.export_to_vec(&graph).expect("export");
        let second = exporter.export_to_vec(&graph).expect("export");
        prop_assert_eq!(first, second);
    }

    /// Node and edge arrays follow iteration order; structural keys come first.
    #[test]
    fn order_fidelity(
        n in 1u32..25,
        pairs in vec((0u32..100, 0u32..100), 0..40),
        names in vec(
            "[a-z]{1,6}".prop_filter("structural field name", |s| !primitives::is_reserved(s)),
            0..6,
        ),
    ) {
        let graph = build_graph(n, &pairs, false);
        let exporter = JsonExporter::new()
            .with_edge_attributes(attribute::from_fn(|e: &EdgeId| {
                names.iter().map(|name| (name.clone(), e.0 as i64)).collect::<AttributeMap>()
            }));

        let doc = parse(&exporter.export_to_vec(&graph).expect("export"));
        prop_assert_eq!(keys(&doc), vec!["creator", "version", "nodes", "edges"]);

        let nodes = doc["nodes"].as_array().expect("nodes");
        prop_assert_eq!(nodes.len(), n as usize);
        for (i, node) in nodes.iter().enumerate() {
            let id = (i + 1).to_string();
            prop_assert_eq!(node["id"].as_str(), Some(id.as_str()));
            prop_assert_eq!(keys(node), vec!["id"]);
        }

        // Supplier order after dedup: first occurrence of each name.
        let mut expected_attrs: Vec<String> = Vec::new();
        for name in &names {
            if !expected_attrs.contains(name) {
                expected_attrs.push(name.clone());
            }
        }

        let edges = doc["edges"].as_array().expect("edges");
        prop_assert_eq!(edges.len(), pairs.len());
        for (i, (edge, (a, b))) in edges.iter().zip(&pairs).enumerate() {
            let mut expected_keys = vec!["id".to_string(), "source".to_string(), "target".to_string()];
            expected_keys.extend(expected_attrs.iter().cloned());
            prop_assert_eq!(keys(edge), expected_keys);

            let id = (i + 1).to_string();
            prop_assert_eq!(edge["id"].as_str(), Some(id.as_str()));
            let source = (a % n + 1).to_string();
            let target = (b % n + 1).to_string();
            prop_assert_eq!(edge["source"].as_str(), Some(source.as_str()));
            prop_assert_eq!(edge["target"].as_str(), Some(target.as_str()));
        }
    }

    /// Arbitrary strings survive encoding and parse back unchanged.
    #[test]
    fn strings_round_trip(text in "\\PC*", control in "[\\x00-\\x1f\"\\\\]{0,8}") {
        let mut graph = Graph::directed();
        graph.add_vertex(0u32);
        let combined = format!("{}{}", text, control);
        let key = format!("k{}", combined);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            |_: &u32| {
                let mut map = AttributeMap::new();
                map.insert(key.as_str(), combined.as_str());
                map
            },
        ));

        let bytes = exporter.export_to_vec(&graph).expect("export");
        let raw = String::from_utf8(bytes.clone()).expect("utf-8");
        prop_assert!(!raw.contains('\n'), "control characters must be escaped");

        let doc = parse(&bytes);
        let node = &doc["nodes"][0];
        prop_assert_eq!(node[key.as_str()].as_str(), Some(combined.as_str()));
    }

    /// Integers keep their exact value and are never quoted.
    #[test]
    fn integers_exact(int in any::<i32>(), long in any::<i64>(), flag in any::<bool>()) {
        let mut graph = Graph::directed();
        graph.add_vertex(0u32);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            |_: &u32| {
                let mut map = AttributeMap::new();
                map.insert("int", int);
                map.insert("long", long);
                map.insert("flag", flag);
                map
            },
        ));

        let doc = parse(&exporter.export_to_vec(&graph).expect("export"));
        let node = &doc["nodes"][0];
        prop_assert_eq!(node["int"].as_i64(), Some(i64::from(int)));
        prop_assert_eq!(node["long"].as_i64(), Some(long));
        prop_assert_eq!(node["flag"].as_bool(), Some(flag));
    }

    /// Finite floats are emitted as JSON floating-point numbers.
    #[test]
    fn finite_floats_are_numbers(d in any::<f64>(), f in any::<f32>()) {
        prop_assume!(d.is_finite() && f.is_finite());
        let mut graph = Graph::directed().weighted();
        graph.add_vertex(0u32);
        let e = graph.add_edge(0, 0).expect("edge");
        graph.set_edge_weight(e, d);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            |_: &u32| {
                let mut map = AttributeMap::new();
                map.insert("f", f);
                map
            },
        ));

        let doc = parse(&exporter.export_to_vec(&graph).expect("export"));
        prop_assert!(doc["nodes"][0]["f"].is_f64());
        prop_assert!(doc["edges"][0]["weight"].is_f64());
    }

    /// One non-finite attribute anywhere aborts the export with no output.
    #[test]
    fn non_finite_anywhere_rejected(
        n in 1u32..20,
        position in 0u32..20,
        kind in 0usize..3,
    ) {
        let bad = position % n;
        let poison = match kind {
            0 => AttributeValue::Double(f64::NAN),
            1 => AttributeValue::Double(f64::INFINITY),
            _ => AttributeValue::Float(f32::NEG_INFINITY),
        };
        let graph = build_graph(n, &[], false);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            |v: &u32| {
                let mut map = AttributeMap::new();
                map.insert("ok", "fine");
                if *v == bad {
                    map.insert("bad", poison.clone());
                }
                map
            },
        ));

        let mut buffer = Vec::new();
        let result = exporter.export(&graph, &mut buffer);
        let is_invalid_numeric = matches!(result, Err(ExportError::InvalidNumericValue { .. }));
        prop_assert!(is_invalid_numeric);
        prop_assert!(buffer.is_empty());
    }

    /// Generated attribute names never collide with structural fields.
    #[test]
    fn generated_names_exclude_structural_fields(
        names in vec(
            "(id|source|target|[a-z]{1,6})"
                .prop_filter("structural field name", |s| !primitives::is_reserved(s)),
            1..8,
        ),
    ) {
        let graph = build_graph(2, &[(0, 1)], false);
        let exporter = JsonExporter::new().with_edge_attributes(attribute::from_fn(
            |_: &EdgeId| names.iter().map(|name| (name.clone(), true)).collect::<AttributeMap>(),
        ));
        prop_assert!(exporter.export_to_vec(&graph).is_ok());
    }

    /// Structural names are always rejected as attributes.
    #[test]
    fn reserved_names_always_rejected(index in 0usize..3) {
        let name = ["id", "source", "target"][index];
        let graph = build_graph(2, &[(0, 1)], false);
        let exporter = JsonExporter::new().with_vertex_attributes(attribute::from_fn(
            move |_: &u32| {
                let mut map = AttributeMap::new();
                map.insert(name, 1);
                map
            },
        ));

        let is_reserved = matches!(
            exporter.export_to_vec(&graph),
            Err(ExportError::ReservedAttribute { .. })
        );
        prop_assert!(is_reserved);
    }
}
