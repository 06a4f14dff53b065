//! Tests for the grid description parser and model validation.
mod common;
use common::*;
use gridflow::grid::parse_grid;
use gridflow::prelude::*;

#[test]
fn test_parse_nodes_and_links() {
    let definition = parse_grid(SCENARIO_A_TEXT).unwrap();
    assert_eq!(
        definition.nodes,
        vec![NodeDefinition::new(1, "P", 10), NodeDefinition::new(2, "C", -6)]
    );
    assert_eq!(definition.links, vec![LinkDefinition::new(1, 2, 6)]);
}

#[test]
fn test_blank_lines_and_repeated_headers() {
    let source = "\nlinks\n0 1 4\n\nnodes\n0 A 5\nlinks\n1 2 3\nnodes\n1 B -2\n2 C -1\n";
    let definition = parse_grid(source).unwrap();
    assert_eq!(definition.nodes.len(), 3);
    assert_eq!(
        definition.links,
        vec![LinkDefinition::new(0, 1, 4), LinkDefinition::new(1, 2, 3)]
    );
}

#[test]
fn test_extra_whitespace_is_tolerated() {
    let definition = parse_grid("  nodes  \n 7   Plant\t12 \nlinks\n").unwrap();
    assert_eq!(definition.nodes, vec![NodeDefinition::new(7, "Plant", 12)]);
}

#[test]
fn test_data_before_header_is_sequencing_error() {
    let err = parse_grid("1 P 10\nnodes\n").unwrap_err();
    assert!(matches!(err, GridError::MissingHeader { line: 1 }));
    assert_eq!(err.kind(), ErrorKind::Sequencing);

    let err = parse_grid("\n\n0 1 5\n").unwrap_err();
    assert!(matches!(err, GridError::MissingHeader { line: 3 }));
}

#[test]
fn test_wrong_field_count_is_format_error() {
    let err = parse_grid("nodes\n1 Big Plant 10\n").unwrap_err();
    match &err {
        GridError::FieldCount {
            line,
            section,
            expected,
            found,
        } => {
            assert_eq!(*line, 2);
            assert_eq!(*section, "nodes");
            assert_eq!(*expected, 3);
            assert_eq!(*found, 4);
        }
        other => panic!("Expected FieldCount error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = parse_grid("nodes\n1 P 10\nlinks\n1 2\n").unwrap_err();
    assert!(matches!(
        err,
        GridError::FieldCount {
            line: 4,
            section: "links",
            found: 2,
            ..
        }
    ));
}

#[test]
fn test_non_integer_token_is_format_error() {
    let err = parse_grid("nodes\n1 P ten\n").unwrap_err();
    match &err {
        GridError::InvalidInteger { line, token } => {
            assert_eq!(*line, 2);
            assert_eq!(token, "ten");
        }
        other => panic!("Expected InvalidInteger error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("'ten'"));
}

#[test]
fn test_sparse_and_negative_ids_are_rekeyed() {
    let grid = EnergyGrid::parse("nodes\n-5 P 10\n900 C -3\nlinks\n900 -5 3\n").unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.index_of(-5), Some(0));
    assert_eq!(grid.index_of(900), Some(1));
    assert_eq!(grid.node_by_id(900).unwrap().label, "C");
    assert_eq!(grid.index_of(0), None);
    assert_eq!(grid.link_capacity(0, 1), Some(3));
    assert_eq!(grid.link_capacity(1, 0), Some(3));
}

#[test]
fn test_model_validation_errors() {
    let err = EnergyGrid::parse("nodes\n1 A 5\n1 B -5\n").unwrap_err();
    assert!(matches!(err, GridError::DuplicateNode { id: 1 }));

    let err = EnergyGrid::parse("nodes\n1 A 0\n").unwrap_err();
    assert!(matches!(err, GridError::ZeroPower { id: 1 }));

    let err = EnergyGrid::parse("nodes\n1 A 5\nlinks\n1 2 3\n").unwrap_err();
    assert!(matches!(
        err,
        GridError::UnknownEndpoint {
            a: 1,
            b: 2,
            missing: 2
        }
    ));

    let err = EnergyGrid::parse("nodes\n1 A 5\n2 B -5\nlinks\n1 2 -3\n").unwrap_err();
    assert!(matches!(err, GridError::NegativeCapacity { capacity: -3, .. }));

    let err = EnergyGrid::parse("nodes\n1 A 5\n2 B -5\nlinks\n1 2 3\n2 1 4\n").unwrap_err();
    assert!(matches!(err, GridError::ParallelLink { a: 2, b: 1 }));

    for err in [
        EnergyGrid::parse("nodes\n1 A 0\n").unwrap_err(),
        EnergyGrid::parse("nodes\n1 A -9223372036854775808\n").unwrap_err(),
        EnergyGrid::parse("nodes\n1 A 5\n1 B -5\n").unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_values_beyond_supported_range_are_rejected() {
    let err = EnergyGrid::parse("nodes\n1 P 5\n2 C -9223372036854775808\n").unwrap_err();
    assert!(matches!(
        err,
        GridError::PowerOutOfRange {
            id: 2,
            power: i64::MIN,
            ..
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = EnergyGrid::parse("nodes\n1 P 5\n2 C -5\nlinks\n1 2 5000000000000000000\n")
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::CapacityOutOfRange {
            a: 1,
            b: 2,
            capacity: 5_000_000_000_000_000_000,
            max: MAX_LINK_CAPACITY
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_extreme_values_at_the_limits_are_accepted() {
    let source = format!(
        "nodes\n1 P {}\n2 C {}\nlinks\n1 2 {}\n",
        i64::MAX,
        MIN_NODE_POWER,
        MAX_LINK_CAPACITY
    );
    let grid = EnergyGrid::parse(&source).unwrap();
    assert_eq!(grid.node(1).declared(), i64::MAX);
    assert_eq!(grid.link_capacity(0, 1), Some(MAX_LINK_CAPACITY));
}

#[test]
fn test_adjacency_follows_link_order() {
    let grid = build_grid(
        &[(0, "P", 5), (1, "A", -1), (2, "B", -1)],
        &[(1, 2, 3), (0, 2, 4), (1, 0, 7)],
    );
    let neighbors = |id| {
        grid.adjacent(grid.index_of(id).unwrap())
            .iter()
            .map(|adjacent| (grid.node(adjacent.neighbor).id, adjacent.capacity))
            .collect::<Vec<_>>()
    };
    assert_eq!(neighbors(0), vec![(2, 4), (1, 7)]);
    assert_eq!(neighbors(1), vec![(2, 3), (0, 7)]);
    assert_eq!(neighbors(2), vec![(1, 3), (0, 4)]);
}

#[test]
fn test_definition_display_round_trips_through_parser() {
    let definition = parse_grid(SCENARIO_A_TEXT).unwrap();
    assert_eq!(definition.to_string(), SCENARIO_A_TEXT);
}

#[test]
fn test_load_missing_file_is_resource_error() {
    let path = std::env::temp_dir().join("gridflow-definitely-missing-grid.txt");
    let err = EnergyGrid::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert!(err.to_string().contains("gridflow-definitely-missing-grid.txt"));
}
