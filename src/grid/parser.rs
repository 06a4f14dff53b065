//! Line-oriented parser for the textual grid description.
//!
//! The format is a sequence of sections, each introduced by a header line:
//!
//! ```text
//! nodes
//! 0 Plant 10
//! 1 Town -6
//! links
//! 0 1 6
//! ```
//!
//! Node lines are `<id> <label> <power>`, link lines are `<a> <b> <capacity>`.
//! Blank lines are ignored and a header may appear more than once.

use super::definition::{GridDefinition, LinkDefinition, NodeDefinition};
use crate::error::GridError;
use itertools::Itertools;

const NODES_HEADER: &str = "nodes";
const LINKS_HEADER: &str = "links";

/// Which section of the description the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingState {
    /// No header has been seen yet.
    Initial,
    ReadingNodes,
    ReadingLinks,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Header(ReadingState),
    Data(&'a str),
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str) -> Self {
        match raw.trim() {
            "" => Line::Blank,
            NODES_HEADER => Line::Header(ReadingState::ReadingNodes),
            LINKS_HEADER => Line::Header(ReadingState::ReadingLinks),
            data => Line::Data(data),
        }
    }
}

impl ReadingState {
    /// Consumes one line and returns the state for the next one.
    /// Data lines are appended to `definition` according to the current section.
    fn advance(
        self,
        line_no: usize,
        line: Line<'_>,
        definition: &mut GridDefinition,
    ) -> Result<ReadingState, GridError> {
        match (self, line) {
            (state, Line::Blank) => Ok(state),
            (_, Line::Header(next)) => Ok(next),
            (ReadingState::Initial, Line::Data(_)) => {
                Err(GridError::MissingHeader { line: line_no })
            }
            (ReadingState::ReadingNodes, Line::Data(data)) => {
                definition.nodes.push(parse_node(line_no, data)?);
                Ok(self)
            }
            (ReadingState::ReadingLinks, Line::Data(data)) => {
                definition.links.push(parse_link(line_no, data)?);
                Ok(self)
            }
        }
    }
}

/// Parses a complete grid description into an unvalidated [`GridDefinition`].
pub fn parse_grid(source: &str) -> Result<GridDefinition, GridError> {
    let mut definition = GridDefinition::default();
    let mut state = ReadingState::Initial;

    for (index, raw) in source.lines().enumerate() {
        state = state.advance(index + 1, Line::classify(raw), &mut definition)?;
    }

    tracing::debug!(
        nodes = definition.nodes.len(),
        links = definition.links.len(),
        "parsed grid description"
    );
    Ok(definition)
}

fn parse_node(line_no: usize, data: &str) -> Result<NodeDefinition, GridError> {
    let [id, label, power] = split_fields(line_no, NODES_HEADER, data)?;
    Ok(NodeDefinition {
        id: parse_integer(line_no, id)?,
        label: label.to_string(),
        power: parse_integer(line_no, power)?,
    })
}

fn parse_link(line_no: usize, data: &str) -> Result<LinkDefinition, GridError> {
    let [a, b, capacity] = split_fields(line_no, LINKS_HEADER, data)?;
    Ok(LinkDefinition {
        a: parse_integer(line_no, a)?,
        b: parse_integer(line_no, b)?,
        capacity: parse_integer(line_no, capacity)?,
    })
}

fn split_fields<'a, const N: usize>(
    line_no: usize,
    section: &'static str,
    data: &'a str,
) -> Result<[&'a str; N], GridError> {
    let fields = data.split_whitespace().collect_vec();
    let found = fields.len();
    fields.try_into().map_err(|_| GridError::FieldCount {
        line: line_no,
        section,
        expected: N,
        found,
    })
}

fn parse_integer(line_no: usize, token: &str) -> Result<i64, GridError> {
    token.parse().map_err(|_| GridError::InvalidInteger {
        line: line_no,
        token: token.to_string(),
    })
}
