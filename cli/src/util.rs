use graph_tasks_core::{VertexId, Weight};
use thiserror::Error;

/// An edge given on the command line as `FROM:TO` or `FROM:TO:WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EdgeSpecError {
    #[error("expected FROM:TO or FROM:TO:WEIGHT, got '{0}'")]
    Shape(String),

    #[error("'{0}' is not an integer")]
    NotInteger(String),
}

/// Parse an edge spec. A missing weight is 0.
///
/// Used as a clap value parser for `edit --add-edge` and `--remove-edge`.
pub fn parse_edge_spec(s: &str) -> Result<EdgeSpec, EdgeSpecError> {
    let parts: Vec<&str> = s.split(':').map(str::trim).collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => return Err(EdgeSpecError::Shape(s.to_string())),
    };

    Ok(EdgeSpec {
        from: parse_int(from)?,
        to: parse_int(to)?,
        weight: weight.map(parse_int).transpose()?.unwrap_or(0),
    })
}

fn parse_int<T: std::str::FromStr>(token: &str) -> Result<T, EdgeSpecError> {
    token
        .parse()
        .map_err(|_| EdgeSpecError::NotInteger(token.to_string()))
}
