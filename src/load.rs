//! Edge-list loading
//!
//! The input is the flattened form of a link/reference index: one link per
//! line, tab-separated, with an optional weight column. Blank lines and
//! `#` comments are skipped.

use std::fs;
use std::path::Path;

use waypath_core::error::{Error, Result};

/// Parse an edge-list file into link triples. Links without a weight column
/// get `default_weight`.
pub fn load_links(path: &Path, default_weight: f64) -> Result<Vec<(String, String, f64)>> {
    let content = fs::read_to_string(path)?;
    let mut links = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        links.push(parse_line(line, index + 1, default_weight)?);
    }
    tracing::debug!(links = links.len(), path = %path.display(), "edge list loaded");
    Ok(links)
}

fn parse_line(line: &str, number: usize, default_weight: f64) -> Result<(String, String, f64)> {
    let mut fields = line.split('\t').map(str::trim);
    let from = fields.next().filter(|s| !s.is_empty());
    let to = fields.next().filter(|s| !s.is_empty());
    let (Some(from), Some(to)) = (from, to) else {
        return Err(Error::ParseEdge {
            line: number,
            reason: "expected `from<TAB>to[<TAB>weight]`".to_string(),
        });
    };
    let weight = match fields.next() {
        None | Some("") => default_weight,
        Some(raw) => raw.parse::<f64>().map_err(|_| Error::ParseEdge {
            line: number,
            reason: format!("invalid weight `{raw}`"),
        })?,
    };
    Ok((from.to_string(), to.to_string(), weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn parses_links_with_and_without_weights() {
        let file = write_file("a\tb\n# comment\n\nb\tc\t2.5\n");
        let links = load_links(file.path(), 1.0).unwrap();
        assert_eq!(
            links,
            vec![
                ("a".to_string(), "b".to_string(), 1.0),
                ("b".to_string(), "c".to_string(), 2.5),
            ]
        );
    }

    #[test]
    fn names_may_contain_spaces() {
        let file = write_file("My First Note\tAnother Note\n");
        let links = load_links(file.path(), 1.0).unwrap();
        assert_eq!(links[0].0, "My First Note");
        assert_eq!(links[0].1, "Another Note");
    }

    #[test]
    fn reports_line_numbers_for_bad_input() {
        let file = write_file("a\tb\nonly-one-field\n");
        let err = load_links(file.path(), 1.0).unwrap_err();
        assert!(matches!(err, Error::ParseEdge { line: 2, .. }));

        let file = write_file("a\tb\tnot-a-number\n");
        let err = load_links(file.path(), 1.0).unwrap_err();
        assert!(matches!(err, Error::ParseEdge { line: 1, .. }));
    }
}
