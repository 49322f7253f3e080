//! Help listing for interior nodes
//!
//! Each child is rendered with its shortest unique prefix marked off from the
//! rest of the word, so the listing doubles as documentation of the shortest
//! abbreviation that still resolves:
//!
//! ```text
//! Usage of prog db:
//!   c·reate  create a db
//!   q·uery   query a db
//! ```

use std::io::{self, Write};

use crate::tree::CommandNode;

/// Shortest leading substring of `key` that no other sibling starts with.
/// Candidates grow a character at a time; the full key is the fallback when
/// the key is itself a prefix of a sibling.
fn shortest_unique_prefix<'a>(key: &'a str, siblings: &[&str]) -> &'a str {
    let ends = key
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(key.len()));
    for end in ends {
        let candidate = &key[..end];
        if siblings
            .iter()
            .all(|s| *s == key || !s.starts_with(candidate))
        {
            return candidate;
        }
    }
    key
}

/// Write the help listing for `node`'s children, one line per child, sorted
/// by name. The description column is aligned two spaces past the widest
/// command cell, recomputed per call.
pub fn write_help(
    out: &mut dyn Write,
    label: &str,
    node: &CommandNode,
) -> io::Result<()> {
    writeln!(out, "Usage of {label}:")?;

    let mut keys: Vec<&str> = node.children.keys().map(String::as_str).collect();
    keys.sort();

    let rows: Vec<(String, &str)> = keys
        .iter()
        .map(|key| {
            let prefix = shortest_unique_prefix(key, &keys);
            let cell = format!("{prefix}\u{b7}{}", &key[prefix.len()..]);
            (cell, node.children[*key].description())
        })
        .collect();

    let width = rows
        .iter()
        .map(|(cell, _)| cell.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    for (cell, description) in rows {
        writeln!(out, "  {cell:<width$}{description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CommandTree;

    fn prefixes(names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|k| shortest_unique_prefix(k, names).to_string())
            .collect()
    }

    #[test]
    fn test_prefixes_disjoint_first_letters() {
        assert_eq!(prefixes(&["create", "query"]), ["c", "q"]);
    }

    #[test]
    fn test_prefixes_shared_first_letter() {
        assert_eq!(prefixes(&["create", "copy"]), ["cr", "co"]);
    }

    #[test]
    fn test_prefix_falls_back_to_full_key() {
        // "a" is a prefix of "ab", so only the full key identifies it.
        assert_eq!(prefixes(&["a", "ab"]), ["a", "ab"]);
    }

    #[test]
    fn test_prefix_single_child() {
        assert_eq!(prefixes(&["create"]), ["c"]);
    }

    #[test]
    fn test_help_rendering_aligned_and_sorted() {
        let mut tree = CommandTree::new();
        tree.register("db query", |_| {}, "query a db").unwrap();
        tree.register("db create", |_| {}, "create a db").unwrap();

        let db = tree.resolve(&["prog".into(), "db".into()]);
        let mut out = Vec::new();
        write_help(&mut out, &db.label(), db.node).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Usage of prog db:\n  c\u{b7}reate  create a db\n  q\u{b7}uery   query a db\n"
        );
    }

    #[test]
    fn test_help_lists_ambiguous_children() {
        let mut tree = CommandTree::new();
        tree.register("alpha", |_| {}, "").unwrap();
        tree.register("abc", |_| {}, "").unwrap();

        let res = tree.resolve(&["prog".into(), "a".into()]);
        let mut out = Vec::new();
        write_help(&mut out, &res.label(), res.node).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Usage of prog:\n"));
        assert!(text.contains("ab\u{b7}c"));
        assert!(text.contains("al\u{b7}pha"));
    }
}
