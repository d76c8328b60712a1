//! Vocabulary listing command

use crate::core::{NodeId, PrefixIndex};

/// Every vocabulary word starting with `prefix`, in lexicographic order
///
/// An empty prefix lists the whole vocabulary; a prefix no word starts with
/// lists nothing. At most `limit` words are returned when a limit is given.
#[must_use]
pub fn dump_words(index: &PrefixIndex, prefix: &str, limit: Option<usize>) -> Vec<String> {
    let prefix = prefix.trim().to_ascii_lowercase();
    index.find_prefix(&prefix).map_or_else(Vec::new, |node| {
        index
            .all_words(node, &prefix)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    })
}

/// The index below `prefix` as an indented letter tree
///
/// Each node is one line holding its letter, indented two spaces per level.
/// A node that ends a word is followed by a `!` line one level deeper, ahead
/// of its children. A `!` at the top means `prefix` is itself a word.
#[must_use]
pub fn dump_tree(index: &PrefixIndex, prefix: &str) -> Vec<String> {
    let prefix = prefix.trim().to_ascii_lowercase();
    let Some(start) = index.find_prefix(&prefix) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if index.is_terminal(start) {
        lines.push("!".to_string());
    }

    let children_of = move |node: NodeId, depth: usize| {
        index
            .node(node)
            .children()
            .iter()
            .rev()
            .map(move |&(letter, child)| (letter, child, depth))
    };

    let mut stack: Vec<(u8, NodeId, usize)> = children_of(start, 0).collect();
    while let Some((letter, node, depth)) = stack.pop() {
        lines.push(format!("{}{}", "  ".repeat(depth), char::from(letter)));
        if index.is_terminal(node) {
            lines.push(format!("{}!", "  ".repeat(depth + 1)));
        }
        stack.extend(children_of(node, depth + 1));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PrefixIndex {
        PrefixIndex::from_words(["past", "paste", "patch", "salt", "pa"]).unwrap()
    }

    #[test]
    fn lists_words_below_prefix() {
        assert_eq!(
            dump_words(&index(), "pas", None),
            vec!["past".to_string(), "paste".to_string()]
        );
    }

    #[test]
    fn prefix_that_is_a_word_comes_first() {
        assert_eq!(
            dump_words(&index(), "PA", None),
            vec!["pa", "past", "paste", "patch"]
        );
    }

    #[test]
    fn empty_prefix_lists_everything() {
        assert_eq!(dump_words(&index(), "", None).len(), 5);
    }

    #[test]
    fn missing_prefix_lists_nothing() {
        assert!(dump_words(&index(), "zz", None).is_empty());
    }

    #[test]
    fn limit_truncates() {
        assert_eq!(dump_words(&index(), "", Some(2)), vec!["pa", "past"]);
    }

    #[test]
    fn tree_lists_letters_depth_first() {
        let index = PrefixIndex::from_words(["pa", "past", "pat"]).unwrap();

        assert_eq!(
            dump_tree(&index, "pa"),
            vec!["!", "s", "  t", "    !", "t", "  !"]
        );
    }

    #[test]
    fn tree_from_root_covers_every_word() {
        let lines = dump_tree(&index(), "");
        let terminals = lines.iter().filter(|l| l.trim_start() == "!").count();

        assert_eq!(terminals, 5);
        assert_eq!(lines[0], "p");
        assert_eq!(lines[1], "  a");
    }

    #[test]
    fn tree_for_missing_prefix_is_empty() {
        assert!(dump_tree(&index(), "zz").is_empty());
    }
}
