//! Token resolution against the command tree
//!
//! The resolver walks the tree as far as the argument list allows. A command
//! word may be abbreviated to any prefix that is unique among its siblings;
//! "d c" runs "db create" when no other sibling starts with "d" or "c".

use std::collections::HashMap;

use crate::tree::{CommandNode, CommandTree, Handler};

/// Outcome of resolving one argument list. Borrows from the tree; built
/// fresh per invocation.
pub struct Resolution<'a> {
    /// The node where the walk stopped.
    pub node: &'a CommandNode,
    /// Handlers along the matched path, outermost setup first.
    pub handlers: Vec<&'a Handler>,
    /// Invocation name followed by the matched segment names.
    pub chain: Vec<String>,
    /// Trailing tokens the walk did not consume; the final handler parses
    /// them as its own flags.
    pub rest: Vec<String>,
}

impl Resolution<'_> {
    /// The matched chain joined by spaces, used as the help header label.
    pub fn label(&self) -> String {
        self.chain.join(" ")
    }
}

/// Match one token against a node's children. An exact key match wins
/// outright; otherwise the token must be a prefix of exactly one key.
/// Zero candidates or an ambiguous prefix both yield no match.
fn match_child<'a>(
    children: &'a HashMap<String, CommandNode>,
    token: &str,
) -> Option<(&'a str, &'a CommandNode)> {
    if let Some((key, child)) = children.get_key_value(token) {
        return Some((key.as_str(), child));
    }
    let mut found = None;
    for (key, child) in children {
        if !key.starts_with(token) {
            continue;
        }
        if found.is_some() {
            tracing::trace!("token {:?} is ambiguous", token);
            return None;
        }
        found = Some((key.as_str(), child));
    }
    found
}

impl CommandTree {
    /// Walk the tree against `args`. `args[0]` is the invocation name: it
    /// becomes the first chain element and is never matched. The walk stops
    /// at the first flag token (leading '-') or the first token that does
    /// not uniquely match a child; everything from there on is left in
    /// `rest` for the handlers.
    pub fn resolve(&self, args: &[String]) -> Resolution<'_> {
        let mut node = &self.root;
        let mut handlers = Vec::new();
        let mut chain = vec![args.first().cloned().unwrap_or_default()];

        for token in args.iter().skip(1) {
            if token.starts_with('-') {
                break;
            }
            let Some((key, child)) = match_child(&node.children, token) else {
                break;
            };
            tracing::trace!("matched {:?} as {:?}", token, key);
            node = child;
            chain.push(key.to_string());
            if let Some(handler) = &node.handler {
                handlers.push(handler);
            }
        }

        let rest = args[chain.len().min(args.len())..].to_vec();
        Resolution {
            node,
            handlers,
            chain,
            rest,
        }
    }
}
