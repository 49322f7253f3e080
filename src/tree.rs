//! Command tree registry
//!
//! Commands are grouped in a tree keyed by lower-cased, space-separated name
//! segments. Leaf nodes carry the command body; interior nodes may carry a
//! setup handler that runs before any command beneath them.

use std::collections::HashMap;

use crate::error::RegisterError;

/// A registered handler. Receives the trailing tokens the resolver left
/// unconsumed, so each command parses its own flags.
pub type Handler = Box<dyn Fn(&[String])>;

/// One segment of the command tree.
pub struct CommandNode {
    pub(crate) description: String,
    pub(crate) handler: Option<Handler>,
    pub(crate) children: HashMap<String, CommandNode>,
}

impl CommandNode {
    fn new() -> Self {
        Self {
            description: String::new(),
            handler: None,
            children: HashMap::new(),
        }
    }

    /// Description shown for this node in help listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this node can be invoked directly.
    pub fn is_invocable(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether this node has registered subcommands.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Registry of commands for one program. Built once at startup from
/// sequential registration calls, read-only afterwards.
pub struct CommandTree {
    pub(crate) root: CommandNode,
}

impl CommandTree {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            root: CommandNode::new(),
        }
    }

    /// Register a command. `path` is a space-separated command chain,
    /// e.g. "db create"; matching is against its lower-cased segments.
    ///
    /// An interior path may be registered as well: its handler runs as a
    /// setup step before any deeper command on the same chain.
    pub fn register<F>(
        &mut self,
        path: &str,
        handler: F,
        description: &str,
    ) -> Result<(), RegisterError>
    where
        F: Fn(&[String]) + 'static,
    {
        let segments: Vec<String> = path
            .split_whitespace()
            .map(|s| s.to_lowercase())
            .collect();
        if segments.is_empty() {
            return Err(RegisterError::EmptyPath);
        }

        let mut node = &mut self.root;
        for segment in &segments {
            if segment.starts_with('-') {
                return Err(RegisterError::InvalidSegment(segment.clone()));
            }
            node = node
                .children
                .entry(segment.clone())
                .or_insert_with(CommandNode::new);
        }

        if node.handler.is_some() {
            return Err(RegisterError::DuplicateCommand(segments.join(" ")));
        }
        node.handler = Some(Box::new(handler));
        node.description = description.to_string();
        tracing::debug!("registered command {:?}", segments.join(" "));
        Ok(())
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}
