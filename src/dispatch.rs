//! Handler dispatch and program entry points
//!
//! A resolution that stopped at a node with children is incomplete: help for
//! that node is shown instead of running anything, and the process reports
//! failure with exit code 2. A true leaf runs its collected handler chain,
//! outer setup handlers first.

use std::io::Write;
use std::process::ExitCode;

use crate::help::write_help;
use crate::resolve::Resolution;
use crate::tree::CommandTree;

impl Resolution<'_> {
    /// Run the resolved command, or write help to `help_out` if resolution
    /// stopped at an interior node. Returns whether handlers ran.
    ///
    /// Handler outcomes are not inspected; a handler that fails is expected
    /// to terminate the process itself.
    pub fn dispatch(&self, help_out: &mut dyn Write) -> bool {
        if self.node.has_children() {
            tracing::debug!("stopped at interior node {:?}, showing help", self.label());
            // Help rendering is best-effort; a broken stderr is not worth
            // panicking over.
            let _ = write_help(help_out, &self.label(), self.node);
            return false;
        }
        for handler in &self.handlers {
            handler(&self.rest);
        }
        true
    }
}

impl CommandTree {
    /// Resolve and dispatch `args`, writing help to stderr when resolution
    /// is incomplete. Exit code 2 signals a help-shown failure.
    pub fn run(&self, args: &[String]) -> ExitCode {
        let resolution = self.resolve(args);
        if resolution.dispatch(&mut std::io::stderr()) {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(2)
        }
    }

    /// Run against the process arguments.
    pub fn run_main(&self) -> ExitCode {
        let args: Vec<String> = std::env::args().collect();
        self.run(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_leaf_runs_chain_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = CommandTree::new();
        for name in ["db", "db create"] {
            let log = Rc::clone(&log);
            tree.register(name, move |rest| {
                log.borrow_mut().push(format!("{name}:{}", rest.join(" ")));
            }, "")
            .unwrap();
        }

        let res = tree.resolve(&args(&["prog", "db", "create", "--copies", "3"]));
        let mut help = Vec::new();
        assert!(res.dispatch(&mut help));
        assert!(help.is_empty());
        assert_eq!(
            log.borrow().as_slice(),
            ["db:--copies 3", "db create:--copies 3"]
        );
    }

    #[test]
    fn test_interior_node_shows_help_and_fails() {
        let called = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&called);
        let mut tree = CommandTree::new();
        tree.register("db", move |_| *flag.borrow_mut() = true, "db setup")
            .unwrap();
        tree.register("db create", |_| {}, "create a db").unwrap();
        tree.register("db query", |_| {}, "query a db").unwrap();

        let res = tree.resolve(&args(&["prog", "db"]));
        let mut help = Vec::new();
        assert!(!res.dispatch(&mut help));
        // The interior node's own setup handler must not run.
        assert!(!*called.borrow());

        let text = String::from_utf8(help).unwrap();
        assert_eq!(
            text,
            "Usage of prog db:\n  c\u{b7}reate  create a db\n  q\u{b7}uery   query a db\n"
        );
    }

    #[test]
    fn test_root_help_when_nothing_matches() {
        let mut tree = CommandTree::new();
        tree.register("db create", |_| {}, "create a db").unwrap();

        let res = tree.resolve(&args(&["prog", "unknown"]));
        let mut help = Vec::new();
        assert!(!res.dispatch(&mut help));
        assert!(String::from_utf8(help).unwrap().starts_with("Usage of prog:\n"));
    }
}
