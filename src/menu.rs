//! An interactive, numbered menu over a [`Tree`] of `i32`s.
//!
//! The menu reads from any [`BufRead`] and writes to any [`Write`], so the binary hands it
//! stdin and stdout while tests hand it an in-memory script.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use avl::menu::Menu;
//! use avl::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let mut output = Vec::new();
//! Menu::new(Cursor::new("1\n42\n11\n"), &mut output)
//!     .run(&mut tree)
//!     .unwrap();
//!
//! assert!(tree.search(&42));
//! assert!(String::from_utf8(output)
//!     .unwrap()
//!     .contains("42 inserted into the AVL tree."));
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use log::{debug, warn};

use crate::tree::Tree;
use crate::Error;

const MENU: &str = "\
===== AVL Tree Operations =====
1. Insert a value
2. Delete a value
3. Search for a value
4. In-order traversal
5. Pre-order traversal
6. Post-order traversal
7. Level-order traversal
8. Check if tree is a valid AVL tree
9. Find lowest common ancestor (LCA)
10. Find distance between two nodes
11. Exit";

const NOT_FOUND: &str = "One or both values not found in the AVL tree.";

/// A single menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert a value (1).
    Insert,
    /// Remove a value (2).
    Delete,
    /// Check whether a value is present (3).
    Search,
    /// Print the in-order traversal (4).
    InOrder,
    /// Print the pre-order traversal (5).
    PreOrder,
    /// Print the post-order traversal (6).
    PostOrder,
    /// Print the level-order traversal (7).
    LevelOrder,
    /// Report whether the tree is a valid AVL tree (8).
    Validate,
    /// Find the lowest common ancestor of two values (9).
    Lca,
    /// Find the distance between two values (10).
    Distance,
    /// Leave the menu (11).
    Exit,
}

impl Command {
    /// Maps a menu number to its command. Numbers outside of 1 to 11 have no command.
    pub fn from_choice(choice: i32) -> Option<Self> {
        let command = match choice {
            1 => Self::Insert,
            2 => Self::Delete,
            3 => Self::Search,
            4 => Self::InOrder,
            5 => Self::PreOrder,
            6 => Self::PostOrder,
            7 => Self::LevelOrder,
            8 => Self::Validate,
            9 => Self::Lca,
            10 => Self::Distance,
            11 => Self::Exit,
            _ => return None,
        };

        Some(command)
    }
}

/// Drives a [`Tree`] from line-based user input.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a menu reading commands from `input` and writing prompts and results to
    /// `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the input and output this menu was created with.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Runs the menu until the user picks [`Command::Exit`] or the input runs out.
    ///
    /// # Errors
    ///
    /// Any error from reading `input` or writing `output`.
    pub fn run(&mut self, tree: &mut Tree<i32>) -> io::Result<()> {
        writeln!(self.output, "Welcome to the AVL Tree Program!")?;

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.read_number("Enter your choice: ")? else {
                debug!("input ended, leaving the menu");
                return Ok(());
            };

            match Command::from_choice(choice) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    return self.output.flush();
                }
                Some(command) => {
                    debug!("running {command:?}");
                    if self.execute(command, tree)?.is_break() {
                        debug!("input ended mid-command, leaving the menu");
                        return self.output.flush();
                    }
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Runs a single command. Breaks if the input ran out while prompting for a value.
    fn execute(&mut self, command: Command, tree: &mut Tree<i32>) -> io::Result<ControlFlow<()>> {
        let needs_keys = !matches!(command, Command::Insert | Command::Exit);
        if needs_keys && tree.is_empty() {
            writeln!(self.output, "Tree is empty.")?;
            return Ok(ControlFlow::Continue(()));
        }

        match command {
            Command::Insert => {
                let Some(value) = self.read_number("Enter value to insert: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if tree.insert(value) {
                    writeln!(self.output, "{value} inserted into the AVL tree.")?;
                } else {
                    writeln!(self.output, "{value} already exists in the AVL tree.")?;
                }
            }
            Command::Delete => {
                let Some(value) = self.read_number("Enter value to delete: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if tree.remove(&value) {
                    writeln!(self.output, "{value} deleted from the AVL tree.")?;
                } else {
                    writeln!(self.output, "{value} not found in the AVL tree.")?;
                }
            }
            Command::Search => {
                let Some(value) = self.read_number("Enter value to search: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                if tree.search(&value) {
                    writeln!(self.output, "{value} found in the AVL tree.")?;
                } else {
                    writeln!(self.output, "{value} not found in the AVL tree.")?;
                }
            }
            Command::InOrder => self.print_traversal("In-order", tree.in_order())?,
            Command::PreOrder => self.print_traversal("Pre-order", tree.pre_order())?,
            Command::PostOrder => self.print_traversal("Post-order", tree.post_order())?,
            Command::LevelOrder => self.print_traversal("Level-order", tree.level_order())?,
            Command::Validate => {
                if tree.is_valid() {
                    writeln!(self.output, "The tree is a valid AVL tree.")?;
                } else {
                    warn!("tree failed validation");
                    writeln!(self.output, "The tree is not a valid AVL tree.")?;
                }
            }
            Command::Lca => {
                let Some((a, b)) = self.read_pair()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match tree.find_lca(&a, &b) {
                    Some(lca) => writeln!(
                        self.output,
                        "Lowest Common Ancestor of {a} and {b} is: {lca}"
                    )?,
                    None => writeln!(self.output, "{NOT_FOUND}")?,
                }
            }
            Command::Distance => {
                let Some((a, b)) = self.read_pair()? else {
                    return Ok(ControlFlow::Break(()));
                };
                match tree.find_distance(&a, &b) {
                    Some(distance) => {
                        writeln!(self.output, "Distance between {a} and {b} is: {distance}")?
                    }
                    None => writeln!(self.output, "{NOT_FOUND}")?,
                }
            }
            Command::Exit => {}
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_traversal<K>(&mut self, name: &str, keys: Result<Vec<&K>, Error>) -> io::Result<()>
    where
        K: Display,
    {
        match keys {
            Ok(keys) => {
                let keys = keys
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.output, "{name} Traversal: {keys}")
            }
            Err(Error::Empty) => writeln!(self.output, "Tree is empty."),
        }
    }

    fn read_pair(&mut self) -> io::Result<Option<(i32, i32)>> {
        let Some(a) = self.read_number("Enter first value: ")? else {
            return Ok(None);
        };
        let Some(b) = self.read_number("Enter second value: ")? else {
            return Ok(None);
        };

        Ok(Some((a, b)))
    }

    /// Shows `prompt` and reads lines until one holds a number. Returns `None` once the input
    /// is exhausted.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        let mut line = String::new();
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }
}
