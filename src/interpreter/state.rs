use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Mapping from variable name to its last assigned value.
///
/// Only assignment and input statements write to the store; expression
/// evaluation and `print` read from it.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    bindings: HashMap<String, Value>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the binding for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A named, session-scoped saved program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name:    String,
    /// Raw program text, one statement per line.
    pub content: String,
}

impl Folder {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name:    name.into(),
               content: content.into(), }
    }

    /// Returns the content as a comma-delimited program, ready to be run.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::state::Folder;
    ///
    /// let folder = Folder::new("notes", "x = 1\nprint x");
    /// assert_eq!(folder.program(), "x = 1,print x");
    /// ```
    #[must_use]
    pub fn program(&self) -> String {
        self.content.replace('\n', ",")
    }

    /// Returns the content on a single line, statements separated by `, `.
    #[must_use]
    pub fn display_content(&self) -> String {
        self.content.replace('\n', ", ")
    }
}

/// Mapping from folder name to [`Folder`], in creation order.
///
/// Overwriting an existing folder keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct FolderStore {
    folders: Vec<Folder>,
}

impl FolderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.name == name)
    }

    /// Stores `folder`, overwriting a folder of the same name in place.
    ///
    /// # Example
    /// ```
    /// use plex::interpreter::state::{Folder, FolderStore};
    ///
    /// let mut folders = FolderStore::new();
    /// folders.insert(Folder::new("a", "print 1"));
    /// folders.insert(Folder::new("b", "print 2"));
    /// folders.insert(Folder::new("a", "print 3"));
    ///
    /// let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
    /// assert_eq!(names, ["a", "b"]);
    /// assert_eq!(folders.get("a").unwrap().content, "print 3");
    /// ```
    pub fn insert(&mut self, folder: Folder) {
        if let Some(existing) = self.folders.iter_mut().find(|f| f.name == folder.name) {
            *existing = folder;
        } else {
            self.folders.push(folder);
        }
    }

    /// Removes and returns the folder called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Folder> {
        let index = self.folders.iter().position(|folder| folder.name == name)?;
        Some(self.folders.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// All mutable state of one interpreter session.
///
/// Separate sessions own separate states; nothing is process-wide.
#[derive(Debug, Default, Clone)]
pub struct InterpreterState {
    pub variables: VariableStore,
    pub folders:   FolderStore,
}
