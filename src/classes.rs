//! Class list configuration.
//!
//! The ordered list of object category names is loaded from an external
//! JSON configuration file; its length defines the class index space and
//! the position of a name is its class id.

use crate::error::{MicroEvalError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ClassConfig {
    classes: Vec<String>,
}

/// Ordered, fixed list of class names.
///
/// # Example
///
/// ```
/// use microavg_eval::classes::ClassList;
///
/// let classes = ClassList::load_from_string(r#"{"classes": ["ball", "robot"]}"#).unwrap();
/// assert_eq!(classes.num_classes(), 2);
/// assert_eq!(classes.id_of("robot").unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create a class list from an ordered list of names.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty or contains a
    /// duplicate name.
    pub fn new(classes: Vec<String>) -> Result<Self> {
        if classes.is_empty() {
            return Err(MicroEvalError::EmptyClassList(
                "class list must contain at least one name".to_string(),
            ));
        }
        for (i, name) in classes.iter().enumerate() {
            if classes[..i].contains(name) {
                return Err(MicroEvalError::DuplicateClass(name.clone()));
            }
        }
        Ok(Self { classes })
    }

    /// Load a class list from a JSON configuration file.
    ///
    /// The file must contain a top-level `"classes"` array of names, in
    /// dataset order:
    ///
    /// ```json
    /// {"classes": ["ball", "robot", "goal"]}
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the list
    /// fails validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ClassConfig = serde_json::from_reader(reader)?;
        Self::new(config.classes)
    }

    /// Load a class list from a JSON string.
    pub fn load_from_string(json_str: &str) -> Result<Self> {
        let config: ClassConfig = serde_json::from_str(json_str)?;
        Self::new(config.classes)
    }

    /// Number of known classes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The class names in id order.
    pub fn names(&self) -> &[String] {
        &self.classes
    }

    /// Look up the class id of a name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown name.
    pub fn id_of(&self, name: &str) -> Result<usize> {
        self.classes
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| MicroEvalError::UnknownClass(name.to_string()))
    }

    /// Look up the name of a class id.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity error for an id outside the list.
    pub fn name_of(&self, class_id: usize) -> Result<&str> {
        self.classes
            .get(class_id)
            .map(String::as_str)
            .ok_or(MicroEvalError::ClassIdOutOfRange {
                class_id,
                num_classes: self.classes.len(),
            })
    }
}
