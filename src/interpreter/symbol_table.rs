use std::collections::BTreeMap;

use crate::error::RuntimeError;

/// Constants every session starts with unless it is created bare.
#[allow(clippy::approx_constant)]
pub const CONSTANTS: [(&str, f64); 2] = [("pi", 3.141_592_653_5), ("e", 2.718_281_828_4)];

/// Maps variable names to their values.
///
/// Names are unique and bindings are never removed. The line number passed to
/// each operation is only used to build the error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    bindings: BTreeMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: BTreeMap::new() }
    }

    /// Creates a table holding [`CONSTANTS`].
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::symbol_table::SymbolTable;
    ///
    /// let table = SymbolTable::with_constants();
    /// assert_eq!(table.get("e", 1).unwrap(), 2.718_281_828_4);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        Self { bindings: CONSTANTS.iter()
                                  .map(|(name, value)| ((*name).to_string(), *value))
                                  .collect(), }
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` if `name` was never declared.
    pub fn get(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             line })
    }

    /// Overwrites the value of an existing binding.
    ///
    /// # Errors
    /// `UndefinedVariable` if `name` was never declared; nothing is inserted.
    pub fn set(&mut self, name: &str, value: f64, line: usize) -> Result<f64, RuntimeError> {
        let slot = self.bindings
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                                        line })?;
        *slot = value;
        Ok(value)
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds `name` to `value` and returns `value`.
    ///
    /// # Errors
    /// `DuplicateDeclaration` if `name` is already bound; the old value is
    /// kept.
    pub fn define(&mut self, name: &str, value: f64, line: usize) -> Result<f64, RuntimeError> {
        if self.is_declared(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_owned(),
                                                            line });
        }
        self.bindings.insert(name.to_owned(), value);
        Ok(value)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolTable;
    use crate::error::RuntimeError;

    #[test]
    fn define_then_get() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.define("x", 1.5, 1), Ok(1.5));
        assert!(table.is_declared("x"));
        assert_eq!(table.get("x", 2), Ok(1.5));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn define_rejects_duplicates_and_keeps_old_value() {
        let mut table = SymbolTable::new();
        table.define("x", 1.0, 1).unwrap();
        assert_eq!(table.define("x", 2.0, 2),
                   Err(RuntimeError::DuplicateDeclaration { name: "x".into(),
                                                            line: 2, }));
        assert_eq!(table.get("x", 3), Ok(1.0));
    }

    #[test]
    fn set_only_updates_existing_bindings() {
        let mut table = SymbolTable::new();
        assert_eq!(table.set("y", 4.0, 1),
                   Err(RuntimeError::UndefinedVariable { name: "y".into(),
                                                         line: 1, }));
        assert!(!table.is_declared("y"));

        table.define("y", 0.0, 1).unwrap();
        assert_eq!(table.set("y", 4.0, 2), Ok(4.0));
        assert_eq!(table.get("y", 3), Ok(4.0));
    }

    #[test]
    fn missing_names_are_undefined() {
        let table = SymbolTable::new();
        assert_eq!(table.get("nope", 7),
                   Err(RuntimeError::UndefinedVariable { name: "nope".into(),
                                                         line: 7, }));
    }

    #[test]
    fn constants_are_ordinary_bindings() {
        let mut table = SymbolTable::with_constants();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("e", 1), Ok(2.718_281_828_4));
        assert_eq!(table.get("pi", 1), Ok(3.141_592_653_5));
        assert_eq!(table.set("pi", 3.0, 1), Ok(3.0));
    }
}
