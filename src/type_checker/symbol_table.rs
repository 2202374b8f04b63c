use std::collections::HashMap;

use crate::lexer::tokens::DataType;

/// Name -> declared type, built during one semantic pass and then dropped.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, DataType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: HashMap::new(),
        }
    }

    /// Binds `variable_name` to `variable_type`, returning the previous
    /// binding if the name was already declared.
    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: DataType,
    ) -> Option<DataType> {
        self.variable_lookup.insert(variable_name, variable_type)
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<DataType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn is_declared(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
