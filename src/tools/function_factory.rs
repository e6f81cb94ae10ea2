use super::{tool::ToolRegistry, Tool};
use crate::schemas::validator;
use crate::{PlannerError, Result};
use serde_json::Value;

/// Factory for creating and managing tool execution
#[derive(Debug)]
pub struct FunctionFactory {
    registry: ToolRegistry,
}

impl FunctionFactory {
    /// Create a new function factory
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a tool call by name. Arguments are checked against the
    /// tool's input schema before the tool runs.
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| PlannerError::ToolNotFound(function_name.to_string()))?;

        validator::validate_arguments(&tool.parameters_schema(), &parameters)?;

        tool.execute(parameters).await
    }

    /// Descriptors for every registered tool, in listing shape
    pub fn describe_tools(&self) -> Vec<Value> {
        self.registry.to_descriptors()
    }

    /// Check if a tool exists
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}

impl Default for FunctionFactory {
    fn default() -> Self {
        Self::new()
    }
}
