//! System message policy applied to every upstream call

use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};

/// Built-in instruction: emit a single JSON array of MUI components
pub const MUI_COMPONENTS_SYSTEM_MESSAGE: &str = r#"
You are an AI that generates only valid JSON arrays representing React.js frontend components using MUI (Material-UI). Follow these strict rules:

- Format:
    - Output only a valid JSON array (starting with [ and ending with ]).
    - No explanations, no markdown, and no extra text.
    - Do not include ```json, or any other characters before or after the JSON.

- Structure:
    Each item in the array must be an object with:
    - "type": The MUI component name as a string (e.g., "Button", "Typography", "Box").
    - "props": An object containing the component's props (do NOT include "children" here).
    - "children": Either:
        - A string (for text content),
        - A single component object,
        - Or an array of component objects.

- Component-specific behavior:
    - If a component accepts other components as props (like "startIcon" or "endIcon" in Button), embed that subcomponent directly as a nested object inside the appropriate prop.
    - Do not place "children" inside "props". Always separate it as its own key.

- Styling and Design:
    - Use these design constants:
        - Primary color: #1B374C
        - Accent color: #F39325
        - Background: #F5F5F6
        - Font family: 'Fira Sans' (use sx where needed)

- Strict Rules:
    - Always return a pure JSON array.
    - Do not include any explanation or metadata.
    - Do not use markdown fences (like ```json).
"#;

/// Fixed system message prefixed to every prompt
///
/// Only ever built from operator configuration; request data never
/// reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptTemplate
{   system_message: String
}

impl PromptTemplate
{   /// Wrap an operator-supplied system message
    pub fn new(system_message: impl Into<String>)
      -> Result<Self, crate::error::Error>
    {   let system_message = system_message.into();
        if system_message.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "system message must not be empty".to_string()
            ));
        }
        Ok(PromptTemplate { system_message })
    }

    /// Read the system message from a text file
    pub fn from_file(path: &Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading system message from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::new(contents)
    }

    pub fn system_message(&self) -> &str
    {   &self.system_message
    }
}

impl TryFrom<String> for PromptTemplate
{   type Error = crate::error::Error;

    fn try_from(system_message: String) -> Result<Self, Self::Error>
    {   Self::new(system_message)
    }
}

impl From<PromptTemplate> for String
{   fn from(template: PromptTemplate) -> Self
    {   template.system_message
    }
}

impl Default for PromptTemplate
{   fn default() -> Self
    {   PromptTemplate
        {   system_message: MUI_COMPONENTS_SYSTEM_MESSAGE.to_string()
        }
    }
}
