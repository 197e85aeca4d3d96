//! Member types for type facts (methods, properties, constants).

use serde::{Deserialize, Serialize};

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    /// Parse a PHP visibility keyword (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// A single parameter of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Name without the leading `$`
    pub name: String,
    pub type_hint: Option<String>,
    pub default_value: Option<String>,
    pub is_variadic: bool,
    pub is_reference: bool,
    /// True for constructor-promoted parameters (`public function __construct(private int $x)`)
    pub is_promoted: bool,
}

impl ParameterInfo {
    pub fn is_required(&self) -> bool {
        self.default_value.is_none() && !self.is_variadic
    }
}

/// A method declared on (or inherited by) a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub parameters: Vec<ParameterInfo>,
    pub return_type: Option<String>,
    pub doc_comment: Option<String>,
    pub attributes: Vec<String>,
    /// Fully-qualified name of the type that declares this method
    pub declaring_type: String,
}

/// A property declared on (or inherited by) a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Name without the leading `$`
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_readonly: bool,
    pub type_hint: Option<String>,
    pub default_value: Option<String>,
    pub doc_comment: Option<String>,
    pub attributes: Vec<String>,
    pub declaring_type: String,
}

/// A class constant or enum case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantInfo {
    pub name: String,
    /// Source text of the value expression; `None` for pure enum cases
    pub value: Option<String>,
    pub visibility: Visibility,
    pub is_enum_case: bool,
    pub declaring_type: String,
}
