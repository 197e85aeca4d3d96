//! Name resolution inside a PHP namespace scope.
//!
//! PHP resolves class references against the current namespace and the
//! `use` imports declared in it. Imports reset at every `namespace`
//! declaration, so one resolver is built per namespace scope.

use nvdoc_facts_core::NAMESPACE_SEPARATOR;
use std::collections::HashMap;

/// Names that refer to the enclosing class hierarchy and are never qualified.
const RELATIVE_CLASS_NAMES: &[&str] = &["self", "static", "parent"];

/// Resolves class names written in source to fully-qualified names.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    namespace: String,
    /// Lowercased alias → fully-qualified target
    imports: HashMap<String, String>,
}

impl NameResolver {
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace: String = namespace.into();
        Self {
            namespace: namespace.trim_matches(NAMESPACE_SEPARATOR).to_string(),
            imports: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Register `use <target> as <alias>`.
    pub fn add_import(&mut self, alias: &str, target: &str) {
        self.imports.insert(
            alias.to_ascii_lowercase(),
            target.trim_start_matches(NAMESPACE_SEPARATOR).to_string(),
        );
    }

    /// Register every class import in a `use ...;` statement.
    ///
    /// `use function` and `use const` imports are ignored.
    pub fn add_use_declaration(&mut self, text: &str) {
        for (alias, target) in parse_use_declaration(text) {
            self.add_import(&alias, &target);
        }
    }

    /// Fully-qualified name of a type declared in this scope.
    pub fn qualify_declaration(&self, short_name: &str) -> String {
        if self.namespace.is_empty() {
            short_name.to_string()
        } else {
            format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, short_name)
        }
    }

    /// Resolve a class reference (`extends`, `implements`, trait `use`,
    /// attribute names) to a fully-qualified name.
    pub fn resolve_class(&self, name: &str) -> String {
        let name = name.trim();
        if let Some(qualified) = name.strip_prefix(NAMESPACE_SEPARATOR) {
            return qualified.to_string();
        }
        if RELATIVE_CLASS_NAMES
            .iter()
            .any(|r| r.eq_ignore_ascii_case(name))
        {
            return name.to_string();
        }
        if let Some(rest) = strip_prefix_ignore_case(name, "namespace\\") {
            return self.qualify_declaration(rest);
        }

        let (first, rest) = match name.find(NAMESPACE_SEPARATOR) {
            Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
            None => (name, None),
        };
        if let Some(target) = self.imports.get(&first.to_ascii_lowercase()) {
            return match rest {
                Some(rest) => format!("{}{}{}", target, NAMESPACE_SEPARATOR, rest),
                None => target.clone(),
            };
        }

        self.qualify_declaration(name)
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Split a `use` statement into `(alias, target)` pairs.
///
/// Handles comma lists, `as` aliases and group use (`use A\{B, C as D};`).
pub fn parse_use_declaration(text: &str) -> Vec<(String, String)> {
    let body = text.trim().trim_end_matches(';').trim();
    let Some(body) = strip_prefix_ignore_case(body, "use") else {
        return Vec::new();
    };
    let body = body.trim();
    if is_function_or_const(body) {
        return Vec::new();
    }

    let (prefix, items) = match (body.find('{'), body.rfind('}')) {
        (Some(open), Some(close)) if open < close => (
            body[..open]
                .trim()
                .trim_matches(NAMESPACE_SEPARATOR)
                .to_string(),
            &body[open + 1..close],
        ),
        _ => (String::new(), body),
    };

    items
        .split(',')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() || is_function_or_const(item) {
                return None;
            }
            let (path, alias) = split_alias(item);
            let path = path.trim().trim_start_matches(NAMESPACE_SEPARATOR);
            let target = if prefix.is_empty() {
                path.to_string()
            } else {
                format!("{}{}{}", prefix, NAMESPACE_SEPARATOR, path)
            };
            let alias = match alias {
                Some(a) => a.to_string(),
                None => nvdoc_facts_core::split_namespace(&target).1.to_string(),
            };
            Some((alias, target))
        })
        .collect()
}

fn is_function_or_const(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.starts_with("function ") || lower.starts_with("const ")
}

fn split_alias(item: &str) -> (&str, Option<&str>) {
    let lower = item.to_ascii_lowercase();
    match lower.find(" as ") {
        Some(idx) => (&item[..idx], Some(item[idx + 4..].trim())),
        None => (item, None),
    }
}
