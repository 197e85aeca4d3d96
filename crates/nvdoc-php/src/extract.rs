//! Declaration extraction from a PHP syntax tree.
//!
//! Walks top-level statements, bracketed namespace bodies and conditional
//! blocks for `class`, `interface`, `trait` and `enum` declarations and
//! records their own members. Function bodies are not entered. Inherited
//! members are merged later by the catalog.

use crate::names::NameResolver;
use nvdoc_facts_core::{
    ConstantInfo, MethodInfo, ParameterInfo, PropertyInfo, TypeDescriptor, TypeKind, Visibility,
};
use std::path::Path;
use tree_sitter::Node;

/// Interfaces every PHP enum implements implicitly.
const UNIT_ENUM: &str = "UnitEnum";
const BACKED_ENUM: &str = "BackedEnum";

/// Node kinds that spell a type in declarations.
const TYPE_NODE_KINDS: &[&str] = &[
    "named_type",
    "optional_type",
    "primitive_type",
    "union_type",
    "intersection_type",
    "disjunctive_normal_form_type",
    "bottom_type",
];

/// Statements whose bodies may hold conditionally declared types.
const BLOCK_STATEMENT_KINDS: &[&str] = &[
    "if_statement",
    "else_if_clause",
    "else_clause",
    "compound_statement",
    "colon_block",
    "declare_statement",
];

fn text<'a>(node: &Node, content: &'a str) -> &'a str {
    &content[node.byte_range()]
}

/// Extract every class-like declaration from a parsed file.
pub fn extract_declarations(root: &Node, content: &str, file: Option<&Path>) -> Vec<TypeDescriptor> {
    let mut declarations = Vec::new();
    let mut resolver = NameResolver::new("");
    extract_statements(root, content, file, &mut resolver, &mut declarations);
    declarations
}

fn extract_statements(
    parent: &Node,
    content: &str,
    file: Option<&Path>,
    resolver: &mut NameResolver,
    declarations: &mut Vec<TypeDescriptor>,
) {
    let mut cursor = parent.walk();
    let statements: Vec<Node> = parent.named_children(&mut cursor).collect();

    for statement in statements {
        match statement.kind() {
            "namespace_definition" => {
                let name = statement
                    .child_by_field_name("name")
                    .map(|n| text(&n, content))
                    .unwrap_or("");
                match statement.child_by_field_name("body") {
                    // namespace Foo { ... }
                    Some(body) => {
                        let mut scoped = NameResolver::new(name);
                        extract_statements(&body, content, file, &mut scoped, declarations);
                    }
                    // namespace Foo; applies to every following statement
                    None => *resolver = NameResolver::new(name),
                }
            }
            "namespace_use_declaration" => resolver.add_use_declaration(text(&statement, content)),
            "class_declaration" | "interface_declaration" | "trait_declaration"
            | "enum_declaration" => {
                if let Some(desc) = extract_type(&statement, content, file, resolver) {
                    declarations.push(desc);
                }
            }
            // if (!class_exists(...)) { class ... }
            kind if BLOCK_STATEMENT_KINDS.contains(&kind) => {
                extract_statements(&statement, content, file, resolver, declarations);
            }
            _ => {}
        }
    }
}

fn extract_type(
    node: &Node,
    content: &str,
    file: Option<&Path>,
    resolver: &NameResolver,
) -> Option<TypeDescriptor> {
    let name_node = node.child_by_field_name("name")?;
    let kind = match node.kind() {
        "interface_declaration" => TypeKind::Interface,
        "trait_declaration" => TypeKind::Trait,
        "enum_declaration" => TypeKind::Enum,
        _ => TypeKind::Class,
    };

    let mut desc = TypeDescriptor::new(resolver.qualify_declaration(text(&name_node, content)), kind);
    desc.file = file.map(Path::to_path_buf);
    desc.doc_comment = doc_comment(node, content);
    desc.attributes = attributes(node, content, resolver);

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "abstract_modifier" => desc.is_abstract = true,
            "final_modifier" => desc.is_final = true,
            "readonly_modifier" => desc.is_readonly = true,
            "base_clause" => {
                let names = clause_names(&child, content, resolver);
                if kind == TypeKind::Interface {
                    desc.interfaces.extend(names);
                } else {
                    desc.parent = names.into_iter().next();
                }
            }
            "class_interface_clause" => desc.interfaces.extend(clause_names(&child, content, resolver)),
            _ => {}
        }
    }

    let body = node.child_by_field_name("body");

    if kind == TypeKind::Enum {
        desc.interfaces.push(UNIT_ENUM.to_string());
        // enum Suit: string { ... }
        let header_end = body.map(|b| b.start_byte()).unwrap_or(node.end_byte());
        if content[name_node.end_byte()..header_end].contains(':') {
            desc.interfaces.push(BACKED_ENUM.to_string());
        }
    }

    if let Some(body) = body {
        let mut cursor = body.walk();
        let members: Vec<Node> = body.named_children(&mut cursor).collect();
        for member in members {
            match member.kind() {
                "method_declaration" => {
                    if let Some((method, promoted)) =
                        extract_method(&member, content, resolver, &desc.name, kind)
                    {
                        desc.methods.push(method);
                        desc.properties.extend(promoted);
                    }
                }
                "property_declaration" => desc
                    .properties
                    .extend(extract_properties(&member, content, resolver, &desc.name)),
                "const_declaration" => desc
                    .constants
                    .extend(extract_constants(&member, content, &desc.name)),
                "enum_case" => {
                    if let Some(case) = extract_enum_case(&member, content, &desc.name) {
                        desc.constants.push(case);
                    }
                }
                "use_declaration" => desc.traits.extend(clause_names(&member, content, resolver)),
                _ => {}
            }
        }
    }

    Some(desc)
}

/// The `/** ... */` comment immediately preceding a declaration, verbatim.
fn doc_comment(node: &Node, content: &str) -> Option<String> {
    let prev = node.prev_named_sibling()?;
    if prev.kind() != "comment" {
        return None;
    }
    let comment = text(&prev, content);
    comment.starts_with("/**").then(|| comment.to_string())
}

/// `#[...]` attributes on a declaration, with resolved names.
fn attributes(node: &Node, content: &str, resolver: &NameResolver) -> Vec<String> {
    let mut attrs = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "attribute_list" {
            collect_attributes(&child, content, resolver, &mut attrs);
        }
    }
    attrs
}

fn collect_attributes(node: &Node, content: &str, resolver: &NameResolver, attrs: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "attribute" {
            let raw = text(&child, content).trim();
            let (name, args) = match raw.find('(') {
                Some(idx) => (&raw[..idx], &raw[idx..]),
                None => (raw, ""),
            };
            attrs.push(format!("{}{}", resolver.resolve_class(name), args));
        } else {
            collect_attributes(&child, content, resolver, attrs);
        }
    }
}

/// Class names listed in `extends`, `implements` or a trait `use`.
fn clause_names(node: &Node, content: &str, resolver: &NameResolver) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| matches!(c.kind(), "name" | "qualified_name" | "relative_name"))
        .map(|c| resolver.resolve_class(text(&c, content)))
        .collect()
}

fn type_hint(node: &Node, content: &str) -> Option<String> {
    if let Some(t) = node.child_by_field_name("type") {
        return Some(text(&t, content).trim().to_string());
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|c| TYPE_NODE_KINDS.contains(&c.kind()))
        .map(|t| text(&t, content).trim().to_string())
}

fn find_named_child<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).find(|c| c.kind() == kind)
}

fn has_child(node: &Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == kind)
}

/// Modifier keywords on a member.
#[derive(Debug, Default)]
struct Modifiers {
    visibility: Option<Visibility>,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    is_readonly: bool,
}

impl Modifiers {
    fn of(node: &Node, content: &str) -> Self {
        let mut modifiers = Self::default();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "visibility_modifier" => {
                    // `private(set)` asymmetric visibility: the read side is what callers see
                    let keyword = text(&child, content)
                        .split('(')
                        .next()
                        .unwrap_or_default();
                    modifiers.visibility = Visibility::from_keyword(keyword.trim());
                }
                "static_modifier" => modifiers.is_static = true,
                "abstract_modifier" => modifiers.is_abstract = true,
                "final_modifier" => modifiers.is_final = true,
                "readonly_modifier" => modifiers.is_readonly = true,
                _ => {}
            }
        }
        modifiers
    }

    fn visibility(&self) -> Visibility {
        self.visibility.unwrap_or_default()
    }
}

fn extract_method(
    node: &Node,
    content: &str,
    resolver: &NameResolver,
    owner: &str,
    owner_kind: TypeKind,
) -> Option<(MethodInfo, Vec<PropertyInfo>)> {
    let name = text(&node.child_by_field_name("name")?, content).to_string();
    let modifiers = Modifiers::of(node, content);
    let doc = doc_comment(node, content);

    let mut parameters = Vec::new();
    let mut promoted = Vec::new();
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        let params: Vec<Node> = params.named_children(&mut cursor).collect();
        for param in params {
            if !matches!(
                param.kind(),
                "simple_parameter" | "variadic_parameter" | "property_promotion_parameter"
            ) {
                continue;
            }
            let Some(info) = extract_parameter(&param, content) else {
                continue;
            };
            if info.is_promoted {
                let param_modifiers = Modifiers::of(&param, content);
                promoted.push(PropertyInfo {
                    name: info.name.clone(),
                    visibility: param_modifiers.visibility(),
                    is_static: false,
                    is_readonly: param_modifiers.is_readonly,
                    type_hint: info.type_hint.clone(),
                    default_value: None,
                    doc_comment: None,
                    attributes: attributes(&param, content, resolver),
                    declaring_type: owner.to_string(),
                });
            }
            parameters.push(info);
        }
    }

    let method = MethodInfo {
        name,
        visibility: modifiers.visibility(),
        is_static: modifiers.is_static,
        is_abstract: modifiers.is_abstract || owner_kind == TypeKind::Interface,
        is_final: modifiers.is_final,
        parameters,
        return_type: node
            .child_by_field_name("return_type")
            .map(|t| text(&t, content).trim().to_string()),
        doc_comment: doc,
        attributes: attributes(node, content, resolver),
        declaring_type: owner.to_string(),
    };
    Some((method, promoted))
}

fn extract_parameter(param: &Node, content: &str) -> Option<ParameterInfo> {
    let name_node = param
        .child_by_field_name("name")
        .or_else(|| find_named_child(param, "variable_name"))
        .or_else(|| find_named_child(param, "by_ref"))?;
    let raw_name = text(&name_node, content);
    let is_reference = name_node.kind() == "by_ref"
        || raw_name.starts_with('&')
        || param.child_by_field_name("reference_modifier").is_some()
        || has_child(param, "reference_modifier");
    let name = raw_name
        .trim_start_matches('&')
        .trim()
        .trim_start_matches('$')
        .to_string();

    Some(ParameterInfo {
        name,
        type_hint: type_hint(param, content),
        default_value: param
            .child_by_field_name("default_value")
            .map(|d| text(&d, content).trim().to_string()),
        is_variadic: param.kind() == "variadic_parameter" || has_child(param, "..."),
        is_reference,
        is_promoted: param.kind() == "property_promotion_parameter",
    })
}

fn extract_properties(
    node: &Node,
    content: &str,
    resolver: &NameResolver,
    owner: &str,
) -> Vec<PropertyInfo> {
    let modifiers = Modifiers::of(node, content);
    let type_hint = type_hint(node, content);
    let doc = doc_comment(node, content);
    let attrs = attributes(node, content, resolver);

    let mut cursor = node.walk();
    let elements: Vec<Node> = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "property_element")
        .collect();

    elements
        .into_iter()
        .filter_map(|element| {
            let var = element
                .child_by_field_name("name")
                .or_else(|| find_named_child(&element, "variable_name"))?;
            let var_text = text(&var, content);
            let default_value = element
                .child_by_field_name("default_value")
                .map(|d| text(&d, content).trim().to_string())
                .or_else(|| {
                    // older grammars wrap the default in a `property_initializer`
                    let element_text = text(&element, content);
                    element_text[var.end_byte() - element.start_byte()..]
                        .trim()
                        .strip_prefix('=')
                        .map(|v| v.trim().to_string())
                });
            Some(PropertyInfo {
                name: var_text.trim_start_matches('$').to_string(),
                visibility: modifiers.visibility(),
                is_static: modifiers.is_static,
                is_readonly: modifiers.is_readonly,
                type_hint: type_hint.clone(),
                default_value,
                doc_comment: doc.clone(),
                attributes: attrs.clone(),
                declaring_type: owner.to_string(),
            })
        })
        .collect()
}

fn extract_constants(node: &Node, content: &str, owner: &str) -> Vec<ConstantInfo> {
    let modifiers = Modifiers::of(node, content);
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == "const_element")
        .filter_map(|element| {
            let (name, value) = text(&element, content).split_once('=')?;
            Some(ConstantInfo {
                name: name.trim().to_string(),
                value: Some(value.trim().to_string()),
                visibility: modifiers.visibility(),
                is_enum_case: false,
                declaring_type: owner.to_string(),
            })
        })
        .collect()
}

fn extract_enum_case(node: &Node, content: &str, owner: &str) -> Option<ConstantInfo> {
    let name = text(&node.child_by_field_name("name")?, content).to_string();
    let value = text(node, content)
        .trim_end()
        .trim_end_matches(';')
        .split_once('=')
        .map(|(_, v)| v.trim().to_string());
    Some(ConstantInfo {
        name,
        value,
        visibility: Visibility::Public,
        is_enum_case: true,
        declaring_type: owner.to_string(),
    })
}
