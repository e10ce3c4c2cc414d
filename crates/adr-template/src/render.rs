//! Template rendering over a JSON value context.

use serde_json::Value;

use adr_core::error::TemplateError;

use crate::ast::Node;

pub(crate) fn render(nodes: &[Node], context: &Value) -> Result<String, TemplateError> {
    let mut out = String::new();
    let mut scopes = vec![context];
    render_nodes(nodes, &mut scopes, &mut out)?;
    Ok(out)
}

fn render_nodes<'a>(
    nodes: &[Node],
    scopes: &mut Vec<&'a Value>,
    out: &mut String,
) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(field) => {
                let value =
                    lookup(scopes, field).ok_or_else(|| TemplateError::UnknownField(field.clone()))?;
                push_value(out, value);
            }
            Node::If {
                field,
                then,
                otherwise,
            } => {
                let branch = if lookup(scopes, field).is_some_and(is_truthy) {
                    then
                } else {
                    otherwise
                };
                render_nodes(branch, scopes, out)?;
            }
            Node::Range { field, body } => {
                let value =
                    lookup(scopes, field).ok_or_else(|| TemplateError::UnknownField(field.clone()))?;
                let items = match value {
                    Value::Array(items) => items,
                    Value::Null => continue,
                    _ => return Err(TemplateError::NotIterable(field.clone())),
                };
                for item in items {
                    scopes.push(item);
                    let result = render_nodes(body, scopes, out);
                    scopes.pop();
                    result?;
                }
            }
        }
    }
    Ok(())
}

/// Innermost scope first.
fn lookup<'a>(scopes: &[&'a Value], field: &str) -> Option<&'a Value> {
    scopes
        .iter()
        .rev()
        .find_map(|&scope| scope.as_object().and_then(|map| map.get(field)))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Null => {}
        other => out.push_str(&other.to_string()),
    }
}
