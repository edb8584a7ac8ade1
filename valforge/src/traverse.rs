//! Visitor traversal over a value tree.
//!
//! [`traverse`] invokes the visitor on every node in pre-order with a
//! computed path string: struct fields join with `.`, elements and map
//! entries append `[...]`, pointer targets wrap as `*(path)`. The first
//! visitor error aborts the walk and propagates.

use crate::value::Value;

/// Visit every nested node of `value`.
///
/// The visitor receives the node, its path, its depth (0 for the root), and
/// the field name when the node is a struct field.
pub fn traverse<E, F>(value: &Value, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&Value, &str, usize, Option<&str>) -> Result<(), E>,
{
    walk(value, String::new(), 0, None, visit)
}

/// Visit only struct fields, at any nesting level.
pub fn traverse_fields<E, F>(value: &Value, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&Value, &str, usize, &str) -> Result<(), E>,
{
    traverse(value, &mut |v, path, depth, field| match field {
        Some(name) => visit(v, path, depth, name),
        None => Ok(()),
    })
}

fn walk<E, F>(
    value: &Value,
    path: String,
    depth: usize,
    field: Option<&str>,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&Value, &str, usize, Option<&str>) -> Result<(), E>,
{
    visit(value, &path, depth, field)?;
    let depth = depth + 1;

    match value {
        Value::Struct(fields) => {
            for (name, v) in fields {
                walk(v, join_field(&path, name), depth, Some(name), visit)?;
            }
        }
        Value::Array(items) | Value::Seq(items) => {
            for (i, v) in items.iter().enumerate() {
                walk(v, format!("{}[{}]", path, i), depth, None, visit)?;
            }
        }
        Value::Map(m) => {
            for (k, v) in m.entries() {
                walk(v, format!("{}[{}]", path, k), depth, None, visit)?;
            }
        }
        Value::Pointer(Some(inner)) => {
            walk(inner, format!("*({})", path), depth, None, visit)?;
        }
        _ => {}
    }

    Ok(())
}

fn join_field(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}
