//! Structural diff between two documents

use serde::Serialize;
use serde_json::Value;
use similar::TextDiff;

/// Nesting beyond this depth is compared as a single value
const MAX_DIFF_DEPTH: usize = 128;

/// Result of comparing two JSON documents key by key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDiff {
    pub is_equivalent: bool,
    pub changes: Vec<DocumentChange>,
    /// Similarity ratio of the compact serializations (0.0 to 1.0)
    pub similarity: f64,
}

/// A single difference, addressed by a dotted path such as `config.db.host`
/// or `config.items[2]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentChange {
    Added { path: String, value: Value },
    Removed { path: String, value: Value },
    Modified { path: String, old: Value, new: Value },
}

impl DocumentChange {
    pub fn path(&self) -> &str {
        match self {
            Self::Added { path, .. } | Self::Removed { path, .. } | Self::Modified { path, .. } => {
                path
            }
        }
    }
}

impl DocumentDiff {
    pub fn compute(old: &Value, new: &Value) -> Self {
        let mut changes = Vec::new();
        diff_values(old, new, String::new(), &mut changes, 0);

        Self {
            is_equivalent: changes.is_empty(),
            changes,
            similarity: similarity(old, new),
        }
    }
}

fn child_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn diff_values(
    old: &Value,
    new: &Value,
    path: String,
    changes: &mut Vec<DocumentChange>,
    depth: usize,
) {
    if depth > MAX_DIFF_DEPTH {
        if old != new {
            changes.push(DocumentChange::Modified {
                path,
                old: old.clone(),
                new: new.clone(),
            });
        }
        return;
    }

    match (old, new) {
        (Value::Object(old_obj), Value::Object(new_obj)) => {
            for (key, old_value) in old_obj {
                let child = child_key(&path, key);
                match new_obj.get(key) {
                    Some(new_value) => diff_values(old_value, new_value, child, changes, depth + 1),
                    None => changes.push(DocumentChange::Removed {
                        path: child,
                        value: old_value.clone(),
                    }),
                }
            }
            for (key, new_value) in new_obj {
                if !old_obj.contains_key(key) {
                    changes.push(DocumentChange::Added {
                        path: child_key(&path, key),
                        value: new_value.clone(),
                    });
                }
            }
        }
        (Value::Array(old_arr), Value::Array(new_arr)) => {
            for i in 0..old_arr.len().max(new_arr.len()) {
                let child = format!("{}[{}]", path, i);
                match (old_arr.get(i), new_arr.get(i)) {
                    (Some(o), Some(n)) => diff_values(o, n, child, changes, depth + 1),
                    (Some(o), None) => changes.push(DocumentChange::Removed {
                        path: child,
                        value: o.clone(),
                    }),
                    (None, Some(n)) => changes.push(DocumentChange::Added {
                        path: child,
                        value: n.clone(),
                    }),
                    (None, None) => unreachable!(),
                }
            }
        }
        _ => {
            if old != new {
                changes.push(DocumentChange::Modified {
                    path,
                    old: old.clone(),
                    new: new.clone(),
                });
            }
        }
    }
}

fn similarity(old: &Value, new: &Value) -> f64 {
    if old == new {
        return 1.0;
    }
    let old_str = serde_json::to_string(old).unwrap_or_default();
    let new_str = serde_json::to_string(new).unwrap_or_default();
    TextDiff::from_chars(&old_str, &new_str).ratio() as f64
}
