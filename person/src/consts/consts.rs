use std::sync::Arc;

use serde_json::Value;

// Types
/// Platform width signed integer, matches the pointer size of the target
pub type Age = isize;
pub type Number = i32;

/// Ordered sequence that may be held by more than one `Person` at a time
pub type SharedArray = Arc<Vec<Value>>;

// Values
pub const DEFAULT_AGE: Age = 0;
pub const DEFAULT_NUMBER: Number = 0;
