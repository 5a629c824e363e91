use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::consts::consts::{Age, Number, SharedArray, DEFAULT_AGE, DEFAULT_NUMBER};

/// A plain data record. Scalars and `name` are owned by the instance, `array` is a shared handle
/// so duplicates of a person see the same sequence until one of them writes to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    name: String,
    age: Age,
    number: Number,
    is_ok: bool,
    array: SharedArray,
}

impl Person {
    pub fn new() -> Self {
        Person {
            name: String::new(),
            age: DEFAULT_AGE,
            number: DEFAULT_NUMBER,
            is_ok: false,
            array: Arc::new(Vec::new()),
        }
    }

    pub fn new_test() -> Self {
        Person::new()
            .with_name("Alice")
            .with_age(30)
            .with_number(7)
            .with_is_ok(true)
            .with_values(vec![Value::from(1), Value::from(2), Value::from(3)])
    }

    // Builder, same shape as the options builders: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_age(mut self, age: Age) -> Self {
        self.age = age;
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = number;
        self
    }

    pub fn with_is_ok(mut self, is_ok: bool) -> Self {
        self.is_ok = is_ok;
        self
    }

    pub fn with_array(mut self, array: SharedArray) -> Self {
        self.array = array;
        self
    }

    /// Takes ownership of `values` and wraps them in a new, unshared handle
    pub fn with_values(self, values: Vec<Value>) -> Self {
        self.with_array(Arc::new(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores a copy of the text, the caller keeps whatever it passed in
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn set_age(&mut self, age: Age) {
        self.age = age;
    }

    pub fn number(&self) -> Number {
        self.number
    }

    pub fn set_number(&mut self, number: Number) {
        self.number = number;
    }

    pub fn is_ok(&self) -> bool {
        self.is_ok
    }

    pub fn set_is_ok(&mut self, is_ok: bool) {
        self.is_ok = is_ok;
    }

    pub fn array(&self) -> &SharedArray {
        &self.array
    }

    pub fn set_array(&mut self, array: SharedArray) {
        self.array = array;
    }

    /// Mutable view of the sequence. If the sequence is shared with another owner it is copied
    /// first, so the other owners never observe the write.
    pub fn array_mut(&mut self) -> &mut Vec<Value> {
        Arc::make_mut(&mut self.array)
    }

    /// Field-wise copy. `name` gets new storage, `array` is the same sequence behind a new handle.
    pub fn duplicate(&self) -> Person {
        log::debug!(
            "Duplicating person '{}', array currently held by {} handles",
            self.name,
            Arc::strong_count(&self.array)
        );

        self.clone()
    }

    /// Like `duplicate`, but the sequence is copied into new storage too
    pub fn deep_duplicate(&self) -> Person {
        log::debug!("Deep duplicating person '{}'", self.name);

        Person {
            array: Arc::new(self.array.to_vec()),
            ..self.clone()
        }
    }

    pub fn shares_array_with(&self, other: &Person) -> bool {
        Arc::ptr_eq(&self.array, &other.array)
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::new()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(name: {:?}, age: {}, number: {}, is_ok: {}, array: {} items)",
            self.name,
            self.age,
            self.number,
            self.is_ok,
            self.array.len()
        )
    }
}
