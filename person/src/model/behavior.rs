use thiserror::Error;

use super::person::Person;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BehaviorError {
    /// The hook has a signature but no defined behavior
    #[error("Operation not implemented: {0}")]
    Unimplemented(&'static str),
}

fn unimplemented(operation: &'static str) -> BehaviorError {
    log::warn!("Invoked unimplemented operation: {}", operation);

    BehaviorError::Unimplemented(operation)
}

/// Hooks a person exposes. None of them have a defined effect, so every default fails with
/// `BehaviorError::Unimplemented`; implementors override a hook once it has real behavior.
pub trait PersonBehavior {
    fn instance_method(&self) -> Result<String, BehaviorError> {
        Err(unimplemented("instance_method"))
    }

    fn class_method() -> Result<String, BehaviorError>
    where
        Self: Sized,
    {
        Err(unimplemented("class_method"))
    }

    fn instance_void_method(&self) -> Result<(), BehaviorError> {
        Err(unimplemented("instance_void_method"))
    }

    fn class_void_method() -> Result<(), BehaviorError>
    where
        Self: Sized,
    {
        Err(unimplemented("class_void_method"))
    }
}

impl PersonBehavior for Person {}

/// Free standing hook, not tied to `Person`
pub fn c_function() -> Result<(), BehaviorError> {
    Err(unimplemented("c_function"))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod unimplemented_hooks {
        use super::*;

        #[test_log::test]
        fn instance_method_fails_on_every_call() {
            // Given a populated person
            let person = Person::new_test();

            // Then every call reports the same error
            for _ in 0..3 {
                assert_eq!(
                    person.instance_method(),
                    Err(BehaviorError::Unimplemented("instance_method"))
                );
            }
        }

        #[test_log::test]
        fn instance_void_method_fails_on_every_call() {
            let person = Person::new();

            for _ in 0..3 {
                assert_eq!(
                    person.instance_void_method(),
                    Err(BehaviorError::Unimplemented("instance_void_method"))
                );
            }
        }

        #[test_log::test]
        fn class_methods_fail_without_an_instance() {
            assert_eq!(
                Person::class_method(),
                Err(BehaviorError::Unimplemented("class_method"))
            );
            assert_eq!(
                Person::class_void_method(),
                Err(BehaviorError::Unimplemented("class_void_method"))
            );
        }

        #[test_log::test]
        fn c_function_fails() {
            assert_eq!(c_function(), Err(BehaviorError::Unimplemented("c_function")));
            assert_eq!(c_function(), Err(BehaviorError::Unimplemented("c_function")));
        }

        #[test]
        fn error_names_the_operation() {
            assert_eq!(
                BehaviorError::Unimplemented("class_method").to_string(),
                "Operation not implemented: class_method"
            );
        }
    }

    mod overriding {
        use super::*;

        /// A type that gives one hook a body keeps the defaults for the rest
        struct Greeter;

        impl PersonBehavior for Greeter {
            fn instance_method(&self) -> Result<String, BehaviorError> {
                Ok("hello".to_string())
            }
        }

        #[test]
        fn overridden_hook_replaces_default() {
            assert_eq!(Greeter.instance_method(), Ok("hello".to_string()));
            assert_eq!(
                Greeter.instance_void_method(),
                Err(BehaviorError::Unimplemented("instance_void_method"))
            );
            assert_eq!(
                Greeter::class_method(),
                Err(BehaviorError::Unimplemented("class_method"))
            );
        }
    }
}
