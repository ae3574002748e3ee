//! Named template helpers.
//!
//! A [`HelperRegistry`] is built once at startup and handed to the renderer
//! constructor. Generators never register helpers themselves, so what a
//! template can call does not depend on which generator ran first.

use std::fmt;

use crate::domain::{DomainError, naming};

/// Signature of a helper body. Arguments arrive as strings; undefined or
/// null template values are passed as `""`.
pub type HelperFn = fn(&[&str]) -> String;

#[derive(Clone, Copy)]
pub struct Helper {
    name: &'static str,
    min_args: usize,
    max_args: usize,
    func: HelperFn,
}

impl Helper {
    pub const fn new(name: &'static str, min_args: usize, max_args: usize, func: HelperFn) -> Self {
        Self {
            name,
            min_args,
            max_args,
            func,
        }
    }

    pub const fn unary(name: &'static str, func: HelperFn) -> Self {
        Self::new(name, 1, 1, func)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke with positional arguments, checking arity first.
    pub fn call(&self, args: &[&str]) -> Result<String, DomainError> {
        if args.len() < self.min_args || args.len() > self.max_args {
            return Err(DomainError::HelperArity {
                name: self.name.to_string(),
                expected: if args.len() < self.min_args {
                    self.min_args
                } else {
                    self.max_args
                },
                given: args.len(),
            });
        }
        Ok((self.func)(args))
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helper")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish()
    }
}

/// Ordered set of helpers, unique by name.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    helpers: Vec<Helper>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The case-conversion and localization-key helpers every template
    /// library relies on.
    pub fn with_naming_helpers() -> Self {
        Self {
            helpers: vec![
                Helper::unary("pascal_case", |a| naming::to_pascal_case(a[0])),
                Helper::unary("camel_case", |a| naming::to_camel_case(a[0])),
                Helper::unary("kebab_case", |a| naming::to_kebab_case(a[0])),
                Helper::unary("constant_case", |a| naming::to_constant_case(a[0])),
                Helper::new("localization_key", 1, 2, |a| {
                    naming::to_localization_key(a[0], a.get(1).copied().unwrap_or(""))
                }),
            ],
        }
    }

    pub fn register(&mut self, helper: Helper) -> Result<(), DomainError> {
        if self.get(helper.name).is_some() {
            return Err(DomainError::DuplicateHelper {
                name: helper.name.to_string(),
            });
        }
        self.helpers.push(helper);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Helper> {
        self.helpers.iter().find(|h| h.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Helper> {
        self.helpers.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.helpers.iter().map(|h| h.name).collect()
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}
