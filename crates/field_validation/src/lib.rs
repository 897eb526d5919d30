//! Declarative field validation.
//!
//! A type opts in by implementing [`Validate`], listing its fields together
//! with a tag string describing the rules each field must satisfy:
//!
//! ```rust
//! use field_validation::{Fields, FieldsValidator, Validate};
//!
//! struct Search {
//!     start_date: String,
//!     end_date: String,
//! }
//!
//! impl Validate for Search {
//!     fn fields(&self) -> Fields<'_> {
//!         Fields::new()
//!             .field(
//!                 "start_date",
//!                 &self.start_date,
//!                 "required|datetime=%Y-%m-%d|lteStrDateField=end_date,%Y-%m-%d",
//!             )
//!             .field("end_date", &self.end_date, "required|datetime=%Y-%m-%d")
//!     }
//! }
//!
//! let validator = FieldsValidator::new();
//! let search = Search {
//!     start_date: "2022-09-13".to_string(),
//!     end_date: "2022-08-13".to_string(),
//! };
//! let errors = validator.validate_fields(&search);
//! assert_eq!(errors[0].field, "start_date");
//! assert_eq!(errors[0].message, "start_date must be before or equal to end_date");
//! ```
//!
//! Rules are separated by `|`; a rule is either `name` or `name=param`.
//! Rules of a field run in order and the first failing one is the only error
//! reported for that field.

use std::{collections::HashMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

pub use error::ValidationError;
pub use translations::Translator;
pub use value::{AsValue, Value};

mod error;
pub mod rules;
mod translations;
mod value;

/// One failed rule, reported against the field that carries it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Types whose fields can be checked by a [`FieldsValidator`].
pub trait Validate {
    fn fields(&self) -> Fields<'_>;
}

#[derive(Clone, Debug)]
struct FieldEntry<'a> {
    name: String,
    value: Value<'a>,
    tags: &'a str,
}

/// Ordered list of fields to validate.
#[derive(Clone, Debug, Default)]
pub struct Fields<'a> {
    entries: Vec<FieldEntry<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its rule tags.
    #[must_use]
    pub fn field<V>(mut self, name: &str, value: &'a V, tags: &'a str) -> Self
    where
        V: AsValue + ?Sized,
    {
        self.entries.push(FieldEntry {
            name: name.to_string(),
            value: value.as_value(),
            tags,
        });
        self
    }

    /// Add a nested object.
    ///
    /// `tags` apply to the object itself (usually `required`); when the object
    /// is present its own fields follow, named `<name>.<field>`.
    #[must_use]
    pub fn nested<T>(mut self, name: &str, value: Option<&'a T>, tags: &'a str) -> Self
    where
        T: Validate,
    {
        self.entries.push(FieldEntry {
            name: name.to_string(),
            value: if value.is_some() {
                Value::Present
            } else {
                Value::Absent
            },
            tags,
        });
        if let Some(inner) = value {
            for entry in inner.fields().entries {
                self.entries.push(FieldEntry {
                    name: format!("{name}.{}", entry.name),
                    ..entry
                });
            }
        }
        self
    }

    fn get(&self, name: &str) -> Option<Value<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }
}

/// What a rule predicate sees of the field under validation.
pub struct FieldLevel<'f, 'a> {
    field: &'f str,
    value: Value<'a>,
    param: &'f str,
    parent: &'f Fields<'a>,
}

impl<'f, 'a> FieldLevel<'f, 'a> {
    /// Full (dot-joined) name of the field.
    pub fn field(&self) -> &'f str {
        self.field
    }

    pub fn value(&self) -> Value<'a> {
        self.value
    }

    pub fn param(&self) -> &'f str {
        self.param
    }

    /// The rule parameter split on `,`, each part trimmed.
    pub fn param_parts(&self) -> Vec<&'f str> {
        self.param.split(',').map(str::trim).collect()
    }

    /// Value of another field of the same parent object.
    pub fn sibling(&self, name: &str) -> Option<Value<'a>> {
        let qualified = match self.field.rsplit_once('.') {
            Some((parent, _)) => format!("{parent}.{name}"),
            None => name.to_string(),
        };
        self.parent.get(&qualified)
    }
}

/// Rule predicate: `true` when the field passes.
pub type Predicate = Arc<dyn Fn(&FieldLevel<'_, '_>) -> bool + Send + Sync>;

#[derive(Clone)]
struct Rule {
    predicate: Predicate,
    call_even_if_absent: bool,
}

/// A custom rule: predicate and message template registered together.
pub struct CustomRule {
    pub tag: String,
    pub predicate: Predicate,
    pub template: String,
    pub call_even_if_absent: bool,
}

impl CustomRule {
    pub fn new(
        tag: impl Into<String>,
        template: impl Into<String>,
        predicate: impl Fn(&FieldLevel<'_, '_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            tag: tag.into(),
            predicate: Arc::new(predicate),
            template: template.into(),
            call_even_if_absent: false,
        }
    }

    /// Run the predicate for absent values too.
    #[must_use]
    pub fn call_even_if_absent(mut self) -> Self {
        self.call_even_if_absent = true;
        self
    }
}

/// Registry of rules plus the translator used to word failures.
///
/// Registering a tag that already exists (built-in or custom) is rejected
/// with [`ValidationError::TagCollision`]. Translations can be replaced on
/// purpose through [`FieldsValidator::register_translation`].
#[derive(Clone)]
pub struct FieldsValidator {
    rules: HashMap<String, Rule>,
    translator: Translator,
}

impl FieldsValidator {
    /// English validator with every built-in rule and `lteStrDateField`.
    pub fn new() -> Self {
        let mut validator = Self::with_translator(Translator::english());
        validator.register_builtin(rules::REQUIRED, true, rules::required);
        validator.register_builtin(rules::GT, false, rules::gt);
        validator.register_builtin(rules::MIN, false, rules::min);
        validator.register_builtin(rules::MAX, false, rules::max);
        validator.register_builtin(rules::DATETIME, false, rules::datetime);
        validator.register_builtin(rules::UUID, false, rules::uuid);
        validator.register_builtin(rules::ISO4217, false, rules::iso4217);
        validator.register_builtin(
            rules::LTE_STR_DATE_FIELD,
            true,
            rules::lte_str_date_field,
        );
        if let Err(err) = validator.translator.add(
            rules::LTE_STR_DATE_FIELD,
            rules::LTE_STR_DATE_FIELD_TEMPLATE,
            true,
        ) {
            tracing::error!("failed to register {} translation: {err}", rules::LTE_STR_DATE_FIELD);
        }
        validator
    }

    /// A validator without any rule.
    pub fn with_translator(translator: Translator) -> Self {
        Self {
            rules: HashMap::new(),
            translator,
        }
    }

    fn register_builtin(
        &mut self,
        tag: &str,
        call_even_if_absent: bool,
        predicate: fn(&FieldLevel<'_, '_>) -> bool,
    ) {
        self.rules.insert(
            tag.to_string(),
            Rule {
                predicate: Arc::new(predicate),
                call_even_if_absent,
            },
        );
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn has_rule(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Register a predicate under `tag`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyTag`] for a blank tag,
    /// [`ValidationError::TagCollision`] when the tag is already registered.
    pub fn register_validation(
        &mut self,
        tag: &str,
        call_even_if_absent: bool,
        predicate: impl Fn(&FieldLevel<'_, '_>) -> bool + Send + Sync + 'static,
    ) -> Result<(), ValidationError> {
        self.insert_rule(tag, call_even_if_absent, Arc::new(predicate))
    }

    fn insert_rule(
        &mut self,
        tag: &str,
        call_even_if_absent: bool,
        predicate: Predicate,
    ) -> Result<(), ValidationError> {
        if tag.trim().is_empty() || tag.contains(['|', '=']) {
            return Err(ValidationError::EmptyTag);
        }
        if self.rules.contains_key(tag) {
            return Err(ValidationError::TagCollision(tag.to_string()));
        }
        self.rules.insert(
            tag.to_string(),
            Rule {
                predicate,
                call_even_if_absent,
            },
        );
        tracing::debug!(tag, "validation rule registered");
        Ok(())
    }

    /// Register the message template of `tag`, independently of its predicate.
    ///
    /// # Errors
    ///
    /// [`ValidationError::TranslationExists`] when a template exists and
    /// `override_existing` is false.
    pub fn register_translation(
        &mut self,
        tag: &str,
        template: &str,
        override_existing: bool,
    ) -> Result<(), ValidationError> {
        self.translator.add(tag, template, override_existing)
    }

    /// Register predicate and template of a custom rule in one go.
    ///
    /// Nothing is registered when either part is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`FieldsValidator::register_validation`] and
    /// [`FieldsValidator::register_translation`] (without override).
    pub fn register_rule(&mut self, rule: CustomRule) -> Result<(), ValidationError> {
        if self.translator.has(&rule.tag) {
            return Err(ValidationError::TranslationExists(rule.tag));
        }
        self.insert_rule(&rule.tag, rule.call_even_if_absent, rule.predicate)?;
        self.translator.add(&rule.tag, &rule.template, false)
    }

    /// Check every field of `value`, returning one error per failing field.
    pub fn validate_fields<T>(&self, value: &T) -> Vec<FieldError>
    where
        T: Validate + ?Sized,
    {
        let fields = value.fields();
        let mut errors = Vec::new();

        for entry in &fields.entries {
            for (tag, param) in parse_tags(entry.tags) {
                if let Some(error) = self.check(&fields, entry, tag, param) {
                    errors.push(error);
                    break;
                }
            }
        }

        errors
    }

    fn check(
        &self,
        fields: &Fields<'_>,
        entry: &FieldEntry<'_>,
        tag: &str,
        param: &str,
    ) -> Option<FieldError> {
        let Some(rule) = self.rules.get(tag) else {
            tracing::warn!(field = %entry.name, tag, "unknown validation rule");
            return Some(FieldError {
                field: entry.name.clone(),
                message: format!("{} uses unknown validation rule '{tag}'", entry.name),
            });
        };

        if entry.value == Value::Absent && !rule.call_even_if_absent {
            return None;
        }

        let level = FieldLevel {
            field: &entry.name,
            value: entry.value,
            param,
            parent: fields,
        };
        if (rule.predicate)(&level) {
            return None;
        }

        Some(FieldError {
            field: entry.name.clone(),
            message: self.translator.translate(tag, &entry.name, param),
        })
    }
}

impl Default for FieldsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&String> = self.rules.keys().collect();
        tags.sort();
        f.debug_struct("FieldsValidator")
            .field("rules", &tags)
            .field("locale", &self.translator.locale())
            .finish()
    }
}

fn parse_tags(tags: &str) -> impl Iterator<Item = (&str, &str)> {
    tags.split('|')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(|rule| {
            rule.split_once('=')
                .map_or((rule, ""), |(tag, param)| (tag.trim(), param.trim()))
        })
}
