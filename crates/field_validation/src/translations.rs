//! Message templates for failed rules.
//!
//! A template may reference:
//! - `{field}`: the failing field name
//! - `{param}`: the whole rule parameter
//! - `{param.N}`: the N-th comma separated part of the parameter

use std::collections::HashMap;

use crate::{ValidationError, rules};

const FALLBACK_TEMPLATE: &str = "{field} failed on the '{tag}' rule";

/// Locale-aware set of message templates keyed by tag name.
#[derive(Clone, Debug)]
pub struct Translator {
    locale: String,
    templates: HashMap<String, String>,
}

impl Translator {
    /// A translator without any template.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            templates: HashMap::new(),
        }
    }

    /// English translator with templates for every built-in tag.
    pub fn english() -> Self {
        let mut translator = Self::new("en");
        for (tag, template) in [
            (rules::REQUIRED, "{field} is a required field"),
            (rules::GT, "{field} must be greater than {param}"),
            (rules::MIN, "{field} must be at least {param} characters in length"),
            (rules::MAX, "{field} must be a maximum of {param} characters in length"),
            (rules::DATETIME, "{field} does not match the {param} format"),
            (rules::UUID, "{field} must be a valid UUID"),
            (rules::ISO4217, "{field} must be a valid currency code"),
        ] {
            translator.templates.insert(tag.to_string(), template.to_string());
        }
        translator
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn has(&self, tag: &str) -> bool {
        self.templates.contains_key(tag)
    }

    /// Register `template` for `tag`.
    ///
    /// An existing template is replaced only when `override_existing` is set.
    pub fn add(
        &mut self,
        tag: &str,
        template: &str,
        override_existing: bool,
    ) -> Result<(), ValidationError> {
        if tag.trim().is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        if self.templates.contains_key(tag) && !override_existing {
            return Err(ValidationError::TranslationExists(tag.to_string()));
        }
        self.templates.insert(tag.to_string(), template.to_string());
        Ok(())
    }

    /// Render the message for `field` failing `tag` with `param`.
    pub fn translate(&self, tag: &str, field: &str, param: &str) -> String {
        match self.templates.get(tag) {
            Some(template) => render(template, field, param),
            None => FALLBACK_TEMPLATE
                .replace("{field}", field)
                .replace("{tag}", tag),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::english()
    }
}

fn render(template: &str, field: &str, param: &str) -> String {
    let mut message = template
        .replace("{field}", field)
        .replace("{param}", param);
    for (index, part) in param.split(',').enumerate() {
        message = message.replace(&format!("{{param.{index}}}"), part.trim());
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_field_and_param_parts() {
        let mut translator = Translator::new("en");
        translator
            .add("between", "{field} must be between {param.0} and {param.1}", false)
            .unwrap();

        assert_eq!(
            translator.translate("between", "age", "18, 99"),
            "age must be between 18 and 99"
        );
    }

    #[test]
    fn english_defaults() {
        let translator = Translator::english();
        assert_eq!(translator.locale(), "en");
        assert_eq!(
            translator.translate("required", "name", ""),
            "name is a required field"
        );
        assert_eq!(
            translator.translate("datetime", "start_date", "%Y-%m-%d"),
            "start_date does not match the %Y-%m-%d format"
        );
    }

    #[test]
    fn refuses_silent_override() {
        let mut translator = Translator::english();
        assert_eq!(
            translator.add("required", "{field} is mandatory", false),
            Err(ValidationError::TranslationExists("required".to_string()))
        );

        translator.add("required", "{field} is mandatory", true).unwrap();
        assert_eq!(translator.translate("required", "name", ""), "name is mandatory");
    }

    #[test]
    fn unknown_tag_falls_back() {
        let translator = Translator::new("en");
        assert_eq!(
            translator.translate("even", "count", ""),
            "count failed on the 'even' rule"
        );
    }
}
