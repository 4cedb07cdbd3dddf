use std::collections::BTreeMap;

use crate::color::Color;
use crate::error::{Result, StyleError};

/// A single parameter value passed to a style function
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Number(f32),
    Text(String),
    Color(Color),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Number(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value as f32)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<Color> for ParamValue {
    fn from(value: Color) -> Self {
        ParamValue::Color(value)
    }
}

/// Named parameters for one modifier application.
///
/// Accessors take the modifier's name so a bad value can be reported
/// against the modifier that asked for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModifierParams {
    values: BTreeMap<String, ParamValue>,
}

impl ModifierParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bool(&self, modifier: &str, key: &str) -> Result<bool> {
        match self.values.get(key) {
            Some(ParamValue::Bool(value)) => Ok(*value),
            _ => Err(invalid(modifier, key, "a bool")),
        }
    }

    pub fn number(&self, modifier: &str, key: &str) -> Result<f32> {
        match self.values.get(key) {
            Some(ParamValue::Number(value)) => Ok(*value),
            _ => Err(invalid(modifier, key, "a number")),
        }
    }

    /// Like [`number`](Self::number), but a missing key yields `default`.
    /// A present value of the wrong type is still an error.
    pub fn number_or(&self, modifier: &str, key: &str, default: f32) -> Result<f32> {
        match self.values.get(key) {
            None => Ok(default),
            Some(_) => self.number(modifier, key),
        }
    }

    pub fn text(&self, modifier: &str, key: &str) -> Result<&str> {
        match self.values.get(key) {
            Some(ParamValue::Text(value)) => Ok(value.as_str()),
            _ => Err(invalid(modifier, key, "text")),
        }
    }

    /// Accepts a color value, or text naming a color (`"red"`, `"#ff0000"`)
    pub fn color(&self, modifier: &str, key: &str) -> Result<Color> {
        match self.values.get(key) {
            Some(ParamValue::Color(color)) => Ok(*color),
            Some(ParamValue::Text(text)) => text
                .parse()
                .map_err(|_| invalid(modifier, key, "a color")),
            _ => Err(invalid(modifier, key, "a color")),
        }
    }
}

fn invalid(modifier: &str, key: &str, expected: &'static str) -> StyleError {
    StyleError::InvalidParam {
        modifier: modifier.to_string(),
        param: key.to_string(),
        expected,
    }
}
