//! Declarative chart specifications.
//!
//! A [`ChartSpec`] is an immutable JSON object in the Vega-Lite grammar.
//! Resolving never touches the base spec: it clones it and writes the
//! computed dimensions into the copy.

mod theme;

pub use theme::{Palette, colors};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{ChartHeight, Dimensions, SpecTarget};
use crate::error::{ChartError, ChartResult};

pub const VEGA_LITE_SCHEMA_V5: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSpec(Value);

impl ChartSpec {
    /// Wraps a JSON value; chart specs are always objects.
    pub fn from_value(value: Value) -> ChartResult<Self> {
        if !value.is_object() {
            return Err(ChartError::InvalidSpec(
                "chart spec root must be a JSON object".to_owned(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Looks up a value by JSON pointer.
    #[must_use]
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    #[must_use]
    pub fn get_f64(&self, pointer: &str) -> Option<f64> {
        self.get(pointer).and_then(Value::as_f64)
    }

    /// Shallow merge of one top-level field.
    #[must_use]
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.to_owned(), value);
        }
        self
    }

    /// Writes `value` at `target`; returns how many locations were written.
    pub fn set(&mut self, target: &SpecTarget, value: Value) -> ChartResult<usize> {
        match target {
            SpecTarget::Pointer(pointer) => {
                set_pointer(&mut self.0, pointer, value)?;
                Ok(1)
            }
            SpecTarget::LayerMark {
                mark_type,
                property,
            } => Ok(set_layer_marks(&mut self.0, mark_type, property, &value)),
        }
    }

    /// Returns a new spec with `dims` merged into a copy of `self`.
    pub fn resolve(&self, dims: &Dimensions) -> ChartResult<Self> {
        let mut resolved = self.clone();
        let height = height_value(dims.height)?;
        match dims.columns {
            Some(columns) => {
                if resolved.get("/spec").is_none() {
                    return Err(ChartError::InvalidSpec(
                        "facet dimensions require an inner `spec`".to_owned(),
                    ));
                }
                resolved = resolved.with_field("columns", Value::from(columns));
                set_pointer(&mut resolved.0, "/spec/width", number(dims.width)?)?;
                set_pointer(&mut resolved.0, "/spec/height", height)?;
            }
            None => {
                resolved = resolved
                    .with_field("width", number(dims.width)?)
                    .with_field("height", height);
            }
        }

        for nested in &dims.nested {
            let written = resolved.set(&nested.target, number(nested.value)?)?;
            if written == 0 {
                debug!(spec_target = ?nested.target, "nested override matched no layer");
            }
        }
        Ok(resolved)
    }

    /// Checks that every present `width`/`height` is a positive finite size.
    pub fn validate(&self) -> ChartResult<()> {
        for pointer in ["/width", "/height", "/spec/width", "/spec/height"] {
            let Some(value) = self.get(pointer) else {
                continue;
            };
            let size = match value {
                Value::Object(map) => map.get("step").and_then(Value::as_f64),
                other => other.as_f64(),
            };
            match size {
                Some(size) if size.is_finite() && size > 0.0 => {}
                _ => {
                    return Err(ChartError::InvalidSpec(format!(
                        "`{pointer}` must be a positive size, got {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.0)
            .map_err(|e| ChartError::InvalidSpec(format!("failed to serialize chart spec: {e}")))
    }
}

fn height_value(height: ChartHeight) -> ChartResult<Value> {
    if !height.is_valid() {
        return Err(ChartError::InvalidSpec(format!(
            "resolved height must be positive and finite, got {height:?}"
        )));
    }
    serde_json::to_value(height)
        .map_err(|e| ChartError::InvalidSpec(format!("failed to encode height: {e}")))
}

fn number(value: f64) -> ChartResult<Value> {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| ChartError::InvalidSpec(format!("non-finite dimension: {value}")))
}

fn set_pointer(root: &mut Value, pointer: &str, value: Value) -> ChartResult<()> {
    let Some((parent, key)) = pointer.rsplit_once('/') else {
        return Err(ChartError::InvalidSpec(format!(
            "json pointer `{pointer}` must start with `/`"
        )));
    };
    let key = key.replace("~1", "/").replace("~0", "~");
    let parent_value = if parent.is_empty() {
        Some(root)
    } else {
        root.pointer_mut(parent)
    };

    match parent_value {
        Some(Value::Object(map)) => {
            map.insert(key, value);
            Ok(())
        }
        Some(Value::Array(items)) => {
            let slot = key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get_mut(index))
                .ok_or_else(|| {
                    ChartError::InvalidSpec(format!(
                        "array index `{key}` out of range in `{pointer}`"
                    ))
                })?;
            *slot = value;
            Ok(())
        }
        _ => Err(ChartError::InvalidSpec(format!(
            "no object or array at `{parent}` for pointer `{pointer}`"
        ))),
    }
}

fn set_layer_marks(root: &mut Value, mark_type: &str, property: &str, value: &Value) -> usize {
    let Some(Value::Array(layers)) = root.get_mut("layer") else {
        return 0;
    };
    let mut written = 0;
    for layer in layers {
        let Some(Value::Object(mark)) = layer.get_mut("mark") else {
            continue;
        };
        if mark.get("type").and_then(Value::as_str) == Some(mark_type) {
            mark.insert(property.to_owned(), value.clone());
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolve_leaves_base_untouched() {
        let base = ChartSpec::from_value(json!({ "mark": "bar" })).expect("object spec");
        let dims = Dimensions::new(640.0, ChartHeight::Step { step: 40.0 });

        let resolved = base.resolve(&dims).expect("resolve");

        assert!(base.get("/width").is_none());
        assert_eq!(resolved.get_f64("/width"), Some(640.0));
        assert_eq!(resolved.get("/height"), Some(&json!({ "step": 40.0 })));
    }

    #[test]
    fn pointer_override_requires_existing_parent() {
        let mut spec = ChartSpec::from_value(json!({ "mark": { "type": "arc" } })).expect("spec");
        spec.set(&SpecTarget::pointer("/mark/outerRadius"), json!(120.0))
            .expect("mark exists");
        assert_eq!(spec.get_f64("/mark/outerRadius"), Some(120.0));

        let missing = spec.set(&SpecTarget::pointer("/encoding/x/title"), json!("x"));
        assert!(missing.is_err());
    }

    #[test]
    fn layer_mark_override_only_touches_matching_layers() {
        let mut spec = ChartSpec::from_value(json!({
            "layer": [
                { "mark": { "type": "point", "size": 28 } },
                { "mark": { "type": "image", "width": 32 } }
            ]
        }))
        .expect("spec");

        let written = spec
            .set(&SpecTarget::layer_mark("image", "width"), json!(20.0))
            .expect("set");
        assert_eq!(written, 1);
        assert_eq!(spec.get_f64("/layer/1/mark/width"), Some(20.0));
        assert!(spec.get("/layer/0/mark/width").is_none());
    }
}
