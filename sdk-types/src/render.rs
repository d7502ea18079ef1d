/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Diagnostic rendering for generated shapes.
//!
//! A shape renders as `{name: value,name2: value2}`: wire field names, in
//! declaration order, set fields only. Output is for humans reading logs
//! and assertions, never for the wire.

use crate::instant::Format;
use crate::{Blob, Instant};
use std::collections::HashMap;
use std::fmt;

/// How a single field value is written into a shape rendering.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for i64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for f64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Render for Instant {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt(Format::DateTime))
    }
}

impl Render for Blob {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64::encode(self.as_ref()))
    }
}

impl<T> Render for Vec<T>
where
    T: Render,
{
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<K, V> Render for HashMap<K, V>
where
    K: Render + Ord,
    V: Render,
{
    // keys are sorted so output is deterministic across runs
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.write_str("{")?;
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.render(f)?;
            f.write_str(": ")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the `{name: value}` listing for one shape.
///
/// Generated `Display` implementations construct one of these, call
/// [`ShapeFormatter::field`] once per field in declaration order, and
/// finish with [`ShapeFormatter::finish`]. Unset fields are omitted
/// entirely rather than written as a null marker.
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    fields_written: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(ShapeFormatter {
            f,
            fields_written: false,
        })
    }

    pub fn field<T>(&mut self, name: &str, value: &Option<T>) -> fmt::Result
    where
        T: Render,
    {
        if let Some(value) = value {
            if self.fields_written {
                self.f.write_str(",")?;
            }
            write!(self.f, "{}: ", name)?;
            value.render(self.f)?;
            self.fields_written = true;
        }
        Ok(())
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use crate::render::ShapeFormatter;
    use crate::Instant;
    use std::collections::HashMap;
    use std::fmt;

    struct Sample {
        name: Option<String>,
        threshold: Option<f64>,
        count: Option<i32>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut shape = ShapeFormatter::new(f)?;
            shape.field("name", &self.name)?;
            shape.field("threshold", &self.threshold)?;
            shape.field("count", &self.count)?;
            shape.finish()
        }
    }

    #[test]
    fn unset_fields_are_omitted() {
        let sample = Sample {
            name: Some("abort".to_string()),
            threshold: Some(10.5),
            count: None,
        };
        assert_eq!(sample.to_string(), "{name: abort,threshold: 10.5}");
    }

    #[test]
    fn fully_unset_shape_renders_empty_braces() {
        let sample = Sample {
            name: None,
            threshold: None,
            count: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }

    #[test]
    fn leading_unset_field_leaves_no_separator_artifacts() {
        let sample = Sample {
            name: None,
            threshold: None,
            count: Some(3),
        };
        assert_eq!(sample.to_string(), "{count: 3}");
    }

    struct MapSample {
        attributes: Option<HashMap<String, String>>,
    }

    impl fmt::Display for MapSample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut shape = ShapeFormatter::new(f)?;
            shape.field("attributes", &self.attributes)?;
            shape.finish()
        }
    }

    #[test]
    fn map_values_render_sorted_by_key() {
        let mut attributes = HashMap::new();
        attributes.insert("model".to_string(), "x1".to_string());
        attributes.insert("color".to_string(), "red".to_string());
        let sample = MapSample {
            attributes: Some(attributes),
        };
        assert_eq!(
            sample.to_string(),
            "{attributes: {color: red, model: x1}}"
        );
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        struct At(Option<Instant>);
        impl fmt::Display for At {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut shape = ShapeFormatter::new(f)?;
                shape.field("at", &self.0)?;
                shape.finish()
            }
        }
        let at = At(Some(Instant::from_epoch_seconds(1576540098)));
        assert_eq!(at.to_string(), "{at: 2019-12-16T23:48:18Z}");
    }
}
