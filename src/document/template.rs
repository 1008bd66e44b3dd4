// src/document/template.rs

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::{fs, path::Path};
use tracing::debug;

use super::stream::StreamSeq;
use crate::error::{Error, Result, TemplateError};

/// Key of the template that receives the generated records.
pub const FEATURES_KEY: &str = "features";

/// Static part of the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    fields: Map<String, Value>,
}

impl Template {
    /// Read and parse the template JSON at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wrap = |source: TemplateError| Error::TemplateLoad {
            path: path.to_path_buf(),
            source,
        };

        let text = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| wrap(e.into()))?;
        let template = Self::from_value(value).map_err(wrap)?;
        debug!(path = %path.display(), keys = template.fields.len(), "loaded template");
        Ok(template)
    }

    pub fn from_value(value: Value) -> Result<Self, TemplateError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(TemplateError::NotAnObject),
        }
    }

    /// Pair the template with the records that replace `features`.
    pub fn assemble<I, T, E>(&self, features: I) -> Document<'_, I, E>
    where
        I: Iterator<Item = std::result::Result<T, E>>,
    {
        Document {
            template: &self.fields,
            features: StreamSeq::new(features),
        }
    }
}

/// The template with its `features` key swapped for a lazy record stream.
///
/// Every other key keeps its value and position. A template without
/// `features` gets it appended last.
pub struct Document<'a, I, E> {
    template: &'a Map<String, Value>,
    features: StreamSeq<I, E>,
}

impl<I, E> Document<'_, I, E> {
    /// Error from the record stream that aborted serialization, if any.
    pub fn take_stream_error(&self) -> Option<E> {
        self.features.take_error()
    }
}

impl<I, T, E> Serialize for Document<'_, I, E>
where
    I: Iterator<Item = std::result::Result<T, E>>,
    T: Serialize,
    E: std::fmt::Display,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let has_features = self.template.contains_key(FEATURES_KEY);
        let len = self.template.len() + usize::from(!has_features);

        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in self.template {
            if key == FEATURES_KEY {
                map.serialize_entry(key, &self.features)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        if !has_features {
            map.serialize_entry(FEATURES_KEY, &self.features)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::Settlement;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn settlement(name: &str, x: i64, z: i64) -> Settlement {
        Settlement {
            name: name.to_string(),
            x,
            z,
            nation: "Aurora".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_replaces_features_in_place() {
        let template = Template::from_value(json!({
            "type": "FeatureCollection",
            "features": [{"stale": true}],
            "presentations": [{"name": "Settlements"}]
        }))
        .unwrap();
        let rows = vec![settlement("A", 1, 2), settlement("B", 3, 4)];
        let doc = template.assemble(rows.into_iter().map(Ok::<_, Error>));

        let out = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            out,
            r#"{"type":"FeatureCollection","features":[{"Name":"A","x":1,"z":2,"Nation":"Aurora"},{"Name":"B","x":3,"z":4,"Nation":"Aurora"}],"presentations":[{"name":"Settlements"}]}"#
        );
    }

    #[test]
    fn test_appends_missing_features_key() {
        let template = Template::from_value(json!({"name": "Settlements"})).unwrap();
        let doc = template.assemble(std::iter::empty::<std::result::Result<Settlement, Error>>());
        let out: Value = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(out, json!({"name": "Settlements", "features": []}));
    }

    #[test]
    fn test_load_template() -> anyhow::Result<()> {
        let mut f = NamedTempFile::new()?;
        write!(f, r#"{{"type": "FeatureCollection", "features": []}}"#)?;
        let template = Template::load(f.path())?;
        assert_eq!(
            template,
            Template::from_value(json!({"type": "FeatureCollection", "features": []}))?
        );
        Ok(())
    }

    #[test]
    fn test_load_template_errors() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Template::load(&missing),
            Err(Error::TemplateLoad {
                source: TemplateError::Read(_),
                ..
            })
        ));

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert!(matches!(
            Template::load(&corrupt),
            Err(Error::TemplateLoad {
                source: TemplateError::Parse(_),
                ..
            })
        ));

        let list = dir.path().join("list.json");
        fs::write(&list, "[1, 2]").unwrap();
        assert!(matches!(
            Template::load(&list),
            Err(Error::TemplateLoad {
                source: TemplateError::NotAnObject,
                ..
            })
        ));
    }
}
