// src/settlement/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::columns::Column;

/// A validated row of the settlements sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settlement {
    pub name: String,
    pub x: i64,
    pub z: i64,
    pub nation: String,
    pub contact: Option<String>,
    pub image: Option<String>,
    pub image_album: Option<String>,
    pub discord: Option<String>,
    pub web: Option<String>,
    pub wiki: Option<String>,
    pub symbol: Option<String>,
    pub visitors: Option<String>,
    pub zoom_visibility: Option<i64>,
    pub id: Option<i64>,
    pub notes: Option<String>,
    pub nickname: Option<String>,
}

/// Borrowed view of one field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(n) => serializer.serialize_i64(n),
        }
    }
}

fn text(v: &Option<String>) -> Option<FieldValue<'_>> {
    v.as_deref().map(FieldValue::Text)
}

impl Settlement {
    /// Value stored for `column`, or `None` when absent.
    pub fn field(&self, column: Column) -> Option<FieldValue<'_>> {
        match column {
            Column::Name => Some(FieldValue::Text(&self.name)),
            Column::X => Some(FieldValue::Integer(self.x)),
            Column::Z => Some(FieldValue::Integer(self.z)),
            Column::Nation => Some(FieldValue::Text(&self.nation)),
            Column::Contact => text(&self.contact),
            Column::Image => text(&self.image),
            Column::ImageAlbum => text(&self.image_album),
            Column::Discord => text(&self.discord),
            Column::Web => text(&self.web),
            Column::Wiki => text(&self.wiki),
            Column::Symbol => text(&self.symbol),
            Column::Visitors => text(&self.visitors),
            Column::ZoomVisibility => self.zoom_visibility.map(FieldValue::Integer),
            Column::Id => self.id.map(FieldValue::Integer),
            Column::Notes => text(&self.notes),
            Column::Nickname => text(&self.nickname),
        }
    }

    /// Present fields in sheet order, keyed by column.
    pub fn fields(&self) -> impl Iterator<Item = (Column, FieldValue<'_>)> + '_ {
        Column::all().filter_map(move |c| self.field(c).map(|v| (c, v)))
    }
}

/// Serializes as a map keyed by the external column names, skipping
/// absent fields.
impl Serialize for Settlement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (column, value) in self.fields() {
            map.serialize_entry(column.alias(), &value)?;
        }
        map.end()
    }
}
