// src/settlement/columns.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One column of the settlements sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    X,
    Z,
    Nation,
    Contact,
    Image,
    ImageAlbum,
    Discord,
    Web,
    Wiki,
    Symbol,
    Visitors,
    ZoomVisibility,
    Id,
    Notes,
    Nickname,
}

/// Declared type of a column's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Integer,
}

/// Sheet layout: position in this table is the CSV column index, and the
/// same order is used for keys in the output. The sheet's own header row is
/// only checked for warnings, so a reordered sheet still shifts values
/// between fields.
pub static COLUMNS: &[(Column, &str, Kind, bool)] = &[
    (Column::Name, "Name", Kind::Text, true),
    (Column::X, "x", Kind::Integer, true),
    (Column::Z, "z", Kind::Integer, true),
    (Column::Nation, "Nation", Kind::Text, true),
    (Column::Contact, "Contact", Kind::Text, false),
    (Column::Image, "image", Kind::Text, false),
    (Column::ImageAlbum, "image_album", Kind::Text, false),
    (Column::Discord, "Discord", Kind::Text, false),
    (Column::Web, "Web", Kind::Text, false),
    (Column::Wiki, "Wiki", Kind::Text, false),
    (Column::Symbol, "Symbol", Kind::Text, false),
    (Column::Visitors, "Visitors", Kind::Text, false),
    (Column::ZoomVisibility, "Zoom Visibility", Kind::Integer, false),
    (Column::Id, "id", Kind::Integer, false),
    (Column::Notes, "Notes", Kind::Text, false),
    (Column::Nickname, "Nickname", Kind::Text, false),
];

static BY_ALIAS: Lazy<HashMap<&'static str, Column>> =
    Lazy::new(|| COLUMNS.iter().map(|&(c, alias, _, _)| (alias, c)).collect());

impl Column {
    /// Every column in sheet order.
    pub fn all() -> impl Iterator<Item = Column> {
        COLUMNS.iter().map(|&(c, _, _, _)| c)
    }

    /// CSV position of this column.
    pub fn index(self) -> usize {
        COLUMNS
            .iter()
            .position(|&(c, _, _, _)| c == self)
            .unwrap_or_else(|| unreachable!("{self:?} missing from COLUMNS"))
    }

    /// External name, as used in the sheet and in the output JSON.
    pub fn alias(self) -> &'static str {
        COLUMNS[self.index()].1
    }

    pub fn kind(self) -> Kind {
        COLUMNS[self.index()].2
    }

    pub fn is_required(self) -> bool {
        COLUMNS[self.index()].3
    }

    /// Resolve an external name back to its column.
    pub fn from_alias(alias: &str) -> Option<Column> {
        BY_ALIAS.get(alias).copied()
    }
}
