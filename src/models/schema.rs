use super::record::Fragment;

/// Whether a source field carries trusted markup or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub field: &'static str,
    pub raw_markup: bool,
}

/// Per-source table of field trust. Every wire-to-record conversion goes
/// through one of these, so the markup boundary can be read in one place.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub source: &'static str,
    pub fields: &'static [FieldSchema],
}

impl Schema {
    /// Unlisted fields are plain text.
    pub fn raw_markup(&self, field: &str) -> bool {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.raw_markup)
            .unwrap_or(false)
    }

    pub fn fragment(&self, field: &str, value: impl Into<String>) -> Fragment {
        Fragment {
            value: value.into(),
            raw_markup: self.raw_markup(field),
        }
    }
}

pub const NEWS: Schema = Schema {
    source: "news",
    fields: &[
        FieldSchema {
            field: "title",
            raw_markup: false,
        },
        FieldSchema {
            field: "tag",
            raw_markup: false,
        },
        FieldSchema {
            field: "content",
            raw_markup: true,
        },
        FieldSchema {
            field: "features.title",
            raw_markup: true,
        },
        FieldSchema {
            field: "features.items",
            raw_markup: true,
        },
        FieldSchema {
            field: "footer",
            raw_markup: true,
        },
    ],
};

pub const GALLERY: Schema = Schema {
    source: "gallery",
    fields: &[
        FieldSchema {
            field: "title",
            raw_markup: false,
        },
        FieldSchema {
            field: "description",
            raw_markup: false,
        },
    ],
};
