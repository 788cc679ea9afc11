/// A single piece of text carried by a record.
/// `raw_markup` fragments are trusted and inserted verbatim; everything
/// else is escaped when mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub value: String,
    pub raw_markup: bool,
}

impl Fragment {
    pub fn text(value: impl Into<String>) -> Self {
        Fragment {
            value: value.into(),
            raw_markup: false,
        }
    }

    pub fn markup(value: impl Into<String>) -> Self {
        Fragment {
            value: value.into(),
            raw_markup: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Emoji,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDate {
    pub day: String,
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    pub title: Option<Fragment>,
    pub items: Vec<Fragment>,
}

/// One displayable content item, independent of the source it came from.
/// Its id is its position in the owning [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub category: Option<String>,
    pub title: Fragment,
    pub content: Vec<Fragment>,
    pub media: Option<Media>,
    pub tag: Option<Fragment>,
    pub date: Option<RecordDate>,
    pub features: Option<Features>,
    pub footer: Option<Fragment>,
    pub downloadable: bool,
}

impl Default for Fragment {
    fn default() -> Self {
        Fragment::text("")
    }
}

impl Record {
    /// Minimal record with just a category and a plain title.
    pub fn new(category: Option<&str>, title: &str) -> Self {
        Record {
            category: category.map(str::to_string),
            title: Fragment::text(title),
            ..Default::default()
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Ordered, immutable set of records loaded from one data source.
/// Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Self {
        Collection { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for cat in self.records.iter().filter_map(|r| r.category()) {
            if !seen.contains(&cat) {
                seen.push(cat);
            }
        }
        seen
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Collection::new(records)
    }
}
