use std::fmt;

use super::record::Record;

/// The value that shows every record.
pub const ALL: &str = "all";

/// The active category selection. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Exact match against `all`; any other string, padding and empty
    /// included, is a category as written in the data.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(c) => c,
        }
    }

    /// Records without a category only ever match `all`.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => record.category() == Some(c.as_str()),
        }
    }

    /// Predicate form, usable anywhere a `Fn(&Record) -> bool` is taken.
    pub fn predicate(&self) -> impl Fn(&Record) -> bool + '_ {
        move |r: &Record| self.matches(r)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
