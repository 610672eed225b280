use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Genre of a book. The upper snake case name is used both on the wire and in the
/// `books.category` column.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookCategory {
    Fiction,
    NonFiction,
    Essay,
    Poetry,
    Science,
    History,
    Children,
}

impl BookCategory {
    pub const ALL: [BookCategory; 7] = [
        BookCategory::Fiction,
        BookCategory::NonFiction,
        BookCategory::Essay,
        BookCategory::Poetry,
        BookCategory::Science,
        BookCategory::History,
        BookCategory::Children,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookCategory::Fiction => "FICTION",
            BookCategory::NonFiction => "NON_FICTION",
            BookCategory::Essay => "ESSAY",
            BookCategory::Poetry => "POETRY",
            BookCategory::Science => "SCIENCE",
            BookCategory::History => "HISTORY",
            BookCategory::Children => "CHILDREN",
        }
    }
}

impl AsRef<str> for BookCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for BookCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookCategory {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable(format!("Unknown book category: {s}"))
            })
    }
}

#[cfg(test)]
mod test {
    use super::BookCategory;

    #[test]
    fn names_round_trip_through_from_str() {
        for category in BookCategory::ALL {
            assert_eq!(category.as_str().parse::<BookCategory>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("fiction".parse::<BookCategory>().is_err());
        assert!("".parse::<BookCategory>().is_err());
    }

    #[test]
    fn serde_uses_column_names() {
        let json = serde_json::to_string(&BookCategory::NonFiction).unwrap();
        assert_eq!(json, "\"NON_FICTION\"");
        let parsed: BookCategory = serde_json::from_str("\"POETRY\"").unwrap();
        assert_eq!(parsed, BookCategory::Poetry);
    }
}
