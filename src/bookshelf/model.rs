use crate::error::{CatalogError, Result};
use crate::ids::IdRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Available, Status::CheckedOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidStatus(s.to_string()))
    }
}

/// One catalog entry. Field names are the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Book {
    /// Create a book and claim its id in `ids`.
    ///
    /// With an explicit `id` this fails when the id is already claimed (the
    /// load path). Without one, the smallest free id is assigned.
    pub fn create(
        ids: &mut IdRegistry,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: Status,
        id: Option<u32>,
    ) -> Result<Self> {
        let id = match id {
            Some(id) => {
                ids.claim(id)?;
                id
            }
            None => ids.allocate(),
        };
        Ok(Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status,
        })
    }

    /// Plain `{id, title, author, year, status}` mapping, the same shape
    /// as the catalog file.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn field(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::Int(i64::from(self.id)),
            Field::Title => Value::Text(self.title.clone()),
            Field::Author => Value::Text(self.author.clone()),
            Field::Year => Value::Int(i64::from(self.year)),
            Field::Status => Value::Text(self.status.as_str().to_string()),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} \"{}\" by {} ({}) [{}]",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// The searchable attributes of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Author,
    Year,
    Status,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Title,
        Field::Author,
        Field::Year,
        Field::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Status => "status",
        }
    }

    /// Whether values for this field are compared as integers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Id | Field::Year)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

/// A comparison value. `Int` and `Text` are never equal to each other under
/// exact matching; normalized matching compares their rendered forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    fn normalized(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        Value::Text(status.as_str().to_string())
    }
}

/// A conjunction of field/value terms. An empty set of criteria matches
/// every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    terms: Vec<(Field, Value)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.terms.push((field, value.into()));
        self
    }

    pub fn id(self, id: u32) -> Self {
        self.with(Field::Id, id)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with(Field::Title, title.into())
    }

    pub fn author(self, author: impl Into<String>) -> Self {
        self.with(Field::Author, author.into())
    }

    pub fn year(self, year: i32) -> Self {
        self.with(Field::Year, year)
    }

    pub fn status(self, status: Status) -> Self {
        self.with(Field::Status, status)
    }

    /// Build a single-term criteria from user text. Values for numeric
    /// fields become `Int` when they parse, and stay `Text` otherwise.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let field: Field = field.parse()?;
        let value = if field.is_numeric() {
            value
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .unwrap_or_else(|_| Value::Text(value.to_string()))
        } else {
            Value::Text(value.to_string())
        };
        Ok(Self::new().with(field, value))
    }

    pub fn terms(&self) -> &[(Field, Value)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Typed, case-sensitive equality on every term.
    pub fn matches_exact(&self, book: &Book) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| book.field(*field) == *value)
    }

    /// Equality of the stringified, lower-cased forms on every term.
    pub fn matches_normalized(&self, book: &Book) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| book.field(*field).normalized() == value.normalized())
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        f.write_str(&rendered.join(", "))
    }
}
