//! Field selectors and sort order for student list queries.
//!
//! Selectors are parsed from the PascalCase identifiers used by list pages
//! (`StudentName`, `CourseID`, ...). An identifier that names no field parses
//! to `None`, which the query engine treats as "leave the list unchanged".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every selectable attribute of a student response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentField {
    #[serde(rename = "StudentID")]
    StudentId,
    StudentName,
    StudentEmail,
    #[serde(rename = "CourseID")]
    CourseId,
    Course,
    DateOfBirth,
    Address,
    Gender,
    Age,
}

impl StudentField {
    pub const ALL: [StudentField; 9] = [
        StudentField::StudentId,
        StudentField::StudentName,
        StudentField::StudentEmail,
        StudentField::CourseId,
        StudentField::Course,
        StudentField::DateOfBirth,
        StudentField::Address,
        StudentField::Gender,
        StudentField::Age,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudentId => "StudentID",
            Self::StudentName => "StudentName",
            Self::StudentEmail => "StudentEmail",
            Self::CourseId => "CourseID",
            Self::Course => "Course",
            Self::DateOfBirth => "DateOfBirth",
            Self::Address => "Address",
            Self::Gender => "Gender",
            Self::Age => "Age",
        }
    }

    /// Parse an identifier, yielding `None` for empty or unknown input.
    ///
    /// Matching is exact, like the identifiers emitted by list pages.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == identifier)
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown student field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for StudentField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0} (expected ASC or DESC)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ASC") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Ok(Self::Desc)
        } else {
            Err(UnknownSortOrder(s.to_string()))
        }
    }
}

/// A list-page query: optional search, then sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    pub search_by: Option<StudentField>,
    pub search_string: Option<String>,
    pub sort_by: Option<StudentField>,
    pub sort_order: SortOrder,
}

impl Default for StudentQuery {
    /// No search, sorted by name ascending.
    fn default() -> Self {
        Self {
            search_by: None,
            search_string: None,
            sort_by: Some(StudentField::StudentName),
            sort_order: SortOrder::Asc,
        }
    }
}

impl StudentQuery {
    /// Build a query from raw identifiers as received from a list page.
    pub fn from_identifiers(
        search_by: &str,
        search_string: Option<&str>,
        sort_by: &str,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            search_by: StudentField::from_identifier(search_by),
            search_string: search_string.map(str::to_string),
            sort_by: StudentField::from_identifier(sort_by),
            sort_order,
        }
    }
}
