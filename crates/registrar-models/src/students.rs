//! Student record, DTOs and the record-to-response mapping.
//!
//! A [`Student`] is what the registry stores. A [`StudentResponse`] is what
//! callers see: the stored fields plus the resolved course name and the age,
//! both computed at read time and never written back to the record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use registrar_core::serde::deserialize_optional_id;
use registrar_core::validation::{not_blank, required};
use registrar_core::{RegistryResult, validate_request};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::ids::{CourseId, StudentId};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Rendering used for dates of birth in lists and search, e.g. `25 July 1993`.
pub const DATE_OF_BIRTH_FORMAT: &str = "%d %B %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

/// A student as held by the student registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
    pub student_email: String,
    /// Weak reference: the course is not required to exist.
    pub course_id: Option<CourseId>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub gender: Gender,
}

/// The mutable part of a student, as produced by a validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDetails {
    pub student_name: String,
    pub student_email: String,
    pub course_id: Option<CourseId>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub gender: Gender,
}

impl Student {
    pub fn new(student_id: StudentId, details: StudentDetails) -> Self {
        Self {
            student_id,
            student_name: details.student_name,
            student_email: details.student_email,
            course_id: details.course_id,
            date_of_birth: details.date_of_birth,
            address: details.address,
            gender: details.gender,
        }
    }

    /// Overwrite every mutable field. The id is left untouched.
    pub fn replace_details(&mut self, details: StudentDetails) {
        let StudentDetails {
            student_name,
            student_email,
            course_id,
            date_of_birth,
            address,
            gender,
        } = details;

        self.student_name = student_name;
        self.student_email = student_email;
        self.course_id = course_id;
        self.date_of_birth = date_of_birth;
        self.address = address;
        self.gender = gender;
    }

    /// Build the caller-facing view, joining the course name and computing
    /// the age as of `now`.
    pub fn to_response(&self, course: Option<String>, now: DateTime<Utc>) -> StudentResponse {
        StudentResponse {
            student_id: self.student_id,
            student_name: self.student_name.clone(),
            student_email: self.student_email.clone(),
            course_id: self.course_id,
            course,
            date_of_birth: self.date_of_birth,
            address: self.address.clone(),
            gender: self.gender,
            age: compute_age(self.date_of_birth, now),
        }
    }
}

/// Age in whole years: elapsed days / 365.25, rounded half to even.
///
/// The birth date is taken as midnight UTC.
pub fn compute_age(date_of_birth: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    let born = date_of_birth?.and_time(NaiveTime::MIN).and_utc();
    let days = (now - born).num_milliseconds() as f64 / MILLIS_PER_DAY;
    Some((days / DAYS_PER_YEAR).round_ties_even() as i64)
}

/// Request to create a student. Every rule is checked; all failures are
/// reported together.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct StudentAddRequest {
    #[validate(
        required(message = "Student Name can't be blank"),
        custom(function = "not_blank", message = "Student Name can't be blank")
    )]
    pub student_name: Option<String>,

    #[validate(
        required(message = "Student Email can't be blank"),
        custom(function = "not_blank", message = "Student Email can't be blank"),
        email(message = "Email should be a valid email")
    )]
    pub student_email: Option<String>,

    #[validate(required(message = "Please select a course"))]
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub course_id: Option<CourseId>,

    #[validate(required(message = "Date of Birth can't be blank"))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(
        required(message = "Address can't be blank"),
        custom(function = "not_blank", message = "Address can't be blank")
    )]
    pub address: Option<String>,

    #[validate(required(message = "Please select a gender"))]
    pub gender: Option<Gender>,
}

impl StudentAddRequest {
    pub fn into_details(self) -> RegistryResult<StudentDetails> {
        validate_request(&self)?;
        Ok(StudentDetails {
            student_name: required(self.student_name, "student_name")?,
            student_email: required(self.student_email, "student_email")?,
            course_id: self.course_id,
            date_of_birth: self.date_of_birth,
            address: required(self.address, "address")?,
            gender: required(self.gender, "gender")?,
        })
    }
}

/// Request to replace every mutable field of an existing student.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct StudentUpdateRequest {
    pub student_id: StudentId,

    #[validate(
        required(message = "Student Name can't be blank"),
        custom(function = "not_blank", message = "Student Name can't be blank")
    )]
    pub student_name: Option<String>,

    #[validate(
        required(message = "Student Email can't be blank"),
        custom(function = "not_blank", message = "Student Email can't be blank"),
        email(message = "Email should be a valid email")
    )]
    pub student_email: Option<String>,

    #[validate(required(message = "Please select a course"))]
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub course_id: Option<CourseId>,

    #[validate(required(message = "Date of Birth can't be blank"))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(
        required(message = "Address can't be blank"),
        custom(function = "not_blank", message = "Address can't be blank")
    )]
    pub address: Option<String>,

    #[validate(required(message = "Please select a gender"))]
    pub gender: Option<Gender>,
}

impl StudentUpdateRequest {
    /// An update request with every field empty, for `student_id`.
    pub fn empty(student_id: StudentId) -> Self {
        Self {
            student_id,
            student_name: None,
            student_email: None,
            course_id: None,
            date_of_birth: None,
            address: None,
            gender: None,
        }
    }

    pub fn into_parts(self) -> RegistryResult<(StudentId, StudentDetails)> {
        validate_request(&self)?;
        let details = StudentDetails {
            student_name: required(self.student_name, "student_name")?,
            student_email: required(self.student_email, "student_email")?,
            course_id: self.course_id,
            date_of_birth: self.date_of_birth,
            address: required(self.address, "address")?,
            gender: required(self.gender, "gender")?,
        };
        Ok((self.student_id, details))
    }
}

/// Caller-facing view of a student.
///
/// Equality is field-by-field over every attribute, `course` and `age`
/// included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentResponse {
    pub student_id: StudentId,
    pub student_name: String,
    pub student_email: String,
    pub course_id: Option<CourseId>,
    /// Resolved course name, looked up at read time.
    pub course: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub gender: Gender,
    /// Whole years, computed at read time.
    pub age: Option<i64>,
}

impl StudentResponse {
    /// `date_of_birth` rendered as `dd Month yyyy`.
    pub fn formatted_date_of_birth(&self) -> Option<String> {
        self.date_of_birth
            .map(|date| date.format(DATE_OF_BIRTH_FORMAT).to_string())
    }

    /// Pre-fill an update request from this view, e.g. for an edit form.
    pub fn to_update_request(&self) -> StudentUpdateRequest {
        StudentUpdateRequest {
            student_id: self.student_id,
            student_name: Some(self.student_name.clone()),
            student_email: Some(self.student_email.clone()),
            course_id: self.course_id,
            date_of_birth: self.date_of_birth,
            address: Some(self.address.clone()),
            gender: Some(self.gender),
        }
    }
}

impl fmt::Display for StudentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}, Student Name: {}, Student Email: {}, Course ID: {}, Course: {}, \
             Date of Birth: {}, Address: {}, Gender: {}, Age: {}",
            self.student_id,
            self.student_name,
            self.student_email,
            self.course_id.map(|id| id.to_string()).unwrap_or_default(),
            self.course.as_deref().unwrap_or_default(),
            self.formatted_date_of_birth().unwrap_or_default(),
            self.address,
            self.gender,
            self.age.map(|age| age.to_string()).unwrap_or_default(),
        )
    }
}
