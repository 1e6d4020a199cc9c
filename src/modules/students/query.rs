//! Filter and sort over materialized student responses.
//!
//! Both stages are stateless and compose freely. Each selectable field maps
//! to one matcher and/or one comparator; a field with no entry leaves the
//! list exactly as it was.

use std::cmp::Ordering;

use tracing::debug;

use crate::modules::students::model::{SortOrder, StudentField, StudentQuery, StudentResponse};

type Matcher = fn(&StudentResponse, &str) -> bool;
type Comparator = fn(&StudentResponse, &StudentResponse) -> Ordering;

/// Keep the students whose `field` matches `text`.
///
/// Name, email, course name and the rendered birth date (`25 July 1993`) match
/// on case-insensitive containment. Address and gender only match on
/// case-insensitive equality: a compatibility behaviour kept as-is, so
/// `"bluestem"` does not find `"3 Bluestem Avenue"`.
///
/// A student with an empty value for `field` is always kept. An empty `text`,
/// no field, or a field that cannot be searched returns the input unchanged.
pub fn filter(
    mut students: Vec<StudentResponse>,
    field: Option<StudentField>,
    text: &str,
) -> Vec<StudentResponse> {
    if text.is_empty() {
        return students;
    }
    let Some((field, matches)) = field.and_then(|f| matcher_for(f).map(|m| (f, m))) else {
        debug!(?field, "No searchable field selected; list unchanged");
        return students;
    };

    students.retain(|student| matches(student, text));
    debug!(%field, text, kept = students.len(), "Filtered students");
    students
}

/// Stable sort by `field`. `Desc` reverses the ascending comparison, so ties
/// keep their original order either way.
///
/// No field, or a field that cannot be sorted, returns the input unchanged.
pub fn sort(
    mut students: Vec<StudentResponse>,
    field: Option<StudentField>,
    order: SortOrder,
) -> Vec<StudentResponse> {
    let Some((field, compare)) = field.and_then(|f| comparator_for(f).map(|c| (f, c))) else {
        debug!(?field, "No sortable field selected; list unchanged");
        return students;
    };

    match order {
        SortOrder::Asc => students.sort_by(compare),
        SortOrder::Desc => students.sort_by(|a, b| compare(a, b).reverse()),
    }
    debug!(%field, %order, "Sorted students");
    students
}

/// Filter then sort, as a list page does.
pub fn apply(students: Vec<StudentResponse>, query: &StudentQuery) -> Vec<StudentResponse> {
    let filtered = filter(
        students,
        query.search_by,
        query.search_string.as_deref().unwrap_or_default(),
    );
    sort(filtered, query.sort_by, query.sort_order)
}

fn matcher_for(field: StudentField) -> Option<Matcher> {
    let matcher: Matcher = match field {
        StudentField::StudentName => |s, text| contains_ignore_case(&s.student_name, text),
        StudentField::StudentEmail => |s, text| contains_ignore_case(&s.student_email, text),
        // Searching by course id means searching the resolved course name.
        StudentField::CourseId => {
            |s, text| contains_ignore_case(s.course.as_deref().unwrap_or_default(), text)
        }
        StudentField::DateOfBirth => |s, text| {
            s.formatted_date_of_birth()
                .is_none_or(|dob| contains_ignore_case(&dob, text))
        },
        StudentField::Address => |s, text| equals_ignore_case(&s.address, text),
        StudentField::Gender => |s, text| equals_ignore_case(s.gender.as_str(), text),
        StudentField::StudentId | StudentField::Course | StudentField::Age => return None,
    };
    Some(matcher)
}

fn comparator_for(field: StudentField) -> Option<Comparator> {
    let comparator: Comparator = match field {
        StudentField::StudentName => |a, b| cmp_ignore_case(&a.student_name, &b.student_name),
        StudentField::StudentEmail => {
            |a, b| cmp_ignore_case(&a.student_email, &b.student_email)
        }
        StudentField::Course => {
            |a, b| cmp_optional_ignore_case(a.course.as_deref(), b.course.as_deref())
        }
        StudentField::DateOfBirth => |a, b| a.date_of_birth.cmp(&b.date_of_birth),
        StudentField::Address => |a, b| cmp_ignore_case(&a.address, &b.address),
        StudentField::Gender => |a, b| cmp_ignore_case(a.gender.as_str(), b.gender.as_str()),
        // `None` orders before every age.
        StudentField::Age => |a, b| a.age.cmp(&b.age),
        StudentField::StudentId | StudentField::CourseId => return None,
    };
    Some(comparator)
}

fn fold(value: &str) -> String {
    value.to_uppercase()
}

fn contains_ignore_case(value: &str, text: &str) -> bool {
    value.is_empty() || fold(value).contains(&fold(text))
}

fn equals_ignore_case(value: &str, text: &str) -> bool {
    value.is_empty() || fold(value) == fold(text)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

fn cmp_optional_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_ignore_case(a, b),
        _ => a.is_some().cmp(&b.is_some()),
    }
}
