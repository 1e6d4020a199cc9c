//! Fixed demo records: three courses and five students.
//!
//! Stored as-is, bypassing request validation; one email is malformed and is
//! kept that way.

use chrono::NaiveDate;
use registrar_models::{Course, CourseId, Gender, Student, StudentId};

pub const ACCOUNTING: CourseId = CourseId::from_u128(0x9275f118_508e_4b22_a202_462efb3d0637);
pub const COMPUTER_SCIENCE: CourseId = CourseId::from_u128(0x4c3124fb_fc2f_43c7_9c6c_dd6471489c2d);
pub const ELECTRICAL_ENGINEERING: CourseId =
    CourseId::from_u128(0x3a806107_9c01_435d_8976_5a1715c7b434);

pub fn demo_courses() -> Vec<Course> {
    [
        (ACCOUNTING, "Bachelor in Accounting"),
        (COMPUTER_SCIENCE, "Bachelor in Computer Science"),
        (ELECTRICAL_ENGINEERING, "Bachelor in Electrical Engineering"),
    ]
    .into_iter()
    .map(|(course_id, name)| Course {
        course_id,
        course_name: name.to_string(),
    })
    .collect()
}

pub fn demo_students() -> Vec<Student> {
    [
        (
            0xae2319cd_ab46_4018_be6f_78a7ec368fd7_u128,
            "Cleveland",
            "cdipietro0@edublogs.org",
            ACCOUNTING,
            (1993, 7, 25),
            "3 Bluestem Avenue",
            Gender::Male,
        ),
        (
            0xf168d5b0_2b4f_4e27_9fbe_6eec5e2ea1b5,
            "Isabel",
            "ikimmins9 @elpais.com",
            COMPUTER_SCIENCE,
            (1994, 6, 12),
            "5 Lien Plaza",
            Gender::Female,
        ),
        (
            0xdf1203bd_7695_4300_a91f_6f1555de050e,
            "Ailee",
            "amccullough7@sun.com",
            ELECTRICAL_ENGINEERING,
            (1996, 5, 21),
            "1991 Mitchell Road",
            Gender::Female,
        ),
        (
            0x5aa4e8a5_1794_4283_b8fb_d079cc169933,
            "Onofredo",
            "ogofton3@hhs.gov",
            COMPUTER_SCIENCE,
            (1991, 7, 29),
            "4751 Northport Court",
            Gender::Male,
        ),
        (
            0x48db5ef8_3b50_412a_930b_9cc344b45ec5,
            "Jorge",
            "jbourley4@instagram.com",
            ELECTRICAL_ENGINEERING,
            (1994, 8, 17),
            "13522 Blue Bill Park Road",
            Gender::Male,
        ),
    ]
    .into_iter()
    .map(
        |(id, name, email, course_id, (year, month, day), address, gender)| Student {
            student_id: StudentId::from_u128(id),
            student_name: name.to_string(),
            student_email: email.to_string(),
            course_id: Some(course_id),
            date_of_birth: NaiveDate::from_ymd_opt(year, month, day),
            address: address.to_string(),
            gender,
        },
    )
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_sizes() {
        assert_eq!(demo_courses().len(), 3);
        assert_eq!(demo_students().len(), 5);
    }

    #[test]
    fn test_demo_students_reference_demo_courses() {
        let course_ids: HashSet<CourseId> = demo_courses().iter().map(|c| c.course_id).collect();
        for student in demo_students() {
            assert!(course_ids.contains(&student.course_id.unwrap()));
            assert!(student.date_of_birth.is_some());
        }
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let ids: HashSet<StudentId> = demo_students().iter().map(|s| s.student_id).collect();
        assert_eq!(ids.len(), 5);
    }
}
