use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use registrar::registrar_core::RegistryError;
use registrar::{AppState, init_app_state};
use registrar_cli::seeder;
use registrar_config::RegistrarConfig;
use registrar_models::{
    CourseAddRequest, CourseId, Gender, SortOrder, StudentAddRequest, StudentId, StudentQuery,
    StudentResponse,
};
use registrar_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "registrar-cli")]
#[command(about = "Registrar CLI - explore the course and student registries", long_about = None)]
struct Cli {
    /// Start with empty registries instead of the demo records
    #[arg(long, global = true)]
    empty: bool,

    /// Print lists as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every course
    Courses,
    /// Add a course, then list every course
    AddCourse {
        /// Course name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// List students, optionally searched and sorted
    Students {
        /// Field to search: StudentName, StudentEmail, CourseID, DateOfBirth, Address, Gender
        #[arg(long, default_value = "")]
        search_by: String,

        /// Text to search for
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Field to sort by: StudentName, StudentEmail, Course, DateOfBirth, Address, Gender, Age
        #[arg(long, default_value = "StudentName")]
        sort_by: String,

        /// ASC or DESC
        #[arg(short = 'o', long, default_value = "ASC")]
        order: SortOrder,
    },
    /// Show one student
    Student {
        #[arg(long)]
        id: StudentId,
    },
    /// Add a student; every missing or invalid field is reported
    AddStudent {
        #[command(flatten)]
        fields: StudentArgs,
    },
    /// Replace every field of an existing student; omitted fields keep their value
    UpdateStudent {
        #[arg(long)]
        id: StudentId,

        #[command(flatten)]
        fields: StudentArgs,
    },
    /// Delete a student
    DeleteStudent {
        #[arg(long)]
        id: StudentId,
    },
    /// Add generated students, then list every student
    SeedFake {
        /// Number of students to generate
        #[arg(long, default_value = "25")]
        students: usize,
    },
}

#[derive(clap::Args)]
struct StudentArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    course_id: Option<CourseId>,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    dob: Option<NaiveDate>,

    #[arg(long)]
    address: Option<String>,

    /// Male, Female or Other
    #[arg(long)]
    gender: Option<Gender>,
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = RegistrarConfig::from_env();
    if cli.empty {
        config.seed_demo_data = false;
    }
    init_basic_console_logging(&config.log_level);

    let state = init_app_state(config);

    if let Err(e) = run(&state, cli.command, cli.json) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(state: &AppState, command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Courses => handle_courses(state, json),
        Commands::AddCourse { name } => handle_add_course(state, name, json),
        Commands::Students {
            search_by,
            search,
            sort_by,
            order,
        } => {
            let query =
                StudentQuery::from_identifiers(&search_by, search.as_deref(), &sort_by, order);
            print_students(&state.students.query(&query), json)
        }
        Commands::Student { id } => {
            let student = state
                .students
                .get_by_id(Some(id))
                .with_context(|| format!("No student with id {}", id))?;
            print_students(&[student], json)
        }
        Commands::AddStudent { fields } => {
            let student = state.students.add_student(Some(fields.into_add_request()))?;
            println!("✅ Student added");
            print_students(&[student], json)
        }
        Commands::UpdateStudent { id, fields } => handle_update_student(state, id, fields, json),
        Commands::DeleteStudent { id } => {
            if state.students.delete_student(Some(id))? {
                println!("✅ Deleted student {}", id);
            } else {
                println!("ℹ️  No student with id {}", id);
            }
            Ok(())
        }
        Commands::SeedFake { students } => {
            let course_ids: Vec<CourseId> = state
                .courses
                .get_all()
                .into_iter()
                .map(|course| course.course_id)
                .collect();
            let requests = seeder::generate_students(students, &course_ids);
            seeder::seed_students(&state.students, requests)?;
            print_students(&state.students.query(&StudentQuery::default()), json)
        }
    }
}

fn handle_courses(state: &AppState, json: bool) -> anyhow::Result<()> {
    let courses = state.courses.get_all();
    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }
    for course in courses {
        println!("{}  {}", course.course_id, course.course_name);
    }
    Ok(())
}

fn handle_add_course(state: &AppState, name: Option<String>, json: bool) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Course name")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read course name")?,
    };

    let course = state.courses.add_course(Some(CourseAddRequest::new(name)))?;
    println!("✅ Course added: {}", course.course_id);
    handle_courses(state, json)
}

fn handle_update_student(
    state: &AppState,
    id: StudentId,
    fields: StudentArgs,
    json: bool,
) -> anyhow::Result<()> {
    let Some(existing) = state.students.get_by_id(Some(id)) else {
        anyhow::bail!("Given student id doesn't exist: {}", id);
    };
    let mut request = existing.to_update_request();

    let StudentArgs {
        name,
        email,
        course_id,
        dob,
        address,
        gender,
    } = fields;
    request.student_name = name.or(request.student_name);
    request.student_email = email.or(request.student_email);
    request.course_id = course_id.or(request.course_id);
    request.date_of_birth = dob.or(request.date_of_birth);
    request.address = address.or(request.address);
    request.gender = gender.or(request.gender);

    let student = state.students.update_student(Some(request))?;
    println!("✅ Student updated");
    print_students(&[student], json)
}

impl StudentArgs {
    fn into_add_request(self) -> StudentAddRequest {
        StudentAddRequest {
            student_name: self.name,
            student_email: self.email,
            course_id: self.course_id,
            date_of_birth: self.dob,
            address: self.address,
            gender: self.gender,
        }
    }
}

fn print_students(students: &[StudentResponse], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(students)?);
        return Ok(());
    }
    if students.is_empty() {
        println!("(no students)");
    }
    for student in students {
        println!("{}", student);
    }
    Ok(())
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<RegistryError>() {
        Some(RegistryError::Validation(violations)) => {
            eprintln!("\n❌ Validation failed:");
            for violation in violations {
                eprintln!("   - {}", violation);
            }
        }
        _ => eprintln!("\n❌ Error: {:#}", error),
    }
}
