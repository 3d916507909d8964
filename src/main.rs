use std::env;
use std::io::{self, BufRead, Write};

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod registry;

use registry::{
    parse_gpa, parse_id, parse_interests, parse_internships, AlumniRegistry, RegistryError,
    Student, StudentUpdate,
};

// backing file used when ALUMNI_DATA_FILE is not set
const DEFAULT_DATA_FILE: &str = "alumni.json";

fn main() {
    dotenv::dotenv().ok();
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("failed to initialize the logger");

    let data_file =
        env::var("ALUMNI_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let mut registry = AlumniRegistry::open(data_file);
    println!(
        "alumni registry - {} students on file, type 'help' for commands",
        registry.student_count()
    );

    loop {
        let line = match read_line("> ") {
            Some(line) => line,
            None => break,
        };
        match line.as_str() {
            "register" => report(register_command(&mut registry), "student registered"),
            "update" => report(update_command(&mut registry), "student updated"),
            "remove" => report(remove_command(&mut registry), "student removed"),
            "find" => find_command(&registry),
            "list-department" => list_department_command(&registry),
            "list-high-gpa" => print_listing(&registry.list_high_gpa()),
            "list-advanced" => print_listing(&registry.list_advanced_language()),
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command '{}', type 'help'", other),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  register         capture a new student record");
    println!("  update           overwrite fields of an existing record");
    println!("  remove           delete a record by id");
    println!("  find             show a record by id");
    println!("  list-department  list one department's records");
    println!("  list-high-gpa    list records with gpa > 3.5");
    println!("  list-advanced    list records with an advanced language level");
    println!("  quit             exit");
}

fn report(result: Result<(), RegistryError>, success: &str) {
    match result {
        Ok(()) => println!("{}", success),
        Err(err) => println!("error: {}", err),
    }
}

fn register_command(registry: &mut AlumniRegistry) -> Result<(), RegistryError> {
    let student = Student {
        student_id: parse_id(&read_field("id"))?,
        name: read_field("name"),
        address: read_field("address"),
        phone: read_field("phone"),
        email: read_field("email"),
        nationality: read_field("nationality"),
        birth_date: read_field("birth date"),
        foreign_language: read_field("foreign language level"),
        interests: parse_interests(&read_field("interests (comma separated)")),
        gpa: parse_gpa(&read_field("gpa"))?,
        internships: parse_internships(&read_field("internships (company,duration,...)"))?,
        department: read_field("department"),
    };
    registry.register(student)
}

fn update_command(registry: &mut AlumniRegistry) -> Result<(), RegistryError> {
    let student_id = parse_id(&read_field("id"))?;

    // blank answers keep the current value
    let mut changes = StudentUpdate::default();
    changes.name = optional_field("name");
    changes.address = optional_field("address");
    changes.phone = optional_field("phone");
    changes.email = optional_field("email");
    changes.nationality = optional_field("nationality");
    changes.birth_date = optional_field("birth date");
    changes.foreign_language = optional_field("foreign language level");
    if let Some(text) = optional_field("interests (comma separated)") {
        changes.interests = Some(parse_interests(&text));
    }
    if let Some(text) = optional_field("gpa") {
        changes.gpa = Some(parse_gpa(&text)?);
    }
    if let Some(text) = optional_field("internships (company,duration,...)") {
        changes.internships = Some(parse_internships(&text)?);
    }

    registry.update(student_id, changes)
}

fn remove_command(registry: &mut AlumniRegistry) -> Result<(), RegistryError> {
    let student_id = parse_id(&read_field("id"))?;
    registry.remove(student_id)?;
    Ok(())
}

fn find_command(registry: &AlumniRegistry) {
    match parse_id(&read_field("id")) {
        Ok(student_id) => match registry.find(student_id) {
            Some(student) => print_student(student),
            None => println!("student {} not found", student_id),
        },
        Err(err) => println!("error: {}", err),
    }
}

fn list_department_command(registry: &AlumniRegistry) {
    let department = read_field("department");
    print_listing(&registry.list_by_department(&department));
}

fn print_student(student: &Student) {
    println!("id:               {}", student.student_id);
    println!("name:             {}", student.name);
    println!("address:          {}", student.address);
    println!("phone:            {}", student.phone);
    println!("email:            {}", student.email);
    println!("nationality:      {}", student.nationality);
    println!("birth date:       {}", student.birth_date);
    println!("foreign language: {}", student.foreign_language);
    println!("interests:        {}", student.interests.join(", "));
    println!("gpa:              {}", student.gpa);
    let internships: Vec<String> = student
        .internships
        .iter()
        .map(|i| format!("{} ({})", i.company, i.duration))
        .collect();
    println!("internships:      {}", internships.join(", "));
    println!("department:       {}", student.department);
}

fn print_listing(students: &[&Student]) {
    if students.is_empty() {
        println!("no matching students");
        return;
    }
    for student in students {
        println!(
            "{:<10} {:<24} {:<16} {:.2}",
            student.student_id, student.name, student.department, student.gpa
        );
    }
}

/// Prompt and read one line from stdin; `None` means end of input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn read_field(label: &str) -> String {
    read_line(&format!("{}: ", label)).unwrap_or_default()
}

fn optional_field(label: &str) -> Option<String> {
    let text = read_field(&format!("{} (blank keeps current)", label));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
