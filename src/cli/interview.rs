use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::student::{DegreeLevel, Student};

use super::args::Cli;

/// Build the Student from CLI flags where provided, prompting for the rest.
pub(crate) fn gather_student(cli: &Cli) -> Result<Student> {
    let interactive = cli.department.is_none()
        || cli.degree_level.is_none()
        || cli.prior_courses.is_none();
    if interactive {
        println!("Please enter your academic background:");
    }

    let prior_courses = match &cli.prior_courses {
        Some(raw) => parse_prior_courses(raw),
        None => parse_prior_courses(&prompt_line("Prior courses taken (comma-separated): ")?),
    };

    let department = match &cli.department {
        Some(department) => department.trim().to_string(),
        None => prompt_line("Your department: ")?,
    };

    let degree_level = match &cli.degree_level {
        Some(raw) => DegreeLevel::from_str(raw)?,
        None => prompt_degree_level()?,
    };

    Ok(Student::new(department, degree_level, prior_courses))
}

pub(crate) fn prompt_target_course() -> Result<String> {
    loop {
        let target = prompt_line("\nTarget course you want to prepare for: ")?;
        if !target.is_empty() {
            return Ok(target);
        }
        println!("❌ Target course cannot be empty.");
    }
}

/// Empty or malformed input degrades to an empty list; there is no
/// validation error for prior courses.
pub(crate) fn parse_prior_courses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|course| course.trim().to_string())
        .filter(|course| !course.is_empty())
        .collect()
}

fn prompt_degree_level() -> Result<DegreeLevel> {
    loop {
        let answer = prompt_line("Degree level (Undergraduate/Graduate): ")?;
        match DegreeLevel::from_str(&answer) {
            Ok(level) => return Ok(level),
            Err(_) => println!("❌ Please enter Undergraduate or Graduate."),
        }
    }
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}
