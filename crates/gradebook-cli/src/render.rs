//! Rendering of student lists for the console.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::Student;

use crate::config::OutputFormat;

const EMPTY_LIST: &str = "No students.";

/// Render a list of students in the requested format.
///
/// Averages are printed with `precision` decimal places; the JSON form
/// carries the unrounded value.
pub fn render_students(
    students: &[&Student],
    format: OutputFormat,
    precision: usize,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(students)?),
        _ if students.is_empty() => Ok(EMPTY_LIST.to_string()),
        OutputFormat::Plain => Ok(students
            .iter()
            .map(|s| {
                format!(
                    "ID: {}, Name: {}, Grades: {:?}, Average: {}",
                    s.id(),
                    s.full_name(),
                    s.grades(),
                    format_average(s.average_grade(), precision)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["ID", "Name", "Grades", "Average"]);
            for s in students {
                table.add_row(vec![
                    Cell::new(s.id()),
                    Cell::new(s.full_name()),
                    Cell::new(format_grades(s.grades())),
                    Cell::new(format_average(s.average_grade(), precision)),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

pub fn format_average(average: f64, precision: usize) -> String {
    format!("{average:.precision$}")
}

fn format_grades(grades: &[u8]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::Gradebook;

    fn sample() -> Gradebook {
        let mut book = Gradebook::new();
        let a = book.add_student("Ivan", "Petrov", "Sergeevich");
        book.add_grade_to_student(a, 5).unwrap();
        book.add_grade_to_student(a, 4).unwrap();
        book.add_student("Anna", "Ivanova", "Olegovna");
        book
    }

    #[test]
    fn plain_lines() {
        let book = sample();
        let students: Vec<&Student> = book.all_students().collect();
        let out = render_students(&students, OutputFormat::Plain, 2).unwrap();
        assert_eq!(
            out,
            "ID: 1, Name: Petrov Ivan Sergeevich, Grades: [5, 4], Average: 4.50\n\
             ID: 2, Name: Ivanova Anna Olegovna, Grades: [], Average: 0.00"
        );
    }

    #[test]
    fn table_has_header_and_rows() {
        let book = sample();
        let students: Vec<&Student> = book.all_students().collect();
        let out = render_students(&students, OutputFormat::Table, 1).unwrap();
        assert!(out.contains("Average"));
        assert!(out.contains("Petrov Ivan Sergeevich"));
        assert!(out.contains("5 4"));
        assert!(out.contains("4.5"));
        assert!(!out.contains("4.50"));
    }

    #[test]
    fn json_array() {
        let book = sample();
        let students = book.sort_by_average(false);
        let out = render_students(&students, OutputFormat::Json, 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["average"], 4.5);
        assert_eq!(value[1]["grades"], serde_json::json!([]));
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_students(&[], OutputFormat::Plain, 2).unwrap(), EMPTY_LIST);
        assert_eq!(render_students(&[], OutputFormat::Table, 2).unwrap(), EMPTY_LIST);
        assert_eq!(render_students(&[], OutputFormat::Json, 2).unwrap(), "[]");
    }

    #[test]
    fn average_precision() {
        assert_eq!(format_average(11.0 / 3.0, 2), "3.67");
        assert_eq!(format_average(3.5, 0), "4");
        assert_eq!(format_average(0.0, 3), "0.000");
    }
}
