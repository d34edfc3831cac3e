//! The interactive menu loop.
//!
//! A [`Session`] owns one in-memory [`Gradebook`] for as long as it runs. It
//! reads one answer per line from its input and writes prompts and results to
//! its output, so it can be driven by a terminal or by in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradebook_core::{Gradebook, Student, StudentId};

use crate::config::GradebookConfig;
use crate::render::{format_average, render_students};

const MENU: &str = "\
--- Student Gradebook ---
1. Add student
2. Add grade to student
3. Show all students
4. Show students with average below a threshold
5. Sort by average (descending)
6. Sort by average (ascending)
7. Exit";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One run of the interactive menu.
pub struct Session<R, W> {
    gradebook: Gradebook,
    config: GradebookConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GradebookConfig) -> Self {
        Self {
            gradebook: Gradebook::new(),
            config,
            input,
            output,
        }
    }

    /// Run until the user picks "Exit" or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Choose an action: ")? else {
                break;
            };

            let flow = match line.trim().parse::<u32>() {
                Ok(1) => self.add_student()?,
                Ok(2) => self.add_grade()?,
                Ok(3) => self.show_all()?,
                Ok(4) => self.show_below_threshold()?,
                Ok(5) => self.show_sorted(false)?,
                Ok(6) => self.show_sorted(true)?,
                Ok(7) => {
                    writeln!(self.output, "Exiting.")?;
                    Flow::Exit
                }
                Ok(_) => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number from 1 to 7."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("Enter full name (Surname Name Patronymic): ")? else {
            return Ok(Flow::Exit);
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [family, given, patronymic] = parts.as_slice() else {
            writeln!(
                self.output,
                "Invalid full name. Enter exactly three words separated by spaces."
            )?;
            return Ok(Flow::Continue);
        };

        let id = self.gradebook.add_student(*given, *family, *patronymic);
        if let Some(student) = self.gradebook.student(id) {
            writeln!(
                self.output,
                "Student '{}' added with ID {id}",
                student.full_name()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn add_grade(&mut self) -> Result<Flow> {
        if self.gradebook.is_empty() {
            writeln!(self.output, "No students yet. Add a student first.")?;
            return Ok(Flow::Continue);
        }
        self.show_all()?;

        let id = loop {
            let Some(line) = self.prompt("Enter student ID: ")? else {
                return Ok(Flow::Exit);
            };
            match line.parse::<StudentId>() {
                Ok(id) if self.gradebook.contains(id) => break id,
                Ok(id) => {
                    writeln!(self.output, "Student with ID {id} not found. Try again.")?;
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid ID. Please enter a whole number."
                    )?;
                }
            }
        };

        let Some(line) = self.prompt("Enter grade (1-5): ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(grade) = line.trim().parse::<i64>() else {
            writeln!(
                self.output,
                "Invalid grade. Please enter a whole number from 1 to 5."
            )?;
            return Ok(Flow::Continue);
        };

        match self.gradebook.add_grade_to_student(id, grade) {
            Ok(()) => writeln!(self.output, "Grade added.")?,
            Err(e) if e.is_invalid_grade() => writeln!(self.output, "Grade rejected: {e}.")?,
            Err(e) => writeln!(self.output, "Error: {e}.")?,
        }
        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nAll students:")?;
        let students: Vec<&Student> = self.gradebook.all_students().collect();
        let rendered = self.render(&students)?;
        writeln!(self.output, "{rendered}")?;
        Ok(Flow::Continue)
    }

    fn show_below_threshold(&mut self) -> Result<Flow> {
        let default = self.config.default_threshold;
        let Some(line) = self.prompt(&format!("Enter threshold (empty for {default}): "))? else {
            return Ok(Flow::Exit);
        };

        let threshold = if line.trim().is_empty() {
            default
        } else {
            match line.trim().parse::<f64>() {
                Ok(t) if t.is_finite() => t,
                _ => {
                    writeln!(self.output, "Invalid threshold. Please enter a number.")?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let students = self.gradebook.students_below_average(threshold);
        let rendered = self.render(&students)?;
        writeln!(
            self.output,
            "\nStudents with average below {}:\n{rendered}",
            format_average(threshold, self.config.average_precision)
        )?;
        Ok(Flow::Continue)
    }

    fn show_sorted(&mut self, ascending: bool) -> Result<Flow> {
        let heading = if ascending {
            "Sorted by average (ascending):"
        } else {
            "Sorted by average (descending):"
        };
        let students = self.gradebook.sort_by_average(ascending);
        let rendered = self.render(&students)?;
        writeln!(self.output, "{heading}\n{rendered}")?;
        Ok(Flow::Continue)
    }

    fn render(&self, students: &[&Student]) -> Result<String> {
        render_students(
            students,
            self.config.output_format,
            self.config.average_precision,
        )
    }

    /// Print `text` and read the answer. Returns `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
impl<R, W> Session<R, W> {
    fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }
}
