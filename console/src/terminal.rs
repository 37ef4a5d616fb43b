//! Line-oriented terminal rendering of the student table and form.

use std::io::{self, BufRead, Write};

use student_core::{Draft, Field, Student, UiState, View};

const HEADERS: [&str; 4] = ["ID", "NAME", "AGE", "EMAIL"];

/// `View` over any reader/writer pair; stdin/stdout in the binary.
///
/// `View` methods cannot fail, so the first write error is parked and
/// handed back through `take_error`.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    rows: Vec<Student>,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            rows: Vec::new(),
            error: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    pub fn print(&mut self, text: &str) {
        let result = writeln!(self.output, "{text}");
        self.record(result);
    }

    /// Re-prints the table, or nothing when no rows are on screen.
    pub fn print_rows(&mut self) {
        if !self.rows.is_empty() {
            let table = format_table(&self.rows);
            self.print(&table);
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<R: BufRead, W: Write> View for TerminalView<R, W> {
    fn show_state(&mut self, state: UiState) {
        match state {
            UiState::Loading => self.print("Loading students..."),
            UiState::Error => self.print("Could not load students. Check that the API is running."),
            UiState::Empty => self.print("No students yet. Use `add` to create one."),
            UiState::Populated => {
                let table = format_table(&self.rows);
                self.print(&table);
            }
        }
    }

    fn render_rows(&mut self, rows: &[Student]) {
        self.rows = rows.to_vec();
    }

    fn show_modal(&mut self, title: &str, draft: &Draft) {
        let form = format_form(title, draft);
        self.print(&form);
    }

    fn hide_modal(&mut self) {
        self.print("(form closed)");
    }

    fn alert(&mut self, message: &str) {
        self.print(&format!("! {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                self.error.get_or_insert(e);
                false
            }
        }
    }
}

/// Fixed-width table, one line per student, columns sized to fit.
pub fn format_table(rows: &[Student]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|s| {
            [
                s.id.as_ref().map(|id| format!("#{id}")).unwrap_or_default(),
                s.name.clone(),
                s.age.map(|age| age.to_string()).unwrap_or_default(),
                s.email.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cols: [&str; 4]| -> String {
        cols.iter()
            .zip(widths)
            .map(|(col, width)| format!("{col:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(HEADERS)];
    out.extend(
        cells
            .iter()
            .map(|row| line([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()])),
    );
    out.join("\n")
}

pub fn format_form(title: &str, draft: &Draft) -> String {
    let mut out = format!("== {title} ==");
    for field in [Field::Name, Field::Email, Field::Age] {
        out.push_str(&format!("\n  {:<6} {}", field.label(), draft.get(field)));
    }
    out.push_str("\n(set <field> <value>, then submit; close to cancel)");
    out
}
