//! The prompt loop: reads commands and turns them into controller calls.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use student_core::{Controller, Transport, View};
use tracing::debug;

use crate::command::{self, Command, HELP};
use crate::terminal::TerminalView;

pub type Console<T, R, W> = Controller<T, TerminalView<R, W>>;

/// Loads the table, then serves commands until `quit` or end of input.
pub fn run<T, R, W>(ui: &mut Console<T, R, W>) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    ui.start();

    loop {
        if let Some(e) = ui.view_mut().take_error() {
            return Err(e).context("writing to terminal");
        }

        let prompt = if ui.modal().is_open() { "form> " } else { "> " };
        let Some(line) = ui.view_mut().read_line(prompt).context("reading command")? else {
            break;
        };

        match command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => dispatch(ui, cmd),
            Ok(None) => {}
            Err(e) => ui.view_mut().print(&format!("? {e}")),
        }
    }

    Ok(())
}

fn dispatch<T, R, W>(ui: &mut Console<T, R, W>, cmd: Command)
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    debug!(?cmd, "dispatching");
    match cmd {
        Command::Refresh => ui.refresh(),
        Command::Add => ui.open_create(),
        Command::Edit(id) => {
            if !ui.edit_row(&id) {
                ui.view_mut().print(&format!("? no student #{id} on screen"));
            }
        }
        Command::Delete(id) => {
            if !ui.delete_row(&id) {
                ui.view_mut().print(&format!("? no student #{id} on screen"));
            }
        }
        Command::Set(field, value) => {
            if ui.modal().is_open() {
                ui.set_field(field, value);
            } else {
                ui.view_mut().print("? no form is open, use `add` or `edit <id>`");
            }
        }
        Command::Show => {
            ui.view_mut().print_rows();
            if ui.modal().is_open() {
                let title = ui.modal().title();
                let draft = ui.modal().draft().clone();
                ui.view_mut().show_modal(title, &draft);
            }
        }
        Command::Submit => {
            if ui.modal().is_open() {
                ui.submit();
            } else {
                ui.view_mut().print("? no form is open");
            }
        }
        Command::Close => {
            if ui.modal().is_open() {
                ui.close_modal();
            }
        }
        Command::Help => ui.view_mut().print(HELP),
        Command::Quit => {}
    }
}
