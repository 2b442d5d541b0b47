use super::human_time::format_human;
use super::task::{Task, TaskField, TaskProjection, TaskSelector};
use chrono::{DateTime, Utc};
use prettytable::{row, Cell, Row, Table};

/// Terminal rendering of tasks with `prettytable`.
pub struct View {}

impl View {
    /// Prints the selected columns of each task as a table.
    pub fn tasks(tasks: &[TaskProjection], selector: &TaskSelector) {
        let fields = selector.fields();
        let now = Utc::now();

        let mut table = Table::new();
        table.set_titles(Row::new(fields.iter().map(|f| Cell::new(&f.as_str().to_uppercase())).collect()));
        for task in tasks {
            table.add_row(Row::new(fields.iter().map(|f| Cell::new(&Self::cell(task, *f, now))).collect()));
        }
        table.printstd();
    }

    /// Prints every field of one task.
    pub fn task(task: &Task) {
        let now = Utc::now();

        let mut table = Table::new();
        table.add_row(row!["ID", task.id_string()]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["STATUS", Self::status(task.is_completed)]);
        table.add_row(row!["CREATED", Self::timestamp(&task.created_at, now)]);
        table.add_row(row!["DUE", Self::timestamp(&task.due_date, now)]);
        table.printstd();
    }

    fn cell(task: &TaskProjection, field: TaskField, now: DateTime<Utc>) -> String {
        match field {
            TaskField::Id => task.id.map(|id| id.to_string()).unwrap_or_default(),
            TaskField::Description => task.description.clone().unwrap_or_default(),
            TaskField::IsCompleted => task.is_completed.map(Self::status).unwrap_or_default().to_string(),
            TaskField::CreatedAt => task.created_at.map(|t| format_human(t, now)).unwrap_or_default(),
            TaskField::DueDate => task.due_date.map(|t| format_human(t, now)).unwrap_or_default(),
        }
    }

    fn status(is_completed: bool) -> &'static str {
        if is_completed {
            "DONE"
        } else {
            "-"
        }
    }

    fn timestamp(t: &DateTime<Utc>, now: DateTime<Utc>) -> String {
        format!("{} ({})", t.format("%Y-%m-%d %H:%M"), format_human(*t, now))
    }
}
