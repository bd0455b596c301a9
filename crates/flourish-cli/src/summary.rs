use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use flourish_validate::{Category, FormValidator};

use crate::types::{CheckOutcome, CheckReport};

pub fn print_summary(report: &CheckReport) {
    println!("{}", summary_table(report));
    if let Some(table) = issue_table(report) {
        println!();
        println!("Issues:");
        println!("{table}");
    }
}

/// One row per submission plus a total row.
pub fn summary_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("#"),
        header_cell("Form"),
        header_cell("Subject"),
        header_cell("Result"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for outcome in &report.outcomes {
        table.add_row(vec![
            Cell::new(file_name(outcome)),
            Cell::new(outcome.index + 1),
            form_cell(&outcome.form),
            outcome
                .subject
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            result_cell(outcome),
            count_cell(outcome.failure.as_ref().map_or(0, |f| f.errors.len()), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.outcomes.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format!("{} failed", report.failed_count())).add_attribute(Attribute::Bold),
        count_cell(report.error_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Field errors of failed submissions, in the order they were raised.
pub fn issue_table(report: &CheckReport) -> Option<Table> {
    let failed: Vec<&CheckOutcome> = report
        .outcomes
        .iter()
        .filter(|outcome| !outcome.passed())
        .collect();
    if failed.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("#"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for outcome in failed {
        let Some(failure) = outcome.failure.as_ref() else {
            continue;
        };
        for error in &failure.errors {
            table.add_row(vec![
                Cell::new(file_name(outcome)),
                Cell::new(outcome.index + 1),
                Cell::new(&error.field).add_attribute(Attribute::Bold),
                Cell::new(&error.code),
                category_cell(error.category),
                Cell::new(&error.message),
            ]);
        }
    }
    Some(table)
}

pub fn forms_table(forms: &[Box<dyn FormValidator>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Form", "Name"]);
    apply_table_style(&mut table);
    for form in forms {
        table.add_row(vec![form.id(), form.name()]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_name(outcome: &CheckOutcome) -> String {
    outcome.path.file_name().map_or_else(
        || outcome.path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn form_cell(form: &str) -> Cell {
    Cell::new(form)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn result_cell(outcome: &CheckOutcome) -> Cell {
    if outcome.passed() {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn category_cell(category: Category) -> Cell {
    let color = match category {
        Category::Presence => Color::Yellow,
        Category::Consistency => Color::Magenta,
        Category::Temporal => Color::Red,
        Category::Lifecycle => Color::Red,
    };
    Cell::new(category.label()).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
