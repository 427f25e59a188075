use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use sthenos::catalog::{Category, ElementEntry};
use sthenos::session::{JudgeSession, RecordedElement, SessionTotals};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_catalog(category: Category, entries: &[ElementEntry]) {
    let mut table = new_table();
    let power_moves = category == Category::PowerMoves;

    let mut header = vec![
        Cell::new(category.label()).add_attribute(Attribute::Bold),
        Cell::new("Base").fg(Color::Cyan),
    ];
    if power_moves {
        header.push(Cell::new("Static / 3"));
    }
    table.add_row(header);
    align_right(&mut table, 1..=2);

    for entry in entries {
        let name = if entry.is_super {
            Cell::new(format!("{} [S]", entry.name)).fg(Color::Yellow)
        } else {
            Cell::new(&entry.name)
        };
        let mut row = vec![name, Cell::new(format!("{:.2}", entry.base_value))];
        if let Some(points) = entry.static_base_points() {
            row.push(Cell::new(format!("{:.3}", points)));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_breakdown(rec: &RecordedElement) {
    let d = &rec.details;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(&rec.display_name).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    let rows = [
        ("Base", format!("{:.3}", d.base_points)),
        ("Position", format!("x{}", d.position_factor)),
        ("Difficulty", format!("x{}", d.difficulty_factor)),
        ("Cleanliness", format!("x{:.1}", d.cleanliness_factor)),
        ("Extras", format!("+{}", d.extra_points)),
        (
            "Repetition",
            format!("#{} x{}", d.occurrence, d.repetition_factor),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.4}", d.score)).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}

pub fn print_elements(session: &JudgeSession) {
    println!(
        "\nParticipant {} ({})",
        session.participant(),
        session.difficulty()
    );
    if session.elements().is_empty() {
        println!("No elements recorded.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Element"),
        Cell::new("Clean"),
        Cell::new("Rep"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    align_right(&mut table, 3..=5);

    for (i, rec) in session.elements().iter().enumerate() {
        let rep = if rec.details.repetition_factor < 1.0 {
            Cell::new(format!("#{} x{}", rec.details.occurrence, rec.details.repetition_factor))
                .fg(Color::Red)
        } else {
            Cell::new(format!("#{}", rec.details.occurrence))
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(rec.category.label()),
            Cell::new(&rec.display_name),
            Cell::new(rec.cleanliness()),
            rep,
            Cell::new(format!("{:.3}", rec.score())).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_totals(totals: &[SessionTotals]) {
    let Some(first) = totals.first() else {
        return;
    };

    let mut table = new_table();
    let mut header = vec![Cell::new("Participant").add_attribute(Attribute::Bold)];
    header.extend(first.subtotals.iter().map(|(c, _)| Cell::new(c.label())));
    header.push(Cell::new("PM Bonus").fg(Color::Green));
    header.push(Cell::new("Total").add_attribute(Attribute::Bold));
    let last = header.len() - 1;
    table.add_row(header);
    align_right(&mut table, 1..=last);

    let best = totals
        .iter()
        .map(|t| t.grand_total)
        .fold(f64::NEG_INFINITY, f64::max);

    for t in totals {
        let name = if totals.len() > 1 && t.grand_total == best {
            Cell::new(&t.participant)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&t.participant).add_attribute(Attribute::Bold)
        };
        let mut row = vec![name];
        row.extend(t.subtotals.iter().map(|(_, s)| Cell::new(format!("{:.2}", s))));
        row.push(Cell::new(format!("{:.2}", t.power_move_bonus)));
        row.push(Cell::new(format!("{:.2}", t.grand_total)).add_attribute(Attribute::Bold));
        table.add_row(row);
    }
    println!("\n{}", table);
}
