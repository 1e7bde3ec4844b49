//! Raw trip rows rendered as a bordered console table.
//!
//! Columns follow the dataset schema: the id, end time and demographic
//! columns only appear when the loaded file carries them.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use bikeshare_core::formatting::format_number;
use bikeshare_core::models::{DatasetSchema, TripRecord};
use bikeshare_data::pager::Page;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one pager window. Returns `None` for an empty page.
pub fn render_page(page: &Page<'_>, schema: DatasetSchema) -> Option<String> {
    if page.rows.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = header_labels(schema)
        .into_iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header);

    for (offset, record) in page.rows.iter().enumerate() {
        table.add_row(row_cells(page.start + offset, record, schema));
    }

    Some(table.to_string())
}

fn header_labels(schema: DatasetSchema) -> Vec<&'static str> {
    let mut labels = vec!["#"];
    if schema.has_row_id {
        labels.push("Id");
    }
    labels.push("Start Time");
    if schema.has_end_time {
        labels.push("End Time");
    }
    labels.extend(["Trip Duration", "Start Station", "End Station", "User Type"]);
    if schema.has_gender {
        labels.push("Gender");
    }
    if schema.has_birth_year {
        labels.push("Birth Year");
    }
    labels
}

fn row_cells(index: usize, record: &TripRecord, schema: DatasetSchema) -> Vec<Cell> {
    let missing = || "-".to_string();

    let mut cells = vec![Cell::new(index).set_alignment(CellAlignment::Right)];
    if schema.has_row_id {
        cells.push(Cell::new(
            record.row_id.map_or_else(missing, |id| id.to_string()),
        ));
    }
    cells.push(Cell::new(record.start_time.format(TIMESTAMP_FORMAT)));
    if schema.has_end_time {
        cells.push(Cell::new(record.end_time.map_or_else(missing, |t| {
            t.format(TIMESTAMP_FORMAT).to_string()
        })));
    }
    cells.push(
        Cell::new(format_number(record.trip_duration, 0)).set_alignment(CellAlignment::Right),
    );
    cells.push(Cell::new(&record.start_station));
    cells.push(Cell::new(&record.end_station));
    cells.push(Cell::new(record.user_type.clone().unwrap_or_else(missing)));
    if schema.has_gender {
        cells.push(Cell::new(record.gender.clone().unwrap_or_else(missing)));
    }
    if schema.has_birth_year {
        cells.push(Cell::new(
            record.birth_year.map_or_else(missing, |y| y.to_string()),
        ));
    }
    cells
}

// ── Tests ─────────────────────────────────────────────────────────────────────
