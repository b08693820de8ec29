//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use tinysrc::error::Result;

pub mod json;
pub mod table;

/// Render a collection as a table of `D` rows or as JSON of the raw items.
pub fn render_list<T, D>(items: &[T], format: OutputFormat) -> Result<String>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<D> = items.iter().map(D::from).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Json => Ok(json::format_json(items)?),
    }
}

/// Render a single item as a key/value table or as JSON.
pub fn render_one<T, D>(item: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
{
    match format {
        OutputFormat::Table => Ok(table::format_record(&D::from(item))),
        OutputFormat::Json => Ok(json::format_json(item)?),
    }
}
