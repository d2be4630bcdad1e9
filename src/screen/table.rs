use serde::{Deserialize, Serialize};

use crate::screen::{naming::start_case, screen_model::Screen};

/// Header cell of a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub display_name: String,
    pub name: String,
}

/// Everything a data table needs to query and render a screen's items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub name: String,

    /// `{api_base}/{prefix/}{name}/query`
    pub url: String,

    pub columns: Vec<String>,

    /// One header per column, same order as `columns`
    pub table_structure: Vec<ColumnHeader>,

    /// First configured column
    pub default_sort: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,
}

impl Screen {
    /// Table projection, or `None` when no columns are configured.
    pub fn table_data(&self) -> Option<TableData> {
        let default_sort = self.table_columns().first()?.clone();

        let table_structure = self
            .table_columns()
            .iter()
            .map(|column| ColumnHeader {
                display_name: start_case(column),
                name: column.clone(),
            })
            .collect();

        Some(TableData {
            name: self.name().to_string(),
            url: self.query_url(),
            columns: self.table_columns().to_vec(),
            table_structure,
            default_sort,
            id_field: self.id_field_name().map(str::to_string),
        })
    }
}
