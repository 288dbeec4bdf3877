//! Column descriptors and cell resolution.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, Record};

/// Horizontal alignment hint for a column. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Pure rendering override for one column: receives the extracted raw value
/// and the whole record, returns display text.
pub type RenderFn<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;

/// Declarative description of one visible field.
///
/// Resolution order when producing display text: a `render` closure wins;
/// otherwise the raw accessed value is shown as-is ([`CellValue::Null`]
/// renders empty). When `accessor` is absent the column `key` doubles as the
/// field name, matching how callers usually line the two up.
pub struct Column<T> {
    /// Unique identifier among the columns of one table instance.
    pub key: String,
    /// Display label for the header row.
    pub header: String,
    /// Field name used for raw value extraction; defaults to `key`.
    pub accessor: Option<String>,
    /// Optional formatting override.
    pub render: Option<RenderFn<T>>,
    /// Whether header clicks may sort by this column.
    pub sortable: bool,
    pub align: Align,
    /// Preferred width in terminal cells; `None` shares space evenly.
    pub width: Option<u16>,
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            accessor: None,
            render: None,
            sortable: false,
            align: Align::Left,
            width: None,
        }
    }

    pub fn accessor(mut self, field: impl Into<String>) -> Self {
        self.accessor = Some(field.into());
        self
    }

    pub fn render(mut self, f: impl Fn(&CellValue, &T) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Field name this column reads from the record.
    pub fn field_name(&self) -> &str {
        self.accessor.as_deref().unwrap_or(&self.key)
    }

    /// Display-independent underlying value, used by the sort stage.
    pub fn raw_value(&self, record: &T) -> CellValue
    where
        T: Record,
    {
        record.field(self.field_name())
    }

    /// Display text for one cell. Never fails; unresolvable fields render
    /// empty.
    pub fn display_value(&self, record: &T) -> String
    where
        T: Record,
    {
        let raw = self.raw_value(record);
        match &self.render {
            Some(render) => render(&raw, record),
            None => raw.to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            render: self.render.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .finish()
    }
}
