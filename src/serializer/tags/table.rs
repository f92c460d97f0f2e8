//! Tables keep their row/cell structure through extraction.
//!
//! Rows and cells only count as such when they sit where the HTML table
//! model puts them, so a stray `td` elsewhere classifies inline.

use crate::document::{Block, Table, TableCell, TableRow};
use crate::error::Result;
use crate::model::Role;
use crate::serializer::{
    Element, SerializeContext, TagSerializer, block_children, cell_children, row_children,
};

const TABLE_CHILDREN: &str = "table > tbody, table > thead, table > tfoot";

const TABLE_ROWS: &str =
    "table > tr, table > tbody > tr, table > thead > tr, table > tfoot > tr";

const TABLE_CELLS: &str = "table > tr > td, table > tr > th, \
     table > tbody > tr > td, table > tbody > tr > th, \
     table > thead > tr > td, table > thead > tr > th, \
     table > tfoot > tr > td, table > tfoot > tr > th";

/// `table` → [`Block::Table`] of its rows. A table without rows produces
/// nothing.
pub struct TableSerializer;

impl TagSerializer for TableSerializer {
    fn name(&self) -> &'static str {
        "table"
    }

    fn selector(&self) -> &str {
        "table"
    }

    fn role(&self) -> Role {
        Role::Table
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let rows = row_children(children, ctx);
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Element::Block(Block::Table(Table { rows }))])
    }
}

/// `thead`, `tbody`, `tfoot`: transparent, rows pass through to the table.
pub struct TableChildSerializer;

impl TagSerializer for TableChildSerializer {
    fn name(&self) -> &'static str {
        "table-child"
    }

    fn selector(&self) -> &str {
        TABLE_CHILDREN
    }

    fn role(&self) -> Role {
        Role::TableChild
    }

    fn serialize(
        &self,
        _ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        Ok(children)
    }
}

pub struct TableRowSerializer;

impl TagSerializer for TableRowSerializer {
    fn name(&self) -> &'static str {
        "table-row"
    }

    fn selector(&self) -> &str {
        TABLE_ROWS
    }

    fn role(&self) -> Role {
        Role::TableRow
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let cells = cell_children(children, ctx);
        Ok(vec![Element::Row(TableRow { cells })])
    }
}

/// `td` and `th`; `th` marks a header cell.
pub struct TableCellSerializer;

impl TagSerializer for TableCellSerializer {
    fn name(&self) -> &'static str {
        "table-cell"
    }

    fn selector(&self) -> &str {
        TABLE_CELLS
    }

    fn role(&self) -> Role {
        Role::TableCell
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let header = ctx.element(self.name())?.tag_name() == "th";
        let children = block_children(children, ctx);
        Ok(vec![Element::Cell(TableCell { header, children })])
    }
}
