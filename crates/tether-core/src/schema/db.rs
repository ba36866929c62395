mod column;
pub use column::{Column, ColumnId};

mod fk;
pub use fk::ForeignKey;

mod schema;
pub use schema::{Schema, SchemaBuilder};

mod table;
pub use table::{Table, TableId};
