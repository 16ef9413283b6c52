//! T-SQL CRUD query generation.
//!
//! Turns one table specification into one `.sql` file with five statement
//! sections: get-by-key, get-all, insert, update, delete. The three keyed
//! statements degrade to a sentinel comment when no key column can be
//! inferred; insert and get-all are always buildable.

mod generator;
mod query_file;
mod statements;

pub use generator::TsqlQueryGenerator;
pub use query_file::QueryFile;
pub use statements::{
    KEY_NOT_FOUND, delete_statement, get_all_statement, get_by_key_statement, insert_statement,
    update_statement,
};
