pub mod cell;
pub mod profile;
pub mod result;
pub mod row;
pub mod schema;
pub mod score_input;
pub mod table;
