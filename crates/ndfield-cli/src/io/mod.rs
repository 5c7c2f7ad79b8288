pub mod ndfield_file;
pub mod points_table;
