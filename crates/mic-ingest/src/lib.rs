pub mod csv_table;
pub mod frame;

pub use csv_table::{CsvTable, read_csv_table, write_csv};
pub use frame::{
    ColumnValidation, any_to_raw_input, guess_mic_columns, validate_column, validate_frame,
};
