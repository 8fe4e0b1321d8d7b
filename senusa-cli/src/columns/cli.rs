use clap::Command;

pub const COLUMNS_CMD: &str = "columns";

pub fn create_columns_cli() -> Command {
    Command::new(COLUMNS_CMD)
        .author("SENUSA")
        .about("List the columns of the annotation table.")
}
