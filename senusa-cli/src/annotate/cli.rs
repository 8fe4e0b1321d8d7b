use clap::{Arg, ArgAction, Command, value_parser};

pub const ANNOTATE_CMD: &str = "annotate";

pub const FORMAT_TABLE: &str = "table";
pub const FORMAT_TSV: &str = "tsv";
pub const FORMAT_JSON: &str = "json";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .author("SENUSA")
        .about("Annotate the variants of a VCF file with Ensembl VEP and print the result table.")
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to a VCF file (.vcf or .vcf.gz), or '-' for stdin"),
        )
        .arg(
            Arg::new("api")
                .long("api")
                .help("Annotation endpoint URL (defaults to $SENUSA_VEP_API, then Ensembl)"),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_parser(value_parser!(usize))
                .help("Variants per request, at most 200"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file with `api` and `chunk_size` settings"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser([FORMAT_TABLE, FORMAT_TSV, FORMAT_JSON])
                .default_value(FORMAT_TABLE)
                .help("Output format of the result table"),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .short('s')
                .value_parser(value_parser!(usize))
                .value_delimiter(',')
                .num_args(1..)
                .conflicts_with("select-all")
                .help("Toggle the selection of these 0-based rows, comma separated"),
        )
        .arg(
            Arg::new("select-all")
                .long("select-all")
                .action(ArgAction::SetTrue)
                .help("Select every row"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Write the selected rows as a JSON report to this path"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Print consequence and impact counts of the selected rows"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress bar over submitted chunks"),
        )
}
