use clap::{Arg, ArgAction, Command, value_parser};

pub const EXTRACT_CMD: &str = "extract";

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .author("SENUSA")
        .about("Print the variant descriptors a VCF file would be annotated with.")
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to a VCF file (.vcf or .vcf.gz), or '-' for stdin"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the JSON request payload instead of one descriptor per line"),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_parser(value_parser!(usize))
                .help("With --json, print one payload per chunk of this many variants (at most 200)"),
        )
}
