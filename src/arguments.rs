use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "change-version")]
pub struct Arguments {
    /// Project root containing package.json, src-tauri/ and src/pages/
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
    /// Reject versions that are not MAJOR.MINOR.PATCH instead of writing them verbatim
    #[arg(long)]
    pub strict: bool,
    /// Version to write; prompted for on stdin when omitted
    pub new_version: Option<String>,
}
