use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Regenerate lint rule documentation pages from rule metadata.",
	long_about = "ruledocs rewrites the header, footer, front-matter, and example code blocks of \
	              every rule page listed in the rule registry.\n\nRunning `ruledocs` without a \
	              subcommand updates all pages in place.\n\nQuick start:\n  ruledocs         \
	              Regenerate every page\n  ruledocs check   Verify every page is up to date"
)]
pub struct RuleDocsCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Regenerate every rule page in place.
	///
	/// Reads each page named in the rule registry, rewrites its header,
	/// footer, front-matter, and example code blocks, and writes it back
	/// with the configured line ending. This is the default command.
	Update {
		/// Preview changes without writing files. Prints which pages would
		/// be modified.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that every rule page is up to date.
	///
	/// Regenerates pages in memory and exits with a non-zero status code if
	/// any of them differ from what is on disk. Intended for CI.
	Check {
		/// Show a unified diff for each stale page.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
