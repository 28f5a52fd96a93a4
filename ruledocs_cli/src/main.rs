use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use ruledocs_cli::Commands;
use ruledocs_cli::OutputFormat;
use ruledocs_cli::RuleDocsCli;
use ruledocs_core::CheckResult;
use ruledocs_core::DocsContext;
use ruledocs_core::check_docs;
use ruledocs_core::load_context;
use ruledocs_core::update_docs;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = RuleDocsCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	setup_logging(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		None => run_update(&args, false),
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
	};

	if let Err(e) = result {
		match e.downcast::<ruledocs_core::RuleDocsError>() {
			Ok(docs_err) => {
				let report: miette::Report = (*docs_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool, use_color: bool) {
	let level = if verbose { "debug" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &RuleDocsCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load(args: &RuleDocsCli) -> Result<DocsContext, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = load_context(&root)?;

	if args.verbose {
		println!(
			"Loaded {} rule(s), pages in {}",
			ctx.rules.len(),
			make_relative(&ctx.docs_dir(), &root)
		);
	}

	Ok(ctx)
}

fn run_update(args: &RuleDocsCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load(args)?;

	if dry_run {
		let result = check_docs(&ctx)?;
		if result.is_ok() {
			println!("All rule pages are already up to date.");
			return Ok(());
		}

		println!("Dry run: would update {} page(s):", result.stale.len());
		for entry in &result.stale {
			println!("  {}", make_relative(&entry.path, &ctx.root));
		}
		return Ok(());
	}

	let result = update_docs(&ctx)?;
	if result.updated_count() == 0 {
		println!("All rule pages are already up to date.");
		return Ok(());
	}

	println!("Updated {} page(s).", result.updated_count());
	if args.verbose {
		for path in &result.updated_files {
			println!("  {}", make_relative(path, &ctx.root));
		}
	}

	Ok(())
}

fn run_check(
	args: &RuleDocsCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load(args)?;
	let result = check_docs(&ctx)?;

	match format {
		OutputFormat::Json => {
			let stale: Vec<serde_json::Value> = result
				.stale
				.iter()
				.map(|entry| {
					serde_json::json!({
						"rule": entry.rule_id,
						"file": make_relative(&entry.path, &ctx.root),
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": result.is_ok(),
				"checked": result.checked,
				"stale": stale,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			if result.is_ok() {
				println!(
					"Check passed: all {} rule page(s) are up to date.",
					result.checked
				);
			} else {
				print_stale(&result, &ctx.root, show_diff);
			}
		}
	}

	if !result.is_ok() {
		process::exit(1);
	}

	Ok(())
}

fn print_stale(result: &CheckResult, root: &Path, show_diff: bool) {
	eprintln!("Check failed.");
	eprintln!("Stale pages:");

	for entry in &result.stale {
		eprintln!(
			"  `{}` at {}",
			entry.rule_id,
			make_relative(&entry.path, root)
		);

		if show_diff {
			print_diff(&entry.current, &entry.expected);
		}
	}

	eprintln!();
	eprintln!(
		"{} rule page(s) are out of date. Run `ruledocs` to fix.",
		result.stale.len()
	);
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
