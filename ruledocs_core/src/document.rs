use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::DocsConfig;
use crate::LineEnding;
use crate::RuleDescriptor;
use crate::RuleDocsError;
use crate::RuleDocsResult;
use crate::registry::load_registry;
use crate::transform::render_document;

/// A loaded configuration together with the rules it describes, ready for
/// checking or regenerating.
#[derive(Debug)]
pub struct DocsContext {
	/// Project root that relative config paths are resolved against.
	pub root: PathBuf,
	pub config: DocsConfig,
	/// Rules in registry order.
	pub rules: Vec<RuleDescriptor>,
}

impl DocsContext {
	pub fn new(root: impl Into<PathBuf>, config: DocsConfig, rules: Vec<RuleDescriptor>) -> Self {
		Self {
			root: root.into(),
			config,
			rules,
		}
	}

	pub fn docs_dir(&self) -> PathBuf {
		self.root.join(&self.config.docs_dir)
	}

	/// Location of the documentation page for `rule`.
	pub fn doc_path(&self, rule: &RuleDescriptor) -> PathBuf {
		self.docs_dir().join(rule.doc_file_name())
	}
}

/// Load the config at `root` (or defaults) and the rule registry it points
/// to.
pub fn load_context(root: &Path) -> RuleDocsResult<DocsContext> {
	let config = DocsConfig::load_or_default(root)?;
	let rules = load_registry(&root.join(&config.registry), &config.rule_prefix)?;

	Ok(DocsContext::new(root, config, rules))
}

/// A rule page as it currently exists on disk.
#[derive(Debug)]
pub struct DocFile {
	pub path: PathBuf,
	/// Raw file content with its original line endings.
	pub raw: String,
}

impl DocFile {
	/// Read the page for `rule` at `path`. A missing page is reported as
	/// [`RuleDocsError::MissingDocFile`].
	pub fn read(rule: &RuleDescriptor, path: PathBuf) -> RuleDocsResult<Self> {
		match std::fs::read_to_string(&path) {
			Ok(raw) => Ok(Self { path, raw }),
			Err(e) if e.kind() == ErrorKind::NotFound => {
				Err(RuleDocsError::MissingDocFile {
					rule: rule.rule_id().to_string(),
					path: path.display().to_string(),
				})
			}
			Err(e) => Err(e.into()),
		}
	}

	/// The page content with line endings normalized to `\n`.
	pub fn content(&self) -> String {
		normalize_line_endings(&self.raw)
	}
}

/// The result of regenerating one page in memory.
#[derive(Debug)]
pub struct DocUpdate {
	pub rule_id: String,
	pub path: PathBuf,
	/// Current content, LF-normalized.
	pub current: String,
	/// Regenerated content, LF-normalized.
	pub expected: String,
	/// Whether writing `expected` with the configured line ending would
	/// change the bytes on disk.
	pub changed: bool,
}

/// Result of checking every page without writing.
#[derive(Debug)]
pub struct CheckResult {
	/// Pages whose content differs from the regenerated output.
	pub stale: Vec<DocUpdate>,
	/// Number of pages examined.
	pub checked: usize,
}

impl CheckResult {
	/// Returns true if every page is up to date.
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty()
	}
}

/// Result of regenerating every page.
#[derive(Debug)]
pub struct UpdateResult {
	/// Pages that were rewritten, in registry order.
	pub updated_files: Vec<PathBuf>,
	/// Number of pages already up to date.
	pub unchanged: usize,
}

impl UpdateResult {
	pub fn updated_count(&self) -> usize {
		self.updated_files.len()
	}
}

/// Read and regenerate the page for a single rule without touching disk.
#[tracing::instrument(skip_all, fields(rule = %rule.rule_id()))]
pub fn regenerate_doc(ctx: &DocsContext, rule: &RuleDescriptor) -> RuleDocsResult<DocUpdate> {
	let file = DocFile::read(rule, ctx.doc_path(rule))?;
	let current = file.content();
	let expected = render_document(&current, rule, &ctx.config);
	let changed = ctx.config.line_ending.apply(&expected) != file.raw;
	tracing::debug!(changed, path = %file.path.display(), "regenerated page");

	Ok(DocUpdate {
		rule_id: rule.rule_id().to_string(),
		path: file.path,
		current,
		expected,
		changed,
	})
}

/// Regenerate every page in registry order, writing each one before moving
/// on to the next. The first missing page aborts the run.
pub fn update_docs(ctx: &DocsContext) -> RuleDocsResult<UpdateResult> {
	let mut updated_files = Vec::new();
	let mut unchanged = 0;

	for rule in &ctx.rules {
		let update = regenerate_doc(ctx, rule)?;

		if update.changed {
			write_doc(&update.path, &update.expected, ctx.config.line_ending)?;
			tracing::info!("updated {}", update.path.display());
			updated_files.push(update.path);
		} else {
			unchanged += 1;
		}
	}

	Ok(UpdateResult {
		updated_files,
		unchanged,
	})
}

/// Regenerate every page in memory and report the ones that are out of date.
pub fn check_docs(ctx: &DocsContext) -> RuleDocsResult<CheckResult> {
	let mut stale = Vec::new();

	for rule in &ctx.rules {
		let update = regenerate_doc(ctx, rule)?;
		if update.changed {
			stale.push(update);
		}
	}

	Ok(CheckResult {
		stale,
		checked: ctx.rules.len(),
	})
}

/// Write LF-normalized `content` to `path` using `line_ending`.
pub fn write_doc(path: &Path, content: &str, line_ending: LineEnding) -> RuleDocsResult<()> {
	std::fs::write(path, line_ending.apply(content))?;
	Ok(())
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}
