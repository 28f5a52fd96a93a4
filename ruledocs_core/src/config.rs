use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::RuleDocsError;
use crate::RuleDocsResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"ruledocs.toml",
	".ruledocs.toml",
	".config/ruledocs.toml",
];

/// Directory holding one `<name>.md` page per rule, relative to the root.
pub const DEFAULT_DOCS_DIR: &str = "docs/rules";

/// Rule manifest used when the config does not name one.
pub const DEFAULT_REGISTRY: &str = "rules.json";

/// Placeholder substituted with the rule name (or preset id) in templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Configuration loaded from a `ruledocs.toml` file.
///
/// ```toml
/// docs_dir = "docs/rules"
/// registry = "rules.json"
/// rule_prefix = "vue/"
/// line_ending = "lf"
///
/// [links]
/// rule_source = "https://github.com/org/plugin/blob/main/lib/rules/{name}.js"
/// test_source = "https://github.com/org/plugin/blob/main/tests/lib/rules/{name}.js"
///
/// [presets]
/// label = "plugin:vue/{name}"
///
/// [presets.extends]
/// strongly-recommended = "essential"
/// recommended = "strongly-recommended"
///
/// [front_matter]
/// page_class = "rule-details"
/// sidebar_depth = 0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
	/// Directory containing the rule pages, relative to the project root.
	#[serde(default = "default_docs_dir")]
	pub docs_dir: PathBuf,
	/// Path to the rule manifest, relative to the project root.
	#[serde(default = "default_registry")]
	pub registry: PathBuf,
	/// Prefix joined to a rule's name to form its identifier when the
	/// manifest does not provide one (e.g. `vue/`).
	#[serde(default)]
	pub rule_prefix: String,
	/// Line ending used when writing pages back to disk.
	#[serde(default)]
	pub line_ending: LineEnding,
	#[serde(default)]
	pub links: LinkTemplates,
	#[serde(default)]
	pub presets: PresetConfig,
	#[serde(default)]
	pub front_matter: FrontMatterConfig,
}

impl Default for DocsConfig {
	fn default() -> Self {
		Self {
			docs_dir: default_docs_dir(),
			registry: default_registry(),
			rule_prefix: String::new(),
			line_ending: LineEnding::default(),
			links: LinkTemplates::default(),
			presets: PresetConfig::default(),
			front_matter: FrontMatterConfig::default(),
		}
	}
}

impl DocsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> RuleDocsResult<Option<DocsConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!("loaded config from {}", config_path.display());

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when absent.
	pub fn load_or_default(root: &Path) -> RuleDocsResult<DocsConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse a config from TOML source.
	pub fn parse(content: &str) -> RuleDocsResult<DocsConfig> {
		toml::from_str(content).map_err(|e| RuleDocsError::ConfigParse(e.to_string()))
	}
}

fn default_docs_dir() -> PathBuf {
	PathBuf::from(DEFAULT_DOCS_DIR)
}

fn default_registry() -> PathBuf {
	PathBuf::from(DEFAULT_REGISTRY)
}

/// Line ending written to disk.
///
/// Content is always processed with `\n` internally; the resolved ending is
/// applied only when the page is written.
#[derive(Debug, Clone, Copy, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
	/// `\n`
	Lf,
	/// `\r\n`
	Crlf,
	/// `\r\n` on Windows, `\n` elsewhere.
	#[default]
	Native,
}

impl LineEnding {
	/// Replace `Native` with the concrete ending for the current platform.
	#[must_use]
	pub fn resolve(self) -> Self {
		match self {
			Self::Native if cfg!(windows) => Self::Crlf,
			Self::Native => Self::Lf,
			other => other,
		}
	}

	/// Convert LF-normalized content to this line ending.
	pub fn apply(self, content: &str) -> String {
		match self.resolve() {
			Self::Crlf => content.replace('\n', "\r\n"),
			_ => content.to_string(),
		}
	}
}

/// URL templates for the footer and the fix note. `{name}` is replaced
/// with the rule name.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkTemplates {
	#[serde(default = "default_rule_source")]
	pub rule_source: String,
	#[serde(default = "default_test_source")]
	pub test_source: String,
	/// Documentation page of the upstream rule an extension rule wraps.
	#[serde(default = "default_upstream")]
	pub upstream: String,
	/// Display name of the upstream rule set.
	#[serde(default = "default_upstream_label")]
	pub upstream_label: String,
	/// Page describing the `--fix` command line option.
	#[serde(default = "default_fix_docs")]
	pub fix_docs: String,
}

impl Default for LinkTemplates {
	fn default() -> Self {
		Self {
			rule_source: default_rule_source(),
			test_source: default_test_source(),
			upstream: default_upstream(),
			upstream_label: default_upstream_label(),
			fix_docs: default_fix_docs(),
		}
	}
}

impl LinkTemplates {
	pub fn rule_source_url(&self, name: &str) -> String {
		fill_placeholder(&self.rule_source, name)
	}

	pub fn test_source_url(&self, name: &str) -> String {
		fill_placeholder(&self.test_source, name)
	}

	pub fn upstream_url(&self, name: &str) -> String {
		fill_placeholder(&self.upstream, name)
	}
}

fn default_rule_source() -> String {
	"https://github.com/vuejs/eslint-plugin-vue/blob/master/lib/rules/{name}.js".to_string()
}

fn default_test_source() -> String {
	"https://github.com/vuejs/eslint-plugin-vue/blob/master/tests/lib/rules/{name}.js".to_string()
}

fn default_upstream() -> String {
	"https://eslint.org/docs/rules/{name}".to_string()
}

fn default_upstream_label() -> String {
	"ESLint core".to_string()
}

fn default_fix_docs() -> String {
	"https://eslint.org/docs/user-guide/command-line-interface#fixing-problems".to_string()
}

/// Preset naming and inheritance.
///
/// ```toml
/// [presets]
/// label = "plugin:vue/{name}"
///
/// [presets.extends]
/// recommended = "essential"
/// ```
///
/// With the table above a rule in `essential` is also listed as part of
/// `recommended`.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetConfig {
	/// Display template for a preset id. `{name}` is the preset id.
	#[serde(default = "default_preset_label")]
	pub label: String,
	/// Map of preset id to the preset it extends.
	#[serde(default)]
	pub extends: BTreeMap<String, String>,
}

impl Default for PresetConfig {
	fn default() -> Self {
		Self {
			label: default_preset_label(),
			extends: BTreeMap::new(),
		}
	}
}

impl PresetConfig {
	/// Every preset that includes a rule belonging to `categories`, sorted.
	pub fn expand(&self, categories: &[String]) -> BTreeSet<String> {
		let mut presets: BTreeSet<String> = categories.iter().cloned().collect();

		loop {
			let inherited: Vec<&String> = self
				.extends
				.iter()
				.filter(|(child, parent)| presets.contains(*parent) && !presets.contains(*child))
				.map(|(child, _)| child)
				.collect();

			if inherited.is_empty() {
				break;
			}

			presets.extend(inherited.into_iter().cloned());
		}

		presets
	}

	pub fn render_label(&self, preset: &str) -> String {
		fill_placeholder(&self.label, preset)
	}
}

fn default_preset_label() -> String {
	NAME_PLACEHOLDER.to_string()
}

/// Fixed values written to every page's front-matter.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatterConfig {
	#[serde(default = "default_page_class")]
	pub page_class: String,
	#[serde(default)]
	pub sidebar_depth: u32,
}

impl Default for FrontMatterConfig {
	fn default() -> Self {
		Self {
			page_class: default_page_class(),
			sidebar_depth: 0,
		}
	}
}

fn default_page_class() -> String {
	"rule-details".to_string()
}

fn fill_placeholder(template: &str, value: &str) -> String {
	template.replace(NAME_PLACEHOLDER, value)
}
