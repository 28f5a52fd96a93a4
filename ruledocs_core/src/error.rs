use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum RuleDocsError {
	#[error(transparent)]
	#[diagnostic(code(ruledocs::io_error))]
	Io(#[from] std::io::Error),

	#[error("missing documentation file for rule `{rule}`: `{path}`")]
	#[diagnostic(
		code(ruledocs::missing_doc_file),
		help("create `{path}` before regenerating, every registered rule needs a page")
	)]
	MissingDocFile { rule: String, path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(ruledocs::config_parse),
		help("check that ruledocs.toml is valid TOML with optional [links], [presets] and [front_matter] sections")
	)]
	ConfigParse(String),

	#[error("rule registry not found: `{0}`")]
	#[diagnostic(
		code(ruledocs::registry_not_found),
		help("set `registry` in ruledocs.toml to the path of your rule manifest")
	)]
	RegistryNotFound(String),

	#[error("failed to load rule registry `{path}`: {reason}")]
	#[diagnostic(code(ruledocs::registry))]
	Registry { path: String, reason: String },

	#[error("unsupported registry format: `{0}`")]
	#[diagnostic(
		code(ruledocs::unsupported_format),
		help("supported formats: json, toml, yaml, yml")
	)]
	UnsupportedRegistryFormat(String),

	#[error("duplicate rule `{0}` in registry")]
	#[diagnostic(
		code(ruledocs::duplicate_rule),
		help("each rule name must appear exactly once in the registry")
	)]
	DuplicateRule(String),
}

pub type RuleDocsResult<T> = Result<T, RuleDocsError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
