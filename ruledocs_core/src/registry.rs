//! Loading the ordered list of rule descriptors from a manifest file.
//!
//! The manifest holds a `rules` array in JSON, TOML, or YAML; the format is
//! chosen from the file extension.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::RuleDescriptor;
use crate::RuleDocsError;
use crate::RuleDocsResult;

#[derive(Debug, Deserialize)]
struct Manifest {
	#[serde(default)]
	rules: Vec<RuleDescriptor>,
}

/// Read the manifest at `path` and return its rules in declaration order.
///
/// Rules without an explicit `id` get `prefix` joined to their name.
pub fn load_registry(path: &Path, prefix: &str) -> RuleDocsResult<Vec<RuleDescriptor>> {
	if !path.is_file() {
		return Err(RuleDocsError::RegistryNotFound(path.display().to_string()));
	}

	let content = std::fs::read_to_string(path)?;
	let format = path
		.extension()
		.and_then(|e| e.to_str())
		.unwrap_or("")
		.to_ascii_lowercase();

	let rules = parse_registry(&content, &format, &path.display().to_string(), prefix)?;
	tracing::debug!("loaded {} rule(s) from {}", rules.len(), path.display());

	Ok(rules)
}

/// Parse manifest source in the given `format`.
pub fn parse_registry(
	content: &str,
	format: &str,
	path_display: &str,
	prefix: &str,
) -> RuleDocsResult<Vec<RuleDescriptor>> {
	let registry_error = |reason: String| {
		RuleDocsError::Registry {
			path: path_display.to_string(),
			reason,
		}
	};

	let manifest: Manifest = match format {
		"json" => serde_json::from_str(content).map_err(|e| registry_error(e.to_string()))?,
		"toml" => toml::from_str(content).map_err(|e| registry_error(e.to_string()))?,
		"yaml" | "yml" => {
			serde_yaml_ng::from_str(content).map_err(|e| registry_error(e.to_string()))?
		}
		other => return Err(RuleDocsError::UnsupportedRegistryFormat(other.to_string())),
	};

	let mut seen: HashSet<String> = HashSet::new();
	let mut rules = Vec::with_capacity(manifest.rules.len());

	for mut rule in manifest.rules {
		if !seen.insert(rule.name.clone()) {
			return Err(RuleDocsError::DuplicateRule(rule.name));
		}

		if rule.id.is_none() {
			rule.id = Some(format!("{prefix}{}", rule.name));
		}

		rules.push(rule);
	}

	Ok(rules)
}
