use serde::Deserialize;

/// Metadata describing one lint rule, as read from the rule manifest.
///
/// Field names follow the camelCase keys rule plugins already use in their
/// `meta` objects:
///
/// ```json
/// {
///   "name": "html-indent",
///   "description": "enforce consistent indentation in `<template>`",
///   "fixable": true,
///   "categories": ["strongly-recommended"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleDescriptor {
	/// Rule name without any plugin prefix. Names the documentation file and
	/// fills the `{name}` placeholder in link templates.
	pub name: String,
	/// Fully qualified identifier shown as the page title. Filled from the
	/// configured prefix and `name` when the manifest omits it.
	#[serde(default)]
	pub id: Option<String>,
	pub description: String,
	#[serde(default)]
	pub fixable: bool,
	#[serde(default)]
	pub deprecated: bool,
	/// Identifiers of the rules replacing a deprecated rule.
	#[serde(default)]
	pub replaced_by: Vec<String>,
	/// Presets the rule belongs to.
	#[serde(default)]
	pub categories: Vec<String>,
	/// Set when the rule extends a rule from the upstream rule set.
	#[serde(default)]
	pub extension_rule: bool,
}

impl RuleDescriptor {
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			..Self::default()
		}
	}

	/// The identifier used as the page title.
	pub fn rule_id(&self) -> &str {
		self.id.as_deref().unwrap_or(&self.name)
	}

	/// File name of this rule's documentation page.
	pub fn doc_file_name(&self) -> String {
		format!("{}.md", self.name)
	}
}
