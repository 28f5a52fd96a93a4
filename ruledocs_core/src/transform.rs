use std::ops::Range;
use std::sync::LazyLock;

use regex::Captures;
use regex::NoExpand;
use regex::Regex;
use serde_json::Value;

use crate::DocsConfig;
use crate::RuleDescriptor;
use crate::config::FrontMatterConfig;
use crate::config::LinkTemplates;

/// Tag name of the interactive example wrapper used in rule pages.
pub const CODE_BLOCK_TAG: &str = "eslint-code-block";

/// Attribute enabling autofix in an example code block.
pub const FIX_ATTRIBUTE: &str = "fix";

/// Title line, optional `>` description, optional `- ` notes and the blank
/// lines between them. The title must be the first non-blank line of the
/// body so `# ` comments inside example code are never taken for it.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\A\s*# .+(?:\n+|\z)(?:>.*(?:\n+|\z))?(?:- .+(?:\n+|\z))*")
		.expect("invalid header pattern")
});

/// The implementation section runs to the end of the document.
static FOOTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?ms)^## (?:(?::mag:|🔍) )?Implementation.*\z").expect("invalid footer pattern")
});

/// Leading `---` block up to the first closing `---` line.
static FRONT_MATTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\A---\n(?:.*\n)*?---(?:\n+|\z)").expect("invalid front-matter pattern")
});

static CODE_BLOCK_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"<eslint-code-block(\s[^>]*)?>").expect("invalid code block tag pattern")
});

static CODE_BLOCK_OPEN_SPACING: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(<eslint-code-block(?:\s[^>]*)?>)\n+```")
		.expect("invalid code block opening pattern")
});

static CODE_BLOCK_CLOSE_SPACING: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"```\n+</eslint-code-block>").expect("invalid code block closing pattern")
});

/// A single rewrite step applied to a page.
pub type Transform = fn(&str, &RuleDescriptor, &DocsConfig) -> String;

/// The rewrite steps in the order they are applied. Later steps rely on the
/// output of earlier ones: the header is placed before the front-matter is
/// regenerated, and tag attributes are normalized before spacing is fixed.
pub const PIPELINE: [(&str, Transform); 5] = [
	("header", update_header as Transform),
	("footer", update_footer as Transform),
	("code_blocks", update_code_blocks as Transform),
	("front_matter", update_front_matter as Transform),
	("code_block_spacing", adjust_code_blocks as Transform),
];

/// Run every step of [`PIPELINE`] over LF-normalized `content`.
pub fn render_document(content: &str, rule: &RuleDescriptor, config: &DocsConfig) -> String {
	let mut result = content.to_string();

	for (step, transform) in PIPELINE {
		let next = transform(&result, rule, config);
		if next != result {
			tracing::trace!(rule = %rule.name, step, "rewrote page");
		}
		result = next;
	}

	result
}

/// Join items as prose: `A`, `A and B`, `all of A, B and C`.
pub fn format_items(items: &[String]) -> String {
	match items {
		[] => String::new(),
		[only] => only.clone(),
		[first, second] => format!("{first} and {second}"),
		[init @ .., last] => format!("all of {} and {last}", init.join(", ")),
	}
}

/// Bullet notes shown under the title.
///
/// Deprecation and preset membership exclude each other; the fix note is
/// appended after whichever of them applies.
pub fn header_notes(rule: &RuleDescriptor, config: &DocsConfig) -> Vec<String> {
	let mut notes = Vec::new();

	if rule.deprecated {
		if rule.replaced_by.is_empty() {
			notes.push("- :warning: This rule was **deprecated**.".to_string());
		} else {
			let replacements: Vec<String> = rule
				.replaced_by
				.iter()
				.map(|replacement| format!("[{replacement}]({}.md) rule", doc_stem(replacement)))
				.collect();
			notes.push(format!(
				"- :warning: This rule was **deprecated** and replaced by {}.",
				format_items(&replacements)
			));
		}
	} else if !rule.categories.is_empty() {
		let presets: Vec<String> = config
			.presets
			.expand(&rule.categories)
			.iter()
			.map(|preset| format!("`\"{}\"`", config.presets.render_label(preset)))
			.collect();
		notes.push(format!(
			"- :gear: This rule is included in {}.",
			format_items(&presets)
		));
	}

	if rule.fixable {
		notes.push(format!(
			"- :wrench: The `--fix` option on the [command line]({}) can automatically fix some \
			 of the problems reported by this rule.",
			config.links.fix_docs
		));
	}

	notes
}

/// The title block: `# id`, `> description`, a blank line, then the notes
/// followed by a blank line when there are any.
pub fn render_header(rule: &RuleDescriptor, config: &DocsConfig) -> String {
	let mut header = format!("# {}\n> {}\n\n", rule.rule_id(), rule.description);
	let notes = header_notes(rule, config);

	if !notes.is_empty() {
		header.push_str(&notes.join("\n"));
		header.push_str("\n\n");
	}

	header
}

/// Replace the title block, or insert it at the top of the page (below any
/// front-matter) when there is none.
pub fn update_header(content: &str, rule: &RuleDescriptor, config: &DocsConfig) -> String {
	let header = render_header(rule, config);
	let (front_matter, body) = split_front_matter(content);

	let body = if let Some(found) = HEADER_PATTERN.find(body) {
		splice(body, found.range(), &header)
	} else if body.trim().is_empty() {
		format!("{}\n", header.trim_end())
	} else {
		format!("{header}{}\n", body.trim())
	};

	format!("{front_matter}{body}")
}

pub fn render_footer(rule: &RuleDescriptor, links: &LinkTemplates) -> String {
	let mut footer = format!(
		"## :mag: Implementation\n\n- [Rule source]({})\n- [Test source]({})\n",
		links.rule_source_url(&rule.name),
		links.test_source_url(&rule.name),
	);

	if rule.extension_rule {
		footer.push_str(&format!(
			"\n<sup>Taken with ❤️ [from {}]({})</sup>\n",
			links.upstream_label,
			links.upstream_url(&rule.name),
		));
	}

	footer
}

/// Replace the implementation section, or append it.
pub fn update_footer(content: &str, rule: &RuleDescriptor, config: &DocsConfig) -> String {
	let footer = render_footer(rule, &config.links);

	match FOOTER_PATTERN.find(content) {
		Some(found) => splice(content, found.range(), &footer),
		None => format!("{}\n\n{footer}", content.trim()),
	}
}

/// Rewrite every example tag so `fix` is its first attribute exactly when
/// the rule is fixable.
pub fn update_code_blocks(content: &str, rule: &RuleDescriptor, _config: &DocsConfig) -> String {
	CODE_BLOCK_TAG_PATTERN
		.replace_all(content, |captures: &Captures<'_>| {
			let attributes = captures.get(1).map_or("", |m| m.as_str());
			let mut tokens: Vec<&str> = attributes
				.split_whitespace()
				.filter(|token| *token != FIX_ATTRIBUTE)
				.collect();

			if rule.fixable {
				tokens.insert(0, FIX_ATTRIBUTE);
			}

			let mut tag = format!("<{CODE_BLOCK_TAG}");
			for token in tokens {
				tag.push(' ');
				tag.push_str(token);
			}
			tag.push('>');
			tag
		})
		.into_owned()
}

/// Page metadata in emission order.
pub fn front_matter_fields(
	rule: &RuleDescriptor,
	front_matter: &FrontMatterConfig,
) -> [(&'static str, Value); 4] {
	[
		("pageClass", Value::from(front_matter.page_class.as_str())),
		("sidebarDepth", Value::from(front_matter.sidebar_depth)),
		("title", Value::from(rule.rule_id())),
		("description", Value::from(rule.description.as_str())),
	]
}

pub fn render_front_matter(rule: &RuleDescriptor, front_matter: &FrontMatterConfig) -> String {
	let mut block = String::from("---\n");

	for (key, value) in front_matter_fields(rule, front_matter) {
		block.push_str(key);
		block.push_str(": ");
		block.push_str(&yaml_value(&value));
		block.push('\n');
	}

	block.push_str("---\n");
	block
}

/// Strings become double-quoted YAML scalars; anything else is written as is.
pub fn yaml_value(value: &Value) -> String {
	match value {
		Value::String(text) => {
			let escaped = text
				.replace('\\', "\\\\")
				.replace('"', "\\\"")
				.replace('\n', "\\n");
			format!("\"{escaped}\"")
		}
		other => other.to_string(),
	}
}

/// Replace the leading front-matter block, or prepend one.
pub fn update_front_matter(content: &str, rule: &RuleDescriptor, config: &DocsConfig) -> String {
	let front_matter = render_front_matter(rule, &config.front_matter);

	match FRONT_MATTER_PATTERN.find(content) {
		Some(found) => splice(content, found.range(), &front_matter),
		None => format!("{front_matter}{}\n", content.trim()),
	}
}

/// Exactly one blank line between an example tag and the fence it wraps, on
/// both the opening and the closing side.
pub fn adjust_code_blocks(content: &str, _rule: &RuleDescriptor, _config: &DocsConfig) -> String {
	let opened = CODE_BLOCK_OPEN_SPACING.replace_all(content, "${1}\n\n```");
	CODE_BLOCK_CLOSE_SPACING
		.replace_all(&opened, NoExpand("```\n\n</eslint-code-block>"))
		.into_owned()
}

/// Split `content` into its leading front-matter block (empty when absent)
/// and the rest of the page.
pub fn split_front_matter(content: &str) -> (&str, &str) {
	match FRONT_MATTER_PATTERN.find(content) {
		Some(found) => content.split_at(found.end()),
		None => ("", content),
	}
}

fn splice(content: &str, range: Range<usize>, replacement: &str) -> String {
	let mut buf = String::with_capacity(content.len() - range.len() + replacement.len());
	buf.push_str(&content[..range.start]);
	buf.push_str(replacement);
	buf.push_str(&content[range.end..]);
	buf
}

/// File stem of a rule page for an identifier such as `vue/no-foo`.
fn doc_stem(rule_id: &str) -> &str {
	rule_id.rsplit('/').next().unwrap_or(rule_id)
}
