use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::relative::MESSAGE_KEYS;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "lingodate-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Keys looked up at runtime by the dates screen rather than through `t!`.
const RUNTIME_KEYS: &[&str] = &[
    "time-row-minute",
    "time-row-minute-style",
    "time-row-hour",
    "time-row-hour-style",
    "time-row-day",
    "time-row-day-style",
    "time-row-two-days",
    "time-row-two-days-style",
    "time-row-this-year",
    "time-row-this-year-style",
    "time-row-other-year",
    "time-row-other-year-style",
];

/// Extract message IDs from a Fluent file: any unindented `<identifier> =`
/// line. Comments, terms (`-` prefix) and variant lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if line.starts_with(' ') || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal keys of `t!(<language>, "<key>" ...)` calls in one source file.
///
/// The `t` must start a token, so `offset!(`, `assert!(` or `format!(` are
/// never mistaken for lookups.
fn keys_in_source(content: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find("t!(") {
        let starts_token = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        rest = &rest[pos + 3..];
        if !starts_token {
            continue;
        }
        let Some((_, args)) = rest.split_once(',') else {
            break;
        };
        let Some(literal) = args.trim_start().strip_prefix('"') else {
            continue;
        };
        if let Some((key, _)) = literal.split_once('"') {
            if !key.is_empty() && key.chars().all(valid_key_char) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

/// Collect the key of every `t!(lang, "...")` call under `src/`.
///
/// Only direct literal keys are found; `lookup()` callers are covered by
/// `RUNTIME_KEYS` and `MESSAGE_KEYS` instead.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        found.extend(keys_in_source(&content));
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Fallback locale (en-US) must exist
    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    // 2. Every key the code asks for is defined in the fallback.
    let mut referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    referenced.extend(RUNTIME_KEYS.iter().map(|k| k.to_string()));
    referenced.extend(MESSAGE_KEYS.iter().map(|k| k.to_string()));

    let mut missing_in_fallback: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing_in_fallback.sort();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing_in_fallback.join("\n")
    );

    // 3. Every locale defines every fallback key.
    let locales = collect_locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "zh-CN"), "zh-CN catalog missing");

    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale:?} missing {path:?}"));
        let keys = parse_ftl_keys(&content);
        let missing: Vec<String> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }

    // 4. Unused fallback keys are only reported.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn key_scan_only_reads_translation_calls() {
    let src = r#"
        const CST: UtcOffset = offset!(+8);
        let got = TimeInput::from("2015-10-12").resolve(CST);
        assert!(got.is_ok(), "not-a-key");
        let label = format!("{}", "also-not-a-key");
        let add = t!(current, "counter-add");
        let inbox = t!(Language::Chinese, "inbox-messages", count = 3);
        let week = t!(lang.toggle(),
            "time-calendar-week-start-usage", weekday = name);
    "#;
    assert_eq!(
        keys_in_source(src),
        [
            "counter-add",
            "inbox-messages",
            "time-calendar-week-start-usage"
        ]
    );
}
