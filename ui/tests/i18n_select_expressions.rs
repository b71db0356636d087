//! Select expressions in every catalog must be resolvable for any count:
//! each one carries exactly one `*[...]` default, and every variant key is
//! either an exact number or a CLDR plural category.

use pretty_assertions::assert_eq;

const CATALOGS: &[(&str, &str)] = &[
    ("en-US", include_str!("../i18n/en-US/lingodate-ui.ftl")),
    ("zh-CN", include_str!("../i18n/zh-CN/lingodate-ui.ftl")),
];

const PLURAL_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

#[derive(Debug)]
struct Select {
    message: String,
    variants: Vec<(String, bool)>,
}

/// Collect `{ $x -> ... }` blocks written in the indented multi-line form.
fn selects(src: &str) -> Vec<Select> {
    let mut found = Vec::new();
    let mut message = String::new();
    let mut current: Option<Select> = None;

    for line in src.lines() {
        if !line.starts_with(' ') {
            if let Some((id, _)) = line.split_once('=') {
                message = id.trim().to_string();
            }
            continue;
        }
        let trimmed = line.trim();
        if trimmed.ends_with("->") {
            current = Some(Select {
                message: message.clone(),
                variants: Vec::new(),
            });
        } else if trimmed == "}" {
            found.extend(current.take());
        } else if let Some(select) = current.as_mut() {
            let (is_default, rest) = match trimmed.strip_prefix('*') {
                Some(rest) => (true, rest),
                None => (false, trimmed),
            };
            if let Some((key, _)) = rest.strip_prefix('[').and_then(|r| r.split_once(']')) {
                select.variants.push((key.trim().to_string(), is_default));
            }
        }
    }
    found
}

#[test]
fn every_select_has_one_other_default() {
    for (locale, src) in CATALOGS {
        for select in selects(src) {
            let defaults: Vec<&str> = select
                .variants
                .iter()
                .filter(|(_, is_default)| *is_default)
                .map(|(key, _)| key.as_str())
                .collect();
            assert_eq!(
                defaults,
                vec!["other"],
                "{locale}: `{}` needs exactly one `*[other]` default",
                select.message
            );
        }
    }
}

#[test]
fn variant_keys_are_numbers_or_plural_categories() {
    for (locale, src) in CATALOGS {
        for select in selects(src) {
            for (key, _) in &select.variants {
                assert!(
                    key.parse::<i64>().is_ok() || PLURAL_CATEGORIES.contains(&key.as_str()),
                    "{locale}: `{}` has unexpected variant `[{key}]`",
                    select.message
                );
            }
        }
    }
}

#[test]
fn inbox_message_variants_per_locale() {
    let keys = |src: &str| -> Vec<String> {
        selects(src)
            .into_iter()
            .find(|select| select.message == "inbox-messages")
            .map(|select| select.variants.into_iter().map(|(key, _)| key).collect())
            .unwrap_or_default()
    };
    assert_eq!(keys(CATALOGS[0].1), ["0", "1", "other"]);
    assert_eq!(keys(CATALOGS[1].1), ["other"]);
}
