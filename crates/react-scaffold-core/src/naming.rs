//! Component naming and output path rules
//!
//! Everything here is pure string work: no filesystem access.

/// Suffix used when the component name carries no `.suffix` part
pub const DEFAULT_SUFFIX: &str = "component";

/// Extension appended to custom file names that lack it
const TS_EXTENSION: &str = ".ts";

/// Split a component name on its last `.` into `(base, suffix)`
///
/// `Dashboard.layout` yields `("Dashboard", "layout")`. Without a dot, or when
/// the text after the dot is blank, the suffix falls back to [`DEFAULT_SUFFIX`].
/// A blank base falls back to the whole input. Path separators are dropped
/// from the suffix since it ends up in file names.
pub fn parse_name_and_suffix(input: &str) -> (String, String) {
    let Some(dot) = input.rfind('.') else {
        return (input.to_string(), DEFAULT_SUFFIX.to_string());
    };

    let base = input[..dot].trim();
    let suffix: String = input[dot + 1..]
        .chars()
        .filter(|c| !is_separator(*c))
        .collect();
    let suffix = suffix.trim();

    let base = if base.is_empty() { input } else { base };
    let suffix = if suffix.is_empty() {
        DEFAULT_SUFFIX
    } else {
        suffix
    };

    (base.to_string(), suffix.to_string())
}

/// Convert a name into a PascalCase identifier
///
/// Runs of `-`, `_`, `.`, path separators and whitespace separate words; the
/// first character of each word is upper-cased and the rest is kept as typed,
/// so `userCard` stays `UserCard` rather than becoming `Usercard`.
pub fn to_identifier(base: &str) -> String {
    base.split(|c: char| {
        matches!(c, '-' | '_' | '.') || is_separator(c) || c.is_whitespace()
    })
    .filter(|word| !word.is_empty())
    .map(|word| {
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().chain(chars).collect(),
        }
    })
    .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

/// Join path segments with `/`, collapsing repeated separators and dropping a
/// trailing one
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let raw = segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/");

    let mut joined = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '/' && joined.ends_with('/') {
            continue;
        }
        joined.push(c);
    }

    if joined.ends_with('/') {
        joined.pop();
    }
    joined
}

/// Reduce a user-supplied file name to a bare basename
///
/// Path separators are removed and leading dots stripped, so the result can
/// neither leave the target directory nor become a hidden file.
pub fn sanitize_basename(input: &str) -> String {
    input
        .chars()
        .filter(|c| !is_separator(*c))
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}

/// Turn a custom prompt answer into a `.ts` file name
///
/// Returns `None` when nothing is left after sanitizing.
pub fn custom_filename(answer: &str) -> Option<String> {
    let base = sanitize_basename(answer.trim());
    if base.is_empty() {
        return None;
    }

    if base.ends_with(TS_EXTENSION) {
        Some(base)
    } else {
        Some(format!("{}{}", base, TS_EXTENSION))
    }
}

/// Module specifier for a `.ts`/`.tsx` file name, as used in import statements
///
/// `Card.controller.ts` becomes `./Card.controller`.
pub fn module_specifier(filename: &str) -> String {
    let stem = filename
        .strip_suffix(".tsx")
        .or_else(|| filename.strip_suffix(TS_EXTENSION))
        .unwrap_or(filename);
    format!("./{}", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> (String, String) {
        parse_name_and_suffix(input)
    }

    #[test]
    fn test_parse_name_with_suffix() {
        assert_eq!(split("Dashboard.layout"), ("Dashboard".into(), "layout".into()));
    }

    #[test]
    fn test_parse_name_without_suffix() {
        assert_eq!(split("ButtonCard"), ("ButtonCard".into(), "component".into()));
    }

    #[test]
    fn test_parse_name_blank_suffix_falls_back() {
        assert_eq!(split("Foo."), ("Foo".into(), "component".into()));
        assert_eq!(split("Foo.   "), ("Foo".into(), "component".into()));
    }

    #[test]
    fn test_parse_name_splits_on_last_dot() {
        assert_eq!(split("user.card.view"), ("user.card".into(), "view".into()));
    }

    #[test]
    fn test_parse_name_blank_base_uses_whole_input() {
        assert_eq!(split(".layout"), (".layout".into(), "layout".into()));
    }

    #[test]
    fn test_parse_name_drops_separators_from_suffix() {
        assert_eq!(split("Card.a/b"), ("Card".into(), "ab".into()));
        assert_eq!(split("Card./"), ("Card".into(), "component".into()));
    }

    #[test]
    fn test_to_identifier_splits_on_path_separators() {
        assert_eq!(to_identifier("a/b"), "AB");
        assert_eq!(to_identifier("a\\b"), "AB");
        assert_eq!(to_identifier("/ui//user-card/"), "UiUserCard");
    }

    #[test]
    fn test_to_identifier_mixed_delimiters() {
        assert_eq!(to_identifier("user-card_name"), "UserCardName");
        assert_eq!(to_identifier("user--card__name..x"), "UserCardNameX");
    }

    #[test]
    fn test_to_identifier_capitalizes_single_word() {
        assert_eq!(to_identifier("already"), "Already");
    }

    #[test]
    fn test_to_identifier_keeps_pascal_case() {
        assert_eq!(to_identifier("ButtonCard"), "ButtonCard");
        assert_eq!(to_identifier(&to_identifier("ButtonCard")), "ButtonCard");
    }

    #[test]
    fn test_to_identifier_leading_and_trailing_delimiters() {
        assert_eq!(to_identifier("-_user card_-"), "UserCard");
        assert_eq!(to_identifier("---"), "");
    }

    #[test]
    fn test_join_path_collapses_separators() {
        assert_eq!(join_path(&[".", "Card"]), "./Card");
        assert_eq!(join_path(&["src//components/", "/Card"]), "src/components/Card");
        assert_eq!(join_path(&["src/", "Card/"]), "src/Card");
    }

    #[test]
    fn test_join_path_keeps_absolute_root() {
        assert_eq!(join_path(&["/tmp/ui", "Card"]), "/tmp/ui/Card");
    }

    #[test]
    fn test_sanitize_basename_strips_separators_and_dots() {
        assert_eq!(sanitize_basename("../../evil"), "evil");
        assert_eq!(sanitize_basename("..\\win\\path"), "winpath");
        assert_eq!(sanitize_basename(".hidden"), "hidden");
        assert_eq!(sanitize_basename("UserCard.test"), "UserCard.test");
    }

    #[test]
    fn test_custom_filename_appends_extension_once() {
        assert_eq!(custom_filename("DashboardCtrl").as_deref(), Some("DashboardCtrl.ts"));
        assert_eq!(custom_filename("UserCard.test").as_deref(), Some("UserCard.test.ts"));
        assert_eq!(custom_filename("helper.ts").as_deref(), Some("helper.ts"));
        assert_eq!(custom_filename("../../evil").as_deref(), Some("evil.ts"));
    }

    #[test]
    fn test_custom_filename_rejects_empty_basename() {
        assert_eq!(custom_filename("."), None);
        assert_eq!(custom_filename("/"), None);
        assert_eq!(custom_filename("../.."), None);
    }

    #[test]
    fn test_module_specifier() {
        assert_eq!(module_specifier("Card.controller.ts"), "./Card.controller");
        assert_eq!(module_specifier("Card.component.tsx"), "./Card.component");
        assert_eq!(module_specifier("noext"), "./noext");
    }
}
