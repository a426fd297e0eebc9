// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for the admin console and CLI.
//!
//! Messages are embedded as static tables. Placeholders use `{name}` and are
//! filled by [`format_message`].
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Korean entry to `KO` (missing keys fall back to English)

use serde::{Deserialize, Serialize};

/// Language of operator-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ko,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ko => "ko",
            Lang::En => "en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Lookup ─────────────────────────────────────────────────────────

/// Look up a message key, falling back to English, then to `""`.
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Replace each `{name}` in `template` with its value. Unknown placeholders
/// are left in place.
pub fn format_message(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Ko => KO,
        Lang::En => EN,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Admin menu
    ("admin.title", "Item Name Registrar"),
    ("admin.menu.register", "Register a name"),
    ("admin.menu.restore", "Restore default names"),
    ("admin.menu.failures", "Show translation failures"),
    // Registration form
    ("form.title", "Register a name"),
    ("form.key", "Item key"),
    ("form.key.placeholder", "example_item_name"),
    ("form.label", "Display name"),
    ("form.label.placeholder", "Example item name"),
    // Failure list
    ("failures.title", "Translation failures"),
    (
        "failures.content",
        "Items that failed to translate. Pick one to register a name for it.",
    ),
    // Notices
    ("notice.registered", "Registered [{key} => {label}]"),
    ("notice.restored", "Default names restored"),
    ("notice.cancelled", "Registration cancelled"),
    ("notice.no_failures", "No items have failed to translate"),
    ("notice.invalid_choice", "Unknown choice: {choice}"),
    // CLI
    ("cli.failures", "Translation failures:"),
    ("cli.index", "{count} network ids indexed"),
    ("cli.saved", "Saved {count} names to {path}"),
];

// ─── Korean ─────────────────────────────────────────────────────────

const KO: &[(&str, &str)] = &[
    ("admin.title", "한글 아이템 이름 등록기"),
    ("admin.menu.register", "한글 이름 등록하기"),
    ("admin.menu.restore", "기본 한글 이름 복구"),
    ("admin.menu.failures", "번역 실패 목록 보기"),
    ("form.title", "한글 이름 등록하기"),
    ("form.key", "아이템 구분자"),
    ("form.key.placeholder", "example_item_name"),
    ("form.label", "한글 이름"),
    ("form.label.placeholder", "예시 아이템 이름"),
    ("failures.title", "번역 실패 목록"),
    (
        "failures.content",
        "번역에 실패한 아이템 목록입니다. 누르면 새로 등록할 수 있습니다.",
    ),
    ("notice.registered", "입력하신 한글 이름이 [{key} => {label}]로 등록되었습니다"),
    ("notice.restored", "기본 한글 이름으로 복구되었습니다"),
    ("notice.cancelled", "한글 이름 등록을 취소하였습니다"),
    ("notice.no_failures", "번역에 실패한 아이템이 없습니다"),
    ("notice.invalid_choice", "알 수 없는 선택입니다: {choice}"),
    ("cli.failures", "번역 실패 목록:"),
    ("cli.index", "{count}개의 네트워크 ID가 색인되었습니다"),
    ("cli.saved", "{count}개의 이름을 {path}에 저장했습니다"),
];
