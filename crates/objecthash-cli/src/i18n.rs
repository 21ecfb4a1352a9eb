// crates/objecthash-cli/src/i18n.rs
// ============================================================================
// Module: Message Catalog
// Description: English and Catalan strings for every objecthash CLI message.
// Purpose: Keep digests, errors, and verify results worded the same everywhere.
// Dependencies: std (`OnceLock`)
// ============================================================================

//! ## Overview
//! Each message has a dotted key (`verify.mismatch`, `input.parse_failed`)
//! and a template with `{name}` placeholders. Commands render messages with
//! the [`t!`](crate::t) macro. The locale comes from `--lang` or
//! `OBJECTHASH_LANG` and is fixed for the rest of the process. A key missing
//! from the Catalan table is looked up in English, and an unknown key renders
//! as itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Output language of the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English, also the fallback.
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Short language label (`en`, `ca`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Reads a language tag such as `ca`, `EN_us` or `ca-ES`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let language = value.trim().split(['-', '_']).next()?;
        SUPPORTED_LOCALES
            .iter()
            .copied()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(language))
    }
}

/// Locales accepted by `--lang`, in display order.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// One `{key}` substitution for a message template.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name, without braces.
    pub key: &'static str,
    /// Rendered replacement text.
    pub value: String,
}

impl MessageArg {
    /// Pairs a placeholder name with its rendered text.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Locale chosen at startup.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Fixes the output locale. Later calls are ignored.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the output locale, English until [`set_locale`] runs.
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "objecthash {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("audit.init_failed", "Failed to open audit log at {path}: {error}"),
    ("input.kind.document", "input document"),
    ("input.source.stdin", "stdin"),
    ("input.read_failed", "Failed to read {kind} at {path}: {error}"),
    (
        "input.read_too_large",
        "Refusing to read {kind} at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("input.parse_failed", "Failed to parse {format} input from {source}: {error}"),
    ("input.unsupported", "Unsupported input in {source}: {error}"),
    ("options.max_depth_invalid", "--max-depth must be between 1 and {max}."),
    ("pointer.not_found", "JSON pointer {pointer} does not resolve in {source}."),
    ("pointer.invalid", "Invalid JSON pointer {pointer}: it must be empty or start with '/'."),
    ("hash.failed", "Failed to hash {source}: {error}"),
    ("redact.failed", "Failed to redact {source}: {error}"),
    ("redact.render_failed", "Failed to render redacted document: {error}"),
    ("redact.root_digest", "Root digest: {digest}"),
    ("verify.expected_invalid", "Invalid expected digest {value}: {error}"),
    ("verify.match", "Digest matches: {digest}"),
    ("verify.mismatch", "Digest mismatch (expected {expected}, actual {actual})"),
    ("demo.header", "Sample digests (number policy {policy}):"),
    ("demo.row", "{digest}  {label}"),
    ("demo.failed", "Failed to hash demo sample {label}: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Static Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "objecthash {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("audit.init_failed", "No s'ha pogut obrir el registre d'auditoria a {path}: {error}"),
    ("input.kind.document", "document d'entrada"),
    ("input.source.stdin", "stdin"),
    ("input.read_failed", "No s'ha pogut llegir {kind} a {path}: {error}"),
    (
        "input.read_too_large",
        "No es llegirà {kind} a {path} perquè ocupa {size} bytes (límit {limit}).",
    ),
    ("input.parse_failed", "No s'ha pogut analitzar l'entrada {format} de {source}: {error}"),
    ("input.unsupported", "Entrada no compatible a {source}: {error}"),
    ("options.max_depth_invalid", "--max-depth ha d'estar entre 1 i {max}."),
    ("pointer.not_found", "El punter JSON {pointer} no es resol a {source}."),
    (
        "pointer.invalid",
        "Punter JSON no vàlid {pointer}: ha de ser buit o començar amb '/'.",
    ),
    ("hash.failed", "No s'ha pogut calcular el hash de {source}: {error}"),
    ("redact.failed", "No s'ha pogut redactar {source}: {error}"),
    ("redact.render_failed", "No s'ha pogut generar el document redactat: {error}"),
    ("redact.root_digest", "Resum arrel: {digest}"),
    ("verify.expected_invalid", "Resum esperat no vàlid {value}: {error}"),
    ("verify.match", "El resum coincideix: {digest}"),
    ("verify.mismatch", "Desajust de resum (s'esperava {expected}, actual {actual})"),
    ("demo.header", "Resums de mostra (política numèrica {policy}):"),
    ("demo.row", "{digest}  {label}"),
    ("demo.failed", "No s'ha pogut calcular el hash de la mostra {label}: {error}"),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Looks up a template in one locale's table.
fn template(locale: Locale, key: &str) -> Option<&'static str> {
    let table = match locale {
        Locale::En => CATALOG_EN,
        Locale::Ca => CATALOG_CA,
    };
    table.iter().find(|(entry, _)| *entry == key).map(|(_, text)| *text)
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Renders the message `key` in the current locale with `args` filled in.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let text = template(current_locale(), key)
        .or_else(|| template(Locale::En, key))
        .unwrap_or(key);
    args.into_iter().fold(text.to_string(), |rendered, arg| {
        rendered.replace(&format!("{{{}}}", arg.key), &arg.value)
    })
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Renders a catalog message, e.g. `t!("verify.match", digest = digest)`.
///
/// Each `name = value` pair fills `{name}` using the value's `Display` output.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {
        $crate::i18n::translate(
            $key,
            ::std::vec![$($crate::i18n::MessageArg::new(stringify!($name), $value.to_string())),*],
        )
    };
}

// ============================================================================
// SECTION: Tests
// ============================================================================
