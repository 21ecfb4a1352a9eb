// crates/objecthash-cli/src/main.rs
// ============================================================================
// Module: ObjectHash CLI Entry Point
// Description: Command dispatcher for canonical hashing and redaction.
// Purpose: Provide a safe, localized CLI over the objecthash core.
// Dependencies: clap, objecthash-core, objecthash-config, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The `objecthash` binary reads a JSON, TOML, or YAML document (from a file
//! or stdin), converts it to the canonical value model, and prints digests,
//! redaction tokens, or redacted documents. All user-facing strings are routed
//! through the i18n catalog and every command records one audit event.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use objecthash_cli::audit::AuditOutcome;
use objecthash_cli::audit::AuditSink;
use objecthash_cli::audit::HashAuditEvent;
use objecthash_cli::audit::HashAuditEventParams;
use objecthash_cli::audit::sink_from_config;
use objecthash_cli::i18n::Locale;
use objecthash_cli::i18n::set_locale;
use objecthash_cli::input;
use objecthash_cli::input::InputError;
use objecthash_cli::input::InputFormat;
use objecthash_cli::t;
use objecthash_config::ObjectHashConfig;
use objecthash_core::HashDigest;
use objecthash_core::HashOptions;
use objecthash_core::NumberPolicy;
use objecthash_core::ObjectHasher;
use objecthash_core::Value;
use objecthash_core::redact_key;
use objecthash_core::redact_pointer;
use objecthash_core::redaction_token;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Largest `--max-depth` accepted on the command line.
///
/// The JSON and YAML parsers stop at 128 nested levels before hashing starts,
/// so limits above 128 only take effect for TOML input.
const MAX_DEPTH_LIMIT: usize = 1024;
/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "OBJECTHASH_LANG";
/// Audit label for documents read from stdin.
const STDIN_LABEL: &str = "stdin";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "objecthash", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `OBJECTHASH_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Path to `objecthash.toml` (overrides `OBJECTHASH_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical digest of a document or subtree.
    Hash(HashCommand),
    /// Print the redaction token of a document or subtree.
    Token(HashCommand),
    /// Redact subtrees and map keys, printing the redacted document.
    Redact(RedactCommand),
    /// Check a document or subtree against an expected digest.
    Verify(VerifyCommand),
    /// Print digests of built-in sample values.
    Demo(DemoCommand),
}

/// Input and hashing options shared by document commands.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Input document path (reads stdin when omitted).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Input format (detected from the extension; JSON for stdin).
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<InputFormatArg>,
    /// Numeric policy override.
    #[arg(long, value_enum, value_name = "POLICY")]
    policy: Option<PolicyArg>,
    /// Maximum container nesting depth override.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

/// Arguments for the `hash` and `token` commands.
#[derive(Args, Debug)]
struct HashCommand {
    /// Document input options.
    #[command(flatten)]
    input: InputArgs,
    /// JSON pointer selecting the subtree to hash.
    #[arg(long, value_name = "PTR")]
    pointer: Option<String>,
}

/// Arguments for the `redact` command.
#[derive(Args, Debug)]
struct RedactCommand {
    /// Document input options.
    #[command(flatten)]
    input: InputArgs,
    /// JSON pointer of a subtree to replace with its token (repeatable).
    #[arg(long = "pointer", value_name = "PTR")]
    pointers: Vec<String>,
    /// JSON pointer of a map key to replace with its token (repeatable).
    #[arg(long = "key", value_name = "PTR")]
    keys: Vec<String>,
}

/// Arguments for the `verify` command.
#[derive(Args, Debug)]
struct VerifyCommand {
    /// Document input options.
    #[command(flatten)]
    input: InputArgs,
    /// JSON pointer selecting the subtree to verify.
    #[arg(long, value_name = "PTR")]
    pointer: Option<String>,
    /// Expected digest as 64 hex characters.
    #[arg(long, value_name = "HEX")]
    expected: String,
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
struct DemoCommand {
    /// Numeric policy override.
    #[arg(long, value_enum, value_name = "POLICY")]
    policy: Option<PolicyArg>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

/// Supported input formats.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum InputFormatArg {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
}

/// Supported numeric policies.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum PolicyArg {
    /// Integers keep their own tag.
    Tagged,
    /// Every number is normalized as a float.
    FloatOnly,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
    /// Stable error kind label recorded in audit events.
    kind: &'static str,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
            kind: "cli",
        }
    }

    /// Constructs a new [`CliError`] with an explicit kind label.
    const fn with_kind(kind: &'static str, message: String) -> Self {
        Self {
            message,
            kind,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Command Context
// ============================================================================

/// Shared state for command execution.
struct CommandContext {
    /// Loaded configuration.
    config: ObjectHashConfig,
    /// Audit sink receiving one event per command.
    audit: Box<dyn AuditSink>,
}

/// Result of a completed command.
struct CommandReport {
    /// Process exit code.
    exit: ExitCode,
    /// Audit outcome.
    outcome: AuditOutcome,
    /// Digest produced by the command, when any.
    digest: Option<HashDigest>,
}

impl CommandReport {
    /// Builds a successful report.
    const fn success(digest: Option<HashDigest>) -> Self {
        Self {
            exit: ExitCode::SUCCESS,
            outcome: AuditOutcome::Success,
            digest,
        }
    }
}

/// A decoded input document.
struct LoadedInput {
    /// Human-readable source label (path or stdin).
    label: String,
    /// Decoded canonical value.
    value: Value,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = ObjectHashConfig::load_or_default(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let audit = sink_from_config(&config.audit).map_err(|err| {
        CliError::new(t!(
            "audit.init_failed",
            path = config.audit.path.as_deref().unwrap_or_default(),
            error = err
        ))
    })?;
    let context = CommandContext {
        config,
        audit,
    };
    execute(&context, command)
}

/// Runs a command and records its audit event.
fn execute(context: &CommandContext, command: Commands) -> CliResult<ExitCode> {
    let params = audit_params(&command, &context.config);
    let result = match command {
        Commands::Hash(command) => command_hash(context, &command),
        Commands::Token(command) => command_token(context, &command),
        Commands::Redact(command) => command_redact(context, &command),
        Commands::Verify(command) => command_verify(context, &command),
        Commands::Demo(command) => command_demo(context, &command),
    };
    let params = match &result {
        Ok(report) => HashAuditEventParams {
            outcome: report.outcome,
            digest: report.digest.map(|digest| digest.to_hex()),
            ..params
        },
        Err(err) => HashAuditEventParams {
            outcome: AuditOutcome::Failure,
            error_kind: Some(err.kind),
            ..params
        },
    };
    context.audit.record(&HashAuditEvent::new(params));
    result.map(|report| report.exit)
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Document Commands
// ============================================================================

/// Executes the `hash` command.
fn command_hash(context: &CommandContext, command: &HashCommand) -> CliResult<CommandReport> {
    let options = resolve_options(&command.input, &context.config)?;
    let loaded = load_input(&command.input, context.config.input.max_input_bytes)?;
    let digest = hash_target(&loaded, command.pointer.as_deref(), options)?;
    write_stdout_line(&digest.to_hex())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(CommandReport::success(Some(digest)))
}

/// Executes the `token` command.
fn command_token(context: &CommandContext, command: &HashCommand) -> CliResult<CommandReport> {
    let options = resolve_options(&command.input, &context.config)?;
    let loaded = load_input(&command.input, context.config.input.max_input_bytes)?;
    let digest = hash_target(&loaded, command.pointer.as_deref(), options)?;
    write_stdout_line(&redaction_token(&digest))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(CommandReport::success(Some(digest)))
}

/// Executes the `redact` command.
///
/// Key redactions run before subtree redactions so a key can be hidden inside
/// a subtree that is itself redacted afterwards.
fn command_redact(context: &CommandContext, command: &RedactCommand) -> CliResult<CommandReport> {
    let options = resolve_options(&command.input, &context.config)?;
    let LoadedInput {
        label,
        mut value,
    } = load_input(&command.input, context.config.input.max_input_bytes)?;
    let hasher = ObjectHasher::new(options);
    let root = hasher.hash(&value).map_err(|err| {
        CliError::with_kind(err.kind(), t!("hash.failed", source = &label, error = err))
    })?;

    for pointer in &command.keys {
        redact_key(&mut value, pointer).map_err(|err| {
            CliError::with_kind("redaction", t!("redact.failed", source = &label, error = err))
        })?;
    }
    for pointer in &command.pointers {
        redact_pointer(&mut value, pointer, &hasher).map_err(|err| {
            CliError::with_kind("redaction", t!("redact.failed", source = &label, error = err))
        })?;
    }

    let rendered = serde_json::to_string_pretty(&value).map_err(|err| {
        CliError::with_kind("serialization", t!("redact.render_failed", error = err))
    })?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stderr_line(&t!("redact.root_digest", digest = root))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    Ok(CommandReport::success(Some(root)))
}

/// Executes the `verify` command.
fn command_verify(context: &CommandContext, command: &VerifyCommand) -> CliResult<CommandReport> {
    let expected = HashDigest::from_hex(command.expected.trim()).map_err(|err| {
        CliError::with_kind(
            "invalid_argument",
            t!("verify.expected_invalid", value = &command.expected, error = err),
        )
    })?;
    let options = resolve_options(&command.input, &context.config)?;
    let loaded = load_input(&command.input, context.config.input.max_input_bytes)?;
    let actual = hash_target(&loaded, command.pointer.as_deref(), options)?;
    if actual == expected {
        write_stdout_line(&t!("verify.match", digest = actual))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(CommandReport::success(Some(actual)));
    }
    write_stderr_line(&t!("verify.mismatch", expected = expected, actual = actual))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    Ok(CommandReport {
        exit: ExitCode::FAILURE,
        outcome: AuditOutcome::Mismatch,
        digest: Some(actual),
    })
}

/// Executes the `demo` command.
fn command_demo(context: &CommandContext, command: &DemoCommand) -> CliResult<CommandReport> {
    let mut options = context.config.hash_options();
    if let Some(policy) = command.policy {
        options.number_policy = policy.into();
    }
    let hasher = ObjectHasher::new(options);
    write_stdout_line(&t!("demo.header", policy = options.number_policy.as_str()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    for (label, value) in demo_samples() {
        let digest = hasher.hash(&value).map_err(|err| {
            CliError::with_kind(err.kind(), t!("demo.failed", label = &label, error = err))
        })?;
        write_stdout_line(&t!("demo.row", digest = digest, label = label))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(CommandReport::success(None))
}

/// Returns the fixed demo samples paired with their JSON rendering.
fn demo_samples() -> Vec<(String, Value)> {
    [
        json!(null),
        json!(true),
        json!("foo"),
        json!(1.5),
        json!(["foo", "bar"]),
        json!({"foo": "bar"}),
        json!(["foo", {"bar": ["baz", null, 1.0, 1.5, 0.0001, 1000.0, 2.0, -23.1234, 2.0]}]),
        json!([
            "foo",
            "**REDACTED**96e2aab962831956c80b542f056454be411f870055d37805feb3007c855bd823"
        ]),
    ]
    .into_iter()
    .map(|sample| (sample.to_string(), Value::from(sample)))
    .collect()
}

// ============================================================================
// SECTION: Command Helpers
// ============================================================================

/// Resolves hashing options from configuration and command-line overrides.
fn resolve_options(args: &InputArgs, config: &ObjectHashConfig) -> CliResult<HashOptions> {
    let mut options = config.hash_options();
    if let Some(policy) = args.policy {
        options.number_policy = policy.into();
    }
    if let Some(depth) = args.max_depth {
        if depth == 0 || depth > MAX_DEPTH_LIMIT {
            return Err(CliError::with_kind(
                "invalid_argument",
                t!("options.max_depth_invalid", max = MAX_DEPTH_LIMIT),
            ));
        }
        options.max_depth = depth;
    }
    Ok(options)
}

/// Resolves the input format from flags or the input file extension.
fn resolve_format(format: Option<InputFormatArg>, path: Option<&Path>) -> InputFormat {
    if let Some(format) = format {
        return format.into();
    }
    path.and_then(InputFormat::detect).unwrap_or(InputFormat::Json)
}

/// Reads and decodes the input document.
fn load_input(args: &InputArgs, max_bytes: usize) -> CliResult<LoadedInput> {
    let format = resolve_format(args.format, args.input.as_deref());
    let kind = t!("input.kind.document");
    let (label, bytes) = match &args.input {
        Some(path) => {
            let label = path.display().to_string();
            let bytes = read_bytes_with_limit(path, max_bytes)
                .map_err(|err| read_limit_error(err, &kind, &label))?;
            (label, bytes)
        }
        None => {
            let label = t!("input.source.stdin");
            let bytes = read_with_limit(std::io::stdin().lock(), max_bytes)
                .map_err(|err| read_limit_error(err, &kind, &label))?;
            (label, bytes)
        }
    };
    let value = input::decode(&bytes, format).map_err(|err| match err {
        InputError::Unsupported(_) => CliError::with_kind(
            err.kind(),
            t!("input.unsupported", source = &label, error = err),
        ),
        InputError::Utf8 | InputError::Parse {
            ..
        } => CliError::with_kind(
            err.kind(),
            t!("input.parse_failed", format = format.as_str(), source = &label, error = err),
        ),
    })?;
    Ok(LoadedInput {
        label,
        value,
    })
}

/// Selects the subtree addressed by `pointer`, or the whole document.
fn select_target<'a>(loaded: &'a LoadedInput, pointer: Option<&str>) -> CliResult<&'a Value> {
    let Some(pointer) = pointer else {
        return Ok(&loaded.value);
    };
    if !pointer.is_empty() && !pointer.starts_with('/') {
        return Err(CliError::with_kind(
            "invalid_pointer",
            t!("pointer.invalid", pointer = pointer),
        ));
    }
    loaded.value.pointer(pointer).ok_or_else(|| {
        CliError::with_kind(
            "pointer_not_found",
            t!("pointer.not_found", pointer = pointer, source = &loaded.label),
        )
    })
}

/// Hashes the selected subtree of a loaded document.
fn hash_target(
    loaded: &LoadedInput,
    pointer: Option<&str>,
    options: HashOptions,
) -> CliResult<HashDigest> {
    let target = select_target(loaded, pointer)?;
    ObjectHasher::new(options).hash(target).map_err(|err| {
        CliError::with_kind(err.kind(), t!("hash.failed", source = &loaded.label, error = err))
    })
}

/// Builds the audit fields known before a command runs.
fn audit_params(command: &Commands, config: &ObjectHashConfig) -> HashAuditEventParams {
    let (name, args) = match command {
        Commands::Hash(command) => ("hash", Some(&command.input)),
        Commands::Token(command) => ("token", Some(&command.input)),
        Commands::Redact(command) => ("redact", Some(&command.input)),
        Commands::Verify(command) => ("verify", Some(&command.input)),
        Commands::Demo(_) => ("demo", None),
    };
    let policy = match (command, args) {
        (Commands::Demo(demo), _) => demo.policy.map(NumberPolicy::from),
        (_, Some(args)) => args.policy.map(NumberPolicy::from),
        (_, None) => None,
    }
    .unwrap_or(config.hashing.number_policy);
    HashAuditEventParams {
        command: name,
        input: args.map(|args| {
            args.input
                .as_ref()
                .map_or_else(|| STDIN_LABEL.to_string(), |path| path.display().to_string())
        }),
        format: args.map(|args| resolve_format(args.format, args.input.as_deref()).as_str()),
        policy: policy.as_str(),
        outcome: AuditOutcome::Success,
        digest: None,
        error_kind: None,
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded reads.
#[derive(Debug)]
enum ReadLimitError {
    /// I/O failure.
    Io(std::io::Error),
    /// Input size exceeds the configured limit.
    TooLarge {
        /// Actual (or observed) size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }
    read_with_limit(file, max_bytes)
}

/// Reads a stream to its end, failing once more than `max_bytes` arrive.
fn read_with_limit(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    let mut limited = reader.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Maps a bounded read failure to a localized CLI error.
fn read_limit_error(err: ReadLimitError, kind: &str, label: &str) -> CliError {
    match err {
        ReadLimitError::Io(err) => CliError::with_kind(
            "io",
            t!("input.read_failed", kind = kind, path = label, error = err),
        ),
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::with_kind(
            "input_too_large",
            t!("input.read_too_large", kind = kind, path = label, size = size, limit = limit),
        ),
    }
}

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Converts CLI format selections into input formats.
impl From<InputFormatArg> for InputFormat {
    fn from(value: InputFormatArg) -> Self {
        match value {
            InputFormatArg::Json => Self::Json,
            InputFormatArg::Toml => Self::Toml,
            InputFormatArg::Yaml => Self::Yaml,
        }
    }
}

/// Converts CLI policy selections into numeric policies.
impl From<PolicyArg> for NumberPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Tagged => Self::Tagged,
            PolicyArg::FloatOnly => Self::FloatOnly,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
