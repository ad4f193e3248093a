//! Subcommand execution.

use crate::args::{CliArgs, Command, ReportFormat};
use crate::config::{JetJsConfig, load_config};
use anyhow::{Context, Result};
use jetjs_ast::NodeIndex;
use jetjs_descriptors::ResolvedProgram;
use jetjs_emitter::intrinsics::intrinsic_for_descriptor;
use jetjs_emitter::{IntrinsicRegistry, TranslationContext, emit_program, has_corresponding_intrinsic};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info};

/// How one operation expression is lowered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    pub node: u32,
    pub operator: &'static str,
    /// Fully-qualified operator function, `None` when the resolver left it unbound.
    pub function: Option<String>,
    pub has_intrinsic: bool,
    /// Name of the matching intrinsic; `None` for unresolved operators and generic calls.
    pub intrinsic: Option<&'static str>,
}

pub fn load_program(path: &Path) -> Result<ResolvedProgram> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read program: {}", path.display()))?;
    ResolvedProgram::from_json(&source)
        .with_context(|| format!("failed to load program: {}", path.display()))
}

/// Configuration from `--config`, or the defaults when none was given.
pub fn resolve_config(args: &CliArgs) -> Result<JetJsConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => JetJsConfig::default(),
    };
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    Ok(config)
}

/// Run the selected subcommand and return what it prints to stdout.
pub fn run(args: &CliArgs) -> Result<String> {
    let config = resolve_config(args)?;
    let registry = config.intrinsic_registry(!args.no_builtins)?;
    let program = load_program(args.command.program_path())?;
    info!(
        roots = program.roots.len(),
        rules = registry.len(),
        "running {:?}",
        args.command
    );

    match &args.command {
        Command::Lower { .. } => lower(&program, &registry, config.indent),
        Command::Classify { .. } => render_report(&classify(&program, &registry), args.format),
    }
}

pub fn lower(
    program: &ResolvedProgram,
    registry: &IntrinsicRegistry,
    indent: usize,
) -> Result<String> {
    emit_program(program, registry, indent).context("failed to lower program")
}

/// Classify every binary, prefix and postfix expression of `program` in node order.
pub fn classify(program: &ResolvedProgram, registry: &IntrinsicRegistry) -> Vec<OperationReport> {
    let context = TranslationContext::new(program, registry);
    let mut reports = Vec::new();
    for (index, node) in program.nodes.iter() {
        let Some(token) = node.operation_token() else {
            continue;
        };
        reports.push(classify_operation(&context, index, token.as_str()));
    }
    debug!(operations = reports.len(), "classified operations");
    reports
}

fn classify_operation(
    context: &TranslationContext<'_>,
    node: NodeIndex,
    operator: &'static str,
) -> OperationReport {
    let function = context.bindings().function_for_operation(node);
    let intrinsic = function
        .and_then(|function| intrinsic_for_descriptor(context, function))
        .map(|intrinsic| intrinsic.name());
    OperationReport {
        node: node.0,
        operator,
        function: function
            .and_then(|function| context.descriptors().fq_name(function).ok())
            .map(|name| name.to_string()),
        has_intrinsic: has_corresponding_intrinsic(context, node),
        intrinsic,
    }
}

pub fn render_report(reports: &[OperationReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            let mut out = serde_json::to_string_pretty(reports)?;
            out.push('\n');
            Ok(out)
        }
        ReportFormat::Text => {
            let mut out = String::new();
            for report in reports {
                let function = report.function.as_deref().unwrap_or("<unresolved>");
                let lowering = match (report.intrinsic, report.has_intrinsic) {
                    (Some(intrinsic), _) => intrinsic,
                    (None, true) => "builtin operator",
                    (None, false) => "call",
                };
                writeln!(
                    out,
                    "#{} {} {} -> {}",
                    report.node, report.operator, function, lowering
                )?;
            }
            Ok(out)
        }
    }
}
