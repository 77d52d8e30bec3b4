//! Result lines for `run`, `check` and `config`

use super::context::UiContext;
use console::style;

const TAG: &str = "hostrun:";

fn plain(parts: std::fmt::Arguments<'_>) {
    println!("{} {}", style(TAG).bold(), parts);
}

/// Heading for a report such as `check`
pub fn banner(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        plain(format_args!("{}", title.to_lowercase()));
    }
}

/// The command finished and did what was asked
pub fn done(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).green().bold()).ok();
    } else {
        plain(format_args!("{}", message));
    }
}

/// The command finished but had nothing to hand to the host
pub fn done_empty(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).yellow().bold()).ok();
    } else {
        plain(format_args!("{} {}", style("warning:").yellow(), message));
    }
}

/// A file was written to `path`
pub fn saved(ctx: &UiContext, what: &str, path: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(format!("{} {}", what, style(path).dim())).ok();
    } else {
        plain(format_args!("{} -> {}", what, path));
    }
}

/// Nothing was done, `hint` says how to force it
pub fn skipped(ctx: &UiContext, reason: &str, hint: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{}\n{}", reason, style(hint).dim())).ok();
    } else {
        plain(format_args!("{} {} ({})", style("skipped:").yellow(), reason, hint));
    }
}

/// One `name = value` line of a report
pub fn field(ctx: &UiContext, name: &str, value: &str) {
    if ctx.use_fancy_output() {
        println!("  {:<8} {}", style(name).dim(), value);
    } else {
        plain(format_args!("{} = {}", name, value));
    }
}
