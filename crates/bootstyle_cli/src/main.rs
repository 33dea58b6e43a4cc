//! Bootstyle CLI
//!
//! Inspect themes, parse descriptors and resolve styles without a toolkit:
//! - `bootstyle themes` lists every theme in the catalog
//! - `bootstyle parse <DESCRIPTOR>` shows the canonical key
//! - `bootstyle resolve <DESCRIPTOR>` shows the generated name and full spec

mod config;

use anyhow::{Context, Result};
use bootstyle::{
    parse, ColorToken, Descriptor, Diagnostic, ExtraValue, Extras, ResolvedStyleSpec,
    StateStyle, StyleEngine, Vocabulary, WidgetClass,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bootstyle")]
#[command(about = "Resolve bootstyle descriptors into themed widget styles")]
#[command(version)]
struct Cli {
    /// Engine config file (defaults to ./bootstyle.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available themes
    Themes,

    /// Parse a descriptor into its canonical key
    Parse {
        /// Descriptor, e.g. "success-outline" or "primary[100][muted]"
        descriptor: String,

        /// Widget class used when the descriptor names none
        #[arg(short, long, default_value = "button")]
        widget: WidgetClass,
    },

    /// Resolve a descriptor into a named style
    Resolve {
        /// Descriptor, e.g. "success-outline" or "primary[100][muted]"
        descriptor: String,

        /// Widget class used when the descriptor names none
        #[arg(short, long, default_value = "button")]
        widget: WidgetClass,

        /// Theme to resolve against (defaults to the configured initial theme)
        #[arg(short, long)]
        theme: Option<String>,

        /// Extra option as key=value (repeatable)
        #[arg(short, long = "extra", value_parser = config::parse_extra)]
        extras: Vec<(String, String)>,

        /// Print the spec as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load(cli.config.as_deref())?;
    let mut engine = StyleEngine::new(&config).context("Failed to start style engine")?;

    match cli.command {
        Commands::Themes => cmd_themes(&engine),
        Commands::Parse { descriptor, widget } => cmd_parse(&engine, &descriptor, widget),
        Commands::Resolve {
            descriptor,
            widget,
            theme,
            extras,
            json,
        } => cmd_resolve(&mut engine, &descriptor, widget, theme.as_deref(), extras, json),
    }
}

fn cmd_themes(engine: &StyleEngine) -> Result<()> {
    let provider = engine.provider();
    let pair = provider.pair();

    for palette in provider.catalog().palettes() {
        let marker = if palette.name() == provider.active_name() {
            "*"
        } else {
            " "
        };
        let role = if palette.name() == pair.light {
            " (light)"
        } else if palette.name() == pair.dark {
            " (dark)"
        } else {
            ""
        };
        let primary = palette
            .base(&ColorToken::Primary)
            .map(|c| c.to_hex_string())
            .unwrap_or_default();
        let custom: Vec<String> = palette
            .custom_tokens()
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        print!(
            "{marker} {:<12} {:<5} primary {}{role}",
            palette.name(),
            if palette.is_dark() { "dark" } else { "light" },
            primary,
        );
        if !custom.is_empty() {
            print!("  custom: {}", custom.join(", "));
        }
        println!();
    }
    Ok(())
}

fn cmd_parse(engine: &StyleEngine, descriptor: &str, widget: WidgetClass) -> Result<()> {
    let vocabulary = Vocabulary::with_custom_colors(engine.provider().catalog().custom_tokens());
    let descriptor = Descriptor::from(descriptor);

    let parsed = match parse(&descriptor, widget, &vocabulary) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("error: {e} (falling back to {})", ColorToken::FALLBACK);
            e.into_fallback()
        }
    };

    let key = &parsed.key;
    println!("key:         {key}");
    println!("widget:      {}", key.widget().native_class());
    println!("color:       {}", key.color());
    println!("variant:     {}", key.variant());
    if !key.modifiers().is_empty() {
        let modifiers: Vec<String> = key.modifiers().iter().map(|m| m.to_string()).collect();
        println!("modifiers:   {}", modifiers.join(""));
    }
    println!("fingerprint: {:08x}", key.fingerprint());
    print_diagnostics(&parsed.diagnostics);
    Ok(())
}

fn cmd_resolve(
    engine: &mut StyleEngine,
    descriptor: &str,
    widget: WidgetClass,
    theme: Option<&str>,
    raw_extras: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    if let Some(theme) = theme {
        engine
            .set_theme(theme)
            .with_context(|| format!("Failed to switch to theme {theme:?}"))?;
    }

    let extras: Extras = raw_extras
        .iter()
        .map(|(key, value)| (key.as_str(), ExtraValue::parse(value)))
        .collect();

    let name = engine.resolve_name_with(descriptor, widget, extras);
    let spec = engine
        .spec(&name)
        .cloned()
        .context("Resolved style is missing from the registry")?;
    let diagnostics = engine.take_diagnostics();

    if json {
        let output = serde_json::json!({
            "name": name,
            "spec": spec,
            "diagnostics": diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize spec")?
        );
        return Ok(());
    }

    println!("{name}");
    print_spec(&spec);
    print_diagnostics(&diagnostics);
    Ok(())
}

fn print_spec(spec: &ResolvedStyleSpec) {
    println!("  theme    {}", spec.theme);
    let states: [(&str, &StateStyle); 5] = [
        ("normal", &spec.states.normal),
        ("hover", &spec.states.hover),
        ("active", &spec.states.active),
        ("disabled", &spec.states.disabled),
        ("focus", &spec.states.focus),
    ];
    for (state, style) in states {
        println!(
            "  {state:<8} bg {}  fg {}  border {}",
            style.background, style.foreground, style.border
        );
    }

    let geometry = [
        ("border_width", spec.border_width),
        ("corner_radius", spec.corner_radius),
        ("indicator_size", spec.indicator_size),
        ("padding", spec.padding),
    ];
    for (label, value) in geometry {
        if let Some(value) = value {
            println!("  {label:<14} {value}");
        }
    }
    if let Some(icon) = &spec.icon {
        println!("  icon           {icon}");
    }
    if let Some(font) = &spec.font {
        println!("  font           {font}");
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!("warning: {diagnostic}");
    }
}
