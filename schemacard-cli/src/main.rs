use std::path::Path;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use schemacard::form::CheckboxItem;
use schemacard::{
    CardOptions, CardPage, FieldKind, FieldValue, FileSchemaSource, ImageExporter, LoadState,
    OutputDestination, OutputOptions, PreviewFormat, SchemaCard, SchemaSource,
    StaticSchemaSource, SvgCardExporter, emit_preview, write_download,
};

#[derive(Debug, Parser)]
#[command(
    name = "schemacard",
    version,
    about = "Fill a card form declared by a tabular schema and export the card"
)]
struct Cli {
    /// Schema location: http(s) URL, file path, or "-" for stdin
    #[arg(short = 's', long = "schema", value_name = "SPEC")]
    schema: String,

    /// Field assignment; checkbox values are toggled in order and separated by "|"
    #[arg(long = "set", value_name = "LABEL=VALUE", action = ArgAction::Append)]
    assignments: Vec<String>,

    /// List the generated form fields on stderr
    #[arg(long = "fields")]
    fields: bool,

    /// Print the preview as JSON instead of text lines
    #[arg(long = "json")]
    json: bool,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Write the exported card to PATH (a directory receives the default file name, "-" prints a data URI)
    #[arg(short = 'e', long = "export", value_name = "PATH")]
    export: Option<String>,

    /// Export an SVG document instead of a PNG image
    #[arg(long = "svg")]
    svg: bool,

    /// Upscale factor applied when exporting
    #[arg(long = "scale", value_name = "FACTOR")]
    scale: Option<f32>,

    /// Footer caption used when the schema header carries none
    #[arg(long = "footer", value_name = "TEXT")]
    footer: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    let assignments = parse_assignments(&cli.assignments)?;

    let mut options = CardOptions::default();
    if let Some(footer) = cli.footer.clone() {
        options = options.with_default_footer(footer);
    }
    if let Some(scale) = cli.scale {
        options = options.with_export_scale(scale);
    }

    let source = resolve_source(&cli.schema).await?;
    let origin = source.origin();
    tracing::debug!(%origin, "loading schema");
    let mut page = SchemaCard::from_boxed(source)
        .with_options(options)
        .render()
        .await;

    if page.state() == LoadState::Failed {
        if let Some(notice) = page.form().notice() {
            eprintln!("{notice}");
        }
        return Err(eyre!("failed to load schema from {origin}"));
    }

    if cli.fields {
        describe_fields(&page);
    }

    for (label, value) in &assignments {
        apply_assignment(&mut page, label, value)
            .wrap_err_with(|| format!("cannot set '{label}'"))?;
    }

    let format = if cli.json {
        PreviewFormat::Json
    } else {
        PreviewFormat::Text
    };
    let output = OutputOptions::new(format).with_pretty(!cli.no_pretty);
    emit_preview(&page.region(), &output).map_err(Report::msg)?;

    if let Some(target) = cli.export.as_deref() {
        export(&page, target, cli.svg).await?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_assignments(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|item| {
            item.split_once('=')
                .map(|(label, value)| (label.to_string(), value.to_string()))
                .ok_or_else(|| eyre!("expected LABEL=VALUE, got '{item}'"))
        })
        .collect()
}

async fn resolve_source(location: &str) -> Result<Box<dyn SchemaSource>> {
    if location == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .wrap_err("failed to read schema from stdin")?;
        return Ok(Box::new(StaticSchemaSource::new(buffer)));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        #[cfg(feature = "http")]
        {
            let source = schemacard::HttpSchemaSource::parse(location).map_err(Report::msg)?;
            return Ok(Box::new(source));
        }
        #[cfg(not(feature = "http"))]
        {
            return Err(eyre!(
                "schema URL '{location}' requires the 'http' feature, which this build lacks"
            ));
        }
    }

    Ok(Box::new(FileSchemaSource::new(location)))
}

fn apply_assignment(page: &mut CardPage, label: &str, value: &str) -> Result<()> {
    let widget = page
        .widget_by_label_mut(label)
        .ok_or_else(|| eyre!("no field labelled '{label}'"))?;
    let kind = widget.definition().kind.clone();
    match kind {
        FieldKind::Text => widget.input_text(value)?,
        FieldKind::Select(_) | FieldKind::Radio(_) => {
            widget.choose(value)?;
        }
        FieldKind::Checkbox(_) => {
            for option in value.split('|') {
                widget.toggle_option(option)?;
            }
        }
    }
    Ok(())
}

fn describe_fields(page: &CardPage) {
    for widget in page.form().widgets() {
        let detail = match widget.value() {
            FieldValue::Text(_) => widget.placeholder().unwrap_or_default().to_string(),
            FieldValue::Select { options, .. } | FieldValue::Radio { options, .. } => {
                options.join(" | ")
            }
            FieldValue::Checkbox { items, .. } => items
                .iter()
                .map(|item| match item {
                    CheckboxItem::Toggle { value, .. } => value.as_str(),
                    CheckboxItem::Break => "<break>",
                })
                .collect::<Vec<_>>()
                .join(" | "),
        };
        eprintln!(
            "{:>3}  {} ({})  {}",
            widget.position(),
            widget.label(),
            widget.definition().kind,
            detail
        );
    }
}

async fn export(page: &CardPage, target: &str, svg: bool) -> Result<()> {
    let exporter = select_exporter(svg);
    let download = page
        .export(exporter.as_ref())
        .await
        .wrap_err("failed to export card")?;

    let destination = if target == "-" {
        OutputDestination::Stdout
    } else {
        let path = Path::new(target);
        if path.is_dir() {
            OutputDestination::file(path.join(&download.file_name))
        } else {
            OutputDestination::file(path)
        }
    };
    write_download(&download, &destination).map_err(Report::msg)
}

fn select_exporter(svg: bool) -> Box<dyn ImageExporter> {
    if svg {
        return Box::new(SvgCardExporter);
    }
    #[cfg(feature = "raster")]
    {
        Box::new(schemacard::PngCardExporter::new())
    }
    #[cfg(not(feature = "raster"))]
    {
        tracing::warn!("built without the 'raster' feature; exporting SVG instead");
        Box::new(SvgCardExporter)
    }
}
