//! clap command surface for the metrics console.

use clap::Subcommand;

use metriq_core::error::{MetriqError, Result};
use metriq_core::model::{Metric, MetricForm, MetricPatch};
use metriq_core::render::{table, RenderMode};

use metriq_console::api::ApiClient;
use metriq_console::config::ConsoleConfig;
use metriq_console::prompt::{AlwaysConfirm, Confirm, StdinConfirm};
use metriq_console::view::{CreateOutcome, DeleteOutcome, View};

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    #[command(about = "Fetch and render the metric collection")]
    List {
        #[arg(long, value_parser = ["table", "list"], help = "Layout override (default: config)")]
        mode: Option<String>,
        #[arg(long, value_parser = ["json"], help = "Output format: json (default: rendered view)")]
        output: Option<String>,
    },
    #[command(about = "Submit a new metric")]
    Add {
        #[arg(help = "Metric name")]
        name: String,
        #[arg(help = "Numeric measurement (e.g. 72.5)")]
        value: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "Unit of measurement (%, $, count, ...)")]
        unit: Option<String>,
        #[arg(long, help = "Status (default: active)")]
        status: Option<String>,
        #[arg(long)]
        warning_threshold: Option<String>,
        #[arg(long)]
        limit_threshold: Option<String>,
        #[arg(long)]
        risk_type: Option<String>,
        #[arg(long)]
        business_unit: Option<String>,
        #[arg(long)]
        created_by: Option<String>,
    },
    #[command(about = "Show a single metric")]
    Show {
        id: i64,
        #[arg(long, value_parser = ["json"], help = "Output format: json (default: plain)")]
        output: Option<String>,
    },
    #[command(about = "Update fields of an existing metric")]
    Set {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        value: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        warning_threshold: Option<f64>,
        #[arg(long)]
        limit_threshold: Option<f64>,
        #[arg(long)]
        risk_type: Option<String>,
        #[arg(long)]
        business_unit: Option<String>,
    },
    #[command(about = "Delete a metric after confirmation")]
    Delete {
        id: i64,
        #[arg(short = 'y', long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub(crate) async fn handle_command(command: Commands, cfg: &ConsoleConfig) -> Result<()> {
    match command {
        Commands::List { mode, output } => {
            let view = build_view(cfg, mode.as_deref())?;
            if matches!(output.as_deref(), Some("json")) {
                let metrics = view.api().list().await?;
                let s = serde_json::to_string_pretty(&metrics)
                    .map_err(|e| MetriqError::Internal(format!("encode failed: {e}")))?;
                println!("{s}");
            } else {
                print!("{}", view.load_and_render().await?);
            }
        }

        Commands::Add {
            name,
            value,
            description,
            unit,
            status,
            warning_threshold,
            limit_threshold,
            risk_type,
            business_unit,
            created_by,
        } => {
            // Absent flags become blank fields so the form layer decides
            // between null and default, same as an empty input box.
            let form = MetricForm {
                name,
                value,
                description: description.unwrap_or_default(),
                unit: unit.unwrap_or_default(),
                status: status.unwrap_or_default(),
                warning_threshold: warning_threshold.unwrap_or_default(),
                limit_threshold: limit_threshold.unwrap_or_default(),
                risk_type: risk_type.unwrap_or_default(),
                business_unit: business_unit.unwrap_or_default(),
                created_by: created_by.unwrap_or_default(),
            };

            let view = build_view(cfg, None)?;
            match view.submit_create(&form).await? {
                CreateOutcome::Refreshed(rendered) => print!("{rendered}"),
                CreateOutcome::Notice(msg) => println!("{msg}"),
            }
        }

        Commands::Show { id, output } => {
            let api = ApiClient::new(&cfg.api.base_url);
            let metric = api.get(id).await?;
            if matches!(output.as_deref(), Some("json")) {
                let s = serde_json::to_string_pretty(&metric)
                    .map_err(|e| MetriqError::Internal(format!("encode failed: {e}")))?;
                println!("{s}");
            } else {
                print_detail(&metric, &cfg.view.placeholder);
            }
        }

        Commands::Set {
            id,
            name,
            value,
            description,
            unit,
            status,
            warning_threshold,
            limit_threshold,
            risk_type,
            business_unit,
        } => {
            let patch = MetricPatch {
                name,
                value,
                description,
                unit,
                status,
                warning_threshold,
                limit_threshold,
                risk_type,
                business_unit,
            };
            if patch.is_empty() {
                return Err(MetriqError::BadRequest(
                    "set requires at least one field flag".into(),
                ));
            }
            let api = ApiClient::new(&cfg.api.base_url);
            let metric = api.update(id, &patch).await?;
            println!("Metric {} updated.", metric.id);
        }

        Commands::Delete { id, yes } => {
            let confirm: Box<dyn Confirm> = if yes {
                Box::new(AlwaysConfirm)
            } else {
                Box::new(StdinConfirm)
            };
            let view = build_view(cfg, None)?;
            match view.request_delete(id, confirm.as_ref()).await? {
                DeleteOutcome::Declined => println!("Delete cancelled."),
                DeleteOutcome::Refreshed(rendered) => print!("{rendered}"),
                DeleteOutcome::Notice(msg) => println!("{msg}"),
            }
        }
    }

    Ok(())
}

fn build_view(cfg: &ConsoleConfig, mode: Option<&str>) -> Result<View> {
    let view = View::new(cfg);
    match mode {
        None => Ok(view),
        Some("table") => Ok(view.with_mode(RenderMode::Table)),
        Some("list") => Ok(view.with_mode(RenderMode::List)),
        Some(other) => Err(MetriqError::BadRequest(format!("unknown mode: {other}"))),
    }
}

fn print_detail(m: &Metric, placeholder: &str) {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| placeholder.to_string());
    let opt_num =
        |v: &Option<f64>| v.map(|x| x.to_string()).unwrap_or_else(|| placeholder.to_string());

    println!("Metric {}", m.id);
    println!("  name:              {}", m.name);
    println!("  value:             {}", m.value);
    println!("  unit:              {}", opt(&m.unit));
    println!("  status:            {}", m.status);
    println!("  description:       {}", opt(&m.description));
    println!("  warning_threshold: {}", opt_num(&m.warning_threshold));
    println!("  limit_threshold:   {}", opt_num(&m.limit_threshold));
    println!("  indicator:         {}", m.indicator().as_str());
    println!("  risk_type:         {}", opt(&m.risk_type));
    println!("  business_unit:     {}", opt(&m.business_unit));
    println!("  created_by:        {}", opt(&m.created_by));
    println!("  created_at:        {}", table::format_timestamp(&m.created_at));
    if let Some(ts) = &m.updated_at {
        println!("  updated_at:        {}", table::format_timestamp(ts));
    }
}
