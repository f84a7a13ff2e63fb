//! hotel-pos - outlet terminal command line

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hotel_client::{HotelApi, NetworkHttpClient};
use hotel_pos::logger::init_logger_with_file;
use hotel_pos::import::import_items;
use hotel_pos::{
    AppContext, ImportRow, OrderSubmitter, OutletChange, PosConfig, PosSession, TaxComponent,
    TaxEngine, build_hold_payload, error_code_of,
};
use hotel_printer::NetworkPrinter;

#[derive(Parser)]
#[command(name = "hotel-pos", version, about = "Hotel outlet point-of-sale terminal")]
struct Cli {
    /// Context file (overrides POS_CONTEXT_PATH)
    #[arg(long, global = true)]
    context: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store the property (and token) to work with
    Property {
        hotel_id: i64,
        #[arg(long)]
        token: Option<String>,
    },
    /// List outlets of the property
    Outlets,
    /// List sellable items
    Items,
    /// Select the outlet this terminal sells at
    SelectOutlet { id: i64 },
    /// Hold an order for the selected outlet
    Hold {
        /// ITEM_ID:QTY, repeatable
        #[arg(long = "item", value_parser = parse_item, required = true)]
        items: Vec<(i64, u32)>,
        /// Table number
        #[arg(long)]
        table: Option<String>,
        /// Print the ticket preview instead of submitting
        #[arg(long)]
        dry_run: bool,
    },
    /// Create items from a JSON file of rows (code, name, category, price)
    Import { file: PathBuf },
    /// Show the stored context
    Status,
    /// Forget the stored context
    Reset,
}

fn parse_item(s: &str) -> Result<(i64, u32), String> {
    let (id, qty) = s.split_once(':').unwrap_or((s, "1"));
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid item id in '{}'", s))?;
    let qty: u32 = qty
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    if qty == 0 {
        return Err(format!("quantity must be at least 1 in '{}'", s));
    }
    Ok((id, qty))
}

type Session = PosSession<NetworkHttpClient, NetworkPrinter>;

fn open_session(config: &PosConfig, path: PathBuf) -> Result<Session> {
    let ctx = AppContext::load(&path).context("failed to load context")?;
    let api = HotelApi::connect(&config.client_config(&ctx))?;
    let printer = match &config.printer_addr {
        Some(addr) => Some(NetworkPrinter::from_addr(addr)?),
        None => None,
    };
    Ok(PosSession::new(
        api,
        ctx,
        path,
        OrderSubmitter::new(printer, config.paper_width),
        TaxEngine::new(config.tax_mode),
    ))
}

/// Fail with the slice error if a load did not go through
fn ensure_loaded(ok: bool, what: &str, error: Option<&str>) -> Result<()> {
    if ok {
        return Ok(());
    }
    bail!("failed to load {}: {}", what, error.unwrap_or("unknown error"))
}

/// Print a failure with its code when the chain carries one
fn report(err: &anyhow::Error) {
    match err.chain().find_map(error_code_of) {
        Some(code) => {
            tracing::debug!(code = code.code(), category = code.category().name(), "command failed");
            eprintln!("error[{}:{}]: {:#}", code.category().name(), code.code(), err)
        }
        None => eprintln!("error: {:#}", err),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = PosConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: PosConfig) -> Result<()> {
    let path = cli.context.unwrap_or_else(|| config.context_path.clone());

    // These two must work even when the context file no longer parses
    match cli.command {
        Command::Reset => {
            AppContext::remove(&path)?;
            println!("Context cleared");
            return Ok(());
        }
        Command::Status => return status(&config, &path),
        _ => {}
    }

    let mut session = open_session(&config, path.clone())?;

    match cli.command {
        Command::Property { hotel_id, token } => {
            session.set_property(hotel_id, token);
            session.save_context()?;
            println!("Property {} selected", hotel_id);
        }
        Command::Outlets => {
            let prompt = session.load_outlets().await;
            ensure_loaded(
                session.outlets.error().is_none(),
                "outlets",
                session.outlets.error(),
            )?;
            let selected = session.context().selected_outlet_id;
            for outlet in session.outlets.data() {
                let mark = if Some(outlet.id) == selected { "*" } else { " " };
                println!("{} {:>5}  {}  ({})", mark, outlet.id, outlet.name, outlet.currency);
            }
            if prompt {
                println!("No outlet selected. Run `hotel-pos select-outlet <ID>`.");
            }
        }
        Command::Items => {
            let ok = session.load_products().await;
            ensure_loaded(ok, "items", session.products.error())?;
            for product in session.products.data() {
                println!(
                    "{:>6}  {:<32} {:>10.2}  {}",
                    product.id,
                    product.name,
                    product.price,
                    product.code.as_deref().unwrap_or("")
                );
            }
        }
        Command::SelectOutlet { id } => {
            session.load_outlets().await;
            ensure_loaded(
                session.outlets.error().is_none(),
                "outlets",
                session.outlets.error(),
            )?;
            let change = session.select_outlet(id)?;
            session.save_context()?;
            match change {
                OutletChange::Initial => println!("Outlet {} selected", id),
                OutletChange::Unchanged => println!("Outlet {} already selected", id),
                OutletChange::Switched { from } => {
                    println!("Switched from outlet {} to {}; cart cleared", from, id)
                }
            }
        }
        Command::Hold {
            items,
            table,
            dry_run,
        } => hold(&mut session, &config, items, table, dry_run).await?,
        Command::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let rows: Vec<ImportRow> = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a list of item rows", file.display()))?;
            let report = import_items(session.api(), &rows).await?;
            println!(
                "Created {} categories and {} items",
                report.categories_created, report.items_created
            );
            if !report.skipped_codes.is_empty() {
                println!("Skipped: {}", report.skipped_codes.join(", "));
            }
        }
        Command::Status | Command::Reset => {}
    }

    Ok(())
}

fn status(config: &PosConfig, path: &Path) -> Result<()> {
    println!("Context file: {}", path.display());
    let ctx = match AppContext::load(path) {
        Ok(ctx) => ctx,
        Err(err) => {
            println!("Context:      unreadable ({}); run `hotel-pos reset`", err);
            return Ok(());
        }
    };
    match ctx.hotel_id {
        Some(id) => println!("Property:     {}", id),
        None => println!("Property:     (none)"),
    }
    match &ctx.selected_outlet {
        Some(o) => println!("Outlet:       {} {} ({})", o.id, o.name, o.currency),
        None => println!("Outlet:       (none)"),
    }
    println!(
        "Signed in:    {}",
        if ctx.access_token.is_some() { "yes" } else { "no" }
    );
    println!("Tax mode:     {:?}", config.tax_mode);
    Ok(())
}

async fn hold(
    session: &mut Session,
    config: &PosConfig,
    items: Vec<(i64, u32)>,
    table: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let ok = session.load_products().await;
    ensure_loaded(ok, "items", session.products.error())?;
    session.load_tax_configs().await;

    for (id, qty) in items {
        session.add_items(id, qty)?;
    }
    if let Some(number) = table.as_deref() {
        let ok = session.load_tables().await?;
        ensure_loaded(ok, "tables", session.tables.error())?;
        session.stage_table(number)?;
    }

    let breakdown = session.tax_breakdown();
    println!("Subtotal      {:>10.2}", breakdown.subtotal);
    for (component, amount) in breakdown.lines() {
        if !amount.is_zero() || component == TaxComponent::ServiceCharge {
            println!("{:<14}{:>10.2}", component.label(), amount);
        }
    }
    println!("Grand total   {:>10.2}", breakdown.grand_total);

    if dry_run {
        let ctx = session.context();
        let outlet = ctx
            .selected_outlet
            .clone()
            .context("no outlet selected")?;
        let payload = build_hold_payload(
            session.cart(),
            hotel_pos::HoldTarget {
                hotel_id: ctx.hotel_id.context("no property selected")?,
                outlet: &outlet,
                table_no: table.as_deref(),
                delivery_method: None,
            },
            chrono::Utc::now(),
        )?;
        let preview = hotel_pos::OrderTicketRenderer::new(config.paper_width)
            .render(&payload, &outlet.name)
            .build_raw();
        println!("{}", strip_commands(&preview));
        return Ok(());
    }

    let receipt = session.hold().await?;
    println!(
        "Held {} (transaction {}) total {:.2}{}",
        receipt.doc_no,
        receipt.transaction_id,
        receipt.total,
        if receipt.printed { ", ticket printed" } else { "" }
    );
    Ok(())
}

/// Drop ESC/POS command bytes from a raw ticket for terminal preview
fn strip_commands(raw: &[u8]) -> String {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            // ESC @ is two bytes, GS V 66 n four, the rest three
            0x1B if raw.get(i + 1) == Some(&0x40) => i += 2,
            0x1D if raw.get(i + 1) == Some(&0x56) => i += 4,
            0x1B | 0x1D => i += 3,
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
