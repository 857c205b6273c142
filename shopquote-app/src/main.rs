use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod plotting;
mod report;
mod workflow;

#[derive(Debug, Parser)]
#[command(name = "shopquote", version, about = "Service-cost quoting for auto repair shops")]
struct Cli {
    /// Directory holding employees/, services/ and shop.yaml
    #[arg(long, default_value = "./data/shop")]
    data: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price one catalog service
    Quote {
        #[arg(long)]
        service: String,
        #[arg(long)]
        employee: Option<String>,
        /// Print the rounded breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price a work order described in a YAML file
    WorkOrder {
        #[arg(long)]
        file: String,
        #[arg(long, default_value = "./data/runs")]
        output: String,
    },
    /// List catalog services
    Catalog {
        #[arg(long)]
        make: Option<String>,
        #[arg(long, requires = "make")]
        model: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
    /// List employees with their derived hourly rate
    Employees {
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Shopquote ---");

    let shop = config::ShopData::load(&cli.data)?;
    println!("Shop: {}", shop.shop_name);

    match cli.command {
        Command::Quote {
            service,
            employee,
            json,
        } => {
            workflow::run_quote(&shop, &service, employee.as_deref(), json)?;
        }
        Command::WorkOrder { file, output } => {
            workflow::run_work_order(&shop, &file, &output)?;
        }
        Command::Catalog {
            make,
            model,
            search,
            page,
            per_page,
        } => {
            let page = workflow::catalog_page(
                &shop,
                make.as_deref(),
                model.as_deref(),
                search.as_deref(),
                page,
                per_page,
            )?;
            report::print_catalog_page(&page);
        }
        Command::Employees {
            role,
            search,
            page,
            per_page,
        } => {
            let page = workflow::employee_page(&shop, role.as_deref(), search.as_deref(), page, per_page)?;
            report::print_employee_page(&page);
        }
    }

    Ok(())
}
