use super::print::{print_car, print_cars, print_messages, print_total};
use super::setup::{Cli, Commands};
use carlot::api::{CarlotApi, NewCar, RentRequest};
use carlot::config::{CarlotConfig, ConfigKey};
use carlot::error::{CarlotError, Result};
use carlot::server;
use carlot::store::fs::FileStore;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CarlotApi<FileStore>,
    config: CarlotConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(cli.verbose, serving);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config is handled before context init: it must work even when the car file is unusable
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&cwd, key.as_deref(), value.as_deref());
    }

    let mut ctx = init_context(&cli, &cwd)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { car_id }) => handle_show(&ctx, &car_id),
        Some(Commands::Add {
            brand,
            model,
            price,
            image_url,
        }) => handle_add(
            &mut ctx,
            NewCar {
                brand,
                model,
                price_per_day: price,
                image_url,
            },
        ),
        Some(Commands::Delete { car_id }) => handle_delete(&mut ctx, &car_id),
        Some(Commands::Rent {
            car_id,
            customer,
            days,
        }) => handle_rent(
            &mut ctx,
            RentRequest {
                car_id,
                customer,
                days,
            },
        ),
        Some(Commands::Return { car_id }) => handle_return(&mut ctx, &car_id),
        Some(Commands::Serve { bind }) => handle_serve(ctx, bind),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool, serving: bool) {
    let default_directive = if verbose {
        "carlot=debug,tower_http=debug"
    } else if serving {
        "carlot=info,tower_http=info"
    } else {
        "carlot=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli, cwd: &std::path::Path) -> Result<AppContext> {
    let config = CarlotConfig::load(cwd)?
        .with_env()
        .with_overrides(cli.data_file.clone(), None);

    let data_file = if config.data_file.is_absolute() {
        config.data_file.clone()
    } else {
        cwd.join(&config.data_file)
    };
    tracing::debug!(path = %data_file.display(), "using car file");

    let api = CarlotApi::new(FileStore::new(data_file));
    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_cars();
    print_cars(&result.listed_cars);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, car_id: &str) -> Result<()> {
    let result = ctx.api.get_car(car_id)?;
    for car in &result.listed_cars {
        print_car(car);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: NewCar) -> Result<()> {
    let result = ctx.api.add_car(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, car_id: &str) -> Result<()> {
    let result = ctx.api.delete_car(car_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rent(ctx: &mut AppContext, request: RentRequest) -> Result<()> {
    let result = ctx.api.rent_car(request)?;
    print_messages(&result.messages);
    if let Some(total) = result.total {
        print_total(total);
    }
    Ok(())
}

fn handle_return(ctx: &mut AppContext, car_id: &str) -> Result<()> {
    let result = ctx.api.return_car(car_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_serve(ctx: AppContext, bind: Option<String>) -> Result<()> {
    let config = ctx.config.with_overrides(None, bind);
    let addr = config.bind_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CarlotError::Io)?;
    runtime.block_on(server::serve(ctx.api, addr))
}

fn handle_config(cwd: &std::path::Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = CarlotConfig::load(cwd)?;

    match (key, value) {
        (None, _) => {
            for key in ConfigKey::ALL {
                println!("{} = {}", key.name(), config.get(key));
            }
        }
        (Some(name), None) => {
            let key: ConfigKey = name.parse()?;
            println!("{} = {}", key.name(), config.get(key));
        }
        (Some(name), Some(value)) => {
            let key: ConfigKey = name.parse()?;
            config.set(key, value)?;
            config.save(cwd)?;
            println!("{} = {}", key.name(), config.get(key));
        }
    }
    Ok(())
}
