//! `wardrobe` command line: resolve icons, browse and edit a closet file

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wardrobe_core::{Collaborators, StaticSession, UserId, WardrobeConfig, WardrobeSession};
use wardrobe_index::CategoryFilter;
use wardrobe_intake::normalize_description;
use wardrobe_outfit::OutfitId;
use wardrobe_resolver::ImageResolver;
use wardrobe_taxonomy::{Category, Color, Formality, ItemId, Material, PageType, Subcategory};

mod store;

use store::{FileStore, NoWeather};

fn cli() -> Command {
    let wardrobe_file = || {
        Arg::new("file")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Wardrobe JSON file (items, descriptions, outfits)")
    };

    Command::new("wardrobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clothing taxonomy resolution, closet index and outfit layout")
        .subcommand_required(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve attributes to an icon reference")
                .arg(Arg::new("category").required(true))
                .arg(Arg::new("subcategory").required(true))
                .arg(Arg::new("material").required(true))
                .arg(Arg::new("formality").required(true)),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize a description the way intake stores it")
                .arg(Arg::new("text").required(true)),
        )
        .subcommand(
            Command::new("closet")
                .about("Print the closet index")
                .arg(wardrobe_file())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .default_value("all")
                        .help("Category to show, or \"all\""),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Add an item through the intake form")
                .arg(wardrobe_file())
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("subcategory").long("subcategory").required(true))
                .arg(Arg::new("color").long("color").required(true))
                .arg(Arg::new("secondary").long("secondary"))
                .arg(Arg::new("material").long("material").required(true))
                .arg(Arg::new("formality").long("formality").required(true))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove an item")
                .arg(wardrobe_file())
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("saved")
                .about("Render saved outfits")
                .arg(wardrobe_file())
                .arg(
                    Arg::new("hover")
                        .long("hover")
                        .value_parser(value_parser!(u64))
                        .help("Item under the pointer"),
                )
                .arg(
                    Arg::new("outfit")
                        .long("outfit")
                        .requires("hover")
                        .help("Saved outfit the pointer is in"),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_session(config: WardrobeConfig, path: &Path) -> WardrobeSession {
    let store = Arc::new(FileStore::new(path));
    WardrobeSession::new(
        config,
        Collaborators {
            items: store.clone(),
            outfits: store,
            session: Arc::new(StaticSession::signed_in(UserId::new("local"))),
            weather: Arc::new(NoWeather),
        },
    )
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing argument {name}"))
}

fn file(args: &ArgMatches) -> Result<&PathBuf> {
    args.get_one::<PathBuf>("file").context("missing wardrobe file")
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn resolve(config: &WardrobeConfig, args: &ArgMatches) -> Result<()> {
    let category: Category = arg(args, "category")?.parse()?;
    let subcategory: Subcategory = arg(args, "subcategory")?.parse()?;
    let material: Material = arg(args, "material")?.parse()?;
    let formality: Formality = arg(args, "formality")?.parse()?;

    let resolver = ImageResolver::new(config.catalog());
    match resolver.resolve(category, subcategory, material, formality) {
        Some(asset) => println!("{asset}"),
        None => anyhow::bail!("{subcategory} is not a kind of {category}"),
    }
    Ok(())
}

async fn closet(config: WardrobeConfig, args: &ArgMatches) -> Result<()> {
    let filter: CategoryFilter = arg(args, "filter")?.parse()?;
    let session = open_session(config, file(args)?);
    session.navigate(PageType::Closet).await;
    print_json(&session.closet(filter))
}

async fn add(config: WardrobeConfig, args: &ArgMatches) -> Result<()> {
    let category: Category = arg(args, "category")?.parse()?;
    let subcategory: Subcategory = arg(args, "subcategory")?.parse()?;
    let primary = Color::hex(arg(args, "color")?)?;
    let secondary = args
        .get_one::<String>("secondary")
        .map(|s| Color::hex(s))
        .transpose()?;
    let material: Material = arg(args, "material")?.parse()?;
    let formality: Formality = arg(args, "formality")?.parse()?;
    let description = args
        .get_one::<String>("description")
        .map_or("", String::as_str);

    let session = open_session(config, file(args)?);
    session.with_intake(|flow| {
        flow.select_category(category)?;
        flow.select_subcategory(subcategory)?;
        flow.set_primary_picker(primary)?;
        flow.toggle_primary()?;
        match secondary {
            Some(color) => {
                flow.set_secondary_picker(color)?;
                flow.toggle_secondary()?;
            }
            None => flow.no_secondary()?,
        }
        flow.select_material(material)?;
        flow.select_formality(formality)?;
        flow.set_description(description)
    })?;

    let id = session.submit_intake().await?;
    println!("{id}");
    Ok(())
}

async fn remove(config: WardrobeConfig, args: &ArgMatches) -> Result<()> {
    let id = ItemId::new(*args.get_one::<u64>("id").context("missing item id")?);
    let session = open_session(config, file(args)?);
    session.navigate(PageType::Closet).await;
    if !session.delete_item(id).await {
        tracing::warn!("Item {} was not in the closet", id);
    }
    Ok(())
}

async fn saved(config: WardrobeConfig, args: &ArgMatches) -> Result<()> {
    let session = open_session(config, file(args)?);
    session.navigate(PageType::Saved).await;
    if let Some(item) = args.get_one::<u64>("hover") {
        let outfit = args.get_one::<String>("outfit").map(OutfitId::new);
        session.hover_enter(ItemId::new(*item), outfit);
    }
    print_json(&session.render_saved())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let config = WardrobeConfig::from_env().context("loading configuration")?;
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("resolve", args)) => resolve(&config, args),
        Some(("normalize", args)) => {
            println!("{}", normalize_description(arg(args, "text")?));
            Ok(())
        }
        Some(("closet", args)) => closet(config, args).await,
        Some(("add", args)) => add(config, args).await,
        Some(("remove", args)) => remove(config, args).await,
        Some(("saved", args)) => saved(config, args).await,
        _ => Ok(()),
    }
}
