use crate::catalog;
use crate::*;
use std::collections::HashSet;

pub fn handle_runtime_commands(
    cli: &Cli,
    config: &AppConfig,
    catalog: &catalog::Catalog,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Score {
            brand,
            material,
            origin,
        } => {
            let risk = score_label(&config.scoring, brand, material, origin);
            let band = RiskBand::for_score(risk);
            let report = RiskReport {
                brand: brand.clone(),
                material: material.clone(),
                origin: origin.clone(),
                risk,
                band: band.as_str().to_string(),
                explanation: band.explanation().to_string(),
            };
            print_one(cli.json, report, |r| {
                format!("{}\t{}%\t{}", r.brand, r.risk, r.band)
            })?;
        }
        Commands::Scan { image } => {
            let bytes = match image {
                Some(p) => Some(std::fs::read(p)?),
                None => None,
            };
            let mut rng = rand::thread_rng();
            let acq = acquire_label(bytes.as_deref(), &config.label, &mut rng);
            let report = scan_report(&config.scoring, acq.result, acq.note);
            audit(
                "scan",
                serde_json::json!({"brand": report.brand, "risk": report.risk, "is_real": report.is_real}),
            );
            print_one(cli.json, report, |r| {
                let mut line = format!(
                    "{}\t{}\t{}\t{}%\t{}",
                    r.brand, r.material, r.origin, r.risk, r.band
                );
                if let Some(note) = &r.note {
                    line.push_str(&format!("\nnote: {note}"));
                }
                line
            })?;
        }
        Commands::Recommend {
            styles,
            materials,
            k,
        } => {
            let style_set: HashSet<String> = styles
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let mut rng = rand::thread_rng();
            let picks = recommend_items(&catalog.items, &style_set, materials, *k, &mut rng);
            let rows: Vec<RecommendationRow> = picks.iter().map(recommendation_row).collect();
            print_out(cli.json, &rows, |r| {
                format!("{}\t{}\t£{:.2}\t{}", r.id, r.title, r.price, r.seller)
            })?;
        }
        Commands::Shop { command } => match command {
            ShopCommands::List { query } => {
                let items = catalog::discover(catalog, query.as_deref());
                let rows: Vec<CatalogItem> = items.into_iter().cloned().collect();
                print_out(cli.json, &rows, |i| {
                    format!("{}\t{}\t£{:.2}\t{}", i.id, i.title, i.price, i.rating)
                })?;
            }
            ShopCommands::Show { item } => {
                let found = catalog::show(catalog, item)?.clone();
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: found
                        })?
                    );
                } else {
                    println!("{} {}", found.icon, found.title);
                    println!("price: £{:.2}", found.price);
                    println!("seller: {}", found.seller);
                    println!("rating: {}", found.rating);
                    println!("category: {} / {}", found.category, found.style);
                    println!("material: {}", found.material);
                    if let Some(d) = &found.description {
                        println!("{d}");
                    }
                }
            }
            ShopCommands::Validate => {
                catalog::validate(catalog)?;
                print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
            }
        },
        Commands::Charities => {
            print_out(cli.json, &catalog.charities, |c| {
                format!("{}\t{}\t{}", c.id, c.name, c.mission)
            })?;
        }
        Commands::Session => unreachable!("handled before runtime dispatch"),
    }

    Ok(())
}

pub fn recommendation_row(r: &RankedItem<'_>) -> RecommendationRow {
    RecommendationRow {
        id: r.item.id.clone(),
        title: r.item.title.clone(),
        price: r.item.price,
        seller: r.item.seller.clone(),
        style: r.item.style.clone(),
        material: r.item.material.clone(),
        score: r.score,
    }
}
