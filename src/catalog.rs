use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub charities: Vec<Charity>,
}

/// Static marketplace reference data. Fixed at process start, never mutated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub seller: String,
    pub icon: String,
    pub rating: String,
    pub description: Option<String>,
    pub category: String,
    pub style: String,
    pub material: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Charity {
    pub id: String,
    pub name: String,
    pub mission: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("item not found: {0}")]
    ItemNotFound(String),
    #[error("charity not found: {0}")]
    CharityNotFound(String),
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),
    #[error("duplicate charity id: {0}")]
    DuplicateCharity(String),
}

pub fn resolve_catalog_file(source: &Path) -> PathBuf {
    if source.is_dir() {
        source.join("catalog.json")
    } else {
        source.to_path_buf()
    }
}

pub fn load_catalog(source: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(source) = source else {
        return Ok(builtin_catalog());
    };
    let file = resolve_catalog_file(source);
    let raw = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn discover<'a>(c: &'a Catalog, query: Option<&str>) -> Vec<&'a CatalogItem> {
    match query {
        None => c.items.iter().collect(),
        Some(q) => {
            let q = q.to_ascii_lowercase();
            c.items
                .iter()
                .filter(|i| {
                    i.title.to_ascii_lowercase().contains(&q)
                        || i.category.to_ascii_lowercase().contains(&q)
                        || i.style.to_ascii_lowercase().contains(&q)
                        || i.material.to_ascii_lowercase().contains(&q)
                        || i.description
                            .as_ref()
                            .map(|d| d.to_ascii_lowercase().contains(&q))
                            .unwrap_or(false)
                })
                .collect()
        }
    }
}

pub fn show<'a>(c: &'a Catalog, id: &str) -> anyhow::Result<&'a CatalogItem> {
    c.items
        .iter()
        .find(|i| i.id == id)
        .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()).into())
}

pub fn find_charity<'a>(c: &'a Catalog, id: &str) -> anyhow::Result<&'a Charity> {
    c.charities
        .iter()
        .find(|ch| ch.id == id)
        .ok_or_else(|| CatalogError::CharityNotFound(id.to_string()).into())
}

pub fn validate(c: &Catalog) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for i in &c.items {
        if !seen.insert(&i.id) {
            return Err(CatalogError::DuplicateItem(i.id.clone()).into());
        }
    }
    let mut seen = HashSet::new();
    for ch in &c.charities {
        if !seen.insert(&ch.id) {
            return Err(CatalogError::DuplicateCharity(ch.id.clone()).into());
        }
    }
    Ok(())
}

fn item(
    id: &str,
    title: &str,
    price: f64,
    seller: &str,
    icon: &str,
    rating: &str,
    category: &str,
    style: &str,
    material: &str,
    description: Option<&str>,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        price,
        seller: seller.to_string(),
        icon: icon.to_string(),
        rating: rating.to_string(),
        description: description.map(str::to_string),
        category: category.to_string(),
        style: style.to_string(),
        material: material.to_string(),
    }
}

fn charity(id: &str, name: &str, mission: &str) -> Charity {
    Charity {
        id: id.to_string(),
        name: name.to_string(),
        mission: mission.to_string(),
    }
}

pub fn builtin_catalog() -> Catalog {
    Catalog {
        name: "unstitched-shop".to_string(),
        items: vec![
            item(
                "vintage-denim-jacket",
                "Vintage Denim Jacket",
                25.00,
                "SarahSews",
                "🧥",
                "A",
                "Outerwear",
                "Vintage",
                "Cotton Denim",
                Some("Pre-loved 90s jacket, rewaxed seams."),
            ),
            item(
                "upcycled-tee",
                "Upcycled Tee",
                12.50,
                "GreenGuy",
                "👕",
                "A+",
                "Tops",
                "Casual",
                "Organic Cotton",
                None,
            ),
            item(
                "chunky-knit-sweater",
                "Chunky Knit Sweater",
                18.00,
                "RetroFit",
                "🧶",
                "B",
                "Knitwear",
                "Boho",
                "Recycled Wool",
                None,
            ),
            item(
                "hemp-cargo-pants",
                "Hemp Cargo Pants",
                30.00,
                "EcoWarrior",
                "👖",
                "A",
                "Bottoms",
                "Streetwear",
                "Hemp",
                Some("Hard-wearing, grown without pesticides."),
            ),
            item(
                "deadstock-windbreaker",
                "Deadstock Windbreaker",
                22.00,
                "ThriftTech",
                "🧥",
                "B",
                "Outerwear",
                "Streetwear",
                "Recycled Nylon",
                None,
            ),
            item(
                "linen-summer-dress",
                "Linen Summer Dress",
                28.00,
                "MaisonRe",
                "👗",
                "A",
                "Dresses",
                "Minimalist",
                "Linen",
                None,
            ),
            item(
                "patchwork-tote",
                "Patchwork Tote",
                15.00,
                "SarahSews",
                "👜",
                "A+",
                "Accessories",
                "Boho",
                "Upcycled Cotton Canvas",
                Some("Sewn from offcuts of previous runs."),
            ),
            item(
                "corduroy-overshirt",
                "Corduroy Overshirt",
                20.00,
                "RetroFit",
                "👔",
                "B",
                "Outerwear",
                "Vintage",
                "Organic Cotton Corduroy",
                None,
            ),
        ],
        charities: vec![
            charity(
                "unseen",
                "Unseen",
                "Working towards a world without slavery.",
            ),
            charity(
                "hfj",
                "Hope for Justice",
                "Ending human trafficking and modern slavery.",
            ),
            charity(
                "wv",
                "World Vision",
                "Helping the most vulnerable children overcome poverty.",
            ),
            charity(
                "stc",
                "Save the Children",
                "Keeping children safe, healthy and learning.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let c = builtin_catalog();
        validate(&c).expect("builtin catalog validates");
        assert!(c.items.len() >= 4);
        assert!(c.charities.len() >= 4);
    }

    #[test]
    fn discover_matches_title_and_material() {
        let c = builtin_catalog();
        let by_title = discover(&c, Some("denim"));
        assert!(by_title.iter().any(|i| i.id == "vintage-denim-jacket"));
        let by_material = discover(&c, Some("hemp"));
        assert!(by_material.iter().any(|i| i.id == "hemp-cargo-pants"));
        assert!(discover(&c, None).len() == c.items.len());
    }

    #[test]
    fn show_unknown_item_is_item_not_found() {
        let c = builtin_catalog();
        let err = show(&c, "no-such-item").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ItemNotFound(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut c = builtin_catalog();
        let dup = c.items[0].clone();
        c.items.push(dup);
        let err = validate(&c).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::DuplicateItem(_))
        ));
    }
}
