//! Content-based display ranking of catalog items against a user's stated
//! styles and the materials seen in their scan history.

use crate::catalog::CatalogItem;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const STYLE_MATCH_POINTS: i32 = 3;
const MATERIAL_MATCH_POINTS: i32 = 2;

pub struct RankedItem<'a> {
    pub item: &'a CatalogItem,
    pub score: i32,
}

/// Score every catalog item and sort descending. The sort is stable, so
/// ties keep the original catalog order.
pub fn rank_items<'a>(
    items: &'a [CatalogItem],
    user_styles: &HashSet<String>,
    scan_materials: &[String],
) -> Vec<RankedItem<'a>> {
    let tokens: Vec<String> = scan_materials
        .iter()
        .filter_map(|m| m.split_whitespace().last())
        .map(|t| t.to_ascii_lowercase())
        .collect();

    let mut ranked: Vec<RankedItem<'a>> = items
        .iter()
        .map(|item| {
            let mut score = 0;
            if user_styles.contains(&item.style) {
                score += STYLE_MATCH_POINTS;
            }
            let material = item.material.to_ascii_lowercase();
            let material_hits = tokens.iter().filter(|t| material.contains(t.as_str())).count();
            score += material_hits as i32 * MATERIAL_MATCH_POINTS;
            RankedItem { item, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Top-k display ranking. Items with no signal are dropped; if nothing
/// matched at all, falls back to a uniformly random sample of k distinct
/// items so the shelf is never empty.
pub fn recommend_items<'a>(
    items: &'a [CatalogItem],
    user_styles: &HashSet<String>,
    scan_materials: &[String],
    k: usize,
    rng: &mut impl Rng,
) -> Vec<RankedItem<'a>> {
    let mut picked: Vec<RankedItem<'a>> = rank_items(items, user_styles, scan_materials)
        .into_iter()
        .filter(|r| r.score > 0)
        .collect();

    if picked.is_empty() {
        return items
            .choose_multiple(rng, k.min(items.len()))
            .map(|item| RankedItem { item, score: 0 })
            .collect();
    }

    picked.truncate(k);
    picked
}
