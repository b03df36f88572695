//! Builds the listings shown for each view

use crate::config::Config;
use crate::router::Action;
use crate::view::{ContextItem, Directory, InfoTag, ListItem};
use brainrot_core::{
    format_money, Acquisition, Base, CatalogueCreature, CreatureInstance, Mutation, Trait,
};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use std::path::Path;

pub const CATEGORY: &str = "Brainrot Manager";

/// The three entry points of the root menu
pub fn root_menu(config: &Config) -> Directory {
    let mut dir = Directory::new(CATEGORY, "videos");
    let entries = [
        ("🧱 My Bases", Action::Bases),
        ("🧬 All Traits", Action::Traits),
        ("🧠 All Brainrots", Action::Catalogue),
    ];
    for (label, action) in entries {
        dir.push(ListItem::folder(label, action.url(&config.plugin_url)));
    }
    dir
}

/// One folder per base
pub fn bases(config: &Config, bases: &[Base]) -> Directory {
    let mut dir = Directory::new(CATEGORY, "movies");
    let fanart = config.base_fanart();

    for base in bases {
        let count = base.brainrots.len();
        let mut item = ListItem::folder(
            format!("{} ({} brainrots)", base.name, count),
            Action::BaseBrainrots {
                base: base.name.clone(),
            }
            .url(&config.plugin_url),
        );
        item.info = InfoTag {
            title: base.name.clone(),
            plot: format!(
                "{} brainrots stored in this base. Total income: {}/s",
                count,
                format_money(base.total_income())
            ),
            ..InfoTag::default()
        };
        item.art = art(config, &fanart);
        item.context_menu = vec![
            ContextItem::new("Add a base", Action::AddBase.url(&config.plugin_url)),
            ContextItem::new(
                "Rename this base",
                Action::RenameBase {
                    name: base.name.clone(),
                }
                .url(&config.plugin_url),
            ),
            ContextItem::new(
                "Delete this base",
                Action::DeleteBase {
                    name: base.name.clone(),
                }
                .url(&config.plugin_url),
            ),
        ];
        dir.push(item);
    }
    dir
}

/// Every trait with its multiplier
pub fn traits(config: &Config, traits: &[Trait]) -> Directory {
    let mut dir = Directory::new(CATEGORY, "movies");

    for t in traits {
        let multiplier = t.multiplier.unwrap_or(1.0);
        let mut item = ListItem::new(&t.name);
        item.label2 = format!("{}X", multiplier);
        item.info = InfoTag {
            title: t.name.clone(),
            genres: vec!["Trait".to_string(), format!("Multiplier: {}X", multiplier)],
            plot: t.description.clone(),
            year: Some(config.default_year),
            rating: Some(trait_rating(multiplier)),
            ..InfoTag::default()
        };
        item.art = art(config, &config.trait_image(&t.image));
        dir.push(item);
    }
    dir
}

/// The whole catalogue, read-only
pub fn catalogue(config: &Config, creatures: &[CatalogueCreature]) -> Directory {
    let mut dir = Directory::new(CATEGORY, "movies");

    for creature in creatures {
        let profile = &creature.profile;
        let cost = format_money(profile.cost);
        let income = format_money(profile.base_income_per_second);

        let mut item = ListItem::new(&profile.name);
        item.label2 = format!("{} - {} - {}/s", profile.rarity, cost, income);

        let mut plot = vec![profile.description.as_str()];
        plot.extend(acquisition_parts(&profile.acquisition));
        plot.push(profile.controversy.as_str());

        item.info = InfoTag {
            title: profile.name.clone(),
            genres: vec![
                profile.rarity.clone(),
                format!("Price: {}", cost),
                format!("Income: {}/s", income),
            ],
            plot: join_non_empty(&plot, " "),
            year: Some(release_year(&profile.added_at, config.default_year)),
            date_added: Some(date_added(&profile.added_at, config.default_year)),
            ..InfoTag::default()
        };
        item.art = art(config, &config.brainrot_image(&profile.image));
        dir.push(item);
    }
    dir
}

/// Instances stored in one base, in the order given
pub fn base_brainrots(config: &Config, base_name: &str, instances: &[CreatureInstance]) -> Directory {
    let mut dir = Directory::new(format!("Brainrots in {}", base_name), "movies");

    for instance in instances {
        let profile = &instance.profile;
        let cost = format_money(profile.cost);
        let income = format_money(instance.effective_income());
        let label = format!("{} - {} - {}/s", profile.name, profile.rarity, income);

        let mut genres = Vec::new();
        if let Some(mutation) = instance.mutation.as_ref().filter(|m| !m.name.is_empty()) {
            genres.push(mutation.name.clone());
        }
        genres.extend(
            instance
                .traits
                .iter()
                .filter(|t| !t.name.is_empty())
                .map(|t| t.name.clone()),
        );

        let mut lines = vec![profile.description.as_str()];
        lines.extend(acquisition_parts(&profile.acquisition));
        lines.push(profile.controversy.as_str());
        let mut plot = join_non_empty(&lines, "\n");

        let mut extra_art = Vec::new();
        if !instance.traits.is_empty() {
            plot.push_str("\n\nTraits:\n");
            for t in &instance.traits {
                plot.push_str(&format!(
                    "• {} (x{}) - {}\n",
                    t.name,
                    multiplier_text(t.multiplier),
                    t.description
                ));
                let image = config.trait_image(&t.image);
                if !t.image.is_empty() && image.is_file() {
                    extra_art.push(image.display().to_string());
                }
            }
        }

        let mut item = ListItem::new(&label);
        item.label2 = format!("{} - {} - {}/s", profile.rarity, cost, income);
        item.info = InfoTag {
            title: label,
            genres,
            plot,
            year: Some(release_year(&profile.added_at, config.default_year)),
            date_added: Some(date_added(&profile.added_at, config.default_year)),
            ..InfoTag::default()
        };
        item.art = art(config, &config.brainrot_image(&profile.image));
        item.extra_art = extra_art;

        let base = base_name.to_string();
        let id = instance.id.to_string();
        item.context_menu = vec![
            ContextItem::new(
                "Add a brainrot",
                Action::AddBrainrot {
                    base: base.clone(),
                    brainrot: None,
                    mutation: None,
                    traits: Vec::new(),
                }
                .url(&config.plugin_url),
            ),
            ContextItem::new(
                "Delete this brainrot",
                Action::DeleteBrainrot {
                    base: base.clone(),
                    id: id.clone(),
                }
                .url(&config.plugin_url),
            ),
            ContextItem::new(
                "Move this brainrot",
                Action::MoveBrainrot { base, id }.url(&config.plugin_url),
            ),
        ];
        dir.push(item);
    }
    dir
}

/// Label of a creature in the selection prompt
pub fn creature_choice(creature: &CatalogueCreature) -> String {
    format!("{}  [{}]", creature.profile.name, creature.profile.rarity)
}

/// Label of a mutation in the selection prompt
pub fn mutation_choice(mutation: &Mutation) -> String {
    format!("{} (x{})", mutation.name, multiplier_text(mutation.multiplier))
}

/// Label of a trait in the selection prompt
pub fn trait_choice(t: &Trait) -> String {
    format!("{} (x{})", t.name, multiplier_text(t.multiplier))
}

fn multiplier_text(multiplier: Option<f64>) -> String {
    multiplier.map_or_else(|| "?".to_string(), |m| m.to_string())
}

/// Score out of 10, saturating at a x10 multiplier
fn trait_rating(multiplier: f64) -> f64 {
    (multiplier / 10.0).min(1.0) * 10.0
}

fn acquisition_parts(acquisition: &Acquisition) -> impl Iterator<Item = &str> {
    [&acquisition.purchase, &acquisition.steal, &acquisition.strategy]
        .into_iter()
        .filter_map(|part| part.as_deref())
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Year an entry was added, from an `AddedAt` such as `2025-06-01`
fn release_year(added_at: &str, default_year: i32) -> i32 {
    if let Ok(date) = NaiveDate::parse_from_str(added_at, "%Y-%m-%d") {
        return date.year();
    }
    match added_at.get(..4) {
        Some(prefix) if prefix.bytes().all(|b| b.is_ascii_digit()) => added_at
            .split('-')
            .next()
            .and_then(|year| year.parse().ok())
            .unwrap_or(default_year),
        _ => default_year,
    }
}

fn date_added(added_at: &str, default_year: i32) -> String {
    if let Some(midnight) = NaiveDate::parse_from_str(added_at, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return midnight.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if added_at.is_empty() {
        format!("{}-01-01 00:00:00", default_year)
    } else {
        format!("{} 00:00:00", added_at)
    }
}

/// Artwork for an image, or the fallback icon when it is missing
fn art(config: &Config, image: &Path) -> IndexMap<String, String> {
    let mut art = IndexMap::new();
    if image.is_file() {
        let path = image.display().to_string();
        for role in ["icon", "thumb", "poster", "fanart"] {
            art.insert(role.to_string(), path.clone());
        }
    } else {
        art.insert("icon".to_string(), config.images.fallback_icon.clone());
    }
    art
}
