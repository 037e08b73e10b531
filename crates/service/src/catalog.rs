//! Built-in pack catalog.
//!
//! Served in place of stored packs when the store is absent, empty or
//! failing, so the storefront always has something to show. Never persisted.

use models::Pack;

struct Entry {
    platform: &'static str,
    logo: &'static str,
    name: &'static str,
    price: &'static str,
    duration: &'static str,
    results: &'static [&'static str],
    advantages: &'static [&'static str],
    objective: &'static str,
}

const META_LOGO: &str = "https://cdn.simpleicons.org/meta/ffffff";

const ENTRIES: [Entry; 6] = [
    Entry {
        platform: "Facebook & Instagram",
        logo: META_LOGO,
        name: "Pack Starter",
        price: "15,000 DA",
        duration: "7 jours",
        results: &["+5k vues", "+300 clics", "+50 leads"],
        advantages: &["Ciblage basique", "Créa 1 visuel"],
        objective: "Trafic",
    },
    Entry {
        platform: "Facebook & Instagram",
        logo: META_LOGO,
        name: "Pack Boost",
        price: "30,000 DA",
        duration: "14 jours",
        results: &["+15k vues", "+1k clics", "+150 leads"],
        advantages: &["A/B test créa", "Ciblage lookalike"],
        objective: "Conversions",
    },
    Entry {
        platform: "TikTok",
        logo: "https://cdn.simpleicons.org/tiktok/ffffff",
        name: "Pack Viral",
        price: "25,000 DA",
        duration: "10 jours",
        results: &["+50k vues", "+2k interactions"],
        advantages: &["Spark Ads", "UGC conseillé"],
        objective: "Reach",
    },
    Entry {
        platform: "YouTube",
        logo: "https://cdn.simpleicons.org/youtube/ffffff",
        name: "Pack Viewers",
        price: "20,000 DA",
        duration: "7 jours",
        results: &["+10k vues", "+60% VTR"],
        advantages: &["InStream Skippable"],
        objective: "Branding",
    },
    Entry {
        platform: "Google Ads",
        logo: "https://cdn.simpleicons.org/googleads/ffffff",
        name: "Pack Search",
        price: "35,000 DA",
        duration: "14 jours",
        results: &["CPC optimisé", "+200 conversions"],
        advantages: &["Extensions d’annonces", "Remarketing"],
        objective: "Leads",
    },
    Entry {
        platform: "LinkedIn",
        logo: "https://cdn.simpleicons.org/linkedin/ffffff",
        name: "Pack Pro",
        price: "40,000 DA",
        duration: "14 jours",
        results: &["+50 prospects B2B"],
        advantages: &["Ciblage par poste", "Lead Gen Forms"],
        objective: "Prospection",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six default packs, in display order.
pub fn default_packs() -> Vec<Pack> {
    ENTRIES
        .iter()
        .map(|e| Pack {
            platform: e.platform.into(),
            name: e.name.into(),
            price_da: Some(e.price.into()),
            duration: Some(e.duration.into()),
            results: owned(e.results),
            advantages: owned(e.advantages),
            objective: Some(e.objective.into()),
            logo: Some(e.logo.into()),
        })
        .collect()
}
