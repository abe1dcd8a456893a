use serde::Serialize;

use crate::engine::ViewModel;
use crate::model::{Catalog, Completion};
use crate::ops::stats::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChapterJson<'a> {
    id: &'a str,
    subject: &'a str,
    label: &'a str,
    done: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    chapters: Vec<ChapterJson<'a>>,
}

#[derive(Serialize)]
struct StatsJson<'a> {
    #[serde(flatten)]
    stats: &'a Stats,
    overall_percent: u32,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    query: &'a str,
    ranked: Vec<RankedGroupJson<'a>>,
    selected: Option<&'a str>,
}

#[derive(Serialize)]
struct RankedGroupJson<'a> {
    subject: &'a str,
    matches: usize,
}

// ---------------------------------------------------------------------------
// Printers
// ---------------------------------------------------------------------------

/// Print every chapter grouped by subject, `[x]` marking completed ones.
pub fn print_list(catalog: &Catalog, completion: &Completion, stats: &Stats, json: bool) {
    if json {
        let chapters = catalog
            .items()
            .iter()
            .map(|item| ChapterJson {
                id: &item.id,
                subject: &item.subject,
                label: &item.label,
                done: completion.is_complete(&item.id),
            })
            .collect();
        print_json(&ListJson { chapters });
        return;
    }

    for subject in catalog.subjects() {
        let group = stats.group(subject);
        println!("{} {}", subject, group.counter());
        for item in catalog.group_items(subject) {
            let mark = if completion.is_complete(&item.id) {
                "x"
            } else {
                " "
            };
            println!("  [{}] {}", mark, item.label);
        }
    }
}

/// Print per-subject and overall progress.
pub fn print_stats(stats: &Stats, json: bool) {
    if json {
        print_json(&StatsJson {
            stats,
            overall_percent: stats.overall_percent(),
        });
        return;
    }

    for (subject, group) in &stats.per_group {
        println!("{:<12} {} {}%", subject, group.counter(), group.percent());
    }
    println!(
        "overall: {} / {} ({}%)",
        stats.overall_done,
        stats.overall_total,
        stats.overall_percent()
    );
}

/// Print ranked search results from an emitted ViewModel.
pub fn print_search(vm: &ViewModel, json: bool) {
    if json {
        let ranked = vm
            .search
            .matching_groups()
            .map(|subject| RankedGroupJson {
                subject,
                matches: vm.search.match_count(subject),
            })
            .collect();
        print_json(&SearchJson {
            query: &vm.search.query,
            ranked,
            selected: vm.active_subject.as_deref(),
        });
        return;
    }

    if vm.search.first_match().is_none() {
        println!("no chapters match \"{}\"", vm.search.query);
        return;
    }
    for subject in vm.search.matching_groups() {
        let count = vm.search.match_count(subject);
        let noun = if count == 1 { "match" } else { "matches" };
        println!("{:<12} {} {}", subject, count, noun);
    }
    if let Some(active) = &vm.active_subject {
        println!("selected: {}", active);
    }
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("error: could not serialize output: {}", e),
    }
}
