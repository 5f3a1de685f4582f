//! 結果のターミナル表示

use perfection_common::view::{
    Panel, PanelBody, COMPLETION_HEADING, NEED_TO_LEARN_BADGE, SAVE_LOCATIONS,
};
use perfection_common::{ActiveTab, ResultsView};
use std::fmt::Write;

use crate::cli::TabChoice;

/// 選択したタブを順に描画
pub fn render_results(view: &mut ResultsView, choice: TabChoice) -> String {
    let tabs: &[ActiveTab] = match choice {
        TabChoice::Fish => &[ActiveTab::Fish],
        TabChoice::Recipes => &[ActiveTab::Recipes],
        TabChoice::All => &ActiveTab::ALL,
    };

    let mut out = String::from("Your Progress\n");
    for tab in tabs {
        view.select(*tab);
        out.push('\n');
        out.push_str(&render_tab_bar(view));
        out.push_str(&render_panel(&view.panel()));
    }
    out
}

/// `[Fish (100/100)]  Recipes (70/80)`
pub fn render_tab_bar(view: &ResultsView) -> String {
    let labels: Vec<String> = view
        .tabs()
        .into_iter()
        .map(|(_, label, active)| if active { format!("[{label}]") } else { label })
        .collect();
    format!("{}\n", labels.join("  "))
}

pub fn render_panel(panel: &Panel) -> String {
    let mut out = String::new();
    for stat in &panel.stats {
        let _ = writeln!(out, "  {:<15} {}", stat.label, stat.value);
    }
    out.push('\n');

    match &panel.body {
        PanelBody::Missing { heading, items } => {
            let _ = writeln!(out, "{heading}");
            for item in items {
                let badge = if item.need_to_learn {
                    format!(" [{NEED_TO_LEARN_BADGE}]")
                } else {
                    String::new()
                };
                let _ = writeln!(out, "  - {}{}", item.name, badge);
                if let Some(ingredients) = &item.ingredients {
                    let _ = writeln!(out, "      Ingredients: {ingredients}");
                }
            }
        }
        PanelBody::Complete { message } => {
            let _ = writeln!(out, "{COMPLETION_HEADING}");
            let _ = writeln!(out, "{message}");
        }
    }
    out
}

pub fn render_save_locations() -> String {
    let mut out = String::from("Save file location: Your Stardew Valley saves are typically in:\n");
    for (os, path) in SAVE_LOCATIONS {
        let _ = writeln!(out, "  {os}: {path}");
    }
    out
}
