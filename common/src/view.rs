//! 結果表示モデル
//!
//! Summaryからタブ・統計・一覧を組み立てる。各フロントエンド（Leptos・egui・
//! ターミナル）はこのモデルを描画するだけで、表示内容の判断はここに集約する。
//! タブ切替はローカルな状態変更のみで、通信は発生しない。

use crate::types::{FishSummary, RecipeSummary, Summary};

pub const APP_TITLE: &str = "Stardew Valley Perfection Tracker";
pub const APP_TAGLINE: &str = "Upload your save file to track your progress toward perfection!";
pub const LOADING_MESSAGE: &str = "Analyzing your save file...";
pub const COMPLETION_HEADING: &str = "Congratulations!";
pub const NEED_TO_LEARN_BADGE: &str = "Need to Learn";

/// セーブファイルの保存場所（OS, パス）
pub const SAVE_LOCATIONS: &[(&str, &str)] = &[
    (
        "Windows",
        r"%APPDATA%\StardewValley\Saves\[YourFarmName]_[ID]\[YourFarmName]_[ID]",
    ),
    (
        "Mac",
        "~/.config/StardewValley/Saves/[YourFarmName]_[ID]/[YourFarmName]_[ID]",
    ),
    (
        "Linux",
        "~/.config/StardewValley/Saves/[YourFarmName]_[ID]/[YourFarmName]_[ID]",
    ),
];

/// ファイル選択ボタンの文言
pub fn picker_label(uploading: bool) -> &'static str {
    if uploading {
        "Uploading..."
    } else {
        "Choose Save File"
    }
}

/// 表示中のタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Fish,
    Recipes,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Fish, ActiveTab::Recipes];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Fish => "fish",
            ActiveTab::Recipes => "recipes",
        }
    }

    /// `Fish (caught/total)` / `Recipes (cooked/total)`
    pub fn label(&self, summary: &Summary) -> String {
        match self {
            ActiveTab::Fish => format!("Fish ({}/{})", summary.fish.caught, summary.fish.total),
            ActiveTab::Recipes => {
                format!("Recipes ({}/{})", summary.recipes.cooked, summary.recipes.total)
            }
        }
    }
}

/// 統計値1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: String,
    pub name: String,
    pub need_to_learn: bool,
    /// レシピのみ。`"1x Eel, 1x Cave Carrot"`
    pub ingredients: Option<String>,
}

/// パネル本体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Missing { heading: String, items: Vec<ListItem> },
    Complete { message: &'static str },
}

/// タブ1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub tab: ActiveTab,
    pub stats: Vec<Stat>,
    pub body: PanelBody,
}

pub fn fish_panel(fish: &FishSummary) -> Panel {
    let stats = vec![
        Stat { label: "Total Fish:", value: fish.total },
        Stat { label: "Caught:", value: fish.caught },
        Stat { label: "Missing:", value: fish.uncaught },
    ];

    let body = if fish.missing_list.is_empty() {
        PanelBody::Complete { message: "You've caught all the fish!" }
    } else {
        PanelBody::Missing {
            heading: format!("Missing Fish ({})", fish.uncaught),
            items: fish
                .missing_list
                .iter()
                .map(|f| ListItem {
                    key: f.id.clone(),
                    name: f.name.clone(),
                    need_to_learn: false,
                    ingredients: None,
                })
                .collect(),
        }
    };

    Panel { tab: ActiveTab::Fish, stats, body }
}

pub fn recipe_panel(recipes: &RecipeSummary) -> Panel {
    let stats = vec![
        Stat { label: "Total Recipes:", value: recipes.total },
        Stat { label: "Learned:", value: recipes.learned },
        Stat { label: "Cooked:", value: recipes.cooked },
        Stat { label: "Need to Cook:", value: recipes.missing_to_cook },
    ];

    let body = if recipes.missing_list.is_empty() {
        PanelBody::Complete { message: "You've cooked all the recipes!" }
    } else {
        PanelBody::Missing {
            heading: format!("Recipes to Cook ({})", recipes.missing_to_cook),
            items: recipes
                .missing_list
                .iter()
                .map(|r| ListItem {
                    key: r.name.clone(),
                    name: r.name.clone(),
                    need_to_learn: r.need_to_learn,
                    ingredients: Some(
                        r.ingredients.iter().map(|i| i.label()).collect::<Vec<_>>().join(", "),
                    ),
                })
                .collect(),
        }
    };

    Panel { tab: ActiveTab::Recipes, stats, body }
}

/// 受信したSummaryとアクティブタブ
///
/// 新しいSummaryを受け取るたびに作り直すので、タブは常にFishから始まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    summary: Summary,
    active_tab: ActiveTab,
}

impl ResultsView {
    pub fn new(summary: Summary) -> Self {
        Self { summary, active_tab: ActiveTab::default() }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn select(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// (タブ, ラベル, 選択中か)
    pub fn tabs(&self) -> Vec<(ActiveTab, String, bool)> {
        ActiveTab::ALL
            .iter()
            .map(|tab| (*tab, tab.label(&self.summary), *tab == self.active_tab))
            .collect()
    }

    pub fn panel(&self) -> Panel {
        panel_for(&self.summary, self.active_tab)
    }
}

pub fn panel_for(summary: &Summary, tab: ActiveTab) -> Panel {
    match tab {
        ActiveTab::Fish => fish_panel(&summary.fish),
        ActiveTab::Recipes => recipe_panel(&summary.recipes),
    }
}
