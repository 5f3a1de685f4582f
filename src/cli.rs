use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "perfection-tracker")]
#[command(about = "Stardew Valleyのセーブファイルから魚・レシピの達成状況を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析サービスのベースURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// セーブファイルを解析して進捗を表示
    Analyze {
        /// セーブファイルのパス（省略時は対話入力）
        save_file: Option<PathBuf>,

        /// 表示するタブ (fish/recipes/all)
        #[arg(short, long, default_value = "all")]
        tab: TabChoice,

        /// 受信したSummaryをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 解析サービスの死活確認
    Health,

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 表示するタブ
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TabChoice {
    Fish,
    Recipes,
    #[default]
    All,
}
