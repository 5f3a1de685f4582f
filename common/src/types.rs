//! 解析結果の型定義
//!
//! CLI・Desktop・Web(WASM)で共有される型:
//! - FishSummary: 魚の捕獲状況
//! - RecipeSummary: レシピの習得・調理状況
//! - Summary: `/api/analyze` のレスポンス全体

use serde::{Deserialize, Deserializer, Serialize};

/// `/api/analyze` が返す集計結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub fish: FishSummary,
    pub recipes: RecipeSummary,
}

/// 魚の集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishSummary {
    pub total: u32,
    pub caught: u32,
    pub uncaught: u32,
    pub missing_list: Vec<MissingFish>,
}

/// 未捕獲の魚
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFish {
    /// ゲーム内オブジェクトID（数値で届いた場合も文字列に正規化）
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

/// レシピの集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub total: u32,
    pub learned: u32,
    pub cooked: u32,
    pub missing_to_cook: u32,
    pub missing_list: Vec<MissingRecipe>,
}

/// 未調理のレシピ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRecipe {
    pub name: String,
    #[serde(default)]
    pub need_to_learn: bool,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// 材料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
}

impl Ingredient {
    /// `"1x Eel"` 形式
    pub fn label(&self) -> String {
        format!("{}x {}", self.quantity, self.name)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
