//! Perfection Tracker Common Library
//!
//! CLI・Desktop・Web(WASM)で共有される型・状態遷移・表示モデル

pub mod types;
pub mod error;
pub mod endpoint;
pub mod upload;
pub mod view;

pub use types::{FishSummary, Ingredient, MissingFish, MissingRecipe, RecipeSummary, Summary};
pub use error::{AnalyzeError, Error, Result, GENERIC_FAILURE};
pub use endpoint::{Endpoint, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use upload::{
    analyze, interpret_response, AnalyzeTransport, RawResponse, UploadController, UploadState,
    UploadTicket,
};
pub use view::{ActiveTab, Panel, PanelBody, ResultsView};
