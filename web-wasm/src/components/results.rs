//! 解析結果コンポーネント（魚・レシピのタブ表示）

use leptos::prelude::*;
use perfection_common::view::{ListItem, Panel, PanelBody, COMPLETION_HEADING, NEED_TO_LEARN_BADGE};
use perfection_common::{ActiveTab, ResultsView, Summary};

/// Summaryを受け取るたびに作り直されるので、タブは常にFishから始まる
#[component]
pub fn Results(summary: Summary) -> impl IntoView {
    let (results, set_results) = signal(ResultsView::new(summary));

    let tabs = move || {
        results
            .with(|r| r.tabs())
            .into_iter()
            .map(|(tab, label, active)| {
                view! {
                    <button
                        class="tab"
                        class:active=active
                        on:click=move |_| set_results.update(|r| r.select(tab))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="results">
            <h2>"Your Progress"</h2>
            <div class="tabs">{tabs}</div>
            <div class="tab-content">
                {move || panel_view(results.with(|r| r.panel()))}
            </div>
        </div>
    }
}

fn panel_view(panel: Panel) -> AnyView {
    let section_class = format!("{}-section", panel.tab.as_str());
    let list_class = match panel.tab {
        ActiveTab::Fish => "item-list",
        ActiveTab::Recipes => "item-list recipes",
    };

    let stats = panel
        .stats
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <span class="stat-label">{stat.label}</span>
                    <span class="stat-value">{stat.value}</span>
                </div>
            }
        })
        .collect_view();

    let body = match panel.body {
        PanelBody::Missing { heading, items } => view! {
            <h3>{heading}</h3>
            <ul class=list_class>
                {items.into_iter().map(item_view).collect_view()}
            </ul>
        }
        .into_any(),
        PanelBody::Complete { message } => view! {
            <div class="completion-message">
                <h3>{COMPLETION_HEADING}</h3>
                <p>{message}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=section_class>
            <div class="stats">{stats}</div>
            {body}
        </div>
    }
    .into_any()
}

fn item_view(item: ListItem) -> AnyView {
    match item.ingredients {
        None => view! { <li class="item">{item.name}</li> }.into_any(),
        Some(ingredients) => view! {
            <li class="item recipe-item">
                <div class="recipe-header">
                    <span class="recipe-name">{item.name}</span>
                    {item
                        .need_to_learn
                        .then(|| view! { <span class="need-to-learn-badge">{NEED_TO_LEARN_BADGE}</span> })}
                </div>
                <div class="ingredients">
                    <span class="ingredients-label">"Ingredients:"</span>
                    <span class="ingredients-list">{ingredients}</span>
                </div>
            </li>
        }
        .into_any(),
    }
}
