use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::content::{Project, PROJECTS};

const CAT_IMAGES: [&str; 4] = ["cat1.jpg", "cat2.jpg", "cat3.jpg", "cat4.jpg"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExplorerTab {
    Projects,
    Images,
}

/// Rank projects against a fuzzy query over company, name, and tags.
/// Company matches weigh heaviest; the best-scoring field wins per
/// project. An empty query returns the catalog in order.
pub fn search_projects(query: &str) -> Vec<&'static Project> {
    let query = query.trim();
    if query.is_empty() {
        return PROJECTS.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &Project)> = PROJECTS
        .iter()
        .filter_map(|project| {
            let company = matcher
                .fuzzy_match(project.company(), query)
                .map(|s| s * 4);
            let name = matcher.fuzzy_match(project.name, query).map(|s| s * 3);
            let tags = project
                .tags
                .iter()
                .filter_map(|tag| matcher.fuzzy_match(tag, query))
                .max()
                .map(|s| s * 3);

            [company, name, tags]
                .into_iter()
                .flatten()
                .max()
                .map(|score| (score, project))
        })
        .collect();

    // Stable sort keeps catalog order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, project)| project).collect()
}

#[component]
pub fn ExplorerView(on_open_project: Callback<u32>) -> Element {
    let mut query = use_signal(String::new);
    let mut tab = use_signal(|| ExplorerTab::Projects);

    let current_tab = *tab.read();
    let query_value = query.read().clone();
    let filtered = search_projects(&query_value);
    let filtered_len = filtered.len();

    let path = match current_tab {
        ExplorerTab::Projects => "~/desktop/My Projects",
        ExplorerTab::Images => "~/desktop/Images",
    };
    let status = match current_tab {
        ExplorerTab::Images => format!("{} items", CAT_IMAGES.len()),
        ExplorerTab::Projects if query_value.trim().is_empty() => {
            format!("{filtered_len} items")
        }
        ExplorerTab::Projects => {
            format!("{filtered_len} items (filtered from {})", PROJECTS.len())
        }
    };

    rsx! {
        div {
            style: "height: 100%; display: flex; flex-direction: column; color: #e5e7eb;",

            // Header: path crumb + search box
            div {
                style: "background: var(--panel-bg); border-bottom: 1px solid var(--panel-border); \
                        padding: 0.5rem; display: flex; align-items: center; gap: 0.75rem;",

                div {
                    style: "flex: 1; background: rgba(0,0,0,0.2); border-radius: 6px; \
                            padding: 0.25rem 0.75rem; font-size: 0.875rem; color: #9ca3af; \
                            border: 1px solid rgba(255,255,255,0.05); display: flex; \
                            align-items: center; gap: 0.5rem;",
                    span { "📁" }
                    span { "{path}" }
                }

                if current_tab == ExplorerTab::Projects {
                    div {
                        style: "width: 12rem; background: rgba(0,0,0,0.2); border-radius: 6px; \
                                padding: 0.25rem 0.75rem; border: 1px solid rgba(255,255,255,0.05); \
                                display: flex; align-items: center; gap: 0.5rem;",
                        span { style: "color: var(--text-muted);", "🔍" }
                        input {
                            style: "flex: 1; min-width: 0; background: transparent; border: none; \
                                    outline: none; color: #d1d5db; font-size: 0.875rem;",
                            r#type: "text",
                            placeholder: "Search projects...",
                            value: "{query_value}",
                            oninput: move |e| query.set(e.value()),
                        }
                    }
                }
            }

            div {
                style: "flex: 1; display: flex; overflow: hidden;",

                // Sidebar
                div {
                    style: "width: 10rem; background: rgba(0,0,0,0.1); \
                            border-right: 1px solid rgba(255,255,255,0.05); padding: 0.5rem; \
                            display: flex; flex-direction: column; gap: 0.25rem;",

                    SidebarEntry {
                        label: "Projects",
                        icon: "📁",
                        selected: current_tab == ExplorerTab::Projects,
                        on_select: move |_| tab.set(ExplorerTab::Projects),
                    }
                    SidebarEntry {
                        label: "Images",
                        icon: "🖼️",
                        selected: current_tab == ExplorerTab::Images,
                        on_select: move |_| tab.set(ExplorerTab::Images),
                    }
                }

                // Main grid
                div {
                    style: "flex: 1; padding: 1rem; overflow-y: auto;",

                    if current_tab == ExplorerTab::Images {
                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr)); gap: 1rem;",
                            for image in CAT_IMAGES {
                                div {
                                    style: "aspect-ratio: 1; background: var(--panel-bg); \
                                            border: 1px solid var(--panel-border); border-radius: 12px; \
                                            display: flex; flex-direction: column; align-items: center; \
                                            justify-content: center; gap: 0.5rem;",
                                    span { style: "font-size: 3rem;", "🐱" }
                                    span { style: "font-size: 0.75rem; color: var(--text-muted);", "{image}" }
                                }
                            }
                        }
                    } else if filtered_len == 0 {
                        div {
                            style: "display: flex; align-items: center; justify-content: center; \
                                    height: 100%; color: var(--text-muted);",
                            "No projects found matching \"{query_value}\""
                        }
                    } else {
                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem;",
                            for project in filtered {
                                ProjectCard {
                                    key: "{project.id}",
                                    project_id: project.id,
                                    on_open_project,
                                }
                            }
                        }
                    }
                }
            }

            // Status bar
            div {
                style: "background: var(--panel-bg); border-top: 1px solid var(--panel-border); \
                        padding: 0.25rem 0.75rem; font-size: 0.75rem; color: var(--text-muted);",
                "{status}"
            }
        }
    }
}

#[component]
fn SidebarEntry(
    label: &'static str,
    icon: &'static str,
    selected: bool,
    on_select: Callback<()>,
) -> Element {
    let style = if selected {
        "display: flex; align-items: center; gap: 0.5rem; padding: 0.375rem 0.5rem; \
         font-size: 0.75rem; border-radius: 6px; cursor: pointer; color: #93c5fd; \
         background: rgba(59, 130, 246, 0.1); border: 1px solid rgba(59, 130, 246, 0.2); \
         font-weight: 500;"
    } else {
        "display: flex; align-items: center; gap: 0.5rem; padding: 0.375rem 0.5rem; \
         font-size: 0.75rem; border-radius: 6px; cursor: pointer; color: #9ca3af; \
         background: transparent; border: 1px solid transparent;"
    };

    rsx! {
        div {
            style: "{style}",
            onclick: move |_| on_select.call(()),
            span { "{icon}" }
            span { "{label}" }
        }
    }
}

#[component]
fn ProjectCard(project_id: u32, on_open_project: Callback<u32>) -> Element {
    let Some(project) = crate::content::project(project_id) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "project-card",
            style: "background: var(--panel-bg); border: 1px solid var(--panel-border); \
                    border-radius: 12px; padding: 1rem; cursor: pointer;",
            onclick: move |_| on_open_project.call(project_id),

            div {
                style: "width: 2.5rem; height: 2.5rem; border-radius: 8px; display: flex; \
                        align-items: center; justify-content: center; margin-bottom: 0.75rem; \
                        background: {project.color};",
                span { "📁" }
            }
            h3 {
                style: "margin: 0 0 0.25rem 0; font-size: 1rem; color: #f3f4f6;",
                "{project.name}"
            }
            p {
                style: "margin: 0 0 0.5rem 0; color: var(--text-muted); font-style: italic; \
                        font-size: 0.8rem;",
                "{project.role}"
            }
            p {
                style: "margin: 0 0 1rem 0; font-size: 0.875rem; color: #9ca3af;",
                "{project.desc}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 0.5rem;",
                for tag in project.tags {
                    span {
                        style: "font-size: 0.65rem; padding: 0.25rem 0.5rem; \
                                background: var(--panel-bg); border: 1px solid var(--panel-border); \
                                color: #d1d5db; border-radius: 999px;",
                        "{tag}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_the_whole_catalog_in_order() {
        let results = search_projects("");
        assert_eq!(results.len(), PROJECTS.len());
        assert_eq!(results[0].id, 1);
        assert_eq!(search_projects("   ").len(), PROJECTS.len());
    }

    #[test]
    fn company_match_ranks_first() {
        let results = search_projects("koge");
        assert!(!results.is_empty());
        assert_eq!(results[0].company(), "KogeFarm");
    }

    #[test]
    fn tags_are_searchable() {
        let results = search_projects("solidity");
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert!(ids.contains(&2));
        assert!(ids.contains(&3));
    }

    #[test]
    fn nonsense_queries_match_nothing() {
        assert!(search_projects("qqxxyyzz").is_empty());
    }
}
