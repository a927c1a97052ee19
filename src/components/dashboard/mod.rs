//! Dashboard Module
//!
//! Project browsing: free-text search, category filtering, and sorting over
//! the mock project list.

mod project_card;


pub use project_card::{NewProjectCard, ProjectCard};

use chrono::{NaiveDate, NaiveDateTime};
use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, ARROWS_DOWN_UP, MAGNIFYING_GLASS, UPLOAD_SIMPLE};

use crate::components::design_system::{BadgeVariant, Button, ButtonSize, ButtonVariant, Input};

// ============================================================================
// Types
// ============================================================================

/// Category tag attached to each project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    All,
    Finance,
    Legal,
    Hr,
    Marketing,
    Product,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::All => "all",
            ProjectCategory::Finance => "finance",
            ProjectCategory::Legal => "legal",
            ProjectCategory::Hr => "hr",
            ProjectCategory::Marketing => "marketing",
            ProjectCategory::Product => "product",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All Projects",
            ProjectCategory::Finance => "Finance",
            ProjectCategory::Legal => "Legal",
            ProjectCategory::Hr => "HR",
            ProjectCategory::Marketing => "Marketing",
            ProjectCategory::Product => "Product",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            ProjectCategory::All => BadgeVariant::Default,
            ProjectCategory::Finance => BadgeVariant::Success,
            ProjectCategory::Legal => BadgeVariant::Info,
            ProjectCategory::Hr => BadgeVariant::Warning,
            ProjectCategory::Marketing => BadgeVariant::Danger,
            ProjectCategory::Product => BadgeVariant::Default,
        }
    }

    /// Filter options in display order
    pub fn all_filters() -> &'static [ProjectCategory] {
        &[
            ProjectCategory::All,
            ProjectCategory::Finance,
            ProjectCategory::Legal,
            ProjectCategory::Hr,
            ProjectCategory::Marketing,
            ProjectCategory::Product,
        ]
    }
}

/// Sort order for the project grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Last-updated descending
    #[default]
    Recent,
    /// Title ascending
    Name,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most Recent",
            SortOrder::Name => "Name",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Recent => SortOrder::Name,
            SortOrder::Name => SortOrder::Recent,
        }
    }
}

/// A named collection of documents shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub document_count: u32,
    pub last_updated: NaiveDateTime,
    pub category: ProjectCategory,
}

// ============================================================================
// Mock Data & Filtering
// ============================================================================

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .unwrap_or_default()
}

/// Static project list backing the dashboard
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Annual Financial Report".to_string(),
            document_count: 5,
            last_updated: timestamp(2023, 4, 12, 10, 30),
            category: ProjectCategory::Finance,
        },
        Project {
            id: 2,
            title: "Legal Contract Review".to_string(),
            document_count: 3,
            last_updated: timestamp(2023, 4, 10, 14, 20),
            category: ProjectCategory::Legal,
        },
        Project {
            id: 3,
            title: "HR Employee Handbook".to_string(),
            document_count: 1,
            last_updated: timestamp(2023, 4, 5, 9, 15),
            category: ProjectCategory::Hr,
        },
        Project {
            id: 4,
            title: "Marketing Strategy 2023".to_string(),
            document_count: 7,
            last_updated: timestamp(2023, 4, 1, 11, 45),
            category: ProjectCategory::Marketing,
        },
        Project {
            id: 5,
            title: "Product Development Plan".to_string(),
            document_count: 4,
            last_updated: timestamp(2023, 3, 28, 16, 30),
            category: ProjectCategory::Product,
        },
    ]
}

/// Look up a mock project by id (project detail page)
pub fn find_project(id: u32) -> Option<Project> {
    sample_projects().into_iter().find(|p| p.id == id)
}

/// Filter by category + case-insensitive title substring, then sort.
/// Pure function of its inputs.
pub fn filter_and_sort_projects(
    projects: &[Project],
    search: &str,
    filter: ProjectCategory,
    order: SortOrder,
) -> Vec<Project> {
    let needle = search.to_lowercase();
    let mut filtered: Vec<Project> = projects
        .iter()
        .filter(|p| {
            (filter == ProjectCategory::All || p.category == filter)
                && p.title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match order {
        SortOrder::Recent => filtered.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
        SortOrder::Name => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    filtered
}

// ============================================================================
// Dashboard Page
// ============================================================================

#[component]
pub fn Dashboard() -> impl IntoView {
    let search_term = RwSignal::new(String::new());
    let active_filter = RwSignal::new(ProjectCategory::All);
    let sort_order = RwSignal::new(SortOrder::default());

    let projects = sample_projects();
    let visible = Signal::derive(move || {
        filter_and_sort_projects(
            &projects,
            &search_term.get(),
            active_filter.get(),
            sort_order.get(),
        )
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 py-10">
            // Page header
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-2xl font-bold text-gray-100">"Your Projects"</h1>
                    <p class="text-gray-400 mt-1">"Manage and analyze your document projects"</p>
                </div>
                <A href="/upload">
                    <Button on_click=|_| {}>
                        <Icon icon=UPLOAD_SIMPLE size="16px" />
                        "Upload Documents"
                    </Button>
                </A>
            </div>

            // Controls: search, category pills, sort toggle
            <div class="flex flex-col lg:flex-row gap-4 mb-6">
                <div class="relative flex-1 max-w-md">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none">
                        <Icon icon=MAGNIFYING_GLASS size="16px" />
                    </span>
                    <Input
                        value=search_term
                        placeholder="Search projects..."
                        class="pl-9"
                    />
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    {ProjectCategory::all_filters().iter().map(|cat| {
                        let cat = *cat;
                        view! {
                            <button
                                class=move || {
                                    if active_filter.get() == cat {
                                        "px-3 py-1.5 rounded-full text-sm font-medium bg-blue-600 text-white"
                                    } else {
                                        "px-3 py-1.5 rounded-full text-sm font-medium bg-gray-800 text-gray-400 hover:text-gray-200 hover:bg-gray-700"
                                    }
                                }
                                on:click=move |_| active_filter.set(cat)
                            >
                                {cat.label()}
                            </button>
                        }
                    }).collect_view()}
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on_click=move |_| sort_order.update(|o| *o = o.toggled())
                        title="Change sort order"
                    >
                        <Icon icon=ARROWS_DOWN_UP size="14px" />
                        {move || format!("Sort: {}", sort_order.get().label())}
                    </Button>
                </div>
            </div>

            // Empty-state notice; the grid below keeps the New Project tile
            // visible regardless of filtering
            <Show when=move || visible.get().is_empty()>
                <div class="py-8 text-center text-gray-500">
                    "No projects found. Try changing your filters."
                </div>
            </Show>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                <For
                    each=move || visible.get()
                    key=|project| project.id
                    children=move |project| {
                        view! { <ProjectCard project=project /> }
                    }
                />
                <NewProjectCard />
            </div>
        </div>
    }
}
