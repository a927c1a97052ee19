use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, CLOCK, FILES, PLUS};

use super::Project;
use crate::components::design_system::{Badge, Card, CardBody};
use crate::utils::formatting::format_project_date;

/// A single project tile in the dashboard grid
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/project/{}", project.id);
    let documents_label = if project.document_count == 1 {
        format!("{} document", project.document_count)
    } else {
        format!("{} documents", project.document_count)
    };
    let updated_label = format!("Updated {}", format_project_date(project.last_updated));

    view! {
        <A href=href attr:class="block group">
            <Card class="h-full transition-colors group-hover:border-blue-700">
                <CardBody>
                    <div class="flex items-start justify-between gap-3 mb-4">
                        <h3 class="font-semibold text-gray-100 group-hover:text-blue-300 transition-colors">
                            {project.title.clone()}
                        </h3>
                        <Badge variant=project.category.badge_variant()>
                            {project.category.label()}
                        </Badge>
                    </div>
                    <div class="flex items-center gap-4 text-sm text-gray-400">
                        <span class="flex items-center gap-1.5">
                            <Icon icon=FILES size="14px" />
                            {documents_label}
                        </span>
                        <span class="flex items-center gap-1.5">
                            <Icon icon=CLOCK size="14px" />
                            {updated_label}
                        </span>
                    </div>
                </CardBody>
            </Card>
        </A>
    }
}

/// Dashed placeholder tile linking to the upload page
#[component]
pub fn NewProjectCard() -> impl IntoView {
    view! {
        <A href="/upload" attr:class="block group">
            <div class="h-full min-h-[128px] border-2 border-dashed border-gray-800 rounded-xl p-5 flex flex-col items-center justify-center gap-2 text-gray-500 transition-colors group-hover:border-blue-700 group-hover:text-blue-300">
                <span class="w-10 h-10 rounded-full bg-gray-800 flex items-center justify-center group-hover:bg-blue-900/50 transition-colors">
                    <Icon icon=PLUS size="18px" />
                </span>
                <span class="font-medium">"New Project"</span>
            </div>
        </A>
    }
}
