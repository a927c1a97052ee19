//! Landing page: hero, feature overview, and sign-up call to action

use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, CHART_LINE, CHAT_CIRCLE_TEXT, CHECK, UPLOAD_SIMPLE};

use crate::components::design_system::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardBody, CardDescription,
    CardTitle,
};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4">
            // Hero
            <section class="py-24 text-center">
                <Badge variant=BadgeVariant::Info class="mb-6">"Now in beta"</Badge>
                <h1 class="text-4xl md:text-5xl font-bold text-white leading-tight max-w-3xl mx-auto">
                    "AI-Powered Document Intelligence for Business"
                </h1>
                <p class="text-lg text-gray-400 mt-6 max-w-2xl mx-auto">
                    "Upload contracts, reports, and filings, then ask questions in plain \
                     language. Every answer comes with citations back to the source page."
                </p>
                <div class="mt-10 flex items-center justify-center gap-4">
                    <A href="/signup">
                        <Button size=ButtonSize::Lg on_click=|_| {}>"Get Started Free"</Button>
                    </A>
                    <A href="/login">
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Lg on_click=|_| {}>
                            "Sign In"
                        </Button>
                    </A>
                </div>
            </section>

            // Feature cards
            <section class="pb-20 grid grid-cols-1 md:grid-cols-3 gap-6">
                <FeatureCard
                    title="Upload Documents"
                    description="Bring your business documents into one workspace."
                    bullets=&[
                        "Drag-and-drop or browse to upload",
                        "PDF, Word, and ZIP archives",
                        "Track processing at a glance",
                    ]
                >
                    <Icon icon=UPLOAD_SIMPLE size="24px" />
                </FeatureCard>
                <FeatureCard
                    title="Ask Questions"
                    description="Query your documents in plain language."
                    bullets=&[
                        "Chat-style question and answer",
                        "Answers grounded in your files",
                        "Page-level citations for every claim",
                    ]
                >
                    <Icon icon=CHAT_CIRCLE_TEXT size="24px" />
                </FeatureCard>
                <FeatureCard
                    title="Extract Insights"
                    description="Turn dense reports into decisions."
                    bullets=&[
                        "Organize work into projects",
                        "Filter and sort by category",
                        "Export answers with their sources",
                    ]
                >
                    <Icon icon=CHART_LINE size="24px" />
                </FeatureCard>
            </section>

            // Call to action
            <section class="mb-24 rounded-2xl bg-gradient-to-r from-blue-950 to-gray-900 border border-blue-900/50 px-8 py-14 text-center">
                <h2 class="text-2xl md:text-3xl font-bold text-white">
                    "Ready to understand your documents?"
                </h2>
                <p class="text-gray-400 mt-3 max-w-xl mx-auto">
                    "Create an account and get answers from your first upload in minutes."
                </p>
                <div class="mt-8">
                    <A href="/signup">
                        <Button size=ButtonSize::Lg on_click=|_| {}>"Create an Account"</Button>
                    </A>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    bullets: &'static [&'static str],
    /// Icon rendered in the tinted square
    children: Children,
) -> impl IntoView {
    view! {
        <Card>
            <CardBody class="p-6">
                <div class="w-12 h-12 rounded-lg bg-blue-900/40 text-blue-400 flex items-center justify-center mb-4">
                    {children()}
                </div>
                <CardTitle>{title}</CardTitle>
                <CardDescription class="mt-1 mb-4">{description}</CardDescription>
                <ul class="space-y-2">
                    {bullets
                        .iter()
                        .map(|bullet| {
                            view! {
                                <li class="flex items-start gap-2 text-sm text-gray-300">
                                    <span class="text-green-400 mt-0.5">
                                        <Icon icon=CHECK size="14px" />
                                    </span>
                                    {*bullet}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardBody>
        </Card>
    }
}
