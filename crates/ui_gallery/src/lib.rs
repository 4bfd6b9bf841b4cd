//! Gallery surface for the shared design system.
//!
//! Renders every component family through `verdant_ui` — each variant,
//! size, and state — plus the token swatches and the serialized theme
//! preset, so visual refinements can be reviewed in a production-shaped
//! consumer without app-local design contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use verdant_ui::prelude::*;
use verdant_ui::tokens;

fn preset_snippet() -> String {
    match serde_json::to_string_pretty(&tokens::PRESET) {
        Ok(serialized) => serialized,
        Err(err) => {
            logging::warn!("preset serialize failed: {err}");
            String::new()
        }
    }
}

fn search_glyph() -> View {
    view! {
        <svg
            class="h-4 w-4"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
        >
            <circle cx="11" cy="11" r="7"></circle>
            <path d="M21 21l-4.35-4.35"></path>
        </svg>
    }
    .into_view()
}

fn arrow_glyph() -> View {
    view! {
        <svg
            class="h-4 w-4"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
        >
            <path d="M5 12h14"></path>
            <path d="M13 6l6 6-6 6"></path>
        </svg>
    }
    .into_view()
}

#[component]
fn GallerySection(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="mb-section-sm">
            <h2 class="mb-4 font-heading text-xl text-gray-900">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn ButtonRows() -> impl IntoView {
    let press_count = create_rw_signal(0u32);

    view! {
        <div class="flex flex-wrap items-center gap-4">
            <Button on_click=Callback::new(move |_| press_count.update(|count| *count += 1))>
                "Primary"
            </Button>
            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
            <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
            <Badge variant=BadgeVariant::Neutral>
                {move || format!("pressed {}", press_count.get())}
            </Badge>
        </div>
        <div class="mt-4 flex flex-wrap items-center gap-4">
            <Button size=ButtonSize::Sm>"Small"</Button>
            <Button size=ButtonSize::Md>"Medium"</Button>
            <Button size=ButtonSize::Lg>"Large"</Button>
            <Button left_icon=ViewFn::from(search_glyph)>"Search"</Button>
            <Button variant=ButtonVariant::Secondary right_icon=ViewFn::from(arrow_glyph)>
                "Continue"
            </Button>
        </div>
        <div class="mt-4 flex flex-wrap items-center gap-4">
            <Button loading=true right_icon=ViewFn::from(arrow_glyph)>
                "Saving"
            </Button>
            <Button disabled=true>"Disabled"</Button>
        </div>
        <div class="mt-4">
            <Button full_width=true>"Full width"</Button>
        </div>
    }
}

#[component]
fn BadgeRows() -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-4">
            <Badge>"Active"</Badge>
            <Badge variant=BadgeVariant::Cyan>"Beta"</Badge>
            <Badge variant=BadgeVariant::Red>"Deprecated"</Badge>
            <Badge variant=BadgeVariant::Neutral>"Draft"</Badge>
            <Badge size=BadgeSize::Sm>"Compact"</Badge>
        </div>
    }
}

#[component]
fn CardRows() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2">
            <Card>
                <h3 class="font-medium text-gray-900">"Plain card"</h3>
                <p class="text-sm text-gray-500">"Default padding, resting elevation."</p>
            </Card>
            <Card interactive=true>
                <h3 class="font-medium text-gray-900">"Interactive card"</h3>
                <p class="text-sm text-gray-500">"Hover to raise and translate."</p>
            </Card>
            <Card padding=CardPadding::None>
                <CardHeader>
                    <h3 class="font-medium text-gray-900">"Sectioned card"</h3>
                </CardHeader>
                <CardBody>
                    <p class="text-sm text-gray-500">
                        "Header, body, and footer pad their own edges, so the seams never double up."
                    </p>
                </CardBody>
                <CardFooter>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>"Dismiss"</Button>
                </CardFooter>
            </Card>
            <Card padding=CardPadding::Lg>
                <h3 class="font-medium text-gray-900">"Spacious card"</h3>
                <p class="text-sm text-gray-500">"Large padding variant."</p>
            </Card>
        </div>
    }
}

#[component]
fn InputRows() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2">
            <Input
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                helper_text="We never share your email"
            />
            <Input
                label="Email"
                input_type="email"
                value="not-an-address"
                error="Invalid email"
                helper_text="We never share your email"
            />
            <Input
                label="Search"
                placeholder="Search the catalog"
                left_icon=ViewFn::from(search_glyph)
                right_icon=ViewFn::from(arrow_glyph)
            />
            <Input label="Locked" value="read only" disabled=true />
        </div>
    }
}

#[component]
fn TokenRows() -> impl IntoView {
    let families = tokens::COLORS.verdant.families();
    let gray_steps = tokens::COLORS.gray.steps();

    view! {
        <div class="flex flex-col gap-6">
            {families
                .into_iter()
                .map(|(name, family)| {
                    view! {
                        <div>
                            <p class="mb-2 text-sm font-medium text-gray-700">{name}</p>
                            <div class="flex flex-wrap gap-2">
                                {family
                                    .shades()
                                    .into_iter()
                                    .map(|(shade, value)| {
                                        view! {
                                            <div
                                                class="h-10 w-10 rounded-md border border-gray-200"
                                                style=format!("background-color: {value}")
                                                title=format!("{name} {shade} {value}")
                                            ></div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div>
                <p class="mb-2 text-sm font-medium text-gray-700">"gray"</p>
                <div class="flex flex-wrap gap-2">
                    {gray_steps
                        .into_iter()
                        .map(|(step, value)| {
                            view! {
                                <div
                                    class="h-10 w-10 rounded-md border border-gray-200"
                                    style=format!("background-color: {value}")
                                    title=format!("gray {step} {value}")
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
/// Full design-system gallery page.
pub fn Gallery() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-container px-6 py-section-sm animate-fade-in">
            <h1 class="mb-8 font-heading text-3xl text-gray-900">"Design system gallery"</h1>
            <GallerySection title="Buttons">
                <ButtonRows/>
            </GallerySection>
            <GallerySection title="Badges">
                <BadgeRows/>
            </GallerySection>
            <GallerySection title="Cards">
                <CardRows/>
            </GallerySection>
            <GallerySection title="Inputs">
                <InputRows/>
            </GallerySection>
            <GallerySection title="Color tokens">
                <TokenRows/>
            </GallerySection>
            <GallerySection title="Theme preset">
                <Card padding=CardPadding::None>
                    <CardBody>
                        <pre class="overflow-x-auto text-xs text-gray-600">{preset_snippet()}</pre>
                    </CardBody>
                </Card>
            </GallerySection>
        </div>
    }
}
