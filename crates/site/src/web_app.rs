use lead_form::LeadForm;
use leptos::*;
use leptos_meta::*;
use system_ui::{
    Card, Cluster, Elevation, Grid, Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap,
    LayoutPadding, Panel, Stack, SurfaceVariant, Text, TextRole, TextTone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const LANDING_STATS: [LandingStat; 4] = [
    LandingStat {
        value: "< 1s",
        label: "Page Load Time",
    },
    LandingStat {
        value: "10M+",
        label: "Successful Users",
    },
    LandingStat {
        value: "100%",
        label: "Data Security",
    },
    LandingStat {
        value: "99.99%",
        label: "Uptime",
    },
];

const FOOTER_NOTICE: &str = "© 2025 High-Traffic Landing Platform. All rights reserved.";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Lightning-Fast Registration" />
        <Meta
            name="description"
            content="Register your mobile number on a high-performance platform built for millions of users."
        />

        <main class="site-root">
            <LandingHero />
            <LeadCard />
            <StatsGrid />
        </main>
        <SiteFooter />
    }
}

#[component]
fn LandingHero() -> impl IntoView {
    view! {
        <header class="landing-hero">
            <Stack gap=LayoutGap::Md align=LayoutAlign::Center>
                <Cluster>
                    <Icon icon=IconName::Zap size=IconSize::Lg layout_class="landing-hero-mark" />
                    <Heading role=TextRole::Display level=1>
                        "Lightning-Fast Registration"
                    </Heading>
                </Cluster>
                <Text role=TextRole::Lead tone=TextTone::Secondary>
                    "Experience our high-performance platform designed for millions of users"
                </Text>
            </Stack>
        </header>
    }
}

#[component]
fn LeadCard() -> impl IntoView {
    view! {
        <Card
            variant=SurfaceVariant::Glass
            elevation=Elevation::Overlay
            padding=LayoutPadding::Lg
            layout_class="landing-lead-card"
            ui_slot="lead"
        >
            <LeadForm />
        </Card>
    }
}

#[component]
fn StatsGrid() -> impl IntoView {
    view! {
        <Grid columns=4 gap=LayoutGap::Md layout_class="landing-stats">
            {LANDING_STATS
                .iter()
                .map(|stat| {
                    view! {
                        <Panel variant=SurfaceVariant::Muted elevation=Elevation::Flat>
                            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                                <Text role=TextRole::Metric tone=TextTone::Accent>
                                    {stat.value}
                                </Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {stat.label}
                                </Text>
                            </Stack>
                        </Panel>
                    }
                })
                .collect_view()}
        </Grid>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {FOOTER_NOTICE}
            </Text>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_keep_their_published_order() {
        let labels: Vec<_> = LANDING_STATS.iter().map(|stat| stat.label).collect();
        assert_eq!(
            labels,
            vec!["Page Load Time", "Successful Users", "Data Security", "Uptime"]
        );
        assert_eq!(LANDING_STATS[3].value, "99.99%");
    }

    #[test]
    fn footer_notice_names_the_platform() {
        assert!(FOOTER_NOTICE.starts_with("© 2025 High-Traffic Landing Platform."));
    }
}
