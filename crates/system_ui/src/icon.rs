//! Centralized icon API rendered as inline stroke SVG.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to primitives and pages.
pub enum IconName {
    /// Handset.
    Phone,
    /// Circled checkmark.
    CheckCircle,
    /// Lightning bolt.
    Zap,
    /// Stacked database cylinder.
    Database,
    /// Shield outline.
    Shield,
    /// Rocket.
    Rocket,
}

impl IconName {
    /// Stable token used in `data-ui-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::CheckCircle => "check-circle",
            Self::Zap => "zap",
            Self::Database => "database",
            Self::Shield => "shield",
            Self::Rocket => "rocket",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.8 19.8 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 \
                 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 \
                 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::Database => &[
                "M3 5c0 1.66 4 3 9 3s9-1.34 9-3-4-3-9-3-9 1.34-9 3",
                "M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5",
                "M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
            ],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.4 22.4 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
    /// 64px hero/confirmation glyph.
    Xl,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 64,
        }
    }
}

#[component]
/// Decorative icon; hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("ui-icon {layout_class}"),
        _ => "ui-icon".to_string(),
    };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width=size.px()
            height=size.px()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconName; 6] = [
        IconName::Phone,
        IconName::CheckCircle,
        IconName::Zap,
        IconName::Database,
        IconName::Shield,
        IconName::Rocket,
    ];

    #[test]
    fn every_icon_has_paths_and_a_unique_token() {
        let mut tokens: Vec<_> = ALL.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), ALL.len());
        for icon in ALL {
            assert!(!icon.paths().is_empty(), "{icon:?}");
            assert!(icon.paths().iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }

    #[test]
    fn sizes_scale_monotonically() {
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert!(IconSize::Md.px() < IconSize::Lg.px());
        assert!(IconSize::Lg.px() < IconSize::Xl.px());
        assert_eq!(IconSize::default(), IconSize::Md);
    }
}
