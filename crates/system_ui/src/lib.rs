//! Shared UI primitive library for the landing site and the lead form.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the site stylesheet. Pages should compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonType, ButtonVariant, Card, Cluster, Elevation, FieldVariant, Grid,
    Heading, LayoutAlign, LayoutGap, LayoutPadding, Panel, Spinner, Stack, SurfaceVariant, Text,
    TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonType, ButtonVariant, Card, Cluster, Elevation, FieldVariant,
        Grid, Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutPadding, Panel,
        Spinner, Stack, SurfaceVariant, Text, TextField, TextRole, TextTone,
    };
}
