//! Panel Layout Component
//!
//! Places the sidebar, main and detail panes according to the arbiter's
//! `PaneLayout`. Main and detail share a positioned region to the right of the
//! sidebar, so percentages are of the remaining width and the narrow-viewport
//! detail overlay stacks above the main pane.

use leptos::prelude::*;
use pane_core::{PaneLayout, PaneSize};

/// Inline style for one pane
pub fn pane_style(size: PaneSize) -> String {
    match size {
        PaneSize::Fixed(px) => format!("width: {px}px; flex: 0 0 {px}px;"),
        PaneSize::Remaining => "flex: 1 1 auto; min-width: 0;".to_string(),
        PaneSize::Percent(pct) => format!("width: {pct}%; flex: 0 0 {pct}%; min-width: 0;"),
        PaneSize::Overlay => "position: absolute; inset: 0; width: 100%; z-index: 10;".to_string(),
        PaneSize::Hidden => "display: none;".to_string(),
    }
}

/// Pane class with an `overlay` modifier for stacked panes
pub fn pane_class(base: &str, size: PaneSize) -> String {
    if size == PaneSize::Overlay {
        format!("pane {base} overlay")
    } else {
        format!("pane {base}")
    }
}

#[component]
pub fn PanelLayout(
    layout: Memo<PaneLayout>,
    #[prop(into)] sidebar: ViewFn,
    #[prop(into)] main: ViewFn,
    #[prop(into)] detail: ViewFn,
) -> impl IntoView {
    let detail_visible = Memo::new(move |_| layout.get().detail.is_visible());

    view! {
        <div class="panel-layout">
            // First pane - Sidebar
            <aside
                class=move || pane_class("pane-sidebar", layout.get().sidebar)
                style=move || pane_style(layout.get().sidebar)
            >
                {sidebar.run()}
            </aside>

            <div class="panel-rest">
                // Second pane - Main content
                <section
                    class=move || pane_class("pane-main", layout.get().main)
                    style=move || pane_style(layout.get().main)
                >
                    {main.run()}
                </section>

                // Third pane - Detail panel
                {move || detail_visible.get().then(|| {
                    let detail = detail.clone();
                    view! {
                        <section
                            class=move || pane_class("pane-detail", layout.get().detail)
                            style=move || pane_style(layout.get().detail)
                        >
                            {move || detail.run()}
                        </section>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_percent_styles() {
        assert_eq!(pane_style(PaneSize::Fixed(256)), "width: 256px; flex: 0 0 256px;");
        assert_eq!(pane_style(PaneSize::Percent(33)), "width: 33%; flex: 0 0 33%; min-width: 0;");
    }

    #[test]
    fn test_hidden_and_overlay() {
        assert_eq!(pane_style(PaneSize::Hidden), "display: none;");
        assert!(pane_style(PaneSize::Overlay).starts_with("position: absolute;"));
        assert_eq!(pane_class("pane-detail", PaneSize::Overlay), "pane pane-detail overlay");
        assert_eq!(pane_class("pane-main", PaneSize::Remaining), "pane pane-main");
    }
}
