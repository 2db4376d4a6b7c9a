//! Trạng thái thu gọn/mở rộng theo kích thước màn hình.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::{StepId, TimelineStep};

pub const SEE_MORE: &str = "See More";
pub const SEE_LESS: &str = "See Less";

/// Phân loại viewport theo một breakpoint duy nhất.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    /// `width < breakpoint` là màn hình hẹp.
    pub fn classify(width: f64, breakpoint: u32) -> Self {
        if width < f64::from(breakpoint) {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Viewport::Narrow
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Narrow => "narrow",
            Viewport::Wide => "wide",
        }
    }
}

/// Cờ mở rộng của từng bước, mặc định là thu gọn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    flags: BTreeMap<StepId, bool>,
}

impl ExpandedSections {
    pub fn is_expanded(&self, id: StepId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Đảo cờ của đúng một bước.
    pub fn toggle(&mut self, id: StepId) {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
    }

    pub fn toggled(&self, id: StepId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Áp một thao tác lên trạng thái mới nhất.
    pub fn reduce(&self, action: SectionAction) -> Self {
        match action {
            SectionAction::Toggle(id) => self.toggled(id),
        }
    }
}

/// Thao tác người dùng lên cờ mở rộng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    Toggle(StepId),
}

/// Cách hiển thị một bước trong lần render hiện tại.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    pub step: TimelineStep,
    pub expanded: bool,
    pub show_toggle: bool,
    pub body_visible: bool,
    pub toggle_label: &'static str,
}

impl StepView {
    pub fn new(id: StepId, viewport: Viewport, expanded: &ExpandedSections) -> Self {
        let pinned = id.is_always_expanded();
        let is_expanded = expanded.is_expanded(id);

        Self {
            step: TimelineStep::from(id),
            expanded: is_expanded,
            show_toggle: viewport.is_narrow() && !pinned,
            body_visible: !viewport.is_narrow() || pinned || is_expanded,
            toggle_label: if is_expanded { SEE_LESS } else { SEE_MORE },
        }
    }
}

/// Tất cả các bước theo thứ tự hiển thị.
pub fn step_views(viewport: Viewport, expanded: &ExpandedSections) -> Vec<StepView> {
    StepId::ALL
        .into_iter()
        .map(|id| StepView::new(id, viewport, expanded))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_NARROW_BREAKPOINT;

    fn toggles(views: &[StepView]) -> Vec<&'static str> {
        views
            .iter()
            .filter(|view| view.show_toggle)
            .map(|view| view.step.title)
            .collect()
    }

    fn visible(views: &[StepView]) -> Vec<&'static str> {
        views
            .iter()
            .filter(|view| view.body_visible)
            .map(|view| view.step.title)
            .collect()
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(Viewport::classify(767.9, DEFAULT_NARROW_BREAKPOINT), Viewport::Narrow);
        assert_eq!(Viewport::classify(768.0, DEFAULT_NARROW_BREAKPOINT), Viewport::Wide);
        assert_eq!(Viewport::classify(320.0, DEFAULT_NARROW_BREAKPOINT), Viewport::Narrow);
        assert_eq!(Viewport::classify(1024.0, DEFAULT_NARROW_BREAKPOINT), Viewport::Wide);
    }

    #[test]
    fn toggle_touches_only_one_step() {
        let mut expanded = ExpandedSections::default();
        expanded.toggle(StepId::StartContributing);

        for id in StepId::ALL {
            assert_eq!(expanded.is_expanded(id), id == StepId::StartContributing);
        }

        expanded.toggle(StepId::StartContributing);
        assert!(StepId::ALL.into_iter().all(|id| !expanded.is_expanded(id)));
    }

    #[test]
    fn back_to_back_toggles_both_apply() {
        let first = ExpandedSections::default().reduce(SectionAction::Toggle(StepId::JoinDiscord));
        let second = first.reduce(SectionAction::Toggle(StepId::WriteDraft));

        assert!(second.is_expanded(StepId::JoinDiscord));
        assert!(second.is_expanded(StepId::WriteDraft));
        assert!(!second.is_expanded(StepId::StartContributing));

        let collapsed = second.reduce(SectionAction::Toggle(StepId::JoinDiscord));
        assert!(!collapsed.is_expanded(StepId::JoinDiscord));
        assert!(collapsed.is_expanded(StepId::WriteDraft));
    }

    #[test]
    fn narrow_initial_render_collapses_all_but_final() {
        let views = step_views(Viewport::Narrow, &ExpandedSections::default());

        assert_eq!(visible(&views), ["Submit Final Application"]);
        assert_eq!(
            toggles(&views),
            [
                "Join us on Discord",
                "Start Contributing",
                "Write a Draft Application",
                "Discuss with Mentors",
            ]
        );
        assert!(views
            .iter()
            .filter(|view| view.show_toggle)
            .all(|view| view.toggle_label == SEE_MORE));
    }

    #[test]
    fn wide_viewport_shows_everything_without_toggles() {
        let expanded = ExpandedSections::default().toggled(StepId::JoinDiscord);
        let views = step_views(Viewport::Wide, &expanded);

        assert!(toggles(&views).is_empty());
        assert_eq!(visible(&views).len(), 5);
    }

    #[test]
    fn expansion_survives_a_wide_round_trip() {
        let expanded = ExpandedSections::default().toggled(StepId::WriteDraft);

        let narrow = step_views(Viewport::Narrow, &expanded);
        let wide = step_views(Viewport::Wide, &expanded);
        let narrow_again = step_views(Viewport::Narrow, &expanded);

        assert_eq!(visible(&wide).len(), 5);
        assert_eq!(narrow, narrow_again);
        assert_eq!(
            visible(&narrow_again),
            ["Write a Draft Application", "Submit Final Application"]
        );
    }

    #[test]
    fn resize_then_expand_scenario() {
        let mut viewport = Viewport::classify(1024.0, DEFAULT_NARROW_BREAKPOINT);
        let mut expanded = ExpandedSections::default();

        let views = step_views(viewport, &expanded);
        assert!(toggles(&views).is_empty());
        assert_eq!(visible(&views).len(), 5);

        viewport = Viewport::classify(500.0, DEFAULT_NARROW_BREAKPOINT);
        let views = step_views(viewport, &expanded);
        assert_eq!(toggles(&views).len(), 4);
        assert_eq!(visible(&views), ["Submit Final Application"]);

        expanded.toggle(StepId::StartContributing);
        let views = step_views(viewport, &expanded);
        assert_eq!(
            visible(&views),
            ["Start Contributing", "Submit Final Application"]
        );
        let contributing = views
            .iter()
            .find(|view| view.step.id == StepId::StartContributing)
            .expect("thiếu bước Start Contributing");
        assert_eq!(contributing.toggle_label, SEE_LESS);
        assert!(views
            .iter()
            .filter(|view| view.show_toggle && view.step.id != StepId::StartContributing)
            .all(|view| view.toggle_label == SEE_MORE));
    }
}
