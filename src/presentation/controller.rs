use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    core::state::{Control, WidgetState},
    presentation::style::{present, ControlPresentation, Emphasis},
};

/// Applies control presentations to a concrete UI surface
pub trait RenderAdapter {
    fn apply(&mut self, control: Control, presentation: &ControlPresentation);
}

/// Keeps a render adapter in sync with widget state.
///
/// Only controls whose presentation changed since the last render are
/// forwarded to the adapter.
#[derive(Debug)]
pub struct PresentationController<A> {
    adapter: A,
    applied: HashMap<Control, ControlPresentation>,
}

impl<A: RenderAdapter> PresentationController<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            applied: HashMap::new(),
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Last presentation handed to the adapter for `control`
    pub fn applied(&self, control: Control) -> Option<&ControlPresentation> {
        self.applied.get(&control)
    }

    /// Render both controls; returns how many were re-applied
    pub fn render(&mut self, state: &WidgetState) -> usize {
        let mut changed = 0;
        for control in Control::iter() {
            let presentation = present(control, state.control(control));
            if self.applied.get(&control) == Some(&presentation) {
                continue;
            }
            self.adapter.apply(control, &presentation);
            self.applied.insert(control, presentation);
            changed += 1;
        }
        changed
    }
}

/// Stable identifiers of the four host elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub like_button: String,
    pub like_icon: String,
    pub dislike_button: String,
    pub dislike_icon: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            like_button: "like-btn".to_string(),
            like_icon: "like-icon".to_string(),
            dislike_button: "dislike-btn".to_string(),
            dislike_icon: "dislike-icon".to_string(),
        }
    }
}

impl ElementIds {
    pub fn button(&self, control: Control) -> &str {
        match control {
            Control::Like => &self.like_button,
            Control::Dislike => &self.dislike_button,
        }
    }

    pub fn icon(&self, control: Control) -> &str {
        match control {
            Control::Like => &self.like_icon,
            Control::Dislike => &self.dislike_icon,
        }
    }
}

/// Element registry modelling class lists of host elements.
///
/// Applying a presentation swaps the emphasis class on the button and the
/// icon variant class on the icon; unrelated classes are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ClassListAdapter {
    ids: ElementIds,
    elements: HashMap<String, BTreeSet<String>>,
}

impl ClassListAdapter {
    pub fn new(ids: ElementIds) -> Self {
        let elements = [
            &ids.like_button,
            &ids.like_icon,
            &ids.dislike_button,
            &ids.dislike_icon,
        ]
        .into_iter()
        .map(|id| (id.clone(), BTreeSet::new()))
        .collect();
        Self { ids, elements }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Add a class to an element, as the host page would for its own styling
    pub fn add_class(&mut self, id: &str, class: &str) {
        self.elements
            .entry(id.to_string())
            .or_default()
            .insert(class.to_string());
    }

    pub fn classes(&self, id: &str) -> Vec<&str> {
        self.elements
            .get(id)
            .map(|classes| classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|classes| classes.contains(class))
    }

    fn swap(&mut self, id: &str, remove: &[&str], add: &str) {
        let classes = self.elements.entry(id.to_string()).or_default();
        for class in remove {
            classes.remove(*class);
        }
        classes.insert(add.to_string());
    }
}

impl RenderAdapter for ClassListAdapter {
    fn apply(&mut self, control: Control, presentation: &ControlPresentation) {
        let button = self.ids.button(control).to_string();
        let icon = self.ids.icon(control).to_string();

        let emphasis_classes = Emphasis::ALL.map(Emphasis::class_name);
        self.swap(
            &button,
            &emphasis_classes,
            presentation.emphasis.class_name(),
        );

        let icon_classes = presentation.icon.variants().map(|icon| icon.class_name());
        self.swap(&icon, &icon_classes, presentation.icon.class_name());
    }
}

/// Holds the latest presentation of each control for the terminal view
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    presentations: HashMap<Control, ControlPresentation>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presentation(&self, control: Control) -> Option<&ControlPresentation> {
        self.presentations.get(&control)
    }
}

impl RenderAdapter for TerminalSurface {
    fn apply(&mut self, control: Control, presentation: &ControlPresentation) {
        self.presentations.insert(control, *presentation);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{msg::Msg, update::update};

    #[derive(Default)]
    struct CountingAdapter {
        calls: Vec<(Control, ControlPresentation)>,
    }

    impl RenderAdapter for CountingAdapter {
        fn apply(&mut self, control: Control, presentation: &ControlPresentation) {
            self.calls.push((control, *presentation));
        }
    }

    #[test]
    fn test_first_render_applies_both_controls() {
        let mut controller = PresentationController::new(CountingAdapter::default());
        assert_eq!(controller.render(&WidgetState::new()), 2);
        assert_eq!(controller.adapter().calls.len(), 2);
    }

    #[test]
    fn test_render_skips_unchanged_controls() {
        let mut controller = PresentationController::new(CountingAdapter::default());
        let state = WidgetState::new();
        controller.render(&state);

        assert_eq!(controller.render(&state), 0);

        let (state, _) = update(Msg::PointerEntered(Control::Dislike), state);
        assert_eq!(controller.render(&state), 1);
        let (control, presentation) = controller.adapter().calls[2];
        assert_eq!(control, Control::Dislike);
        assert_eq!(presentation.emphasis, Emphasis::Danger);
    }

    #[test]
    fn test_class_list_initial_render() {
        let mut controller = PresentationController::new(ClassListAdapter::new(ElementIds::default()));
        controller.render(&WidgetState::new());

        let adapter = controller.adapter();
        assert_eq!(adapter.classes("like-btn"), vec!["btn-primary"]);
        assert_eq!(adapter.classes("like-icon"), vec!["bi-hand-thumbs-up"]);
        assert_eq!(adapter.classes("dislike-btn"), vec!["btn-primary"]);
        assert_eq!(adapter.classes("dislike-icon"), vec!["bi-hand-thumbs-down"]);
    }

    #[test]
    fn test_class_list_after_like_then_dislike() {
        let mut controller = PresentationController::new(ClassListAdapter::new(ElementIds::default()));
        let state = WidgetState::new();
        controller.render(&state);

        let (state, _) = update(Msg::Clicked(Control::Like), state);
        controller.render(&state);
        assert_eq!(controller.adapter().classes("like-btn"), vec!["btn-success"]);
        assert_eq!(
            controller.adapter().classes("like-icon"),
            vec!["bi-hand-thumbs-up-fill"]
        );

        let (state, _) = update(Msg::Clicked(Control::Dislike), state);
        controller.render(&state);
        let adapter = controller.adapter();
        assert_eq!(adapter.classes("like-btn"), vec!["btn-primary"]);
        assert_eq!(adapter.classes("like-icon"), vec!["bi-hand-thumbs-up"]);
        assert_eq!(adapter.classes("dislike-btn"), vec!["btn-danger"]);
        assert_eq!(adapter.classes("dislike-icon"), vec!["bi-hand-thumbs-down-fill"]);
    }

    #[test]
    fn test_class_list_keeps_host_classes() {
        let mut adapter = ClassListAdapter::new(ElementIds::default());
        adapter.add_class("like-btn", "btn");
        adapter.add_class("like-btn", "btn-primary");
        let mut controller = PresentationController::new(adapter);

        let (state, _) = update(Msg::Clicked(Control::Like), WidgetState::new());
        controller.render(&state);

        let adapter = controller.adapter();
        assert!(adapter.has_class("like-btn", "btn"));
        assert!(adapter.has_class("like-btn", "btn-success"));
        assert!(!adapter.has_class("like-btn", "btn-primary"));
    }

    #[test]
    fn test_custom_element_ids() {
        let ids = ElementIds {
            like_button: "up".to_string(),
            like_icon: "up-icon".to_string(),
            dislike_button: "down".to_string(),
            dislike_icon: "down-icon".to_string(),
        };
        let mut controller = PresentationController::new(ClassListAdapter::new(ids));
        controller.render(&WidgetState::new());
        assert!(controller.adapter().has_class("down-icon", "bi-hand-thumbs-down"));
        assert!(controller.adapter().classes("like-btn").is_empty());
    }

    #[test]
    fn test_terminal_surface_tracks_latest() {
        let mut controller = PresentationController::new(TerminalSurface::new());
        let (state, _) = update(Msg::Clicked(Control::Dislike), WidgetState::new());
        controller.render(&state);
        let presentation = controller
            .adapter()
            .presentation(Control::Dislike)
            .copied();
        assert_eq!(presentation.map(|p| p.emphasis), Some(Emphasis::Danger));
    }
}
