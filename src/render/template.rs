//! Presentation templates with named slots.
//!
//! A [`Template`] is a fixed list of slots addressed by selector, mirroring the
//! markup templates of a web page: the card template exposes an `img` slot, an
//! `h5` title slot and three `p` paragraph slots; the episode template exposes
//! one `.card-title` slot. Rendering clones a template into a
//! [`TemplateNode`] and fills its slots; nothing else about the template is
//! known to the renderer.

use crate::domain::{CharacterId, FacetKind, Failure};

/// What a slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Image,
    Text,
}

/// The value currently assigned to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    Empty,
    Text(String),
    Image { src: String, alt: String },
}

/// One named slot of an instantiated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub selector: &'static str,
    pub kind: SlotKind,
    pub value: SlotValue,
}

/// A fixed presentation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    slots: Vec<(&'static str, SlotKind)>,
}

impl Template {
    /// The character card: image, title and three summary paragraphs.
    #[must_use]
    pub fn card() -> Self {
        Self {
            name: "template-card",
            slots: vec![
                ("img", SlotKind::Image),
                ("h5", SlotKind::Text),
                ("p", SlotKind::Text),
                ("p", SlotKind::Text),
                ("p", SlotKind::Text),
            ],
        }
    }

    /// The episode card: a single title.
    #[must_use]
    pub fn episode() -> Self {
        Self {
            name: "template-episode",
            slots: vec![(".card-title", SlotKind::Text)],
        }
    }

    /// Clones the template into a fresh node with every slot empty.
    #[must_use]
    pub fn instantiate(&self) -> TemplateNode {
        TemplateNode {
            template: self.name,
            slots: self
                .slots
                .iter()
                .map(|&(selector, kind)| Slot {
                    selector,
                    kind,
                    value: SlotValue::Empty,
                })
                .collect(),
            affordances: Vec::new(),
        }
    }
}

/// The pair of templates the renderer works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub card: Template,
    pub episode: Template,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            card: Template::card(),
            episode: Template::episode(),
        }
    }
}

/// Where on a card an affordance lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffordanceTarget {
    /// The whole card body.
    CardBody,
    /// A labelled button.
    Button(String),
}

/// What activating an affordance asks the view state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OpenFacet {
        character: CharacterId,
        facet: FacetKind,
    },
}

/// An interactive element attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub target: AffordanceTarget,
    pub trigger: Trigger,
}

/// An instantiated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    template: &'static str,
    slots: Vec<Slot>,
    affordances: Vec<Affordance>,
}

impl TemplateNode {
    /// Assigns text to the `nth` slot matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns a `RenderError` failure if no such text slot exists.
    pub fn fill_text(
        &mut self,
        selector: &str,
        nth: usize,
        text: impl Into<String>,
    ) -> Result<(), Failure> {
        let slot = self.slot_mut(selector, nth, SlotKind::Text)?;
        slot.value = SlotValue::Text(text.into());
        Ok(())
    }

    /// Assigns an image source and alternative text to the `nth` slot matching
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Returns a `RenderError` failure if no such image slot exists.
    pub fn fill_image(
        &mut self,
        selector: &str,
        nth: usize,
        src: impl Into<String>,
        alt: impl Into<String>,
    ) -> Result<(), Failure> {
        let slot = self.slot_mut(selector, nth, SlotKind::Image)?;
        slot.value = SlotValue::Image {
            src: src.into(),
            alt: alt.into(),
        };
        Ok(())
    }

    pub fn attach(&mut self, affordance: Affordance) {
        self.affordances.push(affordance);
    }

    #[must_use]
    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    /// Text of the `nth` slot matching `selector`, if it holds text.
    #[must_use]
    pub fn text(&self, selector: &str, nth: usize) -> Option<&str> {
        match &self.slot(selector, nth)?.value {
            SlotValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Image source and alt text of the `nth` slot matching `selector`.
    #[must_use]
    pub fn image(&self, selector: &str, nth: usize) -> Option<(&str, &str)> {
        match &self.slot(selector, nth)?.value {
            SlotValue::Image { src, alt } => Some((src.as_str(), alt.as_str())),
            _ => None,
        }
    }

    fn slot(&self, selector: &str, nth: usize) -> Option<&Slot> {
        self.slots.iter().filter(|slot| slot.selector == selector).nth(nth)
    }

    fn slot_mut(
        &mut self,
        selector: &str,
        nth: usize,
        kind: SlotKind,
    ) -> Result<&mut Slot, Failure> {
        let template = self.template;
        self.slots
            .iter_mut()
            .filter(|slot| slot.selector == selector)
            .nth(nth)
            .filter(|slot| slot.kind == kind)
            .ok_or_else(|| {
                Failure::render(format!(
                    "{template} has no {kind:?} slot `{selector}` #{nth}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureReason;

    #[test]
    fn instances_are_independent_clones() {
        let template = Template::card();
        let mut first = template.instantiate();
        first.fill_text("h5", 0, "Goofy").unwrap();

        let second = template.instantiate();
        assert_eq!(first.text("h5", 0), Some("Goofy"));
        assert_eq!(second.text("h5", 0), None);
    }

    #[test]
    fn repeated_selectors_are_addressed_by_position() {
        let mut node = Template::card().instantiate();
        node.fill_text("p", 0, "first").unwrap();
        node.fill_text("p", 2, "third").unwrap();

        assert_eq!(node.text("p", 0), Some("first"));
        assert_eq!(node.text("p", 1), None);
        assert_eq!(node.text("p", 2), Some("third"));
    }

    #[test]
    fn missing_or_mistyped_slots_are_render_errors() {
        let mut node = Template::episode().instantiate();

        let missing = node.fill_text("h5", 0, "x").unwrap_err();
        assert_eq!(missing.reason, FailureReason::RenderError);

        let mistyped = node.fill_image(".card-title", 0, "a.png", "a").unwrap_err();
        assert_eq!(mistyped.reason, FailureReason::RenderError);
    }
}
